//! Page events and the drag payload they carry.

/// MIME type of the only drag payload the board understands.
pub const TEXT_PLAIN: &str = "text/plain";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Submit,
    DragStart,
    DragEnd,
    DragOver,
    DragLeave,
    Drop,
}

/// Which drag operations the source allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EffectAllowed {
    None,
    Copy,
    Move,
    #[default]
    All,
}

/// Payload of a drag session: typed entries in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTransfer {
    entries: Vec<(String, String)>,
    pub effect_allowed: EffectAllowed,
}

impl DataTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the data for `format`, replacing any existing entry in place.
    pub fn set_data(&mut self, format: &str, data: impl Into<String>) {
        let data = data.into();
        match self.entries.iter_mut().find(|(f, _)| f == format) {
            Some(entry) => entry.1 = data,
            None => self.entries.push((format.to_string(), data)),
        }
    }

    /// Data stored for `format`, or an empty string.
    pub fn get_data(&self, format: &str) -> String {
        self.entries
            .iter()
            .find(|(f, _)| f == format)
            .map(|(_, d)| d.clone())
            .unwrap_or_default()
    }

    /// Advertised formats, in the order they were set.
    pub fn types(&self) -> Vec<&str> {
        self.entries.iter().map(|(f, _)| f.as_str()).collect()
    }
}

/// An event dispatched to page elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub kind: EventKind,
    pub data_transfer: Option<DataTransfer>,
    default_prevented: bool,
}

impl Event {
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            data_transfer: None,
            default_prevented: false,
        }
    }

    pub fn drag(kind: EventKind, data_transfer: DataTransfer) -> Self {
        Self {
            kind,
            data_transfer: Some(data_transfer),
            default_prevented: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
