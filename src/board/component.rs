use std::cell::Cell;

use log::trace;

use crate::page::{Event, InsertPosition, NodeId, Page, PageError};

/// Where a component is in its one-way mount lifecycle.
///
/// The element is inserted into its host by `Mount::new`, while the state is
/// still `Unmounted`. `Attached` marks the end of the lifecycle, not the
/// moment of insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MountState {
    Unmounted,
    Configured,
    Rendered,
    Attached,
}

/// The template-backed element a component owns.
///
/// Construction clones the template, stamps the optional id and attaches the
/// clone to its host, so the element is on the page before the component
/// wires or fills it.
pub struct Mount {
    page: Page,
    host: NodeId,
    element: NodeId,
    state: Cell<MountState>,
}

impl Mount {
    pub fn new(
        page: &Page,
        template_id: &str,
        host_id: &str,
        position: InsertPosition,
        new_element_id: Option<&str>,
    ) -> Result<Self, PageError> {
        let host = page
            .get_element_by_id(host_id)
            .ok_or_else(|| PageError::UnknownHost(host_id.to_string()))?;
        let element = page.import_template(template_id)?;
        if let Some(id) = new_element_id {
            page.set_id(element, id)?;
        }
        page.insert_adjacent(host, position, element)?;
        trace!("Mounted '{}' into '{}' as {:?}", template_id, host_id, element);

        Ok(Self {
            page: page.clone(),
            host,
            element,
            state: Cell::new(MountState::Unmounted),
        })
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn host(&self) -> NodeId {
        self.host
    }

    /// Root of the cloned template.
    pub fn element(&self) -> NodeId {
        self.element
    }

    pub fn state(&self) -> MountState {
        self.state.get()
    }

    /// First element below the root matching `selector`.
    pub fn find(&self, selector: &str) -> Result<NodeId, PageError> {
        self.page.require(self.element, selector)
    }

    fn advance(&self, next: MountState) {
        debug_assert!(next > self.state.get(), "mount state only moves forward");
        self.state.set(next);
    }
}

/// A page component built on a `Mount`.
pub trait Component {
    fn base(&self) -> &Mount;

    /// Wire event handlers and subscriptions.
    fn configure(&self) -> Result<(), PageError>;

    /// Fill the cloned template with content.
    fn render_content(&self) -> Result<(), PageError>;

    /// Run the lifecycle hooks in order. Called once, at the end of the
    /// concrete constructor.
    fn mount(&self) -> Result<(), PageError> {
        self.configure()?;
        self.base().advance(MountState::Configured);
        self.render_content()?;
        self.base().advance(MountState::Rendered);
        self.base().advance(MountState::Attached);
        Ok(())
    }
}

/// Something that can be picked up and dragged.
pub trait Draggable {
    fn drag_start_handler(&self, event: &mut Event);
    fn drag_end_handler(&self, event: &mut Event);
}

/// Something a drag can be dropped on.
pub trait DragTarget {
    fn drag_over_handler(&self, event: &mut Event);
    fn drop_handler(&self, event: &mut Event);
    fn drag_leave_handler(&self, event: &mut Event);
}
