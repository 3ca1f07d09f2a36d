//! # Controller
//!
//! Turns terminal input into page events, the way a browser turns mouse
//! and keyboard input into DOM events.
//!
//! ## Focus
//!
//! ```text
//! Title ─Tab─► Description ─Tab─► People ─Tab─► Board ─Tab─► Title
//! ```
//!
//! In a field, typing edits the page input's value and Enter dispatches
//! `Submit` on the form. On the board, arrows move the cursor and Space
//! picks up the selected card.
//!
//! ## Drag Session
//!
//! ```text
//! Space   DragStart(card)  → DragOver(column)
//! ←/→     DragLeave(old)   → DragOver(new)
//! Enter   Drop(column)*    → DragLeave(column) → DragEnd(card)†
//! Esc     DragLeave(column) → DragEnd(card)†
//!
//! * only if the last DragOver was accepted (default prevented)
//! † only if the card element still exists
//! ```
//!
//! ## Alerts
//!
//! A pending page alert blocks everything else: the next key only closes
//! it. Ctrl+C always quits.

use log::{debug, info};

use crate::board::{Board, Component as _};
use crate::core::project::ProjectStatus;
use crate::page::{DataTransfer, Event, EventKind, NodeId, Page, TEXT_PLAIN};
use crate::tui::components::ColumnPanelState;
use crate::tui::event::TuiEvent;
use crate::tui::view::column_index;

/// Index of the people field in `ProjectInput::fields`.
const PEOPLE_FIELD: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(usize),
    Board,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Field(i) if i < PEOPLE_FIELD => Focus::Field(i + 1),
            Focus::Field(_) => Focus::Board,
            Focus::Board => Focus::Field(0),
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Field(0) => Focus::Board,
            Focus::Field(i) => Focus::Field(i - 1),
            Focus::Board => Focus::Field(PEOPLE_FIELD),
        }
    }
}

/// A card in flight.
#[derive(Debug, Clone)]
pub struct DragSession {
    pub source: NodeId,
    pub project_id: String,
    pub title: String,
    pub data_transfer: DataTransfer,
    /// Column the drag is over.
    pub hover: ProjectStatus,
    /// Whether the hovered column accepted the last DragOver.
    pub accepted: bool,
}

/// TUI-specific presentation state (not part of the page or the store)
pub struct TuiState {
    pub focus: Focus,
    /// Column under the board cursor.
    pub column: ProjectStatus,
    /// Selected card per column.
    pub selected: [usize; 2],
    pub drag: Option<DragSession>,
    /// Alert being shown (taken from the page).
    pub alert: Option<String>,
    pub status_message: String,
    pub panels: [ColumnPanelState; 2],
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            focus: Focus::Field(0), // User expects to type immediately
            column: ProjectStatus::Active,
            selected: [0, 0],
            drag: None,
            alert: None,
            status_message: String::from("Welcome to Dragboard!"),
            panels: Default::default(),
        }
    }

    pub fn focused_field(&self) -> Option<usize> {
        match self.focus {
            Focus::Field(i) => Some(i),
            Focus::Board => None,
        }
    }

    /// Selected card of `kind`, when the board cursor is on that column.
    pub fn selected_card(&self, kind: ProjectStatus, card_count: usize) -> Option<usize> {
        (self.focus == Focus::Board && self.column == kind && card_count > 0)
            .then(|| self.selected[column_index(kind)].min(card_count - 1))
    }

    /// Handle one input event. Returns true when the app should quit.
    pub fn handle_event(&mut self, page: &Page, board: &Board, event: TuiEvent) -> bool {
        if event == TuiEvent::ForceQuit {
            return true;
        }
        if event == TuiEvent::Resize {
            return false;
        }
        if let Some(alert) = self.alert.take() {
            debug!("Dismissed alert: {}", alert);
            self.sync(page, board);
            return false;
        }

        let quit = match self.focus {
            Focus::Field(index) => {
                self.handle_form_event(page, board, index, event);
                false
            }
            Focus::Board => self.handle_board_event(page, board, event),
        };
        self.sync(page, board);
        quit
    }

    /// Pull the next pending alert and clamp selections to the columns.
    pub fn sync(&mut self, page: &Page, board: &Board) {
        if self.alert.is_none() {
            self.alert = page.take_alert();
        }
        for kind in ProjectStatus::ALL {
            let len = board.column(kind).items().len();
            let selected = &mut self.selected[column_index(kind)];
            *selected = (*selected).min(len.saturating_sub(1));
        }
    }

    fn handle_form_event(&mut self, page: &Page, board: &Board, index: usize, event: TuiEvent) {
        let field = board.input.fields()[index];
        let accepts = |c: char| index != PEOPLE_FIELD || c.is_ascii_digit();
        let mut value = page.value(field).unwrap_or_default();

        match event {
            TuiEvent::NextFocus => {
                self.focus = self.focus.next();
                return;
            }
            TuiEvent::PrevFocus => {
                self.focus = self.focus.prev();
                return;
            }
            TuiEvent::Escape => {
                self.focus = Focus::Board;
                return;
            }
            TuiEvent::InputChar(c) => {
                if accepts(c) {
                    value.push(c);
                }
            }
            TuiEvent::Paste(text) => {
                value.extend(text.chars().filter(|c| !c.is_control() && accepts(*c)));
            }
            TuiEvent::Backspace => {
                value.pop();
            }
            TuiEvent::Submit => {
                self.submit(page, board);
                return;
            }
            _ => return,
        }
        if let Err(e) = page.set_value(field, &value) {
            log::warn!("Failed to edit field {}: {}", index, e);
        }
    }

    fn submit(&mut self, page: &Page, board: &Board) {
        let before = board.store.len();
        page.dispatch(board.input.element(), &mut Event::new(EventKind::Submit));
        if board.store.len() > before {
            self.status_message = String::from("Added project");
            self.focus = Focus::Field(0);
        } else {
            self.status_message = String::from("Project not added");
        }
    }

    fn handle_board_event(&mut self, page: &Page, board: &Board, event: TuiEvent) -> bool {
        let dragging = self.drag.is_some();
        match event {
            TuiEvent::InputChar('q') if !dragging => return true,
            TuiEvent::NextFocus if !dragging => self.focus = self.focus.next(),
            TuiEvent::PrevFocus if !dragging => self.focus = self.focus.prev(),
            TuiEvent::Left => self.move_to(page, board, ProjectStatus::Active),
            TuiEvent::Right => self.move_to(page, board, ProjectStatus::Finished),
            TuiEvent::Up if !dragging => {
                let selected = &mut self.selected[column_index(self.column)];
                *selected = selected.saturating_sub(1);
            }
            TuiEvent::Down if !dragging => {
                let len = board.column(self.column).items().len();
                let selected = &mut self.selected[column_index(self.column)];
                if *selected + 1 < len {
                    *selected += 1;
                }
            }
            TuiEvent::InputChar(' ') if !dragging => self.pick_up(page, board),
            TuiEvent::Submit if dragging => self.drop_card(page, board),
            TuiEvent::Escape if dragging => self.cancel_drag(page, board),
            _ => {}
        }
        false
    }

    fn move_to(&mut self, page: &Page, board: &Board, kind: ProjectStatus) {
        let Some(drag) = self.drag.as_ref() else {
            self.column = kind;
            return;
        };
        if drag.hover == kind {
            return;
        }
        let mut leave = Event::drag(EventKind::DragLeave, drag.data_transfer.clone());
        page.dispatch(board.column(drag.hover).element(), &mut leave);
        self.drag_over(page, board, kind);
    }

    fn drag_over(&mut self, page: &Page, board: &Board, kind: ProjectStatus) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        let mut event = Event::drag(EventKind::DragOver, drag.data_transfer.clone());
        drag.hover = kind;
        drag.accepted = !page.dispatch(board.column(kind).element(), &mut event);
        self.column = kind;
    }

    fn pick_up(&mut self, page: &Page, board: &Board) {
        let items = board.column(self.column).items();
        let Some(item) = items.get(self.selected[column_index(self.column)]) else {
            return;
        };
        let source = item.base().element();
        let mut event = Event::drag(EventKind::DragStart, DataTransfer::new());
        page.dispatch(source, &mut event);

        let Some(data_transfer) = event.data_transfer.filter(|dt| !dt.types().is_empty()) else {
            self.status_message = String::from("Nothing to drag");
            return;
        };
        let project_id = data_transfer.get_data(TEXT_PLAIN);
        info!("Picked up project {}", project_id);
        self.status_message = String::from("Picked up");
        self.drag = Some(DragSession {
            source,
            project_id,
            title: item.project().title.clone(),
            data_transfer,
            hover: self.column,
            accepted: false,
        });
        self.drag_over(page, board, self.column);
    }

    fn drop_card(&mut self, page: &Page, board: &Board) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        let target = board.column(drag.hover);

        if drag.accepted {
            let mut drop = Event::drag(EventKind::Drop, drag.data_transfer.clone());
            page.dispatch(target.element(), &mut drop);
            self.status_message = format!("Dropped '{}' on {}", drag.title, drag.hover);
        } else {
            self.status_message = String::from("Cannot drop here");
        }
        self.end_drag(page, board, &drag);

        if let Some(position) = target
            .items()
            .iter()
            .position(|item| item.project().id == drag.project_id)
        {
            self.selected[column_index(drag.hover)] = position;
        }
    }

    fn cancel_drag(&mut self, page: &Page, board: &Board) {
        if let Some(drag) = self.drag.take() {
            self.end_drag(page, board, &drag);
            self.status_message = String::from("Drag cancelled");
        }
    }

    fn end_drag(&self, page: &Page, board: &Board, drag: &DragSession) {
        let mut leave = Event::drag(EventKind::DragLeave, drag.data_transfer.clone());
        page.dispatch(board.column(drag.hover).element(), &mut leave);
        if page.contains(drag.source) {
            let mut end = Event::drag(EventKind::DragEnd, drag.data_transfer.clone());
            page.dispatch(drag.source, &mut end);
        }
    }
}
