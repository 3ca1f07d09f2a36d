//! # ProjectItem
//!
//! One card on the board. Dragging it carries the project id as a
//! `text/plain` payload with a "move" effect.

use std::rc::{Rc, Weak};

use log::{debug, warn};

use crate::board::component::{Component, Draggable, Mount, MountState};
use crate::core::project::Project;
use crate::page::markup::SINGLE_PROJECT;
use crate::page::{EffectAllowed, Event, EventKind, InsertPosition, Page, PageError, TEXT_PLAIN};

pub struct ProjectItem {
    mount: Mount,
    project: Project,
    me: Weak<ProjectItem>,
}

impl ProjectItem {
    /// Mount a card for `project` at the end of the list with id `host_id`.
    pub fn new(page: &Page, host_id: &str, project: Project) -> Result<Rc<Self>, PageError> {
        let mount = Mount::new(
            page,
            SINGLE_PROJECT,
            host_id,
            InsertPosition::BeforeEnd,
            Some(&project.id),
        )?;
        let item = Rc::new_cyclic(|me| ProjectItem {
            mount,
            project,
            me: me.clone(),
        });
        item.mount()?;
        Ok(item)
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn mount_state(&self) -> MountState {
        self.mount.state()
    }

    /// Register `handler` on the card root, bound to this card.
    fn bind(
        &self,
        kind: EventKind,
        handler: fn(&ProjectItem, &mut Event),
    ) -> Result<(), PageError> {
        let me = self.me.clone();
        self.mount
            .page()
            .add_event_listener(self.mount.element(), kind, move |event| {
                if let Some(item) = me.upgrade() {
                    handler(&item, event);
                }
            })
    }
}

impl Draggable for ProjectItem {
    fn drag_start_handler(&self, event: &mut Event) {
        let Some(data_transfer) = event.data_transfer.as_mut() else {
            warn!("Drag start on {} without a data transfer", self.project.id);
            return;
        };
        data_transfer.set_data(TEXT_PLAIN, self.project.id.clone());
        data_transfer.effect_allowed = EffectAllowed::Move;
        debug!("Drag started for project {}", self.project.id);
    }

    fn drag_end_handler(&self, _event: &mut Event) {}
}

impl Component for ProjectItem {
    fn base(&self) -> &Mount {
        &self.mount
    }

    fn configure(&self) -> Result<(), PageError> {
        self.bind(EventKind::DragStart, Self::drag_start_handler)?;
        self.bind(EventKind::DragEnd, Self::drag_end_handler)
    }

    fn render_content(&self) -> Result<(), PageError> {
        let page = self.mount.page();
        page.set_text(self.mount.find("h2")?, &self.project.title)?;
        page.set_text(
            self.mount.find("h3")?,
            &format!("{} assigned", self.project.persons()),
        )?;
        page.set_text(self.mount.find("p")?, &self.project.description)
    }
}
