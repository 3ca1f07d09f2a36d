//! # ProjectList
//!
//! A column of cards for one `ProjectStatus`, and a drop target for cards.
//!
//! ## Data Flow
//!
//! ```text
//! store notifies ──► filter by status ──► assigned ──► rebuild cards
//!       ▲                                                   │
//!       └───────────── move_project ◄── drop ◄── drag ◄─────┘
//! ```
//!
//! Rebuilding always clears the list element and mounts one fresh
//! `ProjectItem` per assigned project, in store order. There is no diffing.
//!
//! ## Page Ids
//!
//! - root: `<kind>-projects`
//! - list: `<kind>-projects-list`, carrying `droppable` while a valid drag
//!   hovers over the column

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, warn};

use crate::board::component::{Component, DragTarget, Mount, MountState};
use crate::board::item::ProjectItem;
use crate::core::project::{Project, ProjectStatus};
use crate::core::state::ProjectState;
use crate::page::markup::{APP_HOST, PROJECT_LIST};
use crate::page::{Event, EventKind, InsertPosition, NodeId, Page, PageError, TEXT_PLAIN};

/// Class set on the list element while a drop is possible.
pub const DROPPABLE: &str = "droppable";

pub struct ProjectList {
    mount: Mount,
    kind: ProjectStatus,
    store: Rc<ProjectState>,
    assigned: RefCell<Vec<Project>>,
    items: RefCell<Vec<Rc<ProjectItem>>>,
    me: Weak<ProjectList>,
}

impl ProjectList {
    /// Mount a column at the end of the app host and subscribe it to `store`.
    pub fn new(
        page: &Page,
        store: &Rc<ProjectState>,
        kind: ProjectStatus,
    ) -> Result<Rc<Self>, PageError> {
        let mount = Mount::new(
            page,
            PROJECT_LIST,
            APP_HOST,
            InsertPosition::BeforeEnd,
            Some(&root_id(kind)),
        )?;
        let list = Rc::new_cyclic(|me| ProjectList {
            mount,
            kind,
            store: store.clone(),
            assigned: RefCell::new(Vec::new()),
            items: RefCell::new(Vec::new()),
            me: me.clone(),
        });
        list.mount()?;
        Ok(list)
    }

    pub fn kind(&self) -> ProjectStatus {
        self.kind
    }

    pub fn element(&self) -> NodeId {
        self.mount.element()
    }

    pub fn list_element(&self) -> Result<NodeId, PageError> {
        self.mount.find("ul")
    }

    pub fn mount_state(&self) -> MountState {
        self.mount.state()
    }

    /// Projects currently shown, in store order.
    pub fn assigned(&self) -> Vec<Project> {
        self.assigned.borrow().clone()
    }

    /// The cards currently mounted.
    pub fn items(&self) -> Vec<Rc<ProjectItem>> {
        self.items.borrow().clone()
    }

    fn on_projects(&self, projects: Vec<Project>) {
        let assigned: Vec<Project> = projects
            .into_iter()
            .filter(|p| p.status == self.kind)
            .collect();
        *self.assigned.borrow_mut() = assigned;
        if let Err(e) = self.render_projects() {
            warn!("Failed to rebuild {} column: {}", self.kind, e);
        }
    }

    fn render_projects(&self) -> Result<(), PageError> {
        let page = self.mount.page();
        let list_id = list_id(self.kind);
        let list = page
            .get_element_by_id(&list_id)
            .ok_or_else(|| PageError::MissingElement(format!("#{list_id}")))?;

        page.clear_children(list)?;
        self.items.borrow_mut().clear();

        let assigned = self.assigned.borrow().clone();
        let mut items = Vec::with_capacity(assigned.len());
        for project in assigned {
            items.push(ProjectItem::new(page, &list_id, project)?);
        }
        debug!("Rebuilt {} column with {} cards", self.kind, items.len());
        *self.items.borrow_mut() = items;
        Ok(())
    }

    fn bind(&self, kind: EventKind, handler: fn(&ProjectList, &mut Event)) -> Result<(), PageError> {
        let me = self.me.clone();
        self.mount
            .page()
            .add_event_listener(self.mount.element(), kind, move |event| {
                if let Some(list) = me.upgrade() {
                    handler(&list, event);
                }
            })
    }

    fn set_droppable(&self, on: bool) {
        let page = self.mount.page();
        let result = self.list_element().and_then(|list| {
            if on {
                page.add_class(list, DROPPABLE)
            } else {
                page.remove_class(list, DROPPABLE)
            }
        });
        if let Err(e) = result {
            warn!("Failed to toggle droppable on {} column: {}", self.kind, e);
        }
    }
}

/// `<kind>-projects`
pub fn root_id(kind: ProjectStatus) -> String {
    format!("{}-projects", kind.as_str())
}

/// `<kind>-projects-list`
pub fn list_id(kind: ProjectStatus) -> String {
    format!("{}-projects-list", kind.as_str())
}

impl DragTarget for ProjectList {
    fn drag_over_handler(&self, event: &mut Event) {
        // Only the first advertised type counts as the payload type.
        let is_project = event
            .data_transfer
            .as_ref()
            .is_some_and(|dt| dt.types().first() == Some(&TEXT_PLAIN));
        if is_project {
            event.prevent_default();
            self.set_droppable(true);
        }
    }

    fn drop_handler(&self, event: &mut Event) {
        let Some(dt) = event.data_transfer.as_ref() else {
            return;
        };
        if !dt.types().contains(&TEXT_PLAIN) {
            debug!("Ignoring drop without a {} payload", TEXT_PLAIN);
            return;
        }
        let project_id = dt.get_data(TEXT_PLAIN);
        debug!("Drop of {} on {} column", project_id, self.kind);
        self.store.move_project(&project_id, self.kind);
    }

    fn drag_leave_handler(&self, _event: &mut Event) {
        self.set_droppable(false);
    }
}

impl Component for ProjectList {
    fn base(&self) -> &Mount {
        &self.mount
    }

    fn configure(&self) -> Result<(), PageError> {
        self.bind(EventKind::DragOver, Self::drag_over_handler)?;
        self.bind(EventKind::Drop, Self::drop_handler)?;
        self.bind(EventKind::DragLeave, Self::drag_leave_handler)?;

        let me = self.me.clone();
        self.store.add_listener(move |projects| {
            if let Some(list) = me.upgrade() {
                list.on_projects(projects);
            }
        });
        Ok(())
    }

    fn render_content(&self) -> Result<(), PageError> {
        let page = self.mount.page();
        page.set_id(self.list_element()?, &list_id(self.kind))?;
        page.set_text(
            self.mount.find("h2")?,
            &format!("{} PROJECTS", self.kind.as_str().to_uppercase()),
        )
    }
}
