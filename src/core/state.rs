//! # Project Store
//!
//! The single mutation point for board data. Components never touch the
//! project list directly; they call `add_project` / `move_project` and learn
//! about changes through listeners.
//!
//! ```text
//! ProjectState
//! ├── projects: Vec<Project>          // insertion order, never reordered
//! └── listeners: Listeners<Project>   // registration order
//! ```
//!
//! Every mutation ends with `notify()`, which calls each listener in turn
//! with its own copy of the list. A listener can do whatever it likes with
//! that copy without affecting the store or the next listener.
//!
//! The store is built once at startup and shared by `Rc`. Everything runs on
//! one thread inside event callbacks, so interior mutability is enough. A
//! listener must not call back into `add_project` / `move_project`.

use std::cell::RefCell;

use log::debug;

use crate::core::project::{Project, ProjectStatus, new_project_id};

/// Callback invoked with a snapshot of the items after every change.
pub type Listener<T> = Box<dyn FnMut(Vec<T>)>;

/// Publish/subscribe list of listeners.
pub struct Listeners<T> {
    listeners: RefCell<Vec<Listener<T>>>,
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self {
            listeners: RefCell::new(Vec::new()),
        }
    }
}

impl<T: Clone> Listeners<T> {
    /// Register a listener. It is not called until the next change.
    pub fn add_listener(&self, listener: impl FnMut(Vec<T>) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Call every listener in registration order, each with a fresh copy.
    fn notify(&self, items: &[T]) {
        for listener in self.listeners.borrow_mut().iter_mut() {
            listener(items.to_vec());
        }
    }
}

#[derive(Default)]
pub struct ProjectState {
    projects: RefCell<Vec<Project>>,
    listeners: Listeners<Project>,
}

impl ProjectState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&self, listener: impl FnMut(Vec<Project>) + 'static) {
        self.listeners.add_listener(listener);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Append a new Active project and notify. Input is assumed validated.
    ///
    /// Returns the generated id.
    pub fn add_project(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> String {
        let project = Project::new(new_project_id(), title.into(), description.into(), people);
        let id = project.id.clone();
        debug!("Adding project {} ({:?})", id, project.title);
        self.projects.borrow_mut().push(project);
        self.notify();
        id
    }

    /// Set the status of the project with `id`, then notify.
    ///
    /// Listeners are notified even when the id is unknown or the status is
    /// already `new_status`.
    pub fn move_project(&self, id: &str, new_status: ProjectStatus) {
        {
            let mut projects = self.projects.borrow_mut();
            match projects.iter_mut().find(|p| p.id == id) {
                Some(project) if project.status != new_status => {
                    debug!("Moving project {} {} -> {}", id, project.status, new_status);
                    project.status = new_status;
                }
                Some(_) => debug!("Project {} already {}", id, new_status),
                None => debug!("Move of unknown project {}", id),
            }
        }
        self.notify();
    }

    /// A copy of the current project list.
    pub fn projects(&self) -> Vec<Project> {
        self.projects.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.projects.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn notify(&self) {
        let snapshot = self.projects();
        debug!(
            "Notifying {} listeners ({} projects)",
            self.listeners.len(),
            snapshot.len()
        );
        self.listeners.notify(&snapshot);
    }
}
