//! # Board Components
//!
//! The page-backed pieces of the board. Each one is a `Component` built on a
//! `Mount`: its template is cloned and attached first, then `configure` wires
//! handlers and `render_content` fills it in.
//!
//! - `ProjectInput`: the form, prepended to `#app`
//! - `ProjectList`: one column per status, appended to `#app`; a drop target
//!   and a store listener
//! - `ProjectItem`: one card per project; draggable
//!
//! Handlers are closures holding a `Weak` to their component, so a card that
//! has been rebuilt away simply stops reacting.
//!
//! ## Module Structure
//!
//! ```text
//! board/
//! ├── mod.rs        (this file, Board bootstrap)
//! ├── component.rs  (Mount, MountState, Component, Draggable, DragTarget)
//! ├── input.rs      (ProjectInput)
//! ├── list.rs       (ProjectList)
//! └── item.rs       (ProjectItem)
//! ```

pub mod component;
pub mod input;
pub mod item;
pub mod list;

use std::rc::Rc;

use log::info;

pub use component::{Component, DragTarget, Draggable, Mount, MountState};
pub use input::ProjectInput;
pub use item::ProjectItem;
pub use list::ProjectList;

use crate::core::config::FormRules;
use crate::core::project::ProjectStatus;
use crate::core::state::ProjectState;
use crate::page::{Page, PageError};

/// Everything mounted into `#app`, sharing one store.
pub struct Board {
    pub store: Rc<ProjectState>,
    pub input: Rc<ProjectInput>,
    pub active: Rc<ProjectList>,
    pub finished: Rc<ProjectList>,
}

impl Board {
    /// Mount the form, then the Active and Finished columns.
    pub fn mount(page: &Page, store: Rc<ProjectState>, rules: FormRules) -> Result<Self, PageError> {
        let input = ProjectInput::new(page, &store, rules)?;
        let active = ProjectList::new(page, &store, ProjectStatus::Active)?;
        let finished = ProjectList::new(page, &store, ProjectStatus::Finished)?;
        info!("Board mounted with {} store listeners", store.listener_count());
        Ok(Self {
            store,
            input,
            active,
            finished,
        })
    }

    pub fn column(&self, kind: ProjectStatus) -> &Rc<ProjectList> {
        match kind {
            ProjectStatus::Active => &self.active,
            ProjectStatus::Finished => &self.finished,
        }
    }
}
