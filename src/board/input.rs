//! # ProjectInput
//!
//! The form that creates projects.
//!
//! ## Responsibilities
//!
//! - Read the title, description and people fields on submit
//! - Validate them against `FormRules`
//! - Alert and stop on invalid input; the store is left untouched
//! - Otherwise add the project and clear the fields

use std::rc::{Rc, Weak};

use log::{info, warn};

use crate::board::component::{Component, Mount, MountState};
use crate::core::config::FormRules;
use crate::core::state::ProjectState;
use crate::core::validation::{Validatable, validate};
use crate::page::markup::{APP_HOST, PROJECT_INPUT};
use crate::page::{Event, EventKind, InsertPosition, NodeId, Page, PageError};

/// Id stamped on the form root.
pub const FORM_ID: &str = "user-input";
/// Text of the alert shown when a field fails validation.
pub const INVALID_INPUT: &str = "Invalid Input";

/// Validated form contents, ready for the store.
#[derive(Debug, Clone, PartialEq)]
pub struct UserInput {
    pub title: String,
    pub description: String,
    pub people: u32,
}

pub struct ProjectInput {
    mount: Mount,
    store: Rc<ProjectState>,
    rules: FormRules,
    title: NodeId,
    description: NodeId,
    people: NodeId,
    me: Weak<ProjectInput>,
}

impl ProjectInput {
    /// Mount the form at the start of the app host.
    pub fn new(
        page: &Page,
        store: &Rc<ProjectState>,
        rules: FormRules,
    ) -> Result<Rc<Self>, PageError> {
        let mount = Mount::new(
            page,
            PROJECT_INPUT,
            APP_HOST,
            InsertPosition::AfterBegin,
            Some(FORM_ID),
        )?;
        let title = mount.find("#title")?;
        let description = mount.find("#description")?;
        let people = mount.find("#people")?;

        let input = Rc::new_cyclic(|me| ProjectInput {
            mount,
            store: store.clone(),
            rules,
            title,
            description,
            people,
            me: me.clone(),
        });
        input.mount()?;
        Ok(input)
    }

    pub fn element(&self) -> NodeId {
        self.mount.element()
    }

    pub fn mount_state(&self) -> MountState {
        self.mount.state()
    }

    /// Field elements in tab order: title, description, people.
    pub fn fields(&self) -> [NodeId; 3] {
        [self.title, self.description, self.people]
    }

    fn submit_handler(&self, event: &mut Event) {
        event.prevent_default();

        match self.gather_user_input() {
            Ok(Some(input)) => {
                info!("Adding project {:?}", input.title);
                self.store
                    .add_project(input.title, input.description, input.people);
                if let Err(e) = self.clear_inputs() {
                    warn!("Failed to clear form: {}", e);
                }
            }
            Ok(None) => self.mount.page().alert(INVALID_INPUT),
            Err(e) => warn!("Failed to read form: {}", e),
        }
    }

    /// Read and validate the fields. `None` means some rule failed.
    fn gather_user_input(&self) -> Result<Option<UserInput>, PageError> {
        let page = self.mount.page();
        let entered_title = page.value(self.title)?;
        let entered_description = page.value(self.description)?;
        let entered_people = page.value_as_number(self.people)?;

        let checks = [
            ("title", Validatable::new(entered_title.as_str()).required()),
            (
                "description",
                Validatable::new(entered_description.as_str())
                    .required()
                    .min_length(self.rules.min_description_length),
            ),
            (
                "people",
                Validatable::new(entered_people)
                    .required()
                    .min(f64::from(self.rules.min_people))
                    .max(f64::from(self.rules.max_people)),
            ),
        ];
        if let Some((field, _)) = checks.iter().find(|(_, rules)| !validate(rules)) {
            warn!("Rejected form input: invalid {}", field);
            return Ok(None);
        }

        Ok(Some(UserInput {
            title: entered_title.trim().to_string(),
            description: entered_description.trim().to_string(),
            people: entered_people.trunc() as u32,
        }))
    }

    fn clear_inputs(&self) -> Result<(), PageError> {
        let page = self.mount.page();
        for field in self.fields() {
            page.set_value(field, "")?;
        }
        Ok(())
    }
}

impl Component for ProjectInput {
    fn base(&self) -> &Mount {
        &self.mount
    }

    fn configure(&self) -> Result<(), PageError> {
        let me = self.me.clone();
        self.mount
            .page()
            .add_event_listener(self.mount.element(), EventKind::Submit, move |event| {
                if let Some(input) = me.upgrade() {
                    input.submit_handler(event);
                }
            })
    }

    fn render_content(&self) -> Result<(), PageError> {
        Ok(())
    }
}
