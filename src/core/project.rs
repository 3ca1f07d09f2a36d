//! # Projects
//!
//! The single entity on the board. Everything but `status` is fixed at creation.

use std::fmt;

/// Which column a project belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectStatus {
    Active,
    Finished,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 2] = [ProjectStatus::Active, ProjectStatus::Finished];

    /// Lowercase kind used to derive element ids (`active-projects`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Finished => "finished",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub people: u32,
    pub status: ProjectStatus,
}

impl Project {
    pub fn new(id: String, title: String, description: String, people: u32) -> Self {
        Self {
            id,
            title,
            description,
            people,
            status: ProjectStatus::Active,
        }
    }

    /// "1 person" or "<n> persons".
    pub fn persons(&self) -> String {
        if self.people == 1 {
            return "1 person".to_string();
        }
        format!("{} persons", self.people)
    }
}

/// Generate a new opaque project id.
pub fn new_project_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
