//! # Core Board Logic
//!
//! The data side of the board. It knows nothing about pages, templates or
//! terminals.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Project (entity)     │
//!                    │  • ProjectState (store) │
//!                    │  • validate() (rules)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ listeners
//!                                ▼
//!                    ┌─────────────────────────┐
//!                    │  board components       │
//!                    │  (page-backed)          │
//!                    └─────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`project`]: `Project` and `ProjectStatus`
//! - [`state`]: `ProjectState`, the observable store
//! - [`validation`]: the rule-set engine used by the input form
//! - [`config`]: settings file and override resolution

pub mod config;
pub mod project;
pub mod state;
pub mod validation;
