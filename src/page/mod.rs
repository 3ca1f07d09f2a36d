//! # Page
//!
//! The templating and element layer the board components mount into.
//! It plays the part a browser document would: named templates are cloned,
//! stamped with an id and attached to a host; elements carry text, values
//! and classes; events bubble to registered handlers.
//!
//! The terminal front-end reads this tree to draw the board and feeds user
//! input back in as events.

pub mod document;
pub mod event;
pub mod markup;

pub use document::{InsertPosition, NodeId, Page, PageError, TemplateNode};
pub use event::{DataTransfer, EffectAllowed, Event, EventKind, TEXT_PLAIN};
