//! Dragboard library exports for testing

pub mod board;
pub mod core;
pub mod page;
pub mod tui;

#[cfg(test)]
pub mod test_support;
