//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::rc::Rc;

use crate::board::Board;
use crate::core::config::FormRules;
use crate::core::state::ProjectState;
use crate::page::Page;

/// A page with the full board mounted on a fresh store.
pub fn test_board() -> (Page, Board) {
    let page = Page::with_markup();
    let board = Board::mount(&page, Rc::new(ProjectState::new()), FormRules::default())
        .expect("board markup is complete");
    (page, board)
}
