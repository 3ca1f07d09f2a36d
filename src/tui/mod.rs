//! # TUI Adapter
//!
//! The ratatui-specific layer. Plays the part of the browser: it owns the
//! page, turns keys into page events, and draws what the board components
//! wrote into the page.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing on the board animates, so the loop sleeps up to 250ms waiting for
//! input and only redraws after an event (including terminal resize).
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call.

mod component;
mod components;
pub mod controller;
mod event;
mod ui;
pub mod view;

use log::{debug, info, warn};
use std::io::stdout;
use std::rc::Rc;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::board::Board;
use crate::core::config::ResolvedConfig;
use crate::core::state::ProjectState;
use crate::page::Page;
use crate::tui::controller::TuiState;
use crate::tui::event::{poll_event_immediate, poll_event_timeout};
use crate::tui::view::BoardView;

const POLL_TIMEOUT: Duration = Duration::from_millis(250);

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for form editing
            SetCursorStyle::SteadyBlock, // Non-blinking
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Hide);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let page = Page::with_markup();
    let store = Rc::new(ProjectState::new());
    let board = Board::mount(&page, store, config.form)
        .map_err(|e| std::io::Error::other(format!("Failed to mount board: {e}")))?;
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Failed to enable terminal modes: {}", e);
            None
        }
    };

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            tui.sync(&page, &board);
            let view = BoardView::read(&page, &board);
            terminal.draw(|f| ui::draw_ui(f, &view, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(POLL_TIMEOUT);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            debug!("Terminal event: {:?}", event);
            if tui.handle_event(&page, &board, event) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }
    }

    info!(
        "Shutting down with {} projects on the board",
        board.store.len()
    );
    ratatui::restore();
    Ok(())
}
