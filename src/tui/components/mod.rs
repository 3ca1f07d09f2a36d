//! # TUI Components
//!
//! The terminal views for the board.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields:
//! - `TitleBar`: top status line with column counts and drag indicator
//! - `FormPanel`: the project form's three fields
//! - `AlertDialog`: modal page alert
//!
//! ### Stateful Components
//!
//! - `ColumnPanel`: one board column, wrapping persistent `ColumnPanelState`
//!   (scroll offset) that lives in `TuiState`
//!
//! ## Props-Based Data Flow
//!
//! Views never read the page or the store themselves. `ui::draw_ui` takes a
//! `BoardView` snapshot of the page and hands each view the slice it needs.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status line)
//! ├── form_panel.rs    (Project form)
//! ├── column_panel.rs  (Board column with cards)
//! └── alert.rs         (Modal alert)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod alert;
pub mod column_panel;
pub mod form_panel;
pub use alert::AlertDialog;
pub use column_panel::{ColumnPanel, ColumnPanelState};
pub use form_panel::{FORM_HEIGHT, FormPanel};
