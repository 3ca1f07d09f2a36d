//! # TitleBar Component
//!
//! Top status line: column counts, the last status message, and the card
//! currently being carried.
//!
//! Stateless: every field is a prop filled in by the caller each frame.
//!
//! 1. **Carrying**: `"Dragboard (1 active, 0 finished) | Picked up | ⇄ Build API"`
//! 2. **Status message**: `"Dragboard (1 active, 0 finished) | Added project"`
//! 3. **Default**: `"Dragboard (1 active, 0 finished)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

pub struct TitleBar {
    pub active_count: usize,
    pub finished_count: usize,
    pub status_message: String,
    /// Title of the card being dragged, if any.
    pub carrying: Option<String>,
}

impl TitleBar {
    pub fn new(
        active_count: usize,
        finished_count: usize,
        status_message: String,
        carrying: Option<String>,
    ) -> Self {
        Self {
            active_count,
            finished_count,
            status_message,
            carrying,
        }
    }

    fn text(&self) -> String {
        let mut text = format!(
            "Dragboard ({} active, {} finished)",
            self.active_count, self.finished_count
        );
        if !self.status_message.is_empty() {
            text.push_str(" | ");
            text.push_str(&self.status_message);
        }
        if let Some(title) = &self.carrying {
            text.push_str(" | ⇄ ");
            text.push_str(title);
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::raw(self.text()), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let text = rendered(&mut TitleBar::new(2, 1, String::new(), None));
        assert!(text.contains("Dragboard (2 active, 1 finished)"));
        assert!(!text.contains('|'));
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let text = rendered(&mut TitleBar::new(1, 0, "Added project".to_string(), None));
        assert!(text.contains("| Added project"));
    }

    #[test]
    fn test_title_bar_while_carrying() {
        let text = rendered(&mut TitleBar::new(
            1,
            0,
            "Picked up".to_string(),
            Some("Build API".to_string()),
        ));
        assert!(text.contains("Picked up"));
        assert!(text.contains("⇄ Build API"));
    }
}
