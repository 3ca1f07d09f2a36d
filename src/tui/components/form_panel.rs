//! # FormPanel Component
//!
//! Draws the project form: three labelled, single-line fields and a hint
//! line. The focused field is highlighted and gets the terminal cursor.
//!
//! Field values are props read from the page. Editing happens in the
//! controller, which writes straight into the page's input elements.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

pub const FIELD_LABELS: [&str; 3] = ["Title", "Description", "People"];

/// Rows needed: three bordered fields, a hint line and the outer border.
pub const FORM_HEIGHT: u16 = 3 * 3 + 1 + 2;

pub struct FormPanel<'a> {
    pub values: &'a [String; 3],
    /// Index of the focused field, if the form has focus.
    pub focused: Option<usize>,
}

impl<'a> FormPanel<'a> {
    pub fn new(values: &'a [String; 3], focused: Option<usize>) -> Self {
        Self { values, focused }
    }
}

/// Keep the tail of `value` that fits in `width` columns.
fn visible_tail(value: &str, width: usize) -> &str {
    let mut start = 0;
    while value[start..].width() > width {
        start += value[start..].chars().next().map_or(1, char::len_utf8);
    }
    &value[start..]
}

impl Component for FormPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused.is_some() {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let outer = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" New Project ");
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        use Constraint::Length;
        let [title_area, description_area, people_area, hint_area] =
            Layout::vertical([Length(3), Length(3), Length(3), Length(1)]).areas(inner);

        for (index, field_area) in [title_area, description_area, people_area]
            .into_iter()
            .enumerate()
        {
            let focused = self.focused == Some(index);
            let style = if focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            let text_width = field_area.width.saturating_sub(3) as usize;
            let shown = visible_tail(&self.values[index], text_width);

            let field = Paragraph::new(shown).block(
                Block::bordered()
                    .title(FIELD_LABELS[index])
                    .border_style(style.add_modifier(if focused {
                        Modifier::BOLD
                    } else {
                        Modifier::DIM
                    })),
            );
            frame.render_widget(field, field_area);

            if focused {
                let x = field_area.x + 1 + shown.width() as u16;
                frame.set_cursor_position((x, field_area.y + 1));
            }
        }

        let hint = Line::from(" Enter add project · Tab next field · Shift+Tab back ")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, hint_area);
    }
}
