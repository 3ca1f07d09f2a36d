//! # ColumnPanel Component
//!
//! One board column: a bordered box titled with the column heading, holding
//! a vertical stack of cards in a scroll view.
//!
//! ## Architecture
//!
//! `ColumnPanel` is a transient component (created each frame) wrapping
//! `&'a mut ColumnPanelState` (persistent scroll state) and a `ColumnView`
//! (props read from the page).
//!
//! ## Highlights
//!
//! - Border turns green while the column's list carries `droppable`
//! - Border is cyan for the column under the board cursor
//! - The selected card is drawn reversed; the carried card is yellow

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::Component;
use crate::tui::view::{CardView, ColumnView};

/// Scroll position of a column. Lives in `TuiState`.
#[derive(Default)]
pub struct ColumnPanelState {
    pub scroll: ScrollViewState,
}

pub struct ColumnPanel<'a> {
    pub state: &'a mut ColumnPanelState,
    pub column: &'a ColumnView,
    /// Index of the card under the board cursor in this column.
    pub selected: Option<usize>,
    /// Id of the card being dragged, wherever it is.
    pub carried: Option<&'a str>,
    /// True when the board cursor (or the drag) is over this column.
    pub focused: bool,
}

/// Cut `s` to at most `max_width` columns, ending in "…" when shortened.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Description lines of a card wrapped to `width` columns.
fn wrap_description(description: &str, width: u16) -> Vec<String> {
    let lines: Vec<String> = textwrap::wrap(description, usize::from(width.max(1)))
        .into_iter()
        .map(|line| line.into_owned())
        .collect();
    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}

/// Rows a card takes: borders, the assignment line and the description.
pub fn card_height(card: &CardView, width: u16) -> u16 {
    let text_width = width.saturating_sub(2);
    let lines = wrap_description(&card.description, text_width).len();
    u16::try_from(lines).unwrap_or(u16::MAX).saturating_add(3)
}

/// Top row of each card and the total height, saturating at `u16::MAX`.
fn card_offsets(heights: &[u16]) -> (Vec<u16>, u16) {
    let mut tops = Vec::with_capacity(heights.len());
    let mut y: u16 = 0;
    for height in heights {
        tops.push(y);
        y = y.saturating_add(*height);
    }
    (tops, y)
}

impl<'a> ColumnPanel<'a> {
    fn card_paragraph(&self, index: usize, card: &'a CardView, width: u16) -> Paragraph<'a> {
        let text_width = width.saturating_sub(2);
        let is_selected = self.selected == Some(index);
        let is_carried = self.carried == Some(card.id.as_str());

        let mut border_style = Style::default().fg(Color::Gray);
        if is_carried {
            border_style = border_style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
        }
        let body_style = if is_selected {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };

        let mut lines = vec![Line::from(Span::styled(
            card.assigned.clone(),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ))];
        lines.extend(
            wrap_description(&card.description, text_width)
                .into_iter()
                .map(Line::from),
        );

        Paragraph::new(lines).style(body_style).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(border_style)
                .title(truncate_to_width(&card.title, usize::from(text_width))),
        )
    }

    /// Move the scroll offset so the selected card is fully visible.
    fn scroll_to_selected(&mut self, heights: &[u16], viewport_height: u16) {
        let Some(index) = self.selected.filter(|i| *i < heights.len()) else {
            return;
        };
        let (tops, _) = card_offsets(heights);
        let top = tops[index];
        let bottom = top.saturating_add(heights[index]);
        let offset = self.state.scroll.offset();

        if top < offset.y {
            self.state.scroll.set_offset(Position { x: 0, y: top });
        } else if bottom > offset.y.saturating_add(viewport_height) {
            self.state.scroll.set_offset(Position {
                x: 0,
                y: bottom.saturating_sub(viewport_height),
            });
        }
    }
}

impl Component for ColumnPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.column.droppable {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let count = match self.column.cards.len() {
            1 => " 1 card ".to_string(),
            n => format!(" {n} cards "),
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(format!(" {} ", self.column.heading))
            .title_bottom(Line::from(count).right_aligned());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.column.cards.is_empty() {
            let empty = Paragraph::new("No projects")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, inner);
            return;
        }

        // Leave one column for the scrollbar
        let width = inner.width.saturating_sub(1);
        let column = self.column;
        let heights: Vec<u16> = column.cards.iter().map(|c| card_height(c, width)).collect();
        let (tops, total) = card_offsets(&heights);

        let mut scroll_view = ScrollView::new(Size::new(width, total))
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        for (index, card) in column.cards.iter().enumerate() {
            // Cards past the last row have nowhere to go
            if tops[index] == total {
                break;
            }
            let paragraph = self.card_paragraph(index, card, width);
            scroll_view.render_widget(paragraph, Rect::new(0, tops[index], width, heights[index]));
        }

        self.scroll_to_selected(&heights, inner.height);
        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll);
    }
}
