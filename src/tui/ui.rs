use crate::core::project::ProjectStatus;
use crate::tui::component::Component;
use crate::tui::components::{AlertDialog, ColumnPanel, FORM_HEIGHT, FormPanel, TitleBar};
use crate::tui::controller::{Focus, TuiState};
use crate::tui::view::{BoardView, column_index};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

const BOARD_HINT: &str =
    " ←/→ column · ↑/↓ card · Space pick up · Enter drop · Esc cancel · Tab form · q quit ";

pub fn draw_ui(frame: &mut Frame, view: &BoardView, tui: &mut TuiState) {
    use Constraint::{Length, Min, Percentage};
    let layout = Layout::vertical([Length(1), Length(FORM_HEIGHT), Min(0), Length(1)]);
    let [title_area, form_area, board_area, hint_area] = layout.areas(frame.area());

    TitleBar::new(
        view.column(ProjectStatus::Active).cards.len(),
        view.column(ProjectStatus::Finished).cards.len(),
        tui.status_message.clone(),
        tui.drag.as_ref().map(|drag| drag.title.clone()),
    )
    .render(frame, title_area);

    // The alert owns the cursor while it is up
    let focused_field = tui.alert.is_none().then(|| tui.focused_field()).flatten();
    FormPanel::new(&view.fields, focused_field).render(frame, form_area);

    let column_areas = Layout::horizontal([Percentage(50), Percentage(50)]).split(board_area);
    let carried = tui.drag.as_ref().map(|drag| drag.project_id.clone());
    for kind in ProjectStatus::ALL {
        let index = column_index(kind);
        let column = view.column(kind);
        let selected = tui.selected_card(kind, column.cards.len());
        let focused = tui.focus == Focus::Board && tui.column == kind;
        ColumnPanel {
            state: &mut tui.panels[index],
            column,
            selected,
            carried: carried.as_deref(),
            focused,
        }
        .render(frame, column_areas[index]);
    }

    if tui.focus == Focus::Board {
        frame.render_widget(
            Line::from(BOARD_HINT).style(Style::default().fg(Color::DarkGray)),
            hint_area,
        );
    }

    if let Some(message) = &tui.alert {
        AlertDialog::new(message).render(frame, frame.area());
    }
}
