//! # Page Snapshot
//!
//! Reads what the board components wrote into the page and turns it into
//! plain props for the terminal views. Nothing here touches the store: the
//! terminal shows exactly what is on the page.

use crate::board::Board;
use crate::board::list::DROPPABLE;
use crate::core::project::ProjectStatus;
use crate::page::{NodeId, Page};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardView {
    pub node: Option<NodeId>,
    pub id: String,
    pub title: String,
    pub assigned: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView {
    pub kind: ProjectStatus,
    pub heading: String,
    pub droppable: bool,
    pub cards: Vec<CardView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    /// Title, description and people field values.
    pub fields: [String; 3],
    pub columns: [ColumnView; 2],
}

impl BoardView {
    pub fn read(page: &Page, board: &Board) -> Self {
        let fields = board
            .input
            .fields()
            .map(|field| page.value(field).unwrap_or_default());
        let columns = ProjectStatus::ALL.map(|kind| read_column(page, board, kind));
        Self { fields, columns }
    }

    pub fn column(&self, kind: ProjectStatus) -> &ColumnView {
        &self.columns[column_index(kind)]
    }
}

pub fn column_index(kind: ProjectStatus) -> usize {
    match kind {
        ProjectStatus::Active => 0,
        ProjectStatus::Finished => 1,
    }
}

fn read_column(page: &Page, board: &Board, kind: ProjectStatus) -> ColumnView {
    let list = board.column(kind);
    let text_of = |root: NodeId, selector: &str| {
        page.query_selector(root, selector)
            .and_then(|node| page.text(node).ok())
            .unwrap_or_default()
    };

    let heading = text_of(list.element(), "h2");
    let Ok(ul) = list.list_element() else {
        return ColumnView {
            kind,
            heading,
            droppable: false,
            cards: Vec::new(),
        };
    };

    let cards = page
        .children(ul)
        .unwrap_or_default()
        .into_iter()
        .map(|card| CardView {
            node: Some(card),
            id: page.id(card).ok().flatten().unwrap_or_default(),
            title: text_of(card, "h2"),
            assigned: text_of(card, "h3"),
            description: text_of(card, "p"),
        })
        .collect();

    ColumnView {
        kind,
        heading,
        droppable: page.has_class(ul, DROPPABLE),
        cards,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_board;

    #[test]
    fn test_read_empty_board() {
        let (page, board) = test_board();
        let view = BoardView::read(&page, &board);
        assert_eq!(view.fields, [String::new(), String::new(), String::new()]);
        assert_eq!(view.column(ProjectStatus::Active).heading, "ACTIVE PROJECTS");
        assert_eq!(view.column(ProjectStatus::Finished).heading, "FINISHED PROJECTS");
        assert!(view.columns.iter().all(|c| c.cards.is_empty() && !c.droppable));
    }

    #[test]
    fn test_read_cards_from_page() {
        let (page, board) = test_board();
        let id = board.store.add_project("Build API", "Design and implement", 2);

        let view = BoardView::read(&page, &board);
        let active = view.column(ProjectStatus::Active);
        assert_eq!(active.cards.len(), 1);
        assert_eq!(active.cards[0].id, id);
        assert_eq!(active.cards[0].title, "Build API");
        assert_eq!(active.cards[0].assigned, "2 persons assigned");
        assert_eq!(active.cards[0].description, "Design and implement");
        assert!(view.column(ProjectStatus::Finished).cards.is_empty());
    }
}
