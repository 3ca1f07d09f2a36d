use std::cell::RefCell;
use std::rc::Rc;

use dragboard::board::list::{DROPPABLE, list_id};
use dragboard::board::{Board, Component, MountState};
use dragboard::core::config::{BoardConfig, CliOverrides, FormConfig, FormRules, resolve};
use dragboard::core::project::ProjectStatus;
use dragboard::core::state::ProjectState;
use dragboard::page::markup::APP_HOST;
use dragboard::page::{DataTransfer, EffectAllowed, Event, EventKind, NodeId, Page, TEXT_PLAIN};

// ============================================================================
// Helper Functions
// ============================================================================

fn mount_board() -> (Page, Board) {
    let page = Page::with_markup();
    let board = Board::mount(&page, Rc::new(ProjectState::new()), FormRules::default())
        .expect("board mounts on the default markup");
    (page, board)
}

/// Fill the three form fields and submit the form.
fn submit(page: &Page, board: &Board, title: &str, description: &str, people: &str) -> bool {
    let [title_field, description_field, people_field] = board.input.fields();
    page.set_value(title_field, title).unwrap();
    page.set_value(description_field, description).unwrap();
    page.set_value(people_field, people).unwrap();
    page.dispatch(board.input.element(), &mut Event::new(EventKind::Submit))
}

/// Texts of the h2 of every card in a column, in page order.
fn card_titles(page: &Page, board: &Board, kind: ProjectStatus) -> Vec<String> {
    let list = page.get_element_by_id(&list_id(kind)).unwrap();
    page.children(list)
        .unwrap()
        .into_iter()
        .map(|card| page.text(page.query_selector(card, "h2").unwrap()).unwrap())
        .collect()
}

/// Run a full drag of `card` onto the `target` column.
fn drag_card(page: &Page, card: NodeId, target: NodeId) -> DataTransfer {
    let mut start = Event::drag(EventKind::DragStart, DataTransfer::new());
    page.dispatch(card, &mut start);
    let dt = start.data_transfer.unwrap();

    let mut over = Event::drag(EventKind::DragOver, dt.clone());
    assert!(!page.dispatch(target, &mut over), "column should accept the card");
    page.dispatch(target, &mut Event::drag(EventKind::Drop, dt.clone()));
    page.dispatch(target, &mut Event::drag(EventKind::DragLeave, dt.clone()));
    dt
}

// ============================================================================
// Bootstrap
// ============================================================================

#[test]
fn test_board_mounts_in_order() {
    let (page, board) = mount_board();
    let app = page.get_element_by_id(APP_HOST).unwrap();

    assert_eq!(
        page.children(app).unwrap(),
        vec![
            board.input.element(),
            board.active.element(),
            board.finished.element()
        ]
    );
    assert_eq!(board.input.mount_state(), MountState::Attached);
    assert_eq!(board.active.mount_state(), MountState::Attached);
    assert_eq!(
        page.text(page.query_selector(board.finished.element(), "h2").unwrap()).unwrap(),
        "FINISHED PROJECTS"
    );
    assert!(page.get_element_by_id("active-projects-list").is_some());
    assert!(page.get_element_by_id("finished-projects-list").is_some());
}

// ============================================================================
// Form Submission
// ============================================================================

#[test]
fn test_valid_submission_adds_active_card_and_clears_form() {
    let (page, board) = mount_board();

    let prevented = !submit(&page, &board, "Build API", "Design and implement", "2");

    assert!(prevented);
    assert!(page.alerts().is_empty());
    let projects = board.store.projects();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].title, "Build API");
    assert_eq!(projects[0].people, 2);
    assert_eq!(projects[0].status, ProjectStatus::Active);

    assert_eq!(card_titles(&page, &board, ProjectStatus::Active), vec!["Build API"]);
    assert!(card_titles(&page, &board, ProjectStatus::Finished).is_empty());

    let card = board.active.items()[0].base().element();
    assert_eq!(
        page.text(page.query_selector(card, "h3").unwrap()).unwrap(),
        "2 persons assigned"
    );
    for field in board.input.fields() {
        assert_eq!(page.value(field).unwrap(), "");
    }
}

#[test]
fn test_single_person_wording() {
    let (page, board) = mount_board();
    submit(&page, &board, "Solo", "One person job", "1");

    let card = board.active.items()[0].base().element();
    assert_eq!(
        page.text(page.query_selector(card, "h3").unwrap()).unwrap(),
        "1 person assigned"
    );
}

#[test]
fn test_invalid_submissions_alert_and_keep_store_empty() {
    let (page, board) = mount_board();
    let cases = [
        ("", "Design and implement", "2"),
        ("Build API", "Hi", "2"),
        ("Build API", "Design and implement", "0"),
        ("Build API", "Design and implement", "6"),
        ("Build API", "Design and implement", ""),
    ];

    for (title, description, people) in cases {
        submit(&page, &board, title, description, people);
        assert_eq!(page.take_alert().as_deref(), Some("Invalid Input"));
        // Values stay for the user to correct
        assert_eq!(page.value(board.input.fields()[0]).unwrap(), title);
    }
    assert!(board.store.is_empty());
    assert!(board.active.items().is_empty());
}

// ============================================================================
// Drag and Drop
// ============================================================================

#[test]
fn test_drag_card_to_finished() {
    let (page, board) = mount_board();
    submit(&page, &board, "Build API", "Design and implement", "2");
    let card = board.active.items()[0].base().element();
    let id = board.active.items()[0].project().id.clone();

    let dt = drag_card(&page, card, board.finished.element());

    assert_eq!(dt.get_data(TEXT_PLAIN), id);
    assert_eq!(dt.effect_allowed, EffectAllowed::Move);
    assert_eq!(board.store.projects()[0].status, ProjectStatus::Finished);
    assert!(card_titles(&page, &board, ProjectStatus::Active).is_empty());
    assert_eq!(card_titles(&page, &board, ProjectStatus::Finished), vec!["Build API"]);
    assert!(!page.has_class(board.finished.list_element().unwrap(), DROPPABLE));
    // The dragged card was rebuilt away
    assert!(!page.contains(card));
}

#[test]
fn test_drag_over_highlights_until_leave() {
    let (page, board) = mount_board();
    let list = board.finished.list_element().unwrap();
    let mut dt = DataTransfer::new();
    dt.set_data(TEXT_PLAIN, "whatever");

    page.dispatch(board.finished.element(), &mut Event::drag(EventKind::DragOver, dt.clone()));
    assert!(page.has_class(list, DROPPABLE));

    page.dispatch(board.finished.element(), &mut Event::drag(EventKind::DragLeave, dt));
    assert!(!page.has_class(list, DROPPABLE));
}

#[test]
fn test_non_text_drag_is_refused() {
    let (page, board) = mount_board();
    let mut dt = DataTransfer::new();
    dt.set_data("text/html", "<b>x</b>");

    let accepted = !page.dispatch(
        board.active.element(),
        &mut Event::drag(EventKind::DragOver, dt),
    );

    assert!(!accepted);
    assert!(!page.has_class(board.active.list_element().unwrap(), DROPPABLE));
}

#[test]
fn test_drop_of_unknown_id_still_rerenders() {
    let (page, board) = mount_board();
    board.store.add_project("Keep", "Stays active", 3);
    let before = board.active.items()[0].base().element();

    let seen = Rc::new(RefCell::new(0));
    let counter = seen.clone();
    board.store.add_listener(move |_| *counter.borrow_mut() += 1);

    let mut dt = DataTransfer::new();
    dt.set_data(TEXT_PLAIN, "no-such-project");
    page.dispatch(board.finished.element(), &mut Event::drag(EventKind::Drop, dt));

    assert_eq!(*seen.borrow(), 1);
    assert_eq!(board.store.projects()[0].status, ProjectStatus::Active);
    assert_eq!(card_titles(&page, &board, ProjectStatus::Active), vec!["Keep"]);
    assert_ne!(board.active.items()[0].base().element(), before);
}

#[test]
fn test_cards_keep_insertion_order_across_moves() {
    let (page, board) = mount_board();
    for title in ["First", "Second", "Third"] {
        submit(&page, &board, title, "Some description", "2");
    }

    let second = board.active.items()[1].base().element();
    drag_card(&page, second, board.finished.element());
    let first = board.active.items()[0].base().element();
    drag_card(&page, first, board.finished.element());

    // Store order, not drop order
    assert_eq!(
        card_titles(&page, &board, ProjectStatus::Finished),
        vec!["First", "Second"]
    );
    assert_eq!(card_titles(&page, &board, ProjectStatus::Active), vec!["Third"]);
}

#[test]
fn test_custom_form_rules() {
    let page = Page::with_markup();
    let rules = FormRules {
        min_description_length: 1,
        min_people: 1,
        max_people: 10,
    };
    let board = Board::mount(&page, Rc::new(ProjectState::new()), rules).unwrap();

    submit(&page, &board, "Big team", "x", "8");

    assert!(page.alerts().is_empty());
    assert_eq!(board.store.projects()[0].people, 8);
}

#[test]
fn test_configured_zero_min_people_still_rejects_empty_team() {
    let config = BoardConfig {
        form: FormConfig {
            min_people: Some(0),
            ..Default::default()
        },
        ..Default::default()
    };
    let rules = resolve(&config, &CliOverrides::default()).form;
    let page = Page::with_markup();
    let board = Board::mount(&page, Rc::new(ProjectState::new()), rules).unwrap();

    submit(&page, &board, "Nobody", "No one assigned", "0");

    assert_eq!(page.take_alert().as_deref(), Some("Invalid Input"));
    assert!(board.store.is_empty());
}
