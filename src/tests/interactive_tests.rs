use std::sync::Arc;
use std::time::{Duration, Instant};

use super::support::{login, memory_state, ScriptedService, PIGEON_ID, PIGEON_TITLE};
use crate::client::{DictionaryLookup, WordHelp};
use crate::error::HubError;
use crate::interactive::app::{
    InteractiveApp, ModalBody, Notification, NotificationKind, Popup, TextInputContext, View,
};
use crate::interactive::keys::Action;
use crate::library::Shelf;
use crate::models::ReadingStatus;
use crate::session::Session;
use crate::store::MemoryBackend;

type TestApp = InteractiveApp<MemoryBackend, ScriptedService>;

fn app_for(id: &str, service: &Arc<ScriptedService>) -> TestApp {
    let mut state = memory_state();
    let (session, _) = login(&mut state, id);
    InteractiveApp::new(state, &session, Some(service.clone())).unwrap()
}

fn type_text(app: &mut TestApp, text: &str) {
    for c in text.chars() {
        app.handle_action(Action::TypeChar(c));
    }
}

fn search(app: &mut TestApp, query: &str) {
    app.handle_action(Action::Search);
    type_text(app, query);
    app.handle_action(Action::Confirm);
}

fn modal_body(app: &TestApp) -> Option<&ModalBody> {
    match &app.popup {
        Some(Popup::Definitions(modal)) => Some(&modal.body),
        _ => None,
    }
}

#[test]
fn test_requires_a_student() {
    let state = memory_state();
    let result: Result<TestApp, _> = InteractiveApp::new(state, &Session::anonymous(), None);
    assert!(matches!(result, Err(HubError::NotLoggedIn)));
}

#[tokio::test]
async fn test_read_moves_book_to_continue_reading() {
    let service = Arc::new(ScriptedService::answering(&[]));
    let mut app = app_for("s1", &service);

    let (shelf, first) = app.selected_book().unwrap();
    assert_eq!(shelf, Shelf::Available);

    app.handle_action(Action::Read);
    assert_eq!(app.notifications.last().map(|n| n.kind), Some(NotificationKind::Success));

    app.refresh_if_dirty();
    assert_eq!(app.shelves.shelf_of(&first.id), Some(Shelf::InProgress));
    assert_eq!(app.rows()[0].0, Shelf::InProgress);
}

#[tokio::test]
async fn test_remove_waits_for_confirmation() {
    let service = Arc::new(ScriptedService::answering(&[]));
    let mut app = app_for("s2", &service);
    let (_, book) = app.selected_book().unwrap();
    let student = app.student.id.clone();

    app.handle_action(Action::Read);
    app.refresh_if_dirty();

    app.handle_action(Action::Remove);
    assert!(matches!(app.popup, Some(Popup::Confirmation(_))));
    app.handle_action(Action::Cancel);
    assert!(app.popup.is_none());
    assert_eq!(
        app.state_mut().reading_log(&student).status(&book.id),
        Some(ReadingStatus::InProgress)
    );

    app.handle_action(Action::Remove);
    app.handle_action(Action::Confirm);
    app.refresh_if_dirty();
    assert_eq!(app.state_mut().reading_log(&student).status(&book.id), None);
    assert_eq!(app.shelves.shelf_of(&book.id), Some(Shelf::Available));
}

#[tokio::test]
async fn test_complete_on_unstarted_book_notifies_error() {
    let service = Arc::new(ScriptedService::answering(&[]));
    let mut app = app_for("s3", &service);

    app.handle_action(Action::Complete);
    assert_eq!(app.notifications.last().map(|n| n.kind), Some(NotificationKind::Error));
}

#[tokio::test]
async fn test_search_and_level_filters() {
    let service = Arc::new(ScriptedService::answering(&[]));
    let mut app = app_for("s1", &service);

    search(&mut app, "pigeon");
    let rows = app.rows();
    assert!(!rows.is_empty());
    assert!(rows.iter().all(|(_, b)| b.title.to_lowercase().contains("pigeon")));
    assert!(rows.iter().any(|(_, b)| b.id.as_str() == PIGEON_ID));

    app.handle_action(Action::ClearFilter);
    while app.filter.level != Some(0.9) {
        app.handle_action(Action::CycleLevel);
        assert!(app.level_index.is_some(), "0.9 missing from the level cycle");
    }
    assert!(app.rows().iter().all(|(_, b)| b.level == 0.9));
}

#[tokio::test]
async fn test_catalog_filters_leave_reading_books_visible() {
    let service = Arc::new(ScriptedService::answering(&[]));
    let mut app = app_for("s1", &service);

    search(&mut app, "Amazing Dolphins");
    app.handle_action(Action::Read);
    app.refresh_if_dirty();

    app.handle_action(Action::ClearFilter);
    while app.filter.level != Some(0.9) {
        app.handle_action(Action::CycleLevel);
    }
    let rows = app.rows();
    assert_eq!(rows[0].0, Shelf::InProgress);
    assert_eq!(rows[0].1.title, "Amazing Dolphins");
    assert!(rows[1..].iter().all(|(shelf, b)| *shelf == Shelf::Available && b.level == 0.9));

    app.handle_action(Action::SwitchView);
    assert!(app.rows().is_empty());
}

#[tokio::test]
async fn test_switch_view_shows_library() {
    let service = Arc::new(ScriptedService::answering(&[]));
    let mut app = app_for("s1", &service);

    app.handle_action(Action::SwitchView);
    assert_eq!(app.view, View::Library);
    assert!(app.rows().is_empty());

    app.handle_action(Action::SwitchView);
    app.handle_action(Action::Read);
    app.refresh_if_dirty();
    app.handle_action(Action::SwitchView);
    assert_eq!(app.rows().len(), 1);
}

#[tokio::test]
async fn test_word_help_without_excerpt_opens_error_modal() {
    let service = Arc::new(ScriptedService::answering(&[("bus", "버스")]));
    let mut app = app_for("s1", &service);
    search(&mut app, PIGEON_TITLE);

    app.handle_action(Action::WordHelp);

    assert_eq!(modal_body(&app), Some(&ModalBody::WordHelp(WordHelp::NoExcerpt)));
    assert_eq!(service.calls(), 0);
}

#[tokio::test]
async fn test_word_help_fills_modal_when_done() {
    let service = Arc::new(ScriptedService::answering(&[("bus", "버스")]));
    let mut app = app_for("s1", &service);
    app.state_mut()
        .set_excerpt(PIGEON_TITLE, "Can I drive the bus?")
        .unwrap();
    search(&mut app, PIGEON_TITLE);

    app.handle_action(Action::WordHelp);
    assert_eq!(modal_body(&app), Some(&ModalBody::Loading));

    app.wait_for_result().await;
    match modal_body(&app) {
        Some(ModalBody::WordHelp(WordHelp::Definitions(definitions))) => {
            assert_eq!(definitions[0].word, "bus")
        }
        other => panic!("Expected definitions, got {:?}", other),
    }
    assert_eq!(service.calls(), 1);
}

#[tokio::test]
async fn test_result_for_closed_modal_is_dropped() {
    let service = Arc::new(ScriptedService::answering(&[("bus", "버스")]));
    let mut app = app_for("s1", &service);
    app.state_mut()
        .set_excerpt(PIGEON_TITLE, "Can I drive the bus?")
        .unwrap();
    search(&mut app, PIGEON_TITLE);

    app.handle_action(Action::WordHelp);
    app.handle_action(Action::Cancel);
    app.wait_for_result().await;

    assert!(app.popup.is_none());
}

#[tokio::test]
async fn test_dictionary_input() {
    let service = Arc::new(ScriptedService::answering(&[]));
    let mut app = app_for("s1", &service);

    app.handle_action(Action::Dictionary);
    assert_eq!(app.popup, Some(Popup::TextInput(TextInputContext::Dictionary)));
    app.handle_action(Action::Confirm);
    assert_eq!(
        modal_body(&app),
        Some(&ModalBody::Dictionary(DictionaryLookup::EmptyInput))
    );
    assert_eq!(service.calls(), 0);

    app.handle_action(Action::Cancel);
    app.handle_action(Action::Dictionary);
    type_text(&mut app, "bravo");
    app.handle_action(Action::Backspace);
    app.handle_action(Action::Backspace);
    type_text(&mut app, "e");
    app.handle_action(Action::Confirm);
    app.wait_for_result().await;

    assert_eq!(
        modal_body(&app),
        Some(&ModalBody::Dictionary(DictionaryLookup::Definition {
            word: "brave".to_string(),
            text: "brave: a short meaning".to_string(),
        }))
    );
}

#[tokio::test]
async fn test_missing_service_reports_missing_key() {
    let mut state = memory_state();
    let (session, _) = login(&mut state, "s1");
    let mut app: TestApp = InteractiveApp::new(state, &session, None).unwrap();

    app.handle_action(Action::Dictionary);
    type_text(&mut app, "brave");
    app.handle_action(Action::Confirm);

    assert!(app.popup.is_none());
    assert_eq!(app.notifications.last().map(|n| n.kind), Some(NotificationKind::Error));
}

#[tokio::test]
async fn test_notifications_expire() {
    let service = Arc::new(ScriptedService::answering(&[]));
    let mut app = app_for("s1", &service);

    app.notify(NotificationKind::Info, "fresh");
    app.notifications.push(Notification {
        message: "stale".to_string(),
        kind: NotificationKind::Success,
        created_at: Instant::now()
            .checked_sub(Duration::from_secs(6))
            .unwrap(),
    });

    app.prune_notifications();
    let messages: Vec<&str> = app.notifications.iter().map(|n| n.message.as_str()).collect();
    assert_eq!(messages, vec!["fresh"]);
}
