use tempfile::TempDir;

use reading_hub::library::Shelf;
use reading_hub::{AppState, BookId, ReadingStatus, Session, StudentId};

#[test]
fn test_reading_flow_survives_restart() {
    let dir = TempDir::new().unwrap();
    let book = BookId::parse("b857").unwrap();

    {
        let mut state = AppState::open(dir.path()).unwrap();
        let session = Session::login(&mut state, &StudentId::parse("s1").unwrap()).unwrap();
        let student = session.require_student().unwrap().clone();

        state.mark_as_reading(&student, &book).unwrap();
        state.mark_as_complete(&student, &book).unwrap();
    }

    let mut state = AppState::open(dir.path()).unwrap();
    let session = Session::resolve(&mut state);
    let student = session.require_student().unwrap().clone();
    assert_eq!(student.id.as_str(), "s1");

    let shelves = state.shelves(&student);
    assert_eq!(shelves.shelf_of(&book), Some(Shelf::Completed));
    assert_eq!(
        state.reading_logs().status(&student.id, &book),
        Some(ReadingStatus::Completed)
    );
}

#[test]
fn test_each_key_gets_its_own_file() {
    let dir = TempDir::new().unwrap();
    let mut state = AppState::open(dir.path()).unwrap();
    let session = Session::login(&mut state, &StudentId::parse("s2").unwrap()).unwrap();
    let student = session.require_student().unwrap().clone();
    state
        .mark_as_reading(&student, &BookId::parse("b801").unwrap())
        .unwrap();

    assert!(dir.path().join("logged_in_student_id.json").exists());
    assert!(dir.path().join("reading_logs_data.json").exists());

    let raw = std::fs::read_to_string(dir.path().join("reading_logs_data.json")).unwrap();
    let logs: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(logs["s2"]["b801"], "IN_PROGRESS");
}

#[test]
fn test_removal_needs_confirmation() {
    let dir = TempDir::new().unwrap();
    let book = BookId::parse("b801").unwrap();
    let mut state = AppState::open(dir.path()).unwrap();
    let session = Session::login(&mut state, &StudentId::parse("s1").unwrap()).unwrap();
    let student = session.require_student().unwrap().clone();

    state.mark_as_reading(&student, &book).unwrap();
    let action = state.request_removal(&student, &book).unwrap();
    assert_eq!(state.shelves(&student).shelf_of(&book), Some(Shelf::InProgress));

    state.confirm(action);
    drop(state);

    let mut state = AppState::open(dir.path()).unwrap();
    assert_eq!(state.shelves(&student).shelf_of(&book), Some(Shelf::Available));
}
