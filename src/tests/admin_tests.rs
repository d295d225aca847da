use super::support::{book_id, memory_state, PIGEON_TITLE};
use crate::admin::{BookForm, StudentForm};
use crate::error::HubError;
use crate::models::StudentId;
use crate::state::ConfirmAction;
use crate::store::keys;

#[test]
fn test_create_student_adds_exactly_one() {
    let mut state = memory_state();
    let before = state.students();

    let created = state.create_student(StudentForm::new("Test", 2.0)).unwrap();

    let after = state.students();
    assert_eq!(after.len(), before.len() + 1);
    assert!(before.iter().all(|s| s.id != created.id));
    assert_eq!(created.name, "Test");
    assert_eq!(created.level, 2.0);
    assert!(after.contains(&created));
}

#[test]
fn test_create_student_ids_are_unique() {
    let mut state = memory_state();
    let first = state.create_student(StudentForm::new("A", 1.0)).unwrap();
    let second = state.create_student(StudentForm::new("B", 1.0)).unwrap();
    assert_ne!(first.id, second.id);
}

#[test]
fn test_create_student_rejects_blank_name() {
    let mut state = memory_state();
    let count = state.students().len();

    let result = state.create_student(StudentForm::new("  ", 1.0));
    assert!(matches!(result, Err(HubError::InvalidInput(_))));
    assert_eq!(state.students().len(), count);
}

#[test]
fn test_admin_cannot_be_deleted() {
    let mut state = memory_state();
    let before = state.students();

    let result = state.request_student_deletion(&StudentId::admin());
    assert!(matches!(result, Err(HubError::ProtectedIdentity)));

    // Even a hand-built action leaves the list alone
    state.confirm(ConfirmAction::DeleteStudent {
        id: StudentId::admin(),
        name: "Teacher".to_string(),
    });
    assert_eq!(state.students(), before);
}

#[test]
fn test_delete_student_after_confirmation() {
    let mut state = memory_state();
    let id = StudentId::parse("s14").unwrap();

    let action = state.request_student_deletion(&id).unwrap();
    assert!(state.student(&id).is_some());

    state.confirm(action);
    assert!(state.student(&id).is_none());
}

#[test]
fn test_update_student_keeps_id() {
    let mut state = memory_state();
    let id = StudentId::parse("s3").unwrap();

    let form = StudentForm::new("구서윤", 2.5).with_renaissance(Some("sy".to_string()), Some(" ".to_string()));
    let updated = state.update_student(&id, form).unwrap();

    assert_eq!(updated.id, id);
    assert_eq!(updated.level, 2.5);
    assert_eq!(updated.renaissance_id.as_deref(), Some("sy"));
    assert_eq!(updated.renaissance_pw, None);
    assert_eq!(state.student(&id), Some(updated));
}

#[test]
fn test_add_and_delete_book() {
    let mut state = memory_state();
    let count = state.books().len();

    let book = state
        .add_book(BookForm {
            title: "Frog and Toad".to_string(),
            author: "Lobel, Arnold".to_string(),
            level: 2.5,
        })
        .unwrap();
    assert_eq!(state.books().len(), count + 1);
    assert_eq!(state.books().last(), Some(&book));

    let action = state.request_book_deletion(&book.id).unwrap();
    state.confirm(action);
    assert_eq!(state.books().len(), count);
    assert!(matches!(
        state.request_book_deletion(&book_id("b1")),
        Err(HubError::BookNotFound(_))
    ));
}

#[test]
fn test_excerpt_is_keyed_by_known_titles() {
    let mut state = memory_state();

    state.set_excerpt(PIGEON_TITLE, "I never get to do anything!").unwrap();
    assert_eq!(
        state.excerpt_for(PIGEON_TITLE).as_deref(),
        Some("I never get to do anything!")
    );

    state.set_excerpt(PIGEON_TITLE, "   ").unwrap();
    assert_eq!(state.excerpt_for(PIGEON_TITLE), None);

    assert!(matches!(
        state.set_excerpt("No Such Book", "text"),
        Err(HubError::BookNotFound(_))
    ));
}

#[test]
fn test_audio_link_must_be_a_url() {
    let mut state = memory_state();

    assert!(matches!(
        state.set_audio_link(PIGEON_TITLE, "not a url"),
        Err(HubError::InvalidInput(_))
    ));
    assert_eq!(state.audio_link_for(PIGEON_TITLE), None);

    state.set_audio_link(PIGEON_TITLE, "https://audio.example/p.mp3").unwrap();
    assert_eq!(
        state.audio_link_for(PIGEON_TITLE).as_deref(),
        Some("https://audio.example/p.mp3")
    );
}

#[test]
fn test_students_round_trip_through_storage() {
    let mut state = memory_state();
    state.create_student(StudentForm::new("Test", 2.0)).unwrap();

    let before = state.students();
    state.reload_all();
    assert_eq!(state.students(), before);
    assert_eq!(state.store_mut().get(&keys::STUDENTS), before);
}
