use super::support::{login, memory_state};
use crate::error::HubError;
use crate::models::StudentId;
use crate::session::Session;
use crate::state::AppState;

#[test]
fn test_resolve_without_login() {
    let mut state = memory_state();
    let session = Session::resolve(&mut state);

    assert!(session.student().is_none());
    assert!(matches!(session.require_student(), Err(HubError::NotLoggedIn)));
}

#[test]
fn test_login_persists_identity() {
    let mut state = memory_state();
    login(&mut state, "s7");

    let resolved = Session::resolve(&mut state);
    assert_eq!(resolved.student().map(|s| s.id.as_str()), Some("s7"));

    // A second state on the same storage sees the login
    let mut other = AppState::new(state.backend().clone());
    let from_disk = Session::resolve(&mut other);
    assert_eq!(from_disk.student().map(|s| s.id.as_str()), Some("s7"));
}

#[test]
fn test_login_rejects_unknown_student() {
    let mut state = memory_state();
    let result = Session::login(&mut state, &StudentId::parse("s999").unwrap());

    assert!(matches!(result, Err(HubError::StudentNotFound(_))));
    assert_eq!(state.logged_in_id(), None);
}

#[test]
fn test_logout_clears_identity() {
    let mut state = memory_state();
    login(&mut state, "s1");

    let session = Session::logout(&mut state);
    assert!(session.student().is_none());
    assert_eq!(state.logged_in_id(), None);
    assert!(Session::resolve(&mut state).student().is_none());
}

#[test]
fn test_deleted_student_resolves_to_nobody() {
    let mut state = memory_state();
    let (_, student) = login(&mut state, "s9");

    let action = state.request_student_deletion(&student.id).unwrap();
    state.confirm(action);

    // The stored id now names nobody
    assert_eq!(state.logged_in_id(), Some(student.id));
    assert!(Session::resolve(&mut state).student().is_none());
}

#[test]
fn test_admin_gate() {
    let mut state = memory_state();

    let (student_session, _) = login(&mut state, "s1");
    assert!(!student_session.is_admin());
    assert!(matches!(student_session.require_admin(), Err(HubError::AdminRequired)));

    let (admin_session, admin) = login(&mut state, "admin");
    assert!(admin_session.is_admin());
    assert_eq!(admin_session.require_admin().unwrap().id, admin.id);
    assert_eq!(admin.display_name(), "Teacher");
}
