use tempfile::TempDir;

use crate::cli_context::CliContextBuilder;
use crate::models::StudentId;
use crate::session::Session;

#[test]
fn test_cli_context_builder() {
    let context = CliContextBuilder::new()
        .with_api_key("test-api-key".to_string())
        .build();

    assert!(context.is_ok());
    let mut context = context.unwrap();

    assert!(context.has_api_key());
    assert_eq!(context.api_key().unwrap(), "test-api-key");
}

#[test]
fn test_verified_client_is_reused() {
    let mut context = CliContextBuilder::new()
        .with_api_key("test-api-key".to_string())
        .build()
        .unwrap();

    let client = context.verified_client().unwrap();
    let again = context.verified_client().unwrap();
    assert!(std::sync::Arc::ptr_eq(&client, &again));
    assert_eq!(client.model(), context.config().model());
}

#[test]
fn test_open_session_uses_data_dir() {
    let dir = TempDir::new().unwrap();
    let context = CliContextBuilder::new()
        .with_data_dir(dir.path())
        .build()
        .unwrap();
    assert_eq!(context.data_dir(), &dir.path().to_path_buf());

    let (mut state, session) = context.open_session().unwrap();
    assert!(session.student().is_none());
    Session::login(&mut state, &StudentId::parse("s1").unwrap()).unwrap();

    // A fresh run finds the login on disk
    let (_, session) = context.open_session().unwrap();
    assert_eq!(session.student().map(|s| s.id.as_str()), Some("s1"));
    assert!(dir.path().join("logged_in_student_id.json").exists());
}
