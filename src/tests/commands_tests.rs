use clap::ArgMatches;
use tempfile::TempDir;

use super::support::PIGEON_TITLE;
use crate::cli::build_cli;
use crate::cli_context::{CliContext, CliContextBuilder};
use crate::commands::{admin, books, words, CommandResult};
use crate::error::HubError;
use crate::models::StudentId;
use crate::session::Session;

fn context_in(dir: &TempDir) -> CliContext {
    CliContextBuilder::new()
        .with_api_key("test-api-key".to_string())
        .with_data_dir(dir.path())
        .build()
        .unwrap()
}

fn sub_matches(args: &[&str]) -> ArgMatches {
    let matches = build_cli().try_get_matches_from(args).unwrap();
    matches.subcommand().unwrap().1.clone()
}

fn login_as(context: &CliContext, id: &StudentId) {
    let mut state = context.open_state().unwrap();
    Session::login(&mut state, id).unwrap();
}

fn assert_not_logged_in(result: CommandResult) {
    let err = result.unwrap_err();
    assert!(
        matches!(err.downcast_ref::<HubError>(), Some(HubError::NotLoggedIn)),
        "unexpected error: {}",
        err
    );
}

#[tokio::test]
async fn test_catalog_commands_require_a_student() {
    let dir = TempDir::new().unwrap();
    let mut context = context_in(&dir);

    assert_not_logged_in(
        books::handle_levels(&mut context, &sub_matches(&["reading-hub", "levels"])).await,
    );
    assert_not_logged_in(
        books::handle_listen(&mut context, &sub_matches(&["reading-hub", "listen", "b857"])).await,
    );
    // Checked before any request goes out
    assert_not_logged_in(
        words::handle_dict(&mut context, &sub_matches(&["reading-hub", "dict", "pigeon"])).await,
    );
}

#[tokio::test]
async fn test_catalog_commands_run_once_logged_in() {
    let dir = TempDir::new().unwrap();
    let mut context = context_in(&dir);
    login_as(&context, &StudentId::parse("s1").unwrap());

    assert!(books::handle_levels(&mut context, &sub_matches(&["reading-hub", "levels"]))
        .await
        .is_ok());
    assert!(books::handle_listen(&mut context, &sub_matches(&["reading-hub", "listen", "b857"]))
        .await
        .is_ok());
}

#[tokio::test]
async fn test_missing_excerpt_file_is_named_in_the_error() {
    let dir = TempDir::new().unwrap();
    let mut context = context_in(&dir);
    login_as(&context, &StudentId::admin());

    let missing = dir.path().join("no-such-excerpt.txt");
    let missing = missing.to_string_lossy().into_owned();
    let matches = sub_matches(&[
        "reading-hub",
        "admin",
        "excerpt",
        PIGEON_TITLE,
        "--file",
        missing.as_str(),
    ]);

    let err = admin::handle_admin(&mut context, &matches).await.unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Failed to read excerpt file"));
    assert!(message.contains("no-such-excerpt.txt"));
}
