use super::support::{book_id, login, memory_state, ScriptedService, PIGEON_ID, PIGEON_TITLE};
use crate::client::{lookup_word, request_word_help, DictionaryLookup, WordHelp};

#[tokio::test]
async fn test_word_help_without_excerpt_skips_the_service() {
    let mut state = memory_state();
    let (_, student) = login(&mut state, "s1");
    let book = state.book(&book_id(PIGEON_ID)).unwrap();
    let service = ScriptedService::answering(&[("pigeon", "비둘기")]);

    let outcome = request_word_help(&mut state, &service, &student, &book).await;

    assert_eq!(outcome, WordHelp::NoExcerpt);
    assert!(outcome.is_error());
    assert_eq!(service.calls(), 0);
}

#[tokio::test]
async fn test_word_help_returns_definitions() {
    let mut state = memory_state();
    let (_, student) = login(&mut state, "s1");
    state.set_excerpt(PIGEON_TITLE, "Hey, can I drive the bus?").unwrap();
    let book = state.book(&book_id(PIGEON_ID)).unwrap();
    let service = ScriptedService::answering(&[("drive", "운전하다"), ("bus", "버스")]);

    let outcome = request_word_help(&mut state, &service, &student, &book).await;

    match outcome {
        WordHelp::Definitions(definitions) => {
            assert_eq!(definitions.len(), 2);
            assert_eq!(definitions[0].word, "drive");
        }
        other => panic!("Expected definitions, got {:?}", other),
    }
    assert_eq!(service.calls(), 1);
}

#[tokio::test]
async fn test_word_help_failure_is_an_outcome() {
    let mut state = memory_state();
    let (_, student) = login(&mut state, "s1");
    state.set_excerpt(PIGEON_TITLE, "Hey, can I drive the bus?").unwrap();
    let book = state.book(&book_id(PIGEON_ID)).unwrap();
    let service = ScriptedService::failing("quota exceeded");

    let outcome = request_word_help(&mut state, &service, &student, &book).await;

    assert!(matches!(&outcome, WordHelp::Failed(message) if message.contains("quota exceeded")));
}

#[tokio::test]
async fn test_dictionary_rejects_empty_input() {
    let service = ScriptedService::answering(&[]);

    assert_eq!(lookup_word(&service, "   ").await, DictionaryLookup::EmptyInput);
    assert_eq!(service.calls(), 0);
}

#[tokio::test]
async fn test_dictionary_trims_the_word() {
    let service = ScriptedService::answering(&[]);

    let outcome = lookup_word(&service, "  brave ").await;
    assert_eq!(
        outcome,
        DictionaryLookup::Definition {
            word: "brave".to_string(),
            text: "brave: a short meaning".to_string(),
        }
    );
}
