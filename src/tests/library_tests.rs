use std::collections::HashSet;

use super::support::{book_id, login, memory_state, PIGEON_ID, PIGEON_TITLE};
use crate::error::HubError;
use crate::library::{CatalogFilter, Shelf, Transition};
use crate::models::{Book, ReadingStatus};
use crate::store::keys;

#[test]
fn test_reading_lifecycle() {
    let mut state = memory_state();
    let (_, student) = login(&mut state, "s1");
    let book = book_id(PIGEON_ID);

    assert_eq!(state.mark_as_reading(&student, &book).unwrap(), Transition::Changed);
    assert_eq!(
        state.reading_log(&student.id).status(&book),
        Some(ReadingStatus::InProgress)
    );

    assert_eq!(state.mark_as_complete(&student, &book).unwrap(), Transition::Changed);
    assert_eq!(
        state.reading_log(&student.id).status(&book),
        Some(ReadingStatus::Completed)
    );

    let action = state.request_removal(&student, &book).unwrap();
    // Nothing changes before the action is confirmed
    assert!(state.reading_log(&student.id).status(&book).is_some());

    state.confirm(action);
    assert_eq!(state.reading_log(&student.id).status(&book), None);
}

#[test]
fn test_mark_as_reading_is_idempotent() {
    let mut state = memory_state();
    let (_, student) = login(&mut state, "s2");
    let book = book_id("b801");

    state.mark_as_reading(&student, &book).unwrap();
    let once = state.reading_logs();

    assert_eq!(state.mark_as_reading(&student, &book).unwrap(), Transition::Unchanged);
    assert_eq!(state.reading_logs(), once);
}

#[test]
fn test_mark_as_reading_keeps_completed_books() {
    let mut state = memory_state();
    let (_, student) = login(&mut state, "s2");
    let book = book_id("b801");

    state.mark_as_reading(&student, &book).unwrap();
    state.mark_as_complete(&student, &book).unwrap();

    assert_eq!(state.mark_as_reading(&student, &book).unwrap(), Transition::Unchanged);
    assert_eq!(
        state.reading_log(&student.id).status(&book),
        Some(ReadingStatus::Completed)
    );
    assert_eq!(state.mark_as_complete(&student, &book).unwrap(), Transition::Unchanged);
}

#[test]
fn test_complete_requires_a_started_book() {
    let mut state = memory_state();
    let (_, student) = login(&mut state, "s3");

    let result = state.mark_as_complete(&student, &book_id("b802"));
    assert!(matches!(result, Err(HubError::InvalidTransition { .. })));
    assert!(state.reading_log(&student.id).is_empty());
}

#[test]
fn test_unknown_book_is_rejected() {
    let mut state = memory_state();
    let (_, student) = login(&mut state, "s3");

    assert!(matches!(
        state.mark_as_reading(&student, &book_id("b1")),
        Err(HubError::BookNotFound(_))
    ));
    assert!(matches!(
        state.request_removal(&student, &book_id("b1")),
        Err(HubError::BookNotFound(_))
    ));
}

#[test]
fn test_shelves_partition_the_catalog() {
    let mut state = memory_state();
    let (_, student) = login(&mut state, "s4");

    state.mark_as_reading(&student, &book_id("b801")).unwrap();
    state.mark_as_reading(&student, &book_id("b802")).unwrap();
    state.mark_as_complete(&student, &book_id("b802")).unwrap();

    let shelves = state.shelves(&student);
    let catalog = state.books();
    assert_eq!(shelves.len(), catalog.len());

    fn ids(books: &[Book]) -> HashSet<String> {
        books.iter().map(|b| b.id.to_string()).collect()
    }
    let in_progress = ids(&shelves.in_progress);
    let completed = ids(&shelves.completed);
    let available = ids(&shelves.available);

    assert!(in_progress.is_disjoint(&completed));
    assert!(in_progress.is_disjoint(&available));
    assert!(completed.is_disjoint(&available));
    assert_eq!(in_progress.len() + completed.len() + available.len(), catalog.len());

    assert_eq!(shelves.shelf_of(&book_id("b801")), Some(Shelf::InProgress));
    assert_eq!(shelves.shelf_of(&book_id("b802")), Some(Shelf::Completed));
    assert_eq!(shelves.shelf_of(&book_id("b803")), Some(Shelf::Available));
}

#[test]
fn test_logs_are_per_student() {
    let mut state = memory_state();
    let (_, first) = login(&mut state, "s1");
    let (_, second) = login(&mut state, "s2");

    state.mark_as_reading(&first, &book_id("b801")).unwrap();

    assert!(state.reading_log(&second.id).is_empty());
    assert_eq!(state.shelves(&second).in_progress.len(), 0);
}

#[test]
fn test_level_filter_finds_the_pigeon() {
    let mut state = memory_state();
    let books = state.books();

    let found = CatalogFilter::new("", Some(0.9)).apply(&books);

    assert!(found.iter().any(|b| b.id.as_str() == PIGEON_ID && b.title == PIGEON_TITLE));
    assert!(found.iter().all(|b| b.level == 0.9));
    let expected = books.iter().filter(|b| b.level == 0.9).count();
    assert_eq!(found.len(), expected);
}

#[test]
fn test_home_view_keeps_books_in_progress() {
    let mut state = memory_state();
    let (_, student) = login(&mut state, "s1");
    state.mark_as_reading(&student, &book_id("b801")).unwrap();

    let filter = CatalogFilter::new("", Some(0.9));
    let home = state.shelves(&student).home_view(&filter);

    assert_eq!(home.in_progress.len(), 1);
    assert_eq!(home.in_progress[0].level, 3.5);
    assert!(home.available.iter().any(|b| b.id.as_str() == PIGEON_ID));
    assert!(home.available.iter().all(|b| b.level == 0.9));

    // The library view filters every shelf
    let library = state.shelves(&student).filtered(&filter);
    assert!(library.in_progress.is_empty());
}

#[test]
fn test_levels_include_every_catalog_level() {
    let mut state = memory_state();
    let levels = state.levels();

    assert!(levels.contains(&0.9));
    assert!(levels.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_listen_url_prefers_stored_link() {
    let mut state = memory_state();
    let pigeon = state.book(&book_id(PIGEON_ID)).unwrap();

    assert!(state.listen_url_for(&pigeon).starts_with("https://drive.google.com/"));

    state.set_audio_link(PIGEON_TITLE, "https://audio.example/pigeon.mp3").unwrap();
    assert_eq!(state.listen_url_for(&pigeon), "https://audio.example/pigeon.mp3");
}

#[test]
fn test_reading_log_round_trips_through_storage() {
    let mut state = memory_state();
    let (_, student) = login(&mut state, "s5");
    state.mark_as_reading(&student, &book_id("b810")).unwrap();

    let before = state.reading_logs();
    state.store_mut().reload(keys::READING_LOGS.name());
    assert_eq!(state.reading_logs(), before);
}
