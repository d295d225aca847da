use std::fmt;

/// A typed storage key: the document name plus the seed adopted when
/// nothing usable is stored under it.
pub struct StateKey<T> {
    name: &'static str,
    initial: fn() -> T,
}

impl<T> StateKey<T> {
    pub const fn new(name: &'static str, initial: fn() -> T) -> Self {
        Self { name, initial }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn initial(&self) -> T {
        (self.initial)()
    }
}

impl<T> Clone for StateKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for StateKey<T> {}

impl<T> fmt::Debug for StateKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StateKey").field(&self.name).finish()
    }
}

/// The six documents the application persists.
pub mod keys {
    use super::StateKey;
    use crate::constants::{
        AUDIO_LINKS_KEY, BOOKS_KEY, BOOK_EXCERPTS_KEY, LOGGED_IN_STUDENT_KEY, READING_LOGS_KEY,
        STUDENTS_KEY,
    };
    use crate::models::{Book, Student, StudentId, StudentReadingData, TitleMap};
    use crate::seed;

    fn nobody() -> Option<StudentId> {
        None
    }

    pub const STUDENTS: StateKey<Vec<Student>> = StateKey::new(STUDENTS_KEY, seed::initial_students);
    pub const BOOKS: StateKey<Vec<Book>> = StateKey::new(BOOKS_KEY, seed::initial_books);
    pub const READING_LOGS: StateKey<StudentReadingData> =
        StateKey::new(READING_LOGS_KEY, StudentReadingData::default);
    pub const LOGGED_IN_STUDENT: StateKey<Option<StudentId>> =
        StateKey::new(LOGGED_IN_STUDENT_KEY, nobody);
    pub const BOOK_EXCERPTS: StateKey<TitleMap> =
        StateKey::new(BOOK_EXCERPTS_KEY, seed::initial_excerpts);
    pub const AUDIO_LINKS: StateKey<TitleMap> =
        StateKey::new(AUDIO_LINKS_KEY, seed::initial_audio_links);
}
