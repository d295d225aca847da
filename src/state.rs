use std::path::Path;

use crate::error::HubResult;
use crate::models::{Book, BookId, ReadingLog, Student, StudentId, StudentReadingData, TitleMap};
use crate::store::{keys, FileBackend, StorageBackend, Store, SubscriptionId};

/// The application's single state owner. Views read entities through it
/// and every mutation goes through one of its methods.
pub struct AppState<B: StorageBackend = FileBackend> {
    store: Store<B>,
}

impl AppState<FileBackend> {
    /// Open the state kept in `dir`, creating the directory when needed.
    pub fn open(dir: &Path) -> HubResult<Self> {
        Ok(Self::new(FileBackend::open(dir)?))
    }
}

impl<B: StorageBackend> AppState<B> {
    pub fn new(backend: B) -> Self {
        Self {
            store: Store::new(backend),
        }
    }

    pub fn backend(&self) -> &B {
        self.store.backend()
    }

    pub(crate) fn store_mut(&mut self) -> &mut Store<B> {
        &mut self.store
    }

    pub fn students(&mut self) -> Vec<Student> {
        self.store.get(&keys::STUDENTS)
    }

    pub fn student(&mut self, id: &StudentId) -> Option<Student> {
        self.students().into_iter().find(|s| &s.id == id)
    }

    pub fn books(&mut self) -> Vec<Book> {
        self.store.get(&keys::BOOKS)
    }

    pub fn book(&mut self, id: &BookId) -> Option<Book> {
        self.books().into_iter().find(|b| &b.id == id)
    }

    pub fn book_by_title(&mut self, title: &str) -> Option<Book> {
        self.books().into_iter().find(|b| b.title == title)
    }

    /// Look a book up by id first, then by case-insensitive title.
    pub fn find_book(&mut self, id_or_title: &str) -> Option<Book> {
        let needle = id_or_title.trim();
        let books = self.books();
        books
            .iter()
            .find(|b| b.id.as_str() == needle)
            .or_else(|| books.iter().find(|b| b.title.eq_ignore_ascii_case(needle)))
            .cloned()
    }

    pub fn reading_logs(&mut self) -> StudentReadingData {
        self.store.get(&keys::READING_LOGS)
    }

    /// The student's log; an empty log when they never started a book.
    pub fn reading_log(&mut self, student: &StudentId) -> ReadingLog {
        self.reading_logs().log(student).cloned().unwrap_or_default()
    }

    pub fn excerpts(&mut self) -> TitleMap {
        self.store.get(&keys::BOOK_EXCERPTS)
    }

    pub fn excerpt_for(&mut self, title: &str) -> Option<String> {
        self.excerpts().get(title).map(str::to_string)
    }

    pub fn audio_links(&mut self) -> TitleMap {
        self.store.get(&keys::AUDIO_LINKS)
    }

    pub fn audio_link_for(&mut self, title: &str) -> Option<String> {
        self.audio_links().get(title).map(str::to_string)
    }

    pub fn logged_in_id(&mut self) -> Option<StudentId> {
        self.store.get(&keys::LOGGED_IN_STUDENT)
    }

    pub(crate) fn set_logged_in(&mut self, id: Option<StudentId>) {
        self.store.set(&keys::LOGGED_IN_STUDENT, id);
    }

    /// Run `callback` with the key name after every write.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.store.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    /// Drop every mirrored value so the next reads come from storage.
    pub fn reload_all(&mut self) {
        for name in [
            keys::STUDENTS.name(),
            keys::BOOKS.name(),
            keys::READING_LOGS.name(),
            keys::LOGGED_IN_STUDENT.name(),
            keys::BOOK_EXCERPTS.name(),
            keys::AUDIO_LINKS.name(),
        ] {
            self.store.reload(name);
        }
    }

    /// Execute a destructive action the user has confirmed.
    pub fn confirm(&mut self, action: ConfirmAction) {
        match action {
            ConfirmAction::RemoveFromLog { student, book, .. } => {
                self.remove_from_log(&student, &book);
            }
            ConfirmAction::DeleteStudent { id, .. } => self.delete_student(&id),
            ConfirmAction::DeleteBook { id, .. } => self.delete_book(&id),
        }
    }
}

/// A destructive mutation waiting for explicit confirmation.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmAction {
    RemoveFromLog {
        student: StudentId,
        book: BookId,
        title: String,
    },
    DeleteStudent {
        id: StudentId,
        name: String,
    },
    DeleteBook {
        id: BookId,
        title: String,
    },
}

impl ConfirmAction {
    pub fn title(&self) -> &'static str {
        match self {
            ConfirmAction::RemoveFromLog { .. } => "Remove book",
            ConfirmAction::DeleteStudent { .. } => "Delete student",
            ConfirmAction::DeleteBook { .. } => "Delete book",
        }
    }

    pub fn message(&self) -> String {
        match self {
            ConfirmAction::RemoveFromLog { title, .. } => {
                format!("Remove '{}' from your list?", title)
            }
            ConfirmAction::DeleteStudent { name, .. } => {
                format!("Really delete student '{}'?", name)
            }
            ConfirmAction::DeleteBook { title, .. } => {
                format!("Really delete '{}' from the catalog?", title)
            }
        }
    }
}
