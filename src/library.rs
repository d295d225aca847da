//! Reading-status transitions and the per-student views of the catalog.

use crate::constants::GOOGLE_DRIVE_SEARCH_URL;
use crate::error::{HubError, HubResult};
use crate::logging::log_info;
use crate::models::{Book, BookId, ReadingLog, ReadingStatus, Student, StudentId};
use crate::state::{AppState, ConfirmAction};
use crate::store::{keys, StorageBackend};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Changed,
    Unchanged,
}

/// Which of the three disjoint views a book belongs to for one student.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shelf {
    InProgress,
    Completed,
    Available,
}

impl Shelf {
    pub fn of(status: Option<ReadingStatus>) -> Self {
        match status {
            Some(ReadingStatus::InProgress) => Shelf::InProgress,
            Some(ReadingStatus::Completed) => Shelf::Completed,
            None => Shelf::Available,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Shelf::InProgress => "in progress",
            Shelf::Completed => "completed",
            Shelf::Available => "available",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shelves {
    pub in_progress: Vec<Book>,
    pub completed: Vec<Book>,
    pub available: Vec<Book>,
}

impl Shelves {
    /// Partition the catalog by the student's log. Log entries for books no
    /// longer in the catalog are ignored.
    pub fn for_student(books: &[Book], log: &ReadingLog) -> Self {
        let mut shelves = Shelves::default();
        for book in books {
            match Shelf::of(log.status(&book.id)) {
                Shelf::InProgress => shelves.in_progress.push(book.clone()),
                Shelf::Completed => shelves.completed.push(book.clone()),
                Shelf::Available => shelves.available.push(book.clone()),
            }
        }
        shelves
    }

    pub fn shelf_of(&self, id: &BookId) -> Option<Shelf> {
        let contains = |list: &[Book]| list.iter().any(|b| &b.id == id);
        if contains(&self.in_progress) {
            Some(Shelf::InProgress)
        } else if contains(&self.completed) {
            Some(Shelf::Completed)
        } else if contains(&self.available) {
            Some(Shelf::Available)
        } else {
            None
        }
    }

    pub fn filtered(&self, filter: &CatalogFilter) -> Shelves {
        Shelves {
            in_progress: filter.apply(&self.in_progress),
            completed: filter.apply(&self.completed),
            available: filter.apply(&self.available),
        }
    }

    /// The home view: books being read always stay in sight, only the
    /// catalog of books to start is filtered.
    pub fn home_view(&self, filter: &CatalogFilter) -> Shelves {
        Shelves {
            in_progress: self.in_progress.clone(),
            completed: self.completed.clone(),
            available: filter.apply(&self.available),
        }
    }

    pub fn len(&self) -> usize {
        self.in_progress.len() + self.completed.len() + self.available.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Title search plus exact level match; an empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogFilter {
    pub query: String,
    pub level: Option<f64>,
}

impl CatalogFilter {
    pub fn new(query: impl Into<String>, level: Option<f64>) -> Self {
        Self {
            query: query.into(),
            level,
        }
    }

    pub fn matches(&self, book: &Book) -> bool {
        let query = self.query.trim().to_lowercase();
        let matches_query = query.is_empty() || book.title.to_lowercase().contains(&query);
        let matches_level = self.level.map_or(true, |level| book.level == level);
        matches_query && matches_level
    }

    pub fn apply(&self, books: &[Book]) -> Vec<Book> {
        books.iter().filter(|b| self.matches(b)).cloned().collect()
    }
}

/// Parse a level filter argument; `all` means no level filter.
pub fn parse_level(raw: &str) -> HubResult<Option<f64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|level| level.is_finite())
        .map(Some)
        .ok_or_else(|| HubError::InvalidInput(format!("'{}' is not a reading level", raw)))
}

/// Distinct catalog levels in ascending order.
pub fn unique_levels(books: &[Book]) -> Vec<f64> {
    let mut levels: Vec<f64> = books.iter().map(|b| b.level).collect();
    levels.sort_by(|a, b| a.total_cmp(b));
    levels.dedup();
    levels
}

/// Where to listen to a book: its stored audio link, else a Drive search for the title.
pub fn listen_url(book: &Book, audio_link: Option<&str>) -> String {
    match audio_link {
        Some(link) => link.to_string(),
        None => format!("{}{}", GOOGLE_DRIVE_SEARCH_URL, urlencoding::encode(&book.title)),
    }
}

impl<B: StorageBackend> AppState<B> {
    pub fn shelves(&mut self, student: &Student) -> Shelves {
        let books = self.books();
        let log = self.reading_log(&student.id);
        Shelves::for_student(&books, &log)
    }

    pub fn levels(&mut self) -> Vec<f64> {
        unique_levels(&self.books())
    }

    pub fn listen_url_for(&mut self, book: &Book) -> String {
        let link = self.audio_link_for(&book.title);
        listen_url(book, link.as_deref())
    }

    /// Not started -> in progress. Books that are already started stay as they are.
    pub fn mark_as_reading(&mut self, student: &Student, book: &BookId) -> HubResult<Transition> {
        let book = self
            .book(book)
            .ok_or_else(|| HubError::BookNotFound(book.to_string()))?;

        if self.reading_logs().status(&student.id, &book.id).is_some() {
            return Ok(Transition::Unchanged);
        }

        self.set_status(&student.id, &book.id, ReadingStatus::InProgress);
        log_info(&format!("{} started reading {}", student.id, book.id));
        Ok(Transition::Changed)
    }

    /// In progress -> completed.
    pub fn mark_as_complete(&mut self, student: &Student, book: &BookId) -> HubResult<Transition> {
        let title = self
            .book(book)
            .map(|b| b.title)
            .unwrap_or_else(|| book.to_string());

        match self.reading_logs().status(&student.id, book) {
            Some(ReadingStatus::Completed) => Ok(Transition::Unchanged),
            Some(ReadingStatus::InProgress) => {
                self.set_status(&student.id, book, ReadingStatus::Completed);
                log_info(&format!("{} completed {}", student.id, book));
                Ok(Transition::Changed)
            }
            None => Err(HubError::InvalidTransition {
                action: "mark as complete",
                book: title,
                current: "not started".to_string(),
            }),
        }
    }

    /// Ask to take a book off the student's list. Nothing changes until the
    /// returned action is passed to [`AppState::confirm`].
    pub fn request_removal(&mut self, student: &Student, book: &BookId) -> HubResult<ConfirmAction> {
        let title = self
            .book(book)
            .map(|b| b.title)
            .ok_or_else(|| HubError::BookNotFound(book.to_string()))?;

        Ok(ConfirmAction::RemoveFromLog {
            student: student.id.clone(),
            book: book.clone(),
            title,
        })
    }

    pub(crate) fn remove_from_log(&mut self, student: &StudentId, book: &BookId) -> Transition {
        if self.reading_logs().status(student, book).is_none() {
            return Transition::Unchanged;
        }

        self.store_mut().update(&keys::READING_LOGS, |mut logs| {
            logs.log_mut(student).remove(book);
            logs
        });
        log_info(&format!("{} removed {} from their list", student, book));
        Transition::Changed
    }

    fn set_status(&mut self, student: &StudentId, book: &BookId, status: ReadingStatus) {
        self.store_mut().update(&keys::READING_LOGS, |mut logs| {
            logs.log_mut(student).set(book.clone(), status);
            logs
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: &str, title: &str, level: f64) -> Book {
        Book {
            id: BookId::parse(id).unwrap(),
            title: title.to_string(),
            author: String::new(),
            level,
        }
    }

    #[test]
    fn test_filter_by_title_is_case_insensitive() {
        let books = vec![book("b1", "Amazing Dolphins", 3.5), book("b2", "Earth Day", 2.2)];
        let found = CatalogFilter::new("DOLPH", None).apply(&books);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id.as_str(), "b1");
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("all").unwrap(), None);
        assert_eq!(parse_level("").unwrap(), None);
        assert_eq!(parse_level("0.9").unwrap(), Some(0.9));
        assert!(parse_level("easy").is_err());
        assert!(parse_level("NaN").is_err());
    }

    #[test]
    fn test_unique_levels_sorted_and_deduplicated() {
        let books = vec![book("b1", "A", 3.5), book("b2", "B", 1.0), book("b3", "C", 3.5)];
        assert_eq!(unique_levels(&books), vec![1.0, 3.5]);
    }

    #[test]
    fn test_listen_url_falls_back_to_drive_search() {
        let b = book("b1", "Don't Let the Pigeon Drive the Bus!", 0.9);
        assert_eq!(listen_url(&b, Some("https://audio.example/p.mp3")), "https://audio.example/p.mp3");
        assert_eq!(
            listen_url(&b, None),
            "https://drive.google.com/drive/search?q=Don%27t%20Let%20the%20Pigeon%20Drive%20the%20Bus%21"
        );
    }
}
