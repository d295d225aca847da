use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{BookId, StudentId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReadingStatus {
    InProgress,
    Completed,
}

impl fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadingStatus::InProgress => f.write_str("in progress"),
            ReadingStatus::Completed => f.write_str("completed"),
        }
    }
}

/// One student's record of started books. A book that is absent has not been started.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReadingLog(BTreeMap<BookId, ReadingStatus>);

impl ReadingLog {
    pub fn status(&self, book: &BookId) -> Option<ReadingStatus> {
        self.0.get(book).copied()
    }

    pub fn set(&mut self, book: BookId, status: ReadingStatus) -> Option<ReadingStatus> {
        self.0.insert(book, status)
    }

    pub fn remove(&mut self, book: &BookId) -> Option<ReadingStatus> {
        self.0.remove(book)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BookId, ReadingStatus)> {
        self.0.iter().map(|(id, status)| (id, *status))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Reading logs of every student, keyed by student id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentReadingData(BTreeMap<StudentId, ReadingLog>);

impl StudentReadingData {
    pub fn log(&self, student: &StudentId) -> Option<&ReadingLog> {
        self.0.get(student)
    }

    pub fn log_mut(&mut self, student: &StudentId) -> &mut ReadingLog {
        self.0.entry(student.clone()).or_default()
    }

    pub fn status(&self, student: &StudentId, book: &BookId) -> Option<ReadingStatus> {
        self.log(student).and_then(|log| log.status(book))
    }

    pub fn students(&self) -> impl Iterator<Item = &StudentId> {
        self.0.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        let mut data = StudentReadingData::default();
        let student = StudentId::parse("s1").unwrap();
        data.log_mut(&student)
            .set(BookId::parse("b801").unwrap(), ReadingStatus::InProgress);
        data.log_mut(&student)
            .set(BookId::parse("b802").unwrap(), ReadingStatus::Completed);

        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(json, r#"{"s1":{"b801":"IN_PROGRESS","b802":"COMPLETED"}}"#);

        let back: StudentReadingData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn test_one_status_per_book() {
        let mut log = ReadingLog::default();
        let book = BookId::parse("b801").unwrap();
        log.set(book.clone(), ReadingStatus::InProgress);
        let previous = log.set(book.clone(), ReadingStatus::Completed);

        assert_eq!(previous, Some(ReadingStatus::InProgress));
        assert_eq!(log.len(), 1);
        assert_eq!(log.status(&book), Some(ReadingStatus::Completed));
    }

    #[test]
    fn test_missing_student_has_no_log() {
        let data = StudentReadingData::default();
        let student = StudentId::parse("s9").unwrap();
        assert!(data.log(&student).is_none());
        assert_eq!(data.status(&student, &BookId::parse("b801").unwrap()), None);
    }
}
