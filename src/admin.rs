//! Teacher-only maintenance of students, books, excerpts and audio links.

use chrono::Utc;
use reqwest::Url;

use crate::error::{HubError, HubResult};
use crate::logging::log_info;
use crate::models::{Book, BookId, Student, StudentId};
use crate::state::{AppState, ConfirmAction};
use crate::store::{keys, StorageBackend};

#[derive(Debug, Clone, PartialEq)]
pub struct StudentForm {
    pub name: String,
    pub level: f64,
    pub renaissance_id: Option<String>,
    pub renaissance_pw: Option<String>,
}

impl StudentForm {
    pub fn new(name: impl Into<String>, level: f64) -> Self {
        Self {
            name: name.into(),
            level,
            renaissance_id: None,
            renaissance_pw: None,
        }
    }

    pub fn with_renaissance(mut self, id: Option<String>, pw: Option<String>) -> Self {
        self.renaissance_id = id;
        self.renaissance_pw = pw;
        self
    }

    fn validate(&self) -> HubResult<()> {
        if self.name.trim().is_empty() {
            return Err(HubError::InvalidInput("Student name is required".to_string()));
        }
        validate_level(self.level)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub level: f64,
}

impl BookForm {
    fn validate(&self) -> HubResult<()> {
        if self.title.trim().is_empty() {
            return Err(HubError::InvalidInput("Book title is required".to_string()));
        }
        validate_level(self.level)
    }
}

fn validate_level(level: f64) -> HubResult<()> {
    if level.is_finite() && level >= 0.0 {
        Ok(())
    } else {
        Err(HubError::InvalidInput(format!("Level must be zero or more, got {}", level)))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// `<prefix><unix millis>`, bumped until it no longer collides.
fn generate_id(prefix: char, taken: impl Fn(&str) -> bool) -> String {
    let mut stamp = Utc::now().timestamp_millis();
    loop {
        let candidate = format!("{}{}", prefix, stamp);
        if !taken(&candidate) {
            return candidate;
        }
        stamp += 1;
    }
}

impl<B: StorageBackend> AppState<B> {
    pub fn create_student(&mut self, form: StudentForm) -> HubResult<Student> {
        form.validate()?;

        let students = self.students();
        let id = generate_id('s', |candidate| students.iter().any(|s| s.id.as_str() == candidate));
        let student = Student {
            id: StudentId::parse(&id)?,
            name: form.name.trim().to_string(),
            level: form.level,
            renaissance_id: non_blank(form.renaissance_id),
            renaissance_pw: non_blank(form.renaissance_pw),
        };

        let created = student.clone();
        self.store_mut().update(&keys::STUDENTS, move |mut students| {
            students.push(student);
            students
        });
        log_info(&format!("Created student {}", created.id));
        Ok(created)
    }

    pub fn update_student(&mut self, id: &StudentId, form: StudentForm) -> HubResult<Student> {
        form.validate()?;

        let mut student = self
            .student(id)
            .ok_or_else(|| HubError::StudentNotFound(id.to_string()))?;
        student.name = form.name.trim().to_string();
        student.level = form.level;
        student.renaissance_id = non_blank(form.renaissance_id);
        student.renaissance_pw = non_blank(form.renaissance_pw);

        let updated = student.clone();
        self.store_mut().update(&keys::STUDENTS, move |students| {
            students
                .into_iter()
                .map(|s| if s.id == student.id { student.clone() } else { s })
                .collect()
        });
        log_info(&format!("Updated student {}", updated.id));
        Ok(updated)
    }

    /// Ask to delete a student. The teacher profile is refused outright.
    pub fn request_student_deletion(&mut self, id: &StudentId) -> HubResult<ConfirmAction> {
        if id.is_admin() {
            return Err(HubError::ProtectedIdentity);
        }
        let student = self
            .student(id)
            .ok_or_else(|| HubError::StudentNotFound(id.to_string()))?;

        Ok(ConfirmAction::DeleteStudent {
            id: student.id,
            name: student.name,
        })
    }

    pub(crate) fn delete_student(&mut self, id: &StudentId) {
        if id.is_admin() {
            return;
        }
        self.store_mut().update(&keys::STUDENTS, |students| {
            students.into_iter().filter(|s| &s.id != id).collect()
        });
        log_info(&format!("Deleted student {}", id));
    }

    pub fn add_book(&mut self, form: BookForm) -> HubResult<Book> {
        form.validate()?;

        let books = self.books();
        let id = generate_id('b', |candidate| books.iter().any(|b| b.id.as_str() == candidate));
        let book = Book {
            id: BookId::parse(&id)?,
            title: form.title.trim().to_string(),
            author: form.author.trim().to_string(),
            level: form.level,
        };

        let added = book.clone();
        self.store_mut().update(&keys::BOOKS, move |mut books| {
            books.push(book);
            books
        });
        log_info(&format!("Added book {}", added.id));
        Ok(added)
    }

    pub fn request_book_deletion(&mut self, id: &BookId) -> HubResult<ConfirmAction> {
        let book = self
            .book(id)
            .ok_or_else(|| HubError::BookNotFound(id.to_string()))?;

        Ok(ConfirmAction::DeleteBook {
            id: book.id,
            title: book.title,
        })
    }

    pub(crate) fn delete_book(&mut self, id: &BookId) {
        self.store_mut().update(&keys::BOOKS, |books| {
            books.into_iter().filter(|b| &b.id != id).collect()
        });
        log_info(&format!("Deleted book {}", id));
    }

    /// Store the excerpt used for word help. A blank text clears it.
    pub fn set_excerpt(&mut self, title: &str, text: &str) -> HubResult<()> {
        let title = self.require_title(title)?;
        let text = text.trim().to_string();
        self.store_mut().update(&keys::BOOK_EXCERPTS, move |mut excerpts| {
            excerpts.set(title, text);
            excerpts
        });
        Ok(())
    }

    /// Store the audio link for a title. A blank url clears it.
    pub fn set_audio_link(&mut self, title: &str, url: &str) -> HubResult<()> {
        let title = self.require_title(title)?;
        let url = url.trim().to_string();
        if !url.is_empty() {
            Url::parse(&url)
                .map_err(|e| HubError::InvalidInput(format!("'{}' is not a valid URL: {}", url, e)))?;
        }

        self.store_mut().update(&keys::AUDIO_LINKS, move |mut links| {
            links.set(title, url);
            links
        });
        Ok(())
    }

    fn require_title(&mut self, title: &str) -> HubResult<String> {
        self.book_by_title(title)
            .map(|b| b.title)
            .ok_or_else(|| HubError::BookNotFound(title.to_string()))
    }
}
