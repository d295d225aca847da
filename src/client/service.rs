use std::future::Future;

use crate::error::{HubError, HubResult};
use crate::logging::{log_debug, log_error};
use crate::models::{Book, Student, WordDefinition};
use crate::state::AppState;
use crate::store::StorageBackend;

/// The two lookups the generative-text collaborator provides.
pub trait DefinitionService {
    fn word_definitions(
        &self,
        student_level: f64,
        book_title: &str,
        book_level: f64,
        excerpt: &str,
    ) -> impl Future<Output = HubResult<Vec<WordDefinition>>> + Send;

    fn dictionary_definition(&self, word: &str) -> impl Future<Output = HubResult<String>> + Send;
}

/// Outcome of asking for help with a book's hard words.
#[derive(Debug, Clone, PartialEq)]
pub enum WordHelp {
    NoExcerpt,
    Definitions(Vec<WordDefinition>),
    Failed(String),
}

impl WordHelp {
    pub fn is_error(&self) -> bool {
        matches!(self, WordHelp::NoExcerpt | WordHelp::Failed(_))
    }
}

/// Everything a word-help call needs, detached from the state so it can
/// run on another task.
#[derive(Debug, Clone, PartialEq)]
pub struct WordHelpRequest {
    pub student_level: f64,
    pub book_title: String,
    pub book_level: f64,
    pub excerpt: String,
}

impl WordHelpRequest {
    pub async fn send<S: DefinitionService>(&self, service: &S) -> WordHelp {
        log_debug(&format!("Requesting word help for '{}'", self.book_title));
        match service
            .word_definitions(self.student_level, &self.book_title, self.book_level, &self.excerpt)
            .await
        {
            Ok(definitions) => WordHelp::Definitions(definitions),
            Err(e) => {
                log_error(&format!("Word help for '{}' failed: {}", self.book_title, e));
                WordHelp::Failed(e.to_string())
            }
        }
    }
}

/// Build the request, or stop with [`WordHelp::NoExcerpt`] when the title
/// has no stored excerpt.
pub fn prepare_word_help<B: StorageBackend>(
    state: &mut AppState<B>,
    student: &Student,
    book: &Book,
) -> Result<WordHelpRequest, WordHelp> {
    let excerpt = state.excerpt_for(&book.title).ok_or(WordHelp::NoExcerpt)?;
    Ok(WordHelpRequest {
        student_level: student.level,
        book_title: book.title.clone(),
        book_level: book.level,
        excerpt,
    })
}

pub async fn request_word_help<B, S>(
    state: &mut AppState<B>,
    service: &S,
    student: &Student,
    book: &Book,
) -> WordHelp
where
    B: StorageBackend,
    S: DefinitionService,
{
    match prepare_word_help(state, student, book) {
        Ok(request) => request.send(service).await,
        Err(outcome) => outcome,
    }
}

/// Outcome of a free dictionary lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum DictionaryLookup {
    EmptyInput,
    Definition { word: String, text: String },
    Failed(String),
}

pub fn validate_word(word: &str) -> HubResult<String> {
    let trimmed = word.trim();
    if trimmed.is_empty() {
        Err(HubError::EmptyWord)
    } else {
        Ok(trimmed.to_string())
    }
}

pub async fn lookup_word<S: DefinitionService>(service: &S, word: &str) -> DictionaryLookup {
    let word = match validate_word(word) {
        Ok(word) => word,
        Err(_) => return DictionaryLookup::EmptyInput,
    };

    match service.dictionary_definition(&word).await {
        Ok(text) => DictionaryLookup::Definition { word, text },
        Err(e) => {
            log_error(&format!("Dictionary lookup for '{}' failed: {}", word, e));
            DictionaryLookup::Failed(e.to_string())
        }
    }
}
