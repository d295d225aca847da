use std::sync::atomic::{AtomicUsize, Ordering};

use crate::client::DefinitionService;
use crate::error::{HubError, HubResult};
use crate::models::{BookId, Student, StudentId, WordDefinition};
use crate::session::Session;
use crate::state::AppState;
use crate::store::MemoryBackend;

pub const PIGEON_ID: &str = "b857";
pub const PIGEON_TITLE: &str = "Don't Let the Pigeon Drive the Bus!";

/// `DefinitionService` that answers from a script and counts its calls.
pub struct ScriptedService {
    words: Result<Vec<WordDefinition>, String>,
    definition: Result<String, String>,
    calls: AtomicUsize,
}

impl ScriptedService {
    pub fn answering(words: &[(&str, &str)]) -> Self {
        Self {
            words: Ok(words
                .iter()
                .map(|(word, definition)| WordDefinition {
                    word: word.to_string(),
                    definition: definition.to_string(),
                })
                .collect()),
            definition: Ok("a short meaning".to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            words: Err(message.to_string()),
            definition: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DefinitionService for ScriptedService {
    async fn word_definitions(
        &self,
        _student_level: f64,
        _book_title: &str,
        _book_level: f64,
        _excerpt: &str,
    ) -> HubResult<Vec<WordDefinition>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.words.clone().map_err(HubError::ApiError)
    }

    async fn dictionary_definition(&self, word: &str) -> HubResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.definition
            .clone()
            .map(|text| format!("{}: {}", word, text))
            .map_err(HubError::ApiError)
    }
}

pub fn memory_state() -> AppState<MemoryBackend> {
    AppState::new(MemoryBackend::new())
}

pub fn login(state: &mut AppState<MemoryBackend>, id: &str) -> (Session, Student) {
    let session = Session::login(state, &StudentId::parse(id).unwrap()).unwrap();
    let student = session.require_student().unwrap().clone();
    (session, student)
}

pub fn book_id(raw: &str) -> BookId {
    BookId::parse(raw).unwrap()
}
