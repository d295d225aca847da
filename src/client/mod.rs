pub mod gemini;
pub mod service;

pub use gemini::GeminiClient;
pub use service::{
    lookup_word, prepare_word_help, request_word_help, validate_word, DefinitionService,
    DictionaryLookup, WordHelp, WordHelpRequest,
};
