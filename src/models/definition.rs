use serde::{Deserialize, Serialize};

/// One explained word from an excerpt. Produced per request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordDefinition {
    pub word: String,
    pub definition: String,
}
