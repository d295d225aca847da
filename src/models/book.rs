use serde::{Deserialize, Serialize};

use super::BookId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    #[serde(default)]
    pub author: String,
    pub level: f64,
}
