use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Text stored per book title (excerpts, audio links).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TitleMap(BTreeMap<String, String>);

impl TitleMap {
    /// Stored value for `title`. Blank values count as absent.
    pub fn get(&self, title: &str) -> Option<&str> {
        self.0
            .get(title)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    pub fn set(&mut self, title: impl Into<String>, value: impl Into<String>) {
        self.0.insert(title.into(), value.into());
    }

    pub fn remove(&mut self, title: &str) -> Option<String> {
        self.0.remove(title)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_value_is_absent() {
        let mut map = TitleMap::default();
        map.set("Earth Day", "   ");
        assert_eq!(map.get("Earth Day"), None);

        map.set("Earth Day", "The earth is our home.");
        assert_eq!(map.get("Earth Day"), Some("The earth is our home."));
        assert_eq!(map.get("earth day"), None);
    }
}
