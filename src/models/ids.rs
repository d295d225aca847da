use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::ADMIN_ID;
use crate::error::{HubError, HubResult};

/// Declares a validated string identifier: trimmed, never empty, and
/// serialized as a bare JSON string so it can key a JSON object.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $what:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub fn parse(raw: &str) -> HubResult<Self> {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(HubError::InvalidInput(format!("{} id cannot be empty", $what)));
                }
                Ok(Self(trimmed.to_string()))
            }

            pub(crate) fn new_unchecked(raw: &str) -> Self {
                Self(raw.to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = HubError;

            fn try_from(value: String) -> HubResult<Self> {
                Self::parse(&value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.0
            }
        }

        impl FromStr for $name {
            type Err = HubError;

            fn from_str(s: &str) -> HubResult<Self> {
                Self::parse(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

entity_id!(
    /// Stable identifier of a student profile.
    StudentId,
    "Student"
);

entity_id!(
    /// Stable identifier of a catalog book.
    BookId,
    "Book"
);

impl StudentId {
    pub fn admin() -> Self {
        Self::new_unchecked(ADMIN_ID)
    }

    pub fn is_admin(&self) -> bool {
        self.0 == ADMIN_ID
    }
}
