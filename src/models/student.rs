use serde::{Deserialize, Serialize};

use super::StudentId;
use crate::constants::ADMIN_DISPLAY_NAME;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub level: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renaissance_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renaissance_pw: Option<String>,
}

impl Student {
    pub fn is_admin(&self) -> bool {
        self.id.is_admin()
    }

    /// Name shown on the selection screen; the teacher profile is never shown by its stored name.
    pub fn display_name(&self) -> &str {
        if self.is_admin() {
            ADMIN_DISPLAY_NAME
        } else {
            &self.name
        }
    }
}
