use crate::error::{HubError, HubResult};
use crate::logging::log_info;
use crate::models::{Student, StudentId};
use crate::state::AppState;
use crate::store::StorageBackend;

/// The resolved identity for one run. Views receive it explicitly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    student: Option<Student>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Resolve the persisted id against the current student list. An id
    /// that no longer names a student resolves to no student.
    pub fn resolve<B: StorageBackend>(state: &mut AppState<B>) -> Self {
        let student = state.logged_in_id().and_then(|id| state.student(&id));
        Self { student }
    }

    pub fn login<B: StorageBackend>(state: &mut AppState<B>, id: &StudentId) -> HubResult<Self> {
        let student = state
            .student(id)
            .ok_or_else(|| HubError::StudentNotFound(id.to_string()))?;

        state.set_logged_in(Some(student.id.clone()));
        log_info(&format!("Logged in as {}", student.id));

        Ok(Self {
            student: Some(student),
        })
    }

    pub fn logout<B: StorageBackend>(state: &mut AppState<B>) -> Self {
        state.set_logged_in(None);
        log_info("Logged out");
        Self::anonymous()
    }

    pub fn student(&self) -> Option<&Student> {
        self.student.as_ref()
    }

    pub fn is_admin(&self) -> bool {
        self.student.as_ref().is_some_and(Student::is_admin)
    }

    pub fn require_student(&self) -> HubResult<&Student> {
        self.student.as_ref().ok_or(HubError::NotLoggedIn)
    }

    pub fn require_admin(&self) -> HubResult<&Student> {
        let student = self.require_student()?;
        if student.is_admin() {
            Ok(student)
        } else {
            Err(HubError::AdminRequired)
        }
    }
}
