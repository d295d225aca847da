use thiserror::Error;

#[derive(Error, Debug)]
pub enum HubError {
    #[error("API key not found. Set GEMINI_API_KEY or run 'reading-hub auth --api-key <KEY>'.")]
    ApiKeyNotFound,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Definition service failed: {0}")]
    ApiError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("No student is logged in. Run 'reading-hub login <ID>' first.")]
    NotLoggedIn,

    #[error("This view is only available to the teacher profile.")]
    AdminRequired,

    #[error("Student '{0}' not found")]
    StudentNotFound(String),

    #[error("Book '{0}' not found")]
    BookNotFound(String),

    #[error("The teacher profile cannot be deleted.")]
    ProtectedIdentity,

    #[error("Cannot {action}: '{book}' is {current}")]
    InvalidTransition {
        action: &'static str,
        book: String,
        current: String,
    },

    #[error("No excerpt is available for '{0}'.")]
    NoExcerpt(String),

    #[error("Please enter a word to look up.")]
    EmptyWord,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Terminal error: {0}")]
    TerminalError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type HubResult<T> = Result<T, HubError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> HubResult<T>;
    fn with_context<F>(self, f: F) -> HubResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> HubResult<T> {
        self.map_err(|e| HubError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> HubResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| HubError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> HubResult<T> {
        self.ok_or_else(|| HubError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> HubResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| HubError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! hub_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::HubError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::HubError::$error_type(format!($fmt, $($arg)*))
    };
}
