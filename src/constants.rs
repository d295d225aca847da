pub const APP_DIR_NAME: &str = "reading-hub";
pub const CONFIG_FILE: &str = ".reading-hub-config.json";
pub const DATA_DIR_ENV: &str = "READING_HUB_DATA_DIR";

/// Reserved profile id of the teacher account. It can never be deleted.
pub const ADMIN_ID: &str = "admin";
pub const ADMIN_DISPLAY_NAME: &str = "Teacher";

// Storage keys, one JSON document each
pub const STUDENTS_KEY: &str = "students_data";
pub const BOOKS_KEY: &str = "books_data";
pub const READING_LOGS_KEY: &str = "reading_logs_data";
pub const LOGGED_IN_STUDENT_KEY: &str = "logged_in_student_id";
pub const BOOK_EXCERPTS_KEY: &str = "book_excerpts_data";
pub const AUDIO_LINKS_KEY: &str = "audio_links_data";

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_DEFINITION_LANGUAGE: &str = "Korean";
pub const API_KEY_ENV_VARS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];

pub const RENAISSANCE_URL: &str =
    "https://global-zone60.renaissance-go.com/welcomeportal/rpid/RPNA67ED";
pub const NAVER_DICT_URL: &str = "https://dict.naver.com/enkodict/#/search?query=";
pub const GOOGLE_DRIVE_SEARCH_URL: &str = "https://drive.google.com/drive/search?q=";

pub const WORD_DEFINITIONS_PROMPT: &str = r#"You are helping a young English learner who reads at level {student_level}.
They are reading "{book_title}" (book level {book_level}).
From the excerpt below, pick the words this student is most likely not to know (at most 10).
For each word give a short, simple definition in {language} that a child can understand.
Return an empty list if every word is easy.

Excerpt:
"""
{excerpt}
""""#;

pub const DICTIONARY_PROMPT: &str = r#"Explain the English word "{word}" for a young learner.
Answer in {language} with one or two short sentences and no extra formatting."#;
