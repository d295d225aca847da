use colored::*;

use crate::constants::NAVER_DICT_URL;
use crate::library::Shelf;

/// Shorten to `max_len` characters, never splitting a character.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

pub fn format_level(level: f64) -> String {
    format!("Lv {}", level)
}

pub fn shelf_icon(shelf: Shelf) -> ColoredString {
    match shelf {
        Shelf::InProgress => "◐".yellow(),
        Shelf::Completed => "✓".green(),
        Shelf::Available => "○".normal(),
    }
}

pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 12 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

pub fn dictionary_url(word: &str) -> String {
    format!("{}{}", NAVER_DICT_URL, urlencoding::encode(word))
}
