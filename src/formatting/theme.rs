use std::collections::HashMap;
use std::sync::RwLock;

use colored::{Color, Colorize};
use lazy_static::lazy_static;

use crate::library::Shelf;

/// Semantic color definitions for consistent terminal output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticColor {
    // Shelf colors
    ShelfInProgress,
    ShelfCompleted,
    ShelfAvailable,

    // Entity colors
    BookTitle,
    Author,
    Level,
    Student,
    Teacher,
    Word,

    // UI colors
    Header,
    Error,
    Success,
    Muted,
    Link,
}

#[derive(Debug, Clone)]
pub struct ColorTheme {
    colors: HashMap<SemanticColor, Color>,
}

impl ColorTheme {
    pub fn new() -> Self {
        let colors = HashMap::from([
            (SemanticColor::ShelfInProgress, Color::Yellow),
            (SemanticColor::ShelfCompleted, Color::Green),
            (SemanticColor::ShelfAvailable, Color::White),
            (SemanticColor::BookTitle, Color::BrightWhite),
            (SemanticColor::Author, Color::TrueColor { r: 150, g: 150, b: 150 }),
            (SemanticColor::Level, Color::Cyan),
            (SemanticColor::Student, Color::BrightBlue),
            (SemanticColor::Teacher, Color::Magenta),
            (SemanticColor::Word, Color::BrightCyan),
            (SemanticColor::Header, Color::TrueColor { r: 2, g: 132, b: 199 }),
            (SemanticColor::Error, Color::Red),
            (SemanticColor::Success, Color::Green),
            (SemanticColor::Muted, Color::TrueColor { r: 110, g: 110, b: 110 }),
            (SemanticColor::Link, Color::Blue),
        ]);
        Self { colors }
    }

    pub fn get(&self, semantic: SemanticColor) -> Color {
        self.colors.get(&semantic).copied().unwrap_or(Color::White)
    }

    pub fn set(&mut self, semantic: SemanticColor, color: Color) {
        self.colors.insert(semantic, color);
    }
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static! {
    static ref THEME: RwLock<ColorTheme> = RwLock::new(ColorTheme::new());
}

pub fn set_theme(theme: ColorTheme) {
    if let Ok(mut current) = THEME.write() {
        *current = theme;
    }
}

pub fn theme_color(semantic: SemanticColor) -> Color {
    THEME
        .read()
        .map(|theme| theme.get(semantic))
        .unwrap_or(Color::White)
}

pub fn shelf_color(shelf: Shelf) -> SemanticColor {
    match shelf {
        Shelf::InProgress => SemanticColor::ShelfInProgress,
        Shelf::Completed => SemanticColor::ShelfCompleted,
        Shelf::Available => SemanticColor::ShelfAvailable,
    }
}

/// Extension trait for colorizing strings with semantic colors
pub trait ThemedColorize {
    fn with_theme(&self, semantic: SemanticColor) -> colored::ColoredString;
}

impl ThemedColorize for &str {
    fn with_theme(&self, semantic: SemanticColor) -> colored::ColoredString {
        self.color(theme_color(semantic))
    }
}

impl ThemedColorize for String {
    fn with_theme(&self, semantic: SemanticColor) -> colored::ColoredString {
        self.as_str().color(theme_color(semantic))
    }
}
