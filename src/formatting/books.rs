use colored::*;
use serde::Serialize;

use super::theme::{shelf_color, SemanticColor, ThemedColorize};
use super::utils::{dictionary_url, format_level, shelf_icon, truncate};
use crate::error::{HubError, HubResult};
use crate::library::Shelf;
use crate::models::{Book, Student, WordDefinition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    List,
    Table,
    Json,
}

impl OutputFormat {
    pub fn parse(raw: &str) -> HubResult<Self> {
        match raw.to_lowercase().as_str() {
            "list" => Ok(OutputFormat::List),
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(HubError::InvalidInput(format!(
                "Unknown format '{}'. Use list, table or json.",
                other
            ))),
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to render JSON: {}", e),
    }
}

/// Print a titled block of books that all sit on the same shelf.
pub fn print_books(heading: &str, books: &[Book], shelf: Shelf, format: OutputFormat) {
    if format == OutputFormat::Json {
        print_json(books);
        return;
    }

    println!(
        "{} {}",
        heading.with_theme(SemanticColor::Header).bold(),
        format!("({})", books.len()).dimmed()
    );

    if books.is_empty() {
        println!("  {}", "No books here yet.".dimmed());
        return;
    }

    match format {
        OutputFormat::Table => {
            println!("{}", "─".repeat(90).dimmed());
            println!(
                "  {:<8} {:<48} {:<24} {:<6}",
                "ID".bold(),
                "Title".bold(),
                "Author".bold(),
                "Level".bold()
            );
            println!("{}", "─".repeat(90).dimmed());
            for book in books {
                println!(
                    "{} {:<8} {:<48} {:<24} {:<6}",
                    shelf_icon(shelf),
                    book.id.as_str().blue(),
                    truncate(&book.title, 48),
                    truncate(&book.author, 24).with_theme(SemanticColor::Author),
                    book.level.to_string().with_theme(SemanticColor::Level)
                );
            }
            println!("{}", "─".repeat(90).dimmed());
        }
        _ => {
            for book in books {
                let author = if book.author.is_empty() {
                    String::new()
                } else {
                    format!(" by {}", book.author)
                };
                println!(
                    "  {} {} {}{} {}",
                    shelf_icon(shelf),
                    format!("[{}]", book.id).dimmed(),
                    book.title.with_theme(shelf_color(shelf)).bold(),
                    author.with_theme(SemanticColor::Author),
                    format_level(book.level).with_theme(SemanticColor::Level)
                );
            }
        }
    }
}

pub fn print_book_detail(book: &Book, shelf: Shelf, listen_url: &str) {
    println!("{}", book.title.with_theme(SemanticColor::BookTitle).bold());
    if !book.author.is_empty() {
        println!("{}: {}", "Author".bold(), book.author);
    }
    println!("{}: {}", "Level".bold(), book.level.to_string().with_theme(SemanticColor::Level));
    println!("{}: {} {}", "Status".bold(), shelf_icon(shelf), shelf.label());
    println!("{}: {}", "Listen".bold(), listen_url.with_theme(SemanticColor::Link));
}

pub fn print_students(students: &[Student], current: Option<&Student>, format: OutputFormat) {
    if format == OutputFormat::Json {
        print_json(students);
        return;
    }

    if students.is_empty() {
        println!("{}", "No students found.".dimmed());
        return;
    }

    for student in students {
        let marker = if current.is_some_and(|c| c.id == student.id) {
            "▶".green().bold()
        } else {
            " ".normal()
        };
        let name = if student.is_admin() {
            student.display_name().with_theme(SemanticColor::Teacher).bold()
        } else {
            student.display_name().with_theme(SemanticColor::Student)
        };
        println!(
            "{} {:<14} {} {}",
            marker,
            student.id.as_str().dimmed(),
            name,
            format_level(student.level).with_theme(SemanticColor::Level)
        );
    }
}

pub fn print_definitions(title: &str, definitions: &[WordDefinition]) {
    println!(
        "{}",
        format!("Hard words in \"{}\"", title)
            .with_theme(SemanticColor::Header)
            .bold()
    );

    if definitions.is_empty() {
        println!("{}", "No hard words found. Looks like you know them all!".dimmed());
        return;
    }

    for definition in definitions {
        println!(
            "  {}: {}",
            definition.word.with_theme(SemanticColor::Word).bold(),
            definition.definition
        );
        println!("    {}", dictionary_url(&definition.word).with_theme(SemanticColor::Muted));
    }
}
