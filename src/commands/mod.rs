use std::io::{self, Write};

use clap::ArgMatches;
use colored::*;

use crate::error::{HubError, HubResult};
use crate::formatting::OutputFormat;
use crate::library::{parse_level, CatalogFilter};
use crate::models::Book;
use crate::state::{AppState, ConfirmAction};
use crate::store::StorageBackend;

pub mod admin;
pub mod auth;
pub mod books;
pub mod library;
pub mod profile;
pub mod words;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Ask on stdin before a destructive action. `assume_yes` skips the prompt.
pub fn confirm_prompt(action: &ConfirmAction, assume_yes: bool) -> HubResult<bool> {
    if assume_yes {
        return Ok(true);
    }

    print!("{}: {} [y/N] ", action.title().bold(), action.message());
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

pub(crate) fn resolve_book<B: StorageBackend>(
    state: &mut AppState<B>,
    id_or_title: &str,
) -> HubResult<Book> {
    state
        .find_book(id_or_title)
        .ok_or_else(|| HubError::BookNotFound(id_or_title.to_string()))
}

pub(crate) fn required<'a>(matches: &'a ArgMatches, name: &str) -> HubResult<&'a String> {
    matches
        .get_one::<String>(name)
        .ok_or_else(|| HubError::InvalidInput(format!("{} is required", name)))
}

pub(crate) fn output_format(matches: &ArgMatches) -> HubResult<OutputFormat> {
    match matches.get_one::<String>("format") {
        Some(raw) => OutputFormat::parse(raw),
        None => Ok(OutputFormat::List),
    }
}

pub(crate) fn catalog_filter(matches: &ArgMatches) -> HubResult<CatalogFilter> {
    let query = matches
        .get_one::<String>("search")
        .cloned()
        .unwrap_or_default();
    let level = match matches.get_one::<String>("level") {
        Some(raw) => parse_level(raw)?,
        None => None,
    };
    Ok(CatalogFilter::new(query, level))
}
