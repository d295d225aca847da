use clap::ArgMatches;
use colored::*;

use super::{required, resolve_book, CommandResult};
use crate::cli_context::CliContext;
use crate::client::{lookup_word, prepare_word_help, DictionaryLookup, WordHelp};
use crate::error::HubError;
use crate::formatting::{dictionary_url, print_definitions};

pub async fn handle_word_help(context: &mut CliContext, matches: &ArgMatches) -> CommandResult {
    let (mut state, session) = context.open_session()?;
    let student = session.require_student()?;
    let book = resolve_book(&mut state, required(matches, "book")?)?;

    // No excerpt means no network call, so the key is only needed past this point
    let request = match prepare_word_help(&mut state, student, &book) {
        Ok(request) => request,
        Err(_) => return Err(HubError::NoExcerpt(book.title).into()),
    };

    let client = context.verified_client()?;
    println!("{}", "Looking up the hard words...".dimmed());
    match request.send(client.as_ref()).await {
        WordHelp::Definitions(definitions) => print_definitions(&book.title, &definitions),
        WordHelp::NoExcerpt => return Err(HubError::NoExcerpt(book.title).into()),
        WordHelp::Failed(e) => return Err(HubError::ApiError(e).into()),
    }
    Ok(())
}

pub async fn handle_dict(context: &mut CliContext, matches: &ArgMatches) -> CommandResult {
    let (_, session) = context.open_session()?;
    session.require_student()?;

    let word = matches
        .get_many::<String>("word")
        .map(|parts| parts.cloned().collect::<Vec<_>>().join(" "))
        .unwrap_or_default();
    if word.trim().is_empty() {
        return Err(HubError::EmptyWord.into());
    }

    let client = context.verified_client()?;
    match lookup_word(client.as_ref(), &word).await {
        DictionaryLookup::Definition { word, text } => {
            println!("{}", word.bold());
            println!("{}", text);
            println!("\n{}", dictionary_url(&word).dimmed());
        }
        DictionaryLookup::EmptyInput => return Err(HubError::EmptyWord.into()),
        DictionaryLookup::Failed(e) => return Err(HubError::ApiError(e).into()),
    }
    Ok(())
}
