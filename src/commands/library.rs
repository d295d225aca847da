use clap::ArgMatches;
use colored::*;

use super::{catalog_filter, confirm_prompt, output_format, required, resolve_book, CommandResult};
use crate::cli_context::CliContext;
use crate::formatting::{print_books, OutputFormat};
use crate::library::{Shelf, Transition};

pub async fn handle_library(context: &mut CliContext, matches: &ArgMatches) -> CommandResult {
    let filter = catalog_filter(matches)?;
    let format = output_format(matches)?;
    let (mut state, session) = context.open_session()?;
    let student = session.require_student()?;

    let shelves = state.shelves(student).filtered(&filter);

    if format == OutputFormat::Json {
        let view = serde_json::json!({
            "inProgress": shelves.in_progress,
            "completed": shelves.completed,
        });
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    print_books("Reading now", &shelves.in_progress, Shelf::InProgress, format);
    println!();
    print_books("Finished", &shelves.completed, Shelf::Completed, format);
    Ok(())
}

pub async fn handle_complete(context: &mut CliContext, matches: &ArgMatches) -> CommandResult {
    let (mut state, session) = context.open_session()?;
    let student = session.require_student()?;
    let book = resolve_book(&mut state, required(matches, "book")?)?;

    match state.mark_as_complete(student, &book.id)? {
        Transition::Changed => println!("🎉 Great job finishing '{}'!", book.title.bold()),
        Transition::Unchanged => println!("'{}' is already finished.", book.title),
    }
    Ok(())
}

pub async fn handle_remove(context: &mut CliContext, matches: &ArgMatches) -> CommandResult {
    let (mut state, session) = context.open_session()?;
    let student = session.require_student()?;
    let book = resolve_book(&mut state, required(matches, "book")?)?;

    let action = state.request_removal(student, &book.id)?;
    if !confirm_prompt(&action, matches.get_flag("yes"))? {
        println!("Cancelled.");
        return Ok(());
    }

    state.confirm(action);
    println!("Removed '{}' from your list.", book.title);
    Ok(())
}
