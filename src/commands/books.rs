use clap::ArgMatches;
use colored::*;

use super::{catalog_filter, output_format, required, resolve_book, CommandResult};
use crate::cli_context::CliContext;
use crate::constants::RENAISSANCE_URL;
use crate::formatting::{print_book_detail, print_books, OutputFormat};
use crate::library::{Shelf, Transition};
use crate::logging::log_warn;

/// The home view: what the student is reading, then what they can start.
pub async fn handle_books(context: &mut CliContext, matches: &ArgMatches) -> CommandResult {
    let filter = catalog_filter(matches)?;
    let format = output_format(matches)?;
    let (mut state, session) = context.open_session()?;
    let student = session.require_student()?;

    let shelves = state.shelves(student).home_view(&filter);

    if format == OutputFormat::Json {
        let view = serde_json::json!({
            "inProgress": shelves.in_progress,
            "available": shelves.available,
        });
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!(
        "Hi {}! You have finished {} books.\n",
        student.display_name().bold(),
        shelves.completed.len()
    );
    print_books("Continue reading", &shelves.in_progress, Shelf::InProgress, format);
    println!();
    print_books("Find a new book", &shelves.available, Shelf::Available, format);
    Ok(())
}

pub async fn handle_levels(context: &mut CliContext, _matches: &ArgMatches) -> CommandResult {
    let (mut state, session) = context.open_session()?;
    session.require_student()?;
    let levels = state.levels();
    let rendered: Vec<String> = levels.iter().map(f64::to_string).collect();
    println!("{} levels: {}", levels.len(), rendered.join(", "));
    Ok(())
}

pub async fn handle_read(context: &mut CliContext, matches: &ArgMatches) -> CommandResult {
    let (mut state, session) = context.open_session()?;
    let student = session.require_student()?;
    let book = resolve_book(&mut state, required(matches, "book")?)?;

    match state.mark_as_reading(student, &book.id)? {
        Transition::Changed => println!("📖 Started reading '{}'. Enjoy!", book.title.bold()),
        Transition::Unchanged => println!("'{}' is already on your list.", book.title),
    }

    let shelf = Shelf::of(state.reading_log(&student.id).status(&book.id));
    let url = state.listen_url_for(&book);
    println!();
    print_book_detail(&book, shelf, &url);
    Ok(())
}

pub async fn handle_listen(context: &mut CliContext, matches: &ArgMatches) -> CommandResult {
    let (mut state, session) = context.open_session()?;
    session.require_student()?;
    let book = resolve_book(&mut state, required(matches, "book")?)?;
    let url = state.listen_url_for(&book);

    println!("🎧 {}", book.title.bold());
    println!("{}", url);
    if matches.get_flag("open") {
        open_link(&url);
    }
    Ok(())
}

/// Show the Renaissance login so the student can take a quiz.
pub async fn handle_quiz(context: &mut CliContext, matches: &ArgMatches) -> CommandResult {
    let (_, session) = context.open_session()?;
    let student = session.require_student()?;

    let id = student.renaissance_id.as_deref().unwrap_or("N/A");
    let pw = student.renaissance_pw.as_deref().unwrap_or("N/A");

    println!("Renaissance login for {}", student.display_name().bold());
    println!("  ID:       {}", id);
    println!("  Password: {}", pw);
    println!("  {}", RENAISSANCE_URL);
    if matches.get_flag("open") {
        open_link(RENAISSANCE_URL);
    }
    Ok(())
}

fn open_link(url: &str) {
    if let Err(e) = open::that(url) {
        log_warn(&format!("Could not open {}: {}", url, e));
        eprintln!("Could not open the browser: {}", e);
    }
}
