use std::fs;

use clap::ArgMatches;
use colored::*;

use super::{confirm_prompt, output_format, required, resolve_book, CommandResult};
use crate::admin::{BookForm, StudentForm};
use crate::cli_context::CliContext;
use crate::error::ErrorContext;
use crate::formatting::{print_books, print_students};
use crate::library::Shelf;
use crate::models::StudentId;
use crate::session::Session;
use crate::state::AppState;
use crate::store::FileBackend;

fn open_admin(context: &CliContext) -> Result<(AppState<FileBackend>, Session), Box<dyn std::error::Error>> {
    let (state, session) = context.open_session()?;
    session.require_admin()?;
    Ok((state, session))
}

pub async fn handle_admin(context: &mut CliContext, matches: &ArgMatches) -> CommandResult {
    match matches.subcommand() {
        Some(("students", sub)) => handle_list_students(context, sub).await,
        Some(("add-student", sub)) => handle_add_student(context, sub).await,
        Some(("edit-student", sub)) => handle_edit_student(context, sub).await,
        Some(("delete-student", sub)) => handle_delete_student(context, sub).await,
        Some(("books", sub)) => handle_list_books(context, sub).await,
        Some(("add-book", sub)) => handle_add_book(context, sub).await,
        Some(("delete-book", sub)) => handle_delete_book(context, sub).await,
        Some(("excerpt", sub)) => handle_excerpt(context, sub).await,
        Some(("audio", sub)) => handle_audio(context, sub).await,
        _ => Err("Unknown admin subcommand. Use 'reading-hub admin --help' for available options.".into()),
    }
}

async fn handle_list_students(context: &mut CliContext, matches: &ArgMatches) -> CommandResult {
    let format = output_format(matches)?;
    let (mut state, session) = open_admin(context)?;
    let students = state.students();
    print_students(&students, session.student(), format);
    Ok(())
}

async fn handle_add_student(context: &mut CliContext, matches: &ArgMatches) -> CommandResult {
    let (mut state, _) = open_admin(context)?;

    let name = required(matches, "name")?;
    let level = matches.get_one::<f64>("level").copied().unwrap_or(1.0);
    let form = StudentForm::new(name.clone(), level).with_renaissance(
        matches.get_one::<String>("renaissance-id").cloned(),
        matches.get_one::<String>("renaissance-pw").cloned(),
    );

    let student = state.create_student(form)?;
    println!("✅ Created student {} ({})", student.name.bold(), student.id);
    Ok(())
}

async fn handle_edit_student(context: &mut CliContext, matches: &ArgMatches) -> CommandResult {
    let (mut state, _) = open_admin(context)?;
    let id = StudentId::parse(required(matches, "id")?)?;
    let current = state
        .student(&id)
        .ok_or_else(|| crate::error::HubError::StudentNotFound(id.to_string()))?;

    // Unset flags keep the current values
    let form = StudentForm::new(
        matches.get_one::<String>("name").cloned().unwrap_or(current.name),
        matches.get_one::<f64>("level").copied().unwrap_or(current.level),
    )
    .with_renaissance(
        matches
            .get_one::<String>("renaissance-id")
            .cloned()
            .or(current.renaissance_id),
        matches
            .get_one::<String>("renaissance-pw")
            .cloned()
            .or(current.renaissance_pw),
    );

    let student = state.update_student(&id, form)?;
    println!("✅ Updated {} ({})", student.name.bold(), student.id);
    Ok(())
}

async fn handle_delete_student(context: &mut CliContext, matches: &ArgMatches) -> CommandResult {
    let (mut state, _) = open_admin(context)?;
    let id = StudentId::parse(required(matches, "id")?)?;

    let action = state.request_student_deletion(&id)?;
    if !confirm_prompt(&action, matches.get_flag("yes"))? {
        println!("Cancelled.");
        return Ok(());
    }
    state.confirm(action);
    println!("Deleted student {}", id);
    Ok(())
}

async fn handle_list_books(context: &mut CliContext, matches: &ArgMatches) -> CommandResult {
    let format = output_format(matches)?;
    let (mut state, _) = open_admin(context)?;
    let mut books = state.books();
    books.reverse();
    print_books("Catalog (newest first)", &books, Shelf::Available, format);
    Ok(())
}

async fn handle_add_book(context: &mut CliContext, matches: &ArgMatches) -> CommandResult {
    let (mut state, _) = open_admin(context)?;
    let form = BookForm {
        title: required(matches, "title")?.clone(),
        author: matches.get_one::<String>("author").cloned().unwrap_or_default(),
        level: matches.get_one::<f64>("level").copied().unwrap_or(1.0),
    };

    let book = state.add_book(form)?;
    println!("✅ Added '{}' ({}) at level {}", book.title.bold(), book.id, book.level);
    Ok(())
}

async fn handle_delete_book(context: &mut CliContext, matches: &ArgMatches) -> CommandResult {
    let (mut state, _) = open_admin(context)?;
    let book = resolve_book(&mut state, required(matches, "book")?)?;

    let action = state.request_book_deletion(&book.id)?;
    if !confirm_prompt(&action, matches.get_flag("yes"))? {
        println!("Cancelled.");
        return Ok(());
    }
    state.confirm(action);
    println!("Deleted '{}' from the catalog", book.title);
    Ok(())
}

async fn handle_excerpt(context: &mut CliContext, matches: &ArgMatches) -> CommandResult {
    let (mut state, _) = open_admin(context)?;
    let title = required(matches, "title")?;

    let new_text = match (matches.get_one::<String>("set"), matches.get_one::<String>("file")) {
        (Some(text), _) => Some(text.clone()),
        (None, Some(path)) => Some(
            fs::read_to_string(path).with_context(|| format!("Failed to read excerpt file {}", path))?,
        ),
        (None, None) => None,
    };

    match new_text {
        Some(text) => {
            state.set_excerpt(title, &text)?;
            if text.trim().is_empty() {
                println!("Cleared the excerpt for '{}'", title);
            } else {
                println!("✅ Saved the excerpt for '{}'", title);
            }
        }
        None => match state.excerpt_for(title) {
            Some(excerpt) => println!("{}\n\n{}", title.bold(), excerpt),
            None => println!("'{}' has no excerpt yet.", title),
        },
    }
    Ok(())
}

async fn handle_audio(context: &mut CliContext, matches: &ArgMatches) -> CommandResult {
    let (mut state, _) = open_admin(context)?;
    let title = required(matches, "title")?;

    match matches.get_one::<String>("set") {
        Some(url) => {
            state.set_audio_link(title, url)?;
            if url.trim().is_empty() {
                println!("Cleared the audio link for '{}'", title);
            } else {
                println!("✅ Saved the audio link for '{}'", title);
            }
        }
        None => match state.audio_link_for(title) {
            Some(link) => println!("{}: {}", title.bold(), link),
            None => println!("'{}' has no audio link yet.", title),
        },
    }
    Ok(())
}
