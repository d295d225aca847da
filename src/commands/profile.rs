use clap::ArgMatches;
use colored::*;

use super::{output_format, required, CommandResult};
use crate::cli_context::CliContext;
use crate::formatting::print_students;
use crate::logging::get_log_file_path;
use crate::models::StudentId;
use crate::session::Session;

pub async fn handle_students(context: &mut CliContext, matches: &ArgMatches) -> CommandResult {
    let format = output_format(matches)?;
    let (mut state, session) = context.open_session()?;

    let students = state.students();
    print_students(&students, session.student(), format);
    Ok(())
}

pub async fn handle_login(context: &mut CliContext, matches: &ArgMatches) -> CommandResult {
    let id = StudentId::parse(required(matches, "id")?)?;
    let mut state = context.open_state()?;

    let session = Session::login(&mut state, &id)?;
    let student = session.require_student()?;
    println!(
        "{} Welcome, {}!",
        "✅".green(),
        student.display_name().bold()
    );
    if session.is_admin() {
        println!("Teacher tools are available under 'reading-hub admin'.");
    }
    Ok(())
}

pub async fn handle_logout(context: &mut CliContext, _matches: &ArgMatches) -> CommandResult {
    let mut state = context.open_state()?;
    Session::logout(&mut state);
    println!("Logged out. Pick a profile with 'reading-hub login <ID>'.");
    Ok(())
}

pub async fn handle_whoami(context: &mut CliContext, matches: &ArgMatches) -> CommandResult {
    let (mut state, session) = context.open_session()?;

    match session.student() {
        Some(student) => {
            println!("Logged in as: {}", student.display_name().bold());
            println!("Student ID: {}", student.id);
            println!("Level: {}", student.level);
            if !student.is_admin() {
                let log = state.reading_log(&student.id);
                println!("Books on your list: {}", log.len());
            }
        }
        None => println!("Not logged in. Pick a profile with 'reading-hub login <ID>'."),
    }

    if matches.get_flag("verbose") {
        println!("Data directory: {}", context.data_dir().display());
        if let Some(path) = get_log_file_path() {
            println!("Log file: {}", path.display());
        }
    }
    Ok(())
}
