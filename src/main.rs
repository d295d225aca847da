use std::process;

use clap::ArgMatches;

use reading_hub::cli::{build_cli, data_dir_arg};
use reading_hub::cli_context::{CliContext, CliContextBuilder};
use reading_hub::commands::{admin, auth, books, library, profile, words, CommandResult};
use reading_hub::interactive::run_interactive_mode;
use reading_hub::logging::{init_logging, log_error, log_panic_info};

async fn dispatch(context: &mut CliContext, matches: &ArgMatches) -> CommandResult {
    match matches.subcommand() {
        Some(("auth", sub)) => auth::handle_auth(context, sub).await,
        Some(("students", sub)) => profile::handle_students(context, sub).await,
        Some(("login", sub)) => profile::handle_login(context, sub).await,
        Some(("logout", sub)) => profile::handle_logout(context, sub).await,
        Some(("whoami", sub)) => profile::handle_whoami(context, sub).await,
        Some(("books", sub)) => books::handle_books(context, sub).await,
        Some(("levels", sub)) => books::handle_levels(context, sub).await,
        Some(("read", sub)) => books::handle_read(context, sub).await,
        Some(("listen", sub)) => books::handle_listen(context, sub).await,
        Some(("quiz", sub)) => books::handle_quiz(context, sub).await,
        Some(("library", sub)) => library::handle_library(context, sub).await,
        Some(("complete", sub)) => library::handle_complete(context, sub).await,
        Some(("remove", sub)) => library::handle_remove(context, sub).await,
        Some(("word-help", sub)) => words::handle_word_help(context, sub).await,
        Some(("dict", sub)) => words::handle_dict(context, sub).await,
        Some(("admin", sub)) => admin::handle_admin(context, sub).await,
        Some(("interactive", _)) => run_interactive_mode(context).await,
        _ => {
            eprintln!("Unknown command. Use 'reading-hub --help' for available commands.");
            process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        log_panic_info(info);
        default_hook(info);
    }));

    let matches = build_cli().get_matches();

    let mut builder = CliContextBuilder::new();
    if let Some(dir) = data_dir_arg(&matches) {
        builder = builder.with_data_dir(dir);
    }

    let result = match builder.build() {
        Ok(mut context) => dispatch(&mut context, &matches).await,
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        log_error(&e.to_string());
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
