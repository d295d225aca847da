use clap::{Arg, ArgAction, ArgMatches, Command};

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .short('f')
        .value_name("FORMAT")
        .help("Output format: list, table or json")
        .default_value("list")
}

fn search_arg() -> Arg {
    Arg::new("search")
        .long("search")
        .short('s')
        .value_name("QUERY")
        .help("Only show books whose title contains QUERY")
}

fn level_arg() -> Arg {
    Arg::new("level")
        .long("level")
        .short('l')
        .value_name("LEVEL")
        .help("Only show books at exactly this level ('all' for every level)")
}

fn book_arg() -> Arg {
    Arg::new("book")
        .value_name("BOOK")
        .help("Book id (e.g. b857) or exact title")
        .required(true)
}

fn yes_arg() -> Arg {
    Arg::new("yes")
        .long("yes")
        .short('y')
        .help("Skip the confirmation prompt")
        .action(ArgAction::SetTrue)
}

fn open_arg() -> Arg {
    Arg::new("open")
        .long("open")
        .help("Open the link in the browser")
        .action(ArgAction::SetTrue)
}

fn student_fields(command: Command, required: bool) -> Command {
    command
        .arg(
            Arg::new("name")
                .long("name")
                .value_name("NAME")
                .help("Student name")
                .required(required),
        )
        .arg(
            Arg::new("level")
                .long("level")
                .value_name("LEVEL")
                .help("Student reading level")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            Arg::new("renaissance-id")
                .long("renaissance-id")
                .value_name("ID")
                .help("Renaissance quiz login id"),
        )
        .arg(
            Arg::new("renaissance-pw")
                .long("renaissance-pw")
                .value_name("PASSWORD")
                .help("Renaissance quiz password"),
        )
}

pub fn build_cli() -> Command {
    Command::new("reading-hub")
        .about("Reading Hub - track your books and get help with hard words")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .value_name("DIR")
                .help("Directory holding the reading hub data")
                .global(true),
        )
        .subcommand(
            Command::new("auth")
                .about("Configure the definition service API key")
                .arg(
                    Arg::new("api-key")
                        .long("api-key")
                        .value_name("KEY")
                        .help("Save your Gemini API key"),
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show the configured API key")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("students")
                .about("List the profiles you can log in as")
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("login")
                .about("Pick your profile")
                .arg(
                    Arg::new("id")
                        .value_name("STUDENT_ID")
                        .help("Student id from 'reading-hub students'")
                        .required(true),
                ),
        )
        .subcommand(Command::new("logout").about("Forget the current profile"))
        .subcommand(
            Command::new("whoami")
                .about("Show the current profile")
                .arg(
                    Arg::new("verbose")
                        .long("verbose")
                        .short('v')
                        .help("Also show data and log locations")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("books")
                .about("Browse the catalog: books you are reading and books to start")
                .arg(search_arg())
                .arg(level_arg())
                .arg(format_arg()),
        )
        .subcommand(Command::new("levels").about("List the reading levels in the catalog"))
        .subcommand(
            Command::new("read")
                .about("Start reading a book")
                .arg(book_arg()),
        )
        .subcommand(
            Command::new("library")
                .about("Show your books in progress and the ones you finished")
                .arg(search_arg())
                .arg(level_arg())
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("complete")
                .about("Mark a book you are reading as finished")
                .arg(book_arg()),
        )
        .subcommand(
            Command::new("remove")
                .about("Take a book off your list")
                .arg(book_arg())
                .arg(yes_arg()),
        )
        .subcommand(
            Command::new("word-help")
                .about("Explain the hard words in a book's excerpt")
                .arg(book_arg()),
        )
        .subcommand(
            Command::new("dict")
                .about("Look up any word")
                .arg(
                    Arg::new("word")
                        .value_name("WORD")
                        .help("Word to look up")
                        .num_args(0..)
                        .action(ArgAction::Append),
                ),
        )
        .subcommand(
            Command::new("quiz")
                .about("Show your Renaissance quiz login")
                .arg(open_arg()),
        )
        .subcommand(
            Command::new("listen")
                .about("Get the audio link for a book")
                .arg(book_arg())
                .arg(open_arg()),
        )
        .subcommand(Command::new("interactive").about("Open the interactive reading hub"))
        .subcommand(
            Command::new("admin")
                .about("Teacher tools for students, books, excerpts and audio links")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("students")
                        .about("List all students")
                        .arg(format_arg()),
                )
                .subcommand(student_fields(
                    Command::new("add-student").about("Create a student"),
                    true,
                ))
                .subcommand(student_fields(
                    Command::new("edit-student")
                        .about("Change a student's details")
                        .arg(
                            Arg::new("id")
                                .value_name("STUDENT_ID")
                                .required(true),
                        ),
                    false,
                ))
                .subcommand(
                    Command::new("delete-student")
                        .about("Delete a student")
                        .arg(
                            Arg::new("id")
                                .value_name("STUDENT_ID")
                                .required(true),
                        )
                        .arg(yes_arg()),
                )
                .subcommand(
                    Command::new("books")
                        .about("List the catalog, newest first")
                        .arg(format_arg()),
                )
                .subcommand(
                    Command::new("add-book")
                        .about("Add a book to the catalog")
                        .arg(
                            Arg::new("title")
                                .long("title")
                                .value_name("TITLE")
                                .required(true),
                        )
                        .arg(
                            Arg::new("author")
                                .long("author")
                                .value_name("AUTHOR")
                                .default_value(""),
                        )
                        .arg(
                            Arg::new("level")
                                .long("level")
                                .value_name("LEVEL")
                                .value_parser(clap::value_parser!(f64))
                                .default_value("1"),
                        ),
                )
                .subcommand(
                    Command::new("delete-book")
                        .about("Delete a book from the catalog")
                        .arg(book_arg())
                        .arg(yes_arg()),
                )
                .subcommand(
                    Command::new("excerpt")
                        .about("Show or set the excerpt used for word help")
                        .arg(
                            Arg::new("title")
                                .value_name("TITLE")
                                .help("Exact book title")
                                .required(true),
                        )
                        .arg(
                            Arg::new("set")
                                .long("set")
                                .value_name("TEXT")
                                .help("New excerpt text (empty clears it)")
                                .conflicts_with("file"),
                        )
                        .arg(
                            Arg::new("file")
                                .long("file")
                                .value_name("PATH")
                                .help("Read the excerpt from a file"),
                        ),
                )
                .subcommand(
                    Command::new("audio")
                        .about("Show or set the audio link for a book")
                        .arg(
                            Arg::new("title")
                                .value_name("TITLE")
                                .help("Exact book title")
                                .required(true),
                        )
                        .arg(
                            Arg::new("set")
                                .long("set")
                                .value_name("URL")
                                .help("New audio URL (empty clears it)"),
                        ),
                ),
        )
}

/// `--data-dir` from wherever it was given on the command line.
pub fn data_dir_arg(matches: &ArgMatches) -> Option<String> {
    let mut found = matches.get_one::<String>("data-dir").cloned();
    let mut current = matches;
    while let Some((_, sub)) = current.subcommand() {
        if let Some(dir) = sub.get_one::<String>("data-dir") {
            found = Some(dir.clone());
        }
        current = sub;
    }
    found
}
