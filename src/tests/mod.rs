mod admin_tests;
mod cli_context_tests;
mod commands_tests;
mod interactive_tests;
mod library_tests;
mod session_tests;
mod support;
mod word_help_tests;
