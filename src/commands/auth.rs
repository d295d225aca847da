use clap::ArgMatches;
use colored::*;

use super::CommandResult;
use crate::cli_context::CliContext;
use crate::client::{lookup_word, DictionaryLookup};
use crate::config::load_config;
use crate::formatting::mask_secret;

pub async fn handle_auth(context: &mut CliContext, matches: &ArgMatches) -> CommandResult {
    if let Some(api_key) = matches.get_one::<String>("api-key") {
        context.set_api_key(api_key.trim().to_string())?;
        println!("API key saved successfully!");

        // One cheap lookup tells whether the key works
        let client = context.verified_client()?;
        match lookup_word(client.as_ref(), "book").await {
            DictionaryLookup::Definition { .. } => {
                println!("{} Connected to {}", "✅".green(), client.model())
            }
            DictionaryLookup::Failed(e) => println!("{} Key check failed: {}", "❌".red(), e),
            DictionaryLookup::EmptyInput => {}
        }
    } else if matches.get_flag("show") {
        match load_config().api_key {
            Some(key) => println!("API Key: {}", mask_secret(&key)),
            None if context.has_api_key() => {
                println!("API key comes from the environment (GEMINI_API_KEY or API_KEY)")
            }
            None => println!("No API key configured"),
        }
    } else {
        println!("Usage: reading-hub auth --api-key <KEY> or reading-hub auth --show");
    }
    Ok(())
}
