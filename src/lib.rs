// Module declarations
pub mod admin;
pub mod cli;
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod interactive;
pub mod library;
pub mod logging;
pub mod models;
pub mod seed;
pub mod session;
pub mod state;
pub mod store;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use client::{DefinitionService, GeminiClient};
pub use config::{get_api_key, load_config, save_config, Config};
pub use error::{HubError, HubResult};
pub use models::*;
pub use session::Session;
pub use state::{AppState, ConfirmAction};
