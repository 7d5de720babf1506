// Module declarations
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod logging;
pub mod models;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use client::{parse_next_link, GitHubClient};
pub use config::{load_config, save_config, ClientSettings, Config};
pub use error::{GitHubError, GitHubResult};
pub use models::*;
