//! Neofetch-style music information for the terminal.
//!
//! This library looks up tracks, albums and artists in the Spotify Web API and
//! renders them as a cover image next to a formatted metadata panel. It includes
//! modules for API communication, image rasterization, display composition,
//! search orchestration and configuration management.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Credential storage and environment variables
//! - `display` - Metadata panels and side-by-side composition
//! - `errors` - Error types shared across the crate
//! - `render` - Image to terminal cell grid conversion
//! - `search` - Auto and kind-specific search orchestration
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Domain records parsed from API payloads
//! - `utils` - Terminal helpers
//!
//! # Example
//!
//! ```
//! use mufetch::{cli, config};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     config::load_env().await.ok();
//!     cli::search("bohemian rhapsody".to_string(), "auto".parse().unwrap(), 20).await;
//! }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod errors;
pub mod render;
pub mod search;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Credentials stored in {}", path.display());
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Credentials saved successfully!");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// The process terminates with exit code 1 right after printing, so no
/// destructors of the calling scope run. Release terminal state (for example
/// the hidden cursor) before reaching for this macro.
///
/// # Example
///
/// ```
/// error!("Search failed: {}", err);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("Credentials seem too short. Please verify they are correct.");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
