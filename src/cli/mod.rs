//! # CLI Module
//!
//! The user-facing commands of mufetch. Each command coordinates the
//! configuration, the Spotify client and the display layer and owns all
//! user interaction: prompts, progress feedback and exit codes.
//!
//! ## Commands
//!
//! - [`auth`] - Interactive capture of Spotify client credentials
//! - [`search`] - Search and display a track, album or artist
//!
//! ## Architecture Design
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Search Orchestrator / Display Formatter
//!     ↓
//! Spotify Client + Image Renderer
//!     ↓
//! Network Layer (HTTP Requests, chafa)
//! ```
//!
//! ## Usage Patterns
//!
//! ```bash
//! mufetch auth                                  # Store API credentials
//! mufetch search "Random Access Memories"       # Track, then album, then artist
//! mufetch search "Daft Punk" --type artist      # Artists only
//! mufetch search "Get Lucky" --size 30          # Larger cover
//! ```
//!
//! Fatal problems are reported through the crate's `error!` macro, which
//! exits the process; status information uses `info!`, `warning!` and
//! `success!`.

mod auth;
mod search;

pub use auth::auth;
pub use search::search;
