//! Error types for the catalog client, configuration and CLI layers.

use thiserror::Error;

/// Errors surfaced by catalog lookups and credential handling.
///
/// Rendering problems are not part of this enum, they never leave the
/// [`crate::render`] module.
#[derive(Error, Debug)]
pub enum MufetchError {
    /// Token exchange with the accounts service failed
    #[error("Authentication failed: {status} - {body}")]
    Auth { status: u16, body: String },

    /// The Web API answered with a non-success status
    #[error("API request failed: {status} - {body}")]
    Request { status: u16, body: String },

    /// Network failure, timeout or undecodable body
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// No client id or secret in the config file or environment
    #[error("No Spotify credentials found")]
    NoCredentials,

    /// The config file could not be read or written
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_yaml::Error> for MufetchError {
    fn from(err: serde_yaml::Error) -> Self {
        MufetchError::Config(err.to_string())
    }
}
