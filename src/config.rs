//! Configuration management for mufetch.
//!
//! This module handles the credentials file, the optional `.env` file and
//! the environment variables that point the client at the Spotify endpoints.
//!
//! The configuration system follows a hierarchical approach:
//! 1. `config.yaml` in `~/.config/mufetch/` (credentials)
//! 2. Environment variables, filling whatever the file leaves empty
//! 3. Application defaults for endpoint URLs
//!
//! The directory is `~/.config/mufetch/` on every platform, with the home
//! directory resolved through [`dirs::home_dir`]. The file is plain YAML:
//!
//! ```yaml
//! spotify_client_id: abc123
//! spotify_client_secret: def456
//! ```

use std::{
    env,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{errors::MufetchError, types::Credentials};

pub const CLIENT_ID_ENV: &str = "MUFETCH_SPOTIFY_CLIENT_ID";
pub const CLIENT_SECRET_ENV: &str = "MUFETCH_SPOTIFY_CLIENT_SECRET";

const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Directory holding `config.yaml` and the optional `.env` file.
pub fn config_dir() -> PathBuf {
    let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(".config");
    path.push("mufetch");
    path
}

pub fn config_path() -> PathBuf {
    config_dir().join("config.yaml")
}

/// On-disk shape of the credentials file. Keys may be missing or null.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StoredCredentials {
    spotify_client_id: Option<String>,
    spotify_client_secret: Option<String>,
}

/// Loads environment variables from a `.env` file in the config directory.
///
/// Creates the config directory if needed. A missing `.env` file is not an
/// error, the environment simply stays as it is.
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let dir = config_dir();
    async_fs::create_dir_all(&dir)
        .await
        .map_err(|e| e.to_string())?;

    let path = dir.join(".env");
    if path.exists() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Creates `config.yaml` with empty credentials unless it already exists.
pub async fn init_config() -> Result<(), MufetchError> {
    init_config_at(&config_path()).await
}

pub async fn init_config_at(path: &Path) -> Result<(), MufetchError> {
    if path.exists() {
        return Ok(());
    }
    save_credentials_to(path, &Credentials::default()).await
}

/// Loads the credentials from the config file, falling back to
/// `MUFETCH_SPOTIFY_CLIENT_ID` / `MUFETCH_SPOTIFY_CLIENT_SECRET` for any value
/// the file leaves empty.
pub async fn load_credentials() -> Result<Credentials, MufetchError> {
    let from_file = load_credentials_from(&config_path()).await?;
    Ok(with_env_fallback(from_file, |key| env::var(key).ok()))
}

/// Reads credentials from `path`. A missing or empty file yields empty
/// credentials.
pub async fn load_credentials_from(path: &Path) -> Result<Credentials, MufetchError> {
    if !path.exists() {
        return Ok(Credentials::default());
    }

    let content = async_fs::read_to_string(path).await?;
    if content.trim().is_empty() {
        return Ok(Credentials::default());
    }

    let stored: StoredCredentials = serde_yaml::from_str(&content)?;
    Ok(Credentials::new(
        stored.spotify_client_id.as_deref().unwrap_or_default(),
        stored.spotify_client_secret.as_deref().unwrap_or_default(),
    ))
}

/// Fills empty credential values through `lookup`, which maps an environment
/// variable name to its value.
pub fn with_env_fallback<F>(credentials: Credentials, lookup: F) -> Credentials
where
    F: Fn(&str) -> Option<String>,
{
    let pick = |current: String, key: &str| {
        if current.is_empty() {
            lookup(key).unwrap_or_default().trim().to_string()
        } else {
            current
        }
    };

    Credentials {
        spotify_client_id: pick(credentials.spotify_client_id, CLIENT_ID_ENV),
        spotify_client_secret: pick(credentials.spotify_client_secret, CLIENT_SECRET_ENV),
    }
}

pub async fn save_credentials(credentials: &Credentials) -> Result<(), MufetchError> {
    save_credentials_to(&config_path(), credentials).await
}

pub async fn save_credentials_to(
    path: &Path,
    credentials: &Credentials,
) -> Result<(), MufetchError> {
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    let trimmed = Credentials::new(
        &credentials.spotify_client_id,
        &credentials.spotify_client_secret,
    );
    let content = serde_yaml::to_string(&trimmed)?;
    async_fs::write(path, content).await?;
    Ok(())
}

/// Returns the Spotify Web API base URL.
///
/// Reads `SPOTIFY_API_URL`, defaulting to `https://api.spotify.com/v1`.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Returns the Spotify token exchange URL.
///
/// Reads `SPOTIFY_API_TOKEN_URL`, defaulting to
/// `https://accounts.spotify.com/api/token`.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string())
}
