//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by mufetch:
//! client-credentials authentication, single-item search and the detail
//! lookups needed to fill the metadata panel.
//!
//! ## Architecture
//!
//! ```text
//! Search Orchestrator / Display Formatter
//!          ↓
//! SpotifyClient
//!     ├── Authentication (client credentials, cached token)
//!     ├── Search (limit=1 envelopes)
//!     ├── Albums (detail lookup with track listing)
//!     └── Artists (detail, top tracks, discography counts)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - Token exchange and the expiry check of the cached token
//! - [`search`] - `GET /search` and extraction of the best match
//! - [`albums`] - `GET /albums/{id}`
//! - [`artists`] - `GET /artists/{id}`, `/top-tracks` and `/albums`
//!
//! ## Error Handling
//!
//! Every call returns [`MufetchError`]: `Auth` for a failed token exchange,
//! `Request` for any other non-success status and `Transport` for network
//! failures or the 30 second timeout. Payload parsing never fails, absent
//! fields become zero values (see [`crate::types`]).
//!
//! ## Usage
//!
//! ```rust
//! let client = SpotifyClient::new(credentials)?;
//! let envelope = client.search("Daft Punk", SearchKind::Artist).await?;
//! if let Some(hit) = search::first_item(&envelope, SearchKind::Artist) {
//!     let artist = client.fetch_artist(hit["id"].as_str().unwrap_or_default()).await?;
//! }
//! ```

pub mod albums;
pub mod artists;
pub mod auth;
pub mod search;

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::{
    config,
    errors::MufetchError,
    types::{AccessToken, Credentials},
};

/// Upper bound for every request made by the client.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Market used for region dependent endpoints.
pub const MARKET: &str = "US";

pub struct SpotifyClient {
    http: Client,
    credentials: Credentials,
    api_url: String,
    token_url: String,
    token: Mutex<Option<AccessToken>>,
}

impl SpotifyClient {
    /// Creates a client against the endpoints from the environment (or the
    /// public Spotify defaults).
    pub fn new(credentials: Credentials) -> Result<Self, MufetchError> {
        Self::with_endpoints(
            credentials,
            config::spotify_apiurl(),
            config::spotify_apitoken_url(),
        )
    }

    pub fn with_endpoints(
        credentials: Credentials,
        api_url: String,
        token_url: String,
    ) -> Result<Self, MufetchError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(SpotifyClient {
            http,
            credentials,
            api_url: api_url.trim_end_matches('/').to_string(),
            token_url,
            token: Mutex::new(None),
        })
    }

    /// Issues an authenticated `GET {api_url}/{endpoint}` and returns the
    /// decoded JSON body.
    async fn get(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Value, MufetchError> {
        let token = self.authenticate().await?;
        let url = format!("{}/{}", self.api_url, endpoint);

        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MufetchError::Request {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<Value>().await?)
    }
}
