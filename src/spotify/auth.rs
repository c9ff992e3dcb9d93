use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;

use super::SpotifyClient;
use crate::{errors::MufetchError, types::AccessToken};

impl AccessToken {
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now >= self.obtained_at + self.expires_in
    }
}

impl SpotifyClient {
    /// Returns a valid bearer token, exchanging the client credentials for a
    /// new one only when nothing is cached or the cached token has expired.
    ///
    /// # Errors
    ///
    /// `MufetchError::Auth` carrying status and body when the accounts service
    /// rejects the exchange, `MufetchError::Transport` on network failures.
    pub async fn authenticate(&self) -> Result<String, MufetchError> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref() {
            if !token.is_expired() {
                return Ok(token.access_token.clone());
            }
        }

        let token = self.request_token().await?;
        let access_token = token.access_token.clone();
        *cached = Some(token);
        Ok(access_token)
    }

    async fn request_token(&self) -> Result<AccessToken, MufetchError> {
        let basic = STANDARD.encode(format!(
            "{}:{}",
            self.credentials.spotify_client_id, self.credentials.spotify_client_secret
        ));

        let response = self
            .http
            .post(&self.token_url)
            .header(AUTHORIZATION, format!("Basic {basic}"))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MufetchError::Auth {
                status: status.as_u16(),
                body,
            });
        }

        let json: Value = response.json().await?;

        Ok(AccessToken {
            access_token: json["access_token"]
                .as_str()
                .unwrap_or_default()
                .to_string(),
            expires_in: json["expires_in"].as_u64().unwrap_or(3600),
            obtained_at: Utc::now().timestamp() as u64,
        })
    }
}
