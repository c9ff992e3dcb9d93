use super::SpotifyClient;
use crate::{errors::MufetchError, types::Album};

impl SpotifyClient {
    /// Fetches the full album, including its track listing.
    pub async fn fetch_album(&self, album_id: &str) -> Result<Album, MufetchError> {
        let json = self.get(&format!("albums/{album_id}"), &[]).await?;
        Ok(Album::from(&json))
    }
}
