use super::{MARKET, SpotifyClient};
use crate::{
    errors::MufetchError,
    types::{Album, Artist, Track},
};

impl SpotifyClient {
    pub async fn fetch_artist(&self, artist_id: &str) -> Result<Artist, MufetchError> {
        let json = self.get(&format!("artists/{artist_id}"), &[]).await?;
        Ok(Artist::from(&json))
    }

    /// Retrieves the most popular tracks of an artist in the fixed market.
    pub async fn fetch_artist_top_tracks(&self, artist_id: &str) -> Result<Vec<Track>, MufetchError> {
        let json = self
            .get(
                &format!("artists/{artist_id}/top-tracks"),
                &[("market", MARKET)],
            )
            .await?;

        Ok(json["tracks"]
            .as_array()
            .map(|tracks| tracks.iter().map(Track::from).collect())
            .unwrap_or_default())
    }

    /// Retrieves up to 50 releases of an artist filtered by release group.
    ///
    /// `include_groups` takes the Spotify values `album`, `single`,
    /// `appears_on` or `compilation` (comma separated for several).
    pub async fn fetch_artist_albums(
        &self,
        artist_id: &str,
        include_groups: &str,
    ) -> Result<Vec<Album>, MufetchError> {
        let json = self
            .get(
                &format!("artists/{artist_id}/albums"),
                &[
                    ("include_groups", include_groups),
                    ("limit", "50"),
                    ("market", MARKET),
                ],
            )
            .await?;

        Ok(json["items"]
            .as_array()
            .map(|items| items.iter().map(Album::from).collect())
            .unwrap_or_default())
    }
}
