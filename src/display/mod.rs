//! # Display Module
//!
//! Builds the metadata panel for each content shape and composes it with the
//! rendered cover and a link row:
//!
//! ```text
//!  ▇▇▇▇▇▇▇▇▇▇▇▇   Name        Harder, Better, Faster, Stronger
//!  ▇▇▇▇▇▇▇▇▇▇▇▇   Artist      Daft Punk
//!  ▇▇▇▇▇▇▇▇▇▇▇▇   ...
//!  ▇▇▇▇▇▇▇▇▇▇▇▇   Spotify   Album Cover
//!  ▇▇▇▇▇▇▇▇▇▇▇▇
//! ```
//!
//! Lookups that only enrich the panel (genres of an artist, top tracks,
//! discography counts) are best effort: a failed call drops its lines and is
//! logged at `debug` level, the display itself always completes.

mod compose;
mod format;

pub use compose::compose_side_by_side_with_links;
pub use format::{
    colored_link, format_bool, format_duration, format_genres, format_info_line, format_number,
    format_ordinal_date, hyperlink, ordinal_suffix,
};

use crate::{
    errors::MufetchError,
    render::{ImageRenderer, RenderError, placeholder_lines},
    spotify::SpotifyClient,
    types::{Album, Artist, Image, Item, Track},
    utils::ansi,
};

/// Number of tracks listed under "Top Tracks".
const TOP_TRACKS: usize = 5;

pub struct DisplayFormatter {
    renderer: ImageRenderer,
}

impl DisplayFormatter {
    pub fn new(image_size: u32) -> Result<Self, RenderError> {
        Ok(Self::with_renderer(ImageRenderer::new(image_size)?))
    }

    pub fn with_renderer(renderer: ImageRenderer) -> Self {
        DisplayFormatter { renderer }
    }

    /// Composed output lines for whatever a search resolved to.
    pub async fn render(&self, item: &Item, client: Option<&SpotifyClient>) -> Vec<String> {
        match item {
            Item::Track(track) => self.render_track(track, client).await,
            Item::Album(album) => self.render_album(album, client).await,
            Item::Artist(artist) => self.render_artist(artist, client).await,
        }
    }

    /// Composed output lines for a track, cover taken from its album.
    pub async fn render_track(&self, track: &Track, client: Option<&SpotifyClient>) -> Vec<String> {
        let cover = track.album.images.first();
        let image_lines = self.image_lines(cover).await;

        let genres = if track.album.genres.is_empty() {
            first_artist_genres(&track.artists, client).await
        } else {
            track.album.genres.clone()
        };

        let album_link = hyperlink(&track.album.external_urls.spotify, &track.album.name);

        let mut info_lines = vec![
            format_info_line("Name", &track.name, ansi::GREEN),
            format_info_line("Artist", &linked_artists(&track.artists), ansi::YELLOW),
            format_info_line("Album", &album_link, ansi::BLUE),
            format_info_line("Duration", &format_duration(track.duration_ms), ansi::WHITE),
            format_info_line("Track", &track.track_number.to_string(), ansi::CYAN),
            format_info_line("Explicit", format_bool(track.explicit), ansi::RED),
            format_info_line(
                "Released",
                &format_ordinal_date(&track.album.release_date),
                ansi::CYAN,
            ),
            format_info_line("Popularity", &format!("{}%", track.popularity), ansi::PURPLE),
        ];

        if let Some(genres) = format_genres(&genres) {
            info_lines.push(format_info_line("Genres", &genres, ansi::RED));
        }

        let mut links = Vec::new();
        if let Some(image) = cover {
            links.push(colored_link(ansi::BLUE, &image.url, "Album Cover"));
        }
        links.push(colored_link(
            ansi::GREEN,
            &track.external_urls.spotify,
            "Spotify",
        ));

        compose_side_by_side_with_links(&image_lines, &info_lines, &links)
    }

    /// Composed output lines for an album. The duration and the track list
    /// need `album.tracks`, i.e. an album fetched by id.
    pub async fn render_album(&self, album: &Album, client: Option<&SpotifyClient>) -> Vec<String> {
        let cover = album.images.first();
        let image_lines = self.image_lines(cover).await;

        let total_duration: u64 = album
            .tracks
            .iter()
            .flatten()
            .map(|track| track.duration_ms)
            .sum();

        let genres = if album.genres.is_empty() {
            first_artist_genres(&album.artists, client).await
        } else {
            album.genres.clone()
        };

        let mut info_lines = vec![
            format_info_line("Name", &album.name, ansi::GREEN),
            format_info_line("Artist", &linked_artists(&album.artists), ansi::YELLOW),
            format_info_line("Type", &album.album_type, ansi::BLUE),
            format_info_line(
                "Released",
                &format_ordinal_date(&album.release_date),
                ansi::CYAN,
            ),
            format_info_line("Tracks", &album.total_tracks.to_string(), ansi::PURPLE),
            format_info_line("Duration", &format_duration(total_duration), ansi::WHITE),
            format_info_line("Popularity", &format!("{}%", album.popularity), ansi::PURPLE),
        ];

        if let Some(genres) = format_genres(&genres) {
            info_lines.push(format_info_line("Genres", &genres, ansi::RED));
        }

        if !album.label.is_empty() {
            info_lines.push(format_info_line("Label", &album.label, ansi::WHITE));
        }

        if let Some(tracks) = album.tracks.as_deref() {
            info_lines.extend(top_tracks_section(tracks));
        }

        let mut links = Vec::new();
        if let Some(image) = cover {
            links.push(colored_link(ansi::BLUE, &image.url, "Album Cover"));
        }
        links.push(colored_link(
            ansi::GREEN,
            &album.external_urls.spotify,
            "Spotify",
        ));

        compose_side_by_side_with_links(&image_lines, &info_lines, &links)
    }

    /// Composed output lines for an artist, enriched with top tracks and
    /// discography counts when a client is given.
    pub async fn render_artist(&self, artist: &Artist, client: Option<&SpotifyClient>) -> Vec<String> {
        let photo = artist.images.first();
        let image_lines = self.image_lines(photo).await;

        let enrichment = match client {
            Some(client) => ArtistEnrichment::fetch(client, &artist.id).await,
            None => ArtistEnrichment::default(),
        };

        let mut info_lines = vec![
            format_info_line("Name", &artist.name, ansi::GREEN),
            format_info_line(
                "Followers",
                &format_number(artist.followers.total),
                ansi::YELLOW,
            ),
            format_info_line("Popularity", &format!("{}%", artist.popularity), ansi::PURPLE),
        ];

        if let Some(genres) = format_genres(&artist.genres) {
            info_lines.push(format_info_line("Genres", &genres, ansi::RED));
        }

        if let Some(count) = enrichment.albums.filter(|&n| n > 0) {
            info_lines.push(format_info_line("Albums", &count.to_string(), ansi::GREEN));
        }

        if let Some(count) = enrichment.singles.filter(|&n| n > 0) {
            info_lines.push(format_info_line("Singles", &count.to_string(), ansi::YELLOW));
        }

        if let Some(tracks) = enrichment.top_tracks.as_deref() {
            info_lines.extend(top_tracks_section(tracks));
        }

        let mut links = vec![colored_link(
            ansi::GREEN,
            &artist.external_urls.spotify,
            "Spotify",
        )];
        if let Some(image) = photo {
            links.push(colored_link(ansi::BLUE, &image.url, "Artist Photo"));
        }

        compose_side_by_side_with_links(&image_lines, &info_lines, &links)
    }

    async fn image_lines(&self, image: Option<&Image>) -> Vec<String> {
        match image {
            Some(image) => self.renderer.render_image_lines(&image.url).await,
            None => placeholder_lines(),
        }
    }
}

/// Extra artist data from secondary endpoints. `None` means the lookup failed.
#[derive(Debug, Default)]
struct ArtistEnrichment {
    top_tracks: Option<Vec<Track>>,
    albums: Option<usize>,
    singles: Option<usize>,
}

impl ArtistEnrichment {
    async fn fetch(client: &SpotifyClient, artist_id: &str) -> Self {
        let top_tracks = best_effort(
            "top tracks",
            client.fetch_artist_top_tracks(artist_id).await,
        );
        let albums = best_effort(
            "albums",
            client.fetch_artist_albums(artist_id, "album").await,
        );
        let singles = best_effort(
            "singles",
            client.fetch_artist_albums(artist_id, "single").await,
        );

        ArtistEnrichment {
            top_tracks: top_tracks.filter(|tracks| !tracks.is_empty()),
            albums: albums.map(|albums| albums.len()),
            singles: singles.map(|singles| singles.len()),
        }
    }
}

fn best_effort<T>(what: &str, result: Result<T, MufetchError>) -> Option<T> {
    result
        .map_err(|e| tracing::debug!("skipping {} enrichment: {}", what, e))
        .ok()
}

/// Genres of the first artist, fetched on demand. Empty when there is no
/// client, no artist, or the lookup fails.
async fn first_artist_genres(artists: &[Artist], client: Option<&SpotifyClient>) -> Vec<String> {
    let (Some(client), Some(artist)) = (client, artists.first()) else {
        return Vec::new();
    };

    best_effort("genre", client.fetch_artist(&artist.id).await)
        .map(|artist| artist.genres)
        .unwrap_or_default()
}

fn linked_artists(artists: &[Artist]) -> String {
    artists
        .iter()
        .map(|artist| hyperlink(&artist.external_urls.spotify, &artist.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Blank separator, heading and up to five linked track names.
fn top_tracks_section(tracks: &[Track]) -> Vec<String> {
    if tracks.is_empty() {
        return Vec::new();
    }

    let mut lines = vec![String::new(), format!("{}Top Tracks{}", ansi::BOLD, ansi::RESET)];
    lines.extend(tracks.iter().take(TOP_TRACKS).map(|track| {
        colored_link(ansi::GREEN, &track.external_urls.spotify, &track.name)
    }));
    lines
}
