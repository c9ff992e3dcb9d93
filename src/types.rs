use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExternalUrls {
    pub spotify: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Followers {
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub images: Vec<Image>,
    pub genres: Vec<String>,
    pub popularity: u32,
    pub followers: Followers,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Album {
    pub id: String,
    pub name: String,
    pub artists: Vec<Artist>,
    pub images: Vec<Image>,
    pub release_date: String,
    pub release_date_precision: String,
    pub total_tracks: u32,
    pub genres: Vec<String>,
    pub popularity: u32,
    pub album_type: String,
    pub album_group: Option<String>,
    pub label: String,
    pub external_urls: ExternalUrls,
    /// Only present when the album came from the detail endpoint.
    pub tracks: Option<Vec<Track>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artists: Vec<Artist>,
    /// Snapshot of the album, partial when nested in a search or album payload.
    pub album: Album,
    pub duration_ms: u64,
    pub popularity: u32,
    pub track_number: u32,
    pub disc_number: u32,
    pub explicit: bool,
    pub preview_url: Option<String>,
    pub external_urls: ExternalUrls,
    pub available_markets: Vec<String>,
}

/// What a search resolved to.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Track(Track),
    Album(Album),
    Artist(Artist),
}

impl Item {
    pub fn kind(&self) -> SearchKind {
        match self {
            Item::Track(_) => SearchKind::Track,
            Item::Album(_) => SearchKind::Album,
            Item::Artist(_) => SearchKind::Artist,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Track,
    Album,
    Artist,
}

impl SearchKind {
    /// Value of the `type` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchKind::Track => "track",
            SearchKind::Album => "album",
            SearchKind::Artist => "artist",
        }
    }

    /// Key of the result envelope, also used in user messages.
    pub fn plural(&self) -> &'static str {
        match self {
            SearchKind::Track => "tracks",
            SearchKind::Album => "albums",
            SearchKind::Artist => "artists",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "track" => Ok(SearchKind::Track),
            "album" => Ok(SearchKind::Album),
            "artist" => Ok(SearchKind::Artist),
            other => Err(format!("unknown search type: {other}")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AccessToken {
    pub access_token: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub spotify_client_id: String,
    pub spotify_client_secret: String,
}

impl Credentials {
    pub fn new(client_id: &str, client_secret: &str) -> Self {
        Credentials {
            spotify_client_id: client_id.trim().to_string(),
            spotify_client_secret: client_secret.trim().to_string(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.spotify_client_id.is_empty() && !self.spotify_client_secret.is_empty()
    }
}

fn string_field(json: &Value, key: &str) -> String {
    json[key].as_str().unwrap_or_default().to_string()
}

fn optional_string_field(json: &Value, key: &str) -> Option<String> {
    json[key].as_str().map(str::to_string)
}

fn u64_field(json: &Value, key: &str) -> u64 {
    json[key].as_u64().unwrap_or_default()
}

fn u32_field(json: &Value, key: &str) -> u32 {
    u32::try_from(u64_field(json, key)).unwrap_or(u32::MAX)
}

fn string_list(json: &Value, key: &str) -> Vec<String> {
    json[key]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn parse_list<T>(json: &Value) -> Vec<T>
where
    T: for<'a> From<&'a Value>,
{
    json.as_array()
        .map(|items| items.iter().map(T::from).collect())
        .unwrap_or_default()
}

impl From<&Value> for Image {
    fn from(json: &Value) -> Self {
        Image {
            url: string_field(json, "url"),
            width: u32_field(json, "width"),
            height: u32_field(json, "height"),
        }
    }
}

impl From<&Value> for ExternalUrls {
    fn from(json: &Value) -> Self {
        ExternalUrls {
            spotify: string_field(json, "spotify"),
        }
    }
}

impl From<&Value> for Followers {
    fn from(json: &Value) -> Self {
        Followers {
            total: u64_field(json, "total"),
        }
    }
}

impl From<&Value> for Artist {
    fn from(json: &Value) -> Self {
        Artist {
            id: string_field(json, "id"),
            name: string_field(json, "name"),
            images: parse_list(&json["images"]),
            genres: string_list(json, "genres"),
            popularity: u32_field(json, "popularity"),
            followers: Followers::from(&json["followers"]),
            external_urls: ExternalUrls::from(&json["external_urls"]),
        }
    }
}

impl From<&Value> for Album {
    fn from(json: &Value) -> Self {
        let tracks = json["tracks"]["items"]
            .as_array()
            .map(|items| items.iter().map(Track::from).collect());

        Album {
            id: string_field(json, "id"),
            name: string_field(json, "name"),
            artists: parse_list(&json["artists"]),
            images: parse_list(&json["images"]),
            release_date: string_field(json, "release_date"),
            release_date_precision: string_field(json, "release_date_precision"),
            total_tracks: u32_field(json, "total_tracks"),
            genres: string_list(json, "genres"),
            popularity: u32_field(json, "popularity"),
            album_type: string_field(json, "album_type"),
            album_group: optional_string_field(json, "album_group"),
            label: string_field(json, "label"),
            external_urls: ExternalUrls::from(&json["external_urls"]),
            tracks,
        }
    }
}

impl From<&Value> for Track {
    fn from(json: &Value) -> Self {
        Track {
            id: string_field(json, "id"),
            name: string_field(json, "name"),
            artists: parse_list(&json["artists"]),
            album: Album::from(&json["album"]),
            duration_ms: u64_field(json, "duration_ms"),
            popularity: u32_field(json, "popularity"),
            track_number: u32_field(json, "track_number"),
            disc_number: u32_field(json, "disc_number"),
            explicit: json["explicit"].as_bool().unwrap_or_default(),
            preview_url: optional_string_field(json, "preview_url"),
            external_urls: ExternalUrls::from(&json["external_urls"]),
            available_markets: string_list(json, "available_markets"),
        }
    }
}
