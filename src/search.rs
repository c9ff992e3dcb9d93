//! Search orchestration.
//!
//! `Auto` mode walks [`AUTO_ORDER`] and stops at the first kind that finds
//! something; a kind that errors is treated like one that found nothing.
//! `Specific` mode runs one kind and reports its failure to the caller.

use std::{fmt, str::FromStr};

use crate::{
    errors::MufetchError,
    spotify::{SpotifyClient, search::first_item},
    types::{Item, SearchKind, Track},
};

/// Kinds tried by an automatic search, in order.
pub const AUTO_ORDER: [SearchKind; 3] = [SearchKind::Track, SearchKind::Album, SearchKind::Artist];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Auto,
    Specific(SearchKind),
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("auto") {
            return Ok(SearchMode::Auto);
        }
        s.parse::<SearchKind>().map(SearchMode::Specific)
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Auto => f.write_str("auto"),
            SearchMode::Specific(kind) => kind.fmt(f),
        }
    }
}

/// Outcome of searching a single kind.
#[derive(Debug)]
pub enum Attempt {
    Found(Item),
    Empty,
    Failed(MufetchError),
}

/// Searches one kind and resolves the hit into a full record.
///
/// Tracks are taken straight from the search payload; albums and artists
/// are fetched by id so that the album's track list and the artist's full
/// profile are available.
pub async fn attempt(client: &SpotifyClient, query: &str, kind: SearchKind) -> Attempt {
    match resolve(client, query, kind).await {
        Ok(Some(item)) => Attempt::Found(item),
        Ok(None) => Attempt::Empty,
        Err(e) => Attempt::Failed(e),
    }
}

async fn resolve(
    client: &SpotifyClient,
    query: &str,
    kind: SearchKind,
) -> Result<Option<Item>, MufetchError> {
    let envelope = client.search(query, kind).await?;
    let Some(hit) = first_item(&envelope, kind) else {
        return Ok(None);
    };

    let id = hit["id"].as_str().unwrap_or_default();
    let item = match kind {
        SearchKind::Track => Item::Track(Track::from(hit)),
        SearchKind::Album => Item::Album(client.fetch_album(id).await?),
        SearchKind::Artist => Item::Artist(client.fetch_artist(id).await?),
    };

    Ok(Some(item))
}

/// Runs a search in the given mode.
///
/// Returns `Ok(None)` when nothing matched. Only `Specific` mode returns an
/// error; `Auto` moves on to the next kind instead.
pub async fn lookup(
    client: &SpotifyClient,
    query: &str,
    mode: SearchMode,
) -> Result<Option<Item>, MufetchError> {
    match mode {
        SearchMode::Specific(kind) => match attempt(client, query, kind).await {
            Attempt::Found(item) => Ok(Some(item)),
            Attempt::Empty => Ok(None),
            Attempt::Failed(e) => Err(e),
        },
        SearchMode::Auto => {
            for kind in AUTO_ORDER {
                match attempt(client, query, kind).await {
                    Attempt::Found(item) => return Ok(Some(item)),
                    Attempt::Empty => {}
                    Attempt::Failed(e) => {
                        tracing::debug!("{} search failed, trying next kind: {}", kind, e)
                    }
                }
            }
            Ok(None)
        }
    }
}

/// Message printed when a search comes back empty.
pub fn no_results_message(query: &str, mode: SearchMode) -> String {
    match mode {
        SearchMode::Auto => format!("No results found for: {query}"),
        SearchMode::Specific(kind) => format!("No {} found for: {query}", kind.plural()),
    }
}
