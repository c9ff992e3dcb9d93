use serde_json::Value;

use super::SpotifyClient;
use crate::{errors::MufetchError, types::SearchKind};

impl SpotifyClient {
    /// Searches the catalog for the single best match of `kind`.
    ///
    /// Returns the raw envelope, e.g. `{"tracks": {"items": [...]}}`. Use
    /// [`first_item`] to pull the hit out of it.
    pub async fn search(&self, query: &str, kind: SearchKind) -> Result<Value, MufetchError> {
        self.get(
            "search",
            &[("q", query), ("type", kind.as_str()), ("limit", "1")],
        )
        .await
    }
}

/// The first item of a search envelope, if the search found anything.
pub fn first_item(envelope: &Value, kind: SearchKind) -> Option<&Value> {
    envelope[kind.plural()]["items"]
        .as_array()
        .and_then(|items| items.first())
}
