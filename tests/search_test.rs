mod common;

use common::{client_for, mount_token};
use mufetch::{
    search::{Attempt, SearchMode, attempt, lookup, no_results_message},
    types::{Item, SearchKind},
};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

async fn mount_search(server: &MockServer, kind: &str, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("type", kind))
        .respond_with(template)
        .mount(server)
        .await;
}

fn envelope(plural: &str, items: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ plural: { "items": items } }))
}

#[tokio::test]
async fn test_auto_search_falls_through_to_artist() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    mount_search(&server, "track", envelope("tracks", json!([]))).await;
    mount_search(&server, "album", envelope("albums", json!([]))).await;
    mount_search(
        &server,
        "artist",
        envelope("artists", json!([ { "id": "dp", "name": "Daft Punk" } ])),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/artists/dp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "dp",
            "name": "Daft Punk",
            "genres": ["french house"],
            "followers": { "total": 9_000_000 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let item = lookup(&client, "daft punk", SearchMode::Auto).await.unwrap();

    match item {
        Some(Item::Artist(artist)) => {
            assert_eq!(artist.name, "Daft Punk");
            assert_eq!(artist.followers.total, 9_000_000);
        }
        other => panic!("expected artist, got {other:?}"),
    }
}

#[tokio::test]
async fn test_auto_search_prefers_tracks() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    mount_search(
        &server,
        "track",
        envelope(
            "tracks",
            json!([ { "id": "t1", "name": "Digital Love", "album": { "name": "Discovery" } } ]),
        ),
    )
    .await;

    // album and artist searches must not run
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("type", "album"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let item = lookup(&client, "digital love", SearchMode::Auto).await.unwrap();

    match item {
        Some(Item::Track(track)) => {
            assert_eq!(track.name, "Digital Love");
            assert_eq!(track.album.name, "Discovery");
        }
        other => panic!("expected track, got {other:?}"),
    }
}

#[tokio::test]
async fn test_auto_search_skips_failing_kind() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    mount_search(&server, "track", ResponseTemplate::new(500)).await;
    mount_search(&server, "album", envelope("albums", json!([ { "id": "disc" } ]))).await;

    Mock::given(method("GET"))
        .and(path("/albums/disc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "disc",
            "name": "Discovery",
            "tracks": { "items": [ { "name": "One More Time", "duration_ms": 320000 } ] }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let item = lookup(&client, "discovery", SearchMode::Auto).await.unwrap();

    match item {
        Some(Item::Album(album)) => {
            assert_eq!(album.name, "Discovery");
            assert_eq!(album.tracks.map(|t| t.len()), Some(1));
        }
        other => panic!("expected album, got {other:?}"),
    }
}

#[tokio::test]
async fn test_auto_search_without_results() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    mount_search(&server, "track", envelope("tracks", json!([]))).await;
    mount_search(&server, "album", envelope("albums", json!([]))).await;
    mount_search(&server, "artist", envelope("artists", json!([]))).await;

    let client = client_for(&server);
    let item = lookup(&client, "zzzzqqq", SearchMode::Auto).await.unwrap();

    assert!(item.is_none());
    assert_eq!(
        no_results_message("zzzzqqq", SearchMode::Auto),
        "No results found for: zzzzqqq"
    );
}

#[tokio::test]
async fn test_specific_search_surfaces_failures() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    mount_search(&server, "artist", ResponseTemplate::new(503).set_body_string("down")).await;

    let client = client_for(&server);
    let result = lookup(&client, "daft punk", SearchMode::Specific(SearchKind::Artist)).await;

    assert!(result.is_err());
    assert!(matches!(
        attempt(&client, "daft punk", SearchKind::Artist).await,
        Attempt::Failed(_)
    ));
}

#[tokio::test]
async fn test_specific_search_empty() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    mount_search(&server, "track", envelope("tracks", json!([]))).await;

    let client = client_for(&server);
    let mode = SearchMode::Specific(SearchKind::Track);

    assert!(lookup(&client, "nothing", mode).await.unwrap().is_none());
    assert!(matches!(
        attempt(&client, "nothing", SearchKind::Track).await,
        Attempt::Empty
    ));
    assert_eq!(no_results_message("nothing", mode), "No tracks found for: nothing");
}

#[test]
fn test_search_mode_parsing() {
    assert_eq!("auto".parse::<SearchMode>().unwrap(), SearchMode::Auto);
    assert_eq!(
        "album".parse::<SearchMode>().unwrap(),
        SearchMode::Specific(SearchKind::Album)
    );
    assert!("podcast".parse::<SearchMode>().is_err());
    assert_eq!(SearchMode::Specific(SearchKind::Artist).to_string(), "artist");
}
