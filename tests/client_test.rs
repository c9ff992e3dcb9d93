mod common;

use base64::{Engine, engine::general_purpose::STANDARD};
use common::{client_for, mount_token};
use mufetch::{
    errors::MufetchError,
    spotify::search::first_item,
    types::SearchKind,
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, header, method, path, query_param},
};

#[tokio::test]
async fn test_token_is_requested_once_and_reused() {
    let server = MockServer::start().await;
    let basic = STANDARD.encode("test_client_id:test_client_secret");

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(header("authorization", format!("Basic {basic}").as_str()))
        .and(body_string_contains("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "cached_token",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(header("authorization", "Bearer cached_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "tracks": { "items": [] } })))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.search("one", SearchKind::Track).await.unwrap();
    client.search("two", SearchKind::Track).await.unwrap();
}

#[tokio::test]
async fn test_expired_token_is_refreshed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "short_lived",
            "expires_in": 0
        })))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.authenticate().await.unwrap(), "short_lived");
    assert_eq!(client.authenticate().await.unwrap(), "short_lived");
}

#[tokio::test]
async fn test_auth_failure_carries_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(400).set_body_string("invalid_client"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.search("anything", SearchKind::Album).await.unwrap_err();

    match err {
        MufetchError::Auth { status, body } => {
            assert_eq!(status, 400);
            assert_eq!(body, "invalid_client");
        }
        other => panic!("expected auth error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_search_sends_single_item_query() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "get lucky"))
        .and(query_param("type", "track"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tracks": { "items": [ { "id": "t1", "name": "Get Lucky" } ] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let envelope = client.search("get lucky", SearchKind::Track).await.unwrap();

    let hit = first_item(&envelope, SearchKind::Track).unwrap();
    assert_eq!(hit["name"], "Get Lucky");
    assert!(first_item(&envelope, SearchKind::Album).is_none());
}

#[tokio::test]
async fn test_non_success_response_is_request_error() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("GET"))
        .and(path("/albums/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_string("non existing id"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.fetch_album("nope").await.unwrap_err();

    assert!(matches!(err, MufetchError::Request { status: 404, .. }));
    assert_eq!(err.to_string(), "API request failed: 404 - non existing id");
}

#[tokio::test]
async fn test_fetch_album_parses_nested_records() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("GET"))
        .and(path("/albums/ram"))
        .and(header("authorization", "Bearer test_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "ram",
            "name": "Random Access Memories",
            "album_type": "album",
            "release_date": "2013-05-17",
            "release_date_precision": "day",
            "total_tracks": 2,
            "label": "Columbia",
            "genres": [],
            "images": [ { "url": "https://i.scdn.co/image/ram", "width": 640, "height": 640 } ],
            "artists": [ { "id": "dp", "name": "Daft Punk", "external_urls": { "spotify": "https://open.spotify.com/artist/dp" } } ],
            "external_urls": { "spotify": "https://open.spotify.com/album/ram" },
            "tracks": { "items": [
                { "id": "t1", "name": "Give Life Back to Music", "duration_ms": 274000, "track_number": 1 },
                { "id": "t2", "name": "The Game of Love", "duration_ms": 321000, "track_number": 2 }
            ] }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let album = client.fetch_album("ram").await.unwrap();

    assert_eq!(album.name, "Random Access Memories");
    assert_eq!(album.label, "Columbia");
    assert_eq!(album.images[0].width, 640);
    assert_eq!(album.artists[0].name, "Daft Punk");
    assert_eq!(album.popularity, 0);

    let tracks = album.tracks.unwrap();
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[1].duration_ms, 321_000);
    assert_eq!(tracks[1].album.name, "");
}

#[tokio::test]
async fn test_artist_enrichment_endpoints() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("GET"))
        .and(path("/artists/dp/top-tracks"))
        .and(query_param("market", "US"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tracks": [ { "id": "t1", "name": "One More Time" }, { "id": "t2", "name": "Get Lucky" } ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/artists/dp/albums"))
        .and(query_param("include_groups", "single"))
        .and(query_param("limit", "50"))
        .and(query_param("market", "US"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [ { "id": "s1" }, { "id": "s2" }, { "id": "s3" } ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let top = client.fetch_artist_top_tracks("dp").await.unwrap();
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].name, "One More Time");

    let singles = client.fetch_artist_albums("dp", "single").await.unwrap();
    assert_eq!(singles.len(), 3);
}
