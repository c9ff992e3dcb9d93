#![allow(dead_code)]

use std::{
    io::Cursor,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use mufetch::{
    render::{CellRenderer, ImageRenderer, RenderError},
    spotify::SpotifyClient,
    types::Credentials,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

/// One call made to a [`StubRenderer`].
#[derive(Debug, Clone)]
pub struct RenderCall {
    pub path: PathBuf,
    pub columns: u32,
    pub rows: u32,
    pub file_existed: bool,
}

/// External renderer double with a canned answer.
pub struct StubRenderer {
    pub available: bool,
    pub output: Option<Vec<String>>,
    pub calls: Arc<Mutex<Vec<RenderCall>>>,
}

impl StubRenderer {
    pub fn unavailable() -> Self {
        StubRenderer {
            available: false,
            output: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn returning(lines: Vec<String>) -> Self {
        StubRenderer {
            available: true,
            output: Some(lines),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing() -> Self {
        StubRenderer {
            available: true,
            output: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl CellRenderer for StubRenderer {
    async fn available(&self) -> bool {
        self.available
    }

    async fn render(
        &self,
        path: &Path,
        columns: u32,
        rows: u32,
    ) -> Result<Vec<String>, RenderError> {
        self.calls.lock().unwrap().push(RenderCall {
            path: path.to_path_buf(),
            columns,
            rows,
            file_existed: path.exists(),
        });

        self.output
            .clone()
            .ok_or_else(|| RenderError::ExternalTool("stub failure".to_string()))
    }
}

pub fn renderer_without_external(size: u32) -> ImageRenderer {
    ImageRenderer::with_backend(size, Box::new(StubRenderer::unavailable())).unwrap()
}

/// A PNG of a solid color.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([200, 40, 90])));
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Png).unwrap();
    bytes.into_inner()
}

pub fn credentials() -> Credentials {
    Credentials::new("test_client_id", "test_client_secret")
}

pub fn client_for(server: &MockServer) -> SpotifyClient {
    SpotifyClient::with_endpoints(
        credentials(),
        server.uri(),
        format!("{}/api/token", server.uri()),
    )
    .unwrap()
}

/// Mounts a token endpoint that always hands out `test_token`.
pub async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "test_token",
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .mount(server)
        .await;
}

/// Number of printed columns, ignoring escape sequences.
pub fn width(line: &str) -> usize {
    mufetch::utils::visible_width(line)
}
