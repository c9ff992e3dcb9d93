//! # Image Rendering Module
//!
//! Turns a remote cover image into a fixed grid of printable terminal lines.
//!
//! ## Render chain
//!
//! ```text
//! no URL ───────────────────────────────────────────► placeholder
//! external renderer available? ── yes ─► chafa grid ─► done
//!            │                              │ failure
//!            ▼                              ▼
//!      true-color blocks ◄──────────────────┘
//!            │ download / decode failure
//!            ▼
//!       placeholder
//! ```
//!
//! [`ImageRenderer::render_image_lines`] never fails. Every error along the
//! chain is logged at `debug` level and answered with the next step.

mod blocks;
mod chafa;

use std::{io::Write, path::Path};

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::{spotify::REQUEST_TIMEOUT, utils::ansi};

pub use blocks::block_art_lines;
pub use chafa::Chafa;

/// Number of lines in the placeholder grid.
pub const PLACEHOLDER_HEIGHT: usize = 20;
/// Columns between the placeholder's borders.
const PLACEHOLDER_INNER_WIDTH: usize = 31;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("HTTP client could not be created: {0}")]
    Client(#[source] reqwest::Error),

    #[error("image download failed: {0}")]
    Download(#[from] reqwest::Error),

    #[error("image decoding failed: {0}")]
    Decode(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("external renderer failed: {0}")]
    ExternalTool(String),

    #[error("external renderer timed out")]
    Timeout,
}

/// A program that rasterizes an image file into terminal text.
#[async_trait]
pub trait CellRenderer: Send + Sync {
    /// Whether the renderer can be used on this machine.
    async fn available(&self) -> bool;

    /// Renders the image at `path` into a grid of `columns × rows` cells.
    async fn render(&self, path: &Path, columns: u32, rows: u32)
    -> Result<Vec<String>, RenderError>;
}

pub struct ImageRenderer {
    width: u32,
    height: u32,
    http: Client,
    external: Box<dyn CellRenderer>,
}

impl ImageRenderer {
    /// Creates a renderer for a `size × size` grid backed by `chafa`.
    ///
    /// `size` is expected to be clamped already, see
    /// [`crate::utils::clamp_image_size`].
    pub fn new(size: u32) -> Result<Self, RenderError> {
        Self::with_backend(size, Box::new(Chafa::new()))
    }

    /// # Errors
    ///
    /// `RenderError::Client` when the HTTP backend cannot be initialized.
    pub fn with_backend(size: u32, external: Box<dyn CellRenderer>) -> Result<Self, RenderError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(RenderError::Client)?;

        Ok(ImageRenderer {
            width: size,
            height: size,
            http,
            external,
        })
    }

    /// Converts the image behind `image_url` into terminal lines.
    ///
    /// Returns exactly `height` lines, or the placeholder grid when there is
    /// no URL or the image cannot be fetched or decoded.
    pub async fn render_image_lines(&self, image_url: &str) -> Vec<String> {
        if image_url.is_empty() {
            return placeholder_lines();
        }

        if self.external.available().await {
            match self.render_external(image_url).await {
                Ok(lines) => return lines,
                Err(e) => tracing::debug!("external renderer failed, using blocks: {}", e),
            }
        }

        match self.render_blocks(image_url).await {
            Ok(lines) => lines,
            Err(e) => {
                tracing::debug!("block rendering failed, using placeholder: {}", e);
                placeholder_lines()
            }
        }
    }

    async fn render_external(&self, image_url: &str) -> Result<Vec<String>, RenderError> {
        let bytes = self.download(image_url).await?;

        // removed from disk when `file` goes out of scope
        let mut file = tempfile::Builder::new()
            .prefix("mufetch-")
            .suffix(".jpg")
            .tempfile()?;
        file.write_all(&bytes)?;
        file.flush()?;

        let lines = self
            .external
            .render(file.path(), self.width * 2, self.height)
            .await?;

        Ok(fit_external_lines(lines, self.width, self.height))
    }

    async fn render_blocks(&self, image_url: &str) -> Result<Vec<String>, RenderError> {
        let bytes = self.download(image_url).await?;
        let image = image::load_from_memory(&bytes)?;
        Ok(block_art_lines(&image, self.width, self.height))
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, RenderError> {
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}

/// Left-pads external renderer output by one column and forces it to
/// exactly `height` lines.
pub fn fit_external_lines(lines: Vec<String>, width: u32, height: u32) -> Vec<String> {
    let height = height as usize;
    let blank = " ".repeat(width as usize * 2 + 1);

    let mut fitted: Vec<String> = lines
        .into_iter()
        .take(height)
        .map(|line| format!(" {line}"))
        .collect();
    fitted.resize(height, blank);
    fitted
}

/// The grid shown when no cover is available.
pub fn placeholder_lines() -> Vec<String> {
    let border = "─".repeat(PLACEHOLDER_INNER_WIDTH);
    let empty = " ".repeat(PLACEHOLDER_INNER_WIDTH);
    let rows = [
        format!("┌{border}┐"),
        format!("│{empty}│"),
        format!("│{empty}│"),
        format!("│{:^width$}│", "NO IMAGE", width = PLACEHOLDER_INNER_WIDTH),
        format!("│{:^width$}│", "AVAILABLE", width = PLACEHOLDER_INNER_WIDTH),
        format!("│{empty}│"),
        format!("│{empty}│"),
        format!("└{border}┘"),
    ];

    let mut lines: Vec<String> = rows
        .iter()
        .map(|row| format!(" {}{row}{}", ansi::WHITE, ansi::RESET))
        .collect();

    // one padding column plus both borders
    lines.resize(
        PLACEHOLDER_HEIGHT,
        " ".repeat(PLACEHOLDER_INNER_WIDTH + 3),
    );
    lines
}
