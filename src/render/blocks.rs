use std::fmt::Write;

use image::{DynamicImage, imageops::FilterType};

use crate::utils::ansi;

/// Renders `image` as `height` lines of true-color blocks.
///
/// The image is scaled to cover `width × height` samples and center-cropped,
/// so the aspect ratio is kept. Each sample becomes a two column wide
/// background block; every line starts with one padding column.
pub fn block_art_lines(image: &DynamicImage, width: u32, height: u32) -> Vec<String> {
    let fitted = image
        .resize_to_fill(width, height, FilterType::Lanczos3)
        .to_rgb8();

    (0..height)
        .map(|y| {
            let mut line = String::from(" ");
            for x in 0..width {
                let [r, g, b] = fitted.get_pixel(x, y).0;
                let _ = write!(line, "\x1b[48;2;{r};{g};{b}m  {}", ansi::RESET);
            }
            line
        })
        .collect()
}
