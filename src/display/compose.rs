use crate::utils::visible_width;

/// Gap between the image column and the info column.
const GUTTER: &str = "   ";

/// Marker identifying the catalog link among the link row candidates.
const CATALOG_MARKER: &str = "spotify";

/// Lays `image_lines` and `info_lines` out side by side and puts the links
/// beside the second to last image row.
///
/// The last two image rows are reserved for the link row, so
/// `max(image, info) - 2` rows carry info content. Image rows left over after
/// the link row are printed on their own, which keeps a tall image intact
/// below a short panel.
pub fn compose_side_by_side_with_links(
    image_lines: &[String],
    info_lines: &[String],
    links: &[String],
) -> Vec<String> {
    let content_rows = image_lines.len().max(info_lines.len()).saturating_sub(2);
    let blank_image = " ".repeat(image_lines.first().map_or(0, |l| visible_width(l)));
    let image_at = |i: usize| image_lines.get(i).map_or(blank_image.as_str(), String::as_str);

    let mut output: Vec<String> = (0..content_rows)
        .map(|i| {
            let info = info_lines.get(i).map_or("", String::as_str);
            format!("{}{GUTTER}{info}", image_at(i))
        })
        .collect();

    let mut next_image_row = content_rows;
    if let Some(link_row) = link_row(links) {
        output.push(format!("{}{GUTTER}{link_row}", image_at(content_rows)));
        next_image_row += 1;
    }

    for line in image_lines.iter().skip(next_image_row) {
        output.push(format!("{line}{GUTTER}"));
    }

    output
}

/// Catalog link first, then the other link, joined by the gutter.
fn link_row(links: &[String]) -> Option<String> {
    if links.is_empty() {
        return None;
    }

    let mut catalog: Option<&String> = None;
    let mut other: Option<&String> = None;
    for link in links {
        if link.to_lowercase().contains(CATALOG_MARKER) {
            catalog = Some(link);
        } else {
            other = Some(link);
        }
    }

    let catalog = catalog.or_else(|| links.first());
    let other = other.or_else(|| links.get(1));

    match (catalog, other) {
        (Some(c), Some(o)) if c != o => Some(format!("{c}{GUTTER}{o}")),
        (Some(c), _) => Some(c.clone()),
        (None, o) => o.cloned(),
    }
}
