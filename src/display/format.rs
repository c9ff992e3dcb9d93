use chrono::{Datelike, NaiveDate};

use crate::utils::ansi;

/// Column at which label values start (before the minimum gap applies).
const LABEL_WIDTH: usize = 12;
const MIN_LABEL_PADDING: usize = 2;

/// Wraps `text` in an OSC 8 hyperlink to `url`.
pub fn hyperlink(url: &str, text: &str) -> String {
    format!("\x1b]8;;{url}\x1b\\{text}\x1b]8;;\x1b\\")
}

/// A hyperlink printed in `color`.
pub fn colored_link(color: &str, url: &str, text: &str) -> String {
    format!("{color}{}{}", hyperlink(url, text), ansi::RESET)
}

/// Bold label, padding up to the value column, then the colored value.
pub fn format_info_line(label: &str, value: &str, color: &str) -> String {
    let padding = LABEL_WIDTH
        .saturating_sub(label.chars().count())
        .max(MIN_LABEL_PADDING);

    format!(
        "{bold}{label}{reset}{pad}{color}{value}{reset}",
        bold = ansi::BOLD,
        reset = ansi::RESET,
        pad = " ".repeat(padding),
    )
}

/// Formats `YYYY-MM-DD` as e.g. `1st Jan 2020`.
///
/// Anything that is not a full date (a bare year, a `YYYY-MM` month or
/// garbage) is returned as given; an empty string becomes `N/A`.
pub fn format_ordinal_date(date: &str) -> String {
    if date.is_empty() {
        return "N/A".to_string();
    }

    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => format!(
            "{day}{suffix} {month} {year}",
            day = parsed.day(),
            suffix = ordinal_suffix(parsed.day()),
            month = parsed.format("%b"),
            year = parsed.year(),
        ),
        Err(_) => date.to_string(),
    }
}

pub fn ordinal_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }

    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// `M:SS` from milliseconds, seconds rounded down.
pub fn format_duration(duration_ms: u64) -> String {
    let total_seconds = duration_ms / 1000;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Abbreviates large counts: `2.5M`, `1.5K`, `999`.
pub fn format_number(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

pub fn format_bool(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// At most the first two genres, comma separated.
pub fn format_genres(genres: &[String]) -> Option<String> {
    if genres.is_empty() {
        return None;
    }
    Some(genres.iter().take(2).cloned().collect::<Vec<_>>().join(", "))
}
