//! Formatting utilities used for CLI and export outputs.

use crate::models::category::EventCategory;
use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Remove colour and erase-line escape sequences.
pub fn strip_ansi(s: &str) -> String {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    match RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").ok()) {
        Some(re) => re.replace_all(s, "").into_owned(),
        None => s.to_string(),
    }
}

/// Display width ignoring ANSI escape sequences.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{}{}", s, " ".repeat(pad))
}

/// Truncate to `max` characters, ending with "…" when cut.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

pub fn optional(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "--".to_string(),
    }
}

pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("{:.2}", p),
        None => "--".to_string(),
    }
}

/// Icon and label for an event category; blank when unknown.
pub fn describe_category(category: Option<EventCategory>) -> String {
    match category {
        Some(c) => format!("{} {}", c.icon(), c.label()),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_skips_colour_and_erase_sequences() {
        assert_eq!(visible_width("\x1b[32mok\x1b[0m"), 2);
        assert_eq!(visible_width("\x1b[Kabc m"), 5);
        assert_eq!(strip_ansi("\x1b[1;31mred\x1b[0m"), "red");
    }

    #[test]
    fn width_counts_wide_glyphs() {
        assert_eq!(visible_width("🎂 x"), 4);
        assert_eq!(pad_right("\x1b[33mab\x1b[0m", 4), "\x1b[33mab\x1b[0m  ");
    }
}
