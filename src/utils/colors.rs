//! ANSI color helpers for terminal output.

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Day-count color:
/// 0 → magenta (today)
/// 1..=7 → yellow
/// \>7 → green
/// \<0 → grey (already passed)
pub fn color_for_days(days: i64) -> &'static str {
    match days {
        0 => MAGENTA,
        1..=7 => YELLOW,
        d if d > 7 => GREEN,
        _ => GREY,
    }
}

/// Wrap `value` in `color`, or grey out empty placeholders.
pub fn colorize(value: &str, color: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        format!("{color}{value}{RESET}")
    }
}
