/// Short label for a signed day-count: "Today", "Tomorrow", "14 days",
/// "Yesterday", "3 days ago". `festive` decorates "Today" for celebrations.
pub fn day_count_label(days: i64, festive: bool) -> String {
    match days {
        0 if festive => "Today 🎉".to_string(),
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        n if n > 1 => format!("{n} days"),
        n => format!("{} days ago", n.unsigned_abs()),
    }
}

/// Dashboard wording: like `day_count_label`, with "away" after future
/// counts and an exclamation mark on "Today".
pub fn day_count_phrase(days: i64, festive: bool) -> String {
    match days {
        0 if festive => "Today! 🎉".to_string(),
        0 => "Today!".to_string(),
        n if n > 1 => format!("{n} days away"),
        n => day_count_label(n, festive),
    }
}

/// Birthday list suffix: "(Today!)", "(Tomorrow)", "(in 13 days)".
pub fn countdown_suffix(days: i64, festive: bool) -> String {
    match days {
        n if n > 1 => format!("(in {n} days)"),
        n => format!("({})", day_count_phrase(n, festive)),
    }
}
