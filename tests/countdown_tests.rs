use giftlog::core::countdown::{countdown_suffix, day_count_label, day_count_phrase};

#[test]
fn test_labels() {
    assert_eq!(day_count_label(0, false), "Today");
    assert_eq!(day_count_label(1, false), "Tomorrow");
    assert_eq!(day_count_label(14, false), "14 days");
    assert_eq!(day_count_label(-1, false), "Yesterday");
    assert_eq!(day_count_label(-3, false), "3 days ago");
}

#[test]
fn test_festive_today() {
    assert_eq!(day_count_label(0, true), "Today 🎉");
    // only "today" is decorated
    assert_eq!(day_count_label(1, true), "Tomorrow");
    assert_eq!(day_count_label(5, true), "5 days");
}

#[test]
fn test_dashboard_phrases() {
    assert_eq!(day_count_phrase(0, false), "Today!");
    assert_eq!(day_count_phrase(0, true), "Today! 🎉");
    assert_eq!(day_count_phrase(1, false), "Tomorrow");
    assert_eq!(day_count_phrase(14, false), "14 days away");
    assert_eq!(day_count_phrase(-2, false), "2 days ago");
}

#[test]
fn test_birthday_suffixes() {
    assert_eq!(countdown_suffix(0, false), "(Today!)");
    assert_eq!(countdown_suffix(0, true), "(Today! 🎉)");
    assert_eq!(countdown_suffix(1, true), "(Tomorrow)");
    assert_eq!(countdown_suffix(13, false), "(in 13 days)");
    assert_eq!(countdown_suffix(360, false), "(in 360 days)");
}
