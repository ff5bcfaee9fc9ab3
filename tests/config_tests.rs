use giftlog::config::Config;
use giftlog::config::migrate::{CONFIG_KEYS, fill_missing_keys, migrate_config_file, missing_keys};
use std::env;
use std::fs;

#[test]
fn test_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.window_months, 6);
    assert_eq!(cfg.dashboard_limit, 3);
    assert!(cfg.festive_today);
    assert_eq!(cfg.date_format, "%B %-d, %Y");
    assert_eq!(cfg.separator_char, "-");
    assert!(cfg.database.ends_with("giftlog.sqlite"));
}

#[test]
fn test_missing_keys_reported_in_order() {
    let content = "database: /tmp/x.sqlite\nwindow_months: 12\n";
    let missing = missing_keys(content).unwrap();
    assert_eq!(
        missing,
        vec!["dashboard_limit", "festive_today", "date_format", "separator_char"]
    );
    assert_eq!(missing_keys("").unwrap().len(), CONFIG_KEYS.len());
}

#[test]
fn test_fill_keeps_existing_values() {
    let content = "window_months: 12\ncustom_key: kept\n";
    let (updated, added) = fill_missing_keys(content).unwrap();

    assert!(!added.contains(&"window_months".to_string()));
    assert!(added.contains(&"dashboard_limit".to_string()));

    let cfg: Config = serde_yaml::from_str(&updated).unwrap();
    assert_eq!(cfg.window_months, 12);
    assert_eq!(cfg.dashboard_limit, 3);
    assert!(updated.contains("custom_key: kept"));
}

#[test]
fn test_load_from_fills_defaults_and_rejects_bad_files() {
    let dir = env::temp_dir();

    let partial = dir.join("giftlog_partial_config.conf");
    fs::write(&partial, "database: /tmp/giftlog_partial.sqlite\ndashboard_limit: 7\n").unwrap();
    let cfg = Config::load_from(&partial).unwrap();
    assert_eq!(cfg.dashboard_limit, 7);
    assert_eq!(cfg.window_months, 6);
    assert_eq!(cfg.database, "/tmp/giftlog_partial.sqlite");

    let broken = dir.join("giftlog_broken_config.conf");
    fs::write(&broken, "window_months: [not, a, number]\n").unwrap();
    assert!(Config::load_from(&broken).is_err());

    let zero = dir.join("giftlog_zero_window.conf");
    fs::write(&zero, "window_months: 0\n").unwrap();
    assert!(Config::load_from(&zero).is_err());

    let absent = dir.join("giftlog_absent_config.conf");
    fs::remove_file(&absent).ok();
    assert_eq!(Config::load_from(&absent).unwrap().window_months, 6);
}

#[test]
fn test_migrate_config_file_rewrites_only_when_needed() {
    let path = env::temp_dir().join("giftlog_migrate_config.conf");
    fs::write(&path, "window_months: 9\n").unwrap();

    let added = migrate_config_file(&path).unwrap();
    assert_eq!(added.len(), CONFIG_KEYS.len() - 1);
    assert!(missing_keys(&fs::read_to_string(&path).unwrap()).unwrap().is_empty());

    let again = migrate_config_file(&path).unwrap();
    assert!(again.is_empty());
    assert_eq!(Config::load_from(&path).unwrap().window_months, 9);
}
