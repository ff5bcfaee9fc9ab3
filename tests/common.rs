#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Reference date pinned for CLI tests.
pub const TODAY: &str = "2024-03-20";

pub fn gl() -> Command {
    cargo_bin_cmd!("giftlog")
}

/// `giftlog --db <db> --test --today 2024-03-20 ...`
pub fn gl_at(db_path: &str) -> Command {
    let mut cmd = gl();
    cmd.args(["--db", db_path, "--test", "--today", TODAY]);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_giftlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_giftlog_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add a small dataset useful for many tests:
///
/// - #1 Alice, birthday 1990-03-15 (already passed on TODAY)
/// - #2 Bob, birthday 1985-04-02
/// - event #1 "Wedding anniversary" 2010-06-12, recurring
/// - event #2 "Concert" 2024-05-01, one-off
/// - event #3 "Graduation" 2023-07-01, one-off (past)
/// - gift #1 "Book" for Alice, gift #2 "Headphones" for Bob (purchased)
pub fn init_db_with_data(db_path: &str) {
    gl_at(db_path).arg("init").assert().success();

    gl_at(db_path)
        .args(["person", "add", "Alice", "--birthday", "1990-03-15", "--relationship", "friend"])
        .assert()
        .success();
    gl_at(db_path)
        .args(["person", "add", "Bob", "--birthday", "1985-04-02", "--email", "bob@example.com"])
        .assert()
        .success();

    gl_at(db_path)
        .args(["event", "add", "Wedding anniversary", "--date", "2010-06-12", "--type", "anniversary"])
        .assert()
        .success();
    gl_at(db_path)
        .args(["event", "add", "Concert", "--date", "2024-05-01", "--once"])
        .assert()
        .success();
    gl_at(db_path)
        .args(["event", "add", "Graduation", "--date", "2023-07-01", "--once"])
        .assert()
        .success();

    gl_at(db_path)
        .args(["gift", "add", "Book", "--person", "1"])
        .assert()
        .success();
    gl_at(db_path)
        .args(["gift", "add", "Headphones", "--person", "2", "--status", "purchased", "--price", "59.90"])
        .assert()
        .success();
}
