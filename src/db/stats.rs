use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

fn count(pool: &DbPool, table: &str) -> rusqlite::Result<i64> {
    pool.conn
        .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
}

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) ROW COUNTS
    //
    for (label, table) in [
        ("People", "people"),
        ("Events", "events"),
        ("Gift ideas", "gift_ideas"),
        ("Log entries", "log"),
    ] {
        let n = count(pool, table)?;
        println!("{}• {}:{} {}{}{}", CYAN, label, RESET, GREEN, n, RESET);
    }

    //
    // 3) ACTIVITY RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row("SELECT date FROM log ORDER BY id ASC LIMIT 1", [], |row| {
            row.get(0)
        })
        .optional()?;
    let last: Option<String> = pool
        .conn
        .query_row("SELECT date FROM log ORDER BY id DESC LIMIT 1", [], |row| {
            row.get(0)
        })
        .optional()?;

    let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Activity:{}", CYAN, RESET);
    println!("    first: {}", fmt_first);
    println!("    last:  {}", fmt_last);

    println!();
    Ok(())
}
