use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar;
use crate::core::countdown::countdown_suffix;
use crate::core::filter::{self, Occurrence, ViewMode};
use crate::db::people;
use crate::models::person::Person;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_days};
use crate::utils::date::{format_date, month_title};
use chrono::{Datelike, NaiveDate};

fn print_line(o: &Occurrence, cfg: &Config) {
    println!(
        "🎂 {:<24} {}  {}{}{}",
        o.event.label,
        format_date(o.date, &cfg.date_format),
        color_for_days(o.days),
        countdown_suffix(o.days, cfg.festive_today),
        RESET
    );
}

/// Birthdays with a parseable date, ordered by next birthday.
/// No window: everyone's next birthday is at most a year away.
pub fn upcoming_birthdays(people: &[Person], reference: NaiveDate) -> Vec<Occurrence> {
    filter::annotate(&calendar::birthdays(people), ViewMode::Upcoming, reference)
}

pub fn handle(cmd: &Commands, cfg: &Config, reference: NaiveDate) -> AppResult<()> {
    if let Commands::Birthdays { by_month } = cmd {
        let pool = open_pool(cfg)?;
        let list = upcoming_birthdays(&people::load_people(&pool.conn)?, reference);

        header("🎂 Birthdays");
        if list.is_empty() {
            info("No birthdays on record.");
            return Ok(());
        }

        if !*by_month {
            for o in &list {
                print_line(o, cfg);
            }
            return Ok(());
        }

        // list is chronological, so months come out in order
        let mut current: Option<(i32, u32)> = None;
        for o in &list {
            let key = (o.date.year(), o.date.month());
            if current != Some(key) {
                if current.is_some() {
                    println!();
                }
                println!("{}", month_title(o.date));
                current = Some(key);
            }
            print_line(o, cfg);
        }
    }

    Ok(())
}
