use crate::cli::commands::event::display_label;
use crate::cli::commands::gift::status_cell;
use crate::cli::commands::open_pool;
use crate::config::Config;
use crate::core::countdown::day_count_phrase;
use crate::core::dashboard::DashboardLogic;
use crate::core::recurrence::days_between;
use crate::errors::AppResult;
use crate::ui::messages::{header, section};
use crate::utils::colors::{GREY, RESET, color_for_days, colorize};
use crate::utils::date::format_date;
use crate::utils::formatting::truncate;
use crate::utils::table::Table;
use chrono::NaiveDate;

pub fn handle(cfg: &Config, reference: NaiveDate) -> AppResult<()> {
    let mut pool = open_pool(cfg)?;
    let dash = DashboardLogic::load(&mut pool, cfg, reference)?;

    header(format!(
        "🎁 giftlog · {}",
        format_date(dash.reference, &cfg.date_format)
    ));

    let s = &dash.stats;
    println!("👥 People:          {}", s.people);
    println!(
        "📅 Upcoming events: {} (next {} months)",
        s.upcoming_events, cfg.window_months
    );
    println!("🎂 Birthdays:       {}", s.birthdays);
    println!("💡 Gift ideas:      {}", s.gift_ideas);
    println!("🛒 Purchased:       {}", s.purchased_gifts);

    section("Next events");
    if dash.next_events.is_empty() {
        println!("{}Nothing coming up.{}", GREY, RESET);
    } else {
        let mut table = Table::new(&["When", "", "Event"]).with_separator(&cfg.separator_char);
        for o in &dash.next_events {
            let festive = cfg.festive_today && o.event.is_birthday();
            table.add_row(vec![
                format_date(o.date, &cfg.date_format),
                colorize(&day_count_phrase(o.days, festive), color_for_days(o.days)),
                display_label(&o.event),
            ]);
        }
        print!("{}", table.render());
    }

    section("Recent gift ideas");
    if dash.recent_gifts.is_empty() {
        println!("{}No gift ideas yet.{}", GREY, RESET);
    } else {
        let mut table = Table::new(&["Idea", "For", "Status"]).with_separator(&cfg.separator_char);
        for r in &dash.recent_gifts {
            table.add_row(vec![
                truncate(&r.gift.idea, 40),
                r.person_name.clone(),
                status_cell(r.gift.status),
            ]);
        }
        print!("{}", table.render());
    }

    section("Holidays");
    for (holiday, date) in &dash.holidays {
        let days = days_between(dash.reference, *date);
        println!(
            "{:<14} {}  {}{}{}",
            holiday.name(),
            format_date(*date, &cfg.date_format),
            color_for_days(days),
            day_count_phrase(days, false),
            RESET
        );
    }

    Ok(())
}
