use crate::config::Config;
use crate::core::calendar;
use crate::core::filter::{self, Occurrence, ViewMode};
use crate::core::holidays::{self, MovableHoliday};
use crate::db::pool::DbPool;
use crate::db::{events, gift_ideas, people};
use crate::errors::AppResult;
use crate::models::event::Event;
use crate::models::gift_idea::GiftIdea;
use crate::models::gift_status::GiftStatus;
use crate::models::person::Person;
use chrono::NaiveDate;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub people: usize,
    /// Stored events with an occurrence inside the upcoming window.
    pub upcoming_events: usize,
    /// People with a birthday on record.
    pub birthdays: usize,
    pub gift_ideas: usize,
    pub purchased_gifts: usize,
}

#[derive(Debug, Clone)]
pub struct RecentGift {
    pub gift: GiftIdea,
    pub person_name: String,
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub reference: NaiveDate,
    pub stats: DashboardStats,
    /// Stored events and birthdays, soonest first.
    pub next_events: Vec<Occurrence>,
    pub recent_gifts: Vec<RecentGift>,
    pub holidays: Vec<(MovableHoliday, NaiveDate)>,
}

pub fn build_dashboard(
    people: &[Person],
    events: &[Event],
    gifts: &[GiftIdea],
    window_months: u32,
    limit: usize,
    reference: NaiveDate,
) -> Dashboard {
    let upcoming_events = filter::filter_events(
        &calendar::from_events(events),
        ViewMode::Upcoming,
        window_months,
        reference,
    )
    .len();

    let stats = DashboardStats {
        people: people.len(),
        upcoming_events,
        birthdays: people.iter().filter(|p| p.has_birthday()).count(),
        gift_ideas: gifts.len(),
        purchased_gifts: gifts
            .iter()
            .filter(|g| g.status == GiftStatus::Purchased)
            .count(),
    };

    let mut next_events = filter::bucket(
        &calendar::collect(events, people, true),
        ViewMode::Upcoming,
        window_months,
        reference,
    );
    next_events.truncate(limit);

    let mut newest: Vec<&GiftIdea> = gifts.iter().collect();
    newest.sort_by(|a, b| b.id.cmp(&a.id));

    let recent_gifts = newest
        .into_iter()
        .take(limit)
        .map(|g| RecentGift {
            gift: g.clone(),
            person_name: people
                .iter()
                .find(|p| p.id == g.person_id)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| "Unknown Person".to_string()),
        })
        .collect();

    Dashboard {
        reference,
        stats,
        next_events,
        recent_gifts,
        holidays: holidays::upcoming_holidays(reference),
    }
}

pub struct DashboardLogic;

impl DashboardLogic {
    /// Load every collection from the database and build the dashboard.
    pub fn load(pool: &mut DbPool, cfg: &Config, reference: NaiveDate) -> AppResult<Dashboard> {
        let people = people::load_people(&pool.conn)?;
        let events = events::load_events(&pool.conn)?;
        let gifts = gift_ideas::load_gift_ideas(&pool.conn)?;

        Ok(build_dashboard(
            &people,
            &events,
            &gifts,
            cfg.window_months,
            cfg.dashboard_limit,
            reference,
        ))
    }
}
