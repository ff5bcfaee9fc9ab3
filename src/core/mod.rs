pub mod backup;
pub mod calendar;
pub mod config;
pub mod countdown;
pub mod dashboard;
pub mod event;
pub mod filter;
pub mod gift;
pub mod holidays;
pub mod import;
pub mod log;
pub mod person;
pub mod recurrence;
pub mod search;
