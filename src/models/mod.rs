pub mod category;
pub mod event;
pub mod gift_idea;
pub mod gift_status;
pub mod person;
pub mod relationship;
