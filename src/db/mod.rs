pub mod events;
pub mod gift_ideas;
pub mod initialize;
pub mod log;
pub mod migrate;
pub mod people;
pub mod pool;
pub mod stats;
