//! Unified application error type.
//! All modules (db, core, cli, export) return AppError so the binary can
//! report every failure the same way.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid event type: {0} (use holiday, anniversary or special_occasion)")]
    InvalidCategory(String),

    #[error("Invalid gift status: {0} (use idea, purchased or given)")]
    InvalidStatus(String),

    #[error("Invalid relationship: {0} (use family, friend, coworker or other)")]
    InvalidRelationship(String),

    #[error("Validation error: {0}")]
    Validation(String),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("Person not found: #{0}")]
    PersonNotFound(i64),

    #[error("Event not found: #{0}")]
    EventNotFound(i64),

    #[error("Gift idea not found: #{0}")]
    GiftIdeaNotFound(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export / import errors
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Import error: {0}")]
    Import(String),
}

pub type AppResult<T> = Result<T, AppError>;
