use crate::db::migrate::{run_pending_migrations, schema_ready};
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

/// Bring the schema up to date and verify it.
/// Returns how many migrations were applied.
pub fn init_db(conn: &Connection) -> AppResult<usize> {
    let applied = run_pending_migrations(conn)?;

    if !schema_ready(conn)? {
        return Err(AppError::Migration(
            "schema incomplete after running migrations".to_string(),
        ));
    }
    Ok(applied)
}
