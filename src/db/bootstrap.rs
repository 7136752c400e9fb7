// src/db/bootstrap.rs
//
// Development-mode bootstrap
//
// Creates a throwaway SQLite database in a temp directory, applies the
// schema and seed data, and hands back settings pointing at it. The
// production path never runs this: the schema is assumed to pre-exist.

use rusqlite::Connection;
use tempfile::TempDir;
use tracing::info;

use crate::config::DbConfig;
use crate::error::AppResult;

/// A throwaway database for `--dev` sessions.
///
/// Holds the temp directory open; dropping this removes the database.
pub struct DevDatabase {
    pub config: DbConfig,
    _dir: TempDir,
}

/// Create, initialize, and seed a throwaway database instance.
pub fn start() -> AppResult<DevDatabase> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("moonbase-dev.db");
    let url = path.to_string_lossy().into_owned();

    let conn = Connection::open(&path)?;
    apply_schema(&conn)?;
    conn.execute_batch(include_str!("../../seed.sql"))?;

    info!(database = %url, "development database bootstrapped");

    Ok(DevDatabase {
        config: DbConfig {
            url,
            user: "dev".to_string(),
            password: "dev".to_string(),
        },
        _dir: dir,
    })
}

/// Apply the table definitions. Idempotent (`IF NOT EXISTS` DDL); also
/// used by tests to prepare temp databases.
pub fn apply_schema(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(include_str!("../../schema.sql"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_yields_a_seeded_database() {
        let dev = start().unwrap();
        let conn = Connection::open(&dev.config.url).unwrap();

        let missions: i64 = conn
            .query_row("SELECT COUNT(*) FROM moon_mission", [], |row| row.get(0))
            .unwrap();
        assert!(missions > 0);

        let dev_account: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM account WHERE name = ?1 AND password = ?2",
                rusqlite::params!["dev", "dev"],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(dev_account, 1);
    }

    #[test]
    fn schema_application_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        apply_schema(&conn).unwrap();
        apply_schema(&conn).unwrap();
    }
}
