// src/db/connection.rs
//
// Database connection management
//
// PRINCIPLES:
// - One connection per operation: acquire at entry, released by Drop
//   on every exit path
// - No pooling, no reuse across operations
// - Clear error propagation

use rusqlite::Connection;

use crate::config::DbConfig;
use crate::error::{AppError, AppResult};

/// Hands out a fresh connection for every operation.
///
/// A failure in one operation cannot leak connection state into the
/// next: the connection lives exactly as long as the operation that
/// opened it.
pub struct ConnectionProvider {
    config: DbConfig,
}

impl ConnectionProvider {
    pub fn new(config: DbConfig) -> Self {
        Self { config }
    }

    /// Open a new connection to the configured database.
    ///
    /// Open failures are connection errors (fatal at startup); faults
    /// on statements issued later surface as database errors instead.
    pub fn open(&self) -> AppResult<Connection> {
        let conn = Connection::open(&self.config.url)
            .map_err(|e| AppError::Connection(e.to_string()))?;

        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA busy_timeout = 5000;",
        )?;

        Ok(conn)
    }
}
