// src/error/types.rs
use thiserror::Error;

/// Application error taxonomy.
///
/// "Not found" and zero-rows-affected are NOT represented here: the
/// repositories report them as `Option`/affected-row counts, because
/// they are normal outcomes, not failures.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or invalid startup settings. Fatal; aborts startup.
    #[error("Missing DB configuration: {0}")]
    Config(String),

    /// The database could not be opened. Fatal at startup; during
    /// login it ends the session (fail-closed).
    #[error("Database connection failed: {0}")]
    Connection(String),

    /// A statement or backend fault during an operation. Caught at the
    /// menu dispatch boundary; the session continues.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Console stream failure (closed stdin, broken pipe). Ends the
    /// session.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Non-numeric input where a number is required. Caught at the
    /// menu dispatch boundary; the session continues.
    #[error("Invalid number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),
}

pub type AppResult<T> = Result<T, AppError>;
