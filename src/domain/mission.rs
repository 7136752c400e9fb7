// src/domain/mission.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A moon mission record.
///
/// Read-only reference data: this system lists, fetches, and counts
/// missions but never writes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    /// Externally assigned identifier (pre-existing data)
    pub mission_id: i64,

    /// Spacecraft name
    pub spacecraft: String,

    /// Calendar launch date
    pub launch_date: NaiveDate,

    /// Mission outcome, free text
    pub outcome: String,
}
