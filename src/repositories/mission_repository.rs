// src/repositories/mission_repository.rs
//
// Mission persistence - read-only

use std::sync::Arc;

use chrono::NaiveDate;
use rusqlite::{params, types::Type, Row};

use crate::db::ConnectionProvider;
use crate::domain::Mission;
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait MissionRepository: Send + Sync {
    /// Spacecraft names only, ascending by launch date.
    fn list_spacecraft(&self) -> AppResult<Vec<String>>;

    /// Exact match on the primary key; `None` is a normal outcome.
    fn get_by_id(&self, mission_id: i64) -> AppResult<Option<Mission>>;

    /// Rows whose launch date falls in the given calendar year.
    /// Bounds-checking the year is the caller's job.
    fn count_by_year(&self, year: i32) -> AppResult<i64>;
}

pub struct SqliteMissionRepository {
    provider: Arc<ConnectionProvider>,
}

impl SqliteMissionRepository {
    pub fn new(provider: Arc<ConnectionProvider>) -> Self {
        Self { provider }
    }

    /// Map a database row to a Mission. Returns `rusqlite::Error` for
    /// `query_row`/`query_map` compatibility.
    fn row_to_mission(row: &Row) -> Result<Mission, rusqlite::Error> {
        let date_str: String = row.get("launch_date")?;
        let launch_date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e))
        })?;

        Ok(Mission {
            mission_id: row.get("mission_id")?,
            spacecraft: row.get("spacecraft")?,
            launch_date,
            outcome: row.get("outcome")?,
        })
    }
}

impl MissionRepository for SqliteMissionRepository {
    fn list_spacecraft(&self) -> AppResult<Vec<String>> {
        let conn = self.provider.open()?;

        let mut stmt = conn.prepare("SELECT spacecraft FROM moon_mission ORDER BY launch_date")?;

        let names: Vec<String> = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(names)
    }

    fn get_by_id(&self, mission_id: i64) -> AppResult<Option<Mission>> {
        let conn = self.provider.open()?;

        let mut stmt = conn.prepare(
            "SELECT mission_id, spacecraft, launch_date, outcome
             FROM moon_mission WHERE mission_id = ?1",
        )?;

        match stmt.query_row(params![mission_id], Self::row_to_mission) {
            Ok(mission) => Ok(Some(mission)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn count_by_year(&self, year: i32) -> AppResult<i64> {
        let conn = self.provider.open()?;

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM moon_mission
             WHERE CAST(strftime('%Y', launch_date) AS INTEGER) = ?1",
            params![year],
            |row| row.get(0),
        )?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DbConfig;
    use crate::db::apply_schema;
    use tempfile::TempDir;

    fn repository() -> (SqliteMissionRepository, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missions.db");
        let url = path.to_string_lossy().into_owned();

        let conn = rusqlite::Connection::open(&path).unwrap();
        apply_schema(&conn).unwrap();
        // Inserted out of launch-date order on purpose.
        conn.execute_batch(
            "INSERT INTO moon_mission (mission_id, spacecraft, launch_date, outcome) VALUES
                 (1, 'Apollo 11', '1969-07-16', 'Success'),
                 (2, 'Luna 2',    '1959-09-12', 'Success'),
                 (3, 'Apollo 13', '1970-04-11', 'Partial failure'),
                 (4, 'Surveyor 1', '1966-05-30', 'Success');",
        )
        .unwrap();

        let provider = Arc::new(ConnectionProvider::new(DbConfig {
            url,
            user: "test".to_string(),
            password: "test".to_string(),
        }));
        (SqliteMissionRepository::new(provider), dir)
    }

    #[test]
    fn list_is_ordered_by_launch_date() {
        let (repo, _dir) = repository();
        let names = repo.list_spacecraft().unwrap();
        assert_eq!(names, vec!["Luna 2", "Surveyor 1", "Apollo 11", "Apollo 13"]);
    }

    #[test]
    fn get_by_id_maps_every_column() {
        let (repo, _dir) = repository();
        let mission = repo.get_by_id(3).unwrap().unwrap();

        assert_eq!(mission.mission_id, 3);
        assert_eq!(mission.spacecraft, "Apollo 13");
        assert_eq!(
            mission.launch_date,
            NaiveDate::from_ymd_opt(1970, 4, 11).unwrap()
        );
        assert_eq!(mission.outcome, "Partial failure");
    }

    #[test]
    fn get_by_id_absent_is_none_not_an_error() {
        let (repo, _dir) = repository();
        assert!(repo.get_by_id(42).unwrap().is_none());
    }

    #[test]
    fn count_by_year_groups_on_the_calendar_year() {
        let (repo, _dir) = repository();
        assert_eq!(repo.count_by_year(1969).unwrap(), 1);
        assert_eq!(repo.count_by_year(1959).unwrap(), 1);
        assert_eq!(repo.count_by_year(1980).unwrap(), 0);
    }
}
