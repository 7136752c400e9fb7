// src/repositories/account_repository.rs
//
// Account persistence

use std::sync::Arc;

use rusqlite::params;

use crate::db::ConnectionProvider;
use crate::domain::NewAccount;
use crate::error::AppResult;

/// Zero rows affected from the mutating operations means "user not
/// found" and is a normal outcome, not an error. Uniqueness of `name`
/// is guaranteed by the caller before `create`; the operation itself
/// does not re-check.
#[cfg_attr(test, mockall::automock)]
pub trait AccountRepository: Send + Sync {
    /// True iff a row with that exact `name` exists.
    fn exists(&self, username: &str) -> AppResult<bool>;

    /// True iff a row matches both fields exactly (case-sensitive).
    fn verify(&self, username: &str, password: &str) -> AppResult<bool>;

    /// Insert one row; returns rows affected.
    fn create(&self, account: &NewAccount) -> AppResult<usize>;

    /// Returns rows affected; 0 means no such `user_id`.
    fn update_password(&self, user_id: i64, new_password: &str) -> AppResult<usize>;

    /// Returns rows affected; 0 means no such `user_id`.
    fn delete(&self, user_id: i64) -> AppResult<usize>;
}

pub struct SqliteAccountRepository {
    provider: Arc<ConnectionProvider>,
}

impl SqliteAccountRepository {
    pub fn new(provider: Arc<ConnectionProvider>) -> Self {
        Self { provider }
    }
}

impl AccountRepository for SqliteAccountRepository {
    fn exists(&self, username: &str) -> AppResult<bool> {
        let conn = self.provider.open()?;

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM account WHERE name = ?1",
            params![username],
            |row| row.get(0),
        )?;

        Ok(count > 0)
    }

    fn verify(&self, username: &str, password: &str) -> AppResult<bool> {
        let conn = self.provider.open()?;

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM account WHERE name = ?1 AND password = ?2",
            params![username, password],
            |row| row.get(0),
        )?;

        Ok(count > 0)
    }

    fn create(&self, account: &NewAccount) -> AppResult<usize> {
        let conn = self.provider.open()?;

        let rows = conn.execute(
            "INSERT INTO account (name, password, first_name, last_name, ssn)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                account.name,
                account.password,
                account.first_name,
                account.last_name,
                account.ssn,
            ],
        )?;

        Ok(rows)
    }

    fn update_password(&self, user_id: i64, new_password: &str) -> AppResult<usize> {
        let conn = self.provider.open()?;

        let rows = conn.execute(
            "UPDATE account SET password = ?1 WHERE user_id = ?2",
            params![new_password, user_id],
        )?;

        Ok(rows)
    }

    fn delete(&self, user_id: i64) -> AppResult<usize> {
        let conn = self.provider.open()?;

        let rows = conn.execute("DELETE FROM account WHERE user_id = ?1", params![user_id])?;

        Ok(rows)
    }
}
