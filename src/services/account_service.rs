// src/services/account_service.rs
use std::sync::Arc;

use tracing::debug;

use crate::domain::NewAccount;
use crate::error::{AppError, AppResult};
use crate::repositories::AccountRepository;
use crate::services::username::generate_username;

/// Retries after a lost race on the handle before giving up. Anything
/// repeatedly violating a constraint past this is not a handle race.
const MAX_CREATE_RETRIES: u32 = 3;

#[derive(Debug, Clone)]
pub struct CreateAccountRequest {
    pub first_name: String,
    pub last_name: String,
    pub ssn: String,
    pub password: String,
}

pub struct AccountService {
    accounts: Arc<dyn AccountRepository>,
}

impl AccountService {
    pub fn new(accounts: Arc<dyn AccountRepository>) -> Self {
        Self { accounts }
    }

    /// Generate a unique handle and insert the account.
    ///
    /// A uniqueness-constraint violation on insert means the handle
    /// was taken between the existence check and the insert; the flow
    /// regenerates and retries. Returns the assigned handle, or `None`
    /// when the backend reports zero rows inserted.
    pub fn create_account(&self, request: CreateAccountRequest) -> AppResult<Option<String>> {
        let mut retries = 0;
        loop {
            let username =
                generate_username(&request.first_name, &request.last_name, self.accounts.as_ref())?;

            let account = NewAccount {
                name: username.clone(),
                password: request.password.clone(),
                first_name: request.first_name.clone(),
                last_name: request.last_name.clone(),
                ssn: request.ssn.clone(),
            };

            match self.accounts.create(&account) {
                Ok(rows) if rows > 0 => return Ok(Some(username)),
                Ok(_) => return Ok(None),
                Err(AppError::Database(e))
                    if is_unique_violation(&e) && retries < MAX_CREATE_RETRIES =>
                {
                    retries += 1;
                    debug!(handle = %username, "handle taken between check and insert, regenerating");
                }
                Err(e) => return Err(e),
            }
        }
    }
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}
