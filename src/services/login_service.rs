// src/services/login_service.rs
//
// Login control
//
// Bounded-retry authentication over the account repository. The loop
// has three outcomes: authenticated (true), attempts exhausted
// (false), backend failure (false, fail-closed — an error during
// verification denies access and ends the loop without consuming the
// remaining attempts).

use std::io::{BufRead, Write};
use std::sync::Arc;

use tracing::error;

use crate::console::Console;
use crate::error::AppResult;
use crate::repositories::AccountRepository;

const MAX_ATTEMPTS: u32 = 3;

pub struct LoginService {
    accounts: Arc<dyn AccountRepository>,
    max_attempts: u32,
}

impl LoginService {
    pub fn new(accounts: Arc<dyn AccountRepository>) -> Self {
        Self {
            accounts,
            max_attempts: MAX_ATTEMPTS,
        }
    }

    /// Run the login loop. `Ok(true)` only on successful verification;
    /// the caller proceeds to the menu only in that case.
    pub fn login<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> AppResult<bool> {
        let mut attempts = 0;

        while attempts < self.max_attempts {
            let username = console.prompt("Username: ")?;
            let password = console.prompt("Password: ")?;

            match self.accounts.verify(&username, &password) {
                Ok(true) => return Ok(true),
                Ok(false) => {}
                Err(e) => {
                    error!(error = %e, "login verification failed");
                    console.write_line(&format!("Error accessing database during login: {e}"))?;
                    return Ok(false);
                }
            }

            attempts += 1;
            if attempts < self.max_attempts {
                console.write_line(&format!(
                    "Invalid username or password. Try again ({} attempts left).",
                    self.max_attempts - attempts
                ))?;
            } else {
                console.write_line(
                    "Invalid username or password. Maximum attempts reached. Exiting.",
                )?;
            }
        }

        Ok(false)
    }
}
