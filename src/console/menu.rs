// src/console/menu.rs
//
// Menu dispatch
//
// One loop: print the menu, read a choice, run the operation, report.
// Operation failures stop at the dispatch boundary — a bad operation
// never kills the session. The only exceptions are console stream
// failures, which end it.

use std::io::{BufRead, Write};
use std::sync::Arc;

use tracing::error;

use crate::console::Console;
use crate::error::{AppError, AppResult};
use crate::repositories::{AccountRepository, MissionRepository};
use crate::services::{AccountService, CreateAccountRequest};

const MIN_YEAR: i32 = 1950;
const MAX_YEAR: i32 = 2100;

pub struct MenuSession {
    missions: Arc<dyn MissionRepository>,
    accounts: Arc<dyn AccountRepository>,
    account_service: AccountService,
}

impl MenuSession {
    pub fn new(missions: Arc<dyn MissionRepository>, accounts: Arc<dyn AccountRepository>) -> Self {
        Self {
            missions,
            account_service: AccountService::new(accounts.clone()),
            accounts,
        }
    }

    pub fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> AppResult<()> {
        loop {
            print_menu(console)?;
            let choice = console.prompt("Enter choice (0-6): ")?;

            let result = match choice.trim() {
                "1" => self.list_moon_missions(console),
                "2" => self.get_moon_mission_by_id(console),
                "3" => self.count_missions_by_year(console),
                "4" => self.create_account(console),
                "5" => self.update_account_password(console),
                "6" => self.delete_account(console),
                "0" => return Ok(()),
                _ => console.write_line("Invalid choice. Please select a number from 0 to 6."),
            };

            if let Err(e) = result {
                report_failure(console, e)?;
            }
        }
    }

    // Option 1
    fn list_moon_missions<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> AppResult<()> {
        console.write_line("--- Spacecraft Names ---")?;
        for name in self.missions.list_spacecraft()? {
            console.write_line(&name)?;
        }
        Ok(())
    }

    // Option 2
    fn get_moon_mission_by_id<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> AppResult<()> {
        let mission_id = console.prompt_i64("Enter mission_id: ")?;

        match self.missions.get_by_id(mission_id)? {
            Some(mission) => {
                console.write_line(&format!("\n--- Mission Details (ID: {mission_id}) ---"))?;
                console.write_line(&format!("Spacecraft: {}", mission.spacecraft))?;
                console.write_line(&format!("Launch Date: {}", mission.launch_date))?;
                console.write_line(&format!("Outcome: {}", mission.outcome))?;
            }
            None => {
                console.write_line(&format!("Mission with ID {mission_id} not found."))?;
            }
        }
        Ok(())
    }

    // Option 3
    fn count_missions_by_year<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> AppResult<()> {
        let year = console.prompt_i32("Enter year: ")?;

        // Bounds-checked here; out of range issues no query.
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return console.write_line("Invalid year");
        }

        let count = self.missions.count_by_year(year)?;
        console.write_line(&format!("Total missions launched in {year}: {count}"))
    }

    // Option 4
    fn create_account<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> AppResult<()> {
        let first_name = console.prompt("Enter first name: ")?;
        let last_name = console.prompt("Enter last name: ")?;
        let ssn = console.prompt("Enter ssn: ")?;
        let password = console.prompt("Enter password: ")?;

        if first_name.is_empty() || last_name.is_empty() {
            return console.write_line("First name and last name cannot be empty.");
        }
        if password.is_empty() {
            return console.write_line("Password cannot be empty.");
        }

        let request = CreateAccountRequest {
            first_name,
            last_name,
            ssn,
            password,
        };

        match self.account_service.create_account(request)? {
            Some(username) => {
                console.write_line(&format!("Account created successfully. Username: {username}"))
            }
            None => console.write_line("Failed to create account."),
        }
    }

    // Option 5
    fn update_account_password<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> AppResult<()> {
        let user_id = console.prompt_i64("Enter user_id: ")?;
        let new_password = console.prompt("Enter new password: ")?;

        if self.accounts.update_password(user_id, &new_password)? > 0 {
            console.write_line("Account password updated successfully.")
        } else {
            console.write_line(&format!("Update failed: User ID {user_id} not found."))
        }
    }

    // Option 6
    fn delete_account<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> AppResult<()> {
        let user_id = console.prompt_i64("Enter user_id to delete: ")?;

        if self.accounts.delete(user_id)? > 0 {
            console.write_line("Account deleted successfully.")
        } else {
            console.write_line(&format!("Delete failed: User ID {user_id} not found."))
        }
    }
}

fn print_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> AppResult<()> {
    console.write_line("\n--- Menu ---")?;
    console.write_line("1) List moon missions")?;
    console.write_line("2) Get a moon mission by mission_id")?;
    console.write_line("3) Count missions for a given year")?;
    console.write_line("4) Create an account")?;
    console.write_line("5) Update an account password")?;
    console.write_line("6) Delete an account")?;
    console.write_line("0) Exit")?;
    console.write_line("------------")
}

/// The dispatch boundary: plain description to the console, detail to
/// the log, and the loop continues. Console stream failures propagate
/// and end the session.
fn report_failure<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    err: AppError,
) -> AppResult<()> {
    match err {
        AppError::InvalidNumber(_) => {
            console.write_line("Invalid number format provided for input.")
        }
        AppError::Io(_) => Err(err),
        AppError::Database(inner) => {
            error!(error = %inner, "menu operation failed");
            console.write_line(&format!("Database operation failed: {inner}"))
        }
        other => {
            error!(error = %other, "menu operation failed");
            console.write_line(&format!("Database operation failed: {other}"))
        }
    }
}
