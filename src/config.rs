// src/config.rs
//
// Startup settings
//
// Resolution order per setting: explicit CLI flag, then environment
// variable. All three connection settings are required; missing any
// one aborts startup with every absent key named.

use clap::Parser;

use crate::error::{AppError, AppResult};

#[derive(Parser, Debug)]
#[command(name = "moonbase")]
#[command(about = "Console manager for moon mission records and operator accounts")]
#[command(version)]
pub struct Cli {
    /// Database endpoint (SQLite file path)
    #[arg(long, env = "APP_DB_URL")]
    pub db_url: Option<String>,

    /// Database principal
    #[arg(long, env = "APP_DB_USER")]
    pub db_user: Option<String>,

    /// Database credential
    #[arg(long, env = "APP_DB_PASS")]
    pub db_pass: Option<String>,

    /// Bootstrap a throwaway development database and run against it
    #[arg(long, env = "DEV_MODE")]
    pub dev: bool,
}

/// Connection settings resolved once at startup and shared for the
/// whole session.
///
/// SQLite consumes only `url`; the principal and credential stay part
/// of the startup contract so the same surface works against a managed
/// engine.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub url: String,
    pub user: String,
    pub password: String,
}

impl DbConfig {
    pub fn resolve(cli: &Cli) -> AppResult<Self> {
        let url = normalize(cli.db_url.as_deref());
        let user = normalize(cli.db_user.as_deref());
        let password = normalize(cli.db_pass.as_deref());

        let missing: Vec<&str> = [
            ("APP_DB_URL", &url),
            ("APP_DB_USER", &user),
            ("APP_DB_PASS", &password),
        ]
        .iter()
        .filter(|(_, v)| v.is_none())
        .map(|(k, _)| *k)
        .collect();

        if !missing.is_empty() {
            return Err(AppError::Config(format!(
                "provide {} as flags or environment variables",
                missing.join(", ")
            )));
        }

        Ok(Self {
            url: url.unwrap(),
            user: user.unwrap(),
            password: password.unwrap(),
        })
    }
}

/// Trimmed value, or `None` when the setting is absent or blank.
fn normalize(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
