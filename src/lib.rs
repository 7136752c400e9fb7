// src/lib.rs
// moonbase - console manager for moon mission records and operator accounts
//
// Architecture:
// - Repositories are dumb data mappers; each operation opens its own
//   connection and releases it on every exit path
// - Services own the login and account-creation flows
// - The console layer owns every prompt and fixed text; input/output
//   handles are injected, never process-wide singletons

pub mod config;
pub mod console;
pub mod db;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use config::{Cli, DbConfig};

pub use console::{Console, MenuSession};

pub use db::{apply_schema, ConnectionProvider, DevDatabase};

pub use domain::{Mission, NewAccount};

pub use error::{AppError, AppResult};

pub use repositories::{
    AccountRepository, MissionRepository, SqliteAccountRepository, SqliteMissionRepository,
};

pub use services::{generate_username, AccountService, CreateAccountRequest, LoginService};
