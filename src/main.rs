// src/main.rs
use std::io;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use moonbase::db::bootstrap;
use moonbase::repositories::{AccountRepository, MissionRepository};
use moonbase::{
    Cli, ConnectionProvider, Console, DbConfig, LoginService, MenuSession,
    SqliteAccountRepository, SqliteMissionRepository,
};

fn main() -> anyhow::Result<()> {
    // Logging goes to stderr; stdout is the console session.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // The dev guard owns the throwaway database directory for the
    // lifetime of the session.
    let (config, _dev_db) = if cli.dev {
        let dev = bootstrap::start().context("failed to bootstrap the development database")?;
        (dev.config.clone(), Some(dev))
    } else {
        (DbConfig::resolve(&cli)?, None)
    };

    let provider = Arc::new(ConnectionProvider::new(config));

    // Initial connection probe; an unreachable backend is fatal.
    provider.open().context("initial DB connection failed")?;
    info!("database reachable, starting session");

    let accounts: Arc<dyn AccountRepository> =
        Arc::new(SqliteAccountRepository::new(provider.clone()));
    let missions: Arc<dyn MissionRepository> = Arc::new(SqliteMissionRepository::new(provider));

    let login = LoginService::new(accounts.clone());
    let session = MenuSession::new(missions, accounts);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    // Failed login exits normally; only startup errors are fatal.
    if !login.login(&mut console)? {
        return Ok(());
    }

    session.run(&mut console)?;
    Ok(())
}
