mod commands;

use clap::Parser;
use tracing::{debug, Level};
use platform_dashboard::auth::{AuthGate, ConfiguredProvider};
use platform_dashboard::catalog::seed::{default_platforms, load_seed_file};
use platform_dashboard::config::{load_config, Config};
use platform_dashboard::dashboard::{Dashboard, Settings};
use platform_dashboard::error::DashboardError;
use platform_dashboard::storage::FileStore;
use crate::commands::Cli;

async fn run(cli: Cli, config: Config) -> Result<(), DashboardError> {
    let seed = match &config.seed_file {
        Some(path) => load_seed_file(path).await?,
        None => default_platforms()
    };

    debug!("Using data directory {}", config.data_dir.display());
    let store = FileStore::new(&config.data_dir);
    let dashboard = Dashboard::load(store, Settings::from(&config), seed).await;
    let gate = AuthGate::new(ConfiguredProvider::from_config(&config.auth));

    commands::dispatch(cli.command, &config, dashboard, gate).await
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut config = match load_config(cli.config.as_deref()).await {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };
    if let Some(data_dir) = &cli.data_dir {
        config.data_dir = data_dir.clone();
    }

    let level = if cli.verbose { Level::DEBUG } else { config.level() };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli, config).await {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
