pub mod cli;
pub mod core;
pub mod providers;
pub mod store;

use crate::core::RateService;
use crate::core::cache::RateCache;
use crate::core::clock::SystemClock;
use crate::core::config::AppConfig;
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

pub enum AppCommand {
    Rates { refresh: bool },
    Balance,
    Stats { year: Option<i32>, month: Option<u32> },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("kosht starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Balance => cli::balance::run(&config.ledger),
        AppCommand::Stats { year, month } => cli::stats::run(&config.ledger, year, month),
        AppCommand::Rates { refresh } => {
            let base_url = config
                .providers
                .monobank
                .as_ref()
                .map_or("https://api.monobank.ua", |p| &p.base_url);
            let provider = providers::monobank::MonobankRateProvider::new(base_url);

            let slot = store::open_default_slot(&config);
            let cache = RateCache::new(slot, Arc::new(SystemClock));
            let service = RateService::new(cache, Arc::new(provider));

            cli::rates::run(&service, refresh).await
        }
    }
}
