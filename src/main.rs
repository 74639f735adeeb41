use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use kosht::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for kosht::AppCommand {
    fn from(cmd: Commands) -> kosht::AppCommand {
        match cmd {
            Commands::Rates { refresh } => kosht::AppCommand::Rates { refresh },
            Commands::Balance => kosht::AppCommand::Balance,
            Commands::Stats { year, month } => kosht::AppCommand::Stats { year, month },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display current USD/EUR exchange rates
    Rates {
        /// Drop the cached rates and fetch fresh ones
        #[arg(short, long)]
        refresh: bool,
    },
    /// Display overall income, expenses and balance
    Balance,
    /// Display per-category statistics for a period
    Stats {
        /// Reporting year (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Reporting month, 1-12 (defaults to the whole year)
        #[arg(short, long)]
        month: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => setup(),
        Some(cmd) => kosht::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}

fn setup() -> anyhow::Result<()> {
    use anyhow::Context;

    let path = kosht::core::config::AppConfig::default_config_path()?;

    if path.exists() {
        anyhow::bail!("Configuration file already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let default_config = r#"---
ledger:
  - type: INCOME
    amount: 12000.0
    category: Income
    date: 2026-08-01
    comment: Salary
  - type: EXPENSE
    amount: -250.0
    category: Products
    date: 2026-08-03

providers:
  monobank:
    base_url: "https://api.monobank.ua"
"#;

    std::fs::write(&path, default_config)
        .with_context(|| format!("Failed to write config file to {}", path.display()))?;

    tracing::info!("Created default configuration at {}", path.display());
    Ok(())
}
