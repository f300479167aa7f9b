use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod balance;
mod verify;


#[derive(Debug, Parser)]
#[command(name = "framing-cli")]
#[command(about = "Tibet media framing dataset builder")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build the balanced dataset from raw collector CSVs
    Balance {
        /// Report what would be written without touching the output directory
        #[arg(long)]
        dry_run: bool,
    },
    /// Check the balance invariants of an existing dataset CSV
    Verify {
        /// Path to the balanced dataset CSV
        #[arg(long)]
        dataset: PathBuf,

        /// Minimum token count every record must meet
        #[arg(long, default_value_t = 20)]
        min_token_count: i64,
    },
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Balance { dry_run }) => {
            let config = framing_core::load_app_config()?;
            init_tracing(&config.log_level);
            balance::run(&config, dry_run)
        }
        Some(Commands::Verify {
            dataset,
            min_token_count,
        }) => {
            init_tracing("info");
            verify::run(&dataset, min_token_count)
        }
        None => {
            println!("framing-cli: use the 'balance' or 'verify' subcommand (--help for details)");
            Ok(())
        }
    }
}
