//! Contrive Task Tracker
//!
//! A command-line task tracker persisting tasks in a MongoDB
//! collection.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use contrive::cli::{self, Cli};
use contrive::config::Config;
use contrive::db::Database;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

async fn run(args: Cli) -> Result<()> {
    // Logging goes to stderr; stdout is reserved for command output.
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::from_env()?;
    let db = Database::connect(&config).await?;

    cli::execute(&db, &args.command).await?;
    Ok(())
}
