//! Inkpost CLI
//!
//! Command-line entry point: serve the blog or migrate its database

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "inkpost")]
#[command(about = "Inkpost - A minimal server-rendered blog", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./inkpost.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Migrate the database, then serve HTTP until shutdown
    Serve(commands::serve::ServeArgs),
    /// Apply pending database migrations and exit
    Migrate(commands::migrate::MigrateArgs),
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    let result = match cli.command {
        Commands::Serve(args) => commands::serve::execute(config, args).await,
        Commands::Migrate(args) => commands::migrate::execute(config, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
