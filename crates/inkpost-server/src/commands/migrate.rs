//! Migrate command
//!
//! Usage: inkpost migrate [--config FILE] [--db PATH]

use clap::Args;
use inkpost_core::logging_facility;
use inkpost_server::Settings;
use inkpost_store::{db, migrations};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// SQLite database file (overrides database.path)
    #[arg(long)]
    pub db: Option<PathBuf>,
}

/// Execute migrate command
pub fn execute(config: Option<&Path>, args: MigrateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = Settings::load(config)?;
    if let Some(db) = args.db {
        settings.database.path = db;
    }
    logging_facility::init(settings.logging.profile);

    let mut conn = db::open(&settings.database.path)?;
    migrations::apply_migrations(&mut conn)?;

    println!("Database: {}", settings.database.path.display());
    for id in migrations::applied_migrations(&conn)? {
        println!("✓ {}", id);
    }

    Ok(())
}
