//! Serve command
//!
//! Usage: inkpost serve [--config FILE] [--host HOST] [--port PORT] [--db PATH]

use clap::Args;
use inkpost_core::logging_facility;
use inkpost_server::{Server, Settings};
use std::net::IpAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Interface to bind (overrides server.host)
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Port to listen on (overrides server.port)
    #[arg(long)]
    pub port: Option<u16>,

    /// SQLite database file (overrides database.path)
    #[arg(long)]
    pub db: Option<PathBuf>,
}

/// Execute serve command
pub async fn execute(
    config: Option<&Path>,
    args: ServeArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = Settings::load(config)?;
    if let Some(host) = args.host {
        settings.server.host = host;
    }
    if let Some(port) = args.port {
        settings.server.port = port;
    }
    if let Some(db) = args.db {
        settings.database.path = db;
    }

    logging_facility::init(settings.logging.profile);
    tracing::debug!(?settings, "Loaded settings");

    let server = Server::new(settings)?;
    server.run().await?;

    Ok(())
}
