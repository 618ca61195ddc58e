//! Create the database and its tables without starting the server

use anyhow::{Context, Result};
use clap::Parser;

use linkstash_server::db::default_database_url;
use linkstash_server::{open_store, ServerConfig};

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    /// SQLite database URL (default: sqlite://~/.linkstash/links.db)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let config = ServerConfig {
        database_url: args.database_url.unwrap_or_else(default_database_url),
        ..ServerConfig::default()
    };

    let pool = open_store(&config)
        .await
        .with_context(|| format!("Failed to initialize {}", config.database_url))?;
    pool.close().await;

    println!("Database ready: {}", config.database_url);
    Ok(())
}
