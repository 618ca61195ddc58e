//! HTTP server command for the linkstash API

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use linkstash_server::db::{default_database_url, pool::DEFAULT_MAX_CONNECTIONS};
use linkstash_server::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3030)
    #[arg(long, short = 'b', env = "LINKSTASH_BIND", default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// SQLite database URL (default: sqlite://~/.linkstash/links.db)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "LINKSTASH_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

impl ServeArgs {
    fn into_config(self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.bind,
            database_url: self.database_url.unwrap_or_else(default_database_url),
            max_connections: self.max_connections,
            cors_permissive: self.cors_permissive,
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.into_config();
    tracing::info!("Starting linkstash server on {}", config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(config).await.context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: ServeArgs,
    }

    #[test]
    fn flags_map_to_config() {
        let harness = Harness::parse_from([
            "test",
            "--bind",
            "0.0.0.0:8080",
            "--database-url",
            "sqlite::memory:",
            "--max-connections",
            "2",
            "--cors-permissive",
        ]);
        let config = harness.args.into_config();

        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.max_connections, 2);
        assert!(config.cors_permissive);
    }
}
