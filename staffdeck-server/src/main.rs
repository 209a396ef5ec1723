//! staffdeck-server binary
//!
//! Loads store settings from the environment, ensures the schema exists, and
//! serves the employee/department pages. A schema or connection failure here
//! is fatal.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use staffdeck_core::{create_pool, init_schema, StoreConfig};
use staffdeck_server::{run_server, ServerConfig};

/// Employee and department directory server
#[derive(Parser, Debug)]
#[command(name = "staffdeck-server", version, about)]
struct Cli {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1:5000")]
    bind: SocketAddr,

    /// Allow any origin instead of localhost only
    #[arg(long)]
    cors_permissive: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.debug);

    let store = StoreConfig::from_env().context("store configuration")?;
    let pool = create_pool(&store)
        .await
        .context("failed to connect to the store")?;

    init_schema(&pool).await?;

    run_server(
        pool,
        ServerConfig {
            bind_addr: cli.bind,
            cors_permissive: cli.cors_permissive,
        },
    )
    .await?;

    Ok(())
}
