//! Library entrypoint for miniwiki-server so tests (and other binaries)
//! can mount the router without binding a listener.

pub mod cli;
pub mod config;
pub mod server;
pub mod templates;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}

/// Run the wiki server using CLI args (parsed by the caller).
pub async fn run_with_cli(cli: cli::Cli) -> Result<()> {
    init_tracing(cli.verbose)?;

    let cfg = ServerConfig::from_cli(&cli)?;
    server::serve(cfg).await
}
