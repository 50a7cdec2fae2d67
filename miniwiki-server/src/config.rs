//! Runtime configuration derived from CLI/env.

use std::path::PathBuf;

use anyhow::{ensure, Result};

use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub data_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let data_dir = if cli.data_dir.is_relative() {
            std::env::current_dir()?.join(&cli.data_dir)
        } else {
            cli.data_dir.clone()
        };

        // The server never creates the data directory itself.
        ensure!(
            data_dir.is_dir(),
            "data directory {} does not exist",
            data_dir.display()
        );

        Ok(Self {
            listen_addr: cli.listen_addr.clone(),
            data_dir,
        })
    }
}
