use std::path::PathBuf;

use clap::Parser;

/// CLI for the wiki server. Pages live as flat files under the data
/// directory; everything else is served from memory per request.
#[derive(Debug, Clone, Parser)]
#[command(name = "miniwiki-server", about = "Filesystem-backed wiki server")]
pub struct Cli {
    /// Directory holding the page files
    #[arg(long, env = "MINIWIKI_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Listen address for the HTTP endpoints
    #[arg(long, env = "MINIWIKI_ADDR", default_value = "127.0.0.1:8080")]
    pub listen_addr: String,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,
}
