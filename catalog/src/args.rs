use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Config file read when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "catalog.toml";

/// Item catalog service
#[derive(Debug, Parser)]
#[command(name = "catalog", about = "Item catalog HTTP service with standardized error envelopes")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH, env = "CATALOG_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "CATALOG_LISTEN")]
    pub listen: Option<SocketAddr>,

    /// Log filter used when the config has none
    #[arg(long, default_value = "info", env = "CATALOG_LOG")]
    pub log_filter: String,
}
