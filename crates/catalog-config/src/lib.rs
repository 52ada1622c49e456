#![allow(clippy::must_use_candidate)]

pub mod catalog;
pub mod cors;
mod env;
pub mod health;
mod loader;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use catalog::*;
pub use cors::*;
pub use health::*;
pub use server::*;
pub use telemetry::*;

/// Top-level catalog service configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Listener and HTTP middleware configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Item catalog configuration
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
