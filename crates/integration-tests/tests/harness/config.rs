//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use catalog_config::{CatalogConfig, Config, CorsConfig, HealthConfig, SeedItem, ServerConfig};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with an empty store
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                    cors: None,
                },
                catalog: CatalogConfig::default(),
                telemetry: None,
            },
        }
    }

    /// Seed the store with an item, assigned the next id
    pub fn with_seed(mut self, name: &str, price: f64) -> Self {
        self.config.catalog.seed.push(SeedItem {
            name: name.to_owned(),
            price,
        });
        self
    }

    /// Seed the store with `{1: apple}`
    pub fn with_apple(self) -> Self {
        self.with_seed("apple", 1.2)
    }

    /// Set CORS configuration
    pub fn with_cors(mut self, config: CorsConfig) -> Self {
        self.config.server.cors = Some(config);
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
