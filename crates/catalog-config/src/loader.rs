use std::path::Path;

use crate::{AnyOrArray, Config};

/// Route prefix owned by the item endpoints
const ITEMS_PREFIX: &str = "/items";

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::from_toml(&raw)
    }

    /// Parse and validate configuration from raw TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing, or validation fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let expanded = crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the health path is malformed or shadows the item
    /// routes, or if CORS lists contain unparseable values
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_health()?;
        self.validate_cors()?;
        Ok(())
    }

    fn validate_health(&self) -> anyhow::Result<()> {
        let health = &self.server.health;
        if !health.enabled {
            return Ok(());
        }

        if !health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/': `{}`", health.path);
        }

        let shadows_items = health
            .path
            .strip_prefix(ITEMS_PREFIX)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'));
        if shadows_items {
            anyhow::bail!("server.health.path must not be under {ITEMS_PREFIX}: `{}`", health.path);
        }

        Ok(())
    }

    fn validate_cors(&self) -> anyhow::Result<()> {
        let Some(ref cors) = self.server.cors else {
            return Ok(());
        };

        if let AnyOrArray::List(methods) = &cors.methods {
            for method in methods {
                http::Method::from_bytes(method.as_bytes())
                    .map_err(|e| anyhow::anyhow!("invalid CORS method `{method}`: {e}"))?;
            }
        }

        if let AnyOrArray::List(headers) = &cors.headers {
            for header in headers {
                http::HeaderName::try_from(header.as_str())
                    .map_err(|e| anyhow::anyhow!("invalid CORS header `{header}`: {e}"))?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::net::SocketAddr;

    use crate::{LogFormat, SeedItem};

    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::from_toml("").unwrap();

        assert_eq!(config.server.listen_address(), SocketAddr::from(([0, 0, 0, 0], 8000)));
        assert!(config.server.health.enabled);
        assert_eq!(config.server.health.path, "/health");
        assert!(config.catalog.seed.is_empty());
        assert!(config.telemetry.is_none());
    }

    #[test]
    fn full_document() {
        let raw = r#"
            [server]
            listen_address = "127.0.0.1:9100"

            [server.health]
            path = "/healthz"

            [server.cors]
            origins = ["http://localhost:5173"]
            methods = ["GET", "POST"]

            [[catalog.seed]]
            name = "apple"
            price = 1.2

            [telemetry]
            filter = "debug"
            format = "json"
        "#;

        let config = Config::from_toml(raw).unwrap();

        assert_eq!(config.server.listen_address(), SocketAddr::from(([127, 0, 0, 1], 9100)));
        assert_eq!(config.server.health.path, "/healthz");
        assert_eq!(
            config.catalog.seed,
            vec![SeedItem {
                name: "apple".to_owned(),
                price: 1.2
            }]
        );

        let telemetry = config.telemetry.unwrap();
        assert_eq!(telemetry.filter.as_deref(), Some("debug"));
        assert_eq!(telemetry.format, LogFormat::Json);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Config::from_toml("[catalog]\nseeds = []").unwrap_err();
        assert!(err.to_string().contains("failed to parse config"));
    }

    #[test]
    fn seed_item_rejects_extra_fields() {
        let err = Config::from_toml("[[catalog.seed]]\nname = \"a\"\nprice = 1\nid = 4").unwrap_err();
        assert!(err.to_string().contains("failed to parse config"));
    }

    #[test]
    fn health_path_must_be_absolute() {
        let err = Config::from_toml("[server.health]\npath = \"health\"").unwrap_err();
        assert!(err.to_string().contains("must start with '/'"));
    }

    #[test]
    fn health_path_cannot_shadow_items() {
        let err = Config::from_toml("[server.health]\npath = \"/items/health\"").unwrap_err();
        assert!(err.to_string().contains("must not be under /items"));

        assert!(Config::from_toml("[server.health]\npath = \"/itemsz\"").is_ok());
    }

    #[test]
    fn disabled_health_skips_path_checks() {
        let config = Config::from_toml("[server.health]\nenabled = false\npath = \"/items\"").unwrap();
        assert!(!config.server.health.enabled);
    }

    #[test]
    fn invalid_cors_method() {
        let err = Config::from_toml("[server.cors]\nmethods = [\"GE T\"]").unwrap_err();
        assert!(err.to_string().contains("invalid CORS method"));
    }

    #[test]
    fn load_reads_and_expands_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nlisten_address = \"{{{{ env.CATALOG_LOADER_ADDR }}}}\"").unwrap();

        temp_env::with_var("CATALOG_LOADER_ADDR", Some("127.0.0.1:7001"), || {
            let config = Config::load(file.path()).unwrap();
            assert_eq!(config.server.listen_address(), SocketAddr::from(([127, 0, 0, 1], 7001)));
        });
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Config::load(Path::new("/nonexistent/catalog.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn shipped_config_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../catalog.toml");

        temp_env::with_vars_unset(["CATALOG_LISTEN_ADDRESS", "CATALOG_LOG"], || {
            let config = Config::load(&path).unwrap();

            assert_eq!(config.server.listen_address(), SocketAddr::from(([0, 0, 0, 0], 8000)));
            assert_eq!(config.catalog.seed.len(), 1);
            assert_eq!(config.catalog.seed[0].name, "apple");
            assert_eq!(
                config.telemetry.unwrap().filter.as_deref(),
                Some("info,tower_http=debug")
            );
        });
    }
}
