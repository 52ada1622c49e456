use serde::Deserialize;

/// Item catalog configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Items loaded into the store at startup, assigned ids 1, 2, ...
    #[serde(default)]
    pub seed: Vec<SeedItem>,
}

/// An item present when the process starts
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedItem {
    pub name: String,
    pub price: f64,
}
