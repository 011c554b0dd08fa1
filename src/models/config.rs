//! Configuration model loaded from external sources.

use serde::Deserialize;

/// Number of products shown on one listing page.
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Filter applied when the request does not name one.
pub const DEFAULT_FILTER: &str = "all";

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    pub templates_dir: String,
    #[serde(default)]
    pub catalog: CatalogSettings,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
/// Listing defaults handed to the catalog resolver.
pub struct CatalogSettings {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_filter")]
    pub default_filter: String,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_filter() -> String {
    DEFAULT_FILTER.to_string()
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            default_filter: default_filter(),
        }
    }
}
