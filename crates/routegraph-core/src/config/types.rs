//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::graph::types::SortKey;

/// Current configuration format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Route network configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Configuration format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Path search configuration
    #[serde(default)]
    pub search: SearchConfig,

    /// Route listing configuration
    #[serde(default)]
    pub listing: ListingConfig,
}

/// Configuration for path queries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum nodes a single query may settle (absent = unlimited)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_settled: Option<usize>,
}

/// Configuration for route listings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Sort order used when a listing does not name one
    #[serde(default)]
    pub default_sort: SortKey,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_FORMAT_VERSION,
            search: SearchConfig::default(),
            listing: ListingConfig::default(),
        }
    }
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}
