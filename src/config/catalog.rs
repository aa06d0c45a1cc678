//! Service catalog source configuration

use serde::Deserialize;
use std::path::PathBuf;

/// Where the service catalog is read from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// YAML catalog file; the bundled catalog is used when unset
    pub path: Option<PathBuf>,
}
