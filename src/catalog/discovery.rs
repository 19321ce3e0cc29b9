//! Catalog discovery
//!
//! Commands look for a catalog in this order:
//! 1. Explicit path from `--catalog` or `CONFPLAN_CATALOG`
//! 2. `confplan.yaml` in the current directory
//! 3. `catalog.yaml` under the user configuration directory
//! 4. The built-in seed catalog

use std::path::{Path, PathBuf};

use super::config::CatalogConfig;
use super::seed::seed_catalog;
use crate::error::Result;

/// Project-local catalog filename
pub const CATALOG_FILE: &str = "confplan.yaml";

/// Where the active catalog came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Loaded from a catalog file on disk
    File(PathBuf),
    /// The built-in seed catalog
    BuiltIn,
}

impl CatalogSource {
    /// Human-readable description of the source
    pub fn describe(&self) -> String {
        match self {
            CatalogSource::File(path) => format!("catalog file {}", path.display()),
            CatalogSource::BuiltIn => "built-in catalog".to_string(),
        }
    }
}

/// Resolve the active catalog and where it came from
pub fn resolve(explicit: Option<&Path>) -> Result<(CatalogConfig, CatalogSource)> {
    if let Some(path) = explicit {
        let config = CatalogConfig::load_from_path(path)?;
        return Ok((config, CatalogSource::File(path.to_path_buf())));
    }

    let local = PathBuf::from(CATALOG_FILE);
    if local.exists() {
        let config = CatalogConfig::load_from_path(&local)?;
        return Ok((config, CatalogSource::File(local)));
    }

    if let Some(user) = user_catalog_path() {
        if user.exists() {
            let config = CatalogConfig::load_from_path(&user)?;
            return Ok((config, CatalogSource::File(user)));
        }
    }

    Ok((seed_catalog(), CatalogSource::BuiltIn))
}

/// User-level catalog location under the platform configuration directory
pub fn user_catalog_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("confplan").join("catalog.yaml"))
}
