//! Command implementations for Confplan CLI

pub mod catalog;
pub mod completions;
pub mod plan;
pub mod quote;
pub mod version;

use std::path::Path;

use console::Style;

use crate::catalog::{CatalogConfig, resolve};
use crate::error::Result;

/// Resolve the active catalog, announcing its source in verbose mode
pub(crate) fn load_catalog(path: Option<&Path>, verbose: bool) -> Result<CatalogConfig> {
    let (config, source) = resolve(path)?;
    if verbose {
        println!(
            "{}",
            Style::new().dim().apply_to(format!("Using {}", source.describe()))
        );
    }
    Ok(config)
}
