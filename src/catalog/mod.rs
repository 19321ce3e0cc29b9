//! Catalog handling for Confplan
//!
//! This module contains data structures for:
//! - `confplan.yaml` - Catalog of sellable items (venue rooms, AV equipment, meals)
//! - Catalog discovery (explicit path, working directory, user config directory)
//! - The built-in seed catalog used when no file is found

pub mod config;
pub mod discovery;
pub mod seed;

// Re-export commonly used types
pub use config::{AvEntry, CatalogConfig, MealEntry, VenueEntry};
pub use discovery::{CatalogSource, resolve};
pub use seed::seed_catalog;

use std::fmt;

/// The three independent item groups, each with its own total formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Venue,
    Av,
    Meals,
}

impl Category {
    /// Lowercase identifier used in error messages
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Venue => "venue",
            Category::Av => "audio-visual",
            Category::Meals => "meals",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
