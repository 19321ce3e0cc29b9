//! Catalog configuration structure (confplan.yaml)

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfplanError, Result};

/// A bookable room, priced per unit booked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueEntry {
    /// Room name shown in prompts and summaries
    pub name: String,

    /// Cost of one room in whole currency units
    pub cost: u64,
}

/// A piece of audio-visual equipment, selected at most once
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvEntry {
    /// Equipment name shown in prompts and summaries
    pub name: String,

    /// Cost of the selection in whole currency units
    pub cost: u64,
}

/// A catering option, by default priced per attendee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealEntry {
    /// Meal name shown in prompts and summaries
    pub name: String,

    /// Cost in whole currency units (per attendee unless `per_person` is false)
    pub cost: u64,

    /// Whether the cost scales with headcount
    #[serde(default = "default_per_person")]
    pub per_person: bool,
}

fn default_per_person() -> bool {
    true
}

/// Complete catalog of items a planning session can select from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Rooms available for booking
    #[serde(default)]
    pub venue: Vec<VenueEntry>,

    /// Audio-visual equipment available for hire
    #[serde(default)]
    pub av: Vec<AvEntry>,

    /// Catering options
    #[serde(default)]
    pub meals: Vec<MealEntry>,
}

impl VenueEntry {
    /// Create a venue entry
    pub fn new(name: impl Into<String>, cost: u64) -> Self {
        Self {
            name: name.into(),
            cost,
        }
    }
}

impl AvEntry {
    /// Create an audio-visual entry
    pub fn new(name: impl Into<String>, cost: u64) -> Self {
        Self {
            name: name.into(),
            cost,
        }
    }
}

impl MealEntry {
    /// Create a meal entry charged once per attendee
    pub fn per_person(name: impl Into<String>, cost: u64) -> Self {
        Self {
            name: name.into(),
            cost,
            per_person: true,
        }
    }

    /// Create a meal entry charged once regardless of headcount
    #[allow(dead_code)]
    pub fn flat(name: impl Into<String>, cost: u64) -> Self {
        Self {
            name: name.into(),
            cost,
            per_person: false,
        }
    }
}

impl CatalogConfig {
    /// Parse catalog configuration from YAML content
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse catalog configuration from JSON content
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize catalog configuration to YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| ConfplanError::CatalogInvalid {
            message: format!("Failed to serialize catalog: {e}"),
        })
    }

    /// Load and validate a catalog file, dispatching on its extension
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfplanError::CatalogNotFound {
                path: path.display().to_string(),
            });
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| ConfplanError::CatalogReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        let config: Self = match extension {
            "yaml" | "yml" => {
                serde_yaml::from_str(&content).map_err(|e| ConfplanError::CatalogParseFailed {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })?
            }
            "json" => {
                serde_json::from_str(&content).map_err(|e| ConfplanError::CatalogParseFailed {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })?
            }
            _ => {
                return Err(ConfplanError::UnsupportedCatalogFormat {
                    path: path.display().to_string(),
                });
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the catalog structure
    pub fn validate(&self) -> Result<()> {
        Self::validate_names("venue", self.venue.iter().map(|e| e.name.as_str()))?;
        Self::validate_names("audio-visual", self.av.iter().map(|e| e.name.as_str()))?;
        Self::validate_names("meals", self.meals.iter().map(|e| e.name.as_str()))?;
        Ok(())
    }

    /// Whether the catalog offers no items at all
    pub fn is_empty(&self) -> bool {
        self.venue.is_empty() && self.av.is_empty() && self.meals.is_empty()
    }

    fn validate_names<'a>(
        collection: &str,
        names: impl Iterator<Item = &'a str>,
    ) -> Result<()> {
        for (position, name) in names.enumerate() {
            if name.trim().is_empty() {
                return Err(ConfplanError::CatalogInvalid {
                    message: format!("{collection} item at position {position} has an empty name"),
                });
            }
        }
        Ok(())
    }
}
