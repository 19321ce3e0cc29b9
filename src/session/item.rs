//! Items tracked by a planning session
//!
//! Each item pairs a catalog entry with its mutable selection state. Items
//! are created once when the session is built and never added or removed
//! afterwards.

use crate::catalog::{AvEntry, MealEntry, VenueEntry};

/// A room with the number of units currently booked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueItem {
    /// Room name from the catalog
    pub name: String,
    /// Cost of one unit in whole currency units
    pub cost: u64,
    /// Units booked; 0 means the room is not part of the event
    pub quantity: u32,
}

impl VenueItem {
    /// Session item for a catalog entry, nothing booked yet
    pub fn from_entry(entry: &VenueEntry) -> Self {
        Self {
            name: entry.name.clone(),
            cost: entry.cost,
            quantity: 0,
        }
    }
}

/// A piece of equipment that is either hired once or not at all
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvItem {
    /// Equipment name from the catalog
    pub name: String,
    /// Cost of the selection in whole currency units
    pub cost: u64,
    /// Whether the equipment is part of the event
    pub selected: bool,
}

impl AvItem {
    /// Session item for a catalog entry, not selected
    pub fn from_entry(entry: &AvEntry) -> Self {
        Self {
            name: entry.name.clone(),
            cost: entry.cost,
            selected: false,
        }
    }
}

/// A catering option and its selection state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealItem {
    /// Meal name from the catalog
    pub name: String,
    /// Cost in whole currency units (per attendee when `per_person` is set)
    pub cost: u64,
    /// Whether the cost scales with headcount
    pub per_person: bool,
    /// Whether the meal is part of the event
    pub selected: bool,
    /// Headcount recorded when the meal was selected, if one was supplied
    pub selected_headcount: Option<u32>,
}

impl MealItem {
    /// Session item for a catalog entry, not selected
    pub fn from_entry(entry: &MealEntry) -> Self {
        Self {
            name: entry.name.clone(),
            cost: entry.cost,
            per_person: entry.per_person,
            selected: false,
            selected_headcount: None,
        }
    }
}
