//! Planning session state
//!
//! An `EventSession` owns the three selection collections for one event and
//! is the only place they are mutated. Reads go through slice accessors or
//! the derived views in [`crate::pricing`]; every derived value is recomputed
//! from the current state, nothing is cached.

pub mod item;

pub use item::{AvItem, MealItem, VenueItem};

use crate::catalog::{CatalogConfig, Category};
use crate::error::{ConfplanError, Result};
use crate::pricing::{self, CategoryTotals, DisplayRow};

/// Selection state for one planning session
///
/// Collections are private so that all mutation flows through the typed
/// operations below and the compiler rules out stray writes.
#[derive(Debug, Clone)]
pub struct EventSession {
    venue: Vec<VenueItem>,
    av: Vec<AvItem>,
    meals: Vec<MealItem>,
}

impl EventSession {
    /// Build a fresh session from a catalog with nothing selected
    pub fn from_catalog(catalog: &CatalogConfig) -> Self {
        Self {
            venue: catalog.venue.iter().map(VenueItem::from_entry).collect(),
            av: catalog.av.iter().map(AvItem::from_entry).collect(),
            meals: catalog.meals.iter().map(MealItem::from_entry).collect(),
        }
    }

    /// Rooms in catalog order
    pub fn venue_items(&self) -> &[VenueItem] {
        &self.venue
    }

    /// Audio-visual equipment in catalog order
    pub fn av_items(&self) -> &[AvItem] {
        &self.av
    }

    /// Catering options in catalog order
    pub fn meal_items(&self) -> &[MealItem] {
        &self.meals
    }

    /// Book one more unit of the room at `index`
    pub fn increment_venue(&mut self, index: usize) -> Result<()> {
        let item = Self::item_mut(&mut self.venue, Category::Venue, index)?;
        item.quantity = item.quantity.saturating_add(1);
        Ok(())
    }

    /// Book `count` more units of the room at `index`; the quantity
    /// saturates at `u32::MAX`
    pub fn add_venue(&mut self, index: usize, count: u32) -> Result<()> {
        let item = Self::item_mut(&mut self.venue, Category::Venue, index)?;
        item.quantity = item.quantity.saturating_add(count);
        Ok(())
    }

    /// Release one unit of the room at `index`; the quantity floors at 0
    pub fn decrement_venue(&mut self, index: usize) -> Result<()> {
        let item = Self::item_mut(&mut self.venue, Category::Venue, index)?;
        item.quantity = item.quantity.saturating_sub(1);
        Ok(())
    }

    /// Flip the selection of the equipment at `index`
    pub fn toggle_av(&mut self, index: usize) -> Result<()> {
        let item = Self::item_mut(&mut self.av, Category::Av, index)?;
        item.selected = !item.selected;
        Ok(())
    }

    /// Flip the selection of the meal at `index`
    ///
    /// Turning a per-person meal on with a headcount supplied records that
    /// headcount on the item; turning the meal off clears the record.
    pub fn toggle_meal(&mut self, index: usize, headcount: Option<u32>) -> Result<()> {
        let item = Self::item_mut(&mut self.meals, Category::Meals, index)?;
        item.selected = !item.selected;
        item.selected_headcount = if item.selected && item.per_person {
            headcount
        } else {
            None
        };
        Ok(())
    }

    /// Find a room by name, exact match first, then case-insensitive
    pub fn find_venue(&self, name: &str) -> Option<usize> {
        Self::find_by_name(self.venue.iter().map(|item| item.name.as_str()), name)
    }

    /// Find equipment by name, exact match first, then case-insensitive
    pub fn find_av(&self, name: &str) -> Option<usize> {
        Self::find_by_name(self.av.iter().map(|item| item.name.as_str()), name)
    }

    /// Find a meal by name, exact match first, then case-insensitive
    pub fn find_meal(&self, name: &str) -> Option<usize> {
        Self::find_by_name(self.meals.iter().map(|item| item.name.as_str()), name)
    }

    /// Per-category totals for the given headcount
    pub fn totals(&self, headcount: u32) -> CategoryTotals {
        CategoryTotals::compute(&self.venue, &self.av, &self.meals, headcount)
    }

    /// Items currently contributing to the totals, ready for display
    pub fn active_items(&self, headcount: u32) -> Vec<DisplayRow> {
        pricing::active_items(&self.venue, &self.av, &self.meals, headcount)
    }

    fn item_mut<T>(items: &mut [T], category: Category, index: usize) -> Result<&mut T> {
        let len = items.len();
        items.get_mut(index).ok_or(ConfplanError::IndexOutOfRange {
            category,
            index,
            len,
        })
    }

    fn find_by_name<'a>(
        mut names: impl Iterator<Item = &'a str> + Clone,
        name: &str,
    ) -> Option<usize> {
        if let Some(position) = names.clone().position(|candidate| candidate == name) {
            return Some(position);
        }
        names.position(|candidate| candidate.eq_ignore_ascii_case(name))
    }
}
