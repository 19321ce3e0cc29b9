//! Display projection of the active selections

use std::collections::HashSet;

use crate::catalog::Category;
use crate::session::{AvItem, MealItem, VenueItem};

use super::effective_headcount;

/// How a row's quantity column should read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowQuantity {
    /// A number of booked units
    Units(u32),
    /// A per-attendee charge for this many people
    PerPerson(u32),
}

/// One line of the active items table
///
/// Rows are a projection of the session state; building them never touches
/// the source items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// Item name from the catalog
    pub name: String,
    /// Collection the item belongs to
    pub category: Category,
    /// Cost of one unit in whole currency units
    pub unit_cost: u64,
    /// Quantity column content
    pub quantity: RowQuantity,
    /// Amount the row contributes to the grand total
    pub subtotal: u64,
}

/// Items currently contributing to the totals, in display order
///
/// Venue rows come first in collection order, then audio-visual, then meals.
/// Audio-visual rows are deduplicated by name and the first selected
/// occurrence wins; the hidden duplicate still counts toward the category
/// total.
pub fn active_items(
    venue: &[VenueItem],
    av: &[AvItem],
    meals: &[MealItem],
    headcount: u32,
) -> Vec<DisplayRow> {
    let people = effective_headcount(headcount);
    let mut rows = Vec::new();

    for item in venue.iter().filter(|item| item.quantity > 0) {
        rows.push(DisplayRow {
            name: item.name.clone(),
            category: Category::Venue,
            unit_cost: item.cost,
            quantity: RowQuantity::Units(item.quantity),
            subtotal: item.cost.saturating_mul(u64::from(item.quantity)),
        });
    }

    let mut seen_av: HashSet<&str> = HashSet::new();
    for item in av.iter().filter(|item| item.selected) {
        if !seen_av.insert(item.name.as_str()) {
            continue;
        }
        rows.push(DisplayRow {
            name: item.name.clone(),
            category: Category::Av,
            unit_cost: item.cost,
            quantity: RowQuantity::Units(1),
            subtotal: item.cost,
        });
    }

    for item in meals.iter().filter(|item| item.selected) {
        let (quantity, subtotal) = if item.per_person {
            (
                RowQuantity::PerPerson(people),
                item.cost.saturating_mul(u64::from(people)),
            )
        } else {
            (RowQuantity::Units(1), item.cost)
        };
        rows.push(DisplayRow {
            name: item.name.clone(),
            category: Category::Meals,
            unit_cost: item.cost,
            quantity,
            subtotal,
        });
    }

    rows
}
