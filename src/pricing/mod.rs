//! Expense aggregation
//!
//! Pure derivation of per-category totals, the grand total, and the active
//! items list from item slices and a headcount. Nothing here holds state or
//! performs I/O; callers pass a snapshot of the session and recompute on
//! every read.

pub mod display;

pub use display::{DisplayRow, RowQuantity, active_items};

use crate::session::{AvItem, MealItem, VenueItem};

/// Headcount used in computations; values below 1 count as 1
pub fn effective_headcount(headcount: u32) -> u32 {
    headcount.max(1)
}

/// Total venue cost: each room's cost times the units booked
pub fn venue_total(items: &[VenueItem]) -> u64 {
    items.iter().fold(0u64, |total, item| {
        total.saturating_add(item.cost.saturating_mul(u64::from(item.quantity)))
    })
}

/// Total equipment cost: one unit of cost per selected item
pub fn av_total(items: &[AvItem]) -> u64 {
    items
        .iter()
        .filter(|item| item.selected)
        .fold(0u64, |total, item| total.saturating_add(item.cost))
}

/// Total catering cost for the given headcount
///
/// Selected per-person meals charge their cost once per attendee; selected
/// flat meals charge their cost once.
pub fn meals_total(items: &[MealItem], headcount: u32) -> u64 {
    let people = u64::from(effective_headcount(headcount));
    items
        .iter()
        .filter(|item| item.selected)
        .fold(0u64, |total, item| {
            let amount = if item.per_person {
                item.cost.saturating_mul(people)
            } else {
                item.cost
            };
            total.saturating_add(amount)
        })
}

/// Per-category totals for one snapshot of the session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryTotals {
    /// Venue rooms, cost times units booked
    pub venue: u64,
    /// Audio-visual equipment, one unit per selection
    pub av: u64,
    /// Catering, scaled by headcount where applicable
    pub meals: u64,
}

impl CategoryTotals {
    /// Compute all three category totals for the given headcount
    pub fn compute(
        venue: &[VenueItem],
        av: &[AvItem],
        meals: &[MealItem],
        headcount: u32,
    ) -> Self {
        Self {
            venue: venue_total(venue),
            av: av_total(av),
            meals: meals_total(meals, headcount),
        }
    }

    /// Sum of the three category totals
    pub fn grand_total(&self) -> u64 {
        self.venue
            .saturating_add(self.av)
            .saturating_add(self.meals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue(cost: u64, quantity: u32) -> VenueItem {
        VenueItem {
            name: format!("Room {cost}"),
            cost,
            quantity,
        }
    }

    fn av(cost: u64, selected: bool) -> AvItem {
        AvItem {
            name: format!("Gear {cost}"),
            cost,
            selected,
        }
    }

    fn meal(cost: u64, per_person: bool, selected: bool) -> MealItem {
        MealItem {
            name: format!("Meal {cost}"),
            cost,
            per_person,
            selected,
            selected_headcount: None,
        }
    }

    #[test]
    fn test_venue_total_sums_cost_times_quantity() {
        let items = vec![venue(300, 2), venue(700, 0), venue(50, 3)];
        assert_eq!(venue_total(&items), 750);
    }

    #[test]
    fn test_venue_total_zero_quantities() {
        let items = vec![venue(300, 0), venue(700, 0)];
        assert_eq!(venue_total(&items), 0);
        assert_eq!(venue_total(&[]), 0);
    }

    #[test]
    fn test_av_total_charges_one_unit_per_selection() {
        let items = vec![av(200, true), av(35, false), av(80, true)];
        assert_eq!(av_total(&items), 280);
        assert_eq!(av_total(&[]), 0);
    }

    #[test]
    fn test_meals_total_scales_with_headcount() {
        let items = vec![meal(20, true, true)];
        assert_eq!(meals_total(&items, 1), 20);
        assert_eq!(meals_total(&items, 5), 100);
    }

    #[test]
    fn test_meals_total_clamps_headcount_below_one() {
        let items = vec![meal(20, true, true)];
        assert_eq!(meals_total(&items, 0), 20);
    }

    #[test]
    fn test_flat_meal_ignores_headcount() {
        let items = vec![meal(250, false, true), meal(30, true, true)];
        assert_eq!(meals_total(&items, 10), 250 + 300);
    }

    #[test]
    fn test_unselected_meals_do_not_count() {
        let items = vec![meal(30, true, false)];
        assert_eq!(meals_total(&items, 10), 0);
    }

    #[test]
    fn test_grand_total_is_sum_of_categories() {
        let totals = CategoryTotals {
            venue: 600,
            av: 100,
            meals: 100,
        };
        assert_eq!(totals.grand_total(), 800);
        assert_eq!(CategoryTotals::default().grand_total(), 0);
    }

    #[test]
    fn test_totals_saturate_instead_of_wrapping() {
        let items = vec![venue(u64::MAX, 2)];
        assert_eq!(venue_total(&items), u64::MAX);

        let totals = CategoryTotals {
            venue: u64::MAX,
            av: 1,
            meals: 1,
        };
        assert_eq!(totals.grand_total(), u64::MAX);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let venue_items = vec![venue(300, 2)];
        let av_items = vec![av(100, true)];
        let meal_items = vec![meal(25, true, true)];

        let totals = CategoryTotals::compute(&venue_items, &av_items, &meal_items, 4);
        assert_eq!(totals.venue, 600);
        assert_eq!(totals.av, 100);
        assert_eq!(totals.meals, 100);
        assert_eq!(totals.grand_total(), 800);
    }
}
