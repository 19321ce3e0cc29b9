//! Terminal presentation helpers
//!
//! Rendering for the cost summary block and the active items table. All
//! styling goes through `console`; when stdout is not a terminal the styles
//! degrade to plain text.

pub mod summary;
pub mod table;

pub use summary::print_cost_summary;
pub use table::{print_items_table, render_items_table};

/// Format a whole-unit amount with a dollar sign and thousands separators
pub fn format_money(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("${grouped}")
}
