//! Cost summary rendering

use console::Style;

use crate::pricing::CategoryTotals;

use super::format_money;

/// Print the per-category totals and the grand total
pub fn print_cost_summary(totals: &CategoryTotals, headcount: u32) {
    let amounts = [
        format_money(totals.venue),
        format_money(totals.av),
        format_money(totals.meals),
        format_money(totals.grand_total()),
    ];
    let width = amounts.iter().map(String::len).max().unwrap_or(0);

    println!(
        "{} {}",
        Style::new().bold().apply_to("Estimated costs"),
        Style::new().dim().apply_to(format!("(attendees: {headcount})"))
    );
    println!("  {:<13} {:>width$}", "Venue:", amounts[0]);
    println!("  {:<13} {:>width$}", "Audio-visual:", amounts[1]);
    println!("  {:<13} {:>width$}", "Meals:", amounts[2]);
    // Pad before styling so ANSI codes do not skew the column.
    println!(
        "  {} {}",
        Style::new().bold().apply_to(format!("{:<13}", "Total:")),
        Style::new().bold().apply_to(format!("{:>width$}", amounts[3]))
    );
}
