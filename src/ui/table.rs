//! Active items table rendering
//!
//! Plain-text table with Name, Unit Cost, Quantity, and Subtotal columns.
//! Column widths come from the widest cell; per-person rows print their
//! quantity as `For N people`.

use console::Style;

use crate::pricing::{DisplayRow, RowQuantity};

use super::format_money;

/// Message shown when nothing is selected
pub const EMPTY_MESSAGE: &str = "No items selected yet.";

const HEADERS: [&str; 4] = ["Name", "Unit Cost", "Quantity", "Subtotal"];

/// Print the active items table, or the empty message
pub fn print_items_table(rows: &[DisplayRow]) {
    if rows.is_empty() {
        println!("{}", Style::new().dim().apply_to(EMPTY_MESSAGE));
        return;
    }
    for (position, line) in render_items_table(rows).lines().enumerate() {
        if position == 0 {
            println!("{}", Style::new().bold().apply_to(line));
        } else {
            println!("{line}");
        }
    }
}

/// Render the table as plain text with aligned columns
pub fn render_items_table(rows: &[DisplayRow]) -> String {
    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|row| {
            [
                row.name.clone(),
                format_money(row.unit_cost),
                quantity_cell(row.quantity),
                format_money(row.subtotal),
            ]
        })
        .collect();

    let mut widths = [
        HEADERS[0].len(),
        HEADERS[1].len(),
        HEADERS[2].len(),
        HEADERS[3].len(),
    ];
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let rules = widths.map(|width| "-".repeat(width));
    let mut table = String::new();
    table.push_str(&format_line(HEADERS, widths));
    table.push('\n');
    table.push_str(&format_line(
        [
            rules[0].as_str(),
            rules[1].as_str(),
            rules[2].as_str(),
            rules[3].as_str(),
        ],
        widths,
    ));
    table.push('\n');
    for row in &cells {
        table.push_str(&format_line(
            [
                row[0].as_str(),
                row[1].as_str(),
                row[2].as_str(),
                row[3].as_str(),
            ],
            widths,
        ));
        table.push('\n');
    }
    table
}

fn quantity_cell(quantity: RowQuantity) -> String {
    match quantity {
        RowQuantity::Units(count) => count.to_string(),
        RowQuantity::PerPerson(count) => format!("For {count} people"),
    }
}

fn format_line(cells: [&str; 4], widths: [usize; 4]) -> String {
    format!(
        "{:<name_w$}  {:>cost_w$}  {:<qty_w$}  {:>sub_w$}",
        cells[0],
        cells[1],
        cells[2],
        cells[3],
        name_w = widths[0],
        cost_w = widths[1],
        qty_w = widths[2],
        sub_w = widths[3],
    )
}
