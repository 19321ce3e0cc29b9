//! Quote command implementation
//!
//! Builds a session from command line selections and prints the cost
//! summary, optionally with the per-item table.

use std::path::PathBuf;

use crate::catalog::Category;
use crate::cli::QuoteArgs;
use crate::error::{ConfplanError, Result};
use crate::pricing::effective_headcount;
use crate::session::EventSession;
use crate::ui;

/// Run quote command
pub fn run(catalog: Option<PathBuf>, verbose: bool, args: QuoteArgs) -> Result<()> {
    let config = super::load_catalog(catalog.as_deref(), verbose)?;
    let mut session = EventSession::from_catalog(&config);
    let headcount = args.people;

    for spec in &args.venue {
        let (name, quantity) = parse_selection_spec(spec)?;
        let index =
            session
                .find_venue(&name)
                .ok_or_else(|| ConfplanError::ItemNotFound {
                    category: Category::Venue,
                    name: name.clone(),
                })?;
        session.add_venue(index, quantity)?;
    }

    for name in &args.av {
        let index = session
            .find_av(name)
            .ok_or_else(|| ConfplanError::ItemNotFound {
                category: Category::Av,
                name: name.clone(),
            })?;
        if !session.av_items()[index].selected {
            session.toggle_av(index)?;
        }
    }

    for name in &args.meals {
        let index = session
            .find_meal(name)
            .ok_or_else(|| ConfplanError::ItemNotFound {
                category: Category::Meals,
                name: name.clone(),
            })?;
        if !session.meal_items()[index].selected {
            session.toggle_meal(index, Some(headcount))?;
        }
    }

    ui::print_cost_summary(&session.totals(headcount), effective_headcount(headcount));

    if args.details {
        println!();
        ui::print_items_table(&session.active_items(headcount));
    }

    Ok(())
}

/// Parse a NAME or NAME=QUANTITY selection argument
fn parse_selection_spec(spec: &str) -> Result<(String, u32)> {
    let trimmed = spec.trim();
    let invalid = || ConfplanError::InvalidSelectionSpec {
        spec: spec.to_string(),
    };

    match trimmed.split_once('=') {
        None => {
            if trimmed.is_empty() {
                return Err(invalid());
            }
            Ok((trimmed.to_string(), 1))
        }
        Some((name, quantity)) => {
            let name = name.trim();
            if name.is_empty() {
                return Err(invalid());
            }
            let quantity: u32 = quantity.trim().parse().map_err(|_| invalid())?;
            Ok((name.to_string(), quantity))
        }
    }
}
