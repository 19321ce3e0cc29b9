//! Interactive planning command
//!
//! Walks through an event the way the planner does on screen: a welcome
//! page, then a menu loop over the three selection categories, the attendee
//! count, and the selected items view, with a final summary on exit.

use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use console::Style;
use inquire::{Confirm, CustomType, MultiSelect, Select};

use crate::error::Result;
use crate::session::EventSession;
use crate::ui::{self, format_money};

const MENU_VENUE: &str = "Venue rooms";
const MENU_AV: &str = "Audio-visual equipment";
const MENU_MEALS: &str = "Meals";
const MENU_PEOPLE: &str = "Attendees";
const MENU_DETAILS: &str = "Show selected items";
const MENU_DONE: &str = "Finish planning";

const ACTION_RESERVE: &str = "Reserve one more";
const ACTION_RELEASE: &str = "Release one";

/// One selectable line in a prompt, tied back to its collection index
struct ItemOption {
    index: usize,
    label: String,
}

impl fmt::Display for ItemOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Run the interactive planning session
pub fn run(catalog: Option<PathBuf>, verbose: bool) -> Result<()> {
    let config = super::load_catalog(catalog.as_deref(), verbose)?;
    if config.is_empty() {
        println!("No items in the catalog; nothing to plan.");
        return Ok(());
    }

    let mut session = EventSession::from_catalog(&config);
    let mut headcount: u32 = 1;

    print_welcome();
    let started = Confirm::new("Get started?")
        .with_default(true)
        .with_help_message("Press Enter to start planning, or 'n' to leave")
        .prompt_skippable()?
        .unwrap_or(false);
    if !started {
        println!("Come back when the event takes shape.");
        return Ok(());
    }

    loop {
        println!();
        ui::print_cost_summary(&session.totals(headcount), headcount);
        println!();

        let choices = vec![
            MENU_VENUE.to_string(),
            MENU_AV.to_string(),
            MENU_MEALS.to_string(),
            MENU_PEOPLE.to_string(),
            MENU_DETAILS.to_string(),
            MENU_DONE.to_string(),
        ];
        let Some(choice) = Select::new("What would you like to adjust?", choices)
            .with_starting_cursor(0)
            .with_page_size(10)
            .without_filtering()
            .with_help_message("↑↓ to move, ENTER to select, ESC to finish")
            .prompt_skippable()?
        else {
            break;
        };

        match choice.as_str() {
            MENU_VENUE => adjust_venue(&mut session)?,
            MENU_AV => adjust_av(&mut session)?,
            MENU_MEALS => adjust_meals(&mut session, headcount)?,
            MENU_PEOPLE => headcount = prompt_headcount(headcount)?,
            MENU_DETAILS => show_details(&session, headcount),
            _ => break,
        }
    }

    println!();
    ui::print_cost_summary(&session.totals(headcount), headcount);
    println!();
    ui::print_items_table(&session.active_items(headcount));
    print_stale_meal_notes(&session, headcount);

    Ok(())
}

fn print_welcome() {
    println!();
    println!(
        "{}",
        Style::new().bold().cyan().apply_to("Conference Expense Planner")
    );
    println!(
        "{}",
        Style::new().dim().apply_to("Plan your next major event with us!")
    );
    println!();
}

/// Pick a room, then reserve or release one unit of it
fn adjust_venue(session: &mut EventSession) -> Result<()> {
    if session.venue_items().is_empty() {
        println!("No rooms in the catalog.");
        return Ok(());
    }

    let options: Vec<ItemOption> = session
        .venue_items()
        .iter()
        .enumerate()
        .map(|(index, item)| ItemOption {
            index,
            label: format!(
                "{} - {} (booked: {})",
                item.name,
                format_money(item.cost),
                item.quantity
            ),
        })
        .collect();

    let Some(room) = Select::new("Select a room", options)
        .with_starting_cursor(0)
        .with_page_size(10)
        .without_filtering()
        .with_help_message("↑↓ to move, ENTER to select, ESC to go back")
        .prompt_skippable()?
    else {
        return Ok(());
    };

    let actions = vec![ACTION_RESERVE.to_string(), ACTION_RELEASE.to_string()];
    let Some(action) = Select::new("Adjust booking", actions)
        .with_starting_cursor(0)
        .without_filtering()
        .with_help_message("↑↓ to move, ENTER to select, ESC to go back")
        .prompt_skippable()?
    else {
        return Ok(());
    };

    if action == ACTION_RESERVE {
        session.increment_venue(room.index)?;
    } else {
        session.decrement_venue(room.index)?;
    }
    Ok(())
}

/// Reselect the full equipment set; unticking removes an item
fn adjust_av(session: &mut EventSession) -> Result<()> {
    if session.av_items().is_empty() {
        println!("No audio-visual equipment in the catalog.");
        return Ok(());
    }

    let options: Vec<ItemOption> = session
        .av_items()
        .iter()
        .enumerate()
        .map(|(index, item)| ItemOption {
            index,
            label: format!("{} - {}", item.name, format_money(item.cost)),
        })
        .collect();
    let defaults: Vec<usize> = session
        .av_items()
        .iter()
        .enumerate()
        .filter(|(_, item)| item.selected)
        .map(|(index, _)| index)
        .collect();

    let Some(chosen) = MultiSelect::new("Select equipment", options)
        .with_default(&defaults)
        .with_page_size(10)
        .with_help_message("↑↓ to move, SPACE to select/deselect, ENTER to confirm, ESC to go back")
        .prompt_skippable()?
    else {
        return Ok(());
    };

    let wanted: HashSet<usize> = chosen.iter().map(|option| option.index).collect();
    for index in 0..session.av_items().len() {
        if session.av_items()[index].selected != wanted.contains(&index) {
            session.toggle_av(index)?;
        }
    }
    Ok(())
}

/// Reselect the full meal set for the current headcount
fn adjust_meals(session: &mut EventSession, headcount: u32) -> Result<()> {
    if session.meal_items().is_empty() {
        println!("No meals in the catalog.");
        return Ok(());
    }

    let options: Vec<ItemOption> = session
        .meal_items()
        .iter()
        .enumerate()
        .map(|(index, item)| ItemOption {
            index,
            label: if item.per_person {
                format!("{} - {} per person", item.name, format_money(item.cost))
            } else {
                format!("{} - {}", item.name, format_money(item.cost))
            },
        })
        .collect();
    let defaults: Vec<usize> = session
        .meal_items()
        .iter()
        .enumerate()
        .filter(|(_, item)| item.selected)
        .map(|(index, _)| index)
        .collect();

    let Some(chosen) = MultiSelect::new("Select meals", options)
        .with_default(&defaults)
        .with_page_size(10)
        .with_help_message("↑↓ to move, SPACE to select/deselect, ENTER to confirm, ESC to go back")
        .prompt_skippable()?
    else {
        return Ok(());
    };

    let wanted: HashSet<usize> = chosen.iter().map(|option| option.index).collect();
    for index in 0..session.meal_items().len() {
        if session.meal_items()[index].selected != wanted.contains(&index) {
            session.toggle_meal(index, Some(headcount))?;
        }
    }
    Ok(())
}

fn prompt_headcount(current: u32) -> Result<u32> {
    let answer = CustomType::<u32>::new("How many attendees?")
        .with_default(current)
        .with_error_message("Please enter a whole number")
        .with_help_message("Counts below 1 are treated as 1")
        .prompt_skippable()?;
    Ok(resolve_headcount(answer, current))
}

/// Collapse a prompt answer into the next session headcount, floored at 1
fn resolve_headcount(answer: Option<u32>, current: u32) -> u32 {
    answer.unwrap_or(current).max(1)
}

fn show_details(session: &EventSession, headcount: u32) {
    println!();
    ui::print_items_table(&session.active_items(headcount));
    print_stale_meal_notes(session, headcount);
}

/// Point out per-person meals picked under a different attendee count
///
/// Pricing always uses the current headcount; the recorded one only tells
/// the user which selections predate a headcount change.
fn print_stale_meal_notes(session: &EventSession, headcount: u32) {
    for item in session.meal_items().iter().filter(|item| item.selected) {
        let Some(recorded) = item.selected_headcount else {
            continue;
        };
        if recorded != headcount {
            println!(
                "{}",
                Style::new().yellow().apply_to(format!(
                    "Note: {} was picked at {} attendees; pricing uses the current {}.",
                    item.name, recorded, headcount
                ))
            );
        }
    }
}
