//! Catalog command implementation

use std::path::PathBuf;

use console::Style;

use crate::cli::CatalogArgs;
use crate::error::Result;
use crate::ui::format_money;

/// Run catalog command
pub fn run(catalog: Option<PathBuf>, verbose: bool, args: CatalogArgs) -> Result<()> {
    // Suppress the provenance line when exporting so stdout stays valid YAML.
    let config = super::load_catalog(catalog.as_deref(), verbose && !args.export)?;

    if args.export {
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    let heading = Style::new().bold().yellow();
    let empty = Style::new().dim();

    println!("{}", heading.apply_to("Venue rooms"));
    if config.venue.is_empty() {
        println!("  {}", empty.apply_to("(none)"));
    }
    for entry in &config.venue {
        println!("  {} - {}", entry.name, format_money(entry.cost));
    }

    println!();
    println!("{}", heading.apply_to("Audio-visual equipment"));
    if config.av.is_empty() {
        println!("  {}", empty.apply_to("(none)"));
    }
    for entry in &config.av {
        println!("  {} - {}", entry.name, format_money(entry.cost));
    }

    println!();
    println!("{}", heading.apply_to("Meals"));
    if config.meals.is_empty() {
        println!("  {}", empty.apply_to("(none)"));
    }
    for entry in &config.meals {
        let suffix = if entry.per_person { " per person" } else { "" };
        println!("  {} - {}{}", entry.name, format_money(entry.cost), suffix);
    }

    Ok(())
}
