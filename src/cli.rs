//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Confplan - conference expense planner
///
/// Estimate conference event costs across venue, audio-visual, and catering categories.
#[derive(Parser, Debug)]
#[command(
    name = "confplan",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Conference expense planner for venue, AV, and catering budgets",
    long_about = "Confplan estimates conference event costs from three independent categories \
                  (venue rooms booked by quantity, audio-visual equipment, meals scaled by \
                  attendee headcount) and keeps running totals as the selection changes.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  confplan plan\n    \
                  confplan quote --venue 'Auditorium Hall (Capacity:200)' --people 40\n    \
                  confplan quote --av Projectors --meal Lunch --people 12 --details\n    \
                  confplan catalog\n    \
                  confplan catalog --export > confplan.yaml\n\n\
                  \x1b[1m\x1b[32mDocumentation:\x1b[0m\n    \
                  https://github.com/asyrjasalo/confplan"
)]
pub struct Cli {
    /// Catalog file (YAML or JSON; defaults to catalog discovery)
    #[arg(long, short = 'c', global = true, env = "CONFPLAN_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Plan an event interactively
    Plan,

    /// Price a selection in one shot
    Quote(QuoteArgs),

    /// List catalog items and prices
    Catalog(CatalogArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the quote command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Price two rooms:\n    confplan quote --venue 'Auditorium Hall (Capacity:200)=2'\n\n\
                  Equipment and a per-person meal for 40 attendees:\n    confplan quote --av Projectors --meal Lunch --people 40\n\n\
                  A bare venue name means one unit:\n    confplan quote --venue 'Presentation Room (Capacity:50)'\n\n\
                  Include the per-item table:\n    confplan quote --meal Dinner --people 12 --details")]
pub struct QuoteArgs {
    /// Venue selection as NAME or NAME=QUANTITY (repeatable)
    #[arg(long = "venue", value_name = "NAME[=QTY]")]
    pub venue: Vec<String>,

    /// Audio-visual selection by name (repeatable)
    #[arg(long = "av", value_name = "NAME")]
    pub av: Vec<String>,

    /// Meal selection by name (repeatable)
    #[arg(long = "meal", value_name = "NAME")]
    pub meals: Vec<String>,

    /// Number of attendees
    #[arg(long, short = 'p', default_value_t = 1)]
    pub people: u32,

    /// Show the per-item breakdown table
    #[arg(long, short = 'd')]
    pub details: bool,
}

/// Arguments for the catalog command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List items and prices:\n    confplan catalog\n\n\
                  Write the active catalog as YAML:\n    confplan catalog --export > confplan.yaml\n\n\
                  List a specific catalog file:\n    confplan catalog --catalog ./party.yaml")]
pub struct CatalogArgs {
    /// Print the active catalog as YAML instead of a listing
    #[arg(long)]
    pub export: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    confplan completions --shell bash > ~/.bash_completion.d/confplan\n\n\
                  Generate zsh completions:\n    confplan completions --shell zsh > ~/.zfunc/_confplan\n\n\
                  Generate fish completions:\n    confplan completions --shell fish > ~/.config/fish/completions/confplan.fish\n\n\
                  Generate PowerShell completions:\n    confplan completions --shell powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_plan() {
        let cli = Cli::try_parse_from(["confplan", "plan"]).unwrap();
        assert!(matches!(cli.command, Commands::Plan));
        assert_eq!(cli.catalog, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_parsing_quote_defaults() {
        let cli = Cli::try_parse_from(["confplan", "quote"]).unwrap();
        match cli.command {
            Commands::Quote(args) => {
                assert!(args.venue.is_empty());
                assert!(args.av.is_empty());
                assert!(args.meals.is_empty());
                assert_eq!(args.people, 1);
                assert!(!args.details);
            }
            _ => panic!("Expected Quote command"),
        }
    }

    #[test]
    fn test_cli_parsing_quote_with_selections() {
        let cli = Cli::try_parse_from([
            "confplan",
            "quote",
            "--venue",
            "Auditorium Hall (Capacity:200)=2",
            "--venue",
            "Presentation Room (Capacity:50)",
            "--av",
            "Projectors",
            "--meal",
            "Lunch",
            "--people",
            "40",
            "--details",
        ])
        .unwrap();
        match cli.command {
            Commands::Quote(args) => {
                assert_eq!(
                    args.venue,
                    vec![
                        "Auditorium Hall (Capacity:200)=2",
                        "Presentation Room (Capacity:50)"
                    ]
                );
                assert_eq!(args.av, vec!["Projectors"]);
                assert_eq!(args.meals, vec!["Lunch"]);
                assert_eq!(args.people, 40);
                assert!(args.details);
            }
            _ => panic!("Expected Quote command"),
        }
    }

    #[test]
    fn test_cli_parsing_catalog_flag_is_global() {
        let cli = Cli::try_parse_from(["confplan", "catalog", "--catalog", "party.yaml"]).unwrap();
        assert_eq!(cli.catalog, Some(PathBuf::from("party.yaml")));
        match cli.command {
            Commands::Catalog(args) => assert!(!args.export),
            _ => panic!("Expected Catalog command"),
        }
    }

    #[test]
    fn test_cli_parsing_catalog_export() {
        let cli = Cli::try_parse_from(["confplan", "catalog", "--export"]).unwrap();
        match cli.command {
            Commands::Catalog(args) => assert!(args.export),
            _ => panic!("Expected Catalog command"),
        }
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["confplan", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["confplan", "completions", "--shell", "zsh"]).unwrap();
        match cli.command {
            Commands::Completions(args) => assert_eq!(args.shell, "zsh"),
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_rejects_negative_people() {
        let result = Cli::try_parse_from(["confplan", "quote", "--people", "-3"]);
        assert!(result.is_err());
    }
}
