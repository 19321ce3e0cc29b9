//! Confplan - conference expense planner
//!
//! A command line tool for estimating conference event costs across venue,
//! audio-visual, and catering categories, interactively or from a one-shot
//! selection on the command line.

use clap::Parser;

mod catalog;
mod cli;
mod commands;
mod error;
mod pricing;
mod session;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Plan => commands::plan::run(cli.catalog, cli.verbose),
        Commands::Quote(args) => commands::quote::run(cli.catalog, cli.verbose, args),
        Commands::Catalog(args) => commands::catalog::run(cli.catalog, cli.verbose, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
