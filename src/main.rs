//! merge-yaml - overlay one YAML document onto another
//!
//! Reads a base document and a header document, overlays the header's
//! top-level keys onto the base and writes the combined document.

use clap::Parser;

mod cli;
mod commands;
mod document;
mod error;
mod logging;
mod merge;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Some(Commands::Version) => commands::version::run(),
        Some(Commands::Completions(args)) => commands::completions::run(&args),
        None => commands::merge::run(&cli.merge),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
