//! honeycomb - word search over a hexagonal grid
//!
//! Usage:
//!   honeycomb <grid-file> <dictionary-file>
//!
//! The grid file starts with a line count, then one line of letters per
//! ring, center first. The dictionary file holds one candidate word per
//! line. Every dictionary word spellable by a simple path through adjacent
//! cells is printed to stdout, sorted, one per line.

mod error;
mod input;

use honeycomb_grid::Honeycomb;
use honeycomb_search::find_words;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::Result;

fn print_usage() {
    eprintln!("honeycomb - find dictionary words in a hexagonal letter grid");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  honeycomb <grid-file> <dictionary-file>");
    eprintln!();
    eprintln!("The grid file's first line gives its line count; each further");
    eprintln!("line holds one ring of letters, center ring first. The");
    eprintln!("dictionary file holds one word per line.");
}

fn run(grid_path: &str, dictionary_path: &str) -> Result<()> {
    let rings = input::read_lines(grid_path, true)?;
    let words: Vec<String> = input::read_lines(dictionary_path, false)?
        .into_iter()
        .filter(|word| !word.is_empty())
        .collect();

    let grid = Honeycomb::from_rings(&rings)?;
    tracing::info!(
        cells = grid.len(),
        rings = grid.ring_count(),
        words = words.len(),
        "searching"
    );

    let found = find_words(&grid, &words);
    tracing::info!(found = found.len(), "search complete");

    for word in &found {
        println!("{}", word);
    }
    Ok(())
}

fn main() {
    // Results go to stdout, so all diagnostics stay on stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "honeycomb=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();

    if matches!(args.get(1).map(String::as_str), Some("-h" | "--help" | "help")) {
        print_usage();
        return;
    }
    if args.len() != 3 {
        print_usage();
        std::process::exit(1);
    }

    if let Err(e) = run(&args[1], &args[2]) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
