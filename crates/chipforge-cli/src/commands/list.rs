//! List command: print the asset catalog.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use crate::catalog::{BASE_SEED, CATALOG};

/// Prints every cataloged asset with its archetype and derived seed.
pub fn run() -> Result<ExitCode> {
    println!("{} ({} assets)", "Catalog".cyan().bold(), CATALOG.len());

    for entry in CATALOG {
        let kind = entry.kind;
        let detail = match kind.mood() {
            Some(mood) => format!("mood {}", mood.key()),
            None => format!("seed {}", entry.seed(BASE_SEED)),
        };
        println!(
            "  {:<22} {:<12} {}",
            entry.name.bold(),
            kind.name(),
            detail.dimmed()
        );
    }

    Ok(ExitCode::SUCCESS)
}
