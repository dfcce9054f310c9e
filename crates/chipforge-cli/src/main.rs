//! Chipforge CLI - procedural audio asset generation.

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

use chipforge_cli::cli_args::{Cli, Commands};
use chipforge_cli::commands;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::GenerateAll { out_dir, base_seed } => {
            commands::generate_all::run(&out_dir, base_seed)
        }
        Commands::Generate {
            name,
            out_dir,
            seed,
            mood,
        } => commands::generate::run(&name, &out_dir, seed, mood.as_deref()),
        Commands::List => commands::list::run(),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::from(2)
        }
    }
}
