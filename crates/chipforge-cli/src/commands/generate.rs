//! Generate command: render a single cataloged asset.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use chipforge_synth::{generate, Mood};

use super::write_asset;
use crate::catalog::{self, BASE_SEED};

/// Renders one asset by catalog name.
///
/// # Arguments
/// * `name` - Catalog name (see `chipforge list`)
/// * `out_dir` - Output directory
/// * `seed` - Optional override of the derived seed
/// * `mood` - Optional mood key override for music beds and drones;
///   unrecognized keys fall back to the default mood
///
/// # Returns
/// Exit code: 0 on success, 1 for an unknown asset name
pub fn run(name: &str, out_dir: &str, seed: Option<u32>, mood: Option<&str>) -> Result<ExitCode> {
    let Some(entry) = catalog::find(name) else {
        eprintln!("{} unknown asset '{}'", "error:".red().bold(), name);
        eprintln!("  run {} to see the catalog", "chipforge list".bold());
        return Ok(ExitCode::FAILURE);
    };

    let mut spec = entry.spec(BASE_SEED);
    if let Some(seed) = seed {
        spec.seed = seed;
    }
    if let Some(key) = mood {
        spec.kind = spec.kind.with_mood(Mood::from_key(key));
    }

    let out_root = Path::new(out_dir);
    fs::create_dir_all(out_root)
        .with_context(|| format!("failed to create output directory {}", out_dir))?;

    let result = generate(&spec).with_context(|| format!("failed to generate '{}'", name))?;
    let (path, manifest_entry) = write_asset(out_root, name, &spec, &result)?;

    println!(
        "{} {} ({:.2}s, {})",
        "Wrote:".green().bold(),
        path.display(),
        result.duration_seconds,
        &manifest_entry.pcm_hash[..16]
    );

    Ok(ExitCode::SUCCESS)
}
