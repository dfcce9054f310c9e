//! Generate-all command: render the whole catalog.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use chipforge_synth::{generate, SAMPLE_RATE};

use super::{write_asset, Manifest};
use crate::catalog::CATALOG;

/// Renders every cataloged asset into `out_dir` and writes a manifest
/// with per-file PCM hashes.
///
/// # Arguments
/// * `out_dir` - Output directory (created if missing)
/// * `base_seed` - Base seed for per-asset seed derivation
pub fn run(out_dir: &str, base_seed: u32) -> Result<ExitCode> {
    let start = Instant::now();
    let out_root = Path::new(out_dir);

    fs::create_dir_all(out_root)
        .with_context(|| format!("failed to create output directory {}", out_dir))?;

    println!("{} {}", "Output root:".cyan().bold(), out_dir);
    println!("{} {}", "Base seed:".dimmed(), base_seed);

    let mut assets = Vec::with_capacity(CATALOG.len());
    for entry in CATALOG {
        let spec = entry.spec(base_seed);
        let result =
            generate(&spec).with_context(|| format!("failed to generate '{}'", entry.name))?;

        let (_, manifest_entry) = write_asset(out_root, entry.name, &spec, &result)?;
        println!(
            "  {} {} ({:.2}s, {})",
            "+".green(),
            entry.name,
            result.duration_seconds,
            &result.wav.pcm_hash[..16]
        );
        assets.push(manifest_entry);
    }

    let manifest = Manifest {
        base_seed,
        sample_rate: SAMPLE_RATE,
        assets,
    };
    let manifest_path = out_root.join("manifest.json");
    let manifest_json =
        serde_json::to_string_pretty(&manifest).context("failed to serialize manifest")?;
    fs::write(&manifest_path, manifest_json)
        .with_context(|| format!("failed to write {}", manifest_path.display()))?;

    println!(
        "{} {} assets in {:.2?}",
        "Done:".green().bold(),
        CATALOG.len(),
        start.elapsed()
    );

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_all_writes_catalog_and_manifest() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("audio");
        let out_str = out.to_str().expect("utf-8 path");

        run(out_str, 1234).expect("generate-all should succeed");

        for entry in CATALOG {
            assert!(out.join(format!("{}.wav", entry.name)).is_file());
        }

        let manifest: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out.join("manifest.json")).unwrap())
                .expect("manifest parses");
        assert_eq!(manifest["base_seed"], 1234);
        assert_eq!(
            manifest["assets"].as_array().map(Vec::len),
            Some(CATALOG.len())
        );
    }
}
