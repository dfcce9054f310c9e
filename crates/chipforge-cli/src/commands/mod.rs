//! Command implementations, one module per subcommand.

pub mod generate;
pub mod generate_all;
pub mod list;

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use chipforge_synth::{AssetSpec, GenerateResult};

/// One asset's row in the generation manifest.
#[derive(Debug, Serialize)]
pub struct ManifestEntry {
    /// Catalog name.
    pub name: String,
    /// Output file name.
    pub file: String,
    /// Archetype, variant parameters, and seed.
    pub spec: AssetSpec,
    /// BLAKE3 hash of the PCM data.
    pub pcm_hash: String,
    /// Rendered length in seconds.
    pub duration_seconds: f64,
}

/// The generation manifest written next to the WAV files.
#[derive(Debug, Serialize)]
pub struct Manifest {
    /// Base seed the per-asset seeds were derived from.
    pub base_seed: u32,
    /// Sample rate of every asset in Hz.
    pub sample_rate: u32,
    /// Generated assets in catalog order.
    pub assets: Vec<ManifestEntry>,
}

/// Writes one generated asset to `<out_dir>/<name>.wav` and returns its
/// manifest row.
pub(crate) fn write_asset(
    out_dir: &Path,
    name: &str,
    spec: &AssetSpec,
    result: &GenerateResult,
) -> Result<(PathBuf, ManifestEntry)> {
    let file = format!("{}.wav", name);
    let path = out_dir.join(&file);
    fs::write(&path, &result.wav.wav_data)
        .with_context(|| format!("failed to write {}", path.display()))?;

    let entry = ManifestEntry {
        name: name.to_string(),
        file,
        spec: *spec,
        pcm_hash: result.wav.pcm_hash.clone(),
        duration_seconds: result.duration_seconds,
    };
    Ok((path, entry))
}
