//! Main entry point for asset generation.
//!
//! Dispatches an asset kind to its voice generator and serializes the
//! finished buffer as a WAV container. The catalog driver supplies the
//! kind and seed; the core has no knowledge of the catalog's size or
//! naming scheme.

use serde::Serialize;

use crate::error::SynthResult;
use crate::mood::Mood;
use crate::stereo::StereoBuffer;
use crate::voices::{drone, music, percussive, stinger, tonal, OneShot};
use crate::wav::WavResult;
use crate::SAMPLE_RATE;

/// The closed set of asset archetypes and their variant parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AssetKind {
    Impact { transpose_semitones: f64 },
    Hit { transpose_semitones: f64 },
    Footstep { transpose_semitones: f64 },
    UiClick { transpose_semitones: f64 },
    BossSlam { transpose_semitones: f64 },
    Beam { transpose_semitones: f64 },
    Boomerang { transpose_semitones: f64 },
    Surge { transpose_semitones: f64 },
    CriticalHit { transpose_semitones: f64 },
    LevelUp { transpose_semitones: f64 },
    Hurt { transpose_semitones: f64 },
    Death { transpose_semitones: f64 },
    EnemyDeath { transpose_semitones: f64 },
    BossRoar { transpose_semitones: f64 },
    BossDeath { transpose_semitones: f64 },
    MusicBed { mood: Mood },
    Drone { mood: Mood },
}

impl AssetKind {
    /// A short name for the archetype.
    pub fn name(&self) -> &'static str {
        match self {
            AssetKind::Impact { .. } => "impact",
            AssetKind::Hit { .. } => "hit",
            AssetKind::Footstep { .. } => "footstep",
            AssetKind::UiClick { .. } => "ui_click",
            AssetKind::BossSlam { .. } => "boss_slam",
            AssetKind::Beam { .. } => "beam",
            AssetKind::Boomerang { .. } => "boomerang",
            AssetKind::Surge { .. } => "surge",
            AssetKind::CriticalHit { .. } => "critical_hit",
            AssetKind::LevelUp { .. } => "level_up",
            AssetKind::Hurt { .. } => "hurt",
            AssetKind::Death { .. } => "death",
            AssetKind::EnemyDeath { .. } => "enemy_death",
            AssetKind::BossRoar { .. } => "boss_roar",
            AssetKind::BossDeath { .. } => "boss_death",
            AssetKind::MusicBed { .. } => "music_bed",
            AssetKind::Drone { .. } => "drone",
        }
    }

    /// The mood driving this asset, if it is mood-parameterized.
    pub fn mood(&self) -> Option<Mood> {
        match self {
            AssetKind::MusicBed { mood } | AssetKind::Drone { mood } => Some(*mood),
            _ => None,
        }
    }

    /// Returns a copy with the mood replaced, if this kind carries one.
    pub fn with_mood(self, mood: Mood) -> Self {
        match self {
            AssetKind::MusicBed { .. } => AssetKind::MusicBed { mood },
            AssetKind::Drone { .. } => AssetKind::Drone { mood },
            other => other,
        }
    }
}

/// A single cataloged asset: the archetype plus its seed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AssetSpec {
    /// Archetype and variant parameters.
    pub kind: AssetKind,
    /// Explicit seed for the asset's noise streams.
    pub seed: u32,
}

/// Result of generating one asset.
#[derive(Debug)]
pub struct GenerateResult {
    /// WAV container and PCM hash.
    pub wav: WavResult,
    /// Length of the rendered buffer in seconds.
    pub duration_seconds: f64,
}

/// Generates an asset: renders its voice and serializes the buffer.
///
/// # Arguments
/// * `spec` - The asset's archetype and seed
///
/// # Returns
/// The WAV container with its PCM hash and duration
pub fn generate(spec: &AssetSpec) -> SynthResult<GenerateResult> {
    let buffer = render_voice(spec)?;
    let duration_seconds = buffer.len() as f64 / SAMPLE_RATE as f64;
    let wav = WavResult::from_stereo_buffer(&buffer, SAMPLE_RATE);

    Ok(GenerateResult {
        wav,
        duration_seconds,
    })
}

/// Renders the voice for an asset at its natural duration.
fn render_voice(spec: &AssetSpec) -> SynthResult<StereoBuffer> {
    let seed = spec.seed;
    let shot = |duration: f64, transpose: f64| OneShot::new(duration, seed).transposed(transpose);

    match spec.kind {
        AssetKind::Impact { transpose_semitones } => {
            percussive::impact(&shot(percussive::IMPACT_DURATION, transpose_semitones))
        }
        AssetKind::Hit { transpose_semitones } => {
            percussive::hit(&shot(percussive::HIT_DURATION, transpose_semitones))
        }
        AssetKind::Footstep { transpose_semitones } => {
            percussive::footstep(&shot(percussive::FOOTSTEP_DURATION, transpose_semitones))
        }
        AssetKind::UiClick { transpose_semitones } => {
            percussive::ui_click(&shot(percussive::UI_CLICK_DURATION, transpose_semitones))
        }
        AssetKind::BossSlam { transpose_semitones } => {
            percussive::boss_slam(&shot(percussive::BOSS_SLAM_DURATION, transpose_semitones))
        }
        AssetKind::Beam { transpose_semitones } => {
            tonal::beam(&shot(tonal::BEAM_DURATION, transpose_semitones))
        }
        AssetKind::Boomerang { transpose_semitones } => {
            tonal::boomerang(&shot(tonal::BOOMERANG_DURATION, transpose_semitones))
        }
        AssetKind::Surge { transpose_semitones } => {
            tonal::surge(&shot(tonal::SURGE_DURATION, transpose_semitones))
        }
        AssetKind::CriticalHit { transpose_semitones } => {
            tonal::critical_hit(&shot(tonal::CRITICAL_HIT_DURATION, transpose_semitones))
        }
        AssetKind::LevelUp { transpose_semitones } => {
            tonal::level_up(&shot(tonal::LEVEL_UP_DURATION, transpose_semitones))
        }
        AssetKind::Hurt { transpose_semitones } => {
            stinger::hurt(&shot(stinger::HURT_DURATION, transpose_semitones))
        }
        AssetKind::Death { transpose_semitones } => {
            stinger::death(&shot(stinger::DEATH_DURATION, transpose_semitones))
        }
        AssetKind::EnemyDeath { transpose_semitones } => {
            stinger::enemy_death(&shot(stinger::ENEMY_DEATH_DURATION, transpose_semitones))
        }
        AssetKind::BossRoar { transpose_semitones } => {
            stinger::boss_roar(&shot(stinger::BOSS_ROAR_DURATION, transpose_semitones))
        }
        AssetKind::BossDeath { transpose_semitones } => {
            stinger::boss_death(&shot(stinger::BOSS_DEATH_DURATION, transpose_semitones))
        }
        AssetKind::MusicBed { mood } => music::render(&music::MusicBedParams::new(mood, seed)),
        AssetKind::Drone { mood } => drone::render(&drone::DroneParams::new(mood, seed)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impact_generation() {
        let spec = AssetSpec {
            kind: AssetKind::Impact {
                transpose_semitones: 0.0,
            },
            seed: 11,
        };
        let result = generate(&spec).expect("generation should succeed");

        assert!(result.wav.is_stereo);
        assert_eq!(result.wav.sample_rate, 44_100);
        assert_eq!(result.wav.num_samples, 8820);
        assert!((result.duration_seconds - 0.20).abs() < 1e-3);
    }

    #[test]
    fn test_generation_determinism() {
        let spec = AssetSpec {
            kind: AssetKind::Surge {
                transpose_semitones: 1.0,
            },
            seed: 42,
        };
        let a = generate(&spec).expect("first generation");
        let b = generate(&spec).expect("second generation");

        assert_eq!(a.wav.pcm_hash, b.wav.pcm_hash);
        assert_eq!(a.wav.wav_data, b.wav.wav_data);
    }

    #[test]
    fn test_kind_names_are_unique() {
        let kinds = [
            AssetKind::Impact { transpose_semitones: 0.0 },
            AssetKind::Hit { transpose_semitones: 0.0 },
            AssetKind::Footstep { transpose_semitones: 0.0 },
            AssetKind::UiClick { transpose_semitones: 0.0 },
            AssetKind::BossSlam { transpose_semitones: 0.0 },
            AssetKind::Beam { transpose_semitones: 0.0 },
            AssetKind::Boomerang { transpose_semitones: 0.0 },
            AssetKind::Surge { transpose_semitones: 0.0 },
            AssetKind::CriticalHit { transpose_semitones: 0.0 },
            AssetKind::LevelUp { transpose_semitones: 0.0 },
            AssetKind::Hurt { transpose_semitones: 0.0 },
            AssetKind::Death { transpose_semitones: 0.0 },
            AssetKind::EnemyDeath { transpose_semitones: 0.0 },
            AssetKind::BossRoar { transpose_semitones: 0.0 },
            AssetKind::BossDeath { transpose_semitones: 0.0 },
            AssetKind::MusicBed { mood: Mood::Explore },
            AssetKind::Drone { mood: Mood::Explore },
        ];
        let mut names: Vec<&str> = kinds.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), kinds.len());
    }

    #[test]
    fn test_with_mood_swaps_only_mood_kinds() {
        let bed = AssetKind::MusicBed { mood: Mood::Explore };
        assert_eq!(bed.with_mood(Mood::Boss).mood(), Some(Mood::Boss));

        let hit = AssetKind::Hit { transpose_semitones: 0.0 };
        assert_eq!(hit.with_mood(Mood::Boss), hit);
        assert_eq!(hit.mood(), None);
    }
}
