//! Chipforge Synthesis Core
//!
//! This crate procedurally synthesizes a catalog of game audio assets
//! (short sound effects, ambient drones, and looping music beds) entirely
//! from mathematical waveform generators, and renders each to a 16-bit PCM
//! WAV container. No samples or recordings are involved: every waveform is
//! computed sample-by-sample from oscillators, envelopes, and seeded noise.
//!
//! # Determinism
//!
//! All synthesis is deterministic. Given the same asset kind and seed, the
//! output is byte-identical across runs. Randomness flows through PCG32
//! streams with seeds derived via BLAKE3 hashing, so each asset (and each
//! component within an asset) owns an independent, reproducible stream.
//!
//! # Example
//!
//! ```
//! use chipforge_synth::{generate, AssetKind, AssetSpec};
//!
//! let spec = AssetSpec {
//!     kind: AssetKind::Impact { transpose_semitones: 0.0 },
//!     seed: 11,
//! };
//! let result = generate(&spec).expect("synthesis is infallible for valid params");
//!
//! // result.wav.wav_data is a complete WAV file
//! assert_eq!(&result.wav.wav_data[0..4], b"RIFF");
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] - Main entry point for asset generation
//! - [`envelope`] - ADSR and exponential envelope shapes
//! - [`effects`] - Auto-pan, feedback delay, and the peak limiter
//! - [`mood`] - Mood parameter sets (progressions, gains, drone voicings)
//! - [`oscillator`] - Oscillator math and equal-power panning
//! - [`rng`] - Deterministic RNG with seed derivation
//! - [`voices`] - One generator per asset archetype
//! - [`wav`] - Deterministic WAV file writer

pub mod effects;
pub mod envelope;
pub mod error;
pub mod generate;
pub mod mood;
pub mod oscillator;
pub mod rng;
pub mod stereo;
pub mod voices;
pub mod wav;

/// Fixed sample rate of every asset in Hz.
pub const SAMPLE_RATE: u32 = 44_100;

// Re-export main types at crate root
pub use error::{SynthError, SynthResult};
pub use generate::{generate, AssetKind, AssetSpec, GenerateResult};
pub use mood::Mood;
pub use stereo::StereoBuffer;
pub use wav::WavResult;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_full_generation_pipeline() {
        let spec = AssetSpec {
            kind: AssetKind::Beam {
                transpose_semitones: 0.0,
            },
            seed: 42,
        };
        let result = generate(&spec).expect("generation should succeed");

        assert!(!result.wav.wav_data.is_empty());
        assert_eq!(result.wav.sample_rate, SAMPLE_RATE);
        assert!(result.wav.is_stereo);

        // Verify WAV header
        assert_eq!(&result.wav.wav_data[0..4], b"RIFF");
        assert_eq!(&result.wav.wav_data[8..12], b"WAVE");
    }

    #[test]
    fn test_generation_determinism_across_kinds() {
        for kind in [
            AssetKind::Hit {
                transpose_semitones: 0.0,
            },
            AssetKind::LevelUp {
                transpose_semitones: 0.0,
            },
            AssetKind::Hurt {
                transpose_semitones: -1.0,
            },
        ] {
            let spec = AssetSpec { kind, seed: 7 };
            let a = generate(&spec).expect("first generation");
            let b = generate(&spec).expect("second generation");
            assert_eq!(a.wav.pcm_hash, b.wav.pcm_hash, "kind {}", kind.name());
        }
    }

    #[test]
    fn test_different_seeds_produce_different_noise_assets() {
        let a = generate(&AssetSpec {
            kind: AssetKind::Impact {
                transpose_semitones: 0.0,
            },
            seed: 42,
        })
        .expect("first generation");
        let b = generate(&AssetSpec {
            kind: AssetKind::Impact {
                transpose_semitones: 0.0,
            },
            seed: 43,
        })
        .expect("second generation");

        assert_ne!(a.wav.pcm_hash, b.wav.pcm_hash);
    }

    #[test]
    fn test_unrecognized_mood_key_equals_default_bed() {
        // The catalog resolves mood keys through Mood::from_key, so an
        // unknown key must select the same tables as the default.
        let fallback = generate(&AssetSpec {
            kind: AssetKind::Drone {
                mood: Mood::from_key("???"),
            },
            seed: 5,
        })
        .expect("fallback generation");
        let explicit = generate(&AssetSpec {
            kind: AssetKind::Drone {
                mood: Mood::Explore,
            },
            seed: 5,
        })
        .expect("explicit generation");

        assert_eq!(fallback.wav.pcm_hash, explicit.wav.pcm_hash);
    }

    #[test]
    fn test_one_shot_duration_contract() {
        // 0.20 s at 44100 Hz is exactly 8820 frames.
        let result = generate(&AssetSpec {
            kind: AssetKind::Impact {
                transpose_semitones: 0.0,
            },
            seed: 11,
        })
        .expect("generation should succeed");
        assert_eq!(result.wav.num_samples, 8820);
    }
}
