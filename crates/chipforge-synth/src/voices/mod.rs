//! Voice generators, one module per asset archetype.
//!
//! Each voice is a pure function from a small parameter record (explicit
//! seed, duration, archetype-specific fields) to a finished stereo buffer,
//! built by summing weighted oscillator/noise layers under envelopes frame
//! by frame, then routed through the shared effects chain (auto-pan where
//! the voice is built mono, optional delay, mandatory limiter).

pub mod drone;
pub mod music;
pub mod percussive;
pub mod stinger;
pub mod tonal;

use crate::error::{SynthError, SynthResult};
use crate::oscillator;

pub(crate) const SR: f64 = crate::SAMPLE_RATE as f64;

/// Parameters shared by every one-shot voice.
#[derive(Debug, Clone, Copy)]
pub struct OneShot {
    /// Total length of the asset in seconds.
    pub duration_seconds: f64,
    /// Pitch offset applied to the voice's tonal partials, in semitones.
    pub transpose_semitones: f64,
    /// Seed for the voice's noise stream.
    pub seed: u32,
}

impl OneShot {
    /// Creates one-shot parameters at the voice's natural pitch.
    pub fn new(duration_seconds: f64, seed: u32) -> Self {
        Self {
            duration_seconds,
            transpose_semitones: 0.0,
            seed,
        }
    }

    /// Sets the pitch offset in semitones.
    pub fn transposed(mut self, semitones: f64) -> Self {
        self.transpose_semitones = semitones;
        self
    }

    /// Frequency multiplier for the pitch offset.
    pub(crate) fn pitch(&self) -> f64 {
        oscillator::transpose(1.0, self.transpose_semitones)
    }

    /// Validated frame count for the duration.
    pub(crate) fn frames(&self) -> SynthResult<usize> {
        frame_count(self.duration_seconds)
    }
}

/// Converts a duration to a frame count, failing fast on structurally
/// invalid durations.
pub(crate) fn frame_count(duration_seconds: f64) -> SynthResult<usize> {
    if !duration_seconds.is_finite() || duration_seconds <= 0.0 {
        return Err(SynthError::InvalidDuration {
            duration: duration_seconds,
        });
    }
    Ok((duration_seconds * SR) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_count_truncates() {
        assert_eq!(frame_count(0.20).unwrap(), 8820);
        assert_eq!(frame_count(1.0).unwrap(), 44_100);
    }

    #[test]
    fn test_frame_count_rejects_bad_durations() {
        assert!(frame_count(0.0).is_err());
        assert!(frame_count(-1.0).is_err());
        assert!(frame_count(f64::NAN).is_err());
        assert!(frame_count(f64::INFINITY).is_err());
    }

    #[test]
    fn test_one_shot_pitch() {
        let shot = OneShot::new(0.2, 1).transposed(12.0);
        assert!((shot.pitch() - 2.0).abs() < 1e-9);
        let shot = OneShot::new(0.2, 1);
        assert!((shot.pitch() - 1.0).abs() < 1e-12);
    }
}
