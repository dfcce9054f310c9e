//! Ambient drone bed.
//!
//! Two slightly detuned sine partials around the mood's base frequency,
//! slow LFO-driven pitch drift, a constant noise floor scaled by the
//! mood's air gain, and a high sparkle partial gated by the LFO's positive
//! half. Finished with slow auto-panning and a light mood delay.

use crate::effects::{auto_pan, delay, limiter};
use crate::error::SynthResult;
use crate::mood::Mood;
use crate::oscillator::{sine, sine_phase};
use crate::rng::{derive_seed, NoiseStream};
use crate::stereo::StereoBuffer;

use super::{frame_count, SR};

/// Natural duration of a drone bed in seconds.
pub const DRONE_DURATION: f64 = 24.0;

/// Detune ratio between the partial pair.
const DETUNE: f64 = 0.006;
/// Sparkle partial sits six partials above the base.
const SPARKLE_RATIO: f64 = 6.0;

/// Ambient drone parameters.
#[derive(Debug, Clone, Copy)]
pub struct DroneParams {
    /// Mood selecting the base frequency, drift rate, and layer gains.
    pub mood: Mood,
    /// Total length in seconds.
    pub duration_seconds: f64,
    /// Seed for the air-noise stream.
    pub seed: u32,
}

impl DroneParams {
    /// Creates parameters for a full-length drone.
    pub fn new(mood: Mood, seed: u32) -> Self {
        Self {
            mood,
            duration_seconds: DRONE_DURATION,
            seed,
        }
    }
}

/// Renders an ambient drone.
pub fn render(params: &DroneParams) -> SynthResult<StereoBuffer> {
    let frames = frame_count(params.duration_seconds)?;
    let mood = params.mood.params();
    let voicing = &mood.drone;

    let mut air = NoiseStream::new(derive_seed(params.seed, "air"));

    let mut mono = Vec::with_capacity(frames);
    for i in 0..frames {
        let t = i as f64 / SR;
        let drift = sine(voicing.drift_hz, t);

        let low = voicing.base_freq * (1.0 + DETUNE * drift);
        let high = voicing.base_freq * (1.0 + DETUNE) * (1.0 + DETUNE * 0.7 * drift);
        let pair = sine(low, t) * 0.42 + sine_phase(high, t, 0.6) * 0.38;

        let floor = air.next_sample() * voicing.air_gain;

        // Sparkle rides only the positive half of the drift LFO.
        let gate = drift.max(0.0);
        let sparkle = sine(voicing.base_freq * SPARKLE_RATIO, t) * gate * voicing.sparkle_gain;

        mono.push(pair + floor + sparkle);
    }

    let mut out = auto_pan::apply(&mono, 0.40, 0.07, SR);
    delay::apply(
        &mut out,
        mood.delay.time_seconds,
        mood.delay.feedback,
        mood.delay.mix * 0.5,
        SR,
    )?;
    limiter::normalize(&mut out, 0.85);
    Ok(out)
}
