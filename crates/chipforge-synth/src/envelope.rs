//! Amplitude envelope shapes.
//!
//! Voices evaluate envelopes at absolute time over a fixed asset duration,
//! so the shapes here are pure functions `time x duration -> scalar in [0, 1]`
//! rather than stateful generators.

/// Minimum phase length used to floor envelope denominators.
const MIN_PHASE: f64 = 1e-6;

/// ADSR envelope parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdsrParams {
    /// Attack time in seconds.
    pub attack: f64,
    /// Decay time in seconds.
    pub decay: f64,
    /// Sustain level (0.0 to 1.0).
    pub sustain: f64,
    /// Release time in seconds.
    pub release: f64,
}

impl AdsrParams {
    /// Creates new ADSR parameters.
    pub fn new(attack: f64, decay: f64, sustain: f64, release: f64) -> Self {
        Self {
            attack: attack.max(0.0),
            decay: decay.max(0.0),
            sustain: sustain.clamp(0.0, 1.0),
            release: release.max(0.0),
        }
    }

    /// Creates a percussive envelope (no sustain).
    pub fn percussive(attack: f64, decay: f64) -> Self {
        Self::new(attack, decay, 0.0, decay)
    }

    /// Creates a pad envelope (slow attack and release, full sustain).
    pub fn pad(attack: f64, release: f64) -> Self {
        Self::new(attack, 0.0, 1.0, release)
    }

    /// Evaluates the envelope at time `t` over a total duration.
    pub fn at(&self, t: f64, duration: f64) -> f64 {
        adsr(t, duration, self.attack, self.decay, self.sustain, self.release)
    }
}

/// ADSR envelope evaluated at absolute time.
///
/// Returns 0 for `t < 0`; a linear ramp 0 -> 1 across `[0, attack)`; a linear
/// ramp 1 -> sustain across `[attack, attack + decay)`; the sustain level up
/// to `duration - release`; a linear ramp sustain -> 0 across the release;
/// and 0 for `t >= duration`. Zero-length phases are safe: denominators are
/// floored at `MIN_PHASE`.
pub fn adsr(t: f64, duration: f64, attack: f64, decay: f64, sustain: f64, release: f64) -> f64 {
    if t < 0.0 {
        return 0.0;
    }
    if t < attack {
        return t / attack.max(MIN_PHASE);
    }
    if t < attack + decay {
        return 1.0 - (1.0 - sustain) * ((t - attack) / decay.max(MIN_PHASE));
    }
    if t < duration - release {
        return sustain;
    }
    if t < duration {
        return sustain * (1.0 - (t - (duration - release)) / release.max(MIN_PHASE));
    }
    0.0
}

/// Exponential decay envelope: `max(0, 1 - t/duration)^power`.
///
/// Returns 0 outside `[0, duration)`.
pub fn exp_decay(t: f64, duration: f64, power: f64) -> f64 {
    if t < 0.0 || t >= duration {
        return 0.0;
    }
    (1.0 - t / duration).max(0.0).powf(power)
}
