//! Looping music bed.
//!
//! A repeating bar-indexed chord progression drives bass, pad, and an
//! 8-step arpeggiator, layered with a periodic kick, snare, and hi-hat on
//! fixed beat grids. Stereo width comes from asymmetric arpeggio panning
//! plus a slow swirl offset. The progression and layer gains come from the
//! selected mood.

use crate::effects::{delay, limiter};
use crate::envelope::exp_decay;
use crate::error::SynthResult;
use crate::mood::Mood;
use crate::oscillator::{cosine, sine, sine_phase};
use crate::rng::{derive_seed, NoiseStream};
use crate::stereo::StereoBuffer;

use super::{frame_count, SR};

/// Natural duration of a music bed in seconds.
pub const MUSIC_BED_DURATION: f64 = 32.0;

/// Seconds per bar of the chord progression.
const BAR_SECONDS: f64 = 4.0;
/// Seconds per arpeggiator step (1/8 beat at the fixed grid).
const ARP_STEP_SECONDS: f64 = 0.125;

/// Music bed parameters.
#[derive(Debug, Clone, Copy)]
pub struct MusicBedParams {
    /// Mood selecting the progression and layer gains.
    pub mood: Mood,
    /// Total length in seconds.
    pub duration_seconds: f64,
    /// Seed for the percussion noise streams.
    pub seed: u32,
}

impl MusicBedParams {
    /// Creates parameters for a full-length bed.
    pub fn new(mood: Mood, seed: u32) -> Self {
        Self {
            mood,
            duration_seconds: MUSIC_BED_DURATION,
            seed,
        }
    }
}

/// Renders a music bed.
pub fn render(params: &MusicBedParams) -> SynthResult<StereoBuffer> {
    let frames = frame_count(params.duration_seconds)?;
    let mood = params.mood.params();
    let gains = &mood.gains;

    // Snare and hat own independent noise streams so the loop stays
    // bit-reproducible if layers are reworked.
    let mut snare_noise = NoiseStream::new(derive_seed(params.seed, "snare"));
    let mut hat_noise = NoiseStream::new(derive_seed(params.seed, "hat"));

    let mut out = StereoBuffer::with_capacity(frames);
    for i in 0..frames {
        let t = i as f64 / SR;
        let bar = ((t / BAR_SECONDS) as usize) % mood.progression.len();
        let chord = &mood.progression[bar];

        // Kick: pitch-dropping sine burst gated to a half-second grid.
        let beat = t % 0.5;
        let mut kick = 0.0;
        if beat < 0.13 {
            let env = exp_decay(beat, 0.13, 2.8);
            let freq = 148.0 - 102.0 * (beat / 0.13);
            kick = sine(freq.max(42.0), t) * env * gains.kick;
        }

        // Snare: noise plus tone burst, offset by a quarter beat.
        let snare_phase = (t + 0.25) % 1.0;
        let mut snare = 0.0;
        if snare_phase < 0.16 {
            let env = exp_decay(snare_phase, 0.16, 2.1);
            let n = snare_noise.next_sample();
            let tone = sine(214.0, t);
            snare = (n * 0.74 + tone * 0.20) * env * gains.snare;
        }

        // Hi-hat: short noise burst on a quarter-beat grid.
        let hat_phase = t % 0.25;
        let mut hat = 0.0;
        if hat_phase < 0.042 {
            let env = exp_decay(hat_phase, 0.042, 1.3);
            hat = hat_noise.next_sample() * env * gains.hat;
        }

        let bass =
            (sine(chord.root, t) + 0.42 * sine_phase(chord.root * 2.0, t, 0.18)) * gains.bass;

        // Sub-harmonic triad.
        let pad = (sine_phase(chord.third * 0.5, t, 0.1)
            + sine_phase(chord.fifth * 0.5, t, 1.2)
            + sine_phase(chord.seventh * 0.5, t, 2.1))
            * gains.pad;

        // 8-step arpeggio cycling through chord tones an octave up.
        let arp_step = ((t / ARP_STEP_SECONDS) as usize) % 8;
        let arp_freq = match arp_step {
            0 | 6 => chord.root * 2.0,
            1 | 5 | 7 => chord.third * 2.0,
            2 | 4 => chord.fifth * 2.0,
            _ => chord.seventh * 2.0,
        };
        let arp_local = t % ARP_STEP_SECONDS;
        let arp_env = exp_decay(arp_local, ARP_STEP_SECONDS, 1.6);
        let arp = (sine(arp_freq, t) + 0.28 * sine(arp_freq * 2.0, t)) * arp_env * gains.arp;

        let swirl = 0.018 * sine(0.10, t);
        let core = bass + pad + arp + kick + snare + hat;
        let left = core + arp * (0.22 + 0.18 * sine(0.27, t)) + swirl;
        let right = core + arp * (-0.22 + 0.18 * cosine(0.29, t)) - swirl;
        out.push(left, right);
    }

    delay::apply(
        &mut out,
        mood.delay.time_seconds,
        mood.delay.feedback,
        mood.delay.mix,
        SR,
    )?;
    limiter::normalize(&mut out, 0.90);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short(mood: Mood, seed: u32) -> MusicBedParams {
        MusicBedParams {
            mood,
            duration_seconds: 2.0,
            seed,
        }
    }

    #[test]
    fn test_determinism() {
        let params = short(Mood::Explore, 1234);
        assert_eq!(render(&params).unwrap(), render(&params).unwrap());
    }

    #[test]
    fn test_peak_within_ceiling() {
        let out = render(&short(Mood::Battle, 1234)).unwrap();
        assert!(out.peak() <= 0.90 + 1e-6);
    }

    #[test]
    fn test_moods_differ() {
        let a = render(&short(Mood::Explore, 1234)).unwrap();
        let b = render(&short(Mood::Boss, 1234)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_unknown_mood_key_matches_default() {
        let fallback = short(Mood::from_key("no-such-mood"), 1234);
        let explicit = short(Mood::Explore, 1234);
        assert_eq!(render(&fallback).unwrap(), render(&explicit).unwrap());
    }

    #[test]
    fn test_stereo_channels_differ() {
        // Arpeggio panning and swirl separate the channels.
        let out = render(&short(Mood::Explore, 1234)).unwrap();
        assert_ne!(out.left, out.right);
    }

    #[test]
    fn test_invalid_duration_fails_fast() {
        let mut params = short(Mood::Explore, 1234);
        params.duration_seconds = -3.0;
        assert!(render(&params).is_err());
    }
}
