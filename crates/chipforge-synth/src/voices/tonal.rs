//! Tonal one-shots: beam, boomerang, surge, critical hit, level up.
//!
//! Frequency sweeps or sinusoidal wobbles plus harmonic shimmer under a
//! sustain-bearing ADSR envelope, finished with feedback delay for shine.

use crate::effects::{auto_pan, delay, limiter};
use crate::envelope;
use crate::error::SynthResult;
use crate::oscillator::{sine, sine_phase};
use crate::rng::NoiseStream;
use crate::stereo::StereoBuffer;

use super::{OneShot, SR};

/// Natural duration of the beam voice in seconds.
pub const BEAM_DURATION: f64 = 0.24;
/// Natural duration of the boomerang voice in seconds.
pub const BOOMERANG_DURATION: f64 = 0.28;
/// Natural duration of the surge voice in seconds.
pub const SURGE_DURATION: f64 = 0.34;
/// Natural duration of the critical hit voice in seconds.
pub const CRITICAL_HIT_DURATION: f64 = 0.16;
/// Natural duration of the level-up voice in seconds.
pub const LEVEL_UP_DURATION: f64 = 0.42;

/// Level-up chord voicing in Hz (C5, E5, G5, C6).
const LEVEL_UP_CHORD: [f64; 4] = [523.25, 659.25, 783.99, 1046.5];

/// Energy beam: rising sweep with a near-double shimmer partial and a low
/// air wobble.
pub fn beam(shot: &OneShot) -> SynthResult<StereoBuffer> {
    let frames = shot.frames()?;
    let dur = shot.duration_seconds;
    let pitch = shot.pitch();

    let mut mono = Vec::with_capacity(frames);
    for i in 0..frames {
        let t = i as f64 / SR;
        let env = envelope::adsr(t, dur, 0.004, 0.03, 0.62, 0.08);
        let carrier = (620.0 + 820.0 * (t / dur)) * pitch;
        let tone = sine(carrier, t);
        let shimmer = sine_phase(carrier * 1.997, t, 0.9);
        let air = sine(28.0, t);
        mono.push((tone * 0.56 + shimmer * 0.23 + air * 0.08) * env);
    }

    let mut out = auto_pan::apply(&mono, 0.38, 9.0, SR);
    delay::apply(&mut out, 0.06, 0.28, 0.24, SR)?;
    limiter::normalize(&mut out, 0.88);
    Ok(out)
}

/// Thrown boomerang: a 7 Hz pitch wobble with a whoosh transient.
pub fn boomerang(shot: &OneShot) -> SynthResult<StereoBuffer> {
    let frames = shot.frames()?;
    let dur = shot.duration_seconds;
    let pitch = shot.pitch();

    let mut mono = Vec::with_capacity(frames);
    for i in 0..frames {
        let t = i as f64 / SR;
        let env = envelope::adsr(t, dur, 0.005, 0.04, 0.44, 0.10);
        let wobble = sine(7.0, t);
        let freq = (330.0 + 190.0 * wobble) * pitch;
        let tone = sine(freq, t);
        let whoosh = sine(940.0 * pitch, t) * envelope::exp_decay(t, 0.07, 2.3);
        mono.push((tone * 0.62 + whoosh * 0.14) * env);
    }

    let mut out = auto_pan::apply(&mono, 0.44, 5.2, SR);
    delay::apply(&mut out, 0.08, 0.22, 0.22, SR)?;
    limiter::normalize(&mut out, 0.88);
    Ok(out)
}

/// Energy surge: a wide upward sweep over a sub tone with a sparkle
/// transient.
pub fn surge(shot: &OneShot) -> SynthResult<StereoBuffer> {
    let frames = shot.frames()?;
    let dur = shot.duration_seconds;
    let pitch = shot.pitch();

    let mut mono = Vec::with_capacity(frames);
    for i in 0..frames {
        let t = i as f64 / SR;
        let env = envelope::adsr(t, dur, 0.006, 0.06, 0.55, 0.14);
        let sweep = (140.0 + 1550.0 * (t / dur)) * pitch;
        let tone = sine(sweep, t);
        let sub = sine(72.0 * pitch, t);
        let sparkle = sine(2100.0 * pitch, t) * envelope::exp_decay(t, 0.05, 2.0);
        mono.push((tone * 0.58 + sub * 0.30 + sparkle * 0.09) * env);
    }

    let mut out = auto_pan::apply(&mono, 0.50, 4.8, SR);
    delay::apply(&mut out, 0.09, 0.36, 0.30, SR)?;
    limiter::normalize(&mut out, 0.88);
    Ok(out)
}

/// Critical hit: a hit transient sharpened by an octave stab and shimmer.
pub fn critical_hit(shot: &OneShot) -> SynthResult<StereoBuffer> {
    let frames = shot.frames()?;
    let dur = shot.duration_seconds;
    let pitch = shot.pitch();
    let mut noise = NoiseStream::new(shot.seed);

    let mut mono = Vec::with_capacity(frames);
    for i in 0..frames {
        let t = i as f64 / SR;
        let env = envelope::adsr(t, dur, 0.001, 0.03, 0.30, 0.06);
        let n = noise.next_sample();
        let stab = sine(660.0 * pitch, t) * 0.34 + sine_phase(1320.0 * pitch, t, 0.5) * 0.22;
        let shimmer = sine(2640.0 * pitch, t) * envelope::exp_decay(t, 0.05, 2.0);
        mono.push((n * 0.40 + stab + shimmer * 0.18) * env);
    }

    let mut out = auto_pan::apply(&mono, 0.20, 10.0, SR);
    delay::apply(&mut out, 0.05, 0.22, 0.20, SR)?;
    limiter::normalize(&mut out, 0.86);
    Ok(out)
}

/// Level up: an ascending-weighted chord with per-partial phase offsets
/// and a sparkle transient.
pub fn level_up(shot: &OneShot) -> SynthResult<StereoBuffer> {
    let frames = shot.frames()?;
    let dur = shot.duration_seconds;
    let pitch = shot.pitch();

    let mut mono = Vec::with_capacity(frames);
    for i in 0..frames {
        let t = i as f64 / SR;
        let env = envelope::adsr(t, dur, 0.006, 0.08, 0.70, 0.16);
        let mut mix = 0.0;
        for (idx, freq) in LEVEL_UP_CHORD.iter().enumerate() {
            let gain = 0.22 - idx as f64 * 0.03;
            mix += sine_phase(freq * pitch, t, idx as f64 * 0.4) * gain;
        }
        let sparkle = sine(1900.0 * pitch, t) * envelope::exp_decay(t, 0.09, 2.0);
        mono.push((mix + sparkle * 0.15) * env);
    }

    let mut out = auto_pan::apply(&mono, 0.34, 3.4, SR);
    delay::apply(&mut out, 0.12, 0.34, 0.35, SR)?;
    limiter::normalize(&mut out, 0.90);
    Ok(out)
}
