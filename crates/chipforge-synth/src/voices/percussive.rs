//! Percussive one-shots: impact, hit, footstep, UI click, boss slam.
//!
//! These voices are dominated by seeded noise plus a fast-decaying tonal
//! pitch sweep under an ADSR or exponential envelope.

use crate::effects::{auto_pan, delay, limiter};
use crate::envelope;
use crate::error::SynthResult;
use crate::oscillator::sine;
use crate::rng::NoiseStream;
use crate::stereo::StereoBuffer;

use super::{OneShot, SR};

/// Natural duration of the impact voice in seconds.
pub const IMPACT_DURATION: f64 = 0.20;
/// Natural duration of the hit voice in seconds.
pub const HIT_DURATION: f64 = 0.10;
/// Natural duration of the footstep voice in seconds.
pub const FOOTSTEP_DURATION: f64 = 0.07;
/// Natural duration of the UI click voice in seconds.
pub const UI_CLICK_DURATION: f64 = 0.045;
/// Natural duration of the boss slam voice in seconds.
pub const BOSS_SLAM_DURATION: f64 = 0.55;

/// Heavy weapon impact: noise blast over a pitch-dropping boom with a
/// high crack transient.
pub fn impact(shot: &OneShot) -> SynthResult<StereoBuffer> {
    let frames = shot.frames()?;
    let dur = shot.duration_seconds;
    let pitch = shot.pitch();
    let mut noise = NoiseStream::new(shot.seed);

    let mut mono = Vec::with_capacity(frames);
    for i in 0..frames {
        let t = i as f64 / SR;
        let env = envelope::adsr(t, dur, 0.002, 0.04, 0.16, 0.09);
        let n = noise.next_sample();
        let boom_freq = (140.0 - 85.0 * (t / dur)).max(44.0) * pitch;
        let boom = sine(boom_freq, t);
        let crack = sine(1800.0 * pitch, t) * envelope::exp_decay(t, 0.03, 2.0);
        mono.push((n * 0.70 + boom * 0.42 + crack * 0.16) * env);
    }

    let mut out = auto_pan::apply(&mono, 0.22, 6.0, SR);
    delay::apply(&mut out, 0.05, 0.18, 0.18, SR)?;
    limiter::normalize(&mut out, 0.88);
    Ok(out)
}

/// Short melee hit: noise burst plus a click transient.
pub fn hit(shot: &OneShot) -> SynthResult<StereoBuffer> {
    let frames = shot.frames()?;
    let dur = shot.duration_seconds;
    let pitch = shot.pitch();
    let mut noise = NoiseStream::new(shot.seed);

    let mut mono = Vec::with_capacity(frames);
    for i in 0..frames {
        let t = i as f64 / SR;
        let env = envelope::adsr(t, dur, 0.001, 0.018, 0.10, 0.04);
        let n = noise.next_sample();
        let click = sine(2700.0 * pitch, t) * envelope::exp_decay(t, 0.02, 2.5);
        mono.push((n * 0.64 + click * 0.22) * env);
    }

    let mut out = auto_pan::apply(&mono, 0.16, 12.0, SR);
    limiter::normalize(&mut out, 0.80);
    Ok(out)
}

/// Soft footstep: scuff noise over a low knock.
pub fn footstep(shot: &OneShot) -> SynthResult<StereoBuffer> {
    let frames = shot.frames()?;
    let dur = shot.duration_seconds;
    let pitch = shot.pitch();
    let mut noise = NoiseStream::new(shot.seed);

    let mut mono = Vec::with_capacity(frames);
    for i in 0..frames {
        let t = i as f64 / SR;
        let env = envelope::exp_decay(t, dur, 2.4);
        let scuff = noise.next_sample() * envelope::exp_decay(t, 0.05, 1.8);
        let knock_freq = (95.0 - 40.0 * (t / dur)).max(48.0) * pitch;
        let knock = sine(knock_freq, t);
        mono.push((scuff * 0.52 + knock * 0.48) * env);
    }

    let mut out = auto_pan::apply(&mono, 0.08, 10.0, SR);
    limiter::normalize(&mut out, 0.72);
    Ok(out)
}

/// Interface click: a short blip with a tick transient, centered.
pub fn ui_click(shot: &OneShot) -> SynthResult<StereoBuffer> {
    let frames = shot.frames()?;
    let dur = shot.duration_seconds;
    let pitch = shot.pitch();

    let mut mono = Vec::with_capacity(frames);
    for i in 0..frames {
        let t = i as f64 / SR;
        let env = envelope::adsr(t, dur, 0.001, 0.012, 0.20, 0.018);
        let blip = sine(1250.0 * pitch, t);
        let tick = sine(3400.0 * pitch, t) * envelope::exp_decay(t, 0.008, 2.0);
        mono.push((blip * 0.55 + tick * 0.25) * env);
    }

    let mut out = auto_pan::apply(&mono, 0.0, 0.0, SR);
    limiter::normalize(&mut out, 0.70);
    Ok(out)
}

/// Boss ground slam: deep pitch-dropping thud with a noise blast and a
/// lingering rumble.
pub fn boss_slam(shot: &OneShot) -> SynthResult<StereoBuffer> {
    let frames = shot.frames()?;
    let dur = shot.duration_seconds;
    let pitch = shot.pitch();
    let mut noise = NoiseStream::new(shot.seed);

    let mut mono = Vec::with_capacity(frames);
    for i in 0..frames {
        let t = i as f64 / SR;
        let env = envelope::adsr(t, dur, 0.003, 0.10, 0.30, 0.22);
        let slam_freq = (120.0 - 90.0 * (t / dur)).max(28.0) * pitch;
        let slam = sine(slam_freq, t);
        let blast = noise.next_sample() * envelope::exp_decay(t, 0.18, 2.2);
        let rumble = sine(38.0 * pitch, t);
        mono.push((slam * 0.58 + blast * 0.36 + rumble * 0.30) * env);
    }

    let mut out = auto_pan::apply(&mono, 0.18, 3.0, SR);
    delay::apply(&mut out, 0.11, 0.30, 0.26, SR)?;
    limiter::normalize(&mut out, 0.90);
    Ok(out)
}
