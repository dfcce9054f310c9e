//! Stingers: hurt, death, enemy death, boss roar, boss death.
//!
//! Descending tonal figures marking damage and death events. The falling
//! sweep plus fading noise shape is shared; register and length set the
//! weight of the event.

use crate::effects::{auto_pan, delay, limiter};
use crate::envelope;
use crate::error::SynthResult;
use crate::oscillator::{sine, sine_phase};
use crate::rng::NoiseStream;
use crate::stereo::StereoBuffer;

use super::{OneShot, SR};

/// Natural duration of the hurt voice in seconds.
pub const HURT_DURATION: f64 = 0.18;
/// Natural duration of the death voice in seconds.
pub const DEATH_DURATION: f64 = 0.52;
/// Natural duration of the enemy death voice in seconds.
pub const ENEMY_DEATH_DURATION: f64 = 0.36;
/// Natural duration of the boss roar voice in seconds.
pub const BOSS_ROAR_DURATION: f64 = 0.90;
/// Natural duration of the boss death voice in seconds.
pub const BOSS_DEATH_DURATION: f64 = 1.20;

/// Player hurt: a quick falling tone with a noise bite.
pub fn hurt(shot: &OneShot) -> SynthResult<StereoBuffer> {
    let frames = shot.frames()?;
    let dur = shot.duration_seconds;
    let pitch = shot.pitch();
    let mut noise = NoiseStream::new(shot.seed);

    let mut mono = Vec::with_capacity(frames);
    for i in 0..frames {
        let t = i as f64 / SR;
        let env = envelope::adsr(t, dur, 0.002, 0.05, 0.35, 0.08);
        let freq = (520.0 - 260.0 * (t / dur)).max(180.0) * pitch;
        let tone = sine(freq, t);
        let bite = noise.next_sample() * envelope::exp_decay(t, 0.06, 1.8);
        mono.push((tone * 0.62 + bite * 0.26) * env);
    }

    let mut out = auto_pan::apply(&mono, 0.14, 8.0, SR);
    limiter::normalize(&mut out, 0.82);
    Ok(out)
}

/// Player death: a long falling tone over noise fading with the full
/// duration.
pub fn death(shot: &OneShot) -> SynthResult<StereoBuffer> {
    let frames = shot.frames()?;
    let dur = shot.duration_seconds;
    let pitch = shot.pitch();
    let mut noise = NoiseStream::new(shot.seed);

    let mut mono = Vec::with_capacity(frames);
    for i in 0..frames {
        let t = i as f64 / SR;
        let env = envelope::adsr(t, dur, 0.008, 0.12, 0.40, 0.24);
        let freq = (320.0 - 250.0 * (t / dur)).max(50.0) * pitch;
        let tone = sine(freq, t);
        let n = noise.next_sample() * envelope::exp_decay(t, dur, 1.4);
        mono.push((tone * 0.68 + n * 0.20) * env);
    }

    let mut out = auto_pan::apply(&mono, 0.28, 2.4, SR);
    delay::apply(&mut out, 0.10, 0.24, 0.20, SR)?;
    limiter::normalize(&mut out, 0.88);
    Ok(out)
}

/// Enemy death: the death figure in a higher register, quicker.
pub fn enemy_death(shot: &OneShot) -> SynthResult<StereoBuffer> {
    let frames = shot.frames()?;
    let dur = shot.duration_seconds;
    let pitch = shot.pitch();
    let mut noise = NoiseStream::new(shot.seed);

    let mut mono = Vec::with_capacity(frames);
    for i in 0..frames {
        let t = i as f64 / SR;
        let env = envelope::adsr(t, dur, 0.006, 0.09, 0.36, 0.16);
        let freq = (460.0 - 320.0 * (t / dur)).max(90.0) * pitch;
        let tone = sine(freq, t);
        let n = noise.next_sample() * envelope::exp_decay(t, dur, 1.6);
        mono.push((tone * 0.64 + n * 0.22) * env);
    }

    let mut out = auto_pan::apply(&mono, 0.24, 3.2, SR);
    delay::apply(&mut out, 0.08, 0.22, 0.18, SR)?;
    limiter::normalize(&mut out, 0.86);
    Ok(out)
}

/// Boss roar: a slow-wobbled low fundamental with growl partials and
/// breath noise.
pub fn boss_roar(shot: &OneShot) -> SynthResult<StereoBuffer> {
    let frames = shot.frames()?;
    let dur = shot.duration_seconds;
    let pitch = shot.pitch();
    let mut noise = NoiseStream::new(shot.seed);

    let mut mono = Vec::with_capacity(frames);
    for i in 0..frames {
        let t = i as f64 / SR;
        let env = envelope::adsr(t, dur, 0.04, 0.18, 0.60, 0.30);
        let wobble = sine(5.5, t);
        let fundamental = 82.0 * pitch * (1.0 + 0.06 * wobble);
        let growl = sine(fundamental, t) * 0.52
            + sine_phase(fundamental * 2.01, t, 0.7) * 0.26
            + sine_phase(fundamental * 2.99, t, 1.9) * 0.14;
        let breath = noise.next_sample() * 0.20;
        mono.push((growl + breath) * env);
    }

    let mut out = auto_pan::apply(&mono, 0.20, 1.8, SR);
    delay::apply(&mut out, 0.09, 0.26, 0.22, SR)?;
    limiter::normalize(&mut out, 0.90);
    Ok(out)
}

/// Boss death: a long descending sweep under a crumbling noise swell.
pub fn boss_death(shot: &OneShot) -> SynthResult<StereoBuffer> {
    let frames = shot.frames()?;
    let dur = shot.duration_seconds;
    let pitch = shot.pitch();
    let mut noise = NoiseStream::new(shot.seed);

    // Crumble swells in over the first 0.4 s, then rides the release.
    let swell = envelope::AdsrParams::pad(0.40, 0.50);

    let mut mono = Vec::with_capacity(frames);
    for i in 0..frames {
        let t = i as f64 / SR;
        let env = envelope::adsr(t, dur, 0.010, 0.30, 0.45, 0.50);
        let freq = (240.0 - 200.0 * (t / dur)).max(36.0) * pitch;
        let tone = sine(freq, t);
        let crumble = noise.next_sample() * swell.at(t, dur) * 0.30;
        mono.push((tone * 0.58 + crumble) * env);
    }

    let mut out = auto_pan::apply(&mono, 0.30, 1.2, SR);
    delay::apply(&mut out, 0.14, 0.30, 0.26, SR)?;
    limiter::normalize(&mut out, 0.90);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hurt_determinism() {
        let shot = OneShot::new(HURT_DURATION, 37);
        assert_eq!(hurt(&shot).unwrap(), hurt(&shot).unwrap());
    }

    #[test]
    fn test_death_frame_count_and_ceiling() {
        let out = death(&OneShot::new(DEATH_DURATION, 37)).unwrap();
        assert_eq!(out.len(), (DEATH_DURATION * SR) as usize);
        assert!(out.peak() <= 0.88 + 1e-6);
    }

    #[test]
    fn test_enemy_death_shorter_than_death() {
        let enemy = enemy_death(&OneShot::new(ENEMY_DEATH_DURATION, 37)).unwrap();
        let player = death(&OneShot::new(DEATH_DURATION, 37)).unwrap();
        assert!(enemy.len() < player.len());
    }

    #[test]
    fn test_boss_roar_peak_within_ceiling() {
        let out = boss_roar(&OneShot::new(BOSS_ROAR_DURATION, 7)).unwrap();
        assert!(out.peak() <= 0.90 + 1e-6);
    }

    #[test]
    fn test_boss_death_peak_within_ceiling() {
        let out = boss_death(&OneShot::new(BOSS_DEATH_DURATION, 7)).unwrap();
        assert!(out.peak() <= 0.90 + 1e-6);
    }

    #[test]
    fn test_seeds_change_noise_layers() {
        let a = boss_death(&OneShot::new(BOSS_DEATH_DURATION, 7)).unwrap();
        let b = boss_death(&OneShot::new(BOSS_DEATH_DURATION, 8)).unwrap();
        assert_ne!(a, b);
    }
}
