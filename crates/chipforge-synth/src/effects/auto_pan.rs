//! Mono-to-stereo panning modulation.

use crate::oscillator::{pan_split, sine};
use crate::stereo::StereoBuffer;

/// Spreads a mono buffer into stereo with an LFO-driven pan position.
///
/// Each frame's pan is `width * sin(2*pi*lfo_hz * frame/sample_rate)`,
/// applied through equal-power panning. Zero width or zero LFO rate yields
/// a centered image (constant pan of 0).
///
/// # Arguments
/// * `mono` - Mono source samples
/// * `width` - Maximum pan excursion (0.0 to 1.0)
/// * `lfo_hz` - Pan LFO rate in Hz
/// * `sample_rate` - Sample rate in Hz
///
/// # Returns
/// A stereo buffer of the same length
pub fn apply(mono: &[f64], width: f64, lfo_hz: f64, sample_rate: f64) -> StereoBuffer {
    let mut out = StereoBuffer::with_capacity(mono.len());
    let modulated = width > 0.0 && lfo_hz > 0.0;

    for (i, &value) in mono.iter().enumerate() {
        let pan = if modulated {
            width * sine(lfo_hz, i as f64 / sample_rate)
        } else {
            0.0
        };
        let (left, right) = pan_split(value, pan);
        out.push(left, right);
    }

    out
}
