//! Peak normalization with soft clipping.

use crate::stereo::StereoBuffer;

/// Drive factor of the tanh soft clipper.
const DRIVE: f64 = 1.7;

/// Floor for the normalization divisor, guarding near-silent buffers.
const MIN_PEAK: f64 = 1e-6;

/// Bounded tanh nonlinearity: `tanh(1.7 * x) / tanh(1.7)`.
///
/// Maps the real line into (-1.022, 1.022) scaled back so that +/-1 maps
/// to +/-1, compressing near-ceiling excursions instead of hard-truncating
/// them.
#[inline]
pub fn soft_clip(sample: f64) -> f64 {
    (sample * DRIVE).tanh() / DRIVE.tanh()
}

/// Inverse of [`soft_clip`] for targets inside the clipper's range.
#[inline]
fn soft_clip_inverse(value: f64) -> f64 {
    (value * DRIVE.tanh()).atanh() / DRIVE
}

/// Normalizes a stereo buffer so its peak lands on `ceiling`, then soft
/// clips every sample.
///
/// The scan covers both channels. The gain is pre-compensated through the
/// clipper's inverse so the loudest sample comes out exactly at the ceiling
/// after the nonlinearity; everything else is compressed below it. The
/// divisor is floored at `MIN_PEAK`, so an all-zero buffer passes through
/// unchanged.
///
/// # Arguments
/// * `stereo` - Stereo audio to process in-place
/// * `ceiling` - Target peak after the clipper (0.0 to 1.0, e.g. 0.90)
pub fn normalize(stereo: &mut StereoBuffer, ceiling: f64) {
    let ceiling = ceiling.clamp(0.0, 1.0);
    let peak = stereo.peak().max(MIN_PEAK);
    let scale = soft_clip_inverse(ceiling) / peak;

    for sample in stereo.left.iter_mut().chain(stereo.right.iter_mut()) {
        *sample = soft_clip(*sample * scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soft_clip_bounded() {
        for x in [-100.0, -2.0, -1.0, 0.0, 1.0, 2.0, 100.0] {
            let y = soft_clip(x);
            assert!(y.abs() <= 1.0 / DRIVE.tanh() + 1e-12);
        }
    }

    #[test]
    fn test_soft_clip_fixed_points() {
        assert_eq!(soft_clip(0.0), 0.0);
        assert!((soft_clip(1.0) - 1.0).abs() < 1e-12);
        assert!((soft_clip(-1.0) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_soft_clip_odd_and_monotonic() {
        let mut prev = f64::NEG_INFINITY;
        for i in -50..=50 {
            let x = i as f64 / 10.0;
            let y = soft_clip(x);
            assert!(y >= prev);
            assert!((soft_clip(-x) + y).abs() < 1e-12);
            prev = y;
        }
    }

    #[test]
    fn test_soft_clip_inverse_roundtrip() {
        for y in [0.1, 0.5, 0.8, 0.9, 0.95] {
            let x = soft_clip_inverse(y);
            assert!((soft_clip(x) - y).abs() < 1e-12);
        }
    }

    #[test]
    fn test_normalize_hits_ceiling() {
        let mut buf = StereoBuffer::from_mono(vec![0.1, -0.4, 0.25, 0.05]);
        normalize(&mut buf, 0.90);
        let peak = buf.peak();
        assert!((peak - 0.90).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_scales_down_hot_signal() {
        let mut buf = StereoBuffer::from_mono(vec![3.0, -7.5, 2.0]);
        normalize(&mut buf, 0.88);
        assert!(buf.peak() <= 0.88 + 1e-9);
    }

    #[test]
    fn test_normalize_all_zero_stays_zero() {
        let mut buf = StereoBuffer::new(128);
        normalize(&mut buf, 0.90);
        assert!(buf.left.iter().all(|&s| s == 0.0));
        assert!(buf.right.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_normalize_uses_peak_of_both_channels() {
        let mut buf = StereoBuffer::with_capacity(2);
        buf.push(0.1, -2.0);
        buf.push(0.05, 0.5);
        normalize(&mut buf, 0.80);
        assert!((buf.peak() - 0.80).abs() < 1e-9);
        // The quiet left channel stays well under the ceiling.
        assert!(buf.left.iter().all(|&s| s.abs() < 0.80));
    }
}
