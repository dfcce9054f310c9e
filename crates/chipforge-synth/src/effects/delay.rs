//! Single-tap feedback delay.

use crate::error::{SynthError, SynthResult};
use crate::stereo::StereoBuffer;

/// Applies a causal feedback delay to stereo audio.
///
/// Each output frame is
/// `in * (1 - mix) + (in + feedback * out[frame - delay_n]) * mix`, where
/// the delayed tap reads the already-computed output buffer (zero before
/// the first tap). The recursion depends on earlier output frames, so the
/// buffer is filled in strictly increasing frame order.
///
/// # Arguments
/// * `stereo` - Stereo audio to process in-place
/// * `delay_seconds` - Tap distance in seconds
/// * `feedback` - Recursive gain (0.0 to 0.95; values at or above 1 diverge)
/// * `mix` - Wet mix (0.0 = dry passthrough, 1.0 = fully wet)
/// * `sample_rate` - Sample rate in Hz
pub fn apply(
    stereo: &mut StereoBuffer,
    delay_seconds: f64,
    feedback: f64,
    mix: f64,
    sample_rate: f64,
) -> SynthResult<()> {
    if !delay_seconds.is_finite() || delay_seconds <= 0.0 {
        return Err(SynthError::invalid_param(
            "delay.delay_seconds",
            format!("must be positive, got {}", delay_seconds),
        ));
    }
    if !(0.0..=0.95).contains(&feedback) {
        return Err(SynthError::invalid_param(
            "delay.feedback",
            format!("must be 0.0-0.95, got {}", feedback),
        ));
    }
    if !(0.0..=1.0).contains(&mix) {
        return Err(SynthError::invalid_param(
            "delay.mix",
            format!("must be 0.0-1.0, got {}", mix),
        ));
    }

    let delay_n = ((delay_seconds * sample_rate).round() as usize).max(1);
    let num_frames = stereo.len();
    let dry = 1.0 - mix;

    let mut out_left = vec![0.0; num_frames];
    let mut out_right = vec![0.0; num_frames];

    for i in 0..num_frames {
        let in_left = stereo.left[i];
        let in_right = stereo.right[i];

        let (prev_left, prev_right) = if i >= delay_n {
            (out_left[i - delay_n], out_right[i - delay_n])
        } else {
            (0.0, 0.0)
        };

        out_left[i] = in_left * dry + (in_left + prev_left * feedback) * mix;
        out_right[i] = in_right * dry + (in_right + prev_right * feedback) * mix;
    }

    stereo.left = out_left;
    stereo.right = out_right;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SR: f64 = 44_100.0;

    fn ramp_buffer(num_frames: usize) -> StereoBuffer {
        let mut buf = StereoBuffer::with_capacity(num_frames);
        for i in 0..num_frames {
            let v = (i as f64 + 1.0) / num_frames as f64;
            buf.push(v, -v * 0.5);
        }
        buf
    }

    #[test]
    fn test_zero_mix_is_dry_passthrough() {
        let original = ramp_buffer(256);
        let mut processed = original.clone();
        apply(&mut processed, 0.001, 0.5, 0.0, SR).unwrap();
        assert_eq!(processed, original);
    }

    #[test]
    fn test_zero_feedback_is_non_recursive() {
        // The delayed tap is scaled by feedback, so with feedback 0 the wet
        // path collapses to the direct signal and nothing recirculates.
        let mut buf = StereoBuffer::new(8);
        buf.left[0] = 1.0;
        buf.right[0] = 1.0;

        apply(&mut buf, 4.0 / SR, 0.0, 0.5, SR).unwrap();

        assert!((buf.left[0] - 1.0).abs() < 1e-12);
        for i in 1..8 {
            assert_eq!(buf.left[i], 0.0);
            assert_eq!(buf.right[i], 0.0);
        }
    }

    #[test]
    fn test_echo_tail_decays_with_feedback() {
        let mut buf = StereoBuffer::new(32);
        buf.left[0] = 1.0;
        buf.right[0] = 1.0;

        apply(&mut buf, 8.0 / SR, 0.5, 1.0, SR).unwrap();

        // Fully wet: out[0] = in + feedback * 0 = 1.0, then each tap
        // recirculates at half gain.
        assert!((buf.left[0] - 1.0).abs() < 1e-12);
        assert!((buf.left[8] - 0.5).abs() < 1e-12);
        assert!((buf.left[16] - 0.25).abs() < 1e-12);
        assert!((buf.left[24] - 0.125).abs() < 1e-12);
    }

    #[test]
    fn test_length_preserved() {
        let mut buf = ramp_buffer(1000);
        apply(&mut buf, 0.05, 0.3, 0.25, SR).unwrap();
        assert_eq!(buf.len(), 1000);
    }

    #[test]
    fn test_rejects_unstable_feedback() {
        let mut buf = ramp_buffer(16);
        assert!(apply(&mut buf, 0.01, 1.0, 0.5, SR).is_err());
        assert!(apply(&mut buf, 0.01, -0.1, 0.5, SR).is_err());
    }

    #[test]
    fn test_rejects_invalid_mix_and_time() {
        let mut buf = ramp_buffer(16);
        assert!(apply(&mut buf, 0.01, 0.3, 1.5, SR).is_err());
        assert!(apply(&mut buf, 0.0, 0.3, 0.5, SR).is_err());
        assert!(apply(&mut buf, -0.2, 0.3, 0.5, SR).is_err());
    }
}
