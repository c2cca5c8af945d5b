//! Sine tone generation.
//!
//! Each tone is sampled on a half-open time grid `t_i = i * duration / N`
//! for `i` in `0..N`, where `N = round(sample_rate * duration)`. The instant
//! `duration` itself is never sampled, so back-to-back calls join without a
//! repeated sample.

use crate::error::{Result, ensure_positive};
use crate::signal::{Signal, checked_sample_count};
use std::f64::consts::TAU;

/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: f64 = 44100.0;

/// Default tone duration in seconds.
pub const DEFAULT_DURATION: f64 = 1.0;

/// Generate `sin(2π·f·t)` for `duration_s` seconds at `sample_rate_hz`.
///
/// All three parameters must be finite and strictly positive, and the signal
/// may hold at most [`MAX_SAMPLES`](crate::MAX_SAMPLES) samples; anything else
/// is rejected with [`SynthError::InvalidParameter`](crate::SynthError::InvalidParameter).
/// The output depends only on the arguments.
///
/// # Example
///
/// ```rust
/// use clavier_synth::generate;
///
/// let tone = generate(440.0, 1.0, 44100.0).unwrap();
/// assert_eq!(tone.len(), 44100);
/// assert_eq!(tone.samples()[0], 0.0);
/// ```
pub fn generate(frequency_hz: f64, duration_s: f64, sample_rate_hz: f64) -> Result<Signal> {
    let frequency = ensure_positive("frequency", frequency_hz)?;
    let n = checked_sample_count(duration_s, sample_rate_hz)?;
    let step = duration_s / n.max(1) as f64;
    let omega = TAU * frequency;

    let samples = (0..n).map(|i| (omega * (i as f64 * step)).sin()).collect();
    Ok(Signal::from_parts(samples, duration_s, sample_rate_hz))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SynthError;

    #[test]
    fn length_matches_rate_times_duration() {
        assert_eq!(generate(440.0, 1.0, 44100.0).unwrap().len(), 44100);
        assert_eq!(generate(440.0, 0.5, 48000.0).unwrap().len(), 24000);
        assert_eq!(generate(100.0, 0.3, 1000.0).unwrap().len(), 300);
    }

    #[test]
    fn starts_at_zero_phase() {
        let s = generate(1000.0, 0.01, 48000.0).unwrap();
        assert_eq!(s.samples()[0], 0.0);
    }

    #[test]
    fn quarter_period_reaches_peak() {
        // 1 Hz at 4 Hz sampling: 0, 1, 0, -1
        let s = generate(1.0, 1.0, 4.0).unwrap();
        let expected = [0.0, 1.0, 0.0, -1.0];
        for (got, want) in s.samples().iter().zip(expected) {
            assert!((got - want).abs() < 1e-12, "{got} vs {want}");
        }
    }

    #[test]
    fn half_open_grid_excludes_end() {
        // With one cycle per duration, the sample at t = duration would be 0 again;
        // the last sample must be one step before it.
        let s = generate(1.0, 1.0, 8.0).unwrap();
        let last = *s.samples().last().unwrap();
        let expected = (TAU * 7.0 / 8.0).sin();
        assert!((last - expected).abs() < 1e-12);
    }

    #[test]
    fn amplitude_within_unit_range() {
        let s = generate(261.63, 1.0, 44100.0).unwrap();
        assert!(s.peak_amplitude() <= 1.0);
        assert!(s.peak_amplitude() > 0.99);
    }

    #[test]
    fn deterministic() {
        let a = generate(329.63, 0.2, 44100.0).unwrap();
        let b = generate(329.63, 0.2, 44100.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_non_positive_parameters() {
        assert!(matches!(
            generate(0.0, 1.0, 44100.0),
            Err(SynthError::InvalidParameter { name: "frequency", .. })
        ));
        assert!(matches!(
            generate(440.0, -1.0, 44100.0),
            Err(SynthError::InvalidParameter { name: "duration", .. })
        ));
        assert!(matches!(
            generate(440.0, 1.0, 0.0),
            Err(SynthError::InvalidParameter { name: "sample_rate", .. })
        ));
        assert!(generate(f64::NAN, 1.0, 44100.0).is_err());
    }

    #[test]
    fn rejects_oversized_signal() {
        assert!(matches!(
            generate(440.0, 1e300, 44100.0),
            Err(SynthError::InvalidParameter { name: "duration", .. })
        ));
        assert!(matches!(
            generate(440.0, 1.0, 1e12),
            Err(SynthError::InvalidParameter { name: "duration", .. })
        ));
    }

    #[test]
    fn tiny_duration_gives_empty_signal() {
        let s = generate(440.0, 1e-6, 44100.0).unwrap();
        assert!(s.is_empty());
    }
}
