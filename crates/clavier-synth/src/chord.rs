//! Chord mixing: summing simultaneously held notes into one signal.
//!
//! The default [`MixPolicy::Sum`] adds tones without scaling, so a chord of
//! `k` notes can peak near `k`. Playback quantization saturates anything
//! outside [-1, 1]. [`MixPolicy::Normalize`] divides by the note count
//! instead and keeps the chord within range.

use crate::error::Result;
use crate::signal::{Signal, checked_sample_count};
use crate::waveform::generate;

/// How individual note signals are combined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MixPolicy {
    /// Plain sample-by-sample sum; amplitude grows with chord size.
    #[default]
    Sum,
    /// Sum divided by the number of notes.
    Normalize,
}

impl MixPolicy {
    /// Lowercase name, as used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            MixPolicy::Sum => "sum",
            MixPolicy::Normalize => "normalize",
        }
    }
}

/// Sum one sine per frequency into a single signal.
///
/// Equivalent to [`mix_with`] using [`MixPolicy::Sum`]. An empty frequency
/// list yields silence of the requested length.
///
/// # Example
///
/// ```rust
/// use clavier_synth::{generate, mix};
///
/// let single = mix(&[440.0], 0.1, 44100.0).unwrap();
/// assert_eq!(single, generate(440.0, 0.1, 44100.0).unwrap());
///
/// let silent = mix(&[], 0.1, 44100.0).unwrap();
/// assert!(silent.is_silent());
/// ```
pub fn mix(frequencies: &[f64], duration_s: f64, sample_rate_hz: f64) -> Result<Signal> {
    mix_with(frequencies, duration_s, sample_rate_hz, MixPolicy::Sum)
}

/// Sum one sine per frequency using an explicit [`MixPolicy`].
pub fn mix_with(
    frequencies: &[f64],
    duration_s: f64,
    sample_rate_hz: f64,
    policy: MixPolicy,
) -> Result<Signal> {
    checked_sample_count(duration_s, sample_rate_hz)?;

    let Some((&first, rest)) = frequencies.split_first() else {
        return Signal::silence(duration_s, sample_rate_hz);
    };

    // Seed with the first tone so a single-note chord is bit-identical to it.
    let mut combined = generate(first, duration_s, sample_rate_hz)?;
    for &frequency in rest {
        combined.accumulate(&generate(frequency, duration_s, sample_rate_hz)?);
    }

    if policy == MixPolicy::Normalize && frequencies.len() > 1 {
        combined.scale(1.0 / frequencies.len() as f64);
    }

    Ok(combined)
}
