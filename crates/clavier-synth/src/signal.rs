//! Sampled real-valued signals.

use crate::error::{Result, SynthError, ensure_positive};

/// Largest buffer any synthesis call allocates, about six minutes at 44.1 kHz.
pub const MAX_SAMPLES: usize = 1 << 24;

/// Number of samples covering `duration_s` at `sample_rate_hz`.
///
/// Rounds to the nearest integer, so 1.0 s at 44100 Hz is exactly 44100
/// samples.
pub fn sample_count(duration_s: f64, sample_rate_hz: f64) -> usize {
    (duration_s * sample_rate_hz).round() as usize
}

/// Validate a duration and rate, returning the sample count they cover.
///
/// Both must be finite and strictly positive, and the resulting buffer must
/// not exceed [`MAX_SAMPLES`]. An oversized request is reported against
/// `duration`.
pub fn checked_sample_count(duration_s: f64, sample_rate_hz: f64) -> Result<usize> {
    let duration = ensure_positive("duration", duration_s)?;
    let sample_rate = ensure_positive("sample_rate", sample_rate_hz)?;
    if (duration * sample_rate).round() > MAX_SAMPLES as f64 {
        return Err(SynthError::InvalidParameter {
            name: "duration",
            value: duration,
        });
    }
    Ok(sample_count(duration, sample_rate))
}

/// A uniformly sampled waveform of fixed duration.
///
/// Samples are nominally in [-1.0, 1.0]; a raw chord sum may exceed that
/// range, which [`Signal::exceeds_unit_range`] reports.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    samples: Vec<f64>,
    sample_rate: f64,
    duration: f64,
}

impl Signal {
    /// Wrap existing samples.
    ///
    /// The caller guarantees `samples.len() == sample_count(duration, sample_rate)`.
    pub(crate) fn from_parts(samples: Vec<f64>, duration: f64, sample_rate: f64) -> Self {
        debug_assert_eq!(samples.len(), sample_count(duration, sample_rate));
        Self {
            samples,
            sample_rate,
            duration,
        }
    }

    /// All-zero signal of the given duration.
    pub fn silence(duration_s: f64, sample_rate_hz: f64) -> Result<Self> {
        let n = checked_sample_count(duration_s, sample_rate_hz)?;
        Ok(Self::from_parts(vec![0.0; n], duration_s, sample_rate_hz))
    }

    /// Sample values.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Consume the signal, returning its samples.
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Duration in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the signal has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Leading samples, at most `max_samples` of them.
    pub fn head(&self, max_samples: usize) -> &[f64] {
        &self.samples[..max_samples.min(self.samples.len())]
    }

    /// Largest absolute sample value (0.0 for an empty signal).
    pub fn peak_amplitude(&self) -> f64 {
        self.samples.iter().fold(0.0, |peak, s| peak.max(s.abs()))
    }

    /// Whether any sample lies outside [-1.0, 1.0].
    pub fn exceeds_unit_range(&self) -> bool {
        self.peak_amplitude() > 1.0
    }

    /// Whether every sample is exactly zero.
    pub fn is_silent(&self) -> bool {
        self.samples.iter().all(|&s| s == 0.0)
    }

    /// Scale every sample in place.
    pub(crate) fn scale(&mut self, gain: f64) {
        for s in &mut self.samples {
            *s *= gain;
        }
    }

    /// Add another signal of the same length sample-by-sample.
    pub(crate) fn accumulate(&mut self, other: &Signal) {
        debug_assert_eq!(self.samples.len(), other.samples.len());
        for (acc, &s) in self.samples.iter_mut().zip(&other.samples) {
            *acc += s;
        }
    }
}

impl AsRef<[f64]> for Signal {
    fn as_ref(&self) -> &[f64] {
        &self.samples
    }
}
