//! Time-domain preview of the start of a signal.

use crate::error::{Result, ensure_sample_rate};
use serde::Serialize;

/// Number of leading samples shown in the waveform plot.
pub const DEFAULT_PREVIEW_SAMPLES: usize = 2000;

/// The first few samples of a signal with their time stamps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaveformPreview {
    times: Vec<f64>,
    samples: Vec<f64>,
    sample_rate: f64,
}

impl WaveformPreview {
    /// Capture at most `max_samples` leading samples of `signal`.
    pub fn capture(signal: &[f64], sample_rate: f64, max_samples: usize) -> Result<Self> {
        let sample_rate = ensure_sample_rate(sample_rate)?;
        let samples = signal[..max_samples.min(signal.len())].to_vec();
        let times = (0..samples.len())
            .map(|i| i as f64 / sample_rate)
            .collect();
        Ok(Self {
            times,
            samples,
            sample_rate,
        })
    }

    /// Sample times in seconds from the start of the signal.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Sample values.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Sample rate of the source signal.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Number of samples in the preview.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the preview is empty.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Time span covered, in seconds.
    pub fn span(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate
    }

    /// Smallest and largest sample values, for plot scaling.
    pub fn range(&self) -> Option<(f64, f64)> {
        let mut iter = self.samples.iter().copied();
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), s| (lo.min(s), hi.max(s))))
    }
}
