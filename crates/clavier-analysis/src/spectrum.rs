//! Magnitude spectrum of a sampled signal, ready for display.
//!
//! The whole signal is transformed in one FFT of length `N`. Only the first
//! `N / 2` bins are kept (the input is real, so the upper half mirrors the
//! lower), each scaled by `2 / N` so a unit-amplitude sine centred on a bin
//! reads 1.0 regardless of signal length. The frequency axis holds `N / 2`
//! evenly spaced points from 0 Hz up to and including Nyquist.

use crate::error::{Result, ensure_sample_rate};
use crate::fft::{Fft, Window, magnitude_db};
use serde::Serialize;

/// Paired frequency axis and magnitudes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Spectrum {
    frequencies: Vec<f64>,
    magnitudes: Vec<f64>,
    sample_rate: f64,
    fft_size: usize,
}

impl Spectrum {
    /// Frequency axis in Hz, ascending from 0 to Nyquist.
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Normalized magnitudes, one per frequency.
    pub fn magnitudes(&self) -> &[f64] {
        &self.magnitudes
    }

    /// Magnitudes in dBFS (floored at -200 dB).
    pub fn magnitudes_db(&self) -> Vec<f64> {
        magnitude_db(&self.magnitudes)
    }

    /// Sample rate of the analyzed signal.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Number of samples transformed.
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Nyquist frequency (half the sample rate).
    pub fn nyquist(&self) -> f64 {
        self.sample_rate / 2.0
    }

    /// DFT resolution, `sample_rate / N`.
    pub fn bin_width(&self) -> f64 {
        if self.fft_size == 0 {
            0.0
        } else {
            self.sample_rate / self.fft_size as f64
        }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    /// Whether the spectrum has no points.
    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    /// Iterate `(frequency, magnitude)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.frequencies
            .iter()
            .copied()
            .zip(self.magnitudes.iter().copied())
    }

    /// Index of the point closest to `freq_hz`.
    pub fn nearest_bin(&self, freq_hz: f64) -> Option<usize> {
        match self.len() {
            0 => None,
            1 => Some(0),
            len => {
                let step = self.nyquist() / (len - 1) as f64;
                let index = (freq_hz / step).round().clamp(0.0, (len - 1) as f64);
                Some(index as usize)
            }
        }
    }

    /// Magnitude at the point closest to `freq_hz`.
    pub fn magnitude_at(&self, freq_hz: f64) -> Option<f64> {
        self.nearest_bin(freq_hz).map(|i| self.magnitudes[i])
    }

    /// The dominant `(frequency, magnitude)` pair.
    ///
    /// Ties resolve to the lowest frequency.
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.iter()
            .fold(None, |best: Option<(f64, f64)>, (f, m)| match best {
                Some((_, best_m)) if best_m >= m => best,
                _ => Some((f, m)),
            })
    }

    /// Local maxima above `threshold` (linear magnitude).
    ///
    /// Returns `(frequency, magnitude)` pairs sorted by descending magnitude.
    /// A candidate closer than `min_distance_hz` to a stronger peak is dropped.
    pub fn peaks(&self, threshold: f64, min_distance_hz: f64) -> Vec<(f64, f64)> {
        let mags = &self.magnitudes;
        let mut candidates: Vec<(f64, f64)> = (1..mags.len().saturating_sub(1))
            .filter(|&i| mags[i] > threshold && mags[i] > mags[i - 1] && mags[i] >= mags[i + 1])
            .map(|i| (self.frequencies[i], mags[i]))
            .collect();

        candidates.sort_by(|a, b| b.1.total_cmp(&a.1));

        let mut peaks: Vec<(f64, f64)> = Vec::new();
        for (freq, mag) in candidates {
            if peaks.iter().all(|(f, _)| (f - freq).abs() >= min_distance_hz) {
                peaks.push((freq, mag));
            }
        }
        peaks
    }

    /// Magnitude-weighted mean frequency in Hz (0.0 for a silent spectrum).
    pub fn centroid(&self) -> f64 {
        let total: f64 = self.magnitudes.iter().sum();
        if total > 1e-12 {
            self.iter().map(|(f, m)| f * m).sum::<f64>() / total
        } else {
            0.0
        }
    }
}

/// Spectrum analyzer with an optional analysis window.
///
/// The default rectangular window reproduces the plain `2/N · |X[k]|`
/// normalization exactly. Other windows divide by their coherent gain so a
/// bin-centred sine still reads its true amplitude.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpectrumAnalyzer {
    window: Window,
}

impl SpectrumAnalyzer {
    /// Create an analyzer with a rectangular window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different analysis window.
    pub fn with_window(mut self, window: Window) -> Self {
        self.window = window;
        self
    }

    /// Analysis window in use.
    pub fn window(&self) -> Window {
        self.window
    }

    /// Compute the display spectrum of `samples` taken at `sample_rate` Hz.
    ///
    /// The input is not modified. An empty input gives an empty spectrum.
    pub fn analyze(&self, samples: &[f64], sample_rate: f64) -> Result<Spectrum> {
        let sample_rate = ensure_sample_rate(sample_rate)?;
        let n = samples.len();
        let half = n / 2;

        if n == 0 {
            return Ok(Spectrum {
                frequencies: Vec::new(),
                magnitudes: Vec::new(),
                sample_rate,
                fft_size: 0,
            });
        }

        let bins = if self.window == Window::Rectangular {
            Fft::new(n).forward(samples)
        } else {
            let mut windowed = samples.to_vec();
            self.window.apply(&mut windowed);
            Fft::new(n).forward(&windowed)
        };

        let scale = 2.0 / n as f64;
        let gain = self.window.coherent_gain(n);
        let magnitudes = bins[..half]
            .iter()
            .map(|c| scale * c.norm() / gain)
            .collect();

        Ok(Spectrum {
            frequencies: frequency_axis(half, sample_rate / 2.0),
            magnitudes,
            sample_rate,
            fft_size: n,
        })
    }
}

/// Compute the display spectrum with a rectangular window.
///
/// # Example
///
/// ```rust
/// use clavier_analysis::analyze;
/// use std::f64::consts::TAU;
///
/// let tone: Vec<f64> = (0..1000).map(|i| (TAU * 50.0 * i as f64 / 1000.0).sin()).collect();
/// let spectrum = analyze(&tone, 1000.0).unwrap();
/// let (freq, mag) = spectrum.peak().unwrap();
/// assert!((freq - 50.0).abs() < 1.0);
/// assert!((mag - 1.0).abs() < 1e-9);
/// ```
pub fn analyze(samples: &[f64], sample_rate: f64) -> Result<Spectrum> {
    SpectrumAnalyzer::new().analyze(samples, sample_rate)
}

/// `count` evenly spaced points from 0 to `stop`, both ends included.
fn frequency_axis(count: usize, stop: f64) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let last = (count - 1) as f64;
            (0..count).map(|i| stop * i as f64 / last).collect()
        }
    }
}
