//! Clavier Analysis - Display-ready views of synthesized chords
//!
//! This crate turns a sampled signal into what the plot window shows:
//!
//! - [`fft`] - FFT wrapper with windowing functions
//! - [`spectrum`] - magnitude spectrum, peaks, and centroid
//! - [`preview`] - the leading samples for the time-domain plot
//! - [`export`] - CSV and JSON writers for plotting tools
//!
//! The analyzer consumes plain `&[f64]` sample slices, so it works on any
//! source, not only clavier chords.
//!
//! ## Example
//!
//! ```rust,ignore
//! use clavier_analysis::{analyze, WaveformPreview, DEFAULT_PREVIEW_SAMPLES};
//!
//! let spectrum = analyze(chord.samples(), 44100.0)?;
//! for (freq, mag) in spectrum.peaks(0.3, 10.0) {
//!     println!("{freq:8.2} Hz  {mag:.3}");
//! }
//!
//! let preview = WaveformPreview::capture(chord.samples(), 44100.0, DEFAULT_PREVIEW_SAMPLES)?;
//! ```

pub mod error;
pub mod export;
pub mod fft;
pub mod preview;
pub mod spectrum;

// Re-export main types
pub use error::{AnalysisError, Result};
pub use fft::{Fft, Window, magnitude_db};
pub use preview::{DEFAULT_PREVIEW_SAMPLES, WaveformPreview};
pub use spectrum::{Spectrum, SpectrumAnalyzer, analyze};
