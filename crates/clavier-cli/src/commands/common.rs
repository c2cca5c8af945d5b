//! Shared CLI helpers used across multiple commands.

use anyhow::Context;
use clap::Args;
use clavier_analysis::{Spectrum, Window};
use clavier_config::ClavierConfig;
use clavier_io::EngineSettings;
use clavier_synth::{ActiveNoteSet, MixPolicy};
use std::path::PathBuf;

/// Minimum linear magnitude for a bin to be reported as a peak.
pub const PEAK_THRESHOLD: f64 = 0.05;

/// Peaks closer than this are merged into the stronger one.
pub const PEAK_MIN_DISTANCE_HZ: f64 = 10.0;

/// Synthesis options shared by every command that builds chords.
///
/// Flags override the configuration file, which overrides built-in defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct SynthArgs {
    /// Configuration file (defaults to the user config, if present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Sample rate in Hz
    #[arg(long)]
    pub sample_rate: Option<u32>,

    /// Chord duration in seconds
    #[arg(short, long)]
    pub duration: Option<f64>,

    /// Divide the chord by its note count instead of summing raw
    #[arg(long)]
    pub normalize: bool,

    /// Analysis window (rectangular, hann, hamming, blackman)
    #[arg(long, default_value = "rectangular", value_parser = parse_window)]
    pub window: Window,
}

impl SynthArgs {
    /// Load the configuration file and apply flag overrides.
    pub fn load_config(&self) -> anyhow::Result<ClavierConfig> {
        let mut config = match &self.config {
            Some(path) => ClavierConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => ClavierConfig::load_or_default()?,
        };

        if let Some(rate) = self.sample_rate {
            config.sample_rate = rate;
        }
        if let Some(duration) = self.duration {
            config.duration_secs = duration;
        }
        if self.normalize {
            config.mix_policy = MixPolicy::Normalize;
        }

        config.validate()?;
        tracing::debug!(?config, "configuration resolved");
        Ok(config)
    }

    /// Engine settings from the resolved configuration.
    pub fn engine_settings(&self, config: &ClavierConfig) -> EngineSettings {
        EngineSettings {
            sample_rate: config.sample_rate,
            duration_secs: config.duration_secs,
            mix_policy: config.mix_policy,
            preview_samples: config.preview_samples,
            window: self.window,
        }
    }
}

/// Parse a window name for clap's `value_parser`.
pub fn parse_window(s: &str) -> Result<Window, String> {
    Window::from_name(s).ok_or_else(|| {
        format!(
            "Unknown window '{}' (expected rectangular, hann, hamming or blackman)",
            s
        )
    })
}

/// Parse note identifiers into a held-note set.
pub fn parse_notes(ids: &[String]) -> anyhow::Result<ActiveNoteSet> {
    ActiveNoteSet::from_ids(ids).context("Use 'clavier notes' to see valid identifiers")
}

/// Print the strongest spectral peaks, one per line.
pub fn print_peaks(spectrum: &Spectrum, count: usize) {
    let peaks = spectrum.peaks(PEAK_THRESHOLD, PEAK_MIN_DISTANCE_HZ);
    if peaks.is_empty() {
        println!("  (no peaks above {PEAK_THRESHOLD})");
        return;
    }
    for (freq, mag) in peaks.into_iter().take(count) {
        println!("  {:>10.2} Hz  {:.4}", freq, mag);
    }
}
