//! Audio output and orchestration for the clavier keyboard.
//!
//! This crate provides:
//!
//! - **Chord engine**: [`ChordEngine`] turns each change of the held-note set
//!   into a [`ChordFrame`] and hands it to the playback and visualization sinks
//! - **Playback contract**: [`PlaybackBuffer`] with 16-bit quantization
//! - **Sinks**: the [`PlaybackSink`] / [`VisualizationSink`] traits, a cpal
//!   device sink ([`CpalPlayback`]) and a WAV file sink ([`WavSink`])
//! - **WAV file I/O**: [`read_wav`] and [`write_wav`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use clavier_io::{ChordEngine, CpalPlayback, EngineSettings};
//! use clavier_synth::ActiveNoteSet;
//!
//! let mut engine = ChordEngine::new(EngineSettings::default())?
//!     .with_playback(Box::new(CpalPlayback::new(None)));
//!
//! let mut held = ActiveNoteSet::new();
//! held.toggle("A4".parse()?);
//! let frame = engine.on_active_set_changed(&held)?;
//! println!("peak at {:?}", frame.spectrum().peak());
//! ```

mod cpal_backend;
mod engine;
mod playback;
mod sink;
mod stream;
mod wav;

pub use cpal_backend::CpalPlayback;
pub use engine::{ChordEngine, ChordFrame, EngineSettings};
pub use playback::{I16_FULL_SCALE, PlaybackBuffer, quantize_i16};
pub use sink::{PlaybackSink, VisualizationSink};
pub use stream::{AudioDevice, default_output_device, list_output_devices};
pub use wav::{WavSink, WavSpec, read_wav, write_wav};

use clavier_analysis::AnalysisError;
use clavier_synth::SynthError;

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Note lookup or synthesis failed.
    #[error("synthesis error: {0}")]
    Synth(#[from] SynthError),

    /// Spectral analysis failed.
    #[error("analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// Audio stream setup or runtime error.
    #[error("Audio stream error: {0}")]
    Stream(String),

    /// No audio device available on the system.
    #[error("No audio device available")]
    NoDevice,

    /// The requested audio device was not found.
    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    /// Sample rate cannot be used by a device or file.
    #[error("Unsupported sample rate: {0}")]
    UnsupportedSampleRate(f64),

    /// Bit depth other than 16 (PCM) or 32 (float).
    #[error("Unsupported bit depth: {0}")]
    UnsupportedBitDepth(u16),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
