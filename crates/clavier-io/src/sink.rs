//! Collaborator boundaries for finished chords.
//!
//! The engine never talks to an audio device or a plot window directly. It
//! calls these traits, which keeps the synthesis pipeline testable with
//! in-memory sinks and lets the CLI pick devices, files, or console output at
//! runtime via `Box<dyn ...>`.

use crate::{ChordFrame, PlaybackBuffer, Result};

/// Receives chords to be heard.
pub trait PlaybackSink {
    /// Short name for log messages.
    fn name(&self) -> &'static str;

    /// Start playing `buffer`.
    ///
    /// A sink may return before playback finishes; a new call may cut off the
    /// previous chord.
    fn play(&mut self, buffer: &PlaybackBuffer) -> Result<()>;
}

/// Receives chords to be drawn.
pub trait VisualizationSink {
    /// Short name for log messages.
    fn name(&self) -> &'static str;

    /// Display the waveform preview and spectrum of `frame`.
    fn show(&mut self, frame: &ChordFrame) -> Result<()>;
}
