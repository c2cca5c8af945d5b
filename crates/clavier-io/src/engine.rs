//! Chord engine: one synchronous recompute per key event.

use crate::sink::{PlaybackSink, VisualizationSink};
use crate::{Error, PlaybackBuffer, Result};
use clavier_analysis::{
    DEFAULT_PREVIEW_SAMPLES, Spectrum, SpectrumAnalyzer, WaveformPreview, Window,
};
use clavier_synth::{
    ActiveNoteSet, MixPolicy, Note, NoteTable, Signal, checked_sample_count, mix_with,
};

/// Parameters for each recompute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineSettings {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Chord length in seconds.
    pub duration_secs: f64,
    /// How held notes are combined.
    pub mix_policy: MixPolicy,
    /// Leading samples kept for the waveform plot.
    pub preview_samples: usize,
    /// Analysis window applied before the FFT.
    pub window: Window,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            duration_secs: 1.0,
            mix_policy: MixPolicy::Sum,
            preview_samples: DEFAULT_PREVIEW_SAMPLES,
            window: Window::Rectangular,
        }
    }
}

impl EngineSettings {
    fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(Error::UnsupportedSampleRate(0.0));
        }
        checked_sample_count(self.duration_secs, f64::from(self.sample_rate))?;
        Ok(())
    }
}

/// Everything produced by one recompute.
#[derive(Debug, Clone)]
pub struct ChordFrame {
    notes: Vec<Note>,
    frequencies: Vec<f64>,
    signal: Signal,
    preview: WaveformPreview,
    spectrum: Spectrum,
}

impl ChordFrame {
    /// Held notes, in ascending pitch order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Frequencies of the held notes, parallel to [`notes`](Self::notes).
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// The combined chord signal.
    pub fn signal(&self) -> &Signal {
        &self.signal
    }

    /// Leading samples for the time-domain plot.
    pub fn preview(&self) -> &WaveformPreview {
        &self.preview
    }

    /// Magnitude spectrum of the whole signal.
    pub fn spectrum(&self) -> &Spectrum {
        &self.spectrum
    }

    /// Whether no notes were held.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// The signal as a device-playable buffer.
    pub fn playback_buffer(&self) -> Result<PlaybackBuffer> {
        PlaybackBuffer::from_signal(&self.signal)
    }
}

/// Turns held-note snapshots into chords and routes them to the sinks.
///
/// The engine holds no note state of its own; callers own the
/// [`ActiveNoteSet`] and pass a snapshot on every change.
pub struct ChordEngine {
    table: &'static NoteTable,
    settings: EngineSettings,
    analyzer: SpectrumAnalyzer,
    playback: Option<Box<dyn PlaybackSink>>,
    visualization: Option<Box<dyn VisualizationSink>>,
}

impl ChordEngine {
    /// Create an engine with no sinks attached.
    pub fn new(settings: EngineSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            table: NoteTable::standard(),
            settings,
            analyzer: SpectrumAnalyzer::new().with_window(settings.window),
            playback: None,
            visualization: None,
        })
    }

    /// Attach a playback sink.
    pub fn with_playback(mut self, sink: Box<dyn PlaybackSink>) -> Self {
        self.playback = Some(sink);
        self
    }

    /// Attach a visualization sink.
    pub fn with_visualization(mut self, sink: Box<dyn VisualizationSink>) -> Self {
        self.visualization = Some(sink);
        self
    }

    /// Current settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Synthesize and analyze a chord without touching any sink.
    ///
    /// An empty set yields a silent frame of full length.
    pub fn render(&self, held: &ActiveNoteSet) -> Result<ChordFrame> {
        let notes: Vec<Note> = held.iter().collect();
        let frequencies = held.frequencies(self.table);
        let sample_rate = f64::from(self.settings.sample_rate);

        let signal = mix_with(
            &frequencies,
            self.settings.duration_secs,
            sample_rate,
            self.settings.mix_policy,
        )?;
        let preview =
            WaveformPreview::capture(signal.samples(), sample_rate, self.settings.preview_samples)?;
        let spectrum = self.analyzer.analyze(signal.samples(), sample_rate)?;

        Ok(ChordFrame {
            notes,
            frequencies,
            signal,
            preview,
            spectrum,
        })
    }

    /// Recompute after a key press or release.
    ///
    /// The visualization sink sees every frame. The playback sink is skipped
    /// when nothing is held.
    pub fn on_active_set_changed(&mut self, held: &ActiveNoteSet) -> Result<ChordFrame> {
        let frame = self.render(held)?;
        let peak = frame.signal.peak_amplitude();
        tracing::debug!(notes = frame.notes.len(), peak, "chord recomputed");
        if frame.signal.exceeds_unit_range() {
            tracing::warn!(
                notes = frame.notes.len(),
                peak,
                policy = self.settings.mix_policy.name(),
                "chord exceeds [-1, 1], playback will clip"
            );
        }

        if let Some(sink) = self.visualization.as_mut() {
            sink.show(&frame)?;
        }

        if !frame.is_empty()
            && let Some(sink) = self.playback.as_mut()
        {
            let buffer = frame.playback_buffer()?;
            tracing::debug!(
                sink = sink.name(),
                samples = buffer.len(),
                "sending chord to playback"
            );
            sink.play(&buffer)?;
        }

        Ok(frame)
    }
}
