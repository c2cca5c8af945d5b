//! WAV file reading and writing.

use crate::sink::PlaybackSink;
use crate::{Error, PlaybackBuffer, Result};
use hound::{SampleFormat, WavReader, WavWriter};
use std::path::{Path, PathBuf};

/// WAV file specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavSpec {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz (e.g., 44100, 48000).
    pub sample_rate: u32,
    /// Bit depth per sample (16 = PCM, 32 = float).
    pub bits_per_sample: u16,
}

impl Default for WavSpec {
    fn default() -> Self {
        Self {
            channels: 1,
            sample_rate: 44100,
            bits_per_sample: 16,
        }
    }
}

impl From<hound::WavSpec> for WavSpec {
    fn from(spec: hound::WavSpec) -> Self {
        Self {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
        }
    }
}

/// Read a WAV file and return samples as f64 along with the spec.
///
/// Multi-channel files are mixed down to mono by averaging channels.
/// Integer samples are scaled so full scale maps to ±1.0.
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<(Vec<f64>, WavSpec)> {
    let reader = WavReader::open(path)?;
    let spec = WavSpec::from(reader.spec());
    let channels = spec.channels.max(1) as usize;

    let samples: Vec<f64> = match reader.spec().sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<std::result::Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let max_val = ((1i64 << (spec.bits_per_sample - 1)) - 1) as f64;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f64 / max_val))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };

    let mono = if channels > 1 {
        samples
            .chunks(channels)
            .map(|chunk| chunk.iter().sum::<f64>() / channels as f64)
            .collect()
    } else {
        samples
    };

    Ok((mono, spec))
}

/// Write a playback buffer to a mono WAV file.
///
/// 16-bit files use [`quantize_i16`](crate::quantize_i16); 32-bit files store
/// clamped IEEE floats. Other depths are rejected.
pub fn write_wav<P: AsRef<Path>>(
    path: P,
    buffer: &PlaybackBuffer,
    bits_per_sample: u16,
) -> Result<()> {
    let sample_format = match bits_per_sample {
        16 => SampleFormat::Int,
        32 => SampleFormat::Float,
        other => return Err(Error::UnsupportedBitDepth(other)),
    };
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: buffer.sample_rate(),
        bits_per_sample,
        sample_format,
    };

    let mut writer = WavWriter::create(path, spec)?;
    if sample_format == SampleFormat::Float {
        for sample in buffer.to_f32() {
            writer.write_sample(sample)?;
        }
    } else {
        for sample in buffer.to_i16() {
            writer.write_sample(sample)?;
        }
    }

    writer.finalize()?;
    Ok(())
}

/// Playback sink that renders each chord to a WAV file.
///
/// Every call to [`PlaybackSink::play`] overwrites the file, so it always
/// holds the most recent chord.
#[derive(Debug, Clone)]
pub struct WavSink {
    path: PathBuf,
    bits_per_sample: u16,
    written: usize,
}

impl WavSink {
    /// Render to `path` at the given bit depth (16 or 32).
    pub fn new(path: impl Into<PathBuf>, bits_per_sample: u16) -> Result<Self> {
        if !matches!(bits_per_sample, 16 | 32) {
            return Err(Error::UnsupportedBitDepth(bits_per_sample));
        }
        Ok(Self {
            path: path.into(),
            bits_per_sample,
            written: 0,
        })
    }

    /// Output path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of chords written so far.
    pub fn written(&self) -> usize {
        self.written
    }
}

impl PlaybackSink for WavSink {
    fn name(&self) -> &'static str {
        "wav"
    }

    fn play(&mut self, buffer: &PlaybackBuffer) -> Result<()> {
        write_wav(&self.path, buffer, self.bits_per_sample)?;
        self.written += 1;
        tracing::debug!(
            path = %self.path.display(),
            samples = buffer.len(),
            "chord rendered to WAV"
        );
        Ok(())
    }
}
