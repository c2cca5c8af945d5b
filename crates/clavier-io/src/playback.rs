//! Device-playable sample buffers.
//!
//! A [`PlaybackBuffer`] is what the core hands to a playback collaborator:
//! the chord samples plus the integer sample rate a device or file needs.
//! Quantization saturates: anything beyond ±1.0 is held at full scale.

use crate::{Error, Result};
use clavier_synth::Signal;
use std::sync::Arc;

/// Scale factor from [-1.0, 1.0] to signed 16-bit samples.
pub const I16_FULL_SCALE: f64 = 32767.0;

/// Convert one sample to 16-bit PCM, saturating outside [-1.0, 1.0].
///
/// Fractions are truncated toward zero. NaN maps to 0.
#[inline]
pub fn quantize_i16(sample: f64) -> i16 {
    (sample.clamp(-1.0, 1.0) * I16_FULL_SCALE) as i16
}

/// A finished chord ready for an audio device or file.
///
/// Samples are shared, so cloning the buffer or moving it into an audio
/// callback does not copy them.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackBuffer {
    samples: Arc<[f64]>,
    sample_rate: u32,
    duration: f64,
}

impl PlaybackBuffer {
    /// Build a buffer from raw samples.
    pub fn new(samples: impl Into<Arc<[f64]>>, sample_rate: u32) -> Self {
        let samples = samples.into();
        let duration = if sample_rate == 0 {
            0.0
        } else {
            samples.len() as f64 / sample_rate as f64
        };
        Self {
            samples,
            sample_rate,
            duration,
        }
    }

    /// Build a buffer from a synthesized signal.
    ///
    /// Fails if the signal's sample rate is not a whole number of Hz.
    pub fn from_signal(signal: &Signal) -> Result<Self> {
        let rate = signal.sample_rate();
        if rate.fract() != 0.0 || rate < 1.0 || rate > u32::MAX as f64 {
            return Err(Error::UnsupportedSampleRate(rate));
        }
        Ok(Self {
            samples: signal.samples().into(),
            sample_rate: rate as u32,
            duration: signal.duration(),
        })
    }

    /// Unquantized samples.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
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

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of samples that will saturate on output.
    pub fn clipped_samples(&self) -> usize {
        self.samples.iter().filter(|s| s.abs() > 1.0).count()
    }

    /// 16-bit PCM samples.
    pub fn to_i16(&self) -> Vec<i16> {
        self.samples.iter().map(|&s| quantize_i16(s)).collect()
    }

    /// f32 samples clamped to [-1.0, 1.0], for float devices and files.
    pub fn to_f32(&self) -> Vec<f32> {
        self.samples
            .iter()
            .map(|&s| s.clamp(-1.0, 1.0) as f32)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clavier_synth::{generate, mix};

    #[test]
    fn quantize_full_scale_and_truncation() {
        assert_eq!(quantize_i16(0.0), 0);
        assert_eq!(quantize_i16(1.0), 32767);
        assert_eq!(quantize_i16(-1.0), -32767);
        assert_eq!(quantize_i16(0.5), 16383);
        assert_eq!(quantize_i16(-0.5), -16383);
    }

    #[test]
    fn quantize_saturates() {
        assert_eq!(quantize_i16(2.5), 32767);
        assert_eq!(quantize_i16(-7.0), -32767);
        assert_eq!(quantize_i16(f64::NAN), 0);
    }

    #[test]
    fn from_signal_keeps_metadata() {
        let signal = generate(440.0, 0.5, 44100.0).unwrap();
        let buffer = PlaybackBuffer::from_signal(&signal).unwrap();
        assert_eq!(buffer.sample_rate(), 44100);
        assert_eq!(buffer.duration(), 0.5);
        assert_eq!(buffer.len(), 22050);
        assert_eq!(buffer.samples(), signal.samples());
    }

    #[test]
    fn from_signal_rejects_fractional_rate() {
        let signal = generate(440.0, 0.1, 44100.5).unwrap();
        assert!(matches!(
            PlaybackBuffer::from_signal(&signal),
            Err(Error::UnsupportedSampleRate(_))
        ));
    }

    #[test]
    fn loud_chord_reports_clipping() {
        let chord = mix(&[100.0, 100.0], 0.1, 8000.0).unwrap();
        let buffer = PlaybackBuffer::from_signal(&chord).unwrap();
        assert!(buffer.clipped_samples() > 0);
        assert!(buffer.to_i16().iter().all(|&s| s.abs() <= 32767));
        assert!(buffer.to_f32().iter().all(|&s| s.abs() <= 1.0));
    }

    #[test]
    fn new_computes_duration() {
        let buffer = PlaybackBuffer::new(vec![0.0; 4410], 44100);
        assert!((buffer.duration() - 0.1).abs() < 1e-12);
        assert!(!buffer.is_empty());
    }
}
