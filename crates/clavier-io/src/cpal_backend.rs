//! Playback on a sound card via [cpal](https://crates.io/crates/cpal).
//!
//! [`CpalPlayback`] opens an output stream per chord. Starting a new chord
//! drops the previous stream, which cuts it off; the keyboard never layers two
//! chords on top of each other.

use crate::sink::PlaybackSink;
use crate::stream::{device_name, open_output_device};
use crate::{Error, PlaybackBuffer, Result};
use cpal::traits::{DeviceTrait, StreamTrait};
use cpal::{Device, Stream};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Extra time allowed past a chord's nominal duration in [`CpalPlayback::wait`].
const WAIT_SLACK: Duration = Duration::from_millis(500);

struct ActiveStream {
    _stream: Stream,
    finished: Arc<AtomicBool>,
    deadline: Instant,
}

/// Plays each chord once on an output device.
pub struct CpalPlayback {
    device_query: Option<String>,
    device: Option<Device>,
    current: Option<ActiveStream>,
}

impl CpalPlayback {
    /// Play on the device matching `device` (index, exact or partial name),
    /// or on the host default when `None`.
    ///
    /// The device is opened on the first chord.
    pub fn new(device: Option<String>) -> Self {
        Self {
            device_query: device,
            device: None,
            current: None,
        }
    }

    fn device(&mut self) -> Result<&Device> {
        if self.device.is_none() {
            let host = cpal::default_host();
            let device = open_output_device(&host, self.device_query.as_deref())?;
            tracing::info!(
                host = host.id().name(),
                device = %device_name(&device).unwrap_or_default(),
                "output device opened"
            );
            self.device = Some(device);
        }
        self.device.as_ref().ok_or(Error::NoDevice)
    }

    /// Whether the last chord has played to its end (or nothing was played).
    pub fn is_finished(&self) -> bool {
        self.current
            .as_ref()
            .is_none_or(|s| s.finished.load(Ordering::Acquire))
    }

    /// Block until the current chord has finished playing.
    ///
    /// Returns early once the chord's duration plus a short grace period has
    /// passed, in case the device stalls.
    pub fn wait(&self) {
        let Some(active) = &self.current else {
            return;
        };
        while !active.finished.load(Ordering::Acquire) && Instant::now() < active.deadline {
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    /// Cut off the current chord.
    pub fn stop(&mut self) {
        self.current = None;
    }
}

impl PlaybackSink for CpalPlayback {
    fn name(&self) -> &'static str {
        "cpal"
    }

    fn play(&mut self, buffer: &PlaybackBuffer) -> Result<()> {
        self.current = None;

        let device = self.device()?;
        let channels = device
            .default_output_config()
            .map(|c| c.channels())
            .map_err(|e| Error::Stream(e.to_string()))?
            .max(1);

        let stream_config = cpal::StreamConfig {
            channels,
            sample_rate: buffer.sample_rate(),
            buffer_size: cpal::BufferSize::Default,
        };

        let samples: Arc<[f32]> = buffer.to_f32().into();
        let finished = Arc::new(AtomicBool::new(samples.is_empty()));
        let mut position = 0usize;
        let frame_channels = usize::from(channels);

        let callback_samples = Arc::clone(&samples);
        let callback_finished = Arc::clone(&finished);
        let stream = device
            .build_output_stream(
                &stream_config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    for frame in data.chunks_mut(frame_channels) {
                        let value = callback_samples.get(position).copied().unwrap_or(0.0);
                        frame.fill(value);
                        position += 1;
                    }
                    if position >= callback_samples.len() {
                        callback_finished.store(true, Ordering::Release);
                    }
                },
                |err| tracing::error!(error = %err, "output stream error"),
                None,
            )
            .map_err(|e| Error::Stream(e.to_string()))?;

        stream.play().map_err(|e| Error::Stream(e.to_string()))?;
        tracing::info!(
            channels,
            sample_rate = buffer.sample_rate(),
            samples = buffer.len(),
            "output stream started"
        );

        self.current = Some(ActiveStream {
            _stream: stream,
            finished,
            deadline: Instant::now() + Duration::from_secs_f64(buffer.duration()) + WAIT_SLACK,
        });
        Ok(())
    }
}
