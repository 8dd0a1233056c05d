//! cpal capture backend.
//!
//! Opens the system default input device with the exact format the core
//! asks for (f32, mono, 16 kHz at the defaults) and delivers input
//! buffers via the `FrameCallback`. There is no format negotiation or
//! fallback: a device that cannot do the requested configuration fails
//! at open.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

use mic_capture_core::models::config::DeviceConfig;
use mic_capture_core::models::error::CaptureError;
use mic_capture_core::traits::capture_backend::{CaptureBackend, FrameCallback};

/// Capture backend for the default input device of the default host.
///
/// The stream is built at `open` and kept paused until `start`.
/// `cpal::Stream` is not `Send` on every platform, so the backend (and
/// the session owning it) stays on the thread that created it; the
/// cpal callback itself runs on cpal's audio thread.
pub struct CpalBackend {
    host: cpal::Host,
    stream: Option<cpal::Stream>,
}

impl CpalBackend {
    pub fn new() -> Self {
        Self {
            host: cpal::default_host(),
            stream: None,
        }
    }
}

impl Default for CpalBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CaptureBackend for CpalBackend {
    fn is_available(&self) -> bool {
        self.host.default_input_device().is_some()
    }

    fn open(
        &mut self,
        config: &DeviceConfig,
        callback: FrameCallback,
    ) -> Result<(), CaptureError> {
        let device = self
            .host
            .default_input_device()
            .ok_or(CaptureError::DeviceNotAvailable)?;

        let device_name = device.name().unwrap_or_else(|_| "<unknown>".into());
        log::info!(
            "opening '{}': {} Hz, {} ch, f32",
            device_name,
            config.sample_rate,
            config.channels
        );

        let stream_config = cpal::StreamConfig {
            channels: config.channels,
            sample_rate: cpal::SampleRate(config.sample_rate),
            buffer_size: cpal::BufferSize::Default,
        };

        let stream = device
            .build_input_stream(
                &stream_config,
                move |data: &[f32], _: &cpal::InputCallbackInfo| {
                    callback(data);
                },
                |err| log::error!("input stream error: {err}"),
                None,
            )
            .map_err(|e| CaptureError::DeviceOpenFailed(e.to_string()))?;

        self.stream = Some(stream);
        Ok(())
    }

    fn start(&mut self) -> Result<(), CaptureError> {
        let stream = self
            .stream
            .as_ref()
            .ok_or_else(|| CaptureError::StreamStartFailed("device not open".into()))?;

        stream
            .play()
            .map_err(|e| CaptureError::StreamStartFailed(e.to_string()))
    }

    fn stop(&mut self) -> Result<(), CaptureError> {
        let Some(stream) = self.stream.as_ref() else {
            return Ok(());
        };

        stream
            .pause()
            .map_err(|e| CaptureError::StreamStopFailed(e.to_string()))
    }

    fn close(&mut self) {
        // Dropping the stream stops and releases the device.
        self.stream = None;
    }
}
