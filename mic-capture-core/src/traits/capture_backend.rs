use std::sync::Arc;

use crate::models::config::DeviceConfig;
use crate::models::error::CaptureError;

/// Callback invoked when a batch of input frames is available.
///
/// Receives mono f32 samples at the configured sample rate, one batch
/// per hardware delivery. Fires on the backend's dedicated audio
/// thread — keep processing minimal. The backend never invokes it
/// concurrently with itself.
pub type FrameCallback = Arc<dyn Fn(&[f32]) + Send + Sync + 'static>;

/// Interface for platform-specific capture backends.
///
/// Implemented by:
/// - `CpalBackend` (mic-capture-cpal)
/// - Mock backends in tests
///
/// Lifecycle: `open` once, then any number of `start`/`stop` cycles,
/// then `close` (or drop). Deliberately not `Send`: the controlling
/// thread owns the backend for its whole lifetime, and platform stream
/// handles (e.g. `cpal::Stream`) are not `Send` everywhere.
pub trait CaptureBackend {
    /// Whether a capture device is currently available.
    fn is_available(&self) -> bool;

    /// Open the capture device with the given format, registering
    /// `callback` for data delivery. Does not begin streaming.
    fn open(&mut self, config: &DeviceConfig, callback: FrameCallback)
        -> Result<(), CaptureError>;

    /// Begin streaming. The callback starts firing on the audio thread.
    fn start(&mut self) -> Result<(), CaptureError>;

    /// Request that streaming halt.
    ///
    /// Backends are not required to guarantee the callback has quiesced
    /// by the time this returns; callers gate their callback on a flag
    /// cleared beforehand.
    fn stop(&mut self) -> Result<(), CaptureError>;

    /// Tear down the device. Further `start` calls are invalid.
    fn close(&mut self);
}
