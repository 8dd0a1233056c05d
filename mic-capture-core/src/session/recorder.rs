use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::models::config::DeviceConfig;
use crate::models::error::CaptureError;
use crate::processing::sample_buffer::SampleBuffer;
use crate::traits::capture_backend::{CaptureBackend, FrameCallback};

/// State shared between the controlling thread and the audio callback,
/// protected by `parking_lot::Mutex`.
struct Shared {
    buffer: SampleBuffer,
    callback_count: u64,
}

/// Fixed-duration capture session.
///
/// Owns the backend device, the sample buffer, and the recording flag.
/// Generic over the capture backend via the `CaptureBackend` trait, so
/// session logic runs unchanged against hardware or a mock.
///
/// Data flow:
/// ```text
/// [Backend audio thread] → frame callback → [SampleBuffer (bounded)]
///                                                   ↓ stop
///                                          [caller's output slice]
/// ```
///
/// The buffer and counters are written only by the audio callback while
/// recording. The callback checks the recording flag inside its
/// critical section and `stop` clears the flag while holding the lock,
/// so every accepted append is ordered before stop's readout and a
/// callback still in flight after `stop` returns appends nothing.
pub struct CaptureSession<B: CaptureBackend> {
    backend: B,
    config: DeviceConfig,
    recording: Arc<AtomicBool>,
    shared: Arc<Mutex<Shared>>,
}

impl<B: CaptureBackend> CaptureSession<B> {
    /// Open the capture device and wire up the data callback.
    ///
    /// Allocates the full sample buffer up front
    /// (`config.capacity()` samples). Does not begin streaming.
    /// On failure nothing is left open and the buffer is released.
    pub fn new(mut backend: B, config: DeviceConfig) -> Result<Self, CaptureError> {
        config.validate()?;

        if !backend.is_available() {
            return Err(CaptureError::DeviceNotAvailable);
        }

        let shared = Arc::new(Mutex::new(Shared {
            buffer: SampleBuffer::new(config.capacity()),
            callback_count: 0,
        }));
        let recording = Arc::new(AtomicBool::new(false));

        let cb_shared = Arc::clone(&shared);
        let cb_recording = Arc::clone(&recording);
        let callback: FrameCallback = Arc::new(move |frames: &[f32]| {
            let mut state = cb_shared.lock();
            // Checked under the lock: stop clears the flag while
            // holding it, so a straggler delivery that locks after a
            // stop sees the flag down and appends nothing.
            if !cb_recording.load(Ordering::Acquire) {
                return;
            }
            if state.buffer.push_batch(frames) {
                state.callback_count += 1;
            }
        });

        backend.open(&config, callback)?;

        Ok(Self {
            backend,
            config,
            recording,
            shared,
        })
    }

    /// Start recording.
    ///
    /// Resets the sample buffer and the callback counter — any audio
    /// captured by a previous cycle is discarded, read out or not.
    /// If the backend fails to start, the session is left not recording
    /// and remains valid for a retry.
    pub fn start(&mut self) -> Result<(), CaptureError> {
        {
            let mut state = self.shared.lock();
            state.buffer.clear();
            state.callback_count = 0;
        }

        self.recording.store(true, Ordering::Release);

        if let Err(e) = self.backend.start() {
            self.recording.store(false, Ordering::Release);
            return Err(e);
        }

        Ok(())
    }

    /// Stop recording and return the captured sample count without
    /// copying anything out.
    ///
    /// Size-query form of [`stop_into`](Self::stop_into): call this
    /// first, then retrieve with a correctly sized buffer. Idempotent —
    /// stopping when not recording still halts the device and reports
    /// the last captured count.
    pub fn stop(&mut self) -> usize {
        self.stop_into(&mut [])
    }

    /// Stop recording and copy up to `out.len()` captured samples into
    /// `out`.
    ///
    /// Returns the true captured sample count regardless of how much
    /// was copied, so a short output slice yields a truncated copy but
    /// an accurate count. Backend stop failures are logged, not
    /// surfaced; the captured data is still returned.
    pub fn stop_into(&mut self, out: &mut [f32]) -> usize {
        // Cleared under the lock: every accepted append is ordered
        // before this point, and any callback locking afterwards
        // observes the flag down.
        {
            let _state = self.shared.lock();
            self.recording.store(false, Ordering::Release);
        }

        // The lock must not be held across the halt — the backend may
        // wait on an in-flight callback that wants it.
        if let Err(e) = self.backend.stop() {
            log::warn!("backend stop failed: {}", e);
        }

        let state = self.shared.lock();
        state.buffer.read_into(out);
        state.buffer.len()
    }

    /// Number of accepted data-callback invocations since the last
    /// `start`. Dropped (overflowing) batches are not counted.
    /// Diagnostic only.
    pub fn callback_count(&self) -> u64 {
        self.shared.lock().callback_count
    }

    /// Number of samples captured since the last `start`.
    pub fn sample_count(&self) -> usize {
        self.shared.lock().buffer.len()
    }

    /// Whether the session is currently recording.
    pub fn is_recording(&self) -> bool {
        self.recording.load(Ordering::Acquire)
    }

    /// The device configuration this session was created with.
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }
}

impl<B: CaptureBackend> Drop for CaptureSession<B> {
    fn drop(&mut self) {
        self.recording.store(false, Ordering::Release);
        self.backend.close();
    }
}
