//! # mic-capture-core
//!
//! Platform-agnostic fixed-duration mono capture core library.
//!
//! Opens a mono 16 kHz f32 capture device, accumulates samples delivered
//! by the backend's audio callback into a pre-allocated buffer capped at
//! 60 seconds, and hands the captured samples back on stop. Platform
//! backends (cpal, or anything else that can drive a data callback)
//! implement the `CaptureBackend` trait and plug into the generic
//! `CaptureSession`.
//!
//! ## Architecture
//!
//! ```text
//! mic-capture-core (this crate)
//! ├── traits/       ← CaptureBackend, FrameCallback
//! ├── models/       ← CaptureError, DeviceConfig
//! ├── processing/   ← SampleBuffer (bounded, drop-whole-batch)
//! └── session/      ← CaptureSession (generic orchestrator)
//! ```

pub mod models;
pub mod processing;
pub mod session;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use models::config::DeviceConfig;
pub use models::error::CaptureError;
pub use processing::sample_buffer::SampleBuffer;
pub use session::recorder::CaptureSession;
pub use traits::capture_backend::{CaptureBackend, FrameCallback};
