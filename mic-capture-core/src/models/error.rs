use thiserror::Error;

/// Errors that can occur during capture operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CaptureError {
    #[error("no capture device available")]
    DeviceNotAvailable,

    #[error("failed to open capture device: {0}")]
    DeviceOpenFailed(String),

    #[error("failed to start stream: {0}")]
    StreamStartFailed(String),

    #[error("failed to stop stream: {0}")]
    StreamStopFailed(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
