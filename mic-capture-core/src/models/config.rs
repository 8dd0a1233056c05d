use super::error::CaptureError;

/// Configuration for the capture device.
///
/// The defaults match the fixed format this library is built around:
/// mono f32 at 16 kHz, capped at 60 seconds. There is no format
/// negotiation — the device is configured once at session creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceConfig {
    /// Sample rate in Hz (default: 16000).
    pub sample_rate: u32,

    /// Number of input channels. Only mono capture is supported.
    pub channels: u16,

    /// Maximum recording duration in seconds (default: 60).
    /// Samples past this cap are silently dropped.
    pub max_duration_secs: u32,
}

impl DeviceConfig {
    /// Buffer capacity in samples: `sample_rate * max_duration_secs`.
    ///
    /// 960,000 at the defaults (60 s of 16 kHz mono).
    pub fn capacity(&self) -> usize {
        self.sample_rate as usize * self.max_duration_secs as usize
    }

    pub fn validate(&self) -> Result<(), CaptureError> {
        if self.sample_rate == 0 {
            return Err(CaptureError::InvalidConfig(
                "sample rate must be positive".into(),
            ));
        }
        if self.channels != 1 {
            return Err(CaptureError::InvalidConfig(format!(
                "unsupported channel count: {} (mono only)",
                self.channels
            )));
        }
        if self.max_duration_secs == 0 {
            return Err(CaptureError::InvalidConfig(
                "max duration must be positive".into(),
            ));
        }
        Ok(())
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            sample_rate: 16_000,
            channels: 1,
            max_duration_secs: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity_is_sixty_seconds_at_16k() {
        assert_eq!(DeviceConfig::default().capacity(), 960_000);
    }

    #[test]
    fn default_config_validates() {
        assert!(DeviceConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_sample_rate() {
        let config = DeviceConfig {
            sample_rate: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CaptureError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_stereo() {
        let config = DeviceConfig {
            channels: 2,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CaptureError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_zero_duration() {
        let config = DeviceConfig {
            max_duration_secs: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CaptureError::InvalidConfig(_))
        ));
    }
}
