//! Synthesizer configuration.
//!
//! Read-only for the lifetime of a synthesizer; every request borrows the
//! same value.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_SAMPLE_RATE: u32 = 44100;
pub const DEFAULT_DURATION: f64 = 1.0;

/// Fixed settings shared by every tone the synthesizer renders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SynthConfig {
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Duration in seconds used when a request does not name one.
    pub default_duration: f64,
    /// Optional cap on a single tone's length, in seconds. Unset means any
    /// finite duration is rendered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_duration: Option<f64>,
}

impl Default for SynthConfig {
    fn default() -> Self {
        SynthConfig {
            sample_rate: DEFAULT_SAMPLE_RATE,
            default_duration: DEFAULT_DURATION,
            max_duration: None,
        }
    }
}

impl SynthConfig {
    pub fn with_sample_rate(sample_rate: u32) -> Self {
        SynthConfig {
            sample_rate,
            ..SynthConfig::default()
        }
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SynthConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_rate == 0 {
            return Err(ConfigError::ZeroSampleRate);
        }
        let durations = [
            ("defaultDuration", Some(self.default_duration)),
            ("maxDuration", self.max_duration),
        ];
        for (field, value) in durations {
            match value {
                Some(value) if !value.is_finite() || value <= 0.0 => {
                    return Err(ConfigError::InvalidDuration { field, value });
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Sample rate as `f64`, for time-domain math.
    pub fn rate(&self) -> f64 {
        self.sample_rate as f64
    }
}
