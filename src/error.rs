use std::fmt;

#[derive(Debug)]
pub enum SynthError {
    InvalidDuration { seconds: f64 },
    DurationTooLong { seconds: f64, max: f64 },
    InvalidFrequency { hz: f64 },
    Config(ConfigError),
    Wav(hound::Error),
    Base64(base64::DecodeError),
    DataUri { reason: &'static str },
}

#[derive(Debug)]
pub enum ConfigError {
    ZeroSampleRate,
    InvalidDuration { field: &'static str, value: f64 },
    Json(serde_json::Error),
}

impl fmt::Display for SynthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynthError::InvalidDuration { seconds } => {
                write!(f, "Invalid duration {seconds}s: must be a finite, non-negative number")
            }
            SynthError::DurationTooLong { seconds, max } => {
                write!(f, "Duration {seconds}s exceeds the maximum of {max}s")
            }
            SynthError::InvalidFrequency { hz } => {
                write!(f, "Invalid frequency {hz}Hz: must be finite and positive")
            }
            SynthError::Config(e) => write!(f, "Config error: {e}"),
            SynthError::Wav(e) => write!(f, "WAV error: {e}"),
            SynthError::Base64(e) => write!(f, "Base64 error: {e}"),
            SynthError::DataUri { reason } => write!(f, "Malformed data URI: {reason}"),
        }
    }
}

impl std::error::Error for SynthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SynthError::Config(e) => Some(e),
            SynthError::Wav(e) => Some(e),
            SynthError::Base64(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroSampleRate => write!(f, "sample rate must be greater than zero"),
            ConfigError::InvalidDuration { field, value } => {
                write!(f, "{field} must be finite and positive, got {value}")
            }
            ConfigError::Json(e) => write!(f, "invalid config JSON: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for SynthError {
    fn from(e: ConfigError) -> Self {
        SynthError::Config(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

impl From<hound::Error> for SynthError {
    fn from(e: hound::Error) -> Self {
        SynthError::Wav(e)
    }
}

impl From<base64::DecodeError> for SynthError {
    fn from(e: base64::DecodeError) -> Self {
        SynthError::Base64(e)
    }
}
