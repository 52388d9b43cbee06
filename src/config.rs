//! Capture configuration for okerr.
//!
//! Controls how much diagnostic context `err` records about its creation
//! site. The mode is process-wide and may be set programmatically or read
//! from the `OKERR_CAPTURE` environment variable.

use serde::{Deserialize, Serialize};
use std::env::VarError;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

use crate::shared::ConfigError;

/// Environment variable consulted by [`init_from_env`].
pub const CAPTURE_ENV_VAR: &str = "OKERR_CAPTURE";

static CAPTURE_MODE: AtomicU8 = AtomicU8::new(CaptureMode::Location as u8);

/// How much context an `Err` records when it is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum CaptureMode {
    /// Record nothing
    Off = 0,
    /// Record the source location of the `err` call
    #[default]
    Location = 1,
    /// Record the source location and a full backtrace
    Backtrace = 2,
}

impl CaptureMode {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => CaptureMode::Off,
            2 => CaptureMode::Backtrace,
            _ => CaptureMode::Location,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CaptureMode::Off => "off",
            CaptureMode::Location => "location",
            CaptureMode::Backtrace => "backtrace",
        }
    }
}

impl fmt::Display for CaptureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaptureMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" => Ok(CaptureMode::Off),
            "location" => Ok(CaptureMode::Location),
            "backtrace" => Ok(CaptureMode::Backtrace),
            _ => Err(ConfigError::InvalidCaptureMode {
                value: s.to_string(),
            }),
        }
    }
}

/// Current process-wide capture mode.
pub fn capture_mode() -> CaptureMode {
    CaptureMode::from_u8(CAPTURE_MODE.load(Ordering::Relaxed))
}

/// Replaces the process-wide capture mode, returning the previous one.
pub fn set_capture_mode(mode: CaptureMode) -> CaptureMode {
    let previous = CaptureMode::from_u8(CAPTURE_MODE.swap(mode as u8, Ordering::Relaxed));
    tracing::debug!(previous = %previous, current = %mode, "capture mode changed");
    previous
}

/// Applies the mode named by `OKERR_CAPTURE`, if set.
///
/// An unset variable leaves the current mode untouched and returns it.
///
/// # Errors
/// Returns [`ConfigError::InvalidCaptureMode`] if the variable holds an
/// unrecognised or non-Unicode value; the current mode is left unchanged in
/// that case.
pub fn init_from_env() -> Result<CaptureMode, ConfigError> {
    apply_env_value(std::env::var(CAPTURE_ENV_VAR))
}

fn apply_env_value(value: Result<String, VarError>) -> Result<CaptureMode, ConfigError> {
    let parsed = match value {
        Err(VarError::NotPresent) => return Ok(capture_mode()),
        Err(VarError::NotUnicode(raw)) => Err(ConfigError::InvalidCaptureMode {
            value: raw.to_string_lossy().into_owned(),
        }),
        Ok(value) => value.parse::<CaptureMode>(),
    };

    match parsed {
        Ok(mode) => {
            set_capture_mode(mode);
            Ok(mode)
        }
        Err(e) => {
            let ConfigError::InvalidCaptureMode { value } = &e;
            tracing::warn!(variable = CAPTURE_ENV_VAR, value = %value, "ignoring invalid capture mode");
            Err(e)
        }
    }
}
