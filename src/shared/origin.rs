use std::backtrace::Backtrace;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

use crate::config::{capture_mode, CaptureMode};

/// Creation site of an `Err` value.
///
/// Purely informational: it is rendered into unwrap-family failure messages
/// and never takes part in equality, hashing or combinator behaviour.
#[derive(Clone)]
pub struct Origin {
    location: &'static Location<'static>,
    backtrace: Option<Arc<Backtrace>>,
}

impl Origin {
    /// Captures the caller's location according to the current capture mode.
    ///
    /// Returns `None` when capturing is switched off.
    #[track_caller]
    pub(crate) fn capture() -> Option<Self> {
        Self::capture_with(capture_mode())
    }

    #[track_caller]
    pub(crate) fn capture_with(mode: CaptureMode) -> Option<Self> {
        let location = Location::caller();
        match mode {
            CaptureMode::Off => None,
            CaptureMode::Location => Some(Self {
                location,
                backtrace: None,
            }),
            CaptureMode::Backtrace => Some(Self {
                location,
                backtrace: Some(Arc::new(Backtrace::force_capture())),
            }),
        }
    }

    pub fn file(&self) -> &'static str {
        self.location.file()
    }

    pub fn line(&self) -> u32 {
        self.location.line()
    }

    pub fn column(&self) -> u32 {
        self.location.column()
    }

    /// Backtrace recorded under [`CaptureMode::Backtrace`]
    pub fn backtrace(&self) -> Option<&Backtrace> {
        self.backtrace.as_deref()
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.location)?;
        if let Some(backtrace) = &self.backtrace {
            write!(f, "\n{}", backtrace)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Origin")
            .field("location", &format_args!("{}", self.location))
            .field("backtrace", &self.backtrace.is_some())
            .finish()
    }
}
