use thiserror::Error;

/// Failures raised by the unwrap-family operations.
///
/// Uses thiserror to derive Display and Error traits automatically.
/// `unwrap`, `expect` and `expect_err` panic with the `Display` of these
/// variants; `try_unwrap` hands them back as values instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnwrapError {
    /// `unwrap` was called on an `Err`
    #[error("called `unwrap` on an `Err` value: {rendered}{}", origin_suffix(.origin))]
    UnwrapOnErr {
        rendered: String,
        origin: Option<String>,
    },

    /// `expect` was called on an `Err`
    #[error("{message}: {rendered}{}", origin_suffix(.origin))]
    Expect {
        message: String,
        rendered: String,
        origin: Option<String>,
    },

    /// `expect_err` was called on an `Ok`
    #[error("{message}")]
    ExpectErrOnOk { message: String },
}

impl UnwrapError {
    /// Rendering of the held error payload, if this failure carries one.
    pub fn rendered(&self) -> Option<&str> {
        match self {
            UnwrapError::UnwrapOnErr { rendered, .. } | UnwrapError::Expect { rendered, .. } => {
                Some(rendered)
            }
            UnwrapError::ExpectErrOnOk { .. } => None,
        }
    }
}

fn origin_suffix(origin: &Option<String>) -> String {
    match origin {
        Some(origin) => format!("\n  created at {}", origin),
        None => String::new(),
    }
}

/// Errors raised while resolving the capture configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid capture mode: {value}\n\n💡 Hint: Use one of `off`, `location` or `backtrace`")]
    InvalidCaptureMode { value: String },
}
