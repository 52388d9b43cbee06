//! okerr - a Result type with an explicit combinator algebra
//!
//! This library provides a discriminated [`Result`] value that is either an
//! `Ok` carrying a success payload or an `Err` carrying an error payload,
//! together with combinators to inspect, transform and chain such values
//! without unwinding control flow.
//!
//! # Layout
//!
//! - **Core** (`result`, `iter`): the sum type, its factories and combinators
//! - **Helpers** (`helpers`, `is_result!`): `wrap`, `wrap_async`, `match_result`
//! - **Configuration** (`config`): how much context `err` captures
//! - **Shared** (`shared`): failure, panic and origin types
//!
//! # Example
//!
//! ```
//! use okerr::prelude::*;
//!
//! fn parse(input: &str) -> Result<i32, String> {
//!     try_wrap(|| input.parse::<i32>()).map_err(|e| e.to_string())
//! }
//!
//! let doubled = parse("21").map(|v| v * 2);
//! assert_eq!(doubled.unwrap(), 42);
//!
//! let failed = parse("x").and_then(|v| ok(v + 1));
//! assert!(failed.is_err());
//! assert_eq!(failed.unwrap_or(0), 0);
//! ```

pub mod config;
pub mod helpers;
pub mod iter;
#[doc(hidden)]
pub mod probe;
pub mod result;
mod serialization;
pub mod shared;

pub use config::CaptureMode;
pub use helpers::{match_result, try_wrap, try_wrap_async, wrap, wrap_async};
pub use result::{err, ok, Result};
pub use shared::{ConfigError, Origin, Panic, UnwrapError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{capture_mode, set_capture_mode, CaptureMode};
    pub use crate::helpers::{match_result, try_wrap, try_wrap_async, wrap, wrap_async};
    pub use crate::is_result;
    pub use crate::result::{err, ok, Result};
    pub use crate::shared::{Origin, Panic, UnwrapError};
}
