//! Shared failure and diagnostic types used across the crate.

pub mod error;
pub mod origin;
pub mod panic;

pub use error::{ConfigError, UnwrapError};
pub use origin::Origin;
pub use panic::Panic;
