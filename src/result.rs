//! The `Result` sum type and its combinators.
//!
//! A [`Result`] is either `Ok`, holding a success payload, or `Err`, holding
//! an error payload plus an optional [`Origin`]. The representation is private;
//! values are built with [`ok`] and [`err`] and taken apart with the
//! combinators below or by converting into [`std::result::Result`].

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::shared::{Origin, UnwrapError};

/// Either a success payload `T` or an error payload `E`.
///
/// No method mutates a `Result`; every transformation consumes the receiver
/// and produces a new value.
#[must_use = "this `Result` may be an `Err` variant, which should be handled"]
#[derive(Clone)]
pub struct Result<T, E> {
    repr: Repr<T, E>,
}

#[derive(Clone)]
enum Repr<T, E> {
    Ok(T),
    Err { value: E, origin: Option<Origin> },
}

/// Constructs an `Ok` result.
pub fn ok<T, E>(value: T) -> Result<T, E> {
    Result {
        repr: Repr::Ok(value),
    }
}

/// Constructs an `Err` result, recording the caller as its origin.
///
/// What gets recorded depends on [`crate::config::capture_mode`].
#[track_caller]
pub fn err<T, E>(value: E) -> Result<T, E> {
    Result::from_err_parts(value, Origin::capture())
}

impl<T, E> Result<T, E> {
    pub(crate) fn from_err_parts(value: E, origin: Option<Origin>) -> Self {
        Result {
            repr: Repr::Err { value, origin },
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self.repr, Repr::Ok(_))
    }

    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Creation site of an `Err`, if one was recorded.
    pub fn origin(&self) -> Option<&Origin> {
        match &self.repr {
            Repr::Ok(_) => None,
            Repr::Err { origin, .. } => origin.as_ref(),
        }
    }

    /// Returns the success payload, or `fallback` for an `Err`.
    pub fn unwrap_or(self, fallback: T) -> T {
        match self.repr {
            Repr::Ok(value) => value,
            Repr::Err { .. } => fallback,
        }
    }

    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self.repr {
            Repr::Ok(value) => value,
            Repr::Err { value, .. } => f(value),
        }
    }

    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(|_| T::default())
    }

    /// Applies `mapper` to an `Ok` payload.
    ///
    /// An `Err` passes through with its origin and `mapper` is never called.
    pub fn map<U, F>(self, mapper: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self.repr {
            Repr::Ok(value) => ok(mapper(value)),
            Repr::Err { value, origin } => Result::from_err_parts(value, origin),
        }
    }

    /// Applies `mapper` to an `Err` payload, keeping the original origin.
    pub fn map_err<F2, F>(self, mapper: F) -> Result<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        match self.repr {
            Repr::Ok(value) => ok(value),
            Repr::Err { value, origin } => Result::from_err_parts(mapper(value), origin),
        }
    }

    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self.repr {
            Repr::Ok(value) => f(value),
            Repr::Err { .. } => default,
        }
    }

    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self.repr {
            Repr::Ok(value) => f(value),
            Repr::Err { value, .. } => default(value),
        }
    }

    /// Chains a fallible step onto an `Ok` payload.
    ///
    /// The result of `mapper` is returned as is, never wrapped again. An `Err`
    /// passes through untouched and `mapper` is never called.
    pub fn and_then<U, F>(self, mapper: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self.repr {
            Repr::Ok(value) => mapper(value),
            Repr::Err { value, origin } => Result::from_err_parts(value, origin),
        }
    }

    /// Recovers from an `Err` with a fallible step. Dual of [`Result::and_then`].
    pub fn or_else<F2, F>(self, f: F) -> Result<T, F2>
    where
        F: FnOnce(E) -> Result<T, F2>,
    {
        match self.repr {
            Repr::Ok(value) => ok(value),
            Repr::Err { value, .. } => f(value),
        }
    }

    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Repr::Ok(value) = &self.repr {
            f(value);
        }
        self
    }

    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Repr::Err { value, .. } = &self.repr {
            f(value);
        }
        self
    }

    /// Borrows both payloads. The origin is carried over.
    pub fn as_ref(&self) -> Result<&T, &E> {
        match &self.repr {
            Repr::Ok(value) => ok(value),
            Repr::Err { value, origin } => Result::from_err_parts(value, origin.clone()),
        }
    }

    pub fn ok(self) -> Option<T> {
        match self.repr {
            Repr::Ok(value) => Some(value),
            Repr::Err { .. } => None,
        }
    }

    pub fn err(self) -> Option<E> {
        match self.repr {
            Repr::Ok(_) => None,
            Repr::Err { value, .. } => Some(value),
        }
    }

    /// Dispatches to exactly one of the two handlers.
    pub fn fold<R, O, F>(self, on_ok: O, on_err: F) -> R
    where
        O: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self.repr {
            Repr::Ok(value) => on_ok(value),
            Repr::Err { value, .. } => on_err(value),
        }
    }

    /// Converts into the standard library's result, dropping the origin.
    pub fn into_std(self) -> std::result::Result<T, E> {
        match self.repr {
            Repr::Ok(value) => Ok(value),
            Repr::Err { value, .. } => Err(value),
        }
    }

    pub(crate) fn ok_ref(&self) -> Option<&T> {
        match &self.repr {
            Repr::Ok(value) => Some(value),
            Repr::Err { .. } => None,
        }
    }
}

impl<T, E: fmt::Debug> Result<T, E> {
    /// Returns the success payload, or the failure `unwrap` would panic with.
    pub fn try_unwrap(self) -> std::result::Result<T, UnwrapError> {
        match self.repr {
            Repr::Ok(value) => Ok(value),
            Repr::Err { value, origin } => Err(UnwrapError::UnwrapOnErr {
                rendered: format!("{:?}", value),
                origin: origin.map(|o| o.to_string()),
            }),
        }
    }

    /// Returns the success payload.
    ///
    /// # Panics
    /// Panics on an `Err` with a message holding the rendered error payload
    /// and, if recorded, its origin.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(failure) => panic!("{}", failure),
        }
    }

    /// Returns the success payload.
    ///
    /// # Panics
    /// Panics on an `Err` with `msg` followed by the rendered error payload.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self.repr {
            Repr::Ok(value) => value,
            Repr::Err { value, origin } => {
                let failure = UnwrapError::Expect {
                    message: msg.to_string(),
                    rendered: format!("{:?}", value),
                    origin: origin.map(|o| o.to_string()),
                };
                panic!("{}", failure)
            }
        }
    }
}

impl<T, E> Result<T, E> {
    /// Returns the error payload.
    ///
    /// # Panics
    /// Panics on an `Ok` with `msg`.
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E {
        match self.repr {
            Repr::Ok(_) => {
                let failure = UnwrapError::ExpectErrOnOk {
                    message: msg.to_string(),
                };
                panic!("{}", failure)
            }
            Repr::Err { value, .. } => value,
        }
    }
}

impl<T, E> From<std::result::Result<T, E>> for Result<T, E> {
    #[track_caller]
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => ok(value),
            Err(value) => err(value),
        }
    }
}

impl<T, E> From<Result<T, E>> for std::result::Result<T, E> {
    fn from(result: Result<T, E>) -> Self {
        result.into_std()
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Result<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Ok(value) => f.debug_tuple("Ok").field(value).finish(),
            Repr::Err { value, .. } => f.debug_tuple("Err").field(value).finish(),
        }
    }
}

impl<T: PartialEq, E: PartialEq> PartialEq for Result<T, E> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.repr, &other.repr) {
            (Repr::Ok(a), Repr::Ok(b)) => a == b,
            (Repr::Err { value: a, .. }, Repr::Err { value: b, .. }) => a == b,
            _ => false,
        }
    }
}

impl<T: Eq, E: Eq> Eq for Result<T, E> {}

impl<T: Hash, E: Hash> Hash for Result<T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.repr {
            Repr::Ok(value) => {
                0u8.hash(state);
                value.hash(state);
            }
            Repr::Err { value, .. } => {
                1u8.hash(state);
                value.hash(state);
            }
        }
    }
}
