//! Helpers that operate over `Result` values rather than inside them.

use futures::FutureExt;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

use crate::result::{ok, Result};
use crate::shared::{Origin, Panic};

/// Runs `op`, converting an unwinding panic into an `Err`.
///
/// The panic payload is kept verbatim inside the returned [`Panic`].
/// Panics that abort the process cannot be caught.
///
/// # Example
/// ```
/// use okerr::wrap;
///
/// assert_eq!(wrap(|| 42).unwrap(), 42);
///
/// let caught = wrap(|| -> i32 { panic!("boom") });
/// assert_eq!(caught.err().unwrap().message(), Some("boom"));
/// ```
#[track_caller]
pub fn wrap<T, F>(op: F) -> Result<T, Panic>
where
    F: FnOnce() -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(op)) {
        Ok(value) => ok(value),
        Err(payload) => caught(payload, Origin::capture()),
    }
}

/// Asynchronous counterpart of [`wrap`].
///
/// Suspends until the future produced by `op` settles. A panic raised while
/// building the future or while polling it becomes an `Err`, so the returned
/// future always resolves once the wrapped one does. Dropping the returned
/// future drops the wrapped one; there is no separate cancellation.
///
/// The origin of an `Err` is the call to `wrap_async`, not the await point.
#[track_caller]
pub fn wrap_async<T, F, Fut>(op: F) -> impl Future<Output = Result<T, Panic>>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    let origin = Origin::capture();
    async move {
        let future = match panic::catch_unwind(AssertUnwindSafe(op)) {
            Ok(future) => future,
            Err(payload) => return caught(payload, origin),
        };

        match AssertUnwindSafe(future).catch_unwind().await {
            Ok(value) => ok(value),
            Err(payload) => caught(payload, origin),
        }
    }
}

/// Runs a fallible `op`, keeping its error verbatim as the `Err` payload.
///
/// Panics inside `op` are not caught; use [`wrap`] for that.
#[track_caller]
pub fn try_wrap<T, E, F>(op: F) -> Result<T, E>
where
    F: FnOnce() -> std::result::Result<T, E>,
{
    Result::from(op())
}

/// Awaits a fallible future, keeping its rejection verbatim as the `Err` payload.
///
/// The origin of an `Err` is the call to `try_wrap_async`.
#[track_caller]
pub fn try_wrap_async<T, E, F, Fut>(op: F) -> impl Future<Output = Result<T, E>>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = std::result::Result<T, E>>,
{
    let origin = Origin::capture();
    async move {
        match op().await {
            Ok(value) => ok(value),
            Err(rejection) => Result::from_err_parts(rejection, origin),
        }
    }
}

/// Dispatches `result` to the handler for its variant.
///
/// Handlers receive the unwrapped payload by value. A missing handler for
/// the variant at hand yields `None`; the other handler is never invoked.
pub fn match_result<T, E, R, O, F>(result: Result<T, E>, on_ok: Option<O>, on_err: Option<F>) -> Option<R>
where
    O: FnOnce(T) -> R,
    F: FnOnce(E) -> R,
{
    result.fold(
        |value| on_ok.map(|handler| handler(value)),
        |error| on_err.map(|handler| handler(error)),
    )
}

fn caught<T>(payload: Box<dyn std::any::Any + Send + 'static>, origin: Option<Origin>) -> Result<T, Panic> {
    let panic = Panic::new(payload);
    tracing::trace!(panic_message = ?panic.message(), "caught panic from wrapped operation");
    Result::from_err_parts(panic, origin)
}
