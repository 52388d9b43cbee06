//! Support for the [`is_result!`](crate::is_result) predicate.
//!
//! Method resolution picks [`ResultProbe`] when the probed value is an
//! `okerr::Result` and falls back to [`OtherProbe`] one autoref later for
//! everything else. Not part of the public API.

use crate::result::Result;

#[doc(hidden)]
pub struct Probe<'a, V: ?Sized>(pub &'a V);

#[doc(hidden)]
pub trait ResultProbe {
    fn is_result(&self) -> bool {
        true
    }
}

impl<T, E> ResultProbe for Probe<'_, Result<T, E>> {}

#[doc(hidden)]
pub trait OtherProbe {
    fn is_result(&self) -> bool {
        false
    }
}

impl<V: ?Sized> OtherProbe for &Probe<'_, V> {}

/// Returns `true` iff the expression is an `okerr::Result`.
///
/// The expression is only borrowed. Any other type, including
/// `std::result::Result`, `Option` and look-alike structs, yields `false`.
///
/// The answer comes from the expression's static type. Inside generic code
/// such as `fn f<T>(v: T) { is_result!(v) }`, the type is the parameter `T`,
/// so the macro yields `false` even when `f` is called with an
/// `okerr::Result`.
///
/// ```
/// use okerr::{err, is_result, ok, Result};
///
/// let good: Result<i32, ()> = ok(1);
/// let bad: Result<(), &str> = err("x");
/// assert!(is_result!(good));
/// assert!(is_result!(bad));
/// assert!(!is_result!(1));
/// assert!(!is_result!("x"));
/// assert!(!is_result!(None::<()>));
/// ```
#[macro_export]
macro_rules! is_result {
    ($value:expr) => {{
        #[allow(unused_imports)]
        use $crate::probe::{OtherProbe as _, ResultProbe as _};
        (&$crate::probe::Probe(&$value)).is_result()
    }};
}
