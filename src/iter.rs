//! Iteration over the contents of an `Ok` payload.
//!
//! A `Result` whose success payload is a sequence yields that sequence's
//! items in order. An `Err` yields nothing.

use std::iter::FusedIterator;

use crate::result::Result;

/// Iterator over the items of an `Ok` payload.
///
/// Restartable by cloning whenever the inner iterator is `Clone`.
#[derive(Debug, Clone)]
pub struct IntoIter<I> {
    inner: Option<I>,
}

impl<I> IntoIter<I> {
    fn new(inner: Option<I>) -> Self {
        Self { inner }
    }
}

impl<I: Iterator> Iterator for IntoIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Some(inner) => inner.size_hint(),
            None => (0, Some(0)),
        }
    }
}

impl<I: DoubleEndedIterator> DoubleEndedIterator for IntoIter<I> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next_back()
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for IntoIter<I> {}

impl<I: FusedIterator> FusedIterator for IntoIter<I> {}

impl<T: IntoIterator, E> IntoIterator for Result<T, E> {
    type Item = T::Item;
    type IntoIter = IntoIter<T::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.ok().map(IntoIterator::into_iter))
    }
}

impl<'a, T, E> IntoIterator for &'a Result<T, E>
where
    &'a T: IntoIterator,
{
    type Item = <&'a T as IntoIterator>::Item;
    type IntoIter = IntoIter<<&'a T as IntoIterator>::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.ok_ref().map(IntoIterator::into_iter))
    }
}
