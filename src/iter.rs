//! Iteration over a `Set`: the `Iter` and `IntoIter` iterators, and the
//! position-based `Cursor`.
//!
//! Every borrowing iterator or cursor holds a shared borrow of its `Set`, so
//! the `Set` can't be changed while one is alive. A stale cursor is a compile
//! error, not a runtime surprise.
use std::iter::FusedIterator;
use std::{fmt, ptr, slice, vec};

use crate::set::Set;

/// A read-only iterator over the elements of a `Set`, in insertion order.
/// Created by `Set::iter`, or by `Cursor::until`.
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(elements: &'a [T]) -> Self {
        Iter { inner: elements.iter() }
    }

    /// The elements not yet visited
    #[must_use]
    pub fn as_slice(&self) -> &'a [T] {
        self.inner.as_slice()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { inner: self.inner.clone() }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.as_slice()).finish()
    }
}

/// An owning iterator over the elements of a `Set`, in insertion order.
/// Created by `Set`'s `into_iter` method.
pub struct IntoIter<T> {
    inner: vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(elements: Vec<T>) -> Self {
        IntoIter { inner: elements.into_iter() }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner.as_slice()).finish()
    }
}

/// A `Cursor` marks one position in a `Set`: `Set::begin` gives the position
/// of the first element, and `Set::end` the position just past the last one.
///
/// * `get` returns the element at the cursor, or `None` at (or past) the end,
/// * `advance` moves the cursor one position forward, and
/// * two cursors are equal when they mark the same position in the same set.
///
/// ```
/// use vset::Set;
///
/// let set: Set<_> = [3, 1, 4].into_iter().collect();
/// let (mut at, end) = (set.begin(), set.end());
/// let mut seen = Vec::new();
/// while at != end {
///     seen.push(*at.get().unwrap());
///     at.advance();
/// }
/// assert_eq!(seen, [3, 1, 4]);
/// ```
pub struct Cursor<'a, T> {
    set: &'a Set<T>,
    position: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(set: &'a Set<T>, position: usize) -> Self {
        Cursor { set, position }
    }

    /// The element at the cursor's position, or `None` if the cursor is at or
    /// past the end
    #[must_use]
    pub fn get(&self) -> Option<&'a T> {
        self.set.as_slice().get(self.position)
    }

    /// Move to the next position. Advancing past the end is allowed, but
    /// `get` will keep returning `None`.
    pub fn advance(&mut self) {
        self.position = self.position.saturating_add(1);
    }

    /// The cursor's position, counting from zero
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// An iterator over the elements from this cursor up to (but not
    /// including) `end`. If `end` marks a different set, or a position before
    /// this cursor, the iterator is empty.
    #[must_use]
    pub fn until(self, end: Cursor<'a, T>) -> Iter<'a, T> {
        let elements = self.set.as_slice();
        let len = elements.len();
        if !self.same_set(&end) || self.position >= end.position || self.position >= len {
            return Iter::new(&[]);
        }
        Iter::new(&elements[self.position..end.position.min(len)])
    }

    // The set itself, not its storage: sets without an allocation share a
    // dangling storage pointer.
    fn same_set(&self, other: &Self) -> bool {
        ptr::eq(self.set, other.set)
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_set(other) && self.position == other.position
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("len", &self.set.len())
            .finish()
    }
}
