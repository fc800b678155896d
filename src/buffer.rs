//! Provides `Buffer`, the owned storage behind a `Set`.
//!
//! A `Buffer` is a `Vec` plus a *logical* capacity. `Vec` is free to allocate
//! more room than it's asked for, but a `Set` promises a specific growth
//! pattern: it starts with room for one element, doubles whenever it's full,
//! and has no room at all after `clear`. So we keep the promised number
//! ourselves, and make sure the `Vec` always has at least that much room.
//!
//! Every allocation goes through `try_reserve_exact`, which leaves the `Vec`
//! untouched when it fails. That gives growth and copying the all-or-nothing
//! behavior a `Set` needs without any rollback code: the old elements stay
//! where they are until the new storage exists, and a half-built copy is
//! simply dropped.
use std::collections::TryReserveError;

use tracing::trace;

pub(crate) struct Buffer<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> Buffer<T> {
    /// An empty buffer with room for `capacity` elements. Like `Vec::with_capacity`,
    /// this aborts if the allocator fails.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Buffer { items: Vec::with_capacity(capacity), capacity }
    }

    /// An empty buffer with room for `capacity` elements, or the allocator's error
    pub(crate) fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        let mut items = Vec::new();
        items.try_reserve_exact(capacity)?;
        Ok(Buffer { items, capacity })
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub(crate) fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Capacity after the next growth: double, but at least one
    fn next_capacity(&self) -> usize {
        self.capacity.saturating_mul(2).max(1)
    }

    /// Double the capacity, aborting if the allocator fails
    pub(crate) fn grow(&mut self) {
        let capacity = self.next_capacity();
        self.items.reserve_exact(capacity - self.items.len());
        trace!(from = self.capacity, to = capacity, "grew set buffer");
        self.capacity = capacity;
    }

    /// Double the capacity. If the allocator fails, the buffer is unchanged.
    pub(crate) fn try_grow(&mut self) -> Result<(), TryReserveError> {
        let capacity = self.next_capacity();
        self.items.try_reserve_exact(capacity - self.items.len())?;
        trace!(from = self.capacity, to = capacity, "grew set buffer");
        self.capacity = capacity;
        Ok(())
    }

    /// Append `value`. The caller must have made room first.
    pub(crate) fn push(&mut self, value: T) {
        debug_assert!(!self.is_full(), "push into a full buffer");
        self.items.push(value);
    }

    /// Remove the element at `index`, shifting everything after it one place
    /// to the left.
    pub(crate) fn remove(&mut self, index: usize) -> T {
        self.items.remove(index)
    }

    /// Drop every element and the storage itself: length and capacity are both
    /// zero afterwards.
    pub(crate) fn release(&mut self) {
        self.items = Vec::new();
        self.capacity = 0;
    }

    pub(crate) fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone> Buffer<T> {
    /// A deep copy with the same capacity. If the allocator fails, nothing is
    /// allocated; if an element's `clone` panics, the partial copy is dropped
    /// during unwinding.
    pub(crate) fn try_clone(&self) -> Result<Self, TryReserveError> {
        let mut copy = Buffer::try_with_capacity(self.capacity)?;
        copy.items.extend(self.items.iter().cloned());
        Ok(copy)
    }
}

impl<T: Clone> Clone for Buffer<T> {
    fn clone(&self) -> Self {
        let mut copy = Buffer::with_capacity(self.capacity);
        copy.items.extend(self.items.iter().cloned());
        copy
    }
}
