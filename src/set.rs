//! Provides `Set`, an insertion-ordered collection of distinct elements.
//!
//! * Elements are kept in the order they were first inserted; removing an
//!   element shifts the ones after it down, so the order of the rest is kept.
//! * Membership is a linear scan using the element type's `PartialEq`. There
//!   is no hashing and no sorting, so any `PartialEq` type can be an element.
//! * Storage starts with room for one element and doubles when full. `clear`
//!   gives the storage back entirely, leaving a capacity of zero.
//! * Inserting an element that's already present, and removing one that isn't,
//!   are silent no-ops. A set built with `Policy::Strict` reports those cases
//!   from `try_insert` and `try_remove` instead.
use std::fmt;
use std::ops::Index;

use crate::buffer::Buffer;
use crate::convert::FromElement;
use crate::error::{Error, Result};
use crate::iter::{Cursor, IntoIter, Iter};

/// How a set treats inserting an element it already has, or removing one it
/// doesn't have, when asked through `try_insert` and `try_remove`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Policy {
    /// Quietly do nothing (the default)
    #[default]
    Lenient,
    /// Return `Error::DuplicateElement` or `Error::ElementNotFound`
    Strict,
}

/// An insertion-ordered set of distinct elements. See the module documentation.
///
/// ```
/// use vset::Set;
///
/// let mut set = Set::new();
/// for n in [1, 6, 4, 9, 7, 10, 12] {
///     set.insert(n);
/// }
/// set.remove(&9);
/// set.insert(9);
/// assert_eq!(set.as_slice(), [1, 6, 4, 7, 10, 12, 9]);
/// assert_eq!(set.to_string(), "7 (1) (6) (4) (7) (10) (12) (9)");
/// ```
pub struct Set<T> {
    buffer: Buffer<T>,
    policy: Policy,
}

impl<T> Set<T> {
    /// An empty, lenient set with room for one element
    #[must_use]
    pub fn new() -> Self {
        Set::with_policy(Policy::Lenient)
    }

    /// An empty set with room for one element and the given `policy`
    #[must_use]
    pub fn with_policy(policy: Policy) -> Self {
        Set { buffer: Buffer::with_capacity(1), policy }
    }

    /// The set's duplicate and missing element policy
    #[must_use]
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// The number of elements in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Is the set empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The number of elements the set can hold before its storage must grow
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// The element at `index`, or `Error::IndexOutOfRange` if `index >= len()`
    pub fn get(&self, index: usize) -> Result<&T> {
        let len = self.len();
        self.as_slice().get(index).ok_or(Error::IndexOutOfRange { index, len })
    }

    /// The elements in insertion order
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.buffer.as_slice()
    }

    /// An iterator over the elements in insertion order
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_slice())
    }

    /// A cursor at the first element
    #[must_use]
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, 0)
    }

    /// A cursor just past the last element
    #[must_use]
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.len())
    }

    /// Remove every element and release the storage. Unlike a new set, a
    /// cleared set has a capacity of zero; the next insertion allocates room
    /// for one element.
    pub fn clear(&mut self) {
        self.buffer.release();
    }

    /// Exchange the contents (elements, capacity and policy) of `self` and
    /// `other`
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }
}

impl<T: PartialEq> Set<T> {
    /// The index of the element equal to `value`, if there is one
    #[must_use]
    pub fn position(&self, value: &T) -> Option<usize> {
        self.as_slice().iter().position(|element| element == value)
    }

    /// Is there an element equal to `value`? This is a linear scan.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.position(value).is_some()
    }

    /// Add `value` unless an equal element is already present. Returns `true`
    /// if `value` was added. This never reports duplicates, whatever the
    /// set's policy.
    pub fn insert(&mut self, value: T) -> bool {
        if self.contains(&value) {
            return false;
        }
        if self.buffer.is_full() {
            self.buffer.grow();
        }
        self.buffer.push(value);
        true
    }

    /// Like `insert`, but reports allocation failure (leaving the set
    /// unchanged) and, for a strict set, `Error::DuplicateElement`.
    pub fn try_insert(&mut self, value: T) -> Result<bool> {
        if let Some(index) = self.position(&value) {
            return match self.policy {
                Policy::Lenient => Ok(false),
                Policy::Strict => Err(Error::DuplicateElement { index }),
            };
        }
        if self.buffer.is_full() {
            self.buffer.try_grow()?;
        }
        self.buffer.push(value);
        Ok(true)
    }

    /// Remove the element equal to `value`, if there is one, keeping the order
    /// of the others. Returns `true` if an element was removed. This never
    /// reports a missing element, whatever the set's policy.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.position(value) {
            None => false,
            Some(index) => {
                self.buffer.remove(index);
                true
            }
        }
    }

    /// Like `remove`, but a strict set reports a missing element as
    /// `Error::ElementNotFound`.
    pub fn try_remove(&mut self, value: &T) -> Result<bool> {
        match (self.remove(value), self.policy) {
            (false, Policy::Strict) => Err(Error::ElementNotFound),
            (removed, _) => Ok(removed),
        }
    }

    /// Build a set from `source`, converting each element with `FromElement`
    /// and skipping elements equal to one already taken. The set starts with
    /// room for one element and grows as needed.
    pub fn from_elements<S, I>(source: I) -> Self
    where
        I: IntoIterator<Item = S>,
        T: FromElement<S>,
    {
        let mut set = Set::new();
        for element in source {
            set.insert(T::from_element(element));
        }
        set
    }

    /// Like `from_elements`, but reports allocation failure. The partly built
    /// set is dropped before the error is returned.
    pub fn try_from_elements<S, I>(source: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        T: FromElement<S>,
    {
        let mut set = Set { buffer: Buffer::try_with_capacity(1)?, policy: Policy::Lenient };
        for element in source {
            set.try_insert(T::from_element(element))?;
        }
        Ok(set)
    }
}

impl<T: PartialEq + Clone> Set<T> {
    /// Build a set from the distinct elements of `items`, in order. The set's
    /// capacity is `items.len()`, so it never needs to grow while being built.
    ///
    /// ```
    /// use vset::Set;
    ///
    /// let set = Set::from_slice(&[1, 2, 2, 3, 1]);
    /// assert_eq!(set.as_slice(), [1, 2, 3]);
    /// assert_eq!(set.capacity(), 5);
    /// ```
    #[must_use]
    pub fn from_slice(items: &[T]) -> Self {
        let mut set = Set { buffer: Buffer::with_capacity(items.len()), policy: Policy::Lenient };
        set.push_distinct(items);
        set
    }

    /// Like `from_slice`, but reports allocation failure
    pub fn try_from_slice(items: &[T]) -> Result<Self> {
        let mut set =
            Set { buffer: Buffer::try_with_capacity(items.len())?, policy: Policy::Lenient };
        set.push_distinct(items);
        Ok(set)
    }

    // Room for every item has already been reserved
    fn push_distinct(&mut self, items: &[T]) {
        for item in items {
            if !self.contains(item) {
                self.buffer.push(item.clone());
            }
        }
    }
}

impl<T: Clone> Set<T> {
    /// A deep copy with the same elements, capacity and policy, or
    /// `Error::Allocation` if the storage for the copy can't be obtained
    pub fn try_clone(&self) -> Result<Self> {
        Ok(Set { buffer: self.buffer.try_clone()?, policy: self.policy })
    }

    /// Make `self` a copy of `source`. The copy is built first and then swapped
    /// in, so if copying fails `self` is left exactly as it was.
    pub fn assign(&mut self, source: &Self) -> Result<()> {
        let mut copy = source.try_clone()?;
        self.swap(&mut copy);
        Ok(())
    }
}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Set::new()
    }
}

impl<T: Clone> Clone for Set<T> {
    fn clone(&self) -> Self {
        Set { buffer: self.buffer.clone(), policy: self.policy }
    }

    /// Copy and swap: `self` is untouched if cloning an element panics
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

/// Two sets are equal when they have the same elements, in any order.
/// Capacity and policy don't matter.
impl<T: PartialEq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|element| other.contains(element))
    }
}

impl<T: Eq> Eq for Set<T> {}

impl<T> Index<usize> for Set<T> {
    type Output = T;

    /// Panics with `Error::IndexOutOfRange`'s message if `index >= len()`
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(element) => element,
            Err(e) => panic!("{e}"),
        }
    }
}

/// The element count, followed by each element in parentheses: `3 (a) (b) (c)`.
/// An empty set is just `0`.
impl<T: fmt::Display> fmt::Display for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.len())?;
        for element in self {
            write!(f, " ({element})")?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Set::new();
        set.extend(iter);
        set
    }
}

impl<T: PartialEq> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.buffer.into_vec())
    }
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    fn ints(values: &[i32]) -> Set<i32> {
        let mut set = Set::new();
        for &v in values {
            set.insert(v);
        }
        set
    }

    #[test]
    fn a_new_set_is_empty_with_room_for_one() {
        let set = Set::<i32>::new();
        assert_eq!(set.len(), 0);
        assert!(set.is_empty());
        assert_eq!(set.capacity(), 1);
        assert_eq!(set.policy(), Policy::Lenient);
        assert_eq!(Set::<i32>::default().capacity(), 1);
    }

    #[test]
    fn inserts_keep_first_seen_order_and_ignore_duplicates() {
        let mut set = ints(&[1, 6, 4, 9, 7, 10, 12]);
        assert_eq!(set.as_slice(), [1, 6, 4, 9, 7, 10, 12]);
        assert!(!set.insert(6));
        assert_eq!(set.len(), 7);
        assert!(set.remove(&9));
        assert_eq!(set.as_slice(), [1, 6, 4, 7, 10, 12]);
        assert!(set.insert(9));
        assert_eq!(set.as_slice(), [1, 6, 4, 7, 10, 12, 9]);
    }

    #[test]
    fn removing_a_missing_element_changes_nothing() {
        let mut set = ints(&[1, 2, 3]);
        assert!(!set.remove(&0));
        assert_eq!(set.as_slice(), [1, 2, 3]);
        assert_eq!(set.try_remove(&0).unwrap(), false);
    }

    #[test]
    fn capacity_doubles_as_elements_arrive() {
        let mut set = Set::new();
        let mut capacities = Vec::new();
        for n in 0..9 {
            set.insert(n);
            capacities.push(set.capacity());
        }
        assert_eq!(capacities, [1, 2, 4, 4, 8, 8, 8, 8, 16]);
    }

    #[test]
    fn clear_leaves_no_capacity_and_the_set_still_works() {
        let mut set = ints(&[1, 2, 3]);
        set.clear();
        assert_eq!(set.len(), 0);
        assert_eq!(set.capacity(), 0);
        set.insert(5);
        assert_eq!(set.capacity(), 1);
        set.insert(6);
        assert_eq!(set.capacity(), 2);
        assert_eq!(set.as_slice(), [5, 6]);
    }

    #[test]
    fn get_reports_indexes_outside_the_set() {
        let set = ints(&[1, 6, 4]);
        assert_eq!(*set.get(2).unwrap(), 4);
        for index in [3, 4, 100, usize::MAX] {
            match set.get(index) {
                Err(Error::IndexOutOfRange { index: i, len: 3 }) => assert_eq!(i, index),
                other => panic!("expected IndexOutOfRange, got {other:?}"),
            }
        }
        let empty = Set::<i32>::new();
        assert!(matches!(empty.get(0), Err(Error::IndexOutOfRange { index: 0, len: 0 })));
    }

    #[test]
    fn indexing_works_like_get() {
        let set = ints(&[1, 6, 4]);
        assert_eq!(set[1], 6);
    }

    #[test]
    #[should_panic(expected = "index 3 is out of range for a set of 3 elements")]
    fn indexing_past_the_end_panics() {
        let set = ints(&[1, 6, 4]);
        let _ = set[3];
    }

    #[test]
    fn strict_sets_report_duplicates_and_missing_elements() {
        let mut set = Set::with_policy(Policy::Strict);
        assert!(set.try_insert("a").unwrap());
        assert!(set.try_insert("b").unwrap());
        assert!(matches!(set.try_insert("a"), Err(Error::DuplicateElement { index: 0 })));
        assert!(matches!(set.try_remove(&"z"), Err(Error::ElementNotFound)));
        assert!(set.try_remove(&"a").unwrap());
        assert_eq!(set.as_slice(), ["b"]);
        // the infallible methods stay quiet
        assert!(!set.insert("b"));
        assert!(!set.remove(&"z"));
    }

    #[test]
    fn lenient_try_methods_are_quiet() {
        let mut set = ints(&[1]);
        assert_eq!(set.try_insert(1).unwrap(), false);
        assert_eq!(set.try_insert(2).unwrap(), true);
        assert_eq!(set.as_slice(), [1, 2]);
    }

    #[test]
    fn from_slice_sizes_to_the_input_and_skips_duplicates() {
        let set = Set::from_slice(&[1, 2, 3, 4, 5]);
        assert_eq!(set.as_slice(), [1, 2, 3, 4, 5]);
        assert_eq!(set.capacity(), 5);

        let set = Set::from_slice(&[7, 7, 8, 7]);
        assert_eq!(set.as_slice(), [7, 8]);
        assert_eq!(set.capacity(), 4);

        let mut set = Set::<i32>::from_slice(&[]);
        assert_eq!(set.capacity(), 0);
        set.insert(1);
        assert_eq!(set.capacity(), 1);

        assert_eq!(Set::try_from_slice(&["x", "y", "x"]).unwrap().as_slice(), ["x", "y"]);
    }

    #[test]
    fn from_elements_converts_each_element() {
        let from_doubles = Set::<i32>::from_elements([1.1_f64, 2.2, 3.3, 4.4, 5.5]);
        assert_eq!(from_doubles.as_slice(), [1, 2, 3, 4, 5]);

        let from_chars = Set::<i32>::from_elements(vec!['a', 'b', 'c', 'd', 'e']);
        assert_eq!(from_chars.as_slice(), [97, 98, 99, 100, 101]);

        let from_floats = Set::<f64>::from_elements([1.5_f32, 2.5, 3.5, 4.5, 5.5]);
        assert_eq!(from_floats.as_slice(), [1.5, 2.5, 3.5, 4.5, 5.5]);

        // conversion can produce duplicates; they're skipped
        let collapsed = Set::<i32>::from_elements([1.1_f64, 1.9, 2.0]);
        assert_eq!(collapsed.as_slice(), [1, 2]);

        let words = Set::<String>::try_from_elements(["ciao", "mondo", "ciao"]).unwrap();
        assert_eq!(words.as_slice(), ["ciao", "mondo"]);
    }

    #[test]
    fn from_elements_accepts_a_cursor_range_of_another_set() {
        let doubles = Set::from_slice(&[1.1, 2.2, 3.3]);
        let truncated = Set::<i64>::from_elements(doubles.begin().until(doubles.end()));
        assert_eq!(truncated.as_slice(), [1, 2, 3]);
    }

    #[test]
    fn copies_are_equal_and_independent() {
        let mut original = ints(&[1, 6, 4, 7]);
        let mut copy = original.clone();
        assert_eq!(copy, original);
        assert_eq!(copy.capacity(), original.capacity());
        copy.insert(99);
        original.remove(&1);
        assert_eq!(copy.as_slice(), [1, 6, 4, 7, 99]);
        assert_eq!(original.as_slice(), [6, 4, 7]);

        let strict = Set::<u8>::with_policy(Policy::Strict);
        assert_eq!(strict.try_clone().unwrap().policy(), Policy::Strict);
    }

    #[test]
    fn assign_replaces_the_contents_with_a_copy() {
        let source = ints(&[5, 7, 8]);
        let mut target = ints(&[1, 2, 3, 4, 5]);
        target.assign(&source).unwrap();
        assert_eq!(target.as_slice(), [5, 7, 8]);
        assert_eq!(target.capacity(), source.capacity());

        let mut other = Set::new();
        other.clone_from(&source);
        assert_eq!(other, source);
    }

    // Cloning panics for values of 100 and up
    #[derive(Debug, PartialEq)]
    struct Shaky(u32);

    impl Clone for Shaky {
        fn clone(&self) -> Self {
            assert!(self.0 < 100, "can't clone {}", self.0);
            Shaky(self.0)
        }
    }

    #[test]
    fn a_copy_that_panics_part_way_leaves_the_target_as_it_was() {
        use std::panic::{catch_unwind, AssertUnwindSafe};

        let mut source = Set::new();
        source.insert(Shaky(1));
        source.insert(Shaky(100));
        let mut target = Set::new();
        target.insert(Shaky(9));

        let result = catch_unwind(AssertUnwindSafe(|| target.clone_from(&source)));
        assert!(result.is_err());
        assert_eq!(target.as_slice(), [Shaky(9)]);
        assert_eq!(target.capacity(), 1);

        let result = catch_unwind(AssertUnwindSafe(|| target.assign(&source)));
        assert!(result.is_err());
        assert_eq!(target.as_slice(), [Shaky(9)]);
        assert_eq!(target.capacity(), 1);
    }

    #[test]
    fn swap_exchanges_everything() {
        let mut a = ints(&[1, 2, 3]);
        let mut b = Set::with_policy(Policy::Strict);
        b.insert(9);
        a.swap(&mut b);
        assert_eq!(a.as_slice(), [9]);
        assert_eq!(a.policy(), Policy::Strict);
        assert_eq!(b.as_slice(), [1, 2, 3]);
        assert_eq!(b.capacity(), 4);
    }

    #[test]
    fn equality_ignores_order_capacity_and_policy() {
        let a = ints(&[1, 2, 3]);
        let b = Set::from_slice(&[3, 1, 2]);
        assert_eq!(a, b);
        let mut strict = Set::with_policy(Policy::Strict);
        strict.extend([2, 3, 1]);
        assert_eq!(a, strict);
        assert_ne!(a, ints(&[1, 2]));
        assert_ne!(a, ints(&[1, 2, 4]));
        assert_eq!(Set::<i32>::new(), Set::from_slice(&[]));
    }

    #[test]
    fn display_shows_the_count_and_each_element() {
        assert_eq!(ints(&[1, 6, 4, 9, 7, 10, 12]).to_string(), "7 (1) (6) (4) (9) (7) (10) (12)");
        assert_eq!(Set::<i32>::new().to_string(), "0");
        assert_eq!(Set::from_slice(&["Ciao"]).to_string(), "1 (Ciao)");
    }

    #[test]
    fn debug_looks_like_a_set() {
        assert_eq!(format!("{:?}", ints(&[3, 1])), "{3, 1}");
    }

    proptest! {
        #[test]
        fn insert_makes_an_element_present(
            values in prop::collection::vec(0..20_i32, 0..30),
            x in 0..20_i32,
        ) {
            let mut set: Set<i32> = values.into_iter().collect();
            let before = set.len();
            let was_present = set.contains(&x);
            prop_assert_eq!(set.insert(x), !was_present);
            prop_assert!(set.contains(&x));
            prop_assert_eq!(set.len(), if was_present { before } else { before + 1 });
            if !was_present {
                prop_assert_eq!(set.as_slice().last(), Some(&x));
            }
        }

        #[test]
        fn remove_makes_an_element_absent_and_keeps_the_rest_in_order(
            values in prop::collection::vec(0..20_i32, 0..30),
            x in 0..20_i32,
        ) {
            let mut set: Set<i32> = values.into_iter().collect();
            let expected: Vec<i32> = set.iter().copied().filter(|&v| v != x).collect();
            let before = set.len();
            let was_present = set.contains(&x);
            prop_assert_eq!(set.remove(&x), was_present);
            prop_assert!(!set.contains(&x));
            prop_assert_eq!(set.len(), if was_present { before - 1 } else { before });
            prop_assert_eq!(set.as_slice(), &expected[..]);
        }

        #[test]
        fn elements_are_always_distinct(values in prop::collection::vec(0..10_u8, 0..50)) {
            let set: Set<u8> = values.iter().copied().collect();
            for (i, a) in set.iter().enumerate() {
                prop_assert!(set.iter().skip(i + 1).all(|b| a != b));
            }
            prop_assert!(set.len() <= set.capacity());
            prop_assert!(values.iter().all(|v| set.contains(v)));
        }
    }
}
