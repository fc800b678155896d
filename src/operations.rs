//! Set algebra: `union`, `intersection` and `filter_out`, plus the parity
//! predicates `is_even` and `is_odd`.
//!
//! These use nothing but `Set`'s public interface, and none of them changes
//! its operands. Each returns a new, lenient `Set` that owns its elements.
//!
//! * `union(a, b)` holds the elements of `a`, in `a`'s order, followed by the
//!   elements of `b` that aren't in `a`, in `b`'s order,
//! * `intersection(a, b)` holds the elements of `a` that are also in `b`, in
//!   `a`'s order, and
//! * `filter_out(s, p)` holds the elements of `s` for which `p` is true, in
//!   `s`'s order. (It filters the *matching* elements out of `s` into the
//!   result; it doesn't discard them.)
//!
//! `&a | &b` and `&a & &b` are shorthand for `union` and `intersection`.
use std::ops::{BitAnd, BitOr, Rem};

use crate::set::Set;

/// The elements of `a` or `b`: `a`'s elements first, then `b`'s new ones
///
/// ```
/// use vset::{union, Set};
///
/// let a = Set::from_slice(&[1, 6, 4, 7, 10, 12, 9]);
/// let b = Set::from_slice(&[5, 7, 8]);
/// assert_eq!(union(&a, &b).as_slice(), [1, 6, 4, 7, 10, 12, 9, 5, 8]);
/// ```
#[must_use]
pub fn union<T: PartialEq + Clone>(a: &Set<T>, b: &Set<T>) -> Set<T> {
    let mut result = Set::new();
    // `a`'s elements are already distinct, so every one of them goes in
    for element in a {
        result.insert(element.clone());
    }
    for element in b {
        if !result.contains(element) {
            result.insert(element.clone());
        }
    }
    result
}

/// The elements of `a` that are also in `b`, in `a`'s order
///
/// ```
/// use vset::{intersection, Set};
///
/// let a = Set::from_slice(&[1, 6, 4, 7, 10, 12, 9]);
/// let b = Set::from_slice(&[5, 7, 8]);
/// assert_eq!(intersection(&a, &b).as_slice(), [7]);
/// ```
#[must_use]
pub fn intersection<T: PartialEq + Clone>(a: &Set<T>, b: &Set<T>) -> Set<T> {
    let mut result = Set::new();
    for element in a {
        if b.contains(element) {
            result.insert(element.clone());
        }
    }
    result
}

/// The elements of `set` for which `predicate` returns `true`, in `set`'s
/// order. The predicate should be pure: it's called once per element.
///
/// ```
/// use vset::{filter_out, is_even, Set};
///
/// let set = Set::from_slice(&[1, 6, 4, 7, 10, 12, 9, 5, 8]);
/// assert_eq!(filter_out(&set, is_even).as_slice(), [6, 4, 10, 12, 8]);
/// assert_eq!(filter_out(&set, |n| *n > 9).as_slice(), [10, 12]);
/// ```
#[must_use]
pub fn filter_out<T, P>(set: &Set<T>, predicate: P) -> Set<T>
where
    T: PartialEq + Clone,
    P: Fn(&T) -> bool,
{
    let mut result = Set::new();
    for element in set {
        if predicate(element) {
            result.insert(element.clone());
        }
    }
    result
}

/// Is `n` divisible by two? `N` is an integer type; floats aren't `Ord`, so
/// they're turned away.
///
/// ```compile_fail
/// vset::is_even(&2.5_f64);
/// ```
#[must_use]
pub fn is_even<N>(n: &N) -> bool
where
    N: Copy + Rem<Output = N> + Ord + From<u8>,
{
    *n % N::from(2) == N::from(0)
}

/// Is `n` not divisible by two? (Negative odd numbers are odd too.)
///
/// ```compile_fail
/// vset::is_odd(&2.5_f32);
/// ```
#[must_use]
pub fn is_odd<N>(n: &N) -> bool
where
    N: Copy + Rem<Output = N> + Ord + From<u8>,
{
    !is_even(n)
}

impl<T: PartialEq + Clone> BitOr<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    /// `&a | &b` is `union(&a, &b)`
    fn bitor(self, other: &Set<T>) -> Set<T> {
        union(self, other)
    }
}

impl<T: PartialEq + Clone> BitAnd<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    /// `&a & &b` is `intersection(&a, &b)`
    fn bitand(self, other: &Set<T>) -> Set<T> {
        intersection(self, other)
    }
}
