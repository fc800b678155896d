//! Provides the `FromElement` trait, the explicit conversion step used when a
//! `Set` is built from elements of some other type.
//!
//! Rust won't silently turn an `f64` into an `i32`, so building a `Set<i32>`
//! from a sequence of doubles needs to say how each double becomes an integer.
//! `FromElement` says that. For the primitive numeric types (and `char`) it is
//! the `as` conversion, with exactly `as`'s rules: floats truncate toward zero
//! and saturate at the target type's bounds, wider integers wrap, and a `char`
//! becomes its code point.
//!
//! ```
//! use vset::Set;
//!
//! let from_doubles = Set::<i32>::from_elements([1.1_f64, 2.2, 3.3, 4.4, 5.5]);
//! assert_eq!(from_doubles.as_slice(), [1, 2, 3, 4, 5]);
//!
//! let from_chars = Set::<i32>::from_elements(['a', 'b', 'c']);
//! assert_eq!(from_chars.as_slice(), [97, 98, 99]);
//! ```
//!
//! Implement `FromElement` for your own element types to make them buildable
//! from other sequences.

/// Conversion of one source element into a set element
pub trait FromElement<S>: Sized {
    /// Converts `source` into `Self`
    fn from_element(source: S) -> Self;
}

// Every pair of primitive numeric types, converted with `as`
macro_rules! numeric_from_element {
    (@each $target:ty, [$($source:ty),*]) => {
        $(
            impl FromElement<$source> for $target {
                #[inline]
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss,
                    clippy::cast_possible_wrap,
                    clippy::cast_lossless
                )]
                fn from_element(source: $source) -> Self {
                    source as $target
                }
            }
        )*
    };
    ($($target:ty),* ; $sources:tt) => {
        $( numeric_from_element!(@each $target, $sources); )*
    };
}

numeric_from_element!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64;
    [i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64]
);

// `char` converts to any integer type (its code point, truncated as `as` does)
macro_rules! char_from_element {
    ($($target:ty),*) => {
        $(
            impl FromElement<char> for $target {
                #[inline]
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_possible_wrap,
                    clippy::cast_lossless
                )]
                fn from_element(source: char) -> Self {
                    source as $target
                }
            }
        )*
    };
}

char_from_element!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl FromElement<char> for char {
    fn from_element(source: char) -> Self {
        source
    }
}

impl FromElement<bool> for bool {
    fn from_element(source: bool) -> Self {
        source
    }
}

impl FromElement<String> for String {
    fn from_element(source: String) -> Self {
        source
    }
}

impl FromElement<&str> for String {
    fn from_element(source: &str) -> Self {
        source.to_owned()
    }
}

impl FromElement<&String> for String {
    fn from_element(source: &String) -> Self {
        source.clone()
    }
}

impl FromElement<char> for String {
    fn from_element(source: char) -> Self {
        source.to_string()
    }
}

// Cursors and `Set::iter` yield references; convert through the referent
macro_rules! by_reference {
    ($($t:ty),*) => {
        $(
            impl<T: FromElement<$t>> FromElement<&$t> for T {
                #[inline]
                fn from_element(source: &$t) -> Self {
                    T::from_element(*source)
                }
            }
        )*
    };
}

by_reference!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char, bool);
