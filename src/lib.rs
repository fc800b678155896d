//! `vset` provides `Set`, an insertion-ordered collection of distinct
//! elements, along with the set algebra (`union`, `intersection`,
//! `filter_out`) and `save`, which writes a set to a file one element per line.
//!
//! The `vset` command applies the same operations to files considered as sets
//! of lines. Its pieces live here too: the `args` module parses the command
//! line, the `operands` module reads the files, and `calculate` does the work.
//!
//! ```
//! use vset::{filter_out, intersection, is_odd, union, Set};
//!
//! let a = Set::from_slice(&[1, 6, 4, 7, 10, 12, 9]);
//! let b = Set::from_slice(&[5, 7, 8]);
//! let both = union(&a, &b);
//! assert_eq!(both.as_slice(), [1, 6, 4, 7, 10, 12, 9, 5, 8]);
//! assert_eq!(intersection(&a, &b).as_slice(), [7]);
//! assert_eq!(filter_out(&both, is_odd).as_slice(), [1, 7, 9, 5]);
//! ```
//!
//! Current Limitations:
//! * Membership is a linear scan, so building a set of `n` elements takes
//!   `O(n²)` comparisons. That's the price of needing only `PartialEq` from
//!   the element type; it's fine for the sizes `vset` is meant for.
//! * `save` doesn't escape anything, so elements containing newlines don't
//!   survive a round trip through a file.

#![cfg_attr(debug_assertions, allow(dead_code, unused_imports))]
#![deny(unused_must_use)]
#![deny(clippy::all)]
#![allow(clippy::needless_return)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![deny(missing_docs)]

pub mod args;
mod buffer;
pub mod calculate;
pub mod convert;
pub mod error;
pub mod io;
pub mod iter;
pub mod operands;
pub mod operations;
pub mod set;

pub use crate::convert::FromElement;
pub use crate::error::{Error, Result};
pub use crate::io::{save, write_to};
pub use crate::iter::{Cursor, IntoIter, Iter};
pub use crate::operations::{filter_out, intersection, is_even, is_odd, union};
pub use crate::set::{Policy, Set};
