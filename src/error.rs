//! The `Error` type returned by fallible `Set` operations and by `save`.
use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// `Result<T>` is shorthand for `std::result::Result<T, vset::Error>`
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong in the container and its persistence.
#[derive(Debug, Error)]
pub enum Error {
    /// Indexed read access outside `[0, len)`
    #[error("index {index} is out of range for a set of {len} elements")]
    IndexOutOfRange {
        /// The index that was asked for
        index: usize,
        /// The number of elements in the set at the time
        len: usize,
    },

    /// The destination of `save` couldn't be opened for writing
    #[error("can't open file for writing: {}", .path.display())]
    FileOpen {
        /// The destination path
        path: PathBuf,
        /// Why the open failed
        #[source]
        source: io::Error,
    },

    /// The destination of `save` was opened, but writing to it failed
    #[error("error writing file: {}", .path.display())]
    Write {
        /// The destination path
        path: PathBuf,
        /// Why the write failed
        #[source]
        source: io::Error,
    },

    /// The allocator couldn't provide the storage a set needed
    #[error("couldn't allocate storage for the set")]
    Allocation(#[from] TryReserveError),

    /// A strict set was asked to insert an element it already holds
    #[error("the element is already in the set (at index {index})")]
    DuplicateElement {
        /// Where the existing element is
        index: usize,
    },

    /// A strict set was asked to remove an element it doesn't hold
    #[error("the element is not in the set")]
    ElementNotFound,
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn messages_name_the_offending_index_and_length() {
        let e = Error::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(e.to_string(), "index 7 is out of range for a set of 3 elements");
        let e = Error::DuplicateElement { index: 2 };
        assert_eq!(e.to_string(), "the element is already in the set (at index 2)");
    }

    #[test]
    fn file_errors_keep_the_io_error_as_their_source() {
        let e = Error::FileOpen {
            path: PathBuf::from("nowhere/out.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        };
        assert_eq!(e.to_string(), "can't open file for writing: nowhere/out.txt");
        assert_eq!(e.source().unwrap().to_string(), "no such directory");
    }
}
