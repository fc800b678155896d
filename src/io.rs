//! Writing a `Set` as text: one element per line, in the set's order, each
//! line ending in `\n`. There's no header and no escaping, so an element whose
//! text contains a newline will read back as more than one line.
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::set::Set;

/// Write each element of `set` to the file at `path`, one per line, creating
/// the file or truncating an existing one.
///
/// Returns `Error::FileOpen` if the file can't be opened for writing, and
/// `Error::Write` if writing fails part way. In the latter case the file may
/// hold some of the lines.
pub fn save<T: std::fmt::Display>(set: &Set<T>, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file =
        File::create(path).map_err(|source| Error::FileOpen { path: path.to_owned(), source })?;
    write_to(set, BufWriter::new(file))
        .map_err(|source| Error::Write { path: path.to_owned(), source })?;
    debug!(elements = set.len(), path = %path.display(), "saved set");
    Ok(())
}

/// Write each element of `set` to `out`, one per line, then flush `out`
pub fn write_to<T: std::fmt::Display>(set: &Set<T>, mut out: impl Write) -> io::Result<()> {
    for element in set {
        writeln!(out, "{element}")?;
    }
    out.flush()
}
