//! Provides `Operands`, an iterator that reads each file named on the command
//! line into a `Set<String>` of its lines.
//!
//! All the files are opened up front, so a misspelled file name is reported
//! before any work is done. Each file is then read through a decoder that
//! looks at the Byte Order Mark, so UTF-16 files are translated to UTF-8.
//! Bytes that aren't valid UTF-8 become the Unicode REPLACEMENT CHARACTER.
use anyhow::{Context, Result};
use bstr::io::BufReadExt;
use encoding_rs_io::{DecodeReaderBytes, DecodeReaderBytesBuilder};
use std::{
    fs::File,
    io::{BufReader, Read},
    path::PathBuf,
};
use tracing::debug;

use crate::set::{Policy, Set};

/// The files to read, each paired with its name for use in error messages.
///
/// * `T` - The type of the data being read
pub struct Operands<T: Read> {
    files: std::vec::IntoIter<(String, T)>,
}

impl<T: Read> From<Vec<(String, T)>> for Operands<T> {
    fn from(files: Vec<(String, T)>) -> Self {
        Operands { files: files.into_iter() }
    }
}

impl Operands<File> {
    /// Open every file in `paths`, failing on the first one that can't be opened
    pub fn from_paths(paths: &[PathBuf]) -> Result<Operands<File>> {
        let mut files: Vec<(String, File)> = Vec::new();
        for path in paths {
            let path_display = format!("{}", path.display());
            let file =
                File::open(path).with_context(|| format!("Can't open file: {path_display}"))?;
            files.push((path_display, file));
        }
        Ok(Operands::from(files))
    }
}

impl<T: Read> Iterator for Operands<T> {
    type Item = NextOperand<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.files.next().map(|(path_display, file)| {
            let reader = BufReader::new(
                // A BOM selects UTF-16 decoding and is dropped; anything else
                // passes through as bytes
                DecodeReaderBytesBuilder::new()
                    .bom_sniffing(true)
                    .strip_bom(true)
                    .utf8_passthru(true)
                    .build(file),
            );
            NextOperand { path_display, reader }
        })
    }
}

/// `NextOperand` is the `Item` type for the `Operands` iterator. The `reader`
/// field reads (and decodes) one file, and `path_display` is that file's name
/// formatted for error messages.
pub struct NextOperand<T: Read> {
    path_display: String,
    reader: BufReader<DecodeReaderBytes<T, Vec<u8>>>,
}

impl<T: Read> NextOperand<T> {
    /// Read the file's lines into a `Set` with the given `policy`. Line
    /// terminators (`\n` or `\r\n`) are not part of the elements. With
    /// `Policy::Strict`, a line that occurs twice is an error.
    pub fn into_set(self, policy: Policy) -> Result<Set<String>> {
        let NextOperand { mut reader, path_display } = self;
        let mut set = Set::with_policy(policy);
        let mut refused = None;
        let mut line_number = 0_usize;
        reader
            .for_byte_line(|line| {
                line_number += 1;
                match set.try_insert(String::from_utf8_lossy(line).into_owned()) {
                    Ok(_) => Ok(true),
                    Err(e) => {
                        refused = Some(e);
                        Ok(false)
                    }
                }
            })
            .with_context(|| format!("Error reading file: {path_display}"))?;
        if let Some(e) = refused {
            return Err(e).with_context(|| format!("{path_display}, line {line_number}"));
        }
        debug!(file = %path_display, lines = line_number, distinct = set.len(), "read operand");
        Ok(set)
    }
}
