//! Line-oriented access to source files.
//!
//! Lines are split on raw `0x0A` bytes and then decoded with a fixed,
//! configured encoding. Only ASCII-compatible encodings are accepted by
//! `Config::validate`, so a newline byte can never sit inside a multi-byte
//! character.

use crate::error::{EngineError, Result};
use encoding_rs::Encoding;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Look up an encoding by its WHATWG label (`utf-8`, `shift_jis`, `windows-31j`, ...).
///
/// # Errors
/// Returns `EngineError::Config` for unknown labels.
pub fn encoding_for_label(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| EngineError::Config(format!("Unknown encoding label: {label}")))
}

/// Remove trailing `\r` / `\n` characters.
#[must_use]
pub fn strip_line_terminator(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}

/// Open `path` and iterate over its decoded lines.
///
/// # Errors
/// Returns `EngineError::FileRead` if the file cannot be opened.
pub fn open_lines(path: &Path, encoding: &'static Encoding) -> Result<LineReader<BufReader<File>>> {
    let file = File::open(path).map_err(|source| EngineError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(LineReader::new(BufReader::new(file), encoding, path))
}

/// Iterator over the decoded lines of a byte stream.
///
/// Each item keeps its line terminator. The first read or decode error is
/// yielded once, after which the iterator is exhausted.
pub struct LineReader<R> {
    reader: R,
    encoding: &'static Encoding,
    path: PathBuf,
    line_number: usize,
    buf: Vec<u8>,
    failed: bool,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R, encoding: &'static Encoding, path: impl Into<PathBuf>) -> Self {
        Self {
            reader,
            encoding,
            path: path.into(),
            line_number: 0,
            buf: Vec::new(),
            failed: false,
        }
    }

    fn decode_current(&self) -> Option<String> {
        let mut bytes = self.buf.as_slice();
        if self.line_number == 1 && self.encoding == encoding_rs::UTF_8 {
            bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        }
        self.encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(std::borrow::Cow::into_owned)
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                self.line_number += 1;
                if let Some(line) = self.decode_current() {
                    Some(Ok(line))
                } else {
                    self.failed = true;
                    Some(Err(EngineError::Decode {
                        path: self.path.clone(),
                        line: self.line_number,
                        encoding: self.encoding.name(),
                    }))
                }
            }
            Err(source) => {
                self.failed = true;
                Some(Err(EngineError::FileRead {
                    path: self.path.clone(),
                    source,
                }))
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for LineReader<R> {}
