//! Permissive Latin-1 line reading.
//!
//! Game server logs are not reliably UTF-8 (player names arrive in whatever
//! encoding the client used), so lines are decoded byte-for-byte: every byte
//! value 0x00-0xFF maps to the Unicode code point of equal value. No line is
//! ever rejected for encoding reasons, and bytes consumed equals characters
//! produced.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use sift_core::error::{Result, SiftError};

// ── Latin1Lines ───────────────────────────────────────────────────────────────

/// Iterator over the lines of a reader decoded as Latin-1.
///
/// Each item is the decoded line (terminator included, as the raw pattern
/// matching expects it) together with its length in bytes.
#[derive(Debug)]
pub struct Latin1Lines<R> {
    inner: R,
    buf: Vec<u8>,
}

impl Latin1Lines<BufReader<File>> {
    /// Open `path` for scanning.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| SiftError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> Latin1Lines<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for Latin1Lines<R> {
    type Item = std::io::Result<(String, usize)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.inner.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(n) => {
                let line: String = self.buf.iter().map(|&b| b as char).collect();
                Some(Ok((line, n)))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
