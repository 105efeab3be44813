//! ASCII DXF reader

use std::io::BufRead;

use encoding_rs::Encoding;

use super::tagged_reader::{TaggedPair, TaggedReader};
use crate::error::{Result, StructuralError};

/// Reads tagged pairs from an ASCII DXF stream, one code line and one
/// value line per pair.
pub struct DxfTextReader<R: BufRead> {
    reader: R,
    line_number: u64,
    pushed_back: Option<TaggedPair>,
    /// Fallback for lines that are not UTF-8. `None` decodes as Latin-1.
    encoding: Option<&'static Encoding>,
}

impl<R: BufRead> DxfTextReader<R> {
    /// Create a reader that decodes UTF-8 with a Latin-1 fallback
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            pushed_back: None,
            encoding: None,
        }
    }

    /// Use `encoding` for lines that are not valid UTF-8
    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// Read one physical line without its terminator.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        while matches!(bytes.last(), Some(b'\n' | b'\r')) {
            bytes.pop();
        }
        self.line_number += 1;

        let mut line = match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(err) => {
                let bytes = err.into_bytes();
                match self.encoding {
                    Some(enc) => enc.decode(&bytes).0.into_owned(),
                    // Latin-1 maps each byte to the code point of the same value
                    None => bytes.iter().map(|&b| b as char).collect(),
                }
            }
        };

        if self.line_number == 1 && line.starts_with('\u{feff}') {
            line.remove(0);
        }
        Ok(Some(line))
    }
}

impl<R: BufRead> TaggedReader for DxfTextReader<R> {
    fn next_pair(&mut self) -> Result<TaggedPair> {
        if let Some(pair) = self.pushed_back.take() {
            self.line_number += 2;
            return Ok(pair);
        }

        let code = self
            .read_line()?
            .ok_or(StructuralError::UnexpectedEof(self.line_number))?;
        let code = code.trim().to_string();

        let value = self.read_line()?.ok_or_else(|| StructuralError::TruncatedPair {
            code: code.clone(),
            line: self.line_number,
        })?;

        Ok(TaggedPair { code, value })
    }

    fn at_end(&mut self) -> Result<bool> {
        if self.pushed_back.is_some() {
            return Ok(false);
        }
        Ok(self.reader.fill_buf()?.is_empty())
    }

    fn position(&self) -> u64 {
        self.line_number
    }

    fn push_back(&mut self, pair: TaggedPair) {
        self.line_number = self.line_number.saturating_sub(2);
        self.pushed_back = Some(pair);
    }

    fn set_encoding(&mut self, encoding: &'static Encoding) {
        self.encoding = Some(encoding);
    }
}
