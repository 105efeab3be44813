//! Tagged pair stream abstraction

use std::collections::VecDeque;

use encoding_rs::Encoding;

use crate::error::{Result, StructuralError};

/// One group code and the value that follows it, exactly as read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedPair {
    /// Group code text with surrounding whitespace removed
    pub code: String,
    /// Value text without its line terminator
    pub value: String,
}

impl TaggedPair {
    /// Create a pair from its two lines
    pub fn new(code: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            value: value.into(),
        }
    }

    /// Numeric group code, `None` when the code line is not an integer
    pub fn group_code(&self) -> Option<i16> {
        self.code.trim().parse().ok()
    }

    /// `true` when this pair carries `code` and, ignoring padding, `value`
    pub fn is(&self, code: i16, value: &str) -> bool {
        self.group_code() == Some(code) && self.value.trim() == value
    }
}

/// Source of tagged pairs.
///
/// Implementations never interpret values; typing is left to consumers.
pub trait TaggedReader {
    /// Read the next pair, consuming two physical records.
    ///
    /// Fails with [`StructuralError::UnexpectedEof`] when nothing is left;
    /// callers check [`at_end`](TaggedReader::at_end) first.
    fn next_pair(&mut self) -> Result<TaggedPair>;

    /// `true` once every pair has been consumed
    fn at_end(&mut self) -> Result<bool>;

    /// Number of physical records consumed so far
    fn position(&self) -> u64;

    /// Return a pair so the next `next_pair` call yields it again
    fn push_back(&mut self, pair: TaggedPair);

    /// Encoding used for records that are not valid UTF-8
    fn set_encoding(&mut self, _encoding: &'static Encoding) {}
}

/// In-memory reader over a prepared list of pairs.
#[derive(Debug, Clone, Default)]
pub struct PairListReader {
    pairs: VecDeque<TaggedPair>,
    position: u64,
}

impl PairListReader {
    /// Create a reader over the given pairs
    pub fn new(pairs: impl IntoIterator<Item = TaggedPair>) -> Self {
        Self {
            pairs: pairs.into_iter().collect(),
            position: 0,
        }
    }

    /// Build from `(code, value)` tuples
    pub fn from_tuples<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self::new(pairs.into_iter().map(|(c, v)| TaggedPair::new(c, v)))
    }
}

impl TaggedReader for PairListReader {
    fn next_pair(&mut self) -> Result<TaggedPair> {
        let pair = self
            .pairs
            .pop_front()
            .ok_or(StructuralError::UnexpectedEof(self.position))?;
        self.position += 2;
        Ok(pair)
    }

    fn at_end(&mut self) -> Result<bool> {
        Ok(self.pairs.is_empty())
    }

    fn position(&self) -> u64 {
        self.position
    }

    fn push_back(&mut self, pair: TaggedPair) {
        self.position = self.position.saturating_sub(2);
        self.pairs.push_front(pair);
    }
}
