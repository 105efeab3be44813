//! Entity handles
//!
//! DXF writes handles as hexadecimal strings under group code 5.

use std::fmt;
use std::str::FromStr;

/// Unique identifier of an entity within a drawing. Handle 0 means "unset".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Handle(u64);

impl Handle {
    /// The unset handle
    pub const NULL: Handle = Handle(0);

    /// Create a handle from its numeric value
    #[inline]
    pub const fn new(value: u64) -> Self {
        Handle(value)
    }

    /// Get the raw value
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Check if this is the unset handle
    #[inline]
    pub const fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// Parse the hexadecimal text form used in DXF files (`"1F"`, `" 2a "`).
    pub fn from_hex(text: &str) -> Option<Handle> {
        u64::from_str_radix(text.trim(), 16).ok().map(Handle)
    }
}

impl FromStr for Handle {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        u64::from_str_radix(s.trim(), 16).map(Handle)
    }
}

impl From<u64> for Handle {
    fn from(value: u64) -> Self {
        Handle(value)
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}", self.0)
    }
}
