//! AutoCAD Color Index values carried by group code 62

use std::fmt;

/// Entity color as stored in an ASCII DXF file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Index 256
    #[default]
    ByLayer,
    /// Index 0
    ByBlock,
    /// ACI 1-255
    Index(u8),
}

impl Color {
    pub const RED: Color = Color::Index(1);
    pub const YELLOW: Color = Color::Index(2);
    pub const GREEN: Color = Color::Index(3);
    pub const CYAN: Color = Color::Index(4);
    pub const BLUE: Color = Color::Index(5);
    pub const MAGENTA: Color = Color::Index(6);
    pub const WHITE: Color = Color::Index(7);

    /// Build a color from a raw group 62 value.
    ///
    /// Negative values mark an entity whose layer is switched off; the
    /// magnitude is still the color.
    pub fn from_index(index: i16) -> Self {
        match index.unsigned_abs() {
            0 => Color::ByBlock,
            256 => Color::ByLayer,
            i @ 1..=255 => Color::Index(i as u8),
            _ => Color::WHITE,
        }
    }

    /// Raw ACI value (0 for ByBlock, 256 for ByLayer)
    pub fn index(&self) -> u16 {
        match self {
            Color::ByBlock => 0,
            Color::ByLayer => 256,
            Color::Index(i) => u16::from(*i),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::ByLayer => write!(f, "ByLayer"),
            Color::ByBlock => write!(f, "ByBlock"),
            Color::Index(i) => write!(f, "Index({})", i),
        }
    }
}
