//! Color selectors for the eight-color ANSI palette and the 256-color palette.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, FormatAttribute, Result};

/// Base color of the eight-color palette, plus the terminal default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorName {
    /// ANSI Black (0)
    Black,
    /// ANSI Red (1)
    Red,
    /// ANSI Green (2)
    Green,
    /// ANSI Yellow (3)
    Yellow,
    /// ANSI Blue (4)
    Blue,
    /// ANSI Magenta (5)
    Magenta,
    /// ANSI Cyan (6)
    Cyan,
    /// ANSI White (7)
    White,
    /// Terminal default color (9). Not reachable by name parsing.
    Default,
}

impl ColorName {
    /// The colors that can be selected by name, in palette order.
    pub const NAMED: [ColorName; 8] = [
        ColorName::Black,
        ColorName::Red,
        ColorName::Green,
        ColorName::Yellow,
        ColorName::Blue,
        ColorName::Magenta,
        ColorName::Cyan,
        ColorName::White,
    ];

    /// Base palette index: 0-7, or 9 for [`ColorName::Default`].
    pub fn palette_index(self) -> u8 {
        match self {
            ColorName::Black => 0,
            ColorName::Red => 1,
            ColorName::Green => 2,
            ColorName::Yellow => 3,
            ColorName::Blue => 4,
            ColorName::Magenta => 5,
            ColorName::Cyan => 6,
            ColorName::White => 7,
            ColorName::Default => 9,
        }
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            ColorName::Black => "black",
            ColorName::Red => "red",
            ColorName::Green => "green",
            ColorName::Yellow => "yellow",
            ColorName::Blue => "blue",
            ColorName::Magenta => "magenta",
            ColorName::Cyan => "cyan",
            ColorName::White => "white",
            ColorName::Default => "default",
        }
    }

    /// Attach a format, producing a selector.
    pub fn with_format(self, format: FormatAttribute) -> ColorSelector {
        ColorSelector::new(self, format)
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ColorName::NAMED
            .into_iter()
            .find(|color| s.eq_ignore_ascii_case(color.name()))
            .ok_or_else(|| Error::UnknownColor(s.to_string()))
    }
}

/// A base color with exactly one attached format.
///
/// Selectors are plain values; picking a different color means building a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorSelector {
    /// Base color
    pub color: ColorName,
    /// Attached format
    pub format: FormatAttribute,
}

impl ColorSelector {
    /// Create a selector from a color and a format.
    pub fn new(color: ColorName, format: FormatAttribute) -> Self {
        Self { color, format }
    }

    /// Create a selector with [`FormatAttribute::Normal`].
    pub fn plain(color: ColorName) -> Self {
        Self::new(color, FormatAttribute::Normal)
    }

    /// The terminal default color with a normal format.
    pub fn terminal_default() -> Self {
        Self::plain(ColorName::Default)
    }

    /// Base palette index of the color.
    pub fn palette_index(&self) -> u8 {
        self.color.palette_index()
    }
}

impl From<ColorName> for ColorSelector {
    fn from(color: ColorName) -> Self {
        Self::plain(color)
    }
}

/// Index into the extended 256-color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette256Index(pub u8);

impl Palette256Index {
    /// Create a palette index.
    pub fn new(index: u8) -> Self {
        Self(index)
    }

    /// Raw index value.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl From<u8> for Palette256Index {
    fn from(index: u8) -> Self {
        Self(index)
    }
}

impl fmt::Display for Palette256Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
