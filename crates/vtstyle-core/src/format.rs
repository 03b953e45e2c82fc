//! Text format attributes (SGR rendition parameters).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A single text format attribute.
///
/// Each attribute carries a fixed SGR (Select Graphic Rendition) number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatAttribute {
    /// All attributes off (SGR 0)
    #[default]
    Normal,
    /// Bright / bold (SGR 1)
    Bright,
    /// Dim / faint (SGR 2)
    Dim,
    /// Underline (SGR 4)
    Underline,
    /// Blink (SGR 5)
    Blink,
    /// Reverse video (SGR 7)
    Reverse,
    /// Hidden / concealed (SGR 8)
    Hidden,
}

impl FormatAttribute {
    /// Every attribute, in SGR order.
    pub const ALL: [FormatAttribute; 7] = [
        FormatAttribute::Normal,
        FormatAttribute::Bright,
        FormatAttribute::Dim,
        FormatAttribute::Underline,
        FormatAttribute::Blink,
        FormatAttribute::Reverse,
        FormatAttribute::Hidden,
    ];

    /// The SGR parameter for this attribute.
    pub fn sgr(self) -> u8 {
        match self {
            FormatAttribute::Normal => 0,
            FormatAttribute::Bright => 1,
            FormatAttribute::Dim => 2,
            FormatAttribute::Underline => 4,
            FormatAttribute::Blink => 5,
            FormatAttribute::Reverse => 7,
            FormatAttribute::Hidden => 8,
        }
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            FormatAttribute::Normal => "normal",
            FormatAttribute::Bright => "bright",
            FormatAttribute::Dim => "dim",
            FormatAttribute::Underline => "underline",
            FormatAttribute::Blink => "blink",
            FormatAttribute::Reverse => "reverse",
            FormatAttribute::Hidden => "hidden",
        }
    }
}

impl fmt::Display for FormatAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormatAttribute {
    type Err = Error;

    /// Case-insensitive exact match; "bold" is accepted for [`FormatAttribute::Bright`].
    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("bold") {
            return Ok(FormatAttribute::Bright);
        }
        FormatAttribute::ALL
            .into_iter()
            .find(|format| s.eq_ignore_ascii_case(format.name()))
            .ok_or_else(|| Error::UnknownFormat(s.to_string()))
    }
}
