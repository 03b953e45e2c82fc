//! C0 control-character table.
//!
//! Maps the caret-notation letter of a control byte (`^A` .. `^_`) to the
//! byte itself, so callers can embed raw control bytes such as SUB (`^Z`)
//! inside otherwise printable output.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Keys of the table in byte order: `'A'` maps to 0x01, `'_'` maps to 0x1F.
const CONTROL_KEYS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_";

lazy_static! {
    static ref CONTROL_TABLE: HashMap<char, u8> = CONTROL_KEYS
        .chars()
        .zip(0x01u8..=0x1F)
        .collect();
}

/// Look up the C0 control byte for a caret-notation letter.
///
/// Only uppercase `'A'..='Z'` and `[`, `\`, `]`, `^`, `_` are mapped; any
/// other key returns `None`.
///
/// # Examples
///
/// ```
/// use vtstyle_core::control_byte;
///
/// assert_eq!(control_byte('Z'), Some(0x1A));
/// assert_eq!(control_byte('9'), None);
/// ```
pub fn control_byte(letter: char) -> Option<u8> {
    CONTROL_TABLE.get(&letter).copied()
}
