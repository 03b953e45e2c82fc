//! # vtstyle-core
//!
//! Core types for vtstyle.
//!
//! This crate contains everything that does not touch a real stream, with
//! **no internal dependencies** on other vtstyle crates. It provides:
//!
//! - Format attributes and color selectors (with name parsing)
//! - The escape codec for one fixed VT100/ANSI dialect
//! - The C0 control-character table
//! - Style presets and their YAML configuration
//! - Terminal dimensions
//! - Error types
//!
//! ## Architecture
//!
//! This is Layer 0 - `vtstyle-session` depends on this crate and writes the
//! strings it renders.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod color;
pub mod config;
pub mod control;
pub mod error;
pub mod format;
pub mod geometry;
pub mod style;

// Re-export commonly used types
pub use codec::{
    background_color_code, color_code, color_escape_verbose, extended_background_color_code,
    extended_color_code, format_code, parse_color_name, parse_format, reset_code, ESC,
};
pub use color::{ColorName, ColorSelector, Palette256Index};
pub use config::{StyleConfig, StyleSpec};
pub use control::control_byte;
pub use error::{Error, Result};
pub use format::FormatAttribute;
pub use geometry::Dimensions;
pub use style::Style;
