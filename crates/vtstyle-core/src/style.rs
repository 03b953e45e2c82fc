//! Composite styles built from the codec primitives.

use crate::codec::{
    background_color_code, color_escape_verbose, extended_background_color_code,
    extended_color_code, format_code, reset_code,
};
use crate::{ColorSelector, FormatAttribute, Palette256Index};

/// A combination of format, foreground and background selections.
///
/// Every part is optional. The foreground uses the verbose combined form so
/// that any attached format renders; the background uses the short form and
/// is therefore skipped for formats other than Normal and Bright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Standalone format attribute
    pub format: Option<FormatAttribute>,
    /// Foreground color with its attached format
    pub foreground: Option<ColorSelector>,
    /// Background color with its attached format
    pub background: Option<ColorSelector>,
    /// 256-color foreground
    pub palette: Option<Palette256Index>,
    /// 256-color background
    pub palette_background: Option<Palette256Index>,
}

impl Style {
    /// An empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the standalone format.
    pub fn with_format(mut self, format: FormatAttribute) -> Self {
        self.format = Some(format);
        self
    }

    /// Set the foreground color.
    pub fn with_foreground(mut self, selector: ColorSelector) -> Self {
        self.foreground = Some(selector);
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, selector: ColorSelector) -> Self {
        self.background = Some(selector);
        self
    }

    /// Set the 256-color foreground.
    pub fn with_palette(mut self, index: Palette256Index) -> Self {
        self.palette = Some(index);
        self
    }

    /// Set the 256-color background.
    pub fn with_palette_background(mut self, index: Palette256Index) -> Self {
        self.palette_background = Some(index);
        self
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Concatenated escape codes: format, foreground, background, palette
    /// foreground, palette background.
    pub fn codes(&self) -> String {
        let mut out = String::new();
        if let Some(format) = self.format {
            out.push_str(&format_code(format));
        }
        if let Some(selector) = self.foreground {
            out.push_str(&color_escape_verbose(selector));
        }
        if let Some(code) = self.background.and_then(background_color_code) {
            out.push_str(&code);
        }
        if let Some(index) = self.palette {
            out.push_str(&extended_color_code(index));
        }
        if let Some(index) = self.palette_background {
            out.push_str(&extended_background_color_code(index));
        }
        out
    }

    /// Wrap `text` in this style's codes followed by a reset.
    ///
    /// A style that renders no codes returns `text` unchanged.
    pub fn paint(&self, text: &str) -> String {
        let codes = self.codes();
        if codes.is_empty() {
            return text.to_string();
        }
        format!("{}{}{}", codes, text, reset_code())
    }
}
