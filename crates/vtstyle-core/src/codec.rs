//! Escape codec for one fixed VT100/ANSI dialect.
//!
//! Every function here is pure: it renders a selector to the exact byte
//! sequence the terminal expects and never fails. Invalid input yields "no
//! code" (`None`) rather than an error.
//!
//! Two idioms coexist:
//!
//! - the verbose combined form `ESC[<format>;3<index>m`, available for every
//!   format, and
//! - the short form `ESC[3<index>` / `ESC[9<index>` (no trailing `m`), which
//!   only exists for [`FormatAttribute::Normal`] and [`FormatAttribute::Bright`].
//!
//! Callers choose between them; a `None` from a short-form function means
//! "emit nothing", never "fall back to something else".

use crate::{ColorName, ColorSelector, FormatAttribute, Palette256Index};

/// The escape byte (0x1B) as a string.
pub const ESC: &str = "\x1b";

/// Render a format attribute: `ESC <n> m`.
pub fn format_code(format: FormatAttribute) -> String {
    format!("{ESC}{}m", format.sgr())
}

/// Restore the default character set and clear SGR attributes: `ESC ( B ESC [ m`.
pub fn reset_code() -> String {
    format!("{ESC}(B{ESC}[m")
}

/// Combined format and foreground: `ESC [ <format> ; 3 <index> m`.
pub fn color_escape_verbose(selector: ColorSelector) -> String {
    format!(
        "{ESC}[{};3{}m",
        selector.format.sgr(),
        selector.palette_index()
    )
}

/// Short-form foreground code.
///
/// `ESC[3<index>` for Normal, `ESC[9<index>` for Bright, `None` for any other
/// format.
pub fn color_code(selector: ColorSelector) -> Option<String> {
    let prefix = match selector.format {
        FormatAttribute::Normal => "3",
        FormatAttribute::Bright => "9",
        _ => return None,
    };
    Some(format!("{ESC}[{prefix}{}", selector.palette_index()))
}

/// Short-form background code.
///
/// `ESC[4<index>` for Normal, `ESC[10<index>` for Bright, `None` for any
/// other format.
pub fn background_color_code(selector: ColorSelector) -> Option<String> {
    let prefix = match selector.format {
        FormatAttribute::Normal => "4",
        FormatAttribute::Bright => "10",
        _ => return None,
    };
    Some(format!("{ESC}[{prefix}{}", selector.palette_index()))
}

/// 256-color foreground: `ESC [ 38 ; 5 ; <n> m`.
pub fn extended_color_code(index: Palette256Index) -> String {
    format!("{ESC}[38;5;{}m", index.value())
}

/// 256-color background: `ESC [ 48 ; 5 ; <n> m`.
pub fn extended_background_color_code(index: Palette256Index) -> String {
    format!("{ESC}[48;5;{}m", index.value())
}

/// Parse a format name (case-insensitive, "bold" is an alias for Bright).
pub fn parse_format(name: &str) -> Option<FormatAttribute> {
    name.parse().ok()
}

/// Parse one of the eight named colors (case-insensitive) and attach `format`.
///
/// [`ColorName::Default`] is never produced here.
pub fn parse_color_name(name: &str, format: FormatAttribute) -> Option<ColorSelector> {
    name.parse::<ColorName>()
        .ok()
        .map(|color| ColorSelector::new(color, format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vte::{Params, Perform};

    /// Records CSI dispatches so tests can check what a terminal would decode.
    #[derive(Default)]
    struct CsiRecorder {
        dispatched: Vec<(Vec<u16>, char)>,
    }

    impl Perform for CsiRecorder {
        fn csi_dispatch(&mut self, params: &Params, _intermediates: &[u8], _ignore: bool, c: char) {
            let values = params.iter().map(|p| p[0]).collect();
            self.dispatched.push((values, c));
        }
    }

    fn decode(sequence: &str) -> Vec<(Vec<u16>, char)> {
        let mut recorder = CsiRecorder::default();
        let mut parser = vte::Parser::new();
        for byte in sequence.as_bytes() {
            parser.advance(&mut recorder, *byte);
        }
        recorder.dispatched
    }

    #[test]
    fn test_format_code() {
        assert_eq!(format_code(FormatAttribute::Normal), "\x1b0m");
        assert_eq!(format_code(FormatAttribute::Bright), "\x1b1m");
        assert_eq!(format_code(FormatAttribute::Hidden), "\x1b8m");
    }

    #[test]
    fn test_reset_code() {
        assert_eq!(reset_code(), "\x1b(B\x1b[m");
    }

    #[test]
    fn test_verbose_bright_red() {
        let selector = ColorSelector::new(ColorName::Red, FormatAttribute::Bright);
        assert_eq!(color_escape_verbose(selector), "\x1b[1;31m");
    }

    #[test]
    fn test_verbose_accepts_every_format() {
        let selector = ColorSelector::new(ColorName::Cyan, FormatAttribute::Reverse);
        assert_eq!(color_escape_verbose(selector), "\x1b[7;36m");
        let selector = ColorSelector::new(ColorName::Default, FormatAttribute::Dim);
        assert_eq!(color_escape_verbose(selector), "\x1b[2;39m");
    }

    #[test]
    fn test_verbose_decodes_as_sgr() {
        let selector = ColorSelector::new(ColorName::Yellow, FormatAttribute::Underline);
        let decoded = decode(&color_escape_verbose(selector));
        assert_eq!(decoded, vec![(vec![4, 33], 'm')]);
    }

    #[test]
    fn test_color_code_short_form() {
        let normal = ColorSelector::plain(ColorName::Green);
        assert_eq!(color_code(normal).as_deref(), Some("\x1b[32"));

        let bright = ColorSelector::new(ColorName::Red, FormatAttribute::Bright);
        assert_eq!(color_code(bright).as_deref(), Some("\x1b[91"));
    }

    #[test]
    fn test_color_code_absent_for_other_formats() {
        for format in [
            FormatAttribute::Dim,
            FormatAttribute::Underline,
            FormatAttribute::Blink,
            FormatAttribute::Reverse,
            FormatAttribute::Hidden,
        ] {
            let selector = ColorSelector::new(ColorName::Blue, format);
            assert_eq!(color_code(selector), None);
            assert_eq!(background_color_code(selector), None);
        }
    }

    #[test]
    fn test_background_color_code() {
        let normal = ColorSelector::plain(ColorName::White);
        assert_eq!(background_color_code(normal).as_deref(), Some("\x1b[47"));

        let bright = ColorSelector::new(ColorName::Black, FormatAttribute::Bright);
        assert_eq!(background_color_code(bright).as_deref(), Some("\x1b[100"));
    }

    #[test]
    fn test_default_color_short_form() {
        let selector = ColorSelector::terminal_default();
        assert_eq!(color_code(selector).as_deref(), Some("\x1b[39"));
        assert_eq!(background_color_code(selector).as_deref(), Some("\x1b[49"));
    }

    #[test]
    fn test_extended_color_codes() {
        assert_eq!(extended_color_code(Palette256Index(0)), "\x1b[38;5;0m");
        assert_eq!(extended_color_code(Palette256Index(255)), "\x1b[38;5;255m");
        assert_eq!(
            extended_background_color_code(Palette256Index(17)),
            "\x1b[48;5;17m"
        );
    }

    #[test]
    fn test_extended_codes_decode_as_sgr() {
        let decoded = decode(&extended_color_code(Palette256Index(208)));
        assert_eq!(decoded, vec![(vec![38, 5, 208], 'm')]);

        let decoded = decode(&extended_background_color_code(Palette256Index(9)));
        assert_eq!(decoded, vec![(vec![48, 5, 9], 'm')]);
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("BOLD"), Some(FormatAttribute::Bright));
        assert_eq!(parse_format("blink"), Some(FormatAttribute::Blink));
        assert_eq!(parse_format("strike"), None);
    }

    #[test]
    fn test_parse_color_name() {
        assert_eq!(
            parse_color_name("red", FormatAttribute::Bright),
            Some(ColorSelector::new(ColorName::Red, FormatAttribute::Bright))
        );
        assert_eq!(
            parse_color_name("Yellow", FormatAttribute::default()),
            Some(ColorSelector::plain(ColorName::Yellow))
        );
        assert_eq!(parse_color_name("default", FormatAttribute::Normal), None);
        assert_eq!(parse_color_name("purple", FormatAttribute::Normal), None);
    }

    #[test]
    fn test_bold_red_scenario() {
        let format = parse_format("BOLD").unwrap();
        let selector = parse_color_name("red", format).unwrap();
        assert_eq!(color_code(selector).as_deref(), Some("\x1b[91"));
        assert_eq!(color_escape_verbose(selector), "\x1b[1;31m");
    }
}
