//! ANSI SGR escape-code table and text formatter
//!
//! Everything here is pure data: effects render to parameter strings, the
//! formatter wraps text in a CSI sequence. Numeric inputs are normalized
//! (floor, then Euclidean modulo of the valid range) so any finite number
//! produces a well-formed code.

/// One or more semicolon-joined numeric ANSI parameters, e.g. `"1"` or
/// `"38;5;196"`.
pub type EffectCode = String;

const FOREGROUND: &str = "38";
const BACKGROUND: &str = "48";

/// A single styling instruction, polymorphic over arity: named effects carry
/// their fixed parameter string, numbered effects one index, RGB effects
/// either a packed integer or three explicit channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Fixed-code effect (bold, underline, 4-bit colors, ...).
    Named(&'static str),
    /// Alternate font 0-9 (SGR 11-19 territory, rendered as `1<n>`).
    AlternateFont(f64),
    /// 256-color palette index, foreground.
    Fg8Bit(f64),
    /// 256-color palette index, background.
    Bg8Bit(f64),
    /// 24-bit foreground from a packed `0xRRGGBB` integer.
    FgRgbPacked(f64),
    /// 24-bit background from a packed `0xRRGGBB` integer.
    BgRgbPacked(f64),
    /// 24-bit foreground from explicit channels.
    FgRgb(f64, f64, f64),
    /// 24-bit background from explicit channels.
    BgRgb(f64, f64, f64),
}

impl Effect {
    /// Render the numeric parameter string for this effect.
    pub fn code(&self) -> EffectCode {
        match *self {
            Effect::Named(code) => code.to_string(),
            Effect::AlternateFont(n) => format!("1{}", normalize(n, 10)),
            Effect::Fg8Bit(n) => format!("{FOREGROUND};5;{}", normalize(n, 256)),
            Effect::Bg8Bit(n) => format!("{BACKGROUND};5;{}", normalize(n, 256)),
            Effect::FgRgbPacked(n) => format!("{FOREGROUND};2;{}", rgb_components(n)),
            Effect::BgRgbPacked(n) => format!("{BACKGROUND};2;{}", rgb_components(n)),
            Effect::FgRgb(r, g, b) => format!(
                "{FOREGROUND};2;{};{};{}",
                normalize(r, 256),
                normalize(g, 256),
                normalize(b, 256)
            ),
            Effect::BgRgb(r, g, b) => format!(
                "{BACKGROUND};2;{};{};{}",
                normalize(r, 256),
                normalize(g, 256),
                normalize(b, 256)
            ),
        }
    }
}

/// Floor, then Euclidean modulo. Keeps negative and oversized inputs inside
/// the valid parameter range.
fn normalize(n: f64, range: i64) -> i64 {
    (n.floor() as i64).rem_euclid(range)
}

/// Decompose a packed integer into `rr;gg;bb` hex components. The floored
/// value's low 6 hex digits are taken, left-padded with zeros, so 0x123456
/// becomes `12;34;56` and 255 becomes `00;00;ff`.
pub fn rgb_components(n: f64) -> String {
    let packed = (n.floor() as i64 as u64) & 0xFF_FFFF;
    format!(
        "{:02x};{:02x};{:02x}",
        (packed >> 16) & 0xFF,
        (packed >> 8) & 0xFF,
        packed & 0xFF
    )
}

/// Wrap `text` in a CSI sequence applying `codes`, with a trailing reset.
///
/// Codes are not validated; an empty list yields `ESC[m...ESC[0m`, which
/// terminals treat as a plain reset.
pub fn apply_format(codes: &[EffectCode], text: &str) -> String {
    format!("\x1b[{}m{text}\x1b[0m", codes.join(";"))
}

/// All named effects in definition order. The identifiers drive the
/// compatibility sheet and stay iterable in a fixed order, hence a slice of
/// pairs rather than a map.
pub const NAMED_EFFECTS: &[(&str, Effect)] = &[
    ("RESET", Effect::Named("0")),
    ("BOLD", Effect::Named("1")),
    ("FAINT", Effect::Named("2")),
    ("ITALIC", Effect::Named("3")),
    ("UNDERLINE", Effect::Named("4")),
    ("SLOW_BLINK", Effect::Named("5")),
    ("RAPID_BLINK", Effect::Named("6")),
    ("SWAP_COLOR", Effect::Named("7")),
    ("CONCEAL", Effect::Named("8")),
    ("CROSSOUT", Effect::Named("9")),
    ("FRAKTUR", Effect::Named("20")),
    ("DOUBLE_UNDERLINE", Effect::Named("21")),
    ("NO_BOLD", Effect::Named("22")),
    ("NO_ITALIC", Effect::Named("23")),
    ("NO_UNDERLINE", Effect::Named("24")),
    ("NO_BLINK", Effect::Named("25")),
    ("NO_INVERSE", Effect::Named("27")),
    ("NO_CONCEAL", Effect::Named("28")),
    ("NO_CROSSOUT", Effect::Named("29")),
    ("FG_4B_BLACK", Effect::Named("30")),
    ("FG_4B_RED", Effect::Named("31")),
    ("FG_4B_GREEN", Effect::Named("32")),
    ("FG_4B_YELLOW", Effect::Named("33")),
    ("FG_4B_BLUE", Effect::Named("34")),
    ("FG_4B_MAGENTA", Effect::Named("35")),
    ("FG_4B_CYAN", Effect::Named("36")),
    ("FG_4B_WHITE", Effect::Named("37")),
    ("FG_DEFAULT", Effect::Named("39")),
    ("BG_4B_BLACK", Effect::Named("40")),
    ("BG_4B_RED", Effect::Named("41")),
    ("BG_4B_GREEN", Effect::Named("42")),
    ("BG_4B_YELLOW", Effect::Named("43")),
    ("BG_4B_BLUE", Effect::Named("44")),
    ("BG_4B_MAGENTA", Effect::Named("45")),
    ("BG_4B_CYAN", Effect::Named("46")),
    ("BG_4B_WHITE", Effect::Named("47")),
    ("BG_DEFAULT", Effect::Named("49")),
    ("FRAMED", Effect::Named("51")),
    ("ENCIRCLED", Effect::Named("52")),
    ("OVERLINED", Effect::Named("53")),
    ("NO_FRAMED", Effect::Named("54")),
    ("NO_OVERLINED", Effect::Named("55")),
    ("FG_4B_BRIGHT_BLACK", Effect::Named("90")),
    ("FG_4B_BRIGHT_RED", Effect::Named("91")),
    ("FG_4B_BRIGHT_GREEN", Effect::Named("92")),
    ("FG_4B_BRIGHT_YELLOW", Effect::Named("93")),
    ("FG_4B_BRIGHT_BLUE", Effect::Named("94")),
    ("FG_4B_BRIGHT_MAGENTA", Effect::Named("95")),
    ("FG_4B_BRIGHT_CYAN", Effect::Named("96")),
    ("FG_4B_BRIGHT_WHITE", Effect::Named("97")),
    ("BG_4B_BRIGHT_BLACK", Effect::Named("100")),
    ("BG_4B_BRIGHT_RED", Effect::Named("101")),
    ("BG_4B_BRIGHT_GREEN", Effect::Named("102")),
    ("BG_4B_BRIGHT_YELLOW", Effect::Named("103")),
    ("BG_4B_BRIGHT_BLUE", Effect::Named("104")),
    ("BG_4B_BRIGHT_MAGENTA", Effect::Named("105")),
    ("BG_4B_BRIGHT_CYAN", Effect::Named("106")),
    ("BG_4B_BRIGHT_WHITE", Effect::Named("107")),
];

/// Short color names for the standard 4-bit foreground palette.
pub const BASIC_FOREGROUND: &[(&str, Effect)] = &[
    ("BLACK", Effect::Named("30")),
    ("RED", Effect::Named("31")),
    ("GREEN", Effect::Named("32")),
    ("YELLOW", Effect::Named("33")),
    ("BLUE", Effect::Named("34")),
    ("MAGENTA", Effect::Named("35")),
    ("CYAN", Effect::Named("36")),
    ("WHITE", Effect::Named("37")),
];

/// Short color names for the standard 4-bit background palette.
pub const BASIC_BACKGROUND: &[(&str, Effect)] = &[
    ("BLACK", Effect::Named("40")),
    ("RED", Effect::Named("41")),
    ("GREEN", Effect::Named("42")),
    ("YELLOW", Effect::Named("43")),
    ("BLUE", Effect::Named("44")),
    ("MAGENTA", Effect::Named("45")),
    ("CYAN", Effect::Named("46")),
    ("WHITE", Effect::Named("47")),
];

/// Look up a named effect by identifier.
pub fn named(identifier: &str) -> Option<Effect> {
    NAMED_EFFECTS
        .iter()
        .find(|(name, _)| *name == identifier)
        .map(|(_, effect)| *effect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_apply_format_empty_codes() {
        assert_eq!(apply_format(&[], "x"), "\x1b[mx\x1b[0m");
    }

    #[test]
    fn test_apply_format_joins_codes() {
        let codes = vec!["1".to_string(), "31".to_string()];
        assert_eq!(apply_format(&codes, "hi"), "\x1b[1;31mhi\x1b[0m");
    }

    #[rstest]
    #[case(0.0, "10")]
    #[case(3.0, "13")]
    #[case(9.9, "19")]
    #[case(13.0, "13")]
    #[case(-3.0, "17")]
    fn test_alternate_font_wraps_modulo_10(#[case] n: f64, #[case] expected: &str) {
        assert_eq!(Effect::AlternateFont(n).code(), expected);
    }

    #[rstest]
    #[case(196.0, "38;5;196")]
    #[case(256.0, "38;5;0")]
    #[case(300.5, "38;5;44")]
    #[case(-1.0, "38;5;255")]
    fn test_fg_8bit_wraps_modulo_256(#[case] n: f64, #[case] expected: &str) {
        assert_eq!(Effect::Fg8Bit(n).code(), expected);
    }

    #[test]
    fn test_bg_8bit_uses_background_selector() {
        assert_eq!(Effect::Bg8Bit(7.0).code(), "48;5;7");
    }

    #[rstest]
    #[case(0x123456 as f64, "12;34;56")]
    #[case(0.0, "00;00;00")]
    #[case(255.0, "00;00;ff")]
    #[case(0xAB12_3456_u64 as f64, "12;34;56")] // more than 6 hex digits: keep the low 6
    fn test_rgb_components_pads_and_truncates(#[case] n: f64, #[case] expected: &str) {
        assert_eq!(rgb_components(n), expected);
    }

    #[test]
    fn test_packed_rgb_codes() {
        assert_eq!(Effect::FgRgbPacked(0xFF00FF as f64).code(), "38;2;ff;00;ff");
        assert_eq!(Effect::BgRgbPacked(255.0).code(), "48;2;00;00;ff");
    }

    #[test]
    fn test_explicit_rgb_normalizes_each_channel() {
        assert_eq!(Effect::FgRgb(300.0, 0.0, -1.0).code(), "38;2;44;0;255");
        assert_eq!(Effect::BgRgb(12.0, 34.0, 56.0).code(), "48;2;12;34;56");
    }

    #[test]
    fn test_named_lookup() {
        assert_eq!(named("BOLD"), Some(Effect::Named("1")));
        assert_eq!(named("NO_SUCH_EFFECT"), None);
    }

    #[test]
    fn test_basic_aliases_match_named_table() {
        assert_eq!(BASIC_FOREGROUND.len(), 8);
        assert_eq!(BASIC_BACKGROUND.len(), 8);
        let (_, red) = BASIC_FOREGROUND[1];
        assert_eq!(red, named("FG_4B_RED").unwrap());
    }
}
