//! Terminal compatibility sample sheets
//!
//! Renders human-readable sheets exercising the escape-code table so users
//! can eyeball which effects their terminal actually supports.

use itertools::Itertools;
use tracing::debug;

use crate::effects::{apply_format, Effect, NAMED_EFFECTS};

/// Sentence rendered once per effect on the named-effects and font sheets.
const SAMPLE_TEXT: &str = "This is a sentence for comparing effects.";

/// Neutral style for the identifier column: bright black on black.
fn key_codes() -> Vec<String> {
    vec![Effect::Named("90").code(), Effect::Named("40").code()]
}

/// Generate the sample sheet for `mode`:
///
/// - 0: named font effects (negations skipped)
/// - 1: alternate fonts 0-9
/// - 2: 256-color palette, foreground
/// - 3: 256-color palette, background
///
/// Any other mode yields an empty string; the caller decides whether that is
/// worth reporting.
pub fn sample(mode: i64) -> String {
    debug!("mode: {mode}");
    match mode {
        0 => named_effect_sheet(),
        1 => alternate_font_sheet(),
        2 => color_cube_sheet(Effect::Fg8Bit),
        3 => color_cube_sheet(Effect::Bg8Bit),
        _ => String::new(),
    }
}

fn named_effect_sheet() -> String {
    let key = key_codes();
    let mut result = String::new();
    for (name, effect) in NAMED_EFFECTS {
        if name.starts_with("NO_") {
            continue;
        }
        result += &format!(
            "{} | {}\n",
            apply_format(&[effect.code()], SAMPLE_TEXT),
            apply_format(&key, name)
        );
    }
    result
}

fn alternate_font_sheet() -> String {
    let key = key_codes();
    (0..10)
        .map(|i| {
            format!(
                "{} | {}\n",
                apply_format(&[Effect::AlternateFont(i as f64).code()], SAMPLE_TEXT),
                apply_format(&key, &format!(" Font #{i} "))
            )
        })
        .collect()
}

/// Render one palette index as its zero-padded number in its own color.
fn swatch(ground: impl Fn(f64) -> Effect, index: i64) -> String {
    apply_format(&[ground(index as f64).code()], &format!("{index:03}"))
}

/// The full 256-entry sheet: 16 standard colors, the 6x6x6 cube as 6 groups
/// of 6 rows by 6 columns, then the 24 grayscale entries.
fn color_cube_sheet(ground: impl Fn(f64) -> Effect + Copy) -> String {
    let mut result = (0..16).map(|i| swatch(ground, i)).join("  ");
    result += "\n\n";

    for group in 0..6 {
        for column in 0..6 {
            for row in 0..6 {
                let index = 16 + 6 * group + 36 * row + column;
                result += &swatch(ground, index);
                result += "  ";
            }
            result += "\n";
        }
        result += "\n";
    }

    result += &(232..256).map(|i| swatch(ground, i)).join("  ");
    result += "\n";
    result
}
