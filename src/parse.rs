//! Read colors typed into free-text fields.
//!
//! Numeric inputs are read leniently: every run of ASCII digits counts as a
//! number and anything between them is ignored, so `rgb(10, 20, 30)`,
//! `10 20 30` and `10/20/30` all read the same. Signs and decimal points are
//! separators too, which means `1.5, 2, 3` holds four numbers and is
//! rejected.

use crate::{
    color::ParseError,
    models::{Hsl, Rgb},
};

/// Extract exactly three numbers from `text`, with no range checks. Digit
/// runs too large for a `u32` saturate.
pub fn triple(text: &str) -> Result<[u32; 3], ParseError> {
    let numbers = text
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .map(|run| run.parse::<u32>().unwrap_or(u32::MAX))
        .collect::<Vec<_>>();

    match numbers.as_slice() {
        &[first, second, third] => Ok([first, second, third]),
        other => Err(ParseError::TokenCount(other.len())),
    }
}

/// Like [`triple`], returning `None` when the text does not hold exactly
/// three numbers.
pub fn parse_triple(text: &str) -> Option<[u32; 3]> {
    match triple(text) {
        Ok(numbers) => Some(numbers),
        Err(err) => {
            log::debug!("rejected numeric color {text:?}: {err}");
            None
        }
    }
}

/// Read three numbers from `text` as red, green and blue. Channels above 255
/// are clamped.
pub fn parse_rgb_text(text: &str) -> Option<Rgb> {
    let [red, green, blue] = parse_triple(text)?;
    Some(Rgb::saturating(red.into(), green.into(), blue.into()))
}

/// Read three numbers from `text` as hue, saturation and lightness. The hue
/// wraps around the color wheel and the percentages are clamped to 100.
pub fn parse_hsl_text(text: &str) -> Option<Hsl> {
    let [hue, saturation, lightness] = parse_triple(text)?;
    Some(Hsl::saturating(
        hue.into(),
        saturation.into(),
        lightness.into(),
    ))
}
