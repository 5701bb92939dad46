//! Shared types used by all the color models.

#[cfg(feature = "f64")]
/// A 64-bit floating point value used for all intermediate color math.
pub type Component = f64;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value used for all intermediate color math.
pub type Component = f32;

/// Reasons a piece of text could not be read as a color.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The text held nothing to parse.
    #[error("empty color string")]
    Empty,
    /// A hex color did not have exactly 6 digits.
    #[error("expected 6 hex digits, found {0} characters")]
    InvalidLength(usize),
    /// A hex color contained something other than a hex digit.
    #[error("invalid hex digit")]
    InvalidDigit,
    /// A numeric color did not contain exactly 3 numbers.
    #[error("expected 3 numbers, found {0}")]
    TokenCount(usize),
}
