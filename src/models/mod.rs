//! Models are plain value types, one per color notation the picker displays.
//! Conversions between them live in [`crate::convert`].

mod cmyk;
mod hsl;
mod rgb;

pub use cmyk::Cmyk;
pub use hsl::Hsl;
pub use rgb::Rgb;
