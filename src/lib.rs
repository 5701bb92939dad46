//! spectra provides the color model behind a canvas color picker: conversions
//! between RGB, hex, HSL and CMYK, reading colors typed as free text, and
//! sampling colors from a rendered spectrum.
//!
//! ```rust
//! use spectra::{convert, parse, Hsl, Rgb};
//!
//! let rgb = parse::parse_rgb_text("rgb(210, 105, 30)").unwrap();
//! assert_eq!(rgb.to_hex(), "D2691E");
//! assert_eq!(rgb.to_hsl(), Hsl::new(25, 75, 47));
//! assert_eq!(convert::hex_to_rgb("#d2691e"), Some(rgb));
//! assert_eq!(convert::hex_to_rgb("#d26"), None);
//! ```

#![deny(missing_docs)]

mod canvas;
mod color;
pub mod convert;
mod math;
mod models;
mod palette;
pub mod parse;
mod picker;
mod spectrum;

#[cfg(test)]
mod test;

pub use canvas::{
    clamp_to_bounds, sample_canvas_pixel, CanvasError, CanvasPoint, CanvasSize, CanvasSpace,
    ClientPoint, ClientRect, ClientSpace, ImageBuffer,
};
pub use color::{Component, ParseError};
pub use models::{Cmyk, Hsl, Rgb};
pub use palette::{LoadedColors, Palette};
pub use picker::{
    ColorChange, Dialog, Fields, Listener, Picker, PickerError, PickerOptions, Readout, Source,
    Surface,
};
pub use spectrum::{Spectrum, SpectrumStyle};
