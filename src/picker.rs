//! A color picker shell that keeps a set of display fields in sync with the
//! color picked from a surface or typed into one of the fields.
//!
//! The picker owns no UI. The surface it samples from, the dialogs it asks
//! for input with and whoever listens for color changes are all handed to
//! it.
//!
//! ```rust
//! use spectra::{Fields, Picker, PickerOptions};
//!
//! let mut picker = Picker::new(PickerOptions {
//!     fields: Fields::HEX | Fields::CMYK,
//!     ..Default::default()
//! })
//! .unwrap();
//!
//! let readout = picker.input_rgb("rgb(255, 0, 0)").unwrap();
//! assert_eq!(readout.hex.as_deref(), Some("#FF0000"));
//! assert_eq!(readout.cmyk.as_deref(), Some("0%, 100%, 100%, 0%"));
//! assert_eq!(readout.hsl, None);
//! ```

use bitflags::bitflags;

use crate::{
    canvas::{
        clamp_to_bounds, sample_canvas_pixel, CanvasPoint, CanvasSize, ClientPoint, ClientRect,
        ImageBuffer,
    },
    color::ParseError,
    convert::hex_to_rgb,
    models::Rgb,
    parse::{parse_hsl_text, parse_rgb_text},
    spectrum::{Spectrum, SpectrumStyle},
};

bitflags! {
    /// The display fields a picker keeps up to date.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Fields : u8 {
        /// Hex notation, `#RRGGBB`.
        const HEX = 1 << 0;
        /// Comma separated channels, `r, g, b`.
        const RGB = 1 << 1;
        /// Degrees and percentages, `h, s%, l%`.
        const HSL = 1 << 2;
        /// Print percentages, `c%, m%, y%, k%`.
        const CMYK = 1 << 3;
    }
}

impl Fields {
    /// Only the hex field.
    pub const fn basic() -> Self {
        Self::HEX
    }

    /// The hex, RGB and HSL fields.
    pub const fn standard() -> Self {
        Self::HEX.union(Self::RGB).union(Self::HSL)
    }
}

/// Configuration for a [`Picker`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickerOptions {
    /// Width of the spectrum in pixels.
    pub width: u32,
    /// Height of the spectrum in pixels.
    pub height: u32,
    /// The color selected before any input, as a hex color.
    pub default_color: String,
    /// Which display fields to keep up to date.
    pub fields: Fields,
    /// How the spectrum is shaded.
    pub style: SpectrumStyle,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            width: 200,
            height: 200,
            default_color: "#000000".to_owned(),
            fields: Fields::all(),
            style: SpectrumStyle::default(),
        }
    }
}

/// Errors creating a [`Picker`].
#[derive(Debug, thiserror::Error)]
pub enum PickerError {
    /// The configured default color could not be parsed.
    #[error("default color {color:?} is not a hex color")]
    InvalidDefaultColor {
        /// The text that was configured.
        color: String,
        /// Why it was rejected.
        #[source]
        source: ParseError,
    },
    /// The surface has no pixels to pick from.
    #[error("picker surface is empty ({width}x{height})")]
    EmptySurface {
        /// Width of the surface in pixels.
        width: u32,
        /// Height of the surface in pixels.
        height: u32,
    },
}

/// A render target a picker samples colors from.
pub trait Surface {
    /// Dimensions of the surface in pixels.
    fn size(&self) -> CanvasSize;

    /// The color at `point`, which is always within [`Surface::size`].
    fn sample(&self, point: CanvasPoint) -> Rgb;
}

impl Surface for ImageBuffer {
    fn size(&self) -> CanvasSize {
        ImageBuffer::size(self)
    }

    fn sample(&self, point: CanvasPoint) -> Rgb {
        sample_canvas_pixel(self, point.x, point.y)
    }
}

/// Text dialogs a picker can use to talk to the user.
pub trait Dialog {
    /// Show a message.
    fn alert(&mut self, message: &str);

    /// Ask for a line of text, offering `default` as the answer. Returns
    /// `None` if the user cancelled.
    fn prompt(&mut self, message: &str, default: &str) -> Option<String>;
}

/// Where a color change came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    /// A pick on the surface.
    Pointer,
    /// Text typed into the hex field.
    Hex,
    /// Text typed into the RGB field.
    Rgb,
    /// Text typed into the HSL field.
    Hsl,
    /// An answer to [`Picker::prompt_color`].
    Dialog,
}

/// Notification sent to listeners when the picked color changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorChange {
    /// The new color.
    pub color: Rgb,
    /// What caused the change.
    pub source: Source,
}

/// Receives [`ColorChange`] notifications from a picker.
pub trait Listener {
    /// Called after the picker's color changed.
    fn color_changed(&mut self, change: &ColorChange);
}

impl<F: FnMut(&ColorChange)> Listener for F {
    fn color_changed(&mut self, change: &ColorChange) {
        self(change)
    }
}

/// The formatted text of each enabled display field. Disabled fields are
/// `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Readout {
    /// The color as `#RRGGBB`.
    pub hex: Option<String>,
    /// The color as `r, g, b`.
    pub rgb: Option<String>,
    /// The color as `h, s%, l%`.
    pub hsl: Option<String>,
    /// The color as `c%, m%, y%, k%`.
    pub cmyk: Option<String>,
}

impl Readout {
    /// Format `color` for each of the given fields.
    pub fn new(color: Rgb, fields: Fields) -> Self {
        Self {
            hex: fields
                .contains(Fields::HEX)
                .then(|| format!("#{}", color.to_hex())),
            rgb: fields.contains(Fields::RGB).then(|| color.to_string()),
            hsl: fields
                .contains(Fields::HSL)
                .then(|| color.to_hsl().to_string()),
            cmyk: fields
                .contains(Fields::CMYK)
                .then(|| color.to_cmyk().to_string()),
        }
    }
}

const PROMPT: &str = "Enter a color as #RRGGBB or r, g, b";

/// A color picker over a [`Surface`].
///
/// Every input method returns the refreshed [`Readout`], or `None` when the
/// input could not be read, in which case nothing changes.
pub struct Picker<S = ImageBuffer> {
    surface: S,
    fields: Fields,
    color: Rgb,
    readout: Readout,
    listeners: Vec<Box<dyn Listener>>,
}

impl Picker<ImageBuffer> {
    /// Create a picker over a freshly rendered spectrum.
    pub fn new(options: PickerOptions) -> Result<Self, PickerError> {
        let surface = Spectrum::new(options.style).render(options.width, options.height);
        Self::with_surface(options, surface)
    }
}

impl<S: Surface> Picker<S> {
    /// Create a picker over the given surface. The size and style in
    /// `options` are not used.
    pub fn with_surface(options: PickerOptions, surface: S) -> Result<Self, PickerError> {
        let size = surface.size();
        if size.width == 0 || size.height == 0 {
            return Err(PickerError::EmptySurface {
                width: size.width,
                height: size.height,
            });
        }

        let color = Rgb::from_hex(&options.default_color).map_err(|source| {
            PickerError::InvalidDefaultColor {
                color: options.default_color.clone(),
                source,
            }
        })?;

        Ok(Self {
            surface,
            fields: options.fields,
            color,
            readout: Readout::new(color, options.fields),
            listeners: Vec::new(),
        })
    }

    /// The currently picked color.
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// The display fields for the current color.
    pub fn readout(&self) -> &Readout {
        &self.readout
    }

    /// The display fields this picker keeps up to date.
    pub fn fields(&self) -> Fields {
        self.fields
    }

    /// The surface colors are picked from.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Register a listener for color changes.
    pub fn subscribe(&mut self, listener: impl Listener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Pick the color under a pointer. `bounds` is where the surface is
    /// displayed, in the same coordinates as `pointer`.
    pub fn pick(&mut self, pointer: ClientPoint, bounds: ClientRect) -> Option<&Readout> {
        let point = clamp_to_bounds(pointer, bounds, self.surface.size())?;
        Some(self.pick_at(point))
    }

    /// Pick the color at a pixel of the surface. Points past the edges are
    /// clamped onto the surface.
    pub fn pick_at(&mut self, point: CanvasPoint) -> &Readout {
        let size = self.surface.size();
        let point = CanvasPoint::new(
            point.x.min(size.width - 1),
            point.y.min(size.height - 1),
        );

        let color = self.surface.sample(point);
        self.update(color, Source::Pointer)
    }

    /// Handle text typed into the hex field.
    pub fn input_hex(&mut self, text: &str) -> Option<&Readout> {
        let color = hex_to_rgb(text)?;
        Some(self.update(color, Source::Hex))
    }

    /// Handle text typed into the RGB field.
    pub fn input_rgb(&mut self, text: &str) -> Option<&Readout> {
        let color = parse_rgb_text(text)?;
        Some(self.update(color, Source::Rgb))
    }

    /// Handle text typed into the HSL field.
    pub fn input_hsl(&mut self, text: &str) -> Option<&Readout> {
        let color = parse_hsl_text(text)?.to_rgb();
        Some(self.update(color, Source::Hsl))
    }

    /// Ask for a color through a dialog. The answer is read as a hex color
    /// first and as RGB numbers otherwise; an unreadable answer is reported
    /// back with an alert.
    pub fn prompt_color(&mut self, dialog: &mut impl Dialog) -> Option<&Readout> {
        let current = format!("#{}", self.color.to_hex());
        let answer = dialog.prompt(PROMPT, &current)?;
        let answer = answer.trim();

        let color = Rgb::from_hex(answer)
            .ok()
            .or_else(|| parse_rgb_text(answer));

        match color {
            Some(color) => Some(self.update(color, Source::Dialog)),
            None => {
                dialog.alert(&format!("{answer:?} is not a color"));
                None
            }
        }
    }

    fn update(&mut self, color: Rgb, source: Source) -> &Readout {
        if color != self.color {
            self.color = color;
            self.readout = Readout::new(color, self.fields);

            log::debug!("color changed to #{} by {source:?}", color.to_hex());

            let change = ColorChange { color, source };
            for listener in &mut self.listeners {
                listener.color_changed(&change);
            }
        }

        &self.readout
    }
}
