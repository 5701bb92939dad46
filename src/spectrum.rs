//! Render the hue spectrum a picker lets the user pick from.
//!
//! The spectrum is a horizontal rainbow gradient with one or two vertical
//! overlays on top of it that fade towards white and/or black.

use crate::{
    canvas::{CanvasPoint, ImageBuffer},
    math::lerp,
    models::Rgb,
    Component,
};

/// Color stops of the horizontal hue gradient, as offsets across the width.
const HUE_STOPS: [(Component, Rgb); 7] = [
    (0.0, Rgb::new(255, 0, 0)),      // red
    (0.17, Rgb::new(255, 165, 0)),   // orange
    (0.34, Rgb::new(255, 255, 0)),   // yellow
    (0.5, Rgb::new(0, 128, 0)),      // green
    (0.67, Rgb::new(0, 0, 255)),     // blue
    (0.84, Rgb::new(75, 0, 130)),    // indigo
    (1.0, Rgb::new(238, 130, 238)),  // violet
];

/// How the spectrum shades the hue gradient vertically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpectrumStyle {
    /// Fade to white towards the top and to black towards the bottom, with
    /// the pure hues along the middle.
    #[default]
    Shaded,
    /// Pure hues at the top, fading to black towards the bottom.
    Darkened,
}

/// Renders spectrum images of any size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Spectrum {
    style: SpectrumStyle,
}

type Channels = (Component, Component, Component);

impl Spectrum {
    /// Create a spectrum with the given shading.
    pub fn new(style: SpectrumStyle) -> Self {
        Self { style }
    }

    /// The shading this spectrum uses.
    pub fn style(&self) -> SpectrumStyle {
        self.style
    }

    /// The unshaded hue gradient at offset `t` across the width, `0.0..=1.0`.
    pub fn hue_at(&self, t: Component) -> Rgb {
        to_rgb(hue_channels(t))
    }

    /// The color of pixel `(x, y)` on a spectrum of `width` by `height`
    /// pixels. Pixels are sampled at their centers.
    pub fn color_at(&self, x: u32, y: u32, width: u32, height: u32) -> Rgb {
        let tx = (x as Component + 0.5) / width as Component;
        let ty = (y as Component + 0.5) / height as Component;

        let base = hue_channels(tx);

        let shaded = match self.style {
            SpectrumStyle::Shaded if ty < 0.5 => over(base, 255.0, 1.0 - ty * 2.0),
            SpectrumStyle::Shaded => over(base, 0.0, (ty - 0.5) * 2.0),
            SpectrumStyle::Darkened => over(base, 0.0, ty),
        };

        to_rgb(shaded)
    }

    /// Render the spectrum into an opaque RGBA buffer.
    pub fn render(&self, width: u32, height: u32) -> ImageBuffer {
        let mut buffer = ImageBuffer::new(width, height);

        for y in 0..height {
            for x in 0..width {
                buffer.put(CanvasPoint::new(x, y), self.color_at(x, y, width, height));
            }
        }

        log::trace!("rendered {:?} spectrum at {width}x{height}", self.style);

        buffer
    }
}

fn hue_channels(t: Component) -> Channels {
    let channels = |rgb: Rgb| {
        (
            rgb.red as Component,
            rgb.green as Component,
            rgb.blue as Component,
        )
    };

    let (first, last) = (HUE_STOPS[0], HUE_STOPS[HUE_STOPS.len() - 1]);

    if t <= first.0 {
        return channels(first.1);
    }

    HUE_STOPS
        .windows(2)
        .find(|pair| t <= pair[1].0)
        .map(|pair| {
            let (start, end) = (pair[0], pair[1]);
            let progress = (t - start.0) / (end.0 - start.0);
            let (a, b) = (channels(start.1), channels(end.1));
            (
                lerp(a.0, b.0, progress),
                lerp(a.1, b.1, progress),
                lerp(a.2, b.2, progress),
            )
        })
        .unwrap_or_else(|| channels(last.1))
}

/// Composite a flat overlay with the given opacity over the channels.
fn over(base: Channels, overlay: Component, alpha: Component) -> Channels {
    let alpha = alpha.clamp(0.0, 1.0);
    (
        lerp(base.0, overlay, alpha),
        lerp(base.1, overlay, alpha),
        lerp(base.2, overlay, alpha),
    )
}

fn to_rgb((red, green, blue): Channels) -> Rgb {
    Rgb::new(
        red.round() as u8,
        green.round() as u8,
        blue.round() as u8,
    )
}
