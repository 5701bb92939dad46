//! Model a color with the HSL notation in the sRGB color space.

use std::fmt;

spectra_macros::gen_model! {
    /// A color specified with the HSL notation, using whole degrees and
    /// percentages.
    #[derive(Eq, Hash)]
    pub struct Hsl {
        /// The hue of the color in degrees, `0..360`.
        hue: u16,
        /// The saturation of the color in percent, `0..=100`.
        saturation: u8,
        /// The lightness of the color in percent, `0..=100`.
        lightness: u8,
    }
}

impl Hsl {
    /// Create a color from integers of any magnitude. The hue wraps around
    /// the color wheel, saturation and lightness are clamped into `0..=100`.
    pub fn saturating(hue: i64, saturation: i64, lightness: i64) -> Self {
        Self::new(
            hue.rem_euclid(360) as u16,
            saturation.clamp(0, 100) as u8,
            lightness.clamp(0, 100) as u8,
        )
    }

    /// Returns true if the color has no hue.
    pub fn is_achromatic(&self) -> bool {
        self.saturation == 0
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}%, {}%", self.hue, self.saturation, self.lightness)
    }
}
