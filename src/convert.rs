//! Conversions between the color models.
//!
//! The methods on the models do the work. The free functions in this module
//! take plain integers, the way a picker reads them from its input fields,
//! and clamp them into range before converting.
//!
//! ```rust
//! use spectra::convert::{rgb_to_hex, rgb_to_hsl};
//! use spectra::Hsl;
//!
//! assert_eq!(rgb_to_hex(255, 0, 0), "FF0000");
//! assert_eq!(rgb_to_hsl(255, 0, 0), Hsl::new(0, 100, 50));
//! ```

use crate::{
    math::{normalize, round_to, to_channel},
    models::{Cmyk, Hsl, Rgb},
    Component,
};

impl Rgb {
    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        let (hue, saturation, lightness) = util::rgb_to_hsl(
            normalize(self.red),
            normalize(self.green),
            normalize(self.blue),
        );

        // A hue just below a full turn rounds up to 360, which is 0.
        let hue = (hue * 360.0).round() as u16 % 360;

        Hsl::new(
            hue,
            (saturation * 100.0).round() as u8,
            (lightness * 100.0).round() as u8,
        )
    }

    /// Convert this color to the CMYK notation.
    pub fn to_cmyk(&self) -> Cmyk {
        let (cyan, magenta, yellow, key) = util::rgb_to_cmyk(
            normalize(self.red),
            normalize(self.green),
            normalize(self.blue),
        );

        let percent = |value: Component| round_to(value * 100.0, 1);

        Cmyk::new(percent(cyan), percent(magenta), percent(yellow), percent(key))
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to RGB.
    pub fn to_rgb(&self) -> Rgb {
        let (red, green, blue) = util::hsl_to_rgb(
            self.hue as Component / 360.0,
            self.saturation as Component / 100.0,
            self.lightness as Component / 100.0,
        );

        Rgb::new(to_channel(red), to_channel(green), to_channel(blue))
    }
}

/// Format the channels as 6 uppercase hex digits. Channels are clamped into
/// `0..=255` first.
pub fn rgb_to_hex(red: i32, green: i32, blue: i32) -> String {
    Rgb::saturating(red.into(), green.into(), blue.into()).to_hex()
}

/// Parse a 6 digit hex color with an optional `#` prefix. Returns `None` for
/// anything else.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    match Rgb::from_hex(hex) {
        Ok(rgb) => Some(rgb),
        Err(err) => {
            log::debug!("rejected hex color {hex:?}: {err}");
            None
        }
    }
}

/// Convert RGB channels to HSL. Channels are clamped into `0..=255` first.
pub fn rgb_to_hsl(red: i32, green: i32, blue: i32) -> Hsl {
    Rgb::saturating(red.into(), green.into(), blue.into()).to_hsl()
}

/// Convert HSL values to RGB. The hue wraps around the color wheel,
/// saturation and lightness are clamped into `0..=100`.
pub fn hsl_to_rgb(hue: i32, saturation: i32, lightness: i32) -> Rgb {
    Hsl::saturating(hue.into(), saturation.into(), lightness.into()).to_rgb()
}

/// Convert RGB channels to CMYK. Channels are clamped into `0..=255` first.
pub fn rgb_to_cmyk(red: i32, green: i32, blue: i32) -> Cmyk {
    Rgb::saturating(red.into(), green.into(), blue.into()).to_cmyk()
}

mod util {
    use crate::Component;

    /// Convert normalized RGB to normalized HSL. The hue is a fraction of a
    /// full turn.
    pub fn rgb_to_hsl(
        red: Component,
        green: Component,
        blue: Component,
    ) -> (Component, Component, Component) {
        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let lightness = (max + min) / 2.0;

        if max == min {
            return (0.0, 0.0, lightness);
        }

        let delta = max - min;

        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        // Ties go to red, then green.
        let hue = if max == red {
            (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        };

        (hue / 6.0, saturation, lightness)
    }

    /// Convert normalized HSL to normalized RGB.
    pub fn hsl_to_rgb(
        hue: Component,
        saturation: Component,
        lightness: Component,
    ) -> (Component, Component, Component) {
        if saturation == 0.0 {
            return (lightness, lightness, lightness);
        }

        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;

        (
            hue_to_channel(p, q, hue + 1.0 / 3.0),
            hue_to_channel(p, q, hue),
            hue_to_channel(p, q, hue - 1.0 / 3.0),
        )
    }

    fn hue_to_channel(p: Component, q: Component, t: Component) -> Component {
        let t = if t < 0.0 {
            t + 1.0
        } else if t > 1.0 {
            t - 1.0
        } else {
            t
        };

        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }

    /// Convert normalized RGB to CMYK fractions.
    pub fn rgb_to_cmyk(
        red: Component,
        green: Component,
        blue: Component,
    ) -> (Component, Component, Component, Component) {
        let cyan = 1.0 - red;
        let magenta = 1.0 - green;
        let yellow = 1.0 - blue;
        let key = cyan.min(magenta).min(yellow);

        if key == 1.0 {
            return (0.0, 0.0, 0.0, 1.0);
        }

        (
            (cyan - key) / (1.0 - key),
            (magenta - key) / (1.0 - key),
            (yellow - key) / (1.0 - key),
            key,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::assert_component_eq;

    #[test]
    fn pure_red() {
        assert_eq!(rgb_to_hex(255, 0, 0), "FF0000");
        assert_eq!(rgb_to_hsl(255, 0, 0), Hsl::new(0, 100, 50));
        assert_eq!(hsl_to_rgb(0, 100, 50), Rgb::new(255, 0, 0));
    }

    #[test]
    fn hex_round_trip() {
        for red in (0..=255).step_by(3) {
            for green in (0..=255).step_by(5) {
                for blue in (0..=255).step_by(17) {
                    let hex = rgb_to_hex(red, green, blue);
                    assert_eq!(
                        hex_to_rgb(&hex),
                        Some(Rgb::new(red as u8, green as u8, blue as u8))
                    );
                }
            }
        }
    }

    #[test]
    fn hex_clamps_out_of_range_channels() {
        assert_eq!(rgb_to_hex(-1, 256, 1000), "00FFFF");
    }

    #[test]
    fn hex_rejects_garbage() {
        assert_eq!(hex_to_rgb("zzzzzz"), None);
        assert_eq!(hex_to_rgb("#abc"), None);
        assert_eq!(hex_to_rgb(""), None);
    }

    #[test]
    fn achromatic_colors_have_no_hue_or_saturation() {
        for x in 0..=255 {
            let expected = (x as Component / 255.0 * 100.0).round() as u8;
            assert_eq!(rgb_to_hsl(x, x, x), Hsl::new(0, 0, expected));
        }
    }

    #[test]
    fn gray_round_trip_is_within_one() {
        for x in 0..=255_i32 {
            let back = rgb_to_hsl(x, x, x).to_rgb();
            assert_eq!(back.red, back.green);
            assert_eq!(back.green, back.blue);
            assert!((back.red as i32 - x).abs() <= 1, "{x} -> {back:?}");
        }
    }

    #[test]
    fn primaries_and_secondaries() {
        #[rustfmt::skip]
        const TESTS: &[(u8, u8, u8, u16, u8, u8)] = &[
            (255,   0,   0,   0, 100, 50),
            (  0, 255,   0, 120, 100, 50),
            (  0,   0, 255, 240, 100, 50),
            (255, 255,   0,  60, 100, 50),
            (  0, 255, 255, 180, 100, 50),
            (255,   0, 255, 300, 100, 50),
            (255, 255, 255,   0,   0, 100),
            (  0,   0,   0,   0,   0, 0),
        ];

        for &(red, green, blue, hue, saturation, lightness) in TESTS {
            let rgb = Rgb::new(red, green, blue);
            let hsl = Hsl::new(hue, saturation, lightness);
            assert_eq!(rgb.to_hsl(), hsl, "{rgb:?}");
            assert_eq!(hsl.to_rgb(), rgb, "{hsl:?}");
        }
    }

    #[test]
    fn chocolate() {
        let rgb = Rgb::new(210, 105, 30);
        assert_eq!(rgb.to_hsl(), Hsl::new(25, 75, 47));
        assert_eq!(Hsl::new(25, 75, 47).to_rgb(), rgb);

        let cmyk = rgb.to_cmyk();
        assert_component_eq!(cmyk.cyan, 0.0);
        assert_component_eq!(cmyk.magenta, 50.0);
        assert_component_eq!(cmyk.yellow, 85.7);
        assert_component_eq!(cmyk.key, 17.6);
    }

    #[test]
    fn light_colors_use_the_upper_saturation_branch() {
        // rgb(255, 200, 200): lightness is above one half.
        assert_eq!(rgb_to_hsl(255, 200, 200), Hsl::new(0, 100, 89));
    }

    #[test]
    fn red_wins_hue_ties() {
        // Red and green share the max channel, so the red branch computes the
        // hue: (g - b) / d = 1, a sixth of a turn.
        assert_eq!(rgb_to_hsl(200, 200, 100).hue, 60);
        assert_eq!(rgb_to_hsl(100, 200, 200).hue, 180);
    }

    #[test]
    fn hue_near_a_full_turn_wraps_to_zero() {
        assert_eq!(rgb_to_hsl(255, 0, 1).hue, 0);
    }

    #[test]
    fn hsl_input_is_clamped() {
        assert_eq!(hsl_to_rgb(360, 100, 50), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(120, 250, 50), Rgb::new(0, 255, 0));
        assert_eq!(hsl_to_rgb(0, 0, 400), Rgb::WHITE);
    }

    #[test]
    fn hsl_round_trip_stays_close() {
        // Rounding HSL to whole degrees and percentages can move a channel by
        // a few steps, never more than 6.
        for red in (0..=255).step_by(15) {
            for green in (0..=255).step_by(15) {
                for blue in (0..=255).step_by(15) {
                    let back = rgb_to_hsl(red, green, blue).to_rgb();
                    assert!((back.red as i32 - red).abs() <= 6);
                    assert!((back.green as i32 - green).abs() <= 6);
                    assert!((back.blue as i32 - blue).abs() <= 6);
                }
            }
        }
    }

    #[test]
    fn black_has_only_key() {
        assert_eq!(rgb_to_cmyk(0, 0, 0), Cmyk::BLACK);
    }

    #[test]
    fn cmyk_of_common_colors() {
        assert_eq!(rgb_to_cmyk(255, 255, 255), Cmyk::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(rgb_to_cmyk(255, 0, 0), Cmyk::new(0.0, 100.0, 100.0, 0.0));
        assert_eq!(rgb_to_cmyk(0, 255, 0), Cmyk::new(100.0, 0.0, 100.0, 0.0));
        assert_eq!(rgb_to_cmyk(0, 0, 255), Cmyk::new(100.0, 100.0, 0.0, 0.0));

        let gray = rgb_to_cmyk(128, 128, 128);
        assert_component_eq!(gray.cyan, 0.0);
        assert_component_eq!(gray.key, 49.8);
    }
}
