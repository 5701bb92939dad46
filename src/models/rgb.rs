//! Model a color with 8-bit red, green and blue channels.

use std::fmt;

use crate::color::ParseError;

spectra_macros::gen_model! {
    /// A color specified with 8-bit channels in the sRGB color space.
    #[derive(Eq, Hash)]
    pub struct Rgb {
        /// The red channel of the color.
        red: u8,
        /// The green channel of the color.
        green: u8,
        /// The blue channel of the color.
        blue: u8,
    }
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a color from integers of any magnitude, clamping each channel
    /// into `0..=255`.
    pub fn saturating(red: i64, green: i64, blue: i64) -> Self {
        let channel = |value: i64| value.clamp(0, 255) as u8;
        Self::new(channel(red), channel(green), channel(blue))
    }

    /// Format the color as 6 uppercase hex digits, without a `#` prefix.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Parse exactly 6 hex digits, in any case, with an optional leading `#`.
    /// The 3 digit shorthand is not accepted.
    pub fn from_hex(hex: &str) -> Result<Self, ParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        if digits.is_empty() {
            return Err(ParseError::Empty);
        }

        let len = digits.chars().count();
        if len != 6 {
            return Err(ParseError::InvalidLength(len));
        }

        // Also rejects the sign prefix `from_str_radix` would accept.
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseError::InvalidDigit);
        }

        let channel = |at: usize| {
            u8::from_str_radix(&digits[at..at + 2], 16).map_err(|_| ParseError::InvalidDigit)
        };

        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.red, self.green, self.blue)
    }
}
