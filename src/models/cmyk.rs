//! Model a color with the CMYK print notation.

use std::fmt;

use crate::Component;

spectra_macros::gen_model! {
    /// A color specified with cyan, magenta, yellow and key (black)
    /// percentages, each in `0.0..=100.0` and rounded to one decimal place.
    pub struct Cmyk {
        /// The cyan percentage of the color.
        cyan: Component,
        /// The magenta percentage of the color.
        magenta: Component,
        /// The yellow percentage of the color.
        yellow: Component,
        /// The key (black) percentage of the color.
        key: Component,
    }
}

impl Cmyk {
    /// Pure black, with no cyan, magenta or yellow.
    pub const BLACK: Cmyk = Cmyk::new(0.0, 0.0, 0.0, 100.0);
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}%, {}%, {}%, {}%",
            self.cyan, self.magenta, self.yellow, self.key
        )
    }
}
