//! Named colors an application can pick a working set from.
//!
//! ```rust
//! use spectra::Palette;
//!
//! let loaded = Palette::default().load(["red", "blue"]);
//! assert_eq!(loaded.css_variable("accent", "red").as_deref(), Some("--accent: #BF3C2C"));
//! ```

use std::collections::BTreeMap;

use crate::models::Rgb;

#[rustfmt::skip]
const DEFAULT_COLORS: &[(&str, Rgb)] = &[
    ("red",        Rgb::new(0xbf, 0x3c, 0x2c)),
    ("orange",     Rgb::new(0xf2, 0x85, 0x00)),
    ("yellow",     Rgb::new(0xff, 0xc7, 0x04)),
    ("green",      Rgb::new(0x41, 0x74, 0x40)),
    ("blue",       Rgb::new(0x33, 0x66, 0xcc)),
    ("purple",     Rgb::new(0x6a, 0x60, 0xb0)),
    ("black",      Rgb::new(0x20, 0x21, 0x22)),
    ("white",      Rgb::new(0xff, 0xff, 0xff)),
    ("light-gray", Rgb::new(0xc8, 0xcc, 0xd1)),
    ("dark-gray",  Rgb::new(0xa2, 0xa9, 0xb1)),
];

/// A set of named colors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: BTreeMap<String, Rgb>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS
                .iter()
                .map(|&(name, color)| (name.to_owned(), color))
                .collect(),
        }
    }
}

impl Palette {
    /// Create a palette with no colors in it.
    pub fn empty() -> Self {
        Self {
            colors: BTreeMap::new(),
        }
    }

    /// Add or replace a named color, returning the color it replaced.
    pub fn insert(&mut self, name: impl Into<String>, color: Rgb) -> Option<Rgb> {
        self.colors.insert(name.into(), color)
    }

    /// Look up a color by name.
    pub fn get(&self, name: &str) -> Option<Rgb> {
        self.colors.get(name).copied()
    }

    /// Names of all the colors in the palette, in alphabetical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }

    /// Pick a working set of colors by name. Names the palette does not
    /// define are skipped.
    pub fn load<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> LoadedColors {
        let colors = names
            .into_iter()
            .filter_map(|name| match self.get(name) {
                Some(color) => Some((name.to_owned(), color)),
                None => {
                    log::warn!("color {name:?} is not defined in the palette");
                    None
                }
            })
            .collect();

        LoadedColors { colors }
    }
}

/// The working set of colors loaded from a [`Palette`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadedColors {
    colors: BTreeMap<String, Rgb>,
}

impl LoadedColors {
    /// Look up a loaded color by name.
    pub fn get(&self, name: &str) -> Option<Rgb> {
        self.colors.get(name).copied()
    }

    /// All loaded colors, in alphabetical order of their names.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Rgb)> {
        self.colors.iter().map(|(name, color)| (name.as_str(), *color))
    }

    /// Number of loaded colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if no colors were loaded.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// A CSS custom property declaration assigning the named color to
    /// `--variable`, or `None` if the color is not loaded.
    pub fn css_variable(&self, variable: &str, name: &str) -> Option<String> {
        match self.get(name) {
            Some(color) => Some(format!("--{variable}: #{}", color.to_hex())),
            None => {
                log::warn!("color {name:?} is not loaded");
                None
            }
        }
    }
}
