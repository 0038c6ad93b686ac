//! Model a color with the HSB (also called HSV) notation.

use std::fmt;

use crate::color::{Color, Component, HasSpace, Space};

tricolor_macros::gen_model! {
    /// A color specified with hue, saturation and brightness.
    pub struct Hsb {
        /// The hue in whole degrees, 0 to 360 where 360 is the same as 0.
        hue: u16,
        /// The saturation, 0.0 to 1.0.
        saturation: Component,
        /// The brightness (value), 0.0 to 1.0.
        brightness: Component,
    }
}

impl HasSpace for Hsb {
    const SPACE: Space = Space::Hsb;
}

impl From<Hsb> for Color {
    fn from(value: Hsb) -> Self {
        Color::Hsb(value)
    }
}

impl fmt::Display for Hsb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:.2} {:.2}",
            self.hue, self.saturation, self.brightness
        )
    }
}
