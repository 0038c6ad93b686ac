//! Model a color with the HSL notation.

use std::fmt;

use crate::color::{Color, Component, HasSpace, Space};

tricolor_macros::gen_model! {
    /// A color specified with hue, saturation and lightness.
    pub struct Hsl {
        /// The hue in whole degrees, 0 to 360 where 360 is the same as 0.
        hue: u16,
        /// The saturation, 0.0 to 1.0.
        saturation: Component,
        /// The lightness, 0.0 to 1.0.
        lightness: Component,
    }
}

impl HasSpace for Hsl {
    const SPACE: Space = Space::Hsl;
}

impl From<Hsl> for Color {
    fn from(value: Hsl) -> Self {
        Color::Hsl(value)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2} {:.2}", self.hue, self.saturation, self.lightness)
    }
}
