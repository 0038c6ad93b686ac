//! Model a color with 8-bit red, green and blue channels.

use std::fmt;

use crate::color::{Color, HasSpace, Space};

tricolor_macros::gen_model! {
    /// A color made of 8-bit red, green and blue channels.
    pub struct Rgb {
        /// The red channel.
        red: u8,
        /// The green channel.
        green: u8,
        /// The blue channel.
        blue: u8,
    }
}

impl Rgb {
    /// Return the smallest and largest of the three channels.
    pub fn min_max(&self) -> (u8, u8) {
        let min = self.red.min(self.green).min(self.blue);
        let max = self.red.max(self.green).max(self.blue);
        (min, max)
    }

    /// True when all three channels are equal, i.e. the color is a shade of
    /// gray and has no hue.
    pub fn is_achromatic(&self) -> bool {
        self.red == self.green && self.green == self.blue
    }
}

impl HasSpace for Rgb {
    const SPACE: Space = Space::Rgb;
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Color::Rgb(value)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.red, self.green, self.blue)
    }
}
