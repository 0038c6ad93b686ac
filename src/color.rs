//! A [`Color`] holds a color expressed in any of the supported color models.

use std::fmt;
use std::str::FromStr;

use crate::models::{Hsb, Hsl, Model, Rgb};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value used for the fractional components.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value used for the fractional components.
pub type Component = f64;

/// The color models a [`Color`] can be expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Space {
    /// Red, green and blue channels, 8 bits each.
    Rgb = 0,
    /// Hue, saturation and brightness. Also known as HSV (hue, saturation,
    /// value).
    Hsb = 1,
    /// Hue, saturation and lightness.
    Hsl = 2,
}

impl Space {
    /// The label used when printing or parsing colors of this space.
    pub fn label(&self) -> &'static str {
        match self {
            Space::Rgb => Rgb::LABEL,
            Space::Hsb => Hsb::LABEL,
            Space::Hsl => Hsl::LABEL,
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string does not name a known [`Space`].
#[derive(Debug, thiserror::Error, PartialEq)]
#[error("unknown color space: {0}")]
pub struct UnknownSpace(pub String);

impl FromStr for Space {
    type Err = UnknownSpace;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RGB" => Ok(Space::Rgb),
            "HSB" | "HSV" => Ok(Space::Hsb),
            "HSL" => Ok(Space::Hsl),
            _ => Err(UnknownSpace(s.to_string())),
        }
    }
}

/// Types tagged with the color space they model.
pub trait HasSpace {
    /// The color space of the type.
    const SPACE: Space;
}

/// A color in any of the supported color models.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    /// A color with RGB channels.
    Rgb(Rgb),
    /// A color in the HSB notation.
    Hsb(Hsb),
    /// A color in the HSL notation.
    Hsl(Hsl),
}

impl Color {
    /// The color space this color is expressed in.
    pub fn space(&self) -> Space {
        match self {
            Color::Rgb(_) => Rgb::SPACE,
            Color::Hsb(_) => Hsb::SPACE,
            Color::Hsl(_) => Hsl::SPACE,
        }
    }
}

/// Prints the color as `<LABEL> = <c0> <c1> <c2>`.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(rgb) => write!(f, "{} = {}", Rgb::LABEL, rgb),
            Color::Hsb(hsb) => write!(f, "{} = {}", Hsb::LABEL, hsb),
            Color::Hsl(hsl) => write!(f, "{} = {}", Hsl::LABEL, hsl),
        }
    }
}
