//! tricolor converts pixel colors between the RGB, HSB (HSV) and HSL color
//! models. RGB colors have 8-bit channels, hues are whole degrees and the
//! remaining components are fractions between 0.0 and 1.0.

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
mod math;
pub mod models;


pub use color::{Color, Component, HasSpace, Space, UnknownSpace};
pub use convert::Converter;
pub use error::{Error, Result};
pub use math::{HueWrap, UnknownHueWrap};
pub use models::{Hsb, Hsl, Model, Rgb};
