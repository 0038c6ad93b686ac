//! Each color model is its own value type. Conversions between them live in
//! [`crate::convert`].

use std::fmt;

use crate::color::{Color, HasSpace};

pub mod hsb;
pub mod hsl;
pub mod rgb;

pub use hsb::Hsb;
pub use hsl::Hsl;
pub use rgb::Rgb;

/// A trait implemented by every color model. Implementations are generated by
/// `gen_model!`.
pub trait Model: HasSpace + Copy + fmt::Display {
    /// Uppercase name of the model, as used on the command line and in
    /// printed output.
    const LABEL: &'static str;

    /// Wrap the model in a generic [`Color`].
    fn to_color(&self) -> Color;
}
