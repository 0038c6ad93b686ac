//! Errors reported by the conversions.

use thiserror::Error;

use crate::color::Component;

/// Errors returned when converting from a hue based notation to RGB.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// A component of the source color is outside of its valid range.
    #[error("invalid argument: {component} {value} is outside {range}")]
    InvalidArgument {
        /// Name of the offending component.
        component: &'static str,
        /// The rejected value.
        value: Component,
        /// The accepted range, as shown to users.
        range: &'static str,
    },
}

/// A [`Result`](std::result::Result) with the error fixed to [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn hue(hue: u16) -> Self {
        Error::InvalidArgument {
            component: "hue",
            value: Component::from(hue),
            range: "0-360",
        }
    }

    pub(crate) fn fraction(component: &'static str, value: Component) -> Self {
        Error::InvalidArgument {
            component,
            value,
            range: "0.0-1.0",
        }
    }
}
