//! Math shared by the conversions.

use std::str::FromStr;

use crate::color::Component;
use crate::models::Rgb;

/// How a negative hue angle is brought back onto the color wheel. Negative
/// angles occur when red is the largest channel and blue is larger than green,
/// i.e. for colors between magenta and red.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HueWrap {
    /// Add a full turn, `angle + 360`. Hues stay within 0 to 359.
    #[default]
    Wrap,
    /// Reflect the angle, `360 - angle`. Hues of colors between magenta and
    /// red land between 360 and 420.
    Mirror,
}

impl HueWrap {
    /// Apply the convention to a raw hue angle in degrees. Positive angles are
    /// returned as is.
    pub fn apply(&self, angle: Component) -> Component {
        if angle >= 0.0 {
            return angle;
        }

        match self {
            HueWrap::Wrap => angle + 360.0,
            HueWrap::Mirror => 360.0 - angle,
        }
    }
}

/// Returned when a string does not name a [`HueWrap`] convention.
#[derive(Debug, thiserror::Error, PartialEq)]
#[error("unknown hue wrap convention: {0} (expected wrap or mirror)")]
pub struct UnknownHueWrap(pub String);

impl FromStr for HueWrap {
    type Err = UnknownHueWrap;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("wrap") {
            Ok(HueWrap::Wrap)
        } else if s.eq_ignore_ascii_case("mirror") {
            Ok(HueWrap::Mirror)
        } else {
            Err(UnknownHueWrap(s.to_string()))
        }
    }
}

/// Calculate the hue of an RGB color in whole degrees, rounding to the nearest
/// degree. Achromatic colors have a hue of 0.
pub fn hue(rgb: &Rgb, wrap: HueWrap) -> u16 {
    if rgb.is_achromatic() {
        return 0;
    }

    let (min, max) = rgb.min_max();

    let diff = Component::from(max - min);
    let red = Component::from(rgb.red);
    let green = Component::from(rgb.green);
    let blue = Component::from(rgb.blue);

    let angle = if max == rgb.red {
        wrap.apply(60.0 * (green - blue) / diff)
    } else if max == rgb.green {
        120.0 + 60.0 * (blue - red) / diff
    } else {
        240.0 + 60.0 * (red - green) / diff
    };

    let hue = (angle + 0.5) as u16;

    match wrap {
        HueWrap::Wrap => normalize_hue(hue),
        HueWrap::Mirror => hue,
    }
}

/// A hue of 360 degrees is the same as 0.
pub fn normalize_hue(hue: u16) -> u16 {
    if hue == 360 {
        0
    } else {
        hue
    }
}

/// Scale a fraction to an 8-bit channel, dropping the fractional part.
pub fn truncate_channel(value: Component) -> u8 {
    (value * 255.0) as u8
}

/// Scale a fraction to an 8-bit channel, rounding to the nearest integer.
pub fn round_channel(value: Component) -> u8 {
    (value * 255.0).round() as u8
}
