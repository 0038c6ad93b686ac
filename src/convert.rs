//! Conversions between the RGB, HSB and HSL models.
//!
//! Converting from RGB never fails. Converting to RGB validates the hue based
//! source first and returns [`Error::InvalidArgument`] when a component is out
//! of range.
//!
//! ```rust
//! use tricolor::models::Rgb;
//! let hsb = Rgb::new(0, 0, 255).to_hsb();
//! assert_eq!(hsb.hue, 240);
//! let rgb = hsb.to_rgb().unwrap();
//! assert_eq!(rgb, Rgb::new(0, 0, 255));
//! ```

use crate::{
    color::{Color, Component, Space},
    error::{Error, Result},
    math::{self, HueWrap},
    models::{Hsb, Hsl, Rgb},
};

/// Converts colors between models. The only setting is the convention used to
/// wrap negative hue angles, see [`HueWrap`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Converter {
    hue_wrap: HueWrap,
}

impl Converter {
    /// Create a converter using the given hue wrap convention.
    pub fn new(hue_wrap: HueWrap) -> Self {
        Self { hue_wrap }
    }

    /// The hue wrap convention in use.
    pub fn hue_wrap(&self) -> HueWrap {
        self.hue_wrap
    }

    /// Convert an RGB color to the HSB notation.
    pub fn rgb_to_hsb(&self, rgb: &Rgb) -> Hsb {
        let (min, max) = rgb.min_max();

        let diff = Component::from(max - min);
        let max = Component::from(max);

        let saturation = if max == 0.0 { 0.0 } else { diff / max };
        let brightness = max / 255.0;

        Hsb::new(math::hue(rgb, self.hue_wrap), saturation, brightness)
    }

    /// Convert an HSB color to RGB. Channels are truncated, not rounded.
    pub fn hsb_to_rgb(&self, hsb: &Hsb) -> Result<Rgb> {
        let Hsb {
            hue,
            saturation,
            brightness,
        } = *hsb;

        if let Err(err) = util::validate(hue, ("saturation", saturation), ("brightness", brightness))
        {
            tracing::debug!(hue, saturation, brightness, "rejected hsb color");
            return Err(err);
        }

        let (red, green, blue) = util::hsb_to_rgb(math::normalize_hue(hue), saturation, brightness);

        Ok(Rgb::new(
            math::truncate_channel(red),
            math::truncate_channel(green),
            math::truncate_channel(blue),
        ))
    }

    /// Convert an RGB color to the HSL notation.
    pub fn rgb_to_hsl(&self, rgb: &Rgb) -> Hsl {
        let (min, max) = rgb.min_max();

        let diff = Component::from(max - min);
        let sum = u16::from(min) + u16::from(max);

        let saturation = if sum == 0 || sum == 510 {
            0.0
        } else if sum < 255 {
            diff / Component::from(sum)
        } else {
            diff / Component::from(510 - sum)
        };
        let lightness = Component::from(sum) / 510.0;

        Hsl::new(math::hue(rgb, self.hue_wrap), saturation, lightness)
    }

    /// Convert an HSL color to RGB. Channels are rounded to the nearest
    /// integer.
    pub fn hsl_to_rgb(&self, hsl: &Hsl) -> Result<Rgb> {
        let Hsl {
            hue,
            saturation,
            lightness,
        } = *hsl;

        if let Err(err) = util::validate(hue, ("saturation", saturation), ("lightness", lightness))
        {
            tracing::debug!(hue, saturation, lightness, "rejected hsl color");
            return Err(err);
        }

        let (red, green, blue) = util::hsl_to_rgb(math::normalize_hue(hue), saturation, lightness);

        Ok(Rgb::new(
            math::round_channel(red),
            math::round_channel(green),
            math::round_channel(blue),
        ))
    }

    /// Convert a color to the given space. Conversions between HSB and HSL go
    /// through RGB.
    pub fn convert(&self, color: &Color, space: Space) -> Result<Color> {
        if color.space() == space {
            return Ok(*color);
        }

        let rgb = match color {
            Color::Rgb(rgb) => *rgb,
            Color::Hsb(hsb) => self.hsb_to_rgb(hsb)?,
            Color::Hsl(hsl) => self.hsl_to_rgb(hsl)?,
        };

        Ok(match space {
            Space::Rgb => rgb.into(),
            Space::Hsb => self.rgb_to_hsb(&rgb).into(),
            Space::Hsl => self.rgb_to_hsl(&rgb).into(),
        })
    }
}

impl Color {
    /// Convert this color to the specified color space, wrapping negative hue
    /// angles with [`HueWrap::Wrap`].
    pub fn to_space(&self, space: Space) -> Result<Self> {
        Converter::default().convert(self, space)
    }
}

impl Rgb {
    /// Convert this color to the HSB notation.
    pub fn to_hsb(&self) -> Hsb {
        Converter::default().rgb_to_hsb(self)
    }

    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        Converter::default().rgb_to_hsl(self)
    }
}

impl Hsb {
    /// Convert this color from the HSB notation to RGB.
    pub fn to_rgb(&self) -> Result<Rgb> {
        Converter::default().hsb_to_rgb(self)
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to RGB.
    pub fn to_rgb(&self) -> Result<Rgb> {
        Converter::default().hsl_to_rgb(self)
    }
}

mod util {
    use super::{Error, Result};
    use crate::color::Component;

    fn is_fraction(value: Component) -> bool {
        (0.0..=1.0).contains(&value)
    }

    /// Check the components of a hue based color. NaN is never a valid
    /// fraction.
    pub fn validate(
        hue: u16,
        (name1, value1): (&'static str, Component),
        (name2, value2): (&'static str, Component),
    ) -> Result<()> {
        if hue > 360 {
            return Err(Error::hue(hue));
        }
        if !is_fraction(value1) {
            return Err(Error::fraction(name1, value1));
        }
        if !is_fraction(value2) {
            return Err(Error::fraction(name2, value2));
        }
        Ok(())
    }

    /// Convert from HSB notation to RGB fractions. `hue` must be below 360.
    pub fn hsb_to_rgb(
        hue: u16,
        saturation: Component,
        brightness: Component,
    ) -> (Component, Component, Component) {
        let segment = (hue / 60) % 6;
        let offset = Component::from(hue) / 60.0 - Component::from(segment);

        let max = brightness;
        let min = max * (1.0 - saturation);
        // Rises towards max across the segment.
        let front = max * (1.0 - offset * saturation);
        // Falls away from max across the segment.
        let behind = max * (1.0 - (1.0 - offset) * saturation);

        match segment {
            0 => (max, behind, min),
            1 => (front, max, min),
            2 => (min, max, behind),
            3 => (min, front, max),
            4 => (behind, min, max),
            _ => (max, min, front),
        }
    }

    /// Convert from HSL notation to RGB fractions.
    /// <https://drafts.csswg.org/css-color-4/#hsl-to-rgb>
    pub fn hsl_to_rgb(
        hue: u16,
        saturation: Component,
        lightness: Component,
    ) -> (Component, Component, Component) {
        let hue = Component::from(hue);
        let a = saturation * lightness.min(1.0 - lightness);

        let f = |n: Component| {
            let k = (n + hue / 30.0) % 12.0;
            lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
        };

        (f(0.0), f(8.0), f(4.0))
    }
}
