//! Usage text.

use tricolor::Space;

use crate::args::{Conversion, HUE_WRAP_ENV};

/// Every conversion the command line accepts, in the order they are listed in
/// the usage text.
pub const CONVERSIONS: [Conversion; 6] = [
    Conversion::new(Space::Rgb, Space::Hsb),
    Conversion::new(Space::Hsb, Space::Rgb),
    Conversion::new(Space::Rgb, Space::Hsl),
    Conversion::new(Space::Hsl, Space::Rgb),
    Conversion::new(Space::Hsb, Space::Hsl),
    Conversion::new(Space::Hsl, Space::Hsb),
];

fn ranges(space: Space) -> &'static str {
    match space {
        Space::Rgb => "(0-255) (0-255) (0-255)",
        Space::Hsb | Space::Hsl => "(0-360) (0.0-1.0) (0.0-1.0)",
    }
}

fn line(program: &str, conversion: &Conversion) -> String {
    format!("{program} {conversion} {}", ranges(conversion.from))
}

/// Usage of a single conversion.
pub fn single(program: &str, conversion: &Conversion) -> String {
    format!("usage:{}", line(program, conversion))
}

/// Usage of every conversion plus the options.
pub fn full(program: &str) -> String {
    let mut text = String::from("usage:\n");
    for conversion in &CONVERSIONS {
        text.push_str(&line(program, conversion));
        text.push('\n');
    }
    text.push_str("options:\n");
    text.push_str(&format!(
        "  --hue-wrap <wrap|mirror>  how negative hue angles are wrapped (default wrap, env {HUE_WRAP_ENV})\n"
    ));
    text.push_str("  -v, --verbose             log debug events to stderr\n");
    text.push_str("  -h, --help                print this text");
    text
}
