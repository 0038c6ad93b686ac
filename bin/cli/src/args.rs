//! Command line parsing.

use std::ffi::OsString;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tricolor::{Color, Component, Hsb, Hsl, HueWrap, Rgb, Space};

use crate::usage;

/// Environment variable consulted when `--hue-wrap` is not given.
pub const HUE_WRAP_ENV: &str = "TRICOLOR_HUE_WRAP";

#[derive(Debug, Error)]
pub enum CliError {
    /// Wrong argument count or a value that does not parse. Carries the usage
    /// text to print.
    #[error("{usage}")]
    Malformed { usage: String },

    #[error("invalid option: {0}")]
    InvalidOption(String),

    #[error(transparent)]
    Convert(#[from] tricolor::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A conversion named on the command line, e.g. `RGBToHSB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Conversion {
    pub from: Space,
    pub to: Space,
}

impl Conversion {
    pub const fn new(from: Space, to: Space) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}To{}", self.from, self.to)
    }
}

impl FromStr for Conversion {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from, to) = s.split_once("To").ok_or(())?;
        let from = from.parse::<Space>().map_err(|_| ())?;
        let to = to.parse::<Space>().map_err(|_| ())?;
        if from == to {
            return Err(());
        }
        Ok(Self { from, to })
    }
}

#[derive(Debug, PartialEq)]
pub enum Command {
    /// Print the full usage and exit successfully.
    Help(String),
    /// Convert a color given on the command line.
    Convert {
        conversion: Conversion,
        color: Color,
    },
}

#[derive(Debug, PartialEq)]
pub struct Invocation {
    pub hue_wrap: HueWrap,
    pub verbose: bool,
    pub command: Command,
}

/// Parse the arguments following the program name. `env_hue_wrap` is the
/// value of [`HUE_WRAP_ENV`], if set.
pub fn parse(
    program: &str,
    args: Vec<OsString>,
    env_hue_wrap: Option<&str>,
) -> Result<Invocation, CliError> {
    let mut args = pico_args::Arguments::from_vec(args);

    let help = args.contains(["-h", "--help"]);
    let verbose = args.contains(["-v", "--verbose"]);
    let flag_hue_wrap: Option<HueWrap> = args
        .opt_value_from_str("--hue-wrap")
        .map_err(|err| CliError::InvalidOption(err.to_string()))?;

    let hue_wrap = match (flag_hue_wrap, env_hue_wrap) {
        (Some(hue_wrap), _) => hue_wrap,
        (None, Some(value)) => value
            .parse()
            .map_err(|err| CliError::InvalidOption(format!("{HUE_WRAP_ENV}: {err}")))?,
        (None, None) => HueWrap::default(),
    };

    if help {
        return Ok(Invocation {
            hue_wrap,
            verbose,
            command: Command::Help(usage::full(program)),
        });
    }

    let free = args
        .finish()
        .into_iter()
        .map(|arg| arg.into_string())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| malformed_full(program))?;

    let Some((name, values)) = free.split_first() else {
        return Err(malformed_full(program));
    };

    let conversion = name
        .parse::<Conversion>()
        .map_err(|_| malformed_full(program))?;

    let malformed = || CliError::Malformed {
        usage: usage::single(program, &conversion),
    };

    let [c0, c1, c2] = values else {
        return Err(malformed());
    };

    let color = parse_color(conversion.from, c0, c1, c2).ok_or_else(malformed)?;

    Ok(Invocation {
        hue_wrap,
        verbose,
        command: Command::Convert { conversion, color },
    })
}

fn malformed_full(program: &str) -> CliError {
    CliError::Malformed {
        usage: usage::full(program),
    }
}

/// Parse the three components of a color in the given space. RGB channels
/// must fit in 8 bits and hues must not be negative. Fractions are range
/// checked by the conversion itself.
fn parse_color(space: Space, c0: &str, c1: &str, c2: &str) -> Option<Color> {
    Some(match space {
        Space::Rgb => Rgb::new(c0.parse().ok()?, c1.parse().ok()?, c2.parse().ok()?).into(),
        Space::Hsb => Hsb::new(
            c0.parse().ok()?,
            c1.parse::<Component>().ok()?,
            c2.parse::<Component>().ok()?,
        )
        .into(),
        Space::Hsl => Hsl::new(
            c0.parse().ok()?,
            c1.parse::<Component>().ok()?,
            c2.parse::<Component>().ok()?,
        )
        .into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    fn convert(invocation: Invocation) -> (Conversion, Color) {
        match invocation.command {
            Command::Convert { conversion, color } => (conversion, color),
            other => panic!("expected a conversion, got {other:?}"),
        }
    }

    #[test]
    fn parse_conversion_names() {
        assert_eq!(
            "RGBToHSB".parse(),
            Ok(Conversion::new(Space::Rgb, Space::Hsb))
        );
        assert_eq!(
            "HSVToRGB".parse(),
            Ok(Conversion::new(Space::Hsb, Space::Rgb))
        );
        assert_eq!(
            "HSLToHSB".parse(),
            Ok(Conversion::new(Space::Hsl, Space::Hsb))
        );
        assert_eq!("RGBToRGB".parse::<Conversion>(), Err(()));
        assert_eq!("rgbtohsb".parse::<Conversion>(), Err(()));
        assert_eq!("RGB".parse::<Conversion>(), Err(()));
        assert_eq!(Conversion::new(Space::Hsb, Space::Rgb).to_string(), "HSBToRGB");
    }

    #[test]
    fn parse_rgb_to_hsb() {
        let invocation = parse("tricolor", args(&["RGBToHSB", "255", "0", "10"]), None).unwrap();
        assert_eq!(invocation.hue_wrap, HueWrap::Wrap);
        assert!(!invocation.verbose);

        let (conversion, color) = convert(invocation);
        assert_eq!(conversion, Conversion::new(Space::Rgb, Space::Hsb));
        assert_eq!(color, Color::Rgb(Rgb::new(255, 0, 10)));
    }

    #[test]
    fn parse_hsb_to_rgb() {
        let invocation = parse("tricolor", args(&["HSBToRGB", "361", "0.5", "1.5"]), None).unwrap();
        let (_, color) = convert(invocation);
        // Out of range hues and fractions are left for the conversion to reject.
        assert_eq!(color, Color::Hsb(Hsb::new(361, 0.5, 1.5)));
    }

    #[test]
    fn rgb_channels_must_fit_in_8_bits() {
        for bad in ["256", "-1", "ten", "1.5", ""] {
            let err = parse("tricolor", args(&["RGBToHSL", "0", bad, "0"]), None).unwrap_err();
            match err {
                CliError::Malformed { usage } => {
                    assert_eq!(usage, "usage:tricolor RGBToHSL (0-255) (0-255) (0-255)")
                }
                other => panic!("expected malformed arguments, got {other:?}"),
            }
        }
    }

    #[test]
    fn negative_hue_is_malformed() {
        let err = parse("tricolor", args(&["HSBToRGB", "-5", "0.5", "0.5"]), None).unwrap_err();
        assert!(matches!(err, CliError::Malformed { .. }));
    }

    #[test]
    fn wrong_argument_count_is_malformed() {
        let err = parse("tricolor", args(&["RGBToHSB", "1", "2"]), None).unwrap_err();
        let CliError::Malformed { usage } = err else {
            panic!("expected malformed arguments");
        };
        assert_eq!(usage, "usage:tricolor RGBToHSB (0-255) (0-255) (0-255)");

        let err = parse("tricolor", args(&["RGBToHSB", "1", "2", "3", "4"]), None).unwrap_err();
        assert!(matches!(err, CliError::Malformed { .. }));
    }

    #[test]
    fn missing_or_unknown_subcommand_prints_full_usage() {
        for argv in [&[][..], &["RGBToXYZ", "1", "2", "3"][..], &["convert"][..]] {
            let err = parse("tricolor", args(argv), None).unwrap_err();
            let CliError::Malformed { usage } = err else {
                panic!("expected malformed arguments");
            };
            assert_eq!(usage, usage::full("tricolor"));
        }
    }

    #[test]
    fn help() {
        let invocation = parse("tricolor", args(&["--help"]), None).unwrap();
        assert_eq!(invocation.command, Command::Help(usage::full("tricolor")));
    }

    #[test]
    fn hue_wrap_from_flag_then_env() {
        let argv = ["--hue-wrap", "mirror", "RGBToHSB", "1", "2", "3"];
        let invocation = parse("tricolor", args(&argv), Some("wrap")).unwrap();
        assert_eq!(invocation.hue_wrap, HueWrap::Mirror);

        let invocation = parse("tricolor", args(&["RGBToHSB", "1", "2", "3"]), Some("mirror")).unwrap();
        assert_eq!(invocation.hue_wrap, HueWrap::Mirror);

        let err = parse("tricolor", args(&["RGBToHSB", "1", "2", "3"]), Some("fold")).unwrap_err();
        assert!(matches!(err, CliError::InvalidOption(_)));

        let argv = ["--hue-wrap", "fold", "RGBToHSB", "1", "2", "3"];
        let err = parse("tricolor", args(&argv), None).unwrap_err();
        assert!(matches!(err, CliError::InvalidOption(_)));
    }

    #[test]
    fn verbose_flag() {
        let invocation = parse("tricolor", args(&["RGBToHSB", "-v", "1", "2", "3"]), None).unwrap();
        assert!(invocation.verbose);
        let (_, color) = convert(invocation);
        assert_eq!(color, Color::Rgb(Rgb::new(1, 2, 3)));
    }
}
