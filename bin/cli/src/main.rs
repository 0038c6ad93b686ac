//! Convert a color between the RGB, HSB and HSL models from the command line.
//!
//! ```text
//! $ tricolor RGBToHSB 210 105 30
//! HSB = 25 0.86 0.82
//! ```

mod args;
mod logging;
mod usage;

use std::io::{self, Write};
use std::process::ExitCode;

use tricolor::Converter;

use crate::args::{CliError, Command, Invocation};

/// The status the original tool returned for `-1`.
const FAILURE: u8 = 255;

fn main() -> ExitCode {
    let mut argv = std::env::args_os();
    let program = argv
        .next()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("tricolor"));
    let env_hue_wrap = std::env::var(args::HUE_WRAP_ENV).ok();

    let invocation = args::parse(&program, argv.collect(), env_hue_wrap.as_deref());

    let verbose = matches!(&invocation, Ok(Invocation { verbose: true, .. }));
    if let Err(err) = logging::init(verbose) {
        eprintln!("warning: {err:#}");
    }

    let stdout = io::stdout();
    let result = invocation.and_then(|invocation| execute(&invocation, &mut stdout.lock()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Malformed { usage }) => {
            tracing::debug!("malformed arguments");
            println!("{usage}");
            ExitCode::from(FAILURE)
        }
        Err(err) => {
            tracing::debug!(error = %err, "conversion failed");
            eprintln!("error: {err}");
            ExitCode::from(FAILURE)
        }
    }
}

fn execute(invocation: &Invocation, out: &mut impl Write) -> Result<(), CliError> {
    match &invocation.command {
        Command::Help(usage) => writeln!(out, "{usage}")?,
        Command::Convert { conversion, color } => {
            let converter = Converter::new(invocation.hue_wrap);
            let converted = converter.convert(color, conversion.to)?;
            tracing::debug!(
                %conversion,
                hue_wrap = ?invocation.hue_wrap,
                input = ?color,
                output = ?converted,
                "converted"
            );
            writeln!(out, "{converted}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use super::*;

    fn run(argv: &[&str]) -> Result<String, CliError> {
        let argv = argv.iter().map(OsString::from).collect();
        let invocation = args::parse("tricolor", argv, None)?;
        let mut out = Vec::new();
        execute(&invocation, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn rgb_to_hsb() {
        assert_eq!(run(&["RGBToHSB", "255", "0", "0"]).unwrap(), "HSB = 0 1.00 1.00\n");
        assert_eq!(run(&["RGBToHSB", "210", "105", "30"]).unwrap(), "HSB = 25 0.86 0.82\n");
        assert_eq!(run(&["RGBToHSV", "0", "0", "255"]).unwrap(), "HSB = 240 1.00 1.00\n");
    }

    #[test]
    fn hsb_to_rgb() {
        assert_eq!(run(&["HSBToRGB", "0", "1.0", "1.0"]).unwrap(), "RGB = 255 0 0\n");
        assert_eq!(run(&["HSBToRGB", "360", "1", "1"]).unwrap(), "RGB = 255 0 0\n");
        assert_eq!(run(&["HSBToRGB", "120", "1.0", "1.0"]).unwrap(), "RGB = 0 255 0\n");
    }

    #[test]
    fn rgb_to_hsl() {
        assert_eq!(run(&["RGBToHSL", "255", "255", "255"]).unwrap(), "HSL = 0 0.00 1.00\n");
        assert_eq!(run(&["RGBToHSL", "0", "0", "0"]).unwrap(), "HSL = 0 0.00 0.00\n");
        assert_eq!(run(&["RGBToHSL", "210", "105", "30"]).unwrap(), "HSL = 25 0.75 0.47\n");
    }

    #[test]
    fn hsl_to_rgb() {
        assert_eq!(run(&["HSLToRGB", "240", "1", "0.5"]).unwrap(), "RGB = 0 0 255\n");
    }

    #[test]
    fn between_hue_notations() {
        assert_eq!(run(&["HSBToHSL", "0", "1", "1"]).unwrap(), "HSL = 0 1.00 0.50\n");
        assert_eq!(run(&["HSLToHSB", "120", "1", "0.5"]).unwrap(), "HSB = 120 1.00 1.00\n");
    }

    #[test]
    fn hue_wrap_option() {
        assert_eq!(run(&["RGBToHSB", "255", "0", "255"]).unwrap(), "HSB = 300 1.00 1.00\n");
        assert_eq!(
            run(&["--hue-wrap", "mirror", "RGBToHSB", "255", "0", "255"]).unwrap(),
            "HSB = 420 1.00 1.00\n"
        );
    }

    #[test]
    fn invalid_arguments_are_reported() {
        let err = run(&["HSBToRGB", "361", "0.5", "0.5"]).unwrap_err();
        assert!(matches!(err, CliError::Convert(tricolor::Error::InvalidArgument { .. })));
        assert_eq!(err.to_string(), "invalid argument: hue 361 is outside 0-360");

        let err = run(&["HSBToRGB", "0", "1.5", "0.5"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid argument: saturation 1.5 is outside 0.0-1.0"
        );

        let err = run(&["HSLToRGB", "0", "0.5", "NaN"]).unwrap_err();
        assert!(matches!(err, CliError::Convert(_)));
    }

    #[test]
    fn help_prints_usage() {
        let text = run(&["-h"]).unwrap();
        assert!(text.starts_with("usage:\n"));
        assert!(text.ends_with("print this text\n"));
    }
}
