//! Unitconv - command-line unit converter
//!
//! Usage:
//! - `unitconv <value> <from_unit> <to_unit>` converts a value
//! - `unitconv --list` lists every supported unit by category
//!
//! Results go to stdout, errors and logs to stderr. Conversion failures
//! exit with status 1, usage errors with status 2.

mod cli;
mod logging;
mod render;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};
use unitconv_units::{parse_value, Category, ConversionError, UNITS};

use crate::cli::{Args, Request};
use crate::render::NumberFormat;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init_logging();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprint!("{}", error_report(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let request = args
        .request()
        .context("expected <value> <from_unit> <to_unit> or --list")?;

    match request {
        Request::List => list(args.json),
        Request::Convert { value, from, to } => convert(value, from, to, args),
    }
}

fn list(json: bool) -> Result<()> {
    if json {
        let output = render::render_listing_json(&UNITS).context("failed to serialize unit listing")?;
        println!("{}", output);
    } else {
        // Listing already ends with a blank line
        print!("{}", render::render_listing(&UNITS));
    }
    Ok(())
}

fn convert(value_input: &str, from: &str, to: &str, args: &Args) -> Result<()> {
    let value = parse_value(value_input)?;
    let record = UNITS.convert_named(value, from, to)?;
    debug!(?record, "conversion done");

    let source = UNITS.resolve(record.from)?;
    UNITS.check_physical(value, source)?;

    if value < 0.0 && matches!(record.category, Category::Length | Category::Mass) {
        warn!(value, unit = record.from, "negative {} doesn't make physical sense", record.category.name());
    }

    if args.json {
        let output = render::render_conversion_json(&record)
            .context("failed to serialize conversion result")?;
        println!("{}", output);
    } else {
        let format = NumberFormat::from_precision(args.precision);
        println!("{}", render::render_conversion(&record, value_input, from, to, format));
    }
    Ok(())
}

/// Format a failure for stderr: `error[<CODE>]: <message>`, plus a hint for
/// unknown units
fn error_report(err: &anyhow::Error) -> String {
    match err.downcast_ref::<ConversionError>() {
        Some(e) => {
            let mut report = format!("error[{}]: {}\n", e.code(), e);
            if matches!(e, ConversionError::UnknownUnit(_)) {
                report.push_str("Try 'unitconv --list' to see supported units\n");
            }
            report
        }
        None => format!("error: {:#}\n", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unitconv_units::codes;

    fn run_with(args: &[&str]) -> Result<()> {
        let args = Args::try_parse_from(std::iter::once("unitconv").chain(args.iter().copied()))
            .expect("arguments should parse");
        run(&args)
    }

    fn failure_code(args: &[&str]) -> &'static str {
        let err = run_with(args).unwrap_err();
        err.downcast_ref::<ConversionError>()
            .expect("failure should be a conversion error")
            .code()
    }

    #[test]
    fn test_successful_runs() {
        assert!(run_with(&["1", "km", "m"]).is_ok());
        assert!(run_with(&["-40", "F", "C"]).is_ok());
        assert!(run_with(&["--json", "0", "C", "F"]).is_ok());
        assert!(run_with(&["--list"]).is_ok());
    }

    #[test]
    fn test_failure_codes() {
        assert_eq!(failure_code(&["abc", "km", "m"]), codes::INVALID_VALUE);
        assert_eq!(failure_code(&["nan", "km", "m"]), codes::INVALID_VALUE);
        assert_eq!(failure_code(&["5", "furlong", "m"]), codes::UNKNOWN_UNIT);
        assert_eq!(failure_code(&["5", "kg", "C"]), codes::CATEGORY_MISMATCH);
        assert_eq!(failure_code(&["-500", "F", "C"]), codes::BELOW_ABSOLUTE_ZERO);
        assert_eq!(failure_code(&["-1", "K", "C"]), codes::BELOW_ABSOLUTE_ZERO);
        assert_eq!(failure_code(&["1e308", "km", "mm"]), codes::OUT_OF_RANGE);
    }

    #[test]
    fn test_failure_precedence() {
        // Invalid value before unknown units
        assert_eq!(failure_code(&["abc", "furlong", "parsec"]), codes::INVALID_VALUE);
        // Unknown source before unknown target
        let err = run_with(&["5", "furlong", "parsec"]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConversionError>(),
            Some(&ConversionError::UnknownUnit("furlong".to_string()))
        );
        // Unknown target before category mismatch
        let err = run_with(&["5", "kg", "parsec"]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConversionError>(),
            Some(&ConversionError::UnknownUnit("parsec".to_string()))
        );
        // Category mismatch before absolute zero
        assert_eq!(failure_code(&["-500", "F", "kg"]), codes::CATEGORY_MISMATCH);
    }

    #[test]
    fn test_error_report_unknown_unit_has_hint() {
        let err = run_with(&["5", "furlong", "m"]).unwrap_err();
        assert_eq!(
            error_report(&err),
            "error[UNKNOWN_UNIT]: unknown unit 'furlong'\nTry 'unitconv --list' to see supported units\n"
        );
    }

    #[test]
    fn test_error_report_lines() {
        let err = run_with(&["5", "kg", "C"]).unwrap_err();
        assert_eq!(
            error_report(&err),
            "error[CATEGORY_MISMATCH]: cannot convert kg (Mass) to C (Temperature): different categories\n"
        );

        let err = run_with(&["abc", "km", "m"]).unwrap_err();
        assert_eq!(error_report(&err), "error[INVALID_VALUE]: 'abc' is not a valid number\n");

        let err = run_with(&["-500", "F", "C"]).unwrap_err();
        assert_eq!(
            error_report(&err),
            "error[BELOW_ABSOLUTE_ZERO]: -500 F is below absolute zero (-459.67 F)\n"
        );
    }

    #[test]
    fn test_error_report_without_code() {
        let err = anyhow::anyhow!("broken pipe");
        assert_eq!(error_report(&err), "error: broken pipe\n");
    }
}
