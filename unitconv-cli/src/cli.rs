//! Command-line arguments

use clap::Parser;

const EXAMPLES: &str = "\
EXAMPLES:
    unitconv 5 km mi
    unitconv 100 feet meters
    unitconv 100 C F
    unitconv -40 F C
    unitconv 150 kg lb

Unit names are case-insensitive and support common aliases.";

/// Convert values between units of length, temperature and mass
#[derive(Parser, Debug)]
#[command(name = "unitconv", version, long_about = None, after_help = EXAMPLES)]
#[command(disable_version_flag = true, allow_negative_numbers = true)]
pub struct Args {
    /// Value to convert
    #[arg(required_unless_present = "list")]
    pub value: Option<String>,

    /// Source unit (symbol or alias)
    #[arg(required_unless_present = "list")]
    pub from: Option<String>,

    /// Target unit (symbol or alias)
    #[arg(required_unless_present = "list")]
    pub to: Option<String>,

    /// List all supported units
    #[arg(short, long, conflicts_with = "value")]
    pub list: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Round the displayed result to this many decimal places
    #[arg(short, long, env = "UNITCONV_PRECISION")]
    pub precision: Option<usize>,

    /// Show version information
    #[arg(short = 'v', long, action = clap::ArgAction::Version)]
    version: (),
}

/// What the user asked for
#[derive(Debug, PartialEq)]
pub enum Request<'a> {
    List,
    Convert { value: &'a str, from: &'a str, to: &'a str },
}

impl Args {
    pub fn request(&self) -> Option<Request<'_>> {
        if self.list {
            return Some(Request::List);
        }
        match (&self.value, &self.from, &self.to) {
            (Some(value), Some(from), Some(to)) => Some(Request::Convert { value, from, to }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("unitconv").chain(args.iter().copied()))
    }

    #[test]
    fn test_conversion_args() {
        let args = parse(&["5", "km", "mi"]).unwrap();
        assert_eq!(
            args.request(),
            Some(Request::Convert { value: "5", from: "km", to: "mi" })
        );
        assert!(!args.json);
    }

    #[test]
    fn test_negative_value_is_positional() {
        let args = parse(&["-40", "F", "C"]).unwrap();
        assert_eq!(args.value.as_deref(), Some("-40"));
    }

    #[test]
    fn test_list_flag() {
        assert_eq!(parse(&["--list"]).unwrap().request(), Some(Request::List));
        assert_eq!(parse(&["-l"]).unwrap().request(), Some(Request::List));
    }

    #[test]
    fn test_list_conflicts_with_conversion() {
        let err = parse(&["--list", "5", "km", "m"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_missing_arguments() {
        let err = parse(&["5", "km"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_version_flags() {
        for flag in ["-v", "--version"] {
            let err = parse(&[flag]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayVersion);
        }
    }

    #[test]
    fn test_precision_and_json() {
        let args = parse(&["--json", "-p", "3", "1", "mi", "km"]).unwrap();
        assert!(args.json);
        assert_eq!(args.precision, Some(3));
    }

    #[test]
    fn test_debug_assertions() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
