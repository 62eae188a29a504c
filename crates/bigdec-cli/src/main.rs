use std::{env, process::ExitCode, str::FromStr};

use bigdec::{Config, Precision, RoundingMode, create};
use tracing::Level;

const USAGE: &str = "usage: bigdec [--strict] [--digits N] [--rounding MODE] [--raise-infinity] [--raise-nan] [--float] [-v|-vv] VALUE...";

/// Parsed command line.
#[derive(Debug, Default)]
struct Options {
    strict: bool,
    float: bool,
    precision: Precision,
    config: Config,
    verbosity: u8,
    values: Vec<String>,
}

fn main() -> ExitCode {
    let options = match parse_args(env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let level = match options.verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut status = ExitCode::SUCCESS;
    for value in &options.values {
        let result = if options.float {
            match value.parse::<f64>() {
                Ok(float) => create(float, options.precision, options.strict, &options.config),
                Err(err) => {
                    eprintln!("error: {value:?} is not a float: {err}");
                    status = ExitCode::FAILURE;
                    continue;
                }
            }
        } else {
            create(value, options.precision, options.strict, &options.config)
        };

        match result {
            Ok(decimal) => println!("{decimal}"),
            Err(err) => {
                eprintln!("error: {err}");
                status = ExitCode::FAILURE;
            }
        }
    }
    status
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut options = Options::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--strict" => options.strict = true,
            "--float" => options.float = true,
            "--raise-infinity" => options.config.raise_on_infinity = true,
            "--raise-nan" => options.config.raise_on_nan = true,
            "-v" => options.verbosity = options.verbosity.saturating_add(1),
            "-vv" => options.verbosity = options.verbosity.saturating_add(2),
            "--digits" => {
                let digits = args.next().ok_or("--digits needs a value")?;
                let digits = digits.parse::<u32>().map_err(|err| format!("invalid --digits {digits:?}: {err}"))?;
                options.precision = Precision::Digits(digits);
            }
            "--rounding" => {
                let mode = args.next().ok_or("--rounding needs a value")?;
                options.config.rounding =
                    RoundingMode::from_str(&mode).map_err(|_| format!("unknown rounding mode {mode:?}"))?;
            }
            "--" => {
                options.values.extend(args.by_ref());
            }
            flag if flag.starts_with("--") => return Err(format!("unknown option {flag}")),
            _ => options.values.push(arg),
        }
    }

    if options.values.is_empty() {
        return Err("no values given".to_owned());
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Options, String> {
        parse_args(args.iter().map(|arg| (*arg).to_owned()))
    }

    #[test]
    fn test_parse_flags_and_values() {
        let options = parse(&["--strict", "--digits", "3", "--rounding", "banker", "-vv", "1.5", "2"]).unwrap();
        assert!(options.strict);
        assert_eq!(options.precision, Precision::Digits(3));
        assert_eq!(options.config.rounding, RoundingMode::HalfEven);
        assert_eq!(options.verbosity, 2);
        assert_eq!(options.values, ["1.5", "2"]);
    }

    #[test]
    fn test_parse_negative_values_after_separator() {
        let options = parse(&["--", "--5", "-1e3"]).unwrap();
        assert_eq!(options.values, ["--5", "-1e3"]);
        // a single leading dash is a value, not an option
        assert_eq!(parse(&["-Infinity"]).unwrap().values, ["-Infinity"]);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["--digits"]).is_err());
        assert!(parse(&["--digits", "-1", "5"]).is_err());
        assert!(parse(&["--rounding", "sideways", "5"]).is_err());
        assert!(parse(&["--bogus", "5"]).is_err());
    }
}
