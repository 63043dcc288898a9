//! SafeBAC command-line estimator
//!
//! Usage:
//!   safebac estimate [FILE]              read EstimationInput JSON (stdin if no FILE)
//!   safebac sober VALUE [UNIT] [COUNTRY] time to zero for a measured reading
//!   safebac convert VALUE UNIT           a reading in every unit
//!   safebac version                      build information

use std::io::Read;

use safebac::bac::{parse_bac_value, validate_input, BacReading, BacReport, BacUnit};
use safebac::build_info::{self, BuildInfo};
use safebac::config::{self, CliConfig};
use safebac::models::{CountryCode, EstimationInput};
use safebac::{BacError, BacResult};

const USAGE: &str = "safebac <estimate [FILE] | sober VALUE [UNIT] [COUNTRY] | convert VALUE UNIT | version>";

fn read_input(path: Option<&str>) -> BacResult<EstimationInput> {
    let raw = match path {
        Some(p) if p != "-" => std::fs::read_to_string(p)?,
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(serde_json::from_str(&raw)?)
}

fn parse_unit(raw: Option<&String>, default: BacUnit) -> BacResult<BacUnit> {
    match raw {
        Some(s) => BacUnit::from_str(s).ok_or_else(|| BacError::UnknownUnit(s.clone())),
        None => Ok(default),
    }
}

fn parse_country(raw: Option<&String>, default: CountryCode) -> BacResult<CountryCode> {
    match raw {
        Some(s) => CountryCode::from_str(s).ok_or_else(|| BacError::UnknownCountry(s.clone())),
        None => Ok(default),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> BacResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(args: &[String], config: CliConfig) -> BacResult<()> {
    let command = args.first().map(String::as_str);

    match command {
        Some("estimate") => {
            build_info::print_startup_banner();
            let input = read_input(args.get(1).map(String::as_str))?;
            validate_input(&input)?;
            let report = BacReport::build(&input, config.display_unit);
            tracing::info!("{}", report.summary());
            print_json(&report)
        }
        Some("sober") => {
            let raw = args
                .get(1)
                .ok_or_else(|| BacError::Usage("sober VALUE [UNIT] [COUNTRY]".to_string()))?;
            let value = parse_bac_value(raw)?;
            let unit = parse_unit(args.get(2), BacUnit::Percent)?;
            let country = parse_country(args.get(3), config.country)?;
            let report = BacReport::for_reading(value, unit, country);
            tracing::info!("{}", report.summary());
            print_json(&report)
        }
        Some("convert") => {
            let (raw, unit) = match (args.get(1), args.get(2)) {
                (Some(raw), Some(unit)) => (raw, unit),
                _ => return Err(BacError::Usage("convert VALUE UNIT".to_string())),
            };
            let value = parse_bac_value(raw)?;
            let unit = parse_unit(Some(unit), BacUnit::Percent)?;
            let percent = safebac::bac::convert_bac(value, unit, BacUnit::Percent);
            print_json(&BacReading::all_units(percent))
        }
        Some("version") => print_json(&BuildInfo::current()),
        _ => Err(BacError::Usage(USAGE.to_string())),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    config::init_logging()?;

    let args: Vec<String> = std::env::args().skip(1).collect();

    // Reported once here; not returned, so main does not print it again
    if let Err(e) = run(&args, CliConfig::from_env()) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_run_rejects_missing_command() {
        let result = run(&[], CliConfig::default());
        assert!(matches!(result, Err(BacError::Usage(_))));
    }

    #[test]
    fn test_run_sober_requires_value() {
        let result = run(&args(&["sober"]), CliConfig::default());
        assert!(matches!(result, Err(BacError::Usage(_))));
    }

    #[test]
    fn test_run_rejects_bad_value() {
        let result = run(&args(&["sober", "abc"]), CliConfig::default());
        assert!(matches!(result, Err(BacError::Validation(_))));
    }

    #[test]
    fn test_run_rejects_unknown_unit_and_country() {
        let result = run(&args(&["convert", "0.08", "ppm"]), CliConfig::default());
        assert!(matches!(result, Err(BacError::UnknownUnit(u)) if u == "ppm"));

        let result = run(&args(&["sober", "0.08", "%", "FR"]), CliConfig::default());
        assert!(matches!(result, Err(BacError::UnknownCountry(c)) if c == "FR"));
    }
}
