//! Command-line argument definitions for the herd analyzer
//!
//! This module defines the complete CLI interface using the clap derive
//! API: the `analyze` command for on-screen reports and the `export`
//! command for flat per-animal CSV output.

use crate::app::models::Sex;
use crate::app::services::analytics::FilterCriteria;
use crate::constants::{AGE_BRACKETS, find_bracket, month_selector};
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the herd weighing analyzer
///
/// Turns irregular livestock weighing sheets into per-animal growth
/// metrics, cohort statistics and chart-ready geometry.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "herd-analyzer",
    version,
    about = "Analyze livestock weighing sheets: growth metrics, cohort statistics and chart geometry",
    long_about = "Processes irregular, multi-format livestock weighing records into per-animal \
                  daily-gain summaries, filterable cohort statistics (quartiles, outliers, \
                  performance tiers) and chart-ready box-plot and heat-map geometry. Rows with \
                  unparseable dates or non-numeric weights are dropped silently; only an \
                  unreadable input file aborts the run."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the herd analyzer
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Analyze a weighing sheet and print the cohort report
    Analyze(AnalyzeArgs),
    /// Export per-animal growth records as CSV
    Export(ExportArgs),
}

/// Arguments for the analyze command
#[derive(Debug, Clone, Parser)]
pub struct AnalyzeArgs {
    /// Input weighing sheet (CSV)
    ///
    /// Expected logical columns (case/spelling-insensitive): animal
    /// identifier, date, weight, location, sex, age in months. Missing
    /// optional columns degrade to defaults.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input weighing sheet (CSV)"
    )]
    pub input: PathBuf,

    /// Filter by exact location/pasture name
    #[arg(long = "location", value_name = "NAME", help = "Filter by location")]
    pub location: Option<String>,

    /// Filter by age bracket
    ///
    /// Brackets use inclusive lower and exclusive upper bounds.
    /// Available: 0-8, 9-12, 13-17, 18-21, 22-24, 24+
    #[arg(
        long = "age-bracket",
        value_name = "RANGE",
        help = "Filter by age bracket (e.g. 9-12, 24+)"
    )]
    pub age_bracket: Option<String>,

    /// Filter by sex (M or F)
    #[arg(long = "sex", value_name = "M|F", help = "Filter by sex")]
    pub sex: Option<String>,

    /// Filter by exact age in months (1-24, or 24+)
    ///
    /// Unlike the bracket filter, both bounds are inclusive: --age-month 12
    /// matches an animal aged exactly 12 months.
    #[arg(
        long = "age-month",
        value_name = "MONTH",
        help = "Filter by exact age month (1-24, or 24+)"
    )]
    pub age_month: Option<String>,

    /// Show the weighing history of one animal
    #[arg(
        long = "animal",
        value_name = "ID",
        help = "Include the weighing history of one animal"
    )]
    pub animal: Option<String>,

    /// Output format for the report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the report"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the export command
#[derive(Debug, Clone, Parser)]
pub struct ExportArgs {
    /// Input weighing sheet (CSV)
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input weighing sheet (CSV)"
    )]
    pub input: PathBuf,

    /// Output file for the per-animal CSV
    ///
    /// Defaults to a name derived from the active filters
    /// (weight_analysis[_location][_bracket][_sex].csv) in the current
    /// directory. Use `-` to write to stdout.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output file (default: derived from filters; '-' for stdout)"
    )]
    pub output: Option<PathBuf>,

    /// Filter by exact location/pasture name
    #[arg(long = "location", value_name = "NAME", help = "Filter by location")]
    pub location: Option<String>,

    /// Filter by age bracket
    #[arg(
        long = "age-bracket",
        value_name = "RANGE",
        help = "Filter by age bracket (e.g. 9-12, 24+)"
    )]
    pub age_bracket: Option<String>,

    /// Filter by sex (M or F)
    #[arg(long = "sex", value_name = "M|F", help = "Filter by sex")]
    pub sex: Option<String>,

    /// Filter by exact age in months (1-24, or 24+)
    #[arg(
        long = "age-month",
        value_name = "MONTH",
        help = "Filter by exact age month (1-24, or 24+)"
    )]
    pub age_month: Option<String>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options for the analyze report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal report
    Human,
    /// JSON for scripting and rendering layers
    Json,
}

/// Build filter criteria from the raw CLI filter values
pub fn build_criteria(
    location: Option<&str>,
    age_bracket: Option<&str>,
    sex: Option<&str>,
    age_month: Option<&str>,
) -> Result<FilterCriteria> {
    let age_bracket = match age_bracket {
        Some(value) => Some(*find_bracket(value).ok_or_else(|| {
            let known: Vec<&str> = AGE_BRACKETS.iter().map(|b| b.value).collect();
            Error::configuration(format!(
                "Unknown age bracket '{}'. Available brackets: {}",
                value,
                known.join(", ")
            ))
        })?),
        None => None,
    };

    let sex = match sex {
        Some(code) => match Sex::parse(code) {
            Sex::Unknown => {
                return Err(Error::configuration(format!(
                    "Invalid sex '{}': expected M or F",
                    code
                )));
            }
            parsed => Some(parsed),
        },
        None => None,
    };

    let exact_age_month = match age_month {
        Some(value) => Some(month_selector(value).ok_or_else(|| {
            Error::configuration(format!(
                "Invalid age month '{}': expected 1-24 or 24+",
                value
            ))
        })?),
        None => None,
    };

    Ok(FilterCriteria {
        location: location.map(str::to_string),
        age_bracket,
        sex,
        exact_age_month,
    })
}

impl AnalyzeArgs {
    /// Validate the analyze command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input_path(&self.input)?;
        self.criteria().map(|_| ())
    }

    /// Build the filter criteria from these arguments
    pub fn criteria(&self) -> Result<FilterCriteria> {
        build_criteria(
            self.location.as_deref(),
            self.age_bracket.as_deref(),
            self.sex.as_deref(),
            self.age_month.as_deref(),
        )
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl ExportArgs {
    /// Validate the export command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input_path(&self.input)?;

        if let Some(output) = &self.output {
            if output.as_os_str() != "-" {
                if let Some(parent) = output.parent() {
                    if !parent.as_os_str().is_empty() && !parent.exists() {
                        return Err(Error::configuration(format!(
                            "Output directory does not exist: {}",
                            parent.display()
                        )));
                    }
                }
            }
        }

        self.criteria().map(|_| ())
    }

    /// Build the filter criteria from these arguments
    pub fn criteria(&self) -> Result<FilterCriteria> {
        build_criteria(
            self.location.as_deref(),
            self.age_bracket.as_deref(),
            self.sex.as_deref(),
            self.age_month.as_deref(),
        )
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

/// Shared input-path validation
fn validate_input_path(input: &PathBuf) -> Result<()> {
    if !input.exists() {
        return Err(Error::configuration(format!(
            "Input file does not exist: {}",
            input.display()
        )));
    }
    if !input.is_file() {
        return Err(Error::configuration(format!(
            "Input path is not a file: {}",
            input.display()
        )));
    }
    Ok(())
}

/// Map verbosity flags onto a tracing level name
fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_build_criteria_accepts_known_values() {
        let criteria =
            build_criteria(Some("North"), Some("9-12"), Some("F"), Some("12")).unwrap();
        assert_eq!(criteria.location.as_deref(), Some("North"));
        assert_eq!(criteria.age_bracket.unwrap().value, "9-12");
        assert_eq!(criteria.sex, Some(Sex::Female));
        assert_eq!(criteria.exact_age_month.unwrap().min, 12);
    }

    #[test]
    fn test_build_criteria_rejects_unknown_bracket() {
        assert!(build_criteria(None, Some("5-7"), None, None).is_err());
    }

    #[test]
    fn test_build_criteria_rejects_bad_sex() {
        assert!(build_criteria(None, None, Some("X"), None).is_err());
        assert!(build_criteria(None, None, Some("N/A"), None).is_err());
    }

    #[test]
    fn test_build_criteria_rejects_bad_month() {
        assert!(build_criteria(None, None, None, Some("25")).is_err());
        assert!(build_criteria(None, None, None, Some("soon")).is_err());
    }

    #[test]
    fn test_sex_filter_is_case_insensitive() {
        let criteria = build_criteria(None, None, Some("m"), None).unwrap();
        assert_eq!(criteria.sex, Some(Sex::Male));
    }

    #[test]
    fn test_analyze_args_validation() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "ANIMAL,DATA,PESO").unwrap();

        let args = AnalyzeArgs {
            input: file.path().to_path_buf(),
            location: None,
            age_bracket: None,
            sex: None,
            age_month: None,
            animal: None,
            output_format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
        };
        assert!(args.validate().is_ok());

        let mut missing = args.clone();
        missing.input = PathBuf::from("/nonexistent/sheet.csv");
        assert!(missing.validate().is_err());

        let mut bad_bracket = args.clone();
        bad_bracket.age_bracket = Some("8-9".to_string());
        assert!(bad_bracket.validate().is_err());
    }

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(log_level(0, false), "warn");
        assert_eq!(log_level(1, false), "info");
        assert_eq!(log_level(2, false), "debug");
        assert_eq!(log_level(5, false), "trace");
        assert_eq!(log_level(2, true), "error");
    }
}
