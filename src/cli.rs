//! Command-line interface definition for subuniq

use clap::Parser;
use std::path::PathBuf;

use crate::encoding::EncodingPolicy;
use crate::output::OutputFormat;

/// Remove duplicate subdomains
///
/// Normalizes (trim + lowercase), deduplicates and sorts a list of subdomains.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "subuniq",
    author = "ScpM0",
    version,
    about = "SubUniq: Remove duplicate subdomains.",
    long_about = r#"
SubUniq: Remove duplicate subdomains.

Reads one subdomain per line, trims surrounding whitespace, lowercases,
drops blank lines and duplicates, and writes the sorted unique set.

EXAMPLES:
    # Merge the output of several discovery tools
    cat amass.txt subfinder.txt assetfinder.txt > all.txt
    subuniq all.txt unique.txt

    # Skip staging hosts, keep only one zone, write JSON
    subuniq all.txt unique.json --ignore staging,dev --filter .gov.eg --format json

    # Input that is not UTF-8
    subuniq legacy.txt unique.txt --encoding detect
"#
)]
pub struct Args {
    /// Input file with subdomains
    #[arg(value_name = "INPUT_PATH")]
    pub input_path: PathBuf,

    /// Output file for unique subdomains
    #[arg(value_name = "OUTPUT_PATH")]
    pub output_path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Comma-separated substrings; matching subdomains are dropped
    #[arg(long, value_name = "LIST")]
    pub ignore: Option<String>,

    /// Only keep subdomains containing this substring
    #[arg(long, value_name = "SUBSTRING")]
    pub filter: Option<String>,

    /// How to decode input that is not valid UTF-8
    #[arg(short, long, value_enum, default_value_t = EncodingPolicy::Strict)]
    pub encoding: EncodingPolicy,

    /// Quiet mode - only the result line
    #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Log level implied by --quiet / --verbose
    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else if self.quiet {
            log::LevelFilter::Warn
        } else {
            log::LevelFilter::Info
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_only() {
        let args = Args::try_parse_from(["subuniq", "in.txt", "out.txt"]).unwrap();

        assert_eq!(args.input_path, PathBuf::from("in.txt"));
        assert_eq!(args.output_path, PathBuf::from("out.txt"));
        assert_eq!(args.format, OutputFormat::Plain);
        assert_eq!(args.encoding, EncodingPolicy::Strict);
        assert!(args.ignore.is_none());
        assert!(args.filter.is_none());
        assert_eq!(args.log_level(), log::LevelFilter::Info);
    }

    #[test]
    fn test_all_options() {
        let args = Args::try_parse_from([
            "subuniq", "in.txt", "out.csv", "--format", "csv", "--ignore", "dev,test",
            "--filter", ".gov.eg", "--encoding", "detect", "-v",
        ])
        .unwrap();

        assert_eq!(args.format, OutputFormat::Csv);
        assert_eq!(args.ignore.as_deref(), Some("dev,test"));
        assert_eq!(args.filter.as_deref(), Some(".gov.eg"));
        assert_eq!(args.encoding, EncodingPolicy::Detect);
        assert_eq!(args.log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_both_paths_required() {
        assert!(Args::try_parse_from(["subuniq", "in.txt"]).is_err());
        assert!(Args::try_parse_from(["subuniq"]).is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["subuniq", "a", "b", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
