//! Core processing pipeline
//!
//! Reads the input file, runs the dedup transform and writes the result.
//! The input is fully read and transformed before the output file is touched,
//! so a failed read never leaves an output behind.

use crate::cli::Args;
use crate::dedup::{dedup_lines, DedupStats};
use crate::encoding::{decode, Decoded, EncodingPolicy};
use crate::error::{Result, SubuniqError};
use crate::filter::EntryFilter;
use crate::output::{resolve_path, OutputFormat, OutputWriter, DEFAULT_BUFFER_SIZE};
use crate::progress::create_spinner;

use indicatif::ProgressBar;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Processor configuration
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub encoding: EncodingPolicy,
    pub filter: EntryFilter,
    pub quiet: bool,
}

impl ProcessorConfig {
    pub fn from_args(args: &Args) -> Self {
        Self {
            input: args.input_path.clone(),
            output: args.output_path.clone(),
            format: args.format,
            encoding: args.encoding,
            filter: EntryFilter::from_cli(args.ignore.as_deref(), args.filter.as_deref()),
            quiet: args.quiet,
        }
    }

    /// Plain output, strict decoding, no entry filter
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            format: OutputFormat::default(),
            encoding: EncodingPolicy::default(),
            filter: EntryFilter::default(),
            quiet: true,
        }
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct Summary {
    pub input_path: PathBuf,
    /// Resolved output path
    pub output_path: PathBuf,
    pub format: OutputFormat,
    /// Encoding the input was decoded as
    pub encoding: &'static str,
    pub input_bytes: u64,
    pub bytes_written: u64,
    pub stats: DedupStats,
    pub elapsed: Duration,
}

/// Main processor
pub struct Processor {
    config: ProcessorConfig,
}

impl Processor {
    pub fn new(config: ProcessorConfig) -> Self {
        Self { config }
    }

    /// Run read -> dedup -> write once
    ///
    /// Paths are opened exactly as given; their canonical forms are only used
    /// for reporting.
    pub fn process(&self) -> Result<Summary> {
        let start = Instant::now();
        let input = self.config.input.as_path();
        let output = self.config.output.as_path();

        log::debug!("Input:  {}", input.display());
        log::debug!("Output: {}", output.display());

        let pb = if self.config.quiet {
            ProgressBar::hidden()
        } else {
            create_spinner("Reading subdomains...")
        };

        let (decoded, input_bytes) = read_with_progress(&pb, input, self.config.encoding)?;
        let input_path = resolve_path(input);
        log::info!("Read {} bytes from {} as {}", input_bytes, input_path.display(), decoded.encoding);

        pb.set_message("Deduplicating...");
        let outcome = dedup_lines(decoded.lines(), &self.config.filter);
        pb.finish_and_clear();

        let mut writer = OutputWriter::create(output.to_path_buf(), DEFAULT_BUFFER_SIZE)?;
        let output_path = resolve_path(writer.path());
        writer.write_entries(&outcome.entries, self.config.format)?;
        let bytes_written = writer.bytes_written();
        writer.finish()?;
        log::info!(
            "Wrote {} entries ({} bytes) to {}",
            outcome.entries.len(),
            bytes_written,
            output_path.display()
        );

        Ok(Summary {
            input_path,
            output_path,
            format: self.config.format,
            encoding: decoded.encoding,
            input_bytes,
            bytes_written,
            stats: outcome.stats,
            elapsed: start.elapsed(),
        })
    }
}

/// Read and decode, clearing the spinner if that fails
fn read_with_progress(pb: &ProgressBar, path: &Path, policy: EncodingPolicy) -> Result<(Decoded, u64)> {
    read_decoded(path, policy).inspect_err(|_| pb.finish_and_clear())
}

/// Read the whole input file into memory and decode it
fn read_decoded(path: &Path, policy: EncodingPolicy) -> Result<(Decoded, u64)> {
    if path.is_dir() {
        return Err(SubuniqError::Other(format!(
            "Input '{}' is a directory, expected a file",
            path.display()
        )));
    }

    let bytes = fs::read(path).map_err(|e| SubuniqError::input(path, e))?;
    let decoded = decode(&bytes, policy)
        .map_err(|e| SubuniqError::Other(format!("Cannot decode '{}': {}", path.display(), e)))?;
    Ok((decoded, bytes.len() as u64))
}
