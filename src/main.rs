//! SubUniq - subdomain deduplication tool
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::process;

use subuniq::cli::Args;
use subuniq::processor::{Processor, ProcessorConfig};
use subuniq::progress::{print_banner, print_error, print_header, print_info, print_success, print_summary, summary_line};

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    if !args.quiet {
        print_banner();
    }

    let config = ProcessorConfig::from_args(&args);
    if args.verbose {
        print_config(&config);
    }

    match Processor::new(config).process() {
        Ok(summary) => {
            if args.quiet {
                println!("{}", summary_line(&summary));
            } else {
                print_summary(&summary);
                print_success(&summary_line(&summary));
            }
        }
        Err(e) => {
            print_error(&format!("SubUniq: {}", e));
            process::exit(1);
        }
    }
}

/// Print configuration summary
fn print_config(config: &ProcessorConfig) {
    print_header("Configuration");

    print_info(&format!("Input:        {}", config.input.display()));
    print_info(&format!("Output:       {}", config.output.display()));
    print_info(&format!("Format:       {}", config.format.name()));
    print_info(&format!("Encoding:     {:?}", config.encoding));

    if !config.filter.is_active() {
        print_info("Selection:    all entries");
        return;
    }
    if !config.filter.ignored().is_empty() {
        print_info(&format!("Ignoring:     {:?}", config.filter.ignored()));
    }
    if let Some(keep) = config.filter.keep() {
        print_info(&format!("Filtered by:  {}", keep));
    }
}
