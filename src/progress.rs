//! Terminal presentation module
//!
//! Banner, styled status lines, a spinner for long reads and the final run
//! summary.

use bytesize::ByteSize;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::processor::Summary;

/// Print the application banner
pub fn print_banner() {
    let banner = format!(
        r#"
   _____       _     _    _       _
  / ____|     | |   | |  | |     (_)
 | (___  _   _| |__ | |  | |_ __  _  __ _
  \___ \| | | | '_ \| |  | | '_ \| |/ _` |
  ____) | |_| | |_) | |__| | | | | | (_| |
 |_____/ \__,_|_.__/ \____/|_| |_|_|\__, |
                                       | |
                                       |_|
  Subdomain Deduplication Tool       v{}
"#,
        env!("CARGO_PKG_VERSION")
    );

    println!("{}", banner.green());
}

/// Print a section header
pub fn print_header(text: &str) {
    println!("\n{} {}", "▶".green(), text.green().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    println!("  {} {}", "ℹ".cyan(), text);
}

/// Print a success message
pub fn print_success(text: &str) {
    println!("  {} {}", "✔".green(), text.green());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Create a styled spinner for indeterminate progress
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();

    let style = ProgressStyle::default_spinner()
        .template("{spinner:.green} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ");
    pb.set_style(style);

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// The one-line result message
pub fn summary_line(summary: &Summary) -> String {
    format!(
        "SubUniq: {} unique subdomains saved to '{}'.",
        summary.stats.unique_count,
        summary.output_path.display()
    )
}

/// Print run statistics
pub fn print_summary(summary: &Summary) {
    let stats = &summary.stats;

    println!();
    println!("{}", "═".repeat(60).green());
    println!("{}", "                    DEDUPLICATION COMPLETE".green().bold());
    println!("{}", "═".repeat(60).green());
    println!();

    println!("  {} {}", "Input:          ".green(), summary.input_path.display());
    println!(
        "  {} {} ({})",
        "Read:           ".green(),
        ByteSize(summary.input_bytes),
        summary.encoding
    );
    println!("  {} {}", "Format:         ".green(), summary.format.name());
    println!();

    println!("  {} {}", "Total lines:    ".green(), format_number(stats.total_lines));
    println!("  {} {}", "Blank lines:    ".green(), format_number(stats.blank_lines));
    if stats.filtered_lines > 0 {
        println!("  {} {}", "Filtered out:   ".yellow(), format_number(stats.filtered_lines));
    }
    println!("  {} {}", "Duplicates:     ".yellow(), format_number(stats.duplicate_lines));
    println!(
        "  {} {}",
        "Unique output:  ".green().bold(),
        format_number(stats.unique_count).green().bold()
    );
    println!("  {} {}", "Written:        ".green(), ByteSize(summary.bytes_written));

    println!();
    println!("  {} {:?}", "Duration:       ".green(), summary.elapsed);
    println!();
    println!("{}", "═".repeat(60).green());
}

/// Format a number with thousand separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dedup::DedupStats;
    use crate::output::OutputFormat;
    use std::path::PathBuf;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(123), "123");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_summary_line() {
        let summary = Summary {
            input_path: PathBuf::from("/tmp/in.txt"),
            output_path: PathBuf::from("/tmp/out.txt"),
            format: OutputFormat::Plain,
            encoding: "UTF-8",
            input_bytes: 10,
            bytes_written: 6,
            stats: DedupStats {
                unique_count: 1,
                total_lines: 2,
                ..DedupStats::default()
            },
            elapsed: Duration::from_millis(3),
        };

        assert_eq!(
            summary_line(&summary),
            "SubUniq: 1 unique subdomains saved to '/tmp/out.txt'."
        );
    }
}
