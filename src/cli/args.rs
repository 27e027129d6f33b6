//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Directory or glob expression selecting the source files to process
    pub target: String,

    /// Locale files that receive the extracted entries (comma-separated)
    #[arg(
        long,
        value_delimiter = ',',
        required = true,
        value_name = "FILE",
        value_parser = parse_sink_path
    )]
    pub write: Vec<PathBuf>,

    /// Glob patterns to exclude (comma-separated)
    #[arg(long, value_delimiter = ',', value_name = "PATTERN")]
    pub ignore: Vec<String>,

    /// Report locale blocks without mutating sources or sink files
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Identity parser for `--write` values that, unlike clap's default,
/// accepts empty strings so they reach the runtime's empty-sink check.
fn parse_sink_path(value: &str) -> Result<PathBuf, std::convert::Infallible> {
    Ok(PathBuf::from(value))
}
