use std::{env, path::PathBuf};

use anyhow::{Result, bail};
use colored::Colorize;

use super::args::Arguments;
use super::exit_status::ExitStatus;
use crate::{
    config::load_config,
    pipeline::{self, PipelineOptions, RunContext},
    scanner,
};

/// Run the extraction pipeline for the parsed arguments.
///
/// Fail-fast contract: an empty output-sink list aborts before any file is
/// touched (a missing target or `--write` flag is already rejected by clap).
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let sinks: Vec<PathBuf> = args
        .write
        .into_iter()
        .filter(|p| !p.as_os_str().is_empty())
        .collect();
    if sinks.is_empty() {
        bail!(
            "Output file list is empty. ex: hanlift app/javascript \
             --write config/locales/javascript.zh-CN.yml,config/locales/javascript.en.yml"
        );
    }

    let loaded = load_config(&env::current_dir()?)?;
    let config = loaded.config;
    if args.verbose && loaded.from_file {
        println!("{}", "Loaded .hanliftrc.json".dimmed());
    }

    let mut ignores = config.ignores.clone();
    ignores.extend(args.ignore);

    let scan = scanner::scan_target(&args.target, &ignores, config.ignore_test_files, args.verbose);
    if scan.files.is_empty() {
        println!(
            "{} No source files matched '{}'.",
            "warning:".bold().yellow(),
            args.target
        );
        return Ok(ExitStatus::Success);
    }

    let options = PipelineOptions {
        config: &config,
        sinks: &sinks,
        dry_run: args.dry_run,
        verbose: args.verbose,
    };
    let mut ctx = RunContext::default();
    pipeline::process_files(&scan.files, &options, &mut ctx)?;

    let mode = if args.dry_run { " (dry run)" } else { "" };
    println!(
        "{}{} {} file(s) processed, {} entries extracted, {} rewrites applied",
        "Done".bold().green(),
        mode,
        ctx.files_processed,
        ctx.entries_emitted,
        ctx.rewrites_applied
    );
    if ctx.rewrites_missed > 0 {
        eprintln!(
            "{} {} planned substitution(s) did not match and were skipped",
            "warning:".bold().yellow(),
            ctx.rewrites_missed
        );
    }
    Ok(ExitStatus::Success)
}
