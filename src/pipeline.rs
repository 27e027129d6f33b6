//! Per-run processing driver.
//!
//! Files are processed strictly sequentially: the namespace-header state is
//! shared across the whole run and the rewriter mutates sources in place, so
//! operations are not reorderable. Within a file, occurrences are handled in
//! document order because later dedup decisions depend on earlier ones.

use std::{
    collections::HashSet,
    fs::{self, OpenOptions},
    io::Write,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::{
    config::Config,
    extract,
    keygen::generate_key,
    locale::{self, LocaleEntry},
    parsers::jsx::parse_source,
    rewrite,
};

/// Mutable state threaded through a single run.
///
/// `namespace_prefixes` spans all files: an ancestor header is written at
/// most once per run even though files flush independently.
#[derive(Debug, Default)]
pub struct RunContext {
    pub namespace_prefixes: HashSet<String>,
    pub files_processed: usize,
    pub entries_emitted: usize,
    pub rewrites_applied: usize,
    pub rewrites_missed: usize,
}

pub struct PipelineOptions<'a> {
    pub config: &'a Config,
    pub sinks: &'a [PathBuf],
    pub dry_run: bool,
    pub verbose: bool,
}

/// Process every file in order, flushing one locale block per file.
pub fn process_files(
    files: &[String],
    options: &PipelineOptions,
    ctx: &mut RunContext,
) -> Result<()> {
    let total = files.len();
    for (index, file) in files.iter().enumerate() {
        let pct = (index + 1) as f64 / total as f64 * 100.0;
        println!(
            "{} ({}/{}, {:.2}%): {}",
            "Processing".bold().cyan(),
            index + 1,
            total,
            pct,
            file
        );
        process_file(file, options, ctx)?;
    }
    Ok(())
}

fn process_file(file: &str, options: &PipelineOptions, ctx: &mut RunContext) -> Result<()> {
    let namespace = namespace_for(Path::new(file), options.config.path_prefix_depth);

    let content =
        fs::read_to_string(file).with_context(|| format!("Failed to read file: {}", file))?;
    // A parse failure is fatal for the whole run: a half-processed batch
    // with a silently dropped file would leave sinks and sources out of
    // sync.
    let parsed = parse_source(&content, file)?;
    let extraction = extract::collect_occurrences(&parsed.module, &parsed.source_map);

    if options.verbose {
        for line in &extraction.skipped_templates {
            eprintln!(
                "{} {}:{}: template literal left untranslated (multi-line or unsupported interpolation)",
                "note:".bold().cyan(),
                file,
                line
            );
        }
    }

    let mut seen_keys: HashSet<String> = HashSet::new();
    let mut entries: Vec<LocaleEntry> = Vec::new();
    let mut instructions = Vec::new();
    for occurrence in &extraction.occurrences {
        let key = generate_key(&occurrence.raw_value);
        let call_path = call_path(&options.config.key_prefix, &namespace, &key);
        if options.verbose {
            println!("  {} {:?} -> {}", "extract".dimmed(), occurrence.raw_value, call_path);
        }
        // First occurrence wins and defines the locale value; duplicates are
        // suppressed from the block but still rewritten.
        if seen_keys.insert(key.clone()) {
            entries.push(LocaleEntry {
                key,
                value: occurrence.locale_value().to_string(),
            });
        }
        instructions.push(rewrite::plan_rewrite(occurrence, &call_path));
    }

    let block = locale::render_block(&namespace, &entries, &mut ctx.namespace_prefixes);

    if !options.dry_run && !instructions.is_empty() {
        let outcome = rewrite::apply_instructions(&content, &instructions);
        fs::write(file, &outcome.content)
            .with_context(|| format!("Failed to write file: {}", file))?;
        ctx.rewrites_applied += outcome.applied;
        ctx.rewrites_missed += outcome.missed;
        if outcome.missed > 0 {
            eprintln!(
                "{} {} substitution(s) in {} no longer matched and were skipped",
                "warning:".bold().yellow(),
                outcome.missed,
                file
            );
        }
    }

    println!("{}\n{}", "Locale block:".bold(), block);
    if !options.dry_run {
        for sink in options.sinks {
            append_block(sink, &block)?;
        }
    }

    ctx.files_processed += 1;
    ctx.entries_emitted += entries.len();
    Ok(())
}

/// Decompose a source path into its locale namespace: the lower-cased path
/// segments after the project-root prefix, extension stripped.
pub fn namespace_for(path: &Path, prefix_depth: usize) -> Vec<String> {
    path.with_extension("")
        .components()
        .filter_map(|c| match c {
            Component::Normal(segment) => Some(segment.to_string_lossy().to_lowercase()),
            _ => None,
        })
        .skip(prefix_depth)
        .collect()
}

fn call_path(prefix: &str, namespace: &[String], key: &str) -> String {
    if namespace.is_empty() {
        format!("{}.{}", prefix, key)
    } else {
        format!("{}.{}.{}", prefix, namespace.join("."), key)
    }
}

fn append_block(sink: &Path, block: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(sink)
        .with_context(|| format!("Failed to open output file: {}", sink.display()))?;
    file.write_all(block.as_bytes())
        .with_context(|| format!("Failed to append to output file: {}", sink.display()))?;
    Ok(())
}
