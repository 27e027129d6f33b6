//! Source file discovery.
//!
//! Resolves the target argument (a directory or a glob expression) into the
//! ordered file list the pipeline consumes. Ordering is deterministic: the
//! shared namespace-header state and the in-place rewrites both depend on a
//! stable total order across runs.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::config::TEST_FILE_PATTERNS;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning files.
pub struct ScanResult {
    /// Matched source files, sorted.
    pub files: Vec<String>,
    pub skipped_count: usize,
}

pub fn scan_target(
    target: &str,
    ignore_patterns: &[String],
    ignore_test_files: bool,
    verbose: bool,
) -> ScanResult {
    let mut files: BTreeSet<String> = BTreeSet::new();
    let mut skipped_count = 0;

    let mut glob_patterns: Vec<Pattern> = Vec::new();
    for p in ignore_patterns {
        match Pattern::new(p) {
            Ok(pattern) => glob_patterns.push(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
            }
        }
    }
    if ignore_test_files {
        for p in TEST_FILE_PATTERNS {
            if let Ok(pattern) = Pattern::new(p) {
                glob_patterns.push(pattern);
            }
        }
    }

    let roots: Vec<PathBuf> = if is_glob_pattern(target) {
        match glob(target) {
            Ok(entries) => entries.flatten().collect(),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid target pattern '{}': {}",
                        "warning:".bold().yellow(),
                        target,
                        e
                    );
                }
                Vec::new()
            }
        }
    } else {
        vec![PathBuf::from(target)]
    };

    for root in roots {
        if root.is_file() {
            consider(&root, &glob_patterns, &mut files);
            continue;
        }
        for entry in WalkDir::new(&root) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            if entry.path().is_file() {
                consider(entry.path(), &glob_patterns, &mut files);
            }
        }
    }

    ScanResult {
        files: files.into_iter().collect(),
        skipped_count,
    }
}

fn consider(path: &Path, ignore_patterns: &[Pattern], files: &mut BTreeSet<String>) {
    if !is_scannable_file(path) {
        return;
    }
    let path_str = path.to_string_lossy();
    if ignore_patterns.iter().any(|p| p.matches(&path_str)) {
        return;
    }
    files.insert(path_str.into_owned());
}

fn is_scannable_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("tsx" | "ts" | "jsx" | "js")
    )
}
