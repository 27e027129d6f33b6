//! Line-range-scoped substitution over file content.
//!
//! Matching is literal: no regex, no shell, no escaping layer. Instructions
//! are applied in reverse line order so an applied edit can never shift the
//! line numbers an instruction still pending for an earlier line refers to.

use super::RewriteInstruction;

pub struct ApplyOutcome {
    pub content: String,
    /// Instructions whose first matching candidate was replaced.
    pub applied: usize,
    /// Instructions for which no candidate matched within the range.
    pub missed: usize,
}

/// Apply all instructions to `content` and return the rewritten text.
///
/// Each instruction replaces the first candidate found within its line
/// range, once. An instruction that matches nothing is counted in `missed`
/// rather than treated as fatal.
pub fn apply_instructions(content: &str, instructions: &[RewriteInstruction]) -> ApplyOutcome {
    let had_trailing_newline = content.ends_with('\n');
    let mut lines: Vec<String> = content.lines().map(String::from).collect();

    let mut order: Vec<&RewriteInstruction> = instructions.iter().collect();
    order.sort_by(|a, b| b.start_line.cmp(&a.start_line));

    let mut applied = 0;
    let mut missed = 0;
    for instruction in order {
        if apply_one(&mut lines, instruction) {
            applied += 1;
        } else {
            missed += 1;
        }
    }

    let mut content = lines.join("\n");
    if had_trailing_newline {
        content.push('\n');
    }
    ApplyOutcome {
        content,
        applied,
        missed,
    }
}

fn apply_one(lines: &mut [String], instruction: &RewriteInstruction) -> bool {
    let start = instruction.start_line.saturating_sub(1);
    let end = instruction.end_line.min(lines.len());
    for idx in start..end {
        for search in &instruction.searches {
            if let Some(pos) = lines[idx].find(search.as_str()) {
                lines[idx].replace_range(pos..pos + search.len(), &instruction.replacement);
                return true;
            }
        }
    }
    false
}
