//! Source rewriting.
//!
//! Planning is pure: each occurrence becomes one `RewriteInstruction` with an
//! ordered list of search candidates and a single replacement. Application is
//! a separate phase (see `apply`) so that classification never interleaves
//! with on-disk mutation.

mod apply;

pub use apply::{ApplyOutcome, apply_instructions};

use crate::extract::{LiteralKind, LiteralOccurrence};

/// A line-range-scoped text substitution.
///
/// `searches` is an ordered candidate list; the first candidate found within
/// the range is replaced and no further candidate is tried, so an occurrence
/// is substituted at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteInstruction {
    /// 1-based first line of the search range, inclusive.
    pub start_line: usize,
    /// 1-based last line of the search range, inclusive.
    pub end_line: usize,
    pub searches: Vec<String>,
    pub replacement: String,
}

/// Plan the substitution for one occurrence.
///
/// `call_path` is the full dotted key path, e.g. `js.components.button.ni_hao`.
pub fn plan_rewrite(occurrence: &LiteralOccurrence, call_path: &str) -> RewriteInstruction {
    let call = format!("t(\"{}\")", call_path);
    let (searches, replacement) = match &occurrence.kind {
        // Presentation text position: the call always needs interpolation
        // braces.
        LiteralKind::JsxText => (
            vec![occurrence.raw_value.clone()],
            format!("{{{}}}", call),
        ),
        // Quote style is not tracked, so both variants are candidates; the
        // apply phase stops at the first match.
        LiteralKind::Str => {
            let replacement = if occurrence.needs_brace_wrap {
                format!("{{{}}}", call)
            } else {
                call
            };
            (
                vec![
                    format!("\"{}\"", occurrence.raw_value),
                    format!("'{}'", occurrence.raw_value),
                ],
                replacement,
            )
        }
        LiteralKind::Template {
            source,
            substitutions,
            ..
        } => {
            let replacement = if substitutions.is_empty() {
                call
            } else {
                let args: Vec<String> = substitutions
                    .iter()
                    .map(|(placeholder, expr)| format!("{}: {}", placeholder, expr))
                    .collect();
                format!("t(\"{}\", {{ {} }})", call_path, args.join(", "))
            };
            (vec![source.clone()], replacement)
        }
    };
    RewriteInstruction {
        start_line: occurrence.start_line,
        end_line: occurrence.end_line,
        searches,
        replacement,
    }
}
