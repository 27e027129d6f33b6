//! Locale block rendering.
//!
//! Each processed source file contributes one YAML-style text block: lazily
//! emitted ancestor headers for its path namespace, followed by the entries
//! extracted from the file. Rendering is append-only; a block is never
//! re-opened or merged once flushed.

use std::collections::HashSet;

/// Entry emitted when a file produced no translatable text, so its headers
/// never dangle without a child.
pub const EMPTY_PLACEHOLDER: &str = "empty_i18n_placeholder";

/// A generated key and its locale value. Template values carry `{{valueN}}`
/// placeholder markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleEntry {
    pub key: String,
    pub value: String,
}

/// Render the locale block for one file.
///
/// `seen_prefixes` spans the whole run: a dotted namespace prefix is written
/// as a header at most once, no matter how many files share it. The first
/// namespace level starts at four spaces, leaving room for the
/// hand-maintained `<locale>:`/`js:` roots of the sink files, and each level
/// nests two more.
pub fn render_block(
    namespace: &[String],
    entries: &[LocaleEntry],
    seen_prefixes: &mut HashSet<String>,
) -> String {
    let mut block = String::new();
    for (depth, segment) in namespace.iter().enumerate() {
        let prefix = namespace[..=depth].join(".");
        if seen_prefixes.insert(prefix) {
            block.push_str(&indent(depth));
            block.push_str(segment);
            block.push_str(":\n");
        }
    }

    let leaf = indent(namespace.len());
    if entries.is_empty() {
        block.push_str(&format!("{}{}: null\n", leaf, EMPTY_PLACEHOLDER));
    } else {
        for entry in entries {
            block.push_str(&format!("{}{}: '{}'\n", leaf, entry.key, entry.value));
        }
    }
    block
}

fn indent(depth: usize) -> String {
    " ".repeat((depth + 2) * 2)
}
