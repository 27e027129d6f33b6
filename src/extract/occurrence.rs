//! Occurrence data model for extracted literals.

/// Structural kind of an extracted literal, as a closed set of variants.
///
/// The kind decides both the locale value and the shape of the rewritten
/// call expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralKind {
    /// Text directly nested inside a JSX tag: `<div>我是文本</div>`.
    JsxText,
    /// A quoted string literal: `const name = "大黄"` or `title="全干工程师"`.
    Str,
    /// A single-line template literal whose interpolations are all plain
    /// identifiers or dotted member chains.
    Template {
        /// Locale value with `{{valueN}}` placeholders in source order.
        value: String,
        /// Exact source text of the literal, reconstructible because every
        /// accepted interpolation is a plain identifier chain.
        source: String,
        /// Placeholder name to substituted expression, in source order.
        substitutions: Vec<(String, String)>,
    },
}

/// One concrete instance of translatable literal text at a source location.
///
/// Ephemeral: created and consumed within a single file's processing pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralOccurrence {
    /// Raw text the key is derived from. For `JsxText` and `Str` this is
    /// also the locale value.
    pub raw_value: String,
    /// 1-based first line of the enclosing node.
    pub start_line: usize,
    /// 1-based last line of the enclosing node.
    pub end_line: usize,
    pub kind: LiteralKind,
    /// True exactly when the literal is the direct value of a JSX attribute,
    /// in which case the rewritten call must be wrapped in braces.
    pub needs_brace_wrap: bool,
}

impl LiteralOccurrence {
    /// The text recorded as this occurrence's locale entry value.
    pub fn locale_value(&self) -> &str {
        match &self.kind {
            LiteralKind::Template { value, .. } => value,
            _ => &self.raw_value,
        }
    }
}
