//! Literal extraction: walks a parsed module and classifies every
//! Chinese-bearing literal by its syntactic context.

mod occurrence;
mod visitor;

pub use occurrence::{LiteralKind, LiteralOccurrence};
pub use visitor::{Extraction, collect_occurrences};
