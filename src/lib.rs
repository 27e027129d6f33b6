//! Hanlift - Chinese text extraction for front-end codebases
//!
//! Hanlift is a CLI tool and library that scans JS/TS/JSX/TSX sources for
//! hardcoded Chinese text, extracts every instance into a uniquely-keyed
//! locale entry, and rewrites the source to reference the entry through a
//! `t("js.<namespace>.<key>")` call.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `extract`: AST classification of Chinese-bearing literals
//! - `keygen`: Stable key derivation (pinyin + content-hash disambiguator)
//! - `locale`: Nested locale block rendering
//! - `parsers`: swc-based source parsing
//! - `pipeline`: Per-run sequential processing driver
//! - `rewrite`: Substitution planning and line-range application
//! - `scanner`: Source file discovery
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod extract;
pub mod keygen;
pub mod locale;
pub mod parsers;
pub mod pipeline;
pub mod rewrite;
pub mod scanner;
pub mod utils;
