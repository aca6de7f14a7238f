//! Source parsers.
//!
//! A parser turns the source files of one package into the call sites found in
//! them. The rest of the pipeline only sees [`ParsedUnit`]s, so the source
//! language is decided here alone.
//!
//! - `go`: Go source files (tree-sitter based)
//! - `scope`: lexical scopes used to resolve identifiers

use std::path::PathBuf;

use anyhow::Result;

use crate::core::source::ParsedUnit;

pub mod go;
pub mod scope;

pub use go::GoParser;

/// Produces the call sites of the files of one package, one unit per file in
/// the given order.
///
/// Any failure (unreadable file, syntax error) is fatal for the run.
pub trait SourceParser {
    fn parse_files(&mut self, paths: &[PathBuf]) -> Result<Vec<ParsedUnit>>;
}
