//! Core extraction engine.
//!
//! ## Pipeline
//!
//! 1. `file_scanner`: resolve the input path to source files
//! 2. `parsers`: turn each file into call sites (`source` types)
//! 3. `matcher`: classify call sites against the `signature` table
//! 4. `catalog`: append extracted entries to per-domain catalogs
//!
//! `context` ties steps 3 and 4 together for a whole run.

pub mod catalog;
pub mod context;
pub mod file_scanner;
pub mod literal;
pub mod matcher;
pub mod parsers;
pub mod signature;
pub mod source;

pub use context::{ExtractionContext, ExtractionOutcome, ExtractionStats};
pub use matcher::{ExtractionRecord, MatchOutcome, SkipReason, SkippedCall, match_call_site};
pub use source::{Argument, CallSite, Callee, DeclKind, ParsedUnit, SourceLocation};
