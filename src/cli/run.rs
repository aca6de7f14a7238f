//! One extraction run: configuration, file scan, parse, match, write.
//!
//! # Returns
//! - `Ok(RunSummary)` with the written catalogs and statistics
//! - `Err` on the first fatal condition (bad path, syntax error, invalid
//!   domain, I/O failure). Syntax errors stop the run before any catalog is
//!   opened. Catalog files opened before a later failure are flushed and
//!   closed when the extraction context is dropped.

use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::Colorize;

use super::args::Arguments;
use crate::{
    config::{Config, ConfigLoadResult, load_config},
    core::{
        ExtractionContext, ExtractionStats, SkippedCall,
        catalog::FileSink,
        file_scanner::{ScanOptions, scan_source_files},
        parsers::{GoParser, SourceParser},
    },
};

/// A catalog written by the run.
#[derive(Debug)]
pub struct CatalogReport {
    pub domain: String,
    pub path: PathBuf,
    pub entries: usize,
}

#[derive(Debug)]
pub struct RunSummary {
    /// Catalogs in the order their domains were first used.
    pub catalogs: Vec<CatalogReport>,
    pub stats: ExtractionStats,
    pub skipped: Vec<SkippedCall>,
    /// Go files left out by ignore rules in directory mode.
    pub ignored_files: usize,
}

pub fn run(args: &Arguments) -> Result<RunSummary> {
    let verbose = args.verbose;

    let ConfigLoadResult { config, source } = if args.no_config {
        ConfigLoadResult {
            config: Config::default(),
            source: None,
        }
    } else {
        load_config(&config_start_dir(&args.path))?
    };
    if verbose {
        match &source {
            Some(path) => eprintln!(
                "{} using configuration from {}",
                "note:".bold().cyan(),
                path.display()
            ),
            None => eprintln!(
                "{} no configuration file found, using default configuration",
                "note:".bold().cyan()
            ),
        }
    }

    let default_domain = args
        .default_domain
        .clone()
        .unwrap_or_else(|| config.default_domain.clone());

    let scan = scan_source_files(
        &args.path,
        &ScanOptions {
            ignores: &config.ignores,
            ignore_test_files: args.ignore_test_files || config.ignore_test_files,
        },
    )?;
    if scan.files.is_empty() {
        eprintln!(
            "{} No Go source files found in {}",
            "warning:".bold().yellow(),
            args.path.display()
        );
    }

    // An empty path joins to bare file names, i.e. the working directory.
    let output_dir = args.output_dir.clone().unwrap_or_default();
    if verbose {
        for file in &scan.files {
            eprintln!("Parsing {}", file.display());
        }
    }
    // All files of the package are parsed before any catalog is opened.
    let units = GoParser::new()?.parse_files(&scan.files)?;

    let mut ctx = ExtractionContext::new(default_domain, FileSink::new(&output_dir))?;
    for unit in &units {
        ctx.extract(unit)?;
    }

    let outcome = ctx.finish()?;
    let catalogs = outcome
        .catalogs
        .into_iter()
        .map(|catalog| CatalogReport {
            path: catalog.stream.path().to_path_buf(),
            domain: catalog.name,
            entries: catalog.entries,
        })
        .collect();

    Ok(RunSummary {
        catalogs,
        stats: outcome.stats,
        skipped: outcome.skipped,
        ignored_files: scan.ignored_count,
    })
}

/// Configuration is looked up from the package directory upwards.
fn config_start_dir(path: &Path) -> PathBuf {
    if path.is_dir() {
        return path.to_path_buf();
    }
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
