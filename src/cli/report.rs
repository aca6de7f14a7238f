//! Report formatting and printing utilities.
//!
//! Separate from the extraction logic to allow xgotext to be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::run::RunSummary;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print the run summary to stdout and, in verbose mode, skipped calls to stderr.
pub fn print(summary: &RunSummary, verbose: bool) {
    print_summary_to(summary, verbose, &mut io::stdout().lock());
    if verbose {
        print_skipped_to(summary, &mut io::stderr().lock());
    }
}

/// Print the run summary to a custom writer.
pub fn print_summary_to<W: Write>(summary: &RunSummary, verbose: bool, writer: &mut W) {
    let stats = &summary.stats;
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Extracted {} {} from {} {} into {} {}",
            stats.messages,
            plural(stats.messages, "message", "messages"),
            stats.files,
            plural(stats.files, "file", "files"),
            summary.catalogs.len(),
            plural(summary.catalogs.len(), "catalog", "catalogs"),
        )
        .green()
    );

    if !verbose {
        return;
    }

    for catalog in &summary.catalogs {
        let _ = writeln!(
            writer,
            "  {} {} ({} {})",
            "wrote".bold(),
            catalog.path.display(),
            catalog.entries,
            plural(catalog.entries, "entry", "entries"),
        );
    }
    if summary.ignored_files > 0 {
        let _ = writeln!(
            writer,
            "  {} {} ignored {}",
            "skipped".bold(),
            summary.ignored_files,
            plural(summary.ignored_files, "file", "files"),
        );
    }
}

/// Print one note per translation call that was skipped.
pub fn print_skipped_to<W: Write>(summary: &RunSummary, writer: &mut W) {
    for skipped in &summary.skipped {
        let _ = writeln!(
            writer,
            "{} {}: skipped {}: {}",
            "note:".bold().cyan(),
            skipped.location,
            skipped.call_label,
            skipped.reason,
        );
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
