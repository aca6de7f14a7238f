//! Extraction context threaded through matching and catalog writing.
//!
//! Holds everything that is shared across the files of one run: the current
//! domain, the open catalogs and the running statistics.

use anyhow::{Context, Result};

use crate::core::catalog::{CatalogRegistry, CatalogSink, FinishedCatalog, write_entry};
use crate::core::matcher::{MatchOutcome, SkippedCall, match_call_site, validate_domain};
use crate::core::source::ParsedUnit;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    pub files: usize,
    pub messages: usize,
}

/// Result of a finished extraction run.
#[derive(Debug)]
pub struct ExtractionOutcome<W> {
    pub catalogs: Vec<FinishedCatalog<W>>,
    pub stats: ExtractionStats,
    /// Translation calls that were skipped, in discovery order.
    pub skipped: Vec<SkippedCall>,
}

pub struct ExtractionContext<S: CatalogSink> {
    current_domain: String,
    registry: CatalogRegistry<S>,
    stats: ExtractionStats,
    skipped: Vec<SkippedCall>,
}

impl<S: CatalogSink> ExtractionContext<S> {
    pub fn new(current_domain: impl Into<String>, sink: S) -> Result<Self> {
        let current_domain = current_domain.into();
        validate_domain(&current_domain).context("Invalid default domain")?;
        Ok(Self {
            current_domain,
            registry: CatalogRegistry::new(sink),
            stats: ExtractionStats::default(),
            skipped: Vec::new(),
        })
    }

    pub fn current_domain(&self) -> &str {
        &self.current_domain
    }

    pub fn stats(&self) -> ExtractionStats {
        self.stats
    }

    /// Match every call site of `unit` and append the extracted entries, in order.
    pub fn extract(&mut self, unit: &ParsedUnit) -> Result<()> {
        self.stats.files += 1;

        for call in &unit.call_sites {
            match match_call_site(call, &self.current_domain)? {
                MatchOutcome::Ignored => {}
                MatchOutcome::Skipped(skipped) => self.skipped.push(skipped),
                MatchOutcome::Extracted(record) => {
                    let catalog = self.registry.resolve(&record.domain)?;
                    write_entry(catalog.stream(), &record).with_context(|| {
                        format!("Failed to write entry for domain '{}'", record.domain)
                    })?;
                    catalog.count_entry();
                    self.stats.messages += 1;
                }
            }
        }

        Ok(())
    }

    /// Flush all catalogs. Dropping the context instead still flushes buffered
    /// file output, but write errors are then lost.
    pub fn finish(self) -> Result<ExtractionOutcome<S::Stream>> {
        Ok(ExtractionOutcome {
            catalogs: self.registry.finish()?,
            stats: self.stats,
            skipped: self.skipped,
        })
    }
}
