//! Domain catalog registry.
//!
//! Catalogs are discovered by use: the first time a domain is resolved its
//! stream is opened through a [`CatalogSink`] and the header is written. Later
//! resolutions reuse the same stream.

use std::{
    collections::HashMap,
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::writer::write_header;

/// Opens the backing stream of a domain catalog.
pub trait CatalogSink {
    type Stream: Write;

    fn open(&mut self, domain: &str) -> Result<Self::Stream>;
}

/// Writes `<domain>.po` files into an output directory, truncating old ones.
#[derive(Debug, Clone)]
pub struct FileSink {
    output_dir: PathBuf,
}

impl FileSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn catalog_path(&self, domain: &str) -> PathBuf {
        self.output_dir.join(format!("{}.po", domain))
    }
}

impl CatalogSink for FileSink {
    type Stream = CatalogFile;

    fn open(&mut self, domain: &str) -> Result<CatalogFile> {
        let path = self.catalog_path(domain);
        let file = File::create(&path)
            .with_context(|| format!("Failed to create catalog file: {}", path.display()))?;
        Ok(CatalogFile {
            path,
            writer: BufWriter::new(file),
        })
    }
}

/// Buffered catalog file. Buffered data is flushed on drop as well, so an
/// aborted run still leaves whatever was written before the failure.
#[derive(Debug)]
pub struct CatalogFile {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl CatalogFile {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Write for CatalogFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// An open catalog for one domain. The header has already been written.
#[derive(Debug)]
pub struct DomainCatalog<W> {
    name: String,
    stream: W,
    entries: usize,
}

impl<W: Write> DomainCatalog<W> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> usize {
        self.entries
    }

    pub fn stream(&mut self) -> &mut W {
        &mut self.stream
    }

    /// Record that one more entry was appended to the stream.
    pub fn count_entry(&mut self) {
        self.entries += 1;
    }
}

/// A flushed catalog handed back by [`CatalogRegistry::finish`].
#[derive(Debug)]
pub struct FinishedCatalog<W> {
    pub name: String,
    pub entries: usize,
    pub stream: W,
}

pub struct CatalogRegistry<S: CatalogSink> {
    sink: S,
    /// Catalogs in the order they were first resolved.
    catalogs: Vec<DomainCatalog<S::Stream>>,
    index: HashMap<String, usize>,
}

impl<S: CatalogSink> CatalogRegistry<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            catalogs: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Get the catalog for `domain`, opening it and writing its header on first use.
    pub fn resolve(&mut self, domain: &str) -> Result<&mut DomainCatalog<S::Stream>> {
        let idx = match self.index.get(domain) {
            Some(&idx) => idx,
            None => {
                let mut stream = self.sink.open(domain)?;
                write_header(&mut stream)
                    .with_context(|| format!("Failed to write header of domain '{}'", domain))?;
                self.catalogs.push(DomainCatalog {
                    name: domain.to_string(),
                    stream,
                    entries: 0,
                });
                let idx = self.catalogs.len() - 1;
                self.index.insert(domain.to_string(), idx);
                idx
            }
        };
        Ok(&mut self.catalogs[idx])
    }

    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }

    /// Flush every stream and hand the catalogs back in resolution order.
    pub fn finish(self) -> Result<Vec<FinishedCatalog<S::Stream>>> {
        self.catalogs
            .into_iter()
            .map(|mut catalog| {
                catalog
                    .stream
                    .flush()
                    .with_context(|| format!("Failed to flush domain '{}'", catalog.name))?;
                Ok(FinishedCatalog {
                    name: catalog.name,
                    entries: catalog.entries,
                    stream: catalog.stream,
                })
            })
            .collect()
    }
}

/// In-memory sink for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemorySink {
    pub opened: Vec<String>,
}

#[cfg(test)]
impl CatalogSink for MemorySink {
    type Stream = Vec<u8>;

    fn open(&mut self, domain: &str) -> Result<Vec<u8>> {
        self.opened.push(domain.to_string());
        Ok(Vec::new())
    }
}
