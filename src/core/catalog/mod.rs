//! Catalog output: per-domain streams and PO entry formatting.

pub mod registry;
pub mod writer;

pub use registry::{CatalogFile, CatalogRegistry, CatalogSink, DomainCatalog, FileSink, FinishedCatalog};
pub use writer::{CATALOG_HEADER, write_entry, write_header};
