//! xgotext - gettext catalog extraction for Go sources
//!
//! xgotext is a CLI tool and library that finds translation calls such as
//! `l.Get("Hello")`, `l.GetN("%d file", "%d files", n)` or
//! `l.GetDC("app", "Open", "menu")` in Go code and writes one `.po`
//! template per translation domain.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, run, report)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (parsing, matching, catalog output)

pub mod cli;
pub mod config;
pub mod core;
