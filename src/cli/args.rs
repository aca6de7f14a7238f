//! CLI argument definitions using clap.
//!
//! `xgotext <PATH> [OUTPUT_DIR]` extracts translation calls from a Go file or
//! from every Go file of a package directory into `<domain>.po` catalogs.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Go source file, or package directory whose .go files are extracted together
    pub path: PathBuf,

    /// Directory where <domain>.po catalogs are written [default: current directory]
    pub output_dir: Option<PathBuf>,

    /// Domain for calls that do not name one (overrides config file)
    #[arg(short = 'd', long, env = "XGOTEXT_DEFAULT_DOMAIN")]
    pub default_domain: Option<String>,

    /// Skip *_test.go files in directory mode (overrides config file)
    #[arg(long)]
    pub ignore_test_files: bool,

    /// Do not look for a .xgotextrc.json configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
