use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use walkdir::WalkDir;

/// Suffix of Go test files.
pub const TEST_FILE_SUFFIX: &str = "_test.go";

/// Result of resolving the input path to source files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Files to parse, in processing order.
    pub files: Vec<PathBuf>,
    /// Go files found in directory mode but excluded by ignore rules.
    pub ignored_count: usize,
}

/// Filters applied in directory mode.
#[derive(Debug, Default)]
pub struct ScanOptions<'a> {
    pub ignores: &'a [String],
    pub ignore_test_files: bool,
}

/// Resolve `path` to the source files of one extraction unit.
///
/// A file is returned as is. A directory yields the `.go` files directly
/// inside it (not recursive), sorted by file name so runs are reproducible.
pub fn scan_source_files(path: &Path, options: &ScanOptions) -> Result<ScanResult> {
    let metadata = path
        .metadata()
        .with_context(|| format!("Cannot access path: {}", path.display()))?;

    if metadata.is_file() {
        return Ok(ScanResult {
            files: vec![path.to_path_buf()],
            ignored_count: 0,
        });
    }
    if !metadata.is_dir() {
        bail!("Not a file or directory: {}", path.display());
    }

    let patterns = options
        .ignores
        .iter()
        .map(|p| Pattern::new(p).with_context(|| format!("Invalid ignore pattern: \"{}\"", p)))
        .collect::<Result<Vec<_>>>()?;

    let mut result = ScanResult::default();
    let walker = WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry =
            entry.with_context(|| format!("Cannot read directory: {}", path.display()))?;
        let file_path = entry.path();

        if !entry.file_type().is_file() || !is_go_file(file_path) {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        let is_ignored = (options.ignore_test_files && name.ends_with(TEST_FILE_SUFFIX))
            || patterns
                .iter()
                .any(|p| p.matches(&name) || p.matches_path(file_path));

        if is_ignored {
            result.ignored_count += 1;
        } else {
            result.files.push(file_path.to_path_buf());
        }
    }

    Ok(result)
}

fn is_go_file(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("go"))
}
