//! Page discovery under a corpus root

use crate::config::CorpusConfig;
use crate::error::Result;
use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// A page found on disk
#[derive(Debug, Clone)]
pub struct ScannedPage {
    pub path: PathBuf,
    /// Path relative to the corpus root, '/'-separated; the page identifier
    pub relative_path: String,
}

/// Scan `root` for files matching the corpus pattern, sorted by relative path
pub fn scan_pages(root: &Path, config: &CorpusConfig) -> Result<Vec<ScannedPage>> {
    let pattern = Pattern::new(&config.pattern)?;
    let mut results = Vec::new();

    let mut walker = WalkDir::new(root).follow_links(config.follow_symlinks);
    if !config.recursive {
        walker = walker.max_depth(1);
    }

    let entries = walker
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !should_skip(e, config));

    for entry in entries {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path
            .strip_prefix(root)
            .map(slash_path)
            .unwrap_or_else(|_| path.to_string_lossy().to_string());

        if pattern.matches(&relative) {
            results.push(ScannedPage {
                path: path.to_path_buf(),
                relative_path: relative,
            });
        }
    }

    results.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    Ok(results)
}

fn should_skip(entry: &DirEntry, config: &CorpusConfig) -> bool {
    let name = entry.file_name().to_string_lossy();

    if config.exclude_hidden && name.starts_with('.') {
        return true;
    }

    if entry.file_type().is_dir() && config.exclude_dirs.iter().any(|d| name == *d) {
        return true;
    }

    false
}

/// Join path components with '/' regardless of platform
pub(crate) fn slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
