//! Hyperlink extraction from HTML pages

use super::scanner::slash_path;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::{Component, Path, PathBuf};

lazy_static! {
    static ref ANCHOR_HREF: Regex =
        Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).expect("Invalid regex");
    static ref URL_SCHEME: Regex =
        Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").expect("Invalid regex");
}

/// Extract the targets of `<a href="...">` links in `content`.
///
/// Targets are resolved against the directory of `source_path` and returned
/// as normalized corpus-relative paths. Links with a URL scheme and
/// fragment-only links are skipped; `#fragment` and `?query` suffixes are
/// dropped. Order follows the document and duplicates are kept.
pub fn extract_links(content: &str, source_path: &str) -> Vec<String> {
    ANCHOR_HREF
        .captures_iter(content)
        .filter_map(|cap| cap.get(1))
        .filter_map(|target| resolve_target(target.as_str(), source_path))
        .collect()
}

fn resolve_target(href: &str, source_path: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') || URL_SCHEME.is_match(href) {
        return None;
    }

    let end = href.find(|c: char| c == '#' || c == '?').unwrap_or(href.len());
    let target = &href[..end];
    if target.is_empty() {
        return None;
    }

    normalize_path(target, source_path)
}

/// Normalize a link target to a corpus-relative path
fn normalize_path(target: &str, source_path: &str) -> Option<String> {
    let resolved = match target.strip_prefix('/') {
        Some(rooted) => PathBuf::from(rooted),
        None => {
            let source_dir = Path::new(source_path).parent().unwrap_or(Path::new(""));
            source_dir.join(target)
        }
    };

    let normalized = normalize_pathbuf(&resolved)?;
    if normalized.as_os_str().is_empty() {
        return None;
    }

    Some(slash_path(&normalized))
}

/// Collapse `.` and `..` components; `None` if the path climbs above the root.
fn normalize_pathbuf(path: &Path) -> Option<PathBuf> {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::ParentDir => {
                components.pop()?;
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
            Component::Normal(part) => components.push(part),
        }
    }

    Some(components.iter().collect())
}
