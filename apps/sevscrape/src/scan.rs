//! Directory traversal and document eligibility.
//!
//! Walks the tree depth-first (entries sorted by file name), following
//! symlinks the way a `stat`-based walk would. A directory that closes a
//! symlink cycle is reported instead of being walked again.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
/// Filename filters applied to every non-directory entry.
pub struct ScanOptions {
    /// Suffix a path must end with (case-sensitive).
    pub extension: String,
    /// Lowercase substrings that exclude a file by basename.
    pub exclude: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extension: ".adoc".to_string(),
            exclude: vec!["policies".to_string(), "index".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// What the scanner decided about one path.
pub enum Entry {
    /// Document to extract from.
    Eligible(PathBuf),
    /// Matching extension but excluded by name.
    Excluded(PathBuf),
    /// Directory already on the current ancestor chain.
    Cycle(PathBuf),
}

impl ScanOptions {
    pub fn has_extension(&self, path: &Path) -> bool {
        path.to_string_lossy().ends_with(self.extension.as_str())
    }

    /// Case-insensitive basename test against the exclusion list.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let name = match path.file_name() {
            Some(n) => n.to_string_lossy().to_lowercase(),
            None => return false,
        };
        self.exclude
            .iter()
            .any(|needle| name.contains(needle.to_lowercase().as_str()))
    }

    fn classify(&self, path: &Path) -> Option<Entry> {
        if !self.has_extension(path) {
            return None;
        }
        let path = strip_cur_dir(path);
        if self.is_excluded(&path) {
            Some(Entry::Excluded(path))
        } else {
            Some(Entry::Eligible(path))
        }
    }
}

/// Drop `.` components so `./docs/a.adoc` is reported as `docs/a.adoc`.
pub fn strip_cur_dir(path: &Path) -> PathBuf {
    let stripped: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if stripped.as_os_str().is_empty() {
        path.to_path_buf()
    } else {
        stripped
    }
}

/// Lazily walk `root`, yielding only entries relevant to extraction.
///
/// Fails up front when `root` is missing or not a directory; later I/O
/// failures surface as `Err` items and end the walk.
pub fn scan<'a>(
    root: &Path,
    opts: &'a ScanOptions,
) -> Result<impl Iterator<Item = Result<Entry>> + 'a> {
    let meta = fs::metadata(root)
        .with_context(|| format!("failed to read directory {}", root.display()))?;
    if !meta.is_dir() {
        bail!("not a directory: {}", root.display());
    }
    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter();
    Ok(walker.filter_map(move |item| match item {
        Ok(entry) if entry.file_type().is_dir() => None,
        Ok(entry) => opts.classify(entry.path()).map(Ok),
        Err(err) if err.loop_ancestor().is_some() => err
            .path()
            .map(|p| Ok(Entry::Cycle(strip_cur_dir(p)))),
        Err(err) => {
            let at = err
                .path()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            Some(Err(anyhow::Error::new(err).context(format!("failed to walk {}", at))))
        }
    }))
}
