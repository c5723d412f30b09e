//! Directory tree collection.
//! Walks the root directory and reads every regular file into a
//! [`FileEntry`] keyed by its server path.

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use globset::GlobSet;
use log::debug;
use walkdir::{DirEntry, WalkDir};

use crate::error::{Error, Result};

/// A file discovered in the tree, ready to be embedded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// On-disk path with the base directory prefix stripped
    pub server_path: String,
    /// Raw file content, untouched
    pub content: Vec<u8>,
}

/// Collects the files of a directory tree.
#[derive(Debug, Clone)]
pub struct Collector {
    follow_links: bool,
    exclude: GlobSet,
}

impl Default for Collector {
    fn default() -> Self {
        Self { follow_links: true, exclude: GlobSet::empty() }
    }
}

impl Collector {
    /// Creates a collector that follows symbolic links and excludes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether symbolic links are followed. When disabled, links are skipped.
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.follow_links = yes;
        self
    }

    /// Paths relative to the root matching `exclude` are skipped.
    /// A matching directory is not descended into.
    pub fn exclude(mut self, exclude: GlobSet) -> Self {
        self.exclude = exclude;
        self
    }

    /// Walks `root_path` and reads every regular file below it.
    ///
    /// Files of a directory come before the contents of its subdirectories,
    /// both in listing order. Symlink cycles are detected and reported as a
    /// [`Error::FileSystemError`].
    ///
    /// # Arguments
    /// * `root_path` - Directory to scan
    /// * `base_dir` - Prefix stripped from each file path to build its server path
    ///
    /// # Errors
    /// * `Error::FileSystemError` if the root is missing or not a directory, or
    ///   if any directory or file in the tree cannot be read
    /// * `Error::InvalidPathError` if a path is not UTF-8 or not under `base_dir`
    pub fn collect<P: AsRef<Path>, B: AsRef<Path>>(
        &self,
        root_path: P,
        base_dir: B,
    ) -> Result<Vec<FileEntry>> {
        let root_path = root_path.as_ref();
        let base_dir = base_dir.as_ref();

        let metadata = fs::metadata(root_path).map_err(|e| Error::file_system(root_path, e))?;
        if !metadata.is_dir() {
            return Err(Error::file_system(
                root_path,
                std::io::Error::other("not a directory"),
            ));
        }

        let follow_links = self.follow_links;
        let walker = WalkDir::new(root_path)
            .follow_links(follow_links)
            .sort_by(move |a, b| files_first(a, b, follow_links))
            .into_iter()
            .filter_entry(|entry| !self.is_excluded(root_path, entry));

        let mut entries = Vec::new();
        for dir_entry in walker {
            let dir_entry = dir_entry?;
            if !dir_entry.file_type().is_file() {
                continue;
            }

            let path = dir_entry.path();
            let server_path = server_path(path, base_dir)?;
            let content = fs::read(path).map_err(|e| Error::file_system(path, e))?;
            debug!("Collected {} ({} bytes)", server_path, content.len());

            entries.push(FileEntry { server_path, content });
        }

        Ok(entries)
    }

    fn is_excluded(&self, root_path: &Path, entry: &DirEntry) -> bool {
        if self.exclude.is_empty() || entry.depth() == 0 {
            return false;
        }
        match entry.path().strip_prefix(root_path) {
            Ok(relative) if self.exclude.is_match(relative) => {
                debug!("Skipping {} (excluded)", relative.display());
                true
            }
            _ => false,
        }
    }
}

/// Collects `root_path` with the default collector, stripping `base_dir`.
///
/// The top-level call passes the root itself as `base_dir`.
pub fn collect<P: AsRef<Path>, B: AsRef<Path>>(
    root_path: P,
    base_dir: B,
) -> Result<Vec<FileEntry>> {
    Collector::new().collect(root_path, base_dir)
}

/// Computes the server path of `path` by textually stripping `base_dir`.
///
/// `site` + `site/a.txt` gives `/a.txt`, while `site/` + `site/a.txt` gives `a.txt`.
pub fn server_path(path: &Path, base_dir: &Path) -> Result<String> {
    let full = path
        .to_str()
        .ok_or_else(|| Error::InvalidPathError(format!("'{}' is not UTF-8", path.display())))?;
    let base = base_dir.to_str().ok_or_else(|| {
        Error::InvalidPathError(format!("'{}' is not UTF-8", base_dir.display()))
    })?;

    full.strip_prefix(base).map(str::to_string).ok_or_else(|| {
        Error::InvalidPathError(format!("'{full}' is not under base directory '{base}'"))
    })
}

/// Orders siblings so that files precede directories; the sort is stable,
/// so listing order is kept within each group.
fn files_first(a: &DirEntry, b: &DirEntry, follow_links: bool) -> Ordering {
    is_dir(a, follow_links).cmp(&is_dir(b, follow_links))
}

fn is_dir(entry: &DirEntry, follow_links: bool) -> bool {
    // Links are resolved after sorting, so look through them here.
    if follow_links && entry.path_is_symlink() {
        entry.path().is_dir()
    } else {
        entry.file_type().is_dir()
    }
}
