//! Turns a directory on disk into `Entry` records for the engine.
//!
//! MIME types are guessed from file names only; file contents are never read.

use camino::{Utf8Path, Utf8PathBuf};
use ignore::WalkBuilder;
use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use crate::config::AppConfig;
use crate::core::{CoreError, Entry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingOptions {
    pub include_hidden: bool,
    pub respect_ignore_files: bool,
    /// Depth below the root; `Some(1)` lists direct children only.
    pub max_depth: Option<usize>,
    pub directories_first: bool,
}

impl Default for ListingOptions {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for ListingOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            include_hidden: config.include_hidden,
            respect_ignore_files: config.respect_ignore_files,
            max_depth: config.max_depth,
            directories_first: config.directories_first,
        }
    }
}

/// A listed path together with the entry derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    pub path: Utf8PathBuf,
    /// Depth relative to the listing root; direct children are at depth 1.
    pub depth: usize,
    pub entry: Entry,
}

/// Builds the engine input for one path.
pub fn entry_for_path(path: &Utf8Path, is_directory: bool) -> Entry {
    let name = path
        .file_name()
        .map(str::to_string)
        .unwrap_or_else(|| path.to_string());

    if is_directory {
        return Entry::directory(name);
    }

    Entry {
        name,
        is_directory: false,
        mime_type: mime_guess::from_path(path)
            .first()
            .map(|mime| mime.essence_str().to_string()),
    }
}

/// Lists `root` in walk order, siblings sorted.
///
/// A root that is a file yields a single entry at depth 0. An unreadable
/// root fails; unreadable or non-UTF-8 entries below it are logged and skipped.
pub fn list_directory(
    root: &Path,
    options: &ListingOptions,
) -> Result<Vec<ListedEntry>, CoreError> {
    let metadata = fs::metadata(root).map_err(|e| CoreError::Io(e, root.to_path_buf()))?;

    if !metadata.is_dir() {
        let path = Utf8PathBuf::from_path_buf(root.to_path_buf()).map_err(CoreError::NonUtf8Path)?;
        let entry = entry_for_path(&path, false);
        let listed = ListedEntry {
            path,
            depth: 0,
            entry,
        };
        return Ok(vec![listed]);
    }

    let directories_first = options.directories_first;
    let walker = WalkBuilder::new(root)
        .hidden(!options.include_hidden)
        .ignore(options.respect_ignore_files)
        .git_ignore(options.respect_ignore_files)
        .git_global(options.respect_ignore_files)
        .git_exclude(options.respect_ignore_files)
        .parents(options.respect_ignore_files)
        .require_git(false)
        .follow_links(false)
        .max_depth(options.max_depth)
        .sort_by_file_path(move |a, b| compare_siblings(a, b, directories_first))
        .build();

    let mut listed = Vec::new();
    for result in walker {
        let dir_entry = match result {
            Ok(dir_entry) => dir_entry,
            Err(e) if e.depth() == Some(0) => return Err(CoreError::Walk(e)),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry under {:?}: {}", root, e);
                continue;
            }
        };

        if dir_entry.depth() == 0 {
            continue;
        }

        let path = match Utf8PathBuf::from_path_buf(dir_entry.path().to_path_buf()) {
            Ok(path) => path,
            Err(path) => {
                tracing::warn!("Skipping non UTF-8 path {:?}", path);
                continue;
            }
        };

        let is_directory = dir_entry.file_type().is_some_and(|ft| ft.is_dir());
        let entry = entry_for_path(&path, is_directory);
        listed.push(ListedEntry {
            path,
            depth: dir_entry.depth(),
            entry,
        });
    }

    tracing::debug!("Listed {} entries under {:?}", listed.len(), root);
    Ok(listed)
}

fn compare_siblings(a: &Path, b: &Path, directories_first: bool) -> Ordering {
    if directories_first {
        match (sorts_as_directory(a), sorts_as_directory(b)) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    a.file_name().cmp(&b.file_name())
}

/// Symlinks count as files here, the same way listed entries are typed.
fn sorts_as_directory(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok_and(|metadata| metadata.is_dir())
}
