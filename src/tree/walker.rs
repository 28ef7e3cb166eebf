//! TreeWalker - lazy depth-first, top-down traversal
//!
//! Each scanned directory yields its own entry, then its files, then its
//! subdirectories (each visited by the same rule). Scanning is driven by an
//! explicit stack so arbitrarily deep trees never grow the call stack.

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::error::{Error, Result, SubtreeAccessError};

use super::config::WalkerConfig;

/// Whether a walked entry is a file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::File => "file",
            EntryKind::Directory => "directory",
        }
    }
}

/// One item produced by the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
    /// Byte length for files. `None` for directories and for files whose
    /// metadata could not be read; such files are still yielded.
    pub len: Option<u64>,
}

impl WalkEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// File name of the entry, or the full path when it has none.
    pub fn name(&self) -> String {
        super::descriptor::base_name(&self.path)
    }

    /// Directory containing this entry.
    pub fn parent(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }
}

/// Entry point for walks. Validates the root before any traversal starts.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Start a walk at `root`, which must be an existing directory.
    pub fn walk(&self, root: &Path) -> Result<Walk> {
        if !root.exists() {
            return Err(Error::PathNotFound {
                path: root.to_path_buf(),
            });
        }
        if !root.is_dir() {
            return Err(Error::NotADirectory {
                path: root.to_path_buf(),
            });
        }
        Ok(Walk::new(root.to_path_buf(), self.config.sort_entries))
    }
}

/// Lazy iterator over the entries under one root.
///
/// Subtrees that cannot be enumerated are skipped; they are available from
/// [`Walk::skipped`] once iteration is done.
#[derive(Debug)]
pub struct Walk {
    sort_entries: bool,
    /// Directories waiting to be scanned, next one on top.
    stack: Vec<PathBuf>,
    /// Entries of the last scanned directory not yet yielded.
    pending: VecDeque<WalkEntry>,
    skipped: Vec<SubtreeAccessError>,
}

impl Walk {
    fn new(root: PathBuf, sort_entries: bool) -> Self {
        Self {
            sort_entries,
            stack: vec![root],
            pending: VecDeque::new(),
            skipped: Vec::new(),
        }
    }

    /// Entries that could not be read so far: unreadable subtrees (not
    /// yielded) and files whose metadata failed (yielded without a length).
    pub fn skipped(&self) -> &[SubtreeAccessError] {
        &self.skipped
    }

    pub fn into_skipped(self) -> Vec<SubtreeAccessError> {
        self.skipped
    }

    fn skip(&mut self, path: PathBuf, source: std::io::Error) {
        warn!(path = %path.display(), error = %source, "skipping unreadable entry");
        self.skipped.push(SubtreeAccessError { path, source });
    }

    /// Read one directory, queue its entry and its files, stack its subdirectories.
    fn scan(&mut self, dir: PathBuf) {
        let read = match fs::read_dir(&dir) {
            Ok(r) => r,
            Err(e) => {
                self.skip(dir, e);
                return;
            }
        };

        let mut entries = Vec::new();
        for entry in read {
            match entry {
                Ok(e) => entries.push(e),
                Err(e) => self.skip(dir.clone(), e),
            }
        }
        if self.sort_entries {
            entries.sort_by_key(|a| a.file_name());
        }

        let mut subdirs = Vec::new();
        let mut files = Vec::new();
        for entry in entries {
            let path = entry.path();
            let file_type = match entry.file_type() {
                Ok(t) => t,
                Err(e) => {
                    self.skip(path, e);
                    continue;
                }
            };

            // Skip symlinks to prevent loops and escaping the root
            if file_type.is_symlink() {
                trace!(path = %path.display(), "skipping symlink");
                continue;
            }

            if file_type.is_dir() {
                subdirs.push(path);
                continue;
            }

            // A file without metadata still gets a descriptor; only its size is unknown
            let len = match entry.metadata() {
                Ok(meta) => Some(meta.len()),
                Err(e) => {
                    self.skip(path.clone(), e);
                    None
                }
            };
            files.push(WalkEntry {
                path,
                kind: EntryKind::File,
                len,
            });
        }

        self.pending.push_back(WalkEntry {
            path: dir,
            kind: EntryKind::Directory,
            len: None,
        });
        self.pending.extend(files);
        // Reverse so the first subdirectory is scanned next
        self.stack.extend(subdirs.into_iter().rev());
    }
}

impl Iterator for Walk {
    type Item = WalkEntry;

    fn next(&mut self) -> Option<WalkEntry> {
        loop {
            if let Some(entry) = self.pending.pop_front() {
                return Some(entry);
            }
            let dir = self.stack.pop()?;
            self.scan(dir);
        }
    }
}
