//! The two flows built on one walk: descriptor logging and size records

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::output::{DescriptorSink, SizeRecord};
use crate::tree::{Descriptor, EntryKind, TreeWalker, WalkEntry, WalkerConfig};

/// Counts from a finished descriptor walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub directories: usize,
    pub files: usize,
    /// Subtrees or entries skipped because they could not be read.
    pub skipped: usize,
}

impl WalkSummary {
    pub fn total(&self) -> usize {
        self.directories + self.files
    }
}

/// Classify one walked entry.
pub fn describe(entry: &WalkEntry, config: &WalkerConfig) -> Descriptor {
    match entry.kind {
        EntryKind::Directory => Descriptor::for_directory(&entry.path),
        EntryKind::File => Descriptor::for_file(entry.parent(), &entry.name(), config.split),
    }
}

/// Walk `root` and hand every descriptor to `sink`, in traversal order.
pub fn log_tree<S: DescriptorSink>(root: &Path, config: &WalkerConfig, sink: &mut S) -> Result<WalkSummary> {
    let walker = TreeWalker::new(config.clone());
    let mut walk = walker.walk(root)?;
    let mut summary = WalkSummary::default();

    for entry in walk.by_ref() {
        sink.emit(&describe(&entry, config))?;
        if entry.is_dir() {
            summary.directories += 1;
        } else {
            summary.files += 1;
        }
    }
    summary.skipped = walk.skipped().len();
    sink.finish()?;

    info!(
        root = %root.display(),
        directories = summary.directories,
        files = summary.files,
        skipped = summary.skipped,
        "descriptor walk finished"
    );
    Ok(summary)
}

/// Walk `root` and build one size record per entry, in traversal order.
pub fn collect_size_records(root: &Path, config: &WalkerConfig) -> Result<Vec<SizeRecord>> {
    let walker = TreeWalker::new(config.clone());
    let records: Vec<_> = walker
        .walk(root)?
        .filter_map(|e| SizeRecord::from_entry(&e))
        .collect();
    info!(root = %root.display(), records = records.len(), "size walk finished");
    Ok(records)
}

/// Base path shared by a root's log and snapshot files: `<dir>/<root name>`.
///
/// `dir` is `output_dir` when given, otherwise the root's parent.
pub fn snapshot_base(root: &Path, output_dir: Option<&Path>) -> PathBuf {
    let name = root
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "root".into());
    let dir = output_dir
        .map(Path::to_path_buf)
        .or_else(|| root.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    dir.join(name)
}

/// Whether `output_dir` resolves to `root` itself or a path below it.
///
/// `root` must already be canonical. `output_dir` need not exist: its deepest
/// existing ancestor is canonicalized and the missing components appended.
pub fn output_inside_root(root: &Path, output_dir: &Path) -> bool {
    let Ok(absolute) = std::path::absolute(output_dir) else {
        return false;
    };
    let mut existing = absolute.as_path();
    let mut missing = Vec::new();
    loop {
        if let Ok(resolved) = existing.canonicalize() {
            let full = missing.iter().rev().fold(resolved, |acc, name| acc.join(name));
            return full.starts_with(root);
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name);
                existing = parent;
            }
            _ => return false,
        }
    }
}
