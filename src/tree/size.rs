//! Directory size aggregation

use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

/// Total byte size of every file nested at any depth under `path`.
///
/// Directories contribute nothing themselves. Symlinks are neither followed
/// nor counted, and unreadable subtrees count as empty.
pub fn directory_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(e) => {
                debug!(error = %e, "size walk skipped an entry");
                None
            }
        })
        .filter(|e| {
            let file_type = e.file_type();
            !file_type.is_dir() && !file_type.is_symlink()
        })
        .filter_map(|e| e.metadata().ok())
        .map(|meta| meta.len())
        .sum()
}

/// Units above plain bytes, each 1024 times the previous.
const SIZE_UNITS: [&str; 3] = ["K", "M", "G"];

/// Human-readable size for the CLI summary: `512B`, `1.5K`, `3.2M`, `2.0G`.
///
/// Sizes past the last unit stay in gigabytes.
pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{}B", bytes);
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < SIZE_UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1}{}", value, SIZE_UNITS[unit])
}
