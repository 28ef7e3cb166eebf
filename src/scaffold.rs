//! Demo tree generation for trying the tool on a known layout

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the directory created by [`create_demo_tree`].
pub const DEMO_CATALOG: &str = "file_catalog";

/// Write `size` zero bytes to `dir/name`, creating `dir` if needed.
pub fn write_zeroed(dir: &Path, name: &str, size: usize) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(name);
    fs::write(&path, vec![0u8; size])?;
    Ok(path)
}

/// Build the demo layout under `base` and return the catalog directory.
///
/// ```text
/// file_catalog/
/// ├── file_1            220 bytes
/// ├── file_2/file_2    1400 bytes
/// └── file_3/
///     ├── file_3        520 bytes
///     └── file_4        440 bytes
/// ```
pub fn create_demo_tree(base: &Path) -> io::Result<PathBuf> {
    let catalog = base.join(DEMO_CATALOG);
    write_zeroed(&catalog, "file_1", 220)?;
    write_zeroed(&catalog.join("file_2"), "file_2", 1400)?;
    write_zeroed(&catalog.join("file_3"), "file_3", 520)?;
    write_zeroed(&catalog.join("file_3"), "file_4", 440)?;
    Ok(catalog)
}
