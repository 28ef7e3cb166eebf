//! Encode/decode capability shared by every snapshot format

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

use super::records::SizeRecord;

/// Identity of a persisted format.
pub trait SnapshotFormat {
    /// Short name used in error messages.
    fn name(&self) -> &'static str;
    /// File extension, without the leading dot.
    fn extension(&self) -> &'static str;
}

/// Stateless encoder from the canonical record sequence to file bytes.
pub trait RecordWriter: SnapshotFormat {
    fn encode(&self, records: &[SizeRecord]) -> Result<Vec<u8>>;
}

/// Stateless decoder from file bytes back to records.
///
/// `Record` is the closest in-memory shape the format can reproduce.
pub trait RecordReader: SnapshotFormat {
    type Record;

    /// Decode the whole input. Returns the reason on schema mismatch; callers
    /// never see a partially decoded sequence.
    fn decode(&self, bytes: &[u8]) -> std::result::Result<Vec<Self::Record>, String>;
}

/// `<base>.<extension>`, keeping any dots already in the base name.
pub fn sibling_path(base: &Path, extension: &str) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

/// Encode `records` and write them next to `base`. Returns the written path.
pub fn write_records(format: &dyn RecordWriter, records: &[SizeRecord], base: &Path) -> Result<PathBuf> {
    let path = sibling_path(base, format.extension());
    let bytes = format.encode(records)?;
    fs::write(&path, &bytes).map_err(|source| Error::OutputWrite {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), format = format.name(), records = records.len(), "wrote snapshot file");
    Ok(path)
}

/// Read `path` and decode it with `format`.
pub fn read_records<F: RecordReader>(format: &F, path: &Path) -> Result<Vec<F::Record>> {
    let bytes = fs::read(path).map_err(|source| Error::InputRead {
        path: path.to_path_buf(),
        source,
    })?;
    format
        .decode(&bytes)
        .map_err(|reason| Error::MalformedPersistedData {
            path: path.to_path_buf(),
            format: format.name(),
            reason,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sibling_path_keeps_dotted_base() {
        assert_eq!(
            sibling_path(Path::new("/out/my.dir"), "json"),
            PathBuf::from("/out/my.dir.json")
        );
        assert_eq!(sibling_path(Path::new("tree"), "bin"), PathBuf::from("tree.bin"));
    }
}
