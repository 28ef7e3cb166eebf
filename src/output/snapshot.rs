//! Writing and reading the three-file snapshot

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

use super::binary::BinaryFormat;
use super::csv_format::CsvFormat;
use super::format::{read_records, write_records};
use super::json::JsonFormat;
use super::records::{CsvRecord, SizeRecord};

/// Files produced by one [`write_snapshot`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotPaths {
    pub json: PathBuf,
    pub csv: PathBuf,
    pub binary: PathBuf,
}

impl SnapshotPaths {
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        [self.json.as_path(), self.csv.as_path(), self.binary.as_path()].into_iter()
    }
}

/// Write `records` to `<base>.json`, `<base>.csv` and `<base>.bin`, in that order.
///
/// Stops at the first failure. Files already written are left in place.
pub fn write_snapshot(records: &[SizeRecord], base: &Path) -> Result<SnapshotPaths> {
    Ok(SnapshotPaths {
        json: write_records(&JsonFormat, records, base)?,
        csv: write_records(&CsvFormat, records, base)?,
        binary: write_records(&BinaryFormat, records, base)?,
    })
}

pub fn read_json(path: &Path) -> Result<Vec<SizeRecord>> {
    read_records(&JsonFormat, path)
}

/// Read the CSV snapshot. Fields come back as text; see [`CsvRecord`].
pub fn read_csv(path: &Path) -> Result<Vec<CsvRecord>> {
    read_records(&CsvFormat, path)
}

pub fn read_binary(path: &Path) -> Result<Vec<SizeRecord>> {
    read_records(&BinaryFormat, path)
}

/// Read any snapshot file, picking the format from its extension.
///
/// CSV rows are converted to typed records; a row that does not convert makes
/// the whole file malformed.
pub fn read_snapshot(path: &Path) -> Result<Vec<SizeRecord>> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    match extension {
        "json" => read_json(path),
        "bin" => read_binary(path),
        "csv" => read_csv(path)?
            .into_iter()
            .map(SizeRecord::try_from)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| Error::MalformedPersistedData {
                path: path.to_path_buf(),
                format: "csv",
                reason: e.to_string(),
            }),
        _ => Err(Error::UnknownFormat {
            path: path.to_path_buf(),
        }),
    }
}
