//! Serializable record types for persisted snapshots

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RecordParseError;
use crate::tree::{EntryKind, WalkEntry, directory_size};

/// Size of one walked entry, as persisted in every snapshot format.
///
/// Directory sizes are the total of all files nested below them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeRecord {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub size: u64,
}

impl SizeRecord {
    pub fn new(path: impl Into<String>, kind: EntryKind, size: u64) -> Self {
        Self {
            path: path.into(),
            kind,
            size,
        }
    }

    /// Build the record for a walked entry, aggregating directory sizes.
    ///
    /// Returns `None` for a file whose length could not be read.
    pub fn from_entry(entry: &WalkEntry) -> Option<Self> {
        let size = match entry.kind {
            EntryKind::Directory => directory_size(&entry.path),
            EntryKind::File => entry.len?,
        };
        Some(Self::new(entry.path.to_string_lossy(), entry.kind, size))
    }
}

/// A row read back from the CSV snapshot.
///
/// CSV carries no types, so every field comes back as text. Use
/// `SizeRecord::try_from` to get typed values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvRecord {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub size: String,
}

impl From<&SizeRecord> for CsvRecord {
    fn from(record: &SizeRecord) -> Self {
        Self {
            path: record.path.clone(),
            kind: record.kind.as_str().to_string(),
            size: record.size.to_string(),
        }
    }
}

impl TryFrom<CsvRecord> for SizeRecord {
    type Error = RecordParseError;

    fn try_from(row: CsvRecord) -> Result<Self, Self::Error> {
        let kind = row.kind.parse()?;
        let size = row
            .size
            .trim()
            .parse()
            .map_err(|_| RecordParseError::InvalidSize(row.size.clone()))?;
        Ok(Self {
            path: row.path,
            kind,
            size,
        })
    }
}

impl FromStr for EntryKind {
    type Err = RecordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file" => Ok(EntryKind::File),
            "directory" => Ok(EntryKind::Directory),
            other => Err(RecordParseError::UnknownKind(other.to_string())),
        }
    }
}
