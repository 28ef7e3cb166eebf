//! Binary snapshot format (bincode)

use crate::error::{Error, Result};

use super::format::{RecordReader, RecordWriter, SnapshotFormat};
use super::records::SizeRecord;

/// Full-fidelity bincode encoding of the record vector.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryFormat;

impl SnapshotFormat for BinaryFormat {
    fn name(&self) -> &'static str {
        "binary"
    }

    fn extension(&self) -> &'static str {
        "bin"
    }
}

impl RecordWriter for BinaryFormat {
    fn encode(&self, records: &[SizeRecord]) -> Result<Vec<u8>> {
        bincode::serialize(records).map_err(|e| Error::Encode {
            format: self.name(),
            reason: e.to_string(),
        })
    }
}

impl RecordReader for BinaryFormat {
    type Record = SizeRecord;

    fn decode(&self, bytes: &[u8]) -> std::result::Result<Vec<SizeRecord>, String> {
        bincode::deserialize(bytes).map_err(|e| e.to_string())
    }
}
