//! JSON snapshot format

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{Error, Result};

use super::format::{RecordReader, RecordWriter, SnapshotFormat};
use super::records::SizeRecord;

/// Pretty-printed JSON array, 4-space indentation.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl SnapshotFormat for JsonFormat {
    fn name(&self) -> &'static str {
        "json"
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}

impl RecordWriter for JsonFormat {
    fn encode(&self, records: &[SizeRecord]) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        records.serialize(&mut ser).map_err(|e| Error::Encode {
            format: self.name(),
            reason: e.to_string(),
        })?;
        Ok(buf)
    }
}

impl RecordReader for JsonFormat {
    type Record = SizeRecord;

    fn decode(&self, bytes: &[u8]) -> std::result::Result<Vec<SizeRecord>, String> {
        serde_json::from_slice(bytes).map_err(|e| e.to_string())
    }
}
