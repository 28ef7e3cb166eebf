//! CSV snapshot format
//!
//! Rows read back as [`CsvRecord`], all text. Converting to typed
//! [`SizeRecord`]s is left to the caller.

use crate::error::{Error, Result};

use super::format::{RecordReader, RecordWriter, SnapshotFormat};
use super::records::{CsvRecord, SizeRecord};

const HEADER: [&str; 3] = ["path", "type", "size"];

/// Header row `path,type,size` followed by one row per record.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvFormat;

impl CsvFormat {
    fn encode_error(&self, e: impl ToString) -> Error {
        Error::Encode {
            format: self.name(),
            reason: e.to_string(),
        }
    }
}

impl SnapshotFormat for CsvFormat {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn extension(&self) -> &'static str {
        "csv"
    }
}

impl RecordWriter for CsvFormat {
    fn encode(&self, records: &[SizeRecord]) -> Result<Vec<u8>> {
        // Header written by hand so an empty snapshot still has one
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        wtr.write_record(HEADER).map_err(|e| self.encode_error(e))?;
        for record in records {
            wtr.serialize(CsvRecord::from(record))
                .map_err(|e| self.encode_error(e))?;
        }
        wtr.into_inner().map_err(|e| self.encode_error(e))
    }
}

impl RecordReader for CsvFormat {
    type Record = CsvRecord;

    fn decode(&self, bytes: &[u8]) -> std::result::Result<Vec<CsvRecord>, String> {
        let mut rdr = csv::Reader::from_reader(bytes);
        let headers = rdr.headers().map_err(|e| e.to_string())?;
        if headers.iter().ne(HEADER) {
            return Err(format!(
                "expected header '{}', found '{}'",
                HEADER.join(","),
                headers.iter().collect::<Vec<_>>().join(",")
            ));
        }
        rdr.deserialize()
            .collect::<std::result::Result<Vec<CsvRecord>, _>>()
            .map_err(|e| e.to_string())
    }
}
