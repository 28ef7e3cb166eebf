//! Persisted outputs of a walk
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `records` - `SizeRecord` and the text-only `CsvRecord`
//! - `format` - `RecordWriter` / `RecordReader` capability shared by the formats
//! - `json`, `csv_format`, `binary` - the three snapshot formats
//! - `snapshot` - writing all three files and reading them back
//! - `log` - descriptor log lines

mod binary;
mod config;
mod csv_format;
mod format;
mod json;
mod log;
mod records;
mod snapshot;

pub use binary::BinaryFormat;
pub use config::OutputConfig;
pub use csv_format::CsvFormat;
pub use format::{RecordReader, RecordWriter, SnapshotFormat, read_records, sibling_path, write_records};
pub use json::JsonFormat;
pub use log::{DescriptorLog, DescriptorSink, format_log_line};
pub use records::{CsvRecord, SizeRecord};
pub use snapshot::{SnapshotPaths, read_binary, read_csv, read_json, read_snapshot, write_snapshot};
