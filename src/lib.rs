//! dirsnap - snapshot a directory tree as descriptors, size records and logs

pub mod collect;
pub mod error;
pub mod output;
pub mod scaffold;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use collect::{
    WalkSummary, collect_size_records, describe, log_tree, output_inside_root, snapshot_base,
};
pub use error::{Error, RecordParseError, Result, SubtreeAccessError};
pub use output::{
    CsvRecord, DescriptorLog, DescriptorSink, OutputConfig, SizeRecord, SnapshotPaths, read_binary,
    read_csv, read_json, read_snapshot, write_snapshot,
};
pub use tree::{
    Descriptor, EntryKind, ExtensionSplit, TreeWalker, Walk, WalkEntry, WalkerConfig, directory_size,
};
