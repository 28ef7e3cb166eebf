//! Error types for snapshotting and reading back directory trees

use std::io;
use std::path::PathBuf;

/// Errors surfaced to callers of the snapshot and reader APIs.
///
/// Traversal problems inside the tree (an unreadable subdirectory, an entry
/// that vanished mid-walk) are not represented here: the walker skips them and
/// records a [`SubtreeAccessError`] instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The root handed to the walker does not exist.
    #[error("cannot access '{}': No such file or directory", .path.display())]
    PathNotFound { path: PathBuf },

    /// The root exists but is not a directory.
    #[error("'{}' is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    /// Writing one of the snapshot files or the descriptor log failed.
    #[error("failed to write '{}': {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output directory is the walked root or lies below it, so the walk
    /// would pick up its own log and snapshot files.
    #[error("output directory '{}' is inside '{}'", .output.display(), .root.display())]
    OutputInsideRoot { output: PathBuf, root: PathBuf },

    /// A persisted snapshot could not be opened or read.
    #[error("failed to read '{}': {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A persisted snapshot does not match the record schema.
    #[error("malformed {format} data in '{}': {reason}", .path.display())]
    MalformedPersistedData {
        path: PathBuf,
        format: &'static str,
        reason: String,
    },

    /// Records could not be encoded into the given format.
    #[error("failed to encode {format}: {reason}")]
    Encode { format: &'static str, reason: String },

    /// No reader is registered for the file's extension.
    #[error("unknown snapshot format for '{}'", .path.display())]
    UnknownFormat { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, Error>;

/// A text field that does not parse back into a typed record value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordParseError {
    #[error("unknown entry type '{0}'")]
    UnknownKind(String),
    #[error("invalid size '{0}'")]
    InvalidSize(String),
}

/// A subdirectory or entry that could not be read during a walk.
///
/// Recorded by the walker and logged as a warning; never fatal. An unreadable
/// subdirectory is left out of the walk, while a file whose metadata failed is
/// still yielded without a length.
#[derive(Debug, thiserror::Error)]
#[error("skipped '{}': {source}", .path.display())]
pub struct SubtreeAccessError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}
