//! Output configuration types

use std::path::PathBuf;

/// Which outputs a run produces and where they go.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Directory for the log and snapshot files. Defaults to the root's parent.
    pub output_dir: Option<PathBuf>,
    pub write_log: bool,
    pub write_snapshot: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            write_log: true,
            write_snapshot: true,
        }
    }
}
