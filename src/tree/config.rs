//! Configuration types for tree walkers

/// How a file name is split into object name and extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExtensionSplit {
    /// `archive.tar.gz` -> name `archive.tar`, extension `gz`.
    #[default]
    LastDot,
    /// `archive.tar.gz` -> extension `archive`, name `tar.gz`.
    ///
    /// Kept for parity with snapshots produced by the older tooling, which
    /// stored the segment before the first dot in the extension slot.
    FirstDotLegacy,
}

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Sort sibling entries by file name. When off, entries come out in
    /// whatever order the filesystem enumerates them.
    pub sort_entries: bool,
    pub split: ExtensionSplit,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            sort_entries: true,
            split: ExtensionSplit::LastDot,
        }
    }
}
