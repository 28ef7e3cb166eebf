//! Directory tree walking and entry classification
//!
//! - `TreeWalker` / `Walk`: lazy top-down traversal shared by every flow
//! - `Descriptor`: classifier output for one walked entry
//! - `directory_size`: aggregate size of everything under a directory

mod config;
mod descriptor;
mod size;
mod walker;

pub use config::{ExtensionSplit, WalkerConfig};
pub use descriptor::{Descriptor, split_file_name};
pub use size::{directory_size, format_size};
pub use walker::{EntryKind, TreeWalker, Walk, WalkEntry};
