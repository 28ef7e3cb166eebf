//! Entry classification: turns walked paths into normalized descriptors

use std::fmt;
use std::path::Path;

use super::config::ExtensionSplit;

/// Normalized description of one directory or file in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    /// File name without its extension, or the directory's base name.
    pub object_name: String,
    /// Present only for files whose name splits into two non-empty parts.
    pub extension: Option<String>,
    pub is_directory: bool,
    pub parent_path: String,
}

impl Descriptor {
    /// Describe a directory by its own path.
    pub fn for_directory(path: &Path) -> Self {
        Self {
            object_name: base_name(path),
            extension: None,
            is_directory: true,
            parent_path: parent_string(path),
        }
    }

    /// Describe a file named `file_name` that lives in `parent`.
    pub fn for_file(parent: &Path, file_name: &str, split: ExtensionSplit) -> Self {
        let (object_name, extension) = split_file_name(file_name, split);
        Self {
            object_name,
            extension,
            is_directory: false,
            parent_path: parent.to_string_lossy().to_string(),
        }
    }

    /// Describe a file by its full path.
    pub fn for_file_path(path: &Path, split: ExtensionSplit) -> Self {
        let parent = path.parent().unwrap_or_else(|| Path::new(""));
        Self::for_file(parent, &base_name(path), split)
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "object_name={}, extension={}, is_directory={}, parent_path={}",
            self.object_name,
            self.extension.as_deref().unwrap_or("None"),
            self.is_directory,
            self.parent_path
        )
    }
}

/// Split a file name into `(object_name, extension)` under the given rule.
///
/// An empty extension is never produced: names like `.bashrc` or `notes.`
/// come back whole with no extension.
pub fn split_file_name(file_name: &str, split: ExtensionSplit) -> (String, Option<String>) {
    match split {
        ExtensionSplit::LastDot => match file_name.rsplit_once('.') {
            Some((name, ext)) if !name.is_empty() && !ext.is_empty() => {
                (name.to_string(), Some(ext.to_string()))
            }
            _ => (file_name.to_string(), None),
        },
        ExtensionSplit::FirstDotLegacy => match file_name.split_once('.') {
            Some((head, rest)) => {
                let extension = (!head.is_empty()).then(|| head.to_string());
                (rest.to_string(), extension)
            }
            None => (file_name.to_string(), None),
        },
    }
}

/// Last path component, falling back to the whole path for roots like `/`.
pub(crate) fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

fn parent_string(path: &Path) -> String {
    path.parent()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_default()
}
