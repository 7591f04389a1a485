//! Entry metadata types.

use serde::Serialize;

/// Kind of a live entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    pub fn is_directory(self) -> bool {
        matches!(self, Self::Directory)
    }

    /// Single-character marker used by long listings.
    pub fn marker(self) -> char {
        match self {
            Self::File => '-',
            Self::Directory => 'd',
        }
    }
}

/// A snapshot of one live entry.
///
/// Owned copy: the table never hands out references into its slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryInfo {
    /// Leaf name (never contains '/').
    pub name: String,
    /// Path of the containing directory.
    pub parent: String,
    /// File or directory.
    pub kind: EntryKind,
    /// Valid content bytes.
    pub len: usize,
}

impl EntryInfo {
    /// Full path of the entry, rebuilt from parent and name.
    pub fn path(&self) -> String {
        if self.parent.ends_with('/') {
            format!("{}{}", self.parent, self.name)
        } else {
            format!("{}/{}", self.parent, self.name)
        }
    }
}
