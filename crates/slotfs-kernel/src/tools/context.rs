//! Execution context for tools.

use crate::vfs::{EntryTable, SharedTable, ROOT};

/// Execution context passed to tools.
///
/// Owns a handle to the store and the current working directory. Tools
/// turn user arguments into canonical absolute paths here before touching
/// the store, which does no resolution of its own.
#[derive(Debug, Clone)]
pub struct ExecContext {
    /// The entry table.
    pub store: SharedTable,
    /// Current working directory, always canonical and absolute.
    pub cwd: String,
}

impl ExecContext {
    /// Create a context rooted at `/`.
    pub fn new(store: SharedTable) -> Self {
        Self::with_cwd(store, ROOT)
    }

    pub fn with_cwd(store: SharedTable, cwd: &str) -> Self {
        Self {
            store,
            cwd: normalize(cwd),
        }
    }

    /// Resolve a path relative to cwd into a canonical absolute path.
    pub fn resolve_path(&self, path: &str) -> String {
        if path.starts_with('/') {
            normalize(path)
        } else {
            normalize(&format!("{}/{}", self.cwd, path))
        }
    }

    /// Change the current working directory.
    pub fn set_cwd(&mut self, path: String) {
        self.cwd = path;
    }

    pub fn exists(&self, path: &str) -> bool {
        self.store.with(|table| exists_in(table, path))
    }

    pub fn is_dir(&self, path: &str) -> bool {
        self.store.with(|table| is_dir_in(table, path))
    }
}

/// Fold `.`, `..`, repeated and trailing slashes. `..` at root stays at root.
pub fn normalize(path: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            part => parts.push(part),
        }
    }
    if parts.is_empty() {
        ROOT.to_string()
    } else {
        format!("/{}", parts.join("/"))
    }
}

/// Path of `name` inside directory `dir`.
pub fn child_path(dir: &str, name: &str) -> String {
    if dir == ROOT {
        format!("/{name}")
    } else {
        format!("{dir}/{name}")
    }
}

/// Root has no entry of its own but always exists.
pub(crate) fn exists_in(table: &EntryTable, path: &str) -> bool {
    path == ROOT || table.exists(path)
}

pub(crate) fn is_dir_in(table: &EntryTable, path: &str) -> bool {
    path == ROOT || table.is_directory(path)
}

pub(crate) fn has_children(table: &EntryTable, path: &str) -> bool {
    let mut any = false;
    table.list_directory(path, |_| any = true);
    any
}
