//! The entry table: a fixed set of slots addressed by (parent, name).
//!
//! Every primitive is a linear scan over the slots. Slot storage and each
//! slot's content buffer are allocated when the table is built; after that
//! no operation allocates except [`EntryTable::read_to_vec`] and
//! [`EntryTable::stat`], which return owned copies.

use slotfs_types::{EntryInfo, EntryKind, Limits, Result, StoreError};
use tracing::{debug, trace, warn};

use super::path::{truncate_str, ResolvedPath};

/// One position in the table.
#[derive(Debug)]
struct Slot {
    live: bool,
    kind: EntryKind,
    name: String,
    parent: String,
    content: Box<[u8]>,
    len: usize,
}

impl Slot {
    fn vacant(limits: &Limits) -> Self {
        Self {
            live: false,
            kind: EntryKind::File,
            name: String::with_capacity(limits.name_bytes),
            parent: String::with_capacity(limits.name_bytes),
            content: vec![0; limits.content_bytes].into_boxed_slice(),
            len: 0,
        }
    }

    fn clear(&mut self) {
        self.live = false;
        self.kind = EntryKind::File;
        self.name.clear();
        self.parent.clear();
        self.len = 0;
    }

    fn matches(&self, key: &ResolvedPath<'_>) -> bool {
        self.live && self.name == key.name && self.parent == key.parent
    }

    fn occupy(&mut self, key: &ResolvedPath<'_>, kind: EntryKind) {
        self.live = true;
        self.kind = kind;
        self.name.clear();
        self.name.push_str(key.name);
        self.parent.clear();
        self.parent.push_str(key.parent);
        self.len = 0;
    }

    /// Copy as much of `bytes` as fits; returns the stored length.
    fn fill(&mut self, bytes: &[u8]) -> usize {
        let n = bytes.len().min(self.content.len());
        self.content[..n].copy_from_slice(&bytes[..n]);
        self.len = n;
        n
    }

    fn info(&self) -> EntryInfo {
        EntryInfo {
            name: self.name.clone(),
            parent: self.parent.clone(),
            kind: self.kind,
            len: self.len,
        }
    }
}

/// Fixed-capacity flat table of file and directory entries.
///
/// At most one live entry exists per (parent, name). Directories are plain
/// entries with the directory flag set; children only share a `parent`
/// string with them, so deleting a directory leaves its children in place.
#[derive(Debug)]
pub struct EntryTable {
    slots: Box<[Slot]>,
    limits: Limits,
    live: usize,
}

impl Default for EntryTable {
    fn default() -> Self {
        Self::new(Limits::default())
    }
}

impl EntryTable {
    /// Build an empty table with every slot dead.
    pub fn new(limits: Limits) -> Self {
        let slots = (0..limits.slots).map(|_| Slot::vacant(&limits)).collect();
        Self {
            slots,
            limits,
            live: 0,
        }
    }

    /// Mark every slot dead. Equivalent to a full wipe.
    pub fn initialize(&mut self) {
        for slot in self.slots.iter_mut() {
            slot.clear();
        }
        self.live = 0;
        debug!(slots = self.slots.len(), "entry table initialized");
    }

    /// Create a file, or overwrite the content of whatever entry already
    /// lives at `path`.
    ///
    /// Stores `min(size, content.len(), C)` bytes. Anything beyond the
    /// content capacity is dropped without signaling. Fails only when the
    /// path is new and no dead slot is left, in which case nothing changes.
    pub fn create(&mut self, path: &str, content: &[u8], size: usize) -> Result<()> {
        let bytes = &content[..size.min(content.len())];
        let key = self.key(path);
        trace!(path, size = bytes.len(), "create");

        let index = match self.find(&key) {
            Some(index) => index,
            None => {
                let Some(index) = self.find_vacant() else {
                    warn!(path, capacity = self.slots.len(), "create: table full");
                    return Err(StoreError::capacity_exceeded(path, self.slots.len()));
                };
                self.slots[index].occupy(&key, EntryKind::File);
                self.live += 1;
                index
            }
        };

        let stored = self.slots[index].fill(bytes);
        if stored < bytes.len() {
            debug!(path, requested = bytes.len(), stored, "create: content truncated");
        }
        Ok(())
    }

    /// [`create`](Self::create) with the whole of `content`.
    pub fn write(&mut self, path: &str, content: &[u8]) -> Result<()> {
        self.create(path, content, content.len())
    }

    /// Copy up to `buffer.len()` bytes of the entry at `path` into `buffer`.
    ///
    /// The returned count may be less than the stored length when the
    /// buffer is short. Directories read as empty.
    pub fn read(&self, path: &str, buffer: &mut [u8]) -> Result<usize> {
        let key = self.key(path);
        trace!(path, max = buffer.len(), "read");
        let index = self.find(&key).ok_or_else(|| StoreError::not_found(path))?;
        let slot = &self.slots[index];
        let n = slot.len.min(buffer.len());
        buffer[..n].copy_from_slice(&slot.content[..n]);
        Ok(n)
    }

    /// The full stored content of the entry at `path`.
    pub fn read_to_vec(&self, path: &str) -> Result<Vec<u8>> {
        let key = self.key(path);
        let index = self.find(&key).ok_or_else(|| StoreError::not_found(path))?;
        let slot = &self.slots[index];
        Ok(slot.content[..slot.len].to_vec())
    }

    /// Mark the entry at `path` dead, file or directory alike.
    pub fn delete(&mut self, path: &str) -> Result<()> {
        let key = self.key(path);
        trace!(path, "delete");
        let index = self.find(&key).ok_or_else(|| StoreError::not_found(path))?;
        self.slots[index].clear();
        self.live -= 1;
        Ok(())
    }

    pub fn exists(&self, path: &str) -> bool {
        let key = self.key(path);
        self.find(&key).is_some()
    }

    /// False when nothing lives at `path`.
    pub fn is_directory(&self, path: &str) -> bool {
        let key = self.key(path);
        self.find(&key)
            .is_some_and(|index| self.slots[index].kind.is_directory())
    }

    /// Create a directory entry at `path`.
    ///
    /// Idempotent: if any entry already lives at `path`, file or directory,
    /// it is left untouched and the call succeeds.
    pub fn make_directory(&mut self, path: &str) -> Result<()> {
        let key = self.key(path);
        trace!(path, "make_directory");
        if self.find(&key).is_some() {
            return Ok(());
        }
        let Some(index) = self.find_vacant() else {
            warn!(path, capacity = self.slots.len(), "make_directory: table full");
            return Err(StoreError::capacity_exceeded(path, self.slots.len()));
        };
        self.slots[index].occupy(&key, EntryKind::Directory);
        self.live += 1;
        Ok(())
    }

    /// Call `visit` with the name of every live entry whose parent equals
    /// `parent` exactly, in slot order.
    pub fn list_directory(&self, parent: &str, mut visit: impl FnMut(&str)) {
        let parent = truncate_str(parent, self.limits.name_bytes);
        trace!(parent, "list_directory");
        for slot in self.slots.iter() {
            if slot.live && slot.parent == parent {
                visit(&slot.name);
            }
        }
    }

    /// Snapshot of the entry at `path`, if one is live.
    pub fn stat(&self, path: &str) -> Option<EntryInfo> {
        let key = self.key(path);
        self.find(&key).map(|index| self.slots[index].info())
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_full(&self) -> bool {
        self.live == self.slots.len()
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    fn key<'a>(&self, path: &'a str) -> ResolvedPath<'a> {
        if ResolvedPath::exceeds(path, self.limits.name_bytes) {
            debug!(path, max = self.limits.name_bytes, "path component truncated");
        }
        ResolvedPath::resolve(path, self.limits.name_bytes)
    }

    fn find(&self, key: &ResolvedPath<'_>) -> Option<usize> {
        self.slots.iter().position(|slot| slot.matches(key))
    }

    fn find_vacant(&self) -> Option<usize> {
        self.slots.iter().position(|slot| !slot.live)
    }
}
