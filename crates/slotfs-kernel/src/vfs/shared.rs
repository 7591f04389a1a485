//! Mutex-guarded handle for using one table from several contexts.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use slotfs_types::{EntryInfo, Result};

use super::table::EntryTable;

/// Cloneable handle to a single [`EntryTable`] behind one lock.
///
/// Each primitive holds the lock for its whole duration, so create's
/// lookup-then-insert cannot interleave with another caller. Use
/// [`SharedTable::with`] when a caller needs several primitives to run as
/// one step (read-then-write, check-then-delete).
#[derive(Debug, Clone, Default)]
pub struct SharedTable {
    inner: Arc<Mutex<EntryTable>>,
}

impl SharedTable {
    pub fn new(table: EntryTable) -> Self {
        Self {
            inner: Arc::new(Mutex::new(table)),
        }
    }

    // Mutations never leave a slot half-written across a panic point, so a
    // poisoned lock still guards a consistent table.
    fn lock(&self) -> MutexGuard<'_, EntryTable> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with exclusive access to the table.
    pub fn with<R>(&self, f: impl FnOnce(&mut EntryTable) -> R) -> R {
        f(&mut *self.lock())
    }

    pub fn initialize(&self) {
        self.lock().initialize();
    }

    pub fn create(&self, path: &str, content: &[u8], size: usize) -> Result<()> {
        self.lock().create(path, content, size)
    }

    pub fn write(&self, path: &str, content: &[u8]) -> Result<()> {
        self.lock().write(path, content)
    }

    pub fn read(&self, path: &str, buffer: &mut [u8]) -> Result<usize> {
        self.lock().read(path, buffer)
    }

    pub fn read_to_vec(&self, path: &str) -> Result<Vec<u8>> {
        self.lock().read_to_vec(path)
    }

    pub fn delete(&self, path: &str) -> Result<()> {
        self.lock().delete(path)
    }

    pub fn exists(&self, path: &str) -> bool {
        self.lock().exists(path)
    }

    pub fn is_directory(&self, path: &str) -> bool {
        self.lock().is_directory(path)
    }

    pub fn make_directory(&self, path: &str) -> Result<()> {
        self.lock().make_directory(path)
    }

    /// Visits while holding the lock; `visit` must not call back into this
    /// handle or it will deadlock.
    pub fn list_directory(&self, parent: &str, visit: impl FnMut(&str)) {
        self.lock().list_directory(parent, visit);
    }

    /// Names under `parent`, collected so the caller can use the store
    /// while walking them.
    pub fn list_names(&self, parent: &str) -> Vec<String> {
        let mut names = Vec::new();
        self.lock()
            .list_directory(parent, |name| names.push(name.to_string()));
        names
    }

    pub fn stat(&self, path: &str) -> Option<EntryInfo> {
        self.lock().stat(path)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }
}

impl From<EntryTable> for SharedTable {
    fn from(table: EntryTable) -> Self {
        Self::new(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotfs_types::Limits;
    use std::thread;

    #[test]
    fn clones_share_one_table() {
        let a = SharedTable::default();
        let b = a.clone();
        a.write("/f", b"hi").unwrap();
        assert!(b.exists("/f"));
        assert_eq!(b.read_to_vec("/f").unwrap(), b"hi");
    }

    #[test]
    fn concurrent_creates_of_one_path_make_one_entry() {
        let shared = SharedTable::new(EntryTable::new(Limits::new(4, 16, 16)));
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || {
                    shared.write("/same", format!("{i}").as_bytes()).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(shared.len(), 1);
    }

    #[test]
    fn concurrent_distinct_creates_respect_capacity() {
        let shared = SharedTable::new(EntryTable::new(Limits::new(5, 16, 16)));
        let handles: Vec<_> = (0..10)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || shared.write(&format!("/f{i}"), b"x").is_ok())
            })
            .collect();
        let ok = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(ok, 5);
        assert_eq!(shared.len(), 5);
    }

    #[test]
    fn with_runs_compound_step() {
        let shared = SharedTable::default();
        shared.write("/src", b"payload").unwrap();
        let moved = shared.with(|table| -> slotfs_types::Result<()> {
            let data = table.read_to_vec("/src")?;
            table.write("/dst", &data)?;
            table.delete("/src")
        });
        assert!(moved.is_ok());
        assert!(!shared.exists("/src"));
        assert_eq!(shared.read_to_vec("/dst").unwrap(), b"payload");
    }

    #[test]
    fn primitives_through_handle() {
        let shared = SharedTable::new(EntryTable::new(Limits::new(3, 8, 16)));
        assert_eq!(shared.capacity(), 3);

        shared.create("/etc/hostname", b"box\nextra", 4).unwrap();
        let mut buffer = [0u8; 16];
        let n = shared.read("/etc/hostname", &mut buffer).unwrap();
        assert_eq!(&buffer[..n], b"box\n");

        let mut names = Vec::new();
        shared.list_directory("/etc", |name| names.push(name.to_string()));
        assert_eq!(names, vec!["hostname"]);

        shared.initialize();
        assert!(shared.is_empty());
        let err = shared.read("/etc/hostname", &mut buffer).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn list_names_allows_reentry() {
        let shared = SharedTable::default();
        shared.make_directory("/d").unwrap();
        shared.write("/f", b"").unwrap();
        let kinds: Vec<bool> = shared
            .list_names("/")
            .iter()
            .map(|name| shared.is_directory(&format!("/{name}")))
            .collect();
        assert_eq!(kinds, vec![true, false]);
    }
}
