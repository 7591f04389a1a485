//! Path resolution: full path → (parent, name).
//!
//! The resolver splits on the last '/' and nothing more. It does not fold
//! `.`, `..`, repeated slashes or trailing slashes; callers hand the store
//! canonical absolute paths.

/// Parent used for root-level entries and slash-less paths.
pub const ROOT: &str = "/";

/// A path split into its containing directory and leaf name.
///
/// Borrows from the input, so resolving never allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPath<'a> {
    pub parent: &'a str,
    pub name: &'a str,
}

impl<'a> ResolvedPath<'a> {
    /// Split `path` at its last '/'.
    ///
    /// ```
    /// use slotfs_kernel::vfs::ResolvedPath;
    ///
    /// let p = ResolvedPath::split("/etc/hostname");
    /// assert_eq!((p.parent, p.name), ("/etc", "hostname"));
    ///
    /// let p = ResolvedPath::split("notes.txt");
    /// assert_eq!((p.parent, p.name), ("/", "notes.txt"));
    /// ```
    pub fn split(path: &'a str) -> Self {
        match path.rfind('/') {
            None => Self {
                parent: ROOT,
                name: path,
            },
            Some(0) => Self {
                parent: ROOT,
                name: &path[1..],
            },
            Some(slash) => Self {
                parent: &path[..slash],
                name: &path[slash + 1..],
            },
        }
    }

    /// Split and clamp both halves to `max_bytes`.
    pub fn resolve(path: &'a str, max_bytes: usize) -> Self {
        let split = Self::split(path);
        Self {
            parent: truncate_str(split.parent, max_bytes),
            name: truncate_str(split.name, max_bytes),
        }
    }

    /// True if clamping to `max_bytes` would cut either half.
    pub fn exceeds(path: &str, max_bytes: usize) -> bool {
        let split = ResolvedPath::split(path);
        split.parent.len() > max_bytes || split.name.len() > max_bytes
    }
}

/// Longest prefix of `s` that fits in `max_bytes` and ends on a char boundary.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
