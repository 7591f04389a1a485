//! Virtual file store for slotfs.
//!
//! - **EntryTable**: the fixed-capacity flat table of entries
//! - **SharedTable**: the same table behind a single lock
//! - **ResolvedPath**: splits a full path into (parent, name)
//!
//! # Design
//!
//! The namespace is flat. A directory is an entry with the directory flag
//! set, and an entry belongs to a directory only because its `parent`
//! string equals that directory's path:
//!
//! ```text
//! slot  parent   name       kind
//! 0     /        etc        d
//! 1     /etc     hostname   -
//! 2     /        tmp        d
//! ```
//!
//! Deleting slot 0 leaves slot 1 live and addressable.

mod path;
mod shared;
mod table;

pub use path::{truncate_str, ResolvedPath, ROOT};
pub use shared::SharedTable;
pub use table::EntryTable;
