//! slotfs-types: pure data types shared by every slotfs crate.
//!
//! Nothing in here touches the entry table itself. The kernel crate owns the
//! table; this crate owns the vocabulary used to talk about it:
//!
//! - **StoreError**: the two failure codes a store primitive can return
//! - **EntryKind / EntryInfo**: what a live slot describes
//! - **Limits**: the capacities fixed when a table is built

mod entry;
mod error;
mod limits;

pub use entry::{EntryInfo, EntryKind};
pub use error::{Result, StoreError};
pub use limits::{
    Limits, LimitsError, DEFAULT_CONTENT_BYTES, DEFAULT_NAME_BYTES, DEFAULT_SLOTS,
};
