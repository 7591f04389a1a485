//! slotfs-kernel: the core of slotfs.
//!
//! This crate provides:
//!
//! - **vfs**: the fixed-capacity [`EntryTable`], its path resolver, and the
//!   [`SharedTable`] handle for use from several contexts
//! - **bootstrap**: the start-up directories and synthetic system files
//! - **tools**: file-management commands (`mkdir`, `rm`, `mv`, `ls`, ...)
//!   that resolve user paths and enforce policy the store leaves out
//! - **kernel**: a [`Kernel`] that owns a table and dispatches command lines
//! - **config**: TOML configuration for limits, boot, and system values

pub mod bootstrap;
pub mod config;
pub mod kernel;
pub mod result;
pub mod tools;
pub mod vfs;

pub use bootstrap::{BootSummary, SystemInfo};
pub use config::{ConfigError, KernelConfig};
pub use kernel::Kernel;
pub use result::ExecResult;
pub use vfs::{EntryTable, SharedTable};

pub use slotfs_types::{EntryInfo, EntryKind, Limits, StoreError};
