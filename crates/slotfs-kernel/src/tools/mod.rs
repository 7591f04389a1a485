//! Tools: the file-management commands built on the store.

mod args;
pub mod builtin;
mod context;
mod registry;
mod traits;

pub use args::ToolArgs;
pub use builtin::register_builtins;
pub use context::{child_path, normalize, ExecContext};
pub use registry::ToolRegistry;
pub use traits::{Tool, ToolSchema};
