//! rmdir: Remove empty directories.

use crate::result::ExecResult;
use crate::tools::context::{exists_in, has_children, is_dir_in};
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};
use crate::vfs::ROOT;

use super::finish;

/// Rmdir tool: remove directories that have no children.
pub struct Rmdir;

impl Tool for Rmdir {
    fn name(&self) -> &str {
        "rmdir"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("rmdir", "Remove empty directories").usage("rmdir <directory>...")
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        if args.is_empty() {
            return ExecResult::usage(&self.schema().usage);
        }

        let mut errors = Vec::new();
        for arg in &args.positional {
            let path = ctx.resolve_path(arg);
            let in_use = path == ctx.cwd;
            let outcome = ctx.store.with(|table| {
                if !exists_in(table, &path) {
                    return Err("No such directory".to_string());
                }
                if !is_dir_in(table, &path) {
                    return Err("Not a directory".to_string());
                }
                // The store keeps no child counts, so emptiness is a scan.
                if has_children(table, &path) {
                    return Err("Directory not empty".to_string());
                }
                if path == ROOT || in_use {
                    return Err("Device or resource busy".to_string());
                }
                table.delete(&path).map_err(|e| e.to_string())
            });
            if let Err(reason) = outcome {
                errors.push(format!("rmdir: failed to remove '{arg}': {reason}"));
            }
        }
        finish(errors)
    }
}
