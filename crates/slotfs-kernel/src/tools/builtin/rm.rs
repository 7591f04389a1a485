//! rm: Remove files.

use crate::result::ExecResult;
use crate::tools::context::{exists_in, is_dir_in};
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

use super::finish;

/// Rm tool: remove files. Directories go through `rmdir`.
pub struct Rm;

impl Tool for Rm {
    fn name(&self) -> &str {
        "rm"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("rm", "Remove files").usage("rm <file>...")
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        if args.is_empty() {
            return ExecResult::usage(&self.schema().usage);
        }

        let mut errors = Vec::new();
        for arg in &args.positional {
            let path = ctx.resolve_path(arg);
            let outcome = ctx.store.with(|table| {
                if !exists_in(table, &path) {
                    return Err("No such file".to_string());
                }
                if is_dir_in(table, &path) {
                    return Err("Is a directory (use rmdir)".to_string());
                }
                table.delete(&path).map_err(|e| e.to_string())
            });
            if let Err(reason) = outcome {
                errors.push(format!("rm: cannot remove '{arg}': {reason}"));
            }
        }
        finish(errors)
    }
}
