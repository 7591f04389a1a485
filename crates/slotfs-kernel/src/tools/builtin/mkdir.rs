//! mkdir: Create directories.

use crate::result::ExecResult;
use crate::tools::context::exists_in;
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

use super::finish;

/// Mkdir tool: create one directory per argument.
pub struct Mkdir;

impl Tool for Mkdir {
    fn name(&self) -> &str {
        "mkdir"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("mkdir", "Create directories").usage("mkdir <directory>...")
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        if args.is_empty() {
            return ExecResult::usage(&self.schema().usage);
        }

        let mut errors = Vec::new();
        for arg in &args.positional {
            let path = ctx.resolve_path(arg);
            let outcome = ctx.store.with(|table| {
                if exists_in(table, &path) {
                    return Err("File exists".to_string());
                }
                table.make_directory(&path).map_err(|e| e.to_string())
            });
            if let Err(reason) = outcome {
                errors.push(format!("mkdir: cannot create directory '{arg}': {reason}"));
            }
        }
        finish(errors)
    }
}
