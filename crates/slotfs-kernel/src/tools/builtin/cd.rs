//! cd: Change working directory.

use crate::result::ExecResult;
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Cd tool: change current working directory.
pub struct Cd;

impl Tool for Cd {
    fn name(&self) -> &str {
        "cd"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("cd", "Change current working directory").usage("cd [directory]")
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        if args.len() > 1 {
            return ExecResult::usage(&self.schema().usage);
        }
        let path = args.get(0).unwrap_or("/");
        let resolved = ctx.resolve_path(path);

        if ctx.is_dir(&resolved) {
            ctx.set_cwd(resolved);
            ExecResult::success("")
        } else if ctx.exists(&resolved) {
            ExecResult::failure(1, format!("cd: {path}: Not a directory"))
        } else {
            ExecResult::failure(1, format!("cd: {path}: No such directory"))
        }
    }
}
