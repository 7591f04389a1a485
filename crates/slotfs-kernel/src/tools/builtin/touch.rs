//! touch: Create empty files.

use crate::result::ExecResult;
use crate::tools::context::exists_in;
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Touch tool: create an empty file per argument.
///
/// An existing path is left alone and reported on stderr without failing.
pub struct Touch;

impl Tool for Touch {
    fn name(&self) -> &str {
        "touch"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("touch", "Create empty files").usage("touch <file>...")
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        if args.is_empty() {
            return ExecResult::usage(&self.schema().usage);
        }

        let mut notices = Vec::new();
        let mut failed = false;
        for arg in &args.positional {
            let path = ctx.resolve_path(arg);
            let outcome = ctx.store.with(|table| {
                if exists_in(table, &path) {
                    return Ok(false);
                }
                table.write(&path, b"").map(|()| true)
            });
            match outcome {
                Ok(true) => {}
                Ok(false) => notices.push(format!("touch: '{arg}': File already exists")),
                Err(e) => {
                    failed = true;
                    notices.push(format!("touch: cannot touch '{arg}': {e}"));
                }
            }
        }
        ExecResult::from_output(i64::from(failed), "", notices.join("\n"))
    }
}
