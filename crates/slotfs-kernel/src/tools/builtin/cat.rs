//! cat: Print file contents.

use crate::result::ExecResult;
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Cat tool: concatenate files to output.
pub struct Cat;

impl Tool for Cat {
    fn name(&self) -> &str {
        "cat"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("cat", "Print file contents").usage("cat <file>...")
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        if args.is_empty() {
            return ExecResult::usage(&self.schema().usage);
        }

        let mut out = String::new();
        let mut errors = Vec::new();
        for arg in &args.positional {
            let path = ctx.resolve_path(arg);
            if ctx.is_dir(&path) {
                errors.push(format!("cat: {arg}: Is a directory"));
                continue;
            }
            match ctx.store.read_to_vec(&path) {
                Ok(data) => out.push_str(&String::from_utf8_lossy(&data)),
                Err(_) => errors.push(format!("cat: {arg}: No such file")),
            }
        }

        let code = if errors.is_empty() { 0 } else { 1 };
        ExecResult::from_output(code, out, errors.join("\n"))
    }
}
