//! pwd: Print working directory.

use crate::result::ExecResult;
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Pwd tool: print current working directory.
pub struct Pwd;

impl Tool for Pwd {
    fn name(&self) -> &str {
        "pwd"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("pwd", "Print current working directory")
    }

    fn execute(&self, _args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        ExecResult::success(ctx.cwd.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::builtin::testing::{ctx, run};

    #[test]
    fn prints_cwd() {
        let mut ctx = ctx(&["/tmp"], &[]);
        assert_eq!(run(&Pwd, &mut ctx, "").out, "/");
        ctx.set_cwd("/tmp".into());
        assert_eq!(run(&Pwd, &mut ctx, "").out, "/tmp");
    }
}
