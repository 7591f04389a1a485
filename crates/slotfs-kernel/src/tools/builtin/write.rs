//! write: Store text in a file.
//!
//! Line-oriented stand-in for an editor save: everything after the file
//! name becomes the content, `\n` escapes become newlines, and a final
//! newline is appended.

use crate::result::ExecResult;
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};
use crate::vfs::ROOT;

/// Write tool: create or replace a file's content.
pub struct Write;

impl Tool for Write {
    fn name(&self) -> &str {
        "write"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("write", "Write text to a file").usage("write <file> <text>...")
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let Some(target) = args.raw().split_whitespace().next() else {
            return ExecResult::usage(&self.schema().usage);
        };
        let path = ctx.resolve_path(target);
        let mut content = args.rest_after(1).replace("\\n", "\n");
        content.push('\n');

        let outcome = ctx.store.with(|table| {
            if path == ROOT || table.is_directory(&path) {
                return Err("Is a directory".to_string());
            }
            table
                .write(&path, content.as_bytes())
                .map_err(|e| e.to_string())?;
            Ok(table.stat(&path).map_or(0, |info| info.len))
        });

        match outcome {
            Ok(stored) if stored < content.len() => ExecResult::success(format!(
                "wrote {stored} bytes to {target} (truncated from {})",
                content.len()
            )),
            Ok(stored) => ExecResult::success(format!("wrote {stored} bytes to {target}")),
            Err(reason) => ExecResult::failure(1, format!("write: {target}: {reason}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::builtin::testing::{ctx, run};
    use crate::vfs::{EntryTable, SharedTable};
    use slotfs_types::Limits;

    #[test]
    fn writes_text() {
        let mut ctx = ctx(&["/home"], &[]);
        let result = run(&Write, &mut ctx, "/home/notes hello  world");
        assert!(result.ok(), "{}", result.err);
        assert_eq!(result.out, "wrote 13 bytes to /home/notes");
        assert_eq!(ctx.store.read_to_vec("/home/notes").unwrap(), b"hello  world\n");
    }

    #[test]
    fn expands_newlines_and_overwrites() {
        let mut ctx = ctx(&[], &[("/notes", "old old old old")]);
        assert!(run(&Write, &mut ctx, r"notes a\nb").ok());
        assert_eq!(ctx.store.read_to_vec("/notes").unwrap(), b"a\nb\n");
        assert_eq!(ctx.store.len(), 1);
    }

    #[test]
    fn reports_truncation() {
        let store = SharedTable::new(EntryTable::new(Limits::new(4, 4, 16)));
        let mut ctx = ExecContext::new(store);
        let result = run(&Write, &mut ctx, "/f abcdef");
        assert!(result.ok());
        assert_eq!(result.out, "wrote 4 bytes to /f (truncated from 7)");
        assert_eq!(ctx.store.read_to_vec("/f").unwrap(), b"abcd");
    }

    #[test]
    fn refuses_directory() {
        let mut ctx = ctx(&["/tmp"], &[]);
        let result = run(&Write, &mut ctx, "/tmp text");
        assert_eq!(result.code, 1);
        assert_eq!(result.err, "write: /tmp: Is a directory");
    }

    #[test]
    fn needs_a_file() {
        let mut ctx = ctx(&[], &[]);
        assert_eq!(run(&Write, &mut ctx, "").code, 2);
    }
}
