//! ls: List directory contents.

use slotfs_types::EntryInfo;

use crate::result::ExecResult;
use crate::tools::{child_path, ExecContext, Tool, ToolArgs, ToolSchema};

/// Ls tool: list directory contents in slot order.
pub struct Ls;

impl Tool for Ls {
    fn name(&self) -> &str {
        "ls"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("ls", "List directory contents").usage("ls [-l] [directory]")
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        if args.len() > 1 {
            return ExecResult::usage(&self.schema().usage);
        }
        let path = args.get(0).unwrap_or(".");
        let resolved = ctx.resolve_path(path);
        let long_format = args.has_flag("long") || args.has_flag("l");

        if !ctx.is_dir(&resolved) {
            // A file lists as itself.
            return match ctx.store.stat(&resolved) {
                Some(info) => ExecResult::success(format_entry(&info, long_format)),
                None => ExecResult::failure(
                    1,
                    format!("ls: cannot access '{path}': No such file or directory"),
                ),
            };
        }

        // Names first, then stat each: the store lock is not re-entrant.
        let lines: Vec<String> = ctx
            .store
            .list_names(&resolved)
            .iter()
            .filter_map(|name| ctx.store.stat(&child_path(&resolved, name)))
            .map(|info| format_entry(&info, long_format))
            .collect();

        ExecResult::success(lines.join("\n"))
    }
}

fn format_entry(info: &EntryInfo, long_format: bool) -> String {
    let suffix = if info.kind.is_directory() { "/" } else { "" };
    if long_format {
        format!("{} {:>6} {}{}", info.kind.marker(), info.len, info.name, suffix)
    } else {
        format!("{}{}", info.name, suffix)
    }
}
