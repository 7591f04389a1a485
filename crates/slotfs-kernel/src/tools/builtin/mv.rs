//! mv: Move or rename files and empty directories.

use crate::result::ExecResult;
use crate::tools::context::{exists_in, has_children, is_dir_in};
use crate::tools::{child_path, ExecContext, Tool, ToolArgs, ToolSchema};
use crate::vfs::{ResolvedPath, ROOT};

/// Mv tool: move SRC to DST, or into DST when it is a directory.
pub struct Mv;

impl Tool for Mv {
    fn name(&self) -> &str {
        "mv"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("mv", "Move or rename files").usage("mv <source> <destination>")
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let (Some(src_arg), Some(dst_arg), 2) = (args.get(0), args.get(1), args.len()) else {
            return ExecResult::usage(&self.schema().usage);
        };
        let src = ctx.resolve_path(src_arg);
        let dst = ctx.resolve_path(dst_arg);
        let in_use = src == ctx.cwd;

        let outcome = ctx.store.with(|table| {
            if !exists_in(table, &src) {
                return Err(format!("mv: cannot stat '{src_arg}': No such file or directory"));
            }
            if src == ROOT {
                return Err("mv: cannot move '/': Device or resource busy".to_string());
            }
            let dst = if is_dir_in(table, &dst) {
                child_path(&dst, ResolvedPath::split(&src).name)
            } else {
                dst
            };
            if dst == src {
                return Err(format!("mv: '{src_arg}' and '{dst_arg}' are the same file"));
            }
            if exists_in(table, &dst) {
                return Err(format!("mv: cannot move to '{dst_arg}': File exists"));
            }
            if dst.starts_with(&format!("{src}/")) {
                return Err(format!(
                    "mv: cannot move '{src_arg}' to a subdirectory of itself"
                ));
            }

            if table.is_directory(&src) {
                if in_use {
                    return Err(format!("mv: cannot move '{src_arg}': Device or resource busy"));
                }
                if has_children(table, &src) {
                    return Err(format!("mv: cannot move '{src_arg}': Directory not empty"));
                }
                table
                    .make_directory(&dst)
                    .map_err(|e| format!("mv: cannot move to '{dst_arg}': {e}"))?;
            } else {
                let data = table
                    .read_to_vec(&src)
                    .map_err(|e| format!("mv: cannot read '{src_arg}': {e}"))?;
                table
                    .write(&dst, &data)
                    .map_err(|e| format!("mv: cannot move to '{dst_arg}': {e}"))?;
            }
            table
                .delete(&src)
                .map_err(|e| format!("mv: cannot remove '{src_arg}': {e}"))
        });

        match outcome {
            Ok(()) => ExecResult::success(""),
            Err(message) => ExecResult::failure(1, message),
        }
    }
}
