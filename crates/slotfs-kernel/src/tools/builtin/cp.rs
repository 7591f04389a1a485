//! cp: Copy files.

use crate::result::ExecResult;
use crate::tools::context::{exists_in, is_dir_in};
use crate::tools::{child_path, ExecContext, Tool, ToolArgs, ToolSchema};
use crate::vfs::ResolvedPath;

/// Cp tool: copy a file to DST, or into DST when it is a directory.
pub struct Cp;

impl Tool for Cp {
    fn name(&self) -> &str {
        "cp"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("cp", "Copy files").usage("cp <source> <destination>")
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let (Some(src_arg), Some(dst_arg), 2) = (args.get(0), args.get(1), args.len()) else {
            return ExecResult::usage(&self.schema().usage);
        };
        let src = ctx.resolve_path(src_arg);
        let dst = ctx.resolve_path(dst_arg);

        let outcome = ctx.store.with(|table| {
            if !exists_in(table, &src) {
                return Err(format!("cp: cannot stat '{src_arg}': No such file"));
            }
            if is_dir_in(table, &src) {
                return Err(format!("cp: cannot copy directory '{src_arg}'"));
            }
            let dst = if is_dir_in(table, &dst) {
                child_path(&dst, ResolvedPath::split(&src).name)
            } else {
                dst
            };
            if dst == src {
                return Err(format!("cp: '{src_arg}' and '{dst_arg}' are the same file"));
            }
            if is_dir_in(table, &dst) {
                return Err(format!("cp: cannot overwrite directory '{dst_arg}'"));
            }
            let data = table
                .read_to_vec(&src)
                .map_err(|e| format!("cp: cannot read '{src_arg}': {e}"))?;
            table
                .write(&dst, &data)
                .map_err(|e| format!("cp: cannot create '{dst_arg}': {e}"))
        });

        match outcome {
            Ok(()) => ExecResult::success(""),
            Err(message) => ExecResult::failure(1, message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::builtin::testing::{ctx, run};

    #[test]
    fn copies_file() {
        let mut ctx = ctx(&[], &[("/a", "alpha")]);
        assert!(run(&Cp, &mut ctx, "/a /b").ok());
        assert_eq!(ctx.store.read_to_vec("/a").unwrap(), b"alpha");
        assert_eq!(ctx.store.read_to_vec("/b").unwrap(), b"alpha");
    }

    #[test]
    fn overwrites_existing_file() {
        let mut ctx = ctx(&[], &[("/a", "new"), ("/b", "old content")]);
        assert!(run(&Cp, &mut ctx, "/a /b").ok());
        assert_eq!(ctx.store.read_to_vec("/b").unwrap(), b"new");
        assert_eq!(ctx.store.len(), 2);
    }

    #[test]
    fn into_directory() {
        let mut ctx = ctx(&["/etc", "/tmp"], &[("/etc/motd", "hello")]);
        assert!(run(&Cp, &mut ctx, "/etc/motd /tmp").ok());
        assert_eq!(ctx.store.read_to_vec("/tmp/motd").unwrap(), b"hello");
    }

    #[test]
    fn refuses_directory_at_target_name() {
        let mut ctx = ctx(&["/etc", "/tmp", "/tmp/motd"], &[("/etc/motd", "hello")]);
        let result = run(&Cp, &mut ctx, "/etc/motd /tmp");
        assert_eq!(result.code, 1);
        assert_eq!(result.err, "cp: cannot overwrite directory '/tmp'");
        let info = ctx.store.stat("/tmp/motd").unwrap();
        assert!(info.kind.is_directory());
        assert_eq!(info.len, 0);
    }

    #[test]
    fn refuses_directory_source() {
        let mut ctx = ctx(&["/tmp"], &[]);
        let result = run(&Cp, &mut ctx, "/tmp /copy");
        assert_eq!(result.err, "cp: cannot copy directory '/tmp'");
        assert!(!ctx.store.exists("/copy"));
    }

    #[test]
    fn missing_source() {
        let mut ctx = ctx(&[], &[]);
        let result = run(&Cp, &mut ctx, "/ghost /b");
        assert_eq!(result.code, 1);
        assert_eq!(result.err, "cp: cannot stat '/ghost': No such file");
    }

    #[test]
    fn same_file() {
        let mut ctx = ctx(&[], &[("/a", "1")]);
        assert_eq!(run(&Cp, &mut ctx, "/a /a").code, 1);
    }
}
