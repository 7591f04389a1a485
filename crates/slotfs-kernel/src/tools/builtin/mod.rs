//! Built-in file-management tools.
//!
//! Each tool resolves its arguments against the context's cwd, then talks
//! to the store. Checks that must agree with the write that follows run
//! inside a single [`SharedTable::with`](crate::vfs::SharedTable::with).

mod cat;
mod cd;
mod cp;
mod ls;
mod mkdir;
mod mv;
mod pwd;
mod rm;
mod rmdir;
mod touch;
mod write;

use crate::result::ExecResult;

use super::ToolRegistry;

/// Register all built-in tools with the registry.
pub fn register_builtins(registry: &mut ToolRegistry) {
    registry.register(cat::Cat);
    registry.register(cd::Cd);
    registry.register(cp::Cp);
    registry.register(ls::Ls);
    registry.register(mkdir::Mkdir);
    registry.register(mv::Mv);
    registry.register(pwd::Pwd);
    registry.register(rm::Rm);
    registry.register(rmdir::Rmdir);
    registry.register(touch::Touch);
    registry.register(write::Write);
}

/// Collapse per-argument errors into one result.
fn finish(errors: Vec<String>) -> ExecResult {
    if errors.is_empty() {
        ExecResult::success("")
    } else {
        ExecResult::failure(1, errors.join("\n"))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::tools::{ExecContext, Tool, ToolArgs};
    use crate::result::ExecResult;
    use crate::vfs::{EntryTable, SharedTable};

    /// A context over a fresh table holding `dirs` and `files`.
    pub fn ctx(dirs: &[&str], files: &[(&str, &str)]) -> ExecContext {
        let mut table = EntryTable::default();
        for dir in dirs {
            table.make_directory(dir).unwrap();
        }
        for (path, content) in files {
            table.write(path, content.as_bytes()).unwrap();
        }
        ExecContext::new(SharedTable::new(table))
    }

    pub fn run(tool: &dyn Tool, ctx: &mut ExecContext, args: &str) -> ExecResult {
        tool.execute(ToolArgs::parse(args), ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_builtins_registered() {
        let mut registry = ToolRegistry::new();
        register_builtins(&mut registry);
        assert_eq!(
            registry.names(),
            vec!["cat", "cd", "cp", "ls", "mkdir", "mv", "pwd", "rm", "rmdir", "touch", "write"]
        );
    }

    #[test]
    fn finish_joins_errors() {
        assert!(finish(vec![]).ok());
        let result = finish(vec!["a".into(), "b".into()]);
        assert_eq!(result.code, 1);
        assert_eq!(result.err, "a\nb");
    }
}
