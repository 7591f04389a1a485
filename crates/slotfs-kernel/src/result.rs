//! ExecResult: the structured result of every command.

use serde::Serialize;

/// Exit code for bad usage (missing or extra arguments).
pub const USAGE: i64 = 2;

/// Exit code for an unknown command.
pub const NOT_FOUND: i64 = 127;

/// The result of executing one command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecResult {
    /// Exit code. 0 means success.
    pub code: i64,
    /// Standard output.
    pub out: String,
    /// Standard error.
    pub err: String,
}

impl ExecResult {
    /// Create a successful result with output.
    pub fn success(out: impl Into<String>) -> Self {
        Self {
            code: 0,
            out: out.into(),
            err: String::new(),
        }
    }

    /// Create a failed result with an error message.
    pub fn failure(code: i64, err: impl Into<String>) -> Self {
        Self {
            code,
            out: String::new(),
            err: err.into(),
        }
    }

    /// A usage failure for `usage`.
    pub fn usage(usage: &str) -> Self {
        Self::failure(USAGE, format!("Usage: {usage}"))
    }

    /// Create a result from raw output streams.
    pub fn from_output(code: i64, out: impl Into<String>, err: impl Into<String>) -> Self {
        Self {
            code,
            out: out.into(),
            err: err.into(),
        }
    }

    /// True if the command succeeded (exit code 0).
    pub fn ok(&self) -> bool {
        self.code == 0
    }
}

impl Default for ExecResult {
    fn default() -> Self {
        Self::success("")
    }
}
