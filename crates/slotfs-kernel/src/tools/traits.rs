//! Core tool trait and schema.

use crate::result::ExecResult;

use super::{ExecContext, ToolArgs};

/// Description of a tool for `help` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSchema {
    pub name: String,
    pub description: String,
    pub usage: String,
}

impl ToolSchema {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            usage: name.clone(),
            name,
            description: description.into(),
        }
    }

    /// Replace the one-line usage synopsis.
    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }
}

/// A command that collaborators run against the store.
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    fn schema(&self) -> ToolSchema;

    /// Run the tool. Failures are reported in the result, never by panicking.
    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult;
}
