//! Argument splitting for tool invocations.

use std::collections::BTreeSet;

/// Arguments passed to a tool.
///
/// Words starting with `-` are flags (`-la` sets `l` and `a`, `--long` sets
/// `long`) until a bare `--`; everything else is positional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolArgs {
    pub positional: Vec<String>,
    pub flags: BTreeSet<String>,
    raw: String,
}

impl ToolArgs {
    /// Split the argument text that follows the command word.
    pub fn parse(text: &str) -> Self {
        let mut args = Self {
            raw: text.trim().to_string(),
            ..Self::default()
        };
        let mut flags_done = false;
        for word in text.split_whitespace() {
            if flags_done || word == "-" || !word.starts_with('-') {
                args.positional.push(word.to_string());
            } else if word == "--" {
                flags_done = true;
            } else if let Some(long) = word.strip_prefix("--") {
                args.flags.insert(long.to_string());
            } else {
                for c in word[1..].chars() {
                    args.flags.insert(c.to_string());
                }
            }
        }
        args
    }

    /// Positional argument at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.positional.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.positional.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty()
    }

    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.contains(name)
    }

    /// The argument text as given, trimmed.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Raw text left after skipping `words` whitespace-separated words,
    /// with inner spacing preserved.
    pub fn rest_after(&self, words: usize) -> &str {
        let mut rest = self.raw.as_str();
        for _ in 0..words {
            rest = match rest.find(char::is_whitespace) {
                Some(end) => rest[end..].trim_start(),
                None => "",
            };
        }
        rest
    }
}
