//! The Kernel: owns the entry table and dispatches command lines.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                      Kernel                      │
//! │  ┌──────────────┐  ┌──────────────────────────┐  │
//! │  │ ToolRegistry │  │ ExecContext              │  │
//! │  │  (builtins)  │  │  cwd + SharedTable       │  │
//! │  └──────────────┘  └────────────┬─────────────┘  │
//! │                                 │                │
//! │                    ┌────────────▼─────────────┐  │
//! │                    │ EntryTable (S slots)     │  │
//! │                    └──────────────────────────┘  │
//! └──────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use tracing::{debug, info};

use crate::bootstrap::{self, BootSummary};
use crate::config::KernelConfig;
use crate::result::{ExecResult, NOT_FOUND};
use crate::tools::{normalize, register_builtins, ExecContext, ToolArgs, ToolRegistry};
use crate::vfs::{EntryTable, SharedTable, ROOT};

/// Executes command lines against one entry table.
pub struct Kernel {
    config: KernelConfig,
    tools: Arc<ToolRegistry>,
    ctx: ExecContext,
    boot: Option<BootSummary>,
}

impl Kernel {
    /// Create a new kernel with the given configuration.
    pub fn new(config: KernelConfig) -> Result<Self> {
        config.validate().context("invalid kernel configuration")?;

        let mut table = EntryTable::new(config.limits);
        let boot = if config.bootstrap {
            Some(bootstrap::boot(&mut table, &config.system).context("bootstrap failed")?)
        } else {
            None
        };

        let cwd = normalize(&config.cwd);
        if cwd != ROOT && !table.is_directory(&cwd) {
            bail!("initial working directory {cwd} is not a directory");
        }

        let mut tools = ToolRegistry::new();
        register_builtins(&mut tools);

        info!(
            slots = config.limits.slots,
            used = table.len(),
            tools = tools.len(),
            cwd = %cwd,
            "kernel ready"
        );

        Ok(Self {
            ctx: ExecContext::with_cwd(SharedTable::new(table), &cwd),
            tools: Arc::new(tools),
            config,
            boot,
        })
    }

    /// A booted kernel with default limits.
    pub fn transient() -> Result<Self> {
        Self::new(KernelConfig::default())
    }

    /// Execute one command line.
    ///
    /// The first word names the tool; the rest is its argument text.
    pub fn execute(&mut self, line: &str) -> ExecResult {
        let line = line.trim();
        if line.is_empty() {
            return ExecResult::default();
        }
        let (command, rest) = match line.find(char::is_whitespace) {
            Some(end) => (&line[..end], &line[end..]),
            None => (line, ""),
        };
        debug!(command, "execute");

        if command == "help" {
            return self.help();
        }
        let Some(tool) = self.tools.get(command) else {
            return ExecResult::failure(
                NOT_FOUND,
                format!("{command}: command not found\nType 'help' for available commands."),
            );
        };
        tool.execute(ToolArgs::parse(rest), &mut self.ctx)
    }

    fn help(&self) -> ExecResult {
        let mut lines = vec!["Available commands:".to_string()];
        lines.extend(
            self.tools
                .schemas()
                .iter()
                .map(|schema| format!("  {:<28} {}", schema.usage, schema.description)),
        );
        lines.push(format!("  {:<28} {}", "help", "Show this help"));
        ExecResult::success(lines.join("\n"))
    }

    /// Wipe the table and run the boot sequence again. The cwd returns to
    /// the configured one.
    pub fn reboot(&mut self) -> Result<BootSummary> {
        let summary = self
            .ctx
            .store
            .with(|table| bootstrap::boot(table, &self.config.system))
            .context("bootstrap failed")?;
        self.ctx.set_cwd(normalize(&self.config.cwd));
        self.boot = Some(summary);
        Ok(summary)
    }

    /// Regenerate `/proc` for the given uptime.
    pub fn refresh_proc(&self, uptime: Duration) -> slotfs_types::Result<()> {
        self.ctx
            .store
            .with(|table| bootstrap::refresh_proc(table, &self.config.system, uptime))
    }

    pub fn store(&self) -> &SharedTable {
        &self.ctx.store
    }

    pub fn cwd(&self) -> &str {
        &self.ctx.cwd
    }

    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Counts from the last boot, if the kernel has booted.
    pub fn boot_summary(&self) -> Option<BootSummary> {
        self.boot
    }
}

impl std::fmt::Debug for Kernel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Kernel")
            .field("cwd", &self.ctx.cwd)
            .field("tools", &self.tools)
            .field("boot", &self.boot)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotfs_types::Limits;

    #[test]
    fn transient_boots() {
        let kernel = Kernel::transient().unwrap();
        let summary = kernel.boot_summary().unwrap();
        assert_eq!(summary.directories, 10);
        assert_eq!(kernel.store().len(), summary.directories + summary.files);
        assert_eq!(kernel.cwd(), "/");
    }

    #[test]
    fn bare_kernel_is_empty() {
        let kernel = Kernel::new(KernelConfig::bare()).unwrap();
        assert!(kernel.store().is_empty());
        assert!(kernel.boot_summary().is_none());
    }

    #[test]
    fn dispatches_lines() {
        let mut kernel = Kernel::new(KernelConfig::bare()).unwrap();
        assert!(kernel.execute("mkdir /tmp").ok());
        assert!(kernel.execute("  cd   /tmp ").ok());
        assert_eq!(kernel.execute("pwd").out, "/tmp");
        assert!(kernel.execute("write notes hi").ok());
        assert_eq!(kernel.execute("cat /tmp/notes").out, "hi\n");
    }

    #[test]
    fn blank_line_is_noop() {
        let mut kernel = Kernel::new(KernelConfig::bare()).unwrap();
        let result = kernel.execute("   ");
        assert!(result.ok());
        assert!(result.out.is_empty());
    }

    #[test]
    fn unknown_command() {
        let mut kernel = Kernel::new(KernelConfig::bare()).unwrap();
        let result = kernel.execute("frobnicate now");
        assert_eq!(result.code, NOT_FOUND);
        assert!(result.err.starts_with("frobnicate: command not found"));
    }

    #[test]
    fn help_lists_every_tool() {
        let mut kernel = Kernel::new(KernelConfig::bare()).unwrap();
        let out = kernel.execute("help").out;
        for name in kernel.tools().names() {
            assert!(out.contains(name), "help is missing {name}");
        }
        assert!(out.contains("help"));
    }

    #[test]
    fn configured_cwd_must_be_directory() {
        let config = KernelConfig {
            cwd: "/etc/hostname".into(),
            ..KernelConfig::default()
        };
        assert!(Kernel::new(config).is_err());

        let config = KernelConfig {
            cwd: "/home".into(),
            ..KernelConfig::default()
        };
        assert_eq!(Kernel::new(config).unwrap().cwd(), "/home");
    }

    #[test]
    fn boot_needs_room() {
        let config = KernelConfig {
            limits: Limits::new(12, 2048, 63),
            ..KernelConfig::default()
        };
        let err = Kernel::new(config).unwrap_err();
        assert!(format!("{err:#}").contains("bootstrap failed"));
    }

    #[test]
    fn reboot_restores_state() {
        let mut kernel = Kernel::transient().unwrap();
        let before = kernel.store().len();
        assert!(kernel.execute("rm /etc/motd").ok());
        assert!(kernel.execute("cd /tmp").ok());
        kernel.reboot().unwrap();
        assert_eq!(kernel.store().len(), before);
        assert!(kernel.store().exists("/etc/motd"));
        assert_eq!(kernel.cwd(), "/");
    }

    #[test]
    fn refresh_proc_updates_uptime() {
        let kernel = Kernel::transient().unwrap();
        kernel.refresh_proc(Duration::from_secs(90)).unwrap();
        let uptime = kernel.store().read_to_vec("/proc/uptime").unwrap();
        assert_eq!(uptime, b"90.00 0.00\n");
    }
}
