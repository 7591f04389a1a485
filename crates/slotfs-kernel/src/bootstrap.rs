//! Boot-time rebuild of the table.
//!
//! Nothing persists across restarts. Every boot wipes the table, creates
//! the standard top-level directories, then populates the synthetic system
//! files under `/etc`, `/proc` and `/dev` from a [`SystemInfo`].
//!
//! Hardware probing is not done here; callers supply whatever they probed
//! (or the reference machine from `SystemInfo::default()`).

use std::time::Duration;

use serde::Deserialize;
use slotfs_types::Result;
use tracing::{debug, info};

use crate::vfs::EntryTable;

/// Top-level directories created on every boot, in creation order.
pub const STANDARD_DIRS: &[&str] = &[
    "/bin", "/home", "/usr", "/etc", "/dev", "/tmp", "/var", "/proc", "/sys", "/boot",
];

const FPU: u32 = 1 << 0;
const MMX: u32 = 1 << 23;
const SSE: u32 = 1 << 25;
const SSE2: u32 = 1 << 26;
const SSE3: u32 = 1 << 0;

/// What the synthetic files describe.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SystemInfo {
    pub os_name: String,
    pub os_version: String,
    pub hostname: String,
    pub cpu_vendor: String,
    pub cpu_family: u32,
    pub cpu_model: u32,
    pub cpu_stepping: u32,
    /// CPUID leaf 1 EDX feature bits.
    pub cpu_features_edx: u32,
    /// CPUID leaf 1 ECX feature bits.
    pub cpu_features_ecx: u32,
    pub memory_mib: u32,
}

impl Default for SystemInfo {
    fn default() -> Self {
        Self {
            os_name: "slotfs".to_string(),
            os_version: env!("CARGO_PKG_VERSION").to_string(),
            hostname: "slotfs".to_string(),
            cpu_vendor: "GenuineIntel".to_string(),
            cpu_family: 6,
            cpu_model: 6,
            cpu_stepping: 3,
            cpu_features_edx: FPU | MMX | SSE | SSE2,
            cpu_features_ecx: SSE3,
            memory_mib: 128,
        }
    }
}

impl SystemInfo {
    fn os_id(&self) -> String {
        self.os_name
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase()
    }

    fn cpu_flags(&self) -> String {
        let mut flags = String::new();
        let table = [
            (self.cpu_features_edx & FPU, "fpu"),
            (self.cpu_features_edx & MMX, "mmx"),
            (self.cpu_features_edx & SSE, "sse"),
            (self.cpu_features_edx & SSE2, "sse2"),
            (self.cpu_features_ecx & SSE3, "sse3"),
        ];
        for (bit, name) in table {
            if bit != 0 {
                flags.push_str(name);
                flags.push(' ');
            }
        }
        flags
    }
}

/// Counts from a completed boot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootSummary {
    pub directories: usize,
    pub files: usize,
}

/// Wipe `table` and rebuild the start-up state.
pub fn boot(table: &mut EntryTable, system: &SystemInfo) -> Result<BootSummary> {
    table.initialize();

    for dir in STANDARD_DIRS {
        table.make_directory(dir)?;
    }
    debug!(count = STANDARD_DIRS.len(), "standard directories created");

    let files = populate_etc(table, system)?
        + populate_proc(table, system, Duration::ZERO)?
        + populate_dev(table)?;

    let summary = BootSummary {
        directories: STANDARD_DIRS.len(),
        files,
    };
    info!(
        directories = summary.directories,
        files = summary.files,
        used = table.len(),
        capacity = table.capacity(),
        "boot complete"
    );
    Ok(summary)
}

/// Regenerate the `/proc` files in place.
pub fn refresh_proc(table: &mut EntryTable, system: &SystemInfo, uptime: Duration) -> Result<()> {
    populate_proc(table, system, uptime)?;
    Ok(())
}

fn put(table: &mut EntryTable, path: &str, content: &str) -> Result<usize> {
    table.write(path, content.as_bytes())?;
    debug!(path, len = content.len(), "system file written");
    Ok(1)
}

fn populate_etc(table: &mut EntryTable, system: &SystemInfo) -> Result<usize> {
    let name = &system.os_name;
    let version = &system.os_version;

    let os_release = format!(
        "NAME=\"{name}\"\n\
         VERSION=\"{version}\"\n\
         ID={id}\n\
         VERSION_ID=\"{version}\"\n\
         PRETTY_NAME=\"{name} {version}\"\n",
        id = system.os_id(),
    );
    let fstab = "# /etc/fstab: static filesystem information\n\
                 #\n\
                 # <filesystem> <mount> <type> <options> <dump> <pass>\n\
                 ramfs          /      ramfs  defaults    0      0\n";
    let shells = "# /etc/shells: valid login shells\n/bin/sh\n/bin/bash\n/bin/polysh\n";

    let mut count = 0;
    count += put(table, "/etc/os-release", &os_release)?;
    count += put(table, "/etc/hostname", &format!("{}\n", system.hostname))?;
    count += put(table, "/etc/fstab", fstab)?;
    count += put(table, "/etc/shells", shells)?;
    count += put(table, "/etc/issue", &format!("{name} {version} \\n \\l\n\n"))?;
    count += put(
        table,
        "/etc/motd",
        &format!("Welcome to {name} {version}\nType 'help' for available commands\n"),
    )?;
    Ok(count)
}

fn populate_proc(table: &mut EntryTable, system: &SystemInfo, uptime: Duration) -> Result<usize> {
    let cpuinfo = format!(
        "processor\t: 0\n\
         vendor_id\t: {}\n\
         cpu family\t: {}\n\
         model\t\t: {}\n\
         stepping\t: {}\n\
         flags\t\t: {}\n",
        system.cpu_vendor,
        system.cpu_family,
        system.cpu_model,
        system.cpu_stepping,
        system.cpu_flags(),
    );

    let total_kb = u64::from(system.memory_mib) * 1024;
    let free_kb = total_kb.saturating_sub(2048);
    let meminfo = format!(
        "MemTotal:       {total_kb} kB\n\
         MemFree:        {free_kb} kB\n\
         MemAvailable:   {free_kb} kB\n"
    );

    let mut count = 0;
    count += put(table, "/proc/cpuinfo", &cpuinfo)?;
    count += put(table, "/proc/meminfo", &meminfo)?;
    count += put(
        table,
        "/proc/version",
        &format!("{} version {}\n", system.os_name, system.os_version),
    )?;
    count += put(
        table,
        "/proc/uptime",
        &format!("{:.2} 0.00\n", uptime.as_secs_f64()),
    )?;
    Ok(count)
}

fn populate_dev(table: &mut EntryTable) -> Result<usize> {
    let mut count = 0;
    count += put(table, "/dev/null", "")?;
    count += put(table, "/dev/zero", "")?;
    count += put(table, "/dev/random", "Random device\n")?;
    count += put(table, "/dev/keyboard", "PS/2 Keyboard Device\n")?;
    count += put(
        table,
        "/dev/fb0",
        "VGA Text Mode Framebuffer\nAddress: 0xB8000\nResolution: 80x25\n",
    )?;
    count += put(table, "/dev/ttyS0", "Serial Console COM1\nBaud: 38400\n")?;
    Ok(count)
}
