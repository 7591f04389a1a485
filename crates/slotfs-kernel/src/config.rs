//! Kernel configuration.
//!
//! Loaded from TOML. Lookup order for [`KernelConfig::load`]:
//!
//! | Source | Path |
//! |--------|------|
//! | `$SLOTFS_CONFIG` | any file; must exist |
//! | XDG config | `$XDG_CONFIG_HOME/slotfs/config.toml` (used only if present) |
//! | built-in | [`KernelConfig::default`] |
//!
//! ```toml
//! bootstrap = true
//! cwd = "/home"
//!
//! [limits]
//! slots = 50
//! content_bytes = 2048
//! name_bytes = 63
//!
//! [system]
//! hostname = "box"
//! memory_mib = 256
//! ```

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::Deserialize;
use slotfs_types::{Limits, LimitsError};
use thiserror::Error;

use crate::bootstrap::SystemInfo;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "SLOTFS_CONFIG";

/// Errors from loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Limits(#[from] LimitsError),

    #[error("cwd must be an absolute path, got {0:?}")]
    InvalidCwd(String),
}

/// Configuration for kernel initialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KernelConfig {
    /// Table capacities.
    pub limits: Limits,
    /// Run the boot sequence (standard directories and system files).
    pub bootstrap: bool,
    /// Initial working directory.
    pub cwd: String,
    /// Values written into the synthetic system files.
    pub system: SystemInfo,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            bootstrap: true,
            cwd: "/".to_string(),
            system: SystemInfo::default(),
        }
    }
}

impl KernelConfig {
    /// An empty table with reference limits and no boot sequence.
    pub fn bare() -> Self {
        Self {
            bootstrap: false,
            ..Self::default()
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Self::parse(source, Path::new("<inline>"))
    }

    /// Read, parse and validate a TOML file.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source, path)
    }

    /// Load from `$SLOTFS_CONFIG`, else the XDG config file if it exists,
    /// else defaults.
    pub fn load() -> Result<Self, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::load_file(Path::new(&path));
        }
        let path = default_config_path();
        if path.is_file() {
            Self::load_file(&path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.limits.validate()?;
        if !self.cwd.starts_with('/') {
            return Err(ConfigError::InvalidCwd(self.cwd.clone()));
        }
        Ok(())
    }

    fn parse(source: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }
}

/// Get the config directory.
///
/// Uses `$XDG_CONFIG_HOME/slotfs` or falls back to `~/.config/slotfs`.
pub fn config_dir() -> PathBuf {
    BaseDirs::new()
        .map(|d| d.config_dir().to_path_buf())
        .unwrap_or_else(|| {
            std::env::var("HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("/tmp"))
                .join(".config")
        })
        .join("slotfs")
}

/// Default location of the config file.
pub fn default_config_path() -> PathBuf {
    config_dir().join("config.toml")
}
