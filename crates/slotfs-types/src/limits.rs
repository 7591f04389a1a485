//! Table capacities.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of entry slots in the reference sizing.
pub const DEFAULT_SLOTS: usize = 50;

/// Content capacity of a single entry in the reference sizing.
pub const DEFAULT_CONTENT_BYTES: usize = 2048;

/// Bytes a name or parent path may hold: a 64-byte field less its terminator.
pub const DEFAULT_NAME_BYTES: usize = 63;

/// Capacities of an entry table, fixed when the table is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    /// Number of slots (N).
    pub slots: usize,
    /// Content bytes per entry (C).
    pub content_bytes: usize,
    /// Bytes kept from a name or parent path.
    pub name_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            slots: DEFAULT_SLOTS,
            content_bytes: DEFAULT_CONTENT_BYTES,
            name_bytes: DEFAULT_NAME_BYTES,
        }
    }
}

/// A limit that cannot back a usable table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LimitsError {
    #[error("limits.{0} must be greater than zero")]
    Zero(&'static str),
}

impl Limits {
    pub fn new(slots: usize, content_bytes: usize, name_bytes: usize) -> Self {
        Self {
            slots,
            content_bytes,
            name_bytes,
        }
    }

    /// Reject limits that would make every create fail.
    pub fn validate(&self) -> Result<(), LimitsError> {
        if self.slots == 0 {
            return Err(LimitsError::Zero("slots"));
        }
        if self.content_bytes == 0 {
            return Err(LimitsError::Zero("content_bytes"));
        }
        if self.name_bytes == 0 {
            return Err(LimitsError::Zero("name_bytes"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_sizing() {
        let limits = Limits::default();
        assert_eq!(limits.slots, 50);
        assert_eq!(limits.content_bytes, 2048);
        assert_eq!(limits.name_bytes, 63);
        assert!(limits.validate().is_ok());
    }

    #[test]
    fn zero_limits_rejected() {
        assert_eq!(
            Limits::new(0, 1, 1).validate(),
            Err(LimitsError::Zero("slots"))
        );
        assert_eq!(
            Limits::new(1, 0, 1).validate(),
            Err(LimitsError::Zero("content_bytes"))
        );
        assert_eq!(
            Limits::new(1, 1, 0).validate(),
            Err(LimitsError::Zero("name_bytes"))
        );
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let limits: Limits = toml::from_str("slots = 8").unwrap();
        assert_eq!(limits.slots, 8);
        assert_eq!(limits.content_bytes, DEFAULT_CONTENT_BYTES);
        assert_eq!(limits.name_bytes, DEFAULT_NAME_BYTES);
    }

    #[test]
    fn unknown_field_rejected() {
        let err = toml::from_str::<Limits>("slotz = 8");
        assert!(err.is_err());
    }
}
