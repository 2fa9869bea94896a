//! # Engine Configuration
//!
//! Tunables of the engine: urgency thresholds, an optional replacement
//! catalog and logging output. Every default reproduces the behavior the
//! dashboard ships with, so an absent configuration file is valid.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lexflow_core::config::ConfigManager;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = ConfigManager::load()?;
//! let sla_hours = manager.config().urgency.sla_warning_hours;
//! let catalog = manager.catalog()?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod loader;

use crate::constants::{status_groups, thresholds};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use error::{ConfigResult, ConfigurationError};
pub use loader::ConfigManager;

/// Upper bound for any threshold, ten years in hours
const MAX_THRESHOLD_HOURS: i64 = 24 * 365 * 10;

/// Root configuration structure mirroring lexflow.yaml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Urgency classifier thresholds
    pub urgency: UrgencyConfig,

    /// Process catalog source
    pub catalog: CatalogConfig,

    /// Log output settings
    pub logging: LoggingConfig,
}

impl EngineConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        self.urgency.validate()
    }
}

/// Thresholds of the urgency rules
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct UrgencyConfig {
    pub due_date_warning_days: i64,
    pub sla_warning_hours: i64,
    pub new_entity_urgent_hours: i64,
    pub new_entity_warning_hours: i64,
    pub stale_urgent_days: i64,
    pub stale_warning_days: i64,
    pub flagged_statuses: Vec<String>,
}

impl Default for UrgencyConfig {
    fn default() -> Self {
        Self {
            due_date_warning_days: thresholds::DUE_DATE_WARNING_DAYS,
            sla_warning_hours: thresholds::SLA_WARNING_HOURS,
            new_entity_urgent_hours: thresholds::NEW_ENTITY_URGENT_HOURS,
            new_entity_warning_hours: thresholds::NEW_ENTITY_WARNING_HOURS,
            stale_urgent_days: thresholds::STALE_URGENT_DAYS,
            stale_warning_days: thresholds::STALE_WARNING_DAYS,
            flagged_statuses: status_groups::FLAGGED_STATUSES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl UrgencyConfig {
    /// Reject non-positive or oversized thresholds and inverted pairs
    pub fn validate(&self) -> ConfigResult<()> {
        let in_hours = [
            ("urgency.due_date_warning_days", self.due_date_warning_days, 24),
            ("urgency.sla_warning_hours", self.sla_warning_hours, 1),
            ("urgency.new_entity_urgent_hours", self.new_entity_urgent_hours, 1),
            ("urgency.new_entity_warning_hours", self.new_entity_warning_hours, 1),
            ("urgency.stale_urgent_days", self.stale_urgent_days, 24),
            ("urgency.stale_warning_days", self.stale_warning_days, 24),
        ];

        for (field, value, hours_per_unit) in in_hours {
            if value <= 0 {
                return Err(ConfigurationError::invalid_value(
                    field,
                    value,
                    "threshold must be positive",
                ));
            }
            if value > MAX_THRESHOLD_HOURS / hours_per_unit {
                return Err(ConfigurationError::invalid_value(
                    field,
                    value,
                    "threshold exceeds ten years",
                ));
            }
        }

        if self.new_entity_warning_hours >= self.new_entity_urgent_hours {
            return Err(ConfigurationError::invalid_value(
                "urgency.new_entity_warning_hours",
                self.new_entity_warning_hours,
                "warning threshold must be below new_entity_urgent_hours",
            ));
        }

        if self.stale_warning_days >= self.stale_urgent_days {
            return Err(ConfigurationError::invalid_value(
                "urgency.stale_warning_days",
                self.stale_warning_days,
                "warning threshold must be below stale_urgent_days",
            ));
        }

        if let Some(blank) = self.flagged_statuses.iter().find(|s| s.trim().is_empty()) {
            return Err(ConfigurationError::invalid_value(
                "urgency.flagged_statuses",
                format!("{blank:?}"),
                "flagged statuses cannot be blank",
            ));
        }

        Ok(())
    }
}

/// Where the process catalog comes from
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// YAML catalog replacing the built-in one, relative to the config directory
    pub path: Option<PathBuf>,
}

/// Log output settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive; the environment default applies when unset
    pub level: Option<String>,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.urgency.due_date_warning_days, 3);
        assert_eq!(config.urgency.sla_warning_hours, 4);
        assert_eq!(config.urgency.flagged_statuses.len(), 5);
        assert!(config.catalog.path.is_none());
        assert!(!config.logging.json);
    }

    #[test]
    fn test_non_positive_threshold_rejected() {
        let urgency = UrgencyConfig {
            sla_warning_hours: 0,
            ..UrgencyConfig::default()
        };
        let err = urgency.validate().unwrap_err();
        assert!(err.to_string().contains("urgency.sla_warning_hours"));
    }

    #[test]
    fn test_inverted_pair_rejected() {
        let urgency = UrgencyConfig {
            stale_warning_days: 7,
            stale_urgent_days: 7,
            ..UrgencyConfig::default()
        };
        assert!(matches!(
            urgency.validate(),
            Err(ConfigurationError::InvalidValue { field, .. }) if field == "urgency.stale_warning_days"
        ));
    }

    #[test]
    fn test_oversized_threshold_rejected() {
        let urgency = UrgencyConfig {
            stale_urgent_days: 100_000,
            ..UrgencyConfig::default()
        };
        assert!(urgency.validate().is_err());
    }

    #[test]
    fn test_blank_flagged_status_rejected() {
        let urgency = UrgencyConfig {
            flagged_statuses: vec!["overdue".to_string(), " ".to_string()],
            ..UrgencyConfig::default()
        };
        assert!(urgency.validate().is_err());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: EngineConfig =
            serde_yaml::from_str("urgency:\n  sla_warning_hours: 6\n").unwrap();
        assert_eq!(config.urgency.sla_warning_hours, 6);
        assert_eq!(config.urgency.stale_urgent_days, 7);
    }
}
