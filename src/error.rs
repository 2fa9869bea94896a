//! Error types for the Lexflow engine.
//!
//! Only the loaders and validators surface errors. Progress, urgency, action
//! and suggestion computations always degrade to a renderable default instead.

use crate::config::ConfigurationError;
use thiserror::Error;

/// Structural problems found in a process catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Process '{process_id}' has {count} start steps, expected exactly one")]
    StartStepCount { process_id: String, count: usize },

    #[error("Process '{process_id}' has no end step")]
    MissingEndStep { process_id: String },

    #[error("Process '{process_id}' must begin with its start step, found '{step_id}'")]
    StartNotFirst { process_id: String, step_id: String },

    #[error("Process '{process_id}' defines step '{step_id}' more than once")]
    DuplicateStep { process_id: String, step_id: String },

    #[error("Process '{process_id}' defines agent '{agent_id}' more than once")]
    DuplicateAgent { process_id: String, agent_id: String },

    #[error("Step '{step_id}' in process '{process_id}' references unknown agent '{agent_id}'")]
    UnknownAgent {
        process_id: String,
        step_id: String,
        agent_id: String,
    },

    #[error("Step '{step_id}' in process '{process_id}' transitions to unknown step '{target}'")]
    UnknownTransitionTarget {
        process_id: String,
        step_id: String,
        target: String,
    },

    #[error("Status '{status}' of process '{process_id}' maps to unknown step '{step_id}'")]
    UnknownStatusTarget {
        process_id: String,
        status: String,
        step_id: String,
    },

    #[error("Status table references unknown process '{process_id}'")]
    UnknownStatusTableProcess { process_id: String },

    #[error("Process '{process_id}' is defined more than once")]
    DuplicateProcess { process_id: String },

    #[error("Invalid YAML in catalog '{source_name}': {error}")]
    InvalidYaml { source_name: String, error: String },

    #[error("Failed to read catalog file '{file_path}': {error}")]
    FileReadError { file_path: String, error: String },
}

impl CatalogError {
    pub fn file_read_error(file_path: impl Into<String>, error: std::io::Error) -> Self {
        Self::FileReadError {
            file_path: file_path.into(),
            error: error.to_string(),
        }
    }

    pub fn invalid_yaml(source_name: impl Into<String>, error: serde_yaml::Error) -> Self {
        Self::InvalidYaml {
            source_name: source_name.into(),
            error: error.to_string(),
        }
    }

    /// Process the error belongs to, when it is scoped to one.
    pub fn process_id(&self) -> Option<&str> {
        match self {
            Self::StartStepCount { process_id, .. }
            | Self::MissingEndStep { process_id }
            | Self::StartNotFirst { process_id, .. }
            | Self::DuplicateStep { process_id, .. }
            | Self::DuplicateAgent { process_id, .. }
            | Self::UnknownAgent { process_id, .. }
            | Self::UnknownTransitionTarget { process_id, .. }
            | Self::UnknownStatusTarget { process_id, .. }
            | Self::UnknownStatusTableProcess { process_id }
            | Self::DuplicateProcess { process_id } => Some(process_id),
            Self::InvalidYaml { .. } | Self::FileReadError { .. } => None,
        }
    }
}

/// Crate-level error wrapping the loader failures.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_messages() {
        let err = CatalogError::UnknownAgent {
            process_id: "proceso-cobranza".to_string(),
            step_id: "cobro".to_string(),
            agent_id: "fantasma".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Step 'cobro' in process 'proceso-cobranza' references unknown agent 'fantasma'"
        );
        assert_eq!(err.process_id(), Some("proceso-cobranza"));
    }

    #[test]
    fn test_engine_error_wraps_catalog_error() {
        let err: EngineError = CatalogError::MissingEndStep {
            process_id: "p".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Catalog error: Process 'p' has no end step");
    }
}
