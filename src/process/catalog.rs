//! # Process Catalog
//!
//! Immutable registry of process graphs and their status tables. A catalog is
//! built once (from the compiled-in graphs or from a YAML document) and then
//! shared by reference with every computation.
//!
//! ## Usage
//!
//! ```rust
//! use lexflow_core::process::ProcessCatalog;
//!
//! let catalog = ProcessCatalog::builtin();
//! assert_eq!(catalog.resolve_step_id("proceso-cobranza", "overdue"), "carta_cobranza");
//!
//! let progress = catalog.compute_progress("proceso-cobranza", "overdue");
//! assert!(progress.percentage > 0);
//! ```

use super::builtin::builtin_processes;
use super::definition::ProcessDefinition;
use super::progress::ProcessProgress;
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, trace};

/// Raw entity status to step id, for a single process
pub type StatusTable = BTreeMap<String, String>;

static SHARED_CATALOG: OnceLock<ProcessCatalog> = OnceLock::new();

/// On-disk shape of a custom catalog
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub processes: Vec<ProcessDefinition>,
    #[serde(default)]
    pub status_tables: BTreeMap<String, StatusTable>,
}

/// Registry of process graphs, immutable after construction
#[derive(Debug, Clone)]
pub struct ProcessCatalog {
    definitions: Vec<ProcessDefinition>,
    index: HashMap<String, usize>,
    status_tables: BTreeMap<String, StatusTable>,
}

impl ProcessCatalog {
    /// Build a catalog from already constructed parts.
    ///
    /// No structural validation is performed; call [`ProcessCatalog::validate`]
    /// when the parts come from an untrusted source. When two definitions share
    /// an id the first one wins lookups.
    pub fn new(
        definitions: Vec<ProcessDefinition>,
        status_tables: BTreeMap<String, StatusTable>,
    ) -> Self {
        let mut index = HashMap::with_capacity(definitions.len());
        for (position, definition) in definitions.iter().enumerate() {
            index.entry(definition.id.clone()).or_insert(position);
        }

        Self {
            definitions,
            index,
            status_tables,
        }
    }

    /// The compiled-in catalog of the firm's ten business processes
    pub fn builtin() -> Self {
        let (definitions, tables): (Vec<_>, Vec<_>) = builtin_processes()
            .into_iter()
            .map(|(definition, table)| {
                let id = definition.id.clone();
                (definition, (id, table))
            })
            .unzip();

        Self::new(definitions, tables.into_iter().collect())
    }

    /// Process-wide built-in catalog, initialized on first use
    pub fn shared() -> &'static ProcessCatalog {
        SHARED_CATALOG.get_or_init(|| {
            let catalog = Self::builtin();
            debug!(
                processes = catalog.len(),
                "Built-in process catalog initialized"
            );
            catalog
        })
    }

    /// Parse and validate a catalog from a YAML document
    pub fn from_yaml_str(source_name: &str, yaml: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_yaml::from_str(yaml)
            .map_err(|e| CatalogError::invalid_yaml(source_name, e))?;
        let catalog = Self::new(document.processes, document.status_tables);
        catalog.validate()?;

        debug!(
            source = source_name,
            processes = catalog.len(),
            "Process catalog loaded"
        );
        Ok(catalog)
    }

    /// Read, parse and validate a catalog file
    pub fn from_yaml_file(path: &Path) -> Result<Self, CatalogError> {
        let source_name = path.display().to_string();
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::file_read_error(source_name.clone(), e))?;
        Self::from_yaml_str(&source_name, &yaml)
    }

    /// Look up a process graph by its exact id
    pub fn get_process(&self, process_id: &str) -> Option<&ProcessDefinition> {
        self.index
            .get(process_id)
            .and_then(|&position| self.definitions.get(position))
    }

    pub fn processes(&self) -> &[ProcessDefinition] {
        &self.definitions
    }

    pub fn process_ids(&self) -> impl Iterator<Item = &str> {
        self.definitions.iter().map(|definition| definition.id.as_str())
    }

    pub fn status_table(&self, process_id: &str) -> Option<&StatusTable> {
        self.status_tables.get(process_id)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Map an entity status onto the step currently active in a process.
    ///
    /// Unmapped statuses resolve to the first step of the graph, so they are
    /// indistinguishable from a process that has not started. An unknown
    /// process resolves to an empty string.
    pub fn resolve_step_id(&self, process_id: &str, status: &str) -> String {
        let Some(definition) = self.get_process(process_id) else {
            debug!(process_id, status, "Unknown process, no step to resolve");
            return String::new();
        };

        if let Some(step_id) = self
            .status_tables
            .get(process_id)
            .and_then(|table| table.get(status))
        {
            return step_id.clone();
        }

        trace!(
            process_id,
            status,
            "Status not mapped, falling back to first step"
        );
        definition
            .first_step()
            .map(|step| step.id.clone())
            .unwrap_or_default()
    }

    /// Position, percentage and display metadata for an entity status
    pub fn compute_progress(&self, process_id: &str, status: &str) -> ProcessProgress {
        super::progress::compute_progress(self, process_id, status)
    }

    /// Statuses of a process that have a row in its status table
    pub fn mapped_statuses(&self, process_id: &str) -> Vec<&str> {
        self.status_tables
            .get(process_id)
            .map(|table| table.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Check every graph and status table against the structural invariants
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for definition in &self.definitions {
            if !seen.insert(definition.id.as_str()) {
                return Err(CatalogError::DuplicateProcess {
                    process_id: definition.id.clone(),
                });
            }
            definition.validate()?;
        }

        for (process_id, table) in &self.status_tables {
            let definition = self.get_process(process_id).ok_or_else(|| {
                CatalogError::UnknownStatusTableProcess {
                    process_id: process_id.clone(),
                }
            })?;

            if let Some((status, step_id)) = table
                .iter()
                .find(|(_, step_id)| definition.step(step_id).is_none())
            {
                return Err(CatalogError::UnknownStatusTarget {
                    process_id: process_id.clone(),
                    status: status.clone(),
                    step_id: step_id.clone(),
                });
            }
        }

        Ok(())
    }
}

impl Default for ProcessCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
