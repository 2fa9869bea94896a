//! # Process Graphs
//!
//! Declarative process model and the status-to-step mapping built on it.
//!
//! - [`definition`] - steps, agents and transition hints of one graph
//! - [`catalog`] - immutable registry of graphs plus per-process status tables
//! - [`progress`] - position, percentage and display metadata for a status
//! - `builtin` - the compiled-in graphs of the firm

mod builtin;
pub mod catalog;
pub mod definition;
pub mod progress;

pub use catalog::{CatalogDocument, ProcessCatalog, StatusTable};
pub use definition::{ProcessAgent, ProcessDefinition, ProcessStep, StepTransition, StepType};
pub use progress::{compute_progress, percentage_for, ProcessProgress};
