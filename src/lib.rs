#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

//! # Lexflow Core
//!
//! Process/status mapping engine behind the firm's practice-management
//! dashboard.
//!
//! ## Overview
//!
//! Leads, proposals, mandate contracts, notarial filings, collections, email
//! tickets and scraper runs each move through a business process. The data
//! layer only stores a raw status string per entity; this crate interprets
//! that string against a declarative process graph to answer three questions:
//!
//! - **Where is it?** [`ProcessProgress`]: active step, percentage, owning agent
//! - **How urgent is it?** [`UrgencyLevel`]: derived from deadlines, SLA and age
//! - **What next?** an action label and optional suggestion sentences
//!
//! The engine never transitions state, performs no I/O on the hot path and
//! never fails: unknown processes, unmapped statuses and missing fields all
//! degrade to a renderable default.
//!
//! ## Module Organization
//!
//! - [`process`] - process graphs, catalog, status resolution and progress
//! - [`entity`] - the entity fields the engine reads
//! - [`urgency`] - ordered urgency rules
//! - [`recommendations`] - next-action labels and suggestions
//! - [`engine`] - per-entity view model aggregation
//! - [`config`] - configuration loading
//! - [`logging`] - tracing subscriber setup
//! - [`error`] - loader and validation errors
//!
//! ## Quick Start
//!
//! ```rust
//! use lexflow_core::{EntityRecord, ProcessEngine, UrgencyLevel};
//!
//! let engine = ProcessEngine::default();
//! let ticket = EntityRecord::with_status("escalated").subject("Consulta herencia");
//!
//! let insight = engine.assess("proceso-cobranza", &ticket);
//! assert_eq!(insight.urgency, UrgencyLevel::Urgent);
//! assert_eq!(insight.action, "Enviar Cese");
//! ```

pub mod config;
pub mod constants;
pub mod engine;
pub mod entity;
pub mod error;
pub mod logging;
pub mod process;
pub mod recommendations;
pub mod urgency;

pub use crate::config::{ConfigManager, EngineConfig, UrgencyConfig};
pub use engine::{EntityInsight, ProcessEngine};
pub use entity::EntityRecord;
pub use error::{CatalogError, EngineError, Result};
pub use process::{
    compute_progress, ProcessAgent, ProcessCatalog, ProcessDefinition, ProcessProgress,
    ProcessStep, StepTransition, StepType,
};
pub use recommendations::{next_action_label, suggestions};
pub use urgency::{compute_urgency, UrgencyAssessment, UrgencyLevel, UrgencyPolicy, UrgencyRule};
