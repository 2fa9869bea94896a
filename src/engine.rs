//! # Process Engine
//!
//! Bundles a catalog and an urgency policy so page-level aggregators can turn
//! each fetched entity into a single view model. The four underlying
//! computations stay independent; this only calls them side by side.

use crate::config::ConfigManager;
use crate::entity::EntityRecord;
use crate::process::{ProcessCatalog, ProcessProgress};
use crate::recommendations::{next_action_label, suggestions_with_urgency};
use crate::urgency::{UrgencyAssessment, UrgencyLevel, UrgencyPolicy};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

/// Everything the dashboard renders for one entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityInsight {
    pub progress: ProcessProgress,
    pub urgency: UrgencyLevel,
    #[serde(skip)]
    pub assessment: UrgencyAssessment,
    pub action: &'static str,
    pub suggestions: Vec<String>,
}

/// Stateless facade over an immutable catalog
#[derive(Debug, Clone)]
pub struct ProcessEngine {
    catalog: Arc<ProcessCatalog>,
    policy: UrgencyPolicy,
}

impl Default for ProcessEngine {
    fn default() -> Self {
        Self::new(Arc::new(ProcessCatalog::builtin()), UrgencyPolicy::default())
    }
}

impl ProcessEngine {
    pub fn new(catalog: Arc<ProcessCatalog>, policy: UrgencyPolicy) -> Self {
        Self { catalog, policy }
    }

    /// Engine wired from a loaded configuration
    pub fn from_config(manager: &ConfigManager) -> crate::Result<Self> {
        let catalog = manager.catalog()?;
        let policy = UrgencyPolicy::from_config(&manager.config().urgency);
        Ok(Self::new(Arc::new(catalog), policy))
    }

    pub fn catalog(&self) -> &ProcessCatalog {
        &self.catalog
    }

    pub fn policy(&self) -> &UrgencyPolicy {
        &self.policy
    }

    pub fn compute_progress(&self, process_id: &str, status: &str) -> ProcessProgress {
        self.catalog.compute_progress(process_id, status)
    }

    pub fn compute_urgency(&self, entity: &EntityRecord) -> UrgencyLevel {
        self.policy.classify(entity).level
    }

    pub fn next_action_label(&self, process_id: &str, status: &str) -> &'static str {
        next_action_label(process_id, status)
    }

    pub fn suggestions(&self, process_id: &str, status: &str, entity: &EntityRecord) -> Vec<String> {
        let urgency = self.compute_urgency(entity);
        suggestions_with_urgency(process_id, status, entity, urgency)
    }

    /// View model for one entity, evaluated against the wall clock
    pub fn assess(&self, process_id: &str, entity: &EntityRecord) -> EntityInsight {
        self.assess_at(process_id, entity, Utc::now())
    }

    /// View model for one entity at a fixed instant
    pub fn assess_at(&self, process_id: &str, entity: &EntityRecord, now: DateTime<Utc>) -> EntityInsight {
        let status = entity.status_str();
        let assessment = self.policy.classify_at(entity, now);

        EntityInsight {
            progress: self.catalog.compute_progress(process_id, status),
            urgency: assessment.level,
            assessment,
            action: next_action_label(process_id, status),
            suggestions: suggestions_with_urgency(process_id, status, entity, assessment.level),
        }
    }

    /// Assess a collection and order it most urgent first.
    ///
    /// The sort is stable, so entities of equal urgency keep their input order.
    pub fn triage(&self, process_id: &str, entities: &[EntityRecord]) -> Vec<EntityInsight> {
        self.triage_at(process_id, entities, Utc::now())
    }

    pub fn triage_at(
        &self,
        process_id: &str,
        entities: &[EntityRecord],
        now: DateTime<Utc>,
    ) -> Vec<EntityInsight> {
        let mut insights: Vec<EntityInsight> = entities
            .iter()
            .map(|entity| self.assess_at(process_id, entity, now))
            .collect();
        insights.sort_by(|a, b| b.urgency.cmp(&a.urgency));
        insights
    }
}
