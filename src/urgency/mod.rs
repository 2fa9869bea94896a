//! # Urgency Classification
//!
//! Triage signal derived purely from an entity's time fields and status,
//! independent of where the entity sits in its process graph. Nothing is
//! remembered between evaluations.
//!
//! Rules, first applicable wins:
//!
//! 1. `due_date`: past is urgent, under 3 days is a warning
//! 2. `sla_24h_deadline`: past is urgent, under 4 hours is a warning
//! 3. `created_at` with status `new`: older than 4h is urgent, 2h a warning
//! 4. `last_movement_at`: idle over 7 days is urgent, 3 days a warning
//! 5. flagged statuses (`overdue`, `escalated`, ...) are urgent
//! 6. otherwise normal

pub mod classifier;
pub mod level;

pub use classifier::UrgencyPolicy;
pub use level::{UrgencyAssessment, UrgencyLevel, UrgencyRule};

use crate::entity::EntityRecord;
use chrono::{DateTime, Utc};

/// Urgency of an entity under the default thresholds, against the wall clock
pub fn compute_urgency(entity: &EntityRecord) -> UrgencyLevel {
    UrgencyPolicy::default().classify(entity).level
}

/// Urgency of an entity under the default thresholds, at a fixed instant
pub fn compute_urgency_at(entity: &EntityRecord, now: DateTime<Utc>) -> UrgencyLevel {
    UrgencyPolicy::default().classify_at(entity, now).level
}
