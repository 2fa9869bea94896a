//! Ordered urgency rules.
//!
//! The chain is evaluated on field presence, most specific first. Once a
//! rule's field is present that rule decides the outcome, including `Normal`,
//! and later rules are never consulted. Rule 3 additionally needs the `new`
//! status; without it evaluation moves on to rule 4.

use super::level::{UrgencyAssessment, UrgencyLevel, UrgencyRule};
use crate::config::UrgencyConfig;
use crate::constants::status_groups;
use crate::entity::{parse_timestamp, present, EntityRecord};
use chrono::{DateTime, Duration, Utc};
use tracing::trace;

/// Thresholds and flagged statuses used by the classifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrgencyPolicy {
    pub due_date_warning: Duration,
    pub sla_warning: Duration,
    pub new_entity_urgent: Duration,
    pub new_entity_warning: Duration,
    pub stale_urgent: Duration,
    pub stale_warning: Duration,
    pub flagged_statuses: Vec<String>,
}

impl Default for UrgencyPolicy {
    fn default() -> Self {
        Self::from_config(&UrgencyConfig::default())
    }
}

impl UrgencyPolicy {
    pub fn from_config(config: &UrgencyConfig) -> Self {
        Self {
            due_date_warning: Duration::days(config.due_date_warning_days),
            sla_warning: Duration::hours(config.sla_warning_hours),
            new_entity_urgent: Duration::hours(config.new_entity_urgent_hours),
            new_entity_warning: Duration::hours(config.new_entity_warning_hours),
            stale_urgent: Duration::days(config.stale_urgent_days),
            stale_warning: Duration::days(config.stale_warning_days),
            flagged_statuses: config.flagged_statuses.clone(),
        }
    }

    /// Classify against the current wall clock
    pub fn classify(&self, entity: &EntityRecord) -> UrgencyAssessment {
        self.classify_at(entity, Utc::now())
    }

    /// Classify against an explicit instant
    pub fn classify_at(&self, entity: &EntityRecord, now: DateTime<Utc>) -> UrgencyAssessment {
        if let Some(raw) = present(&entity.due_date) {
            let level = deadline_level(raw, now, self.due_date_warning);
            return UrgencyAssessment::new(level, UrgencyRule::DueDate);
        }

        if let Some(raw) = present(&entity.sla_24h_deadline) {
            let level = deadline_level(raw, now, self.sla_warning);
            return UrgencyAssessment::new(level, UrgencyRule::SlaDeadline);
        }

        if let Some(raw) = present(&entity.created_at) {
            if entity.status_str() == status_groups::NEW_STATUS {
                let level = age_level(raw, now, self.new_entity_urgent, self.new_entity_warning);
                return UrgencyAssessment::new(level, UrgencyRule::NewEntityAge);
            }
        }

        if let Some(raw) = present(&entity.last_movement_at) {
            let level = age_level(raw, now, self.stale_urgent, self.stale_warning);
            return UrgencyAssessment::new(level, UrgencyRule::Staleness);
        }

        if self.is_flagged(entity.status_str()) {
            return UrgencyAssessment::new(UrgencyLevel::Urgent, UrgencyRule::FlaggedStatus);
        }

        UrgencyAssessment::new(UrgencyLevel::Normal, UrgencyRule::Default)
    }

    pub fn is_flagged(&self, status: &str) -> bool {
        self.flagged_statuses.iter().any(|flagged| flagged == status)
    }
}

/// Past deadlines are urgent, deadlines inside the window a warning.
/// Both comparisons are strict; an invalid date satisfies neither.
fn deadline_level(raw: &str, now: DateTime<Utc>, warning_window: Duration) -> UrgencyLevel {
    let Some(deadline) = parse_timestamp(raw) else {
        trace!(value = raw, "Unparseable deadline, treating as not due");
        return UrgencyLevel::Normal;
    };

    let remaining = deadline - now;
    if remaining < Duration::zero() {
        UrgencyLevel::Urgent
    } else if remaining < warning_window {
        UrgencyLevel::Warning
    } else {
        UrgencyLevel::Normal
    }
}

/// Ages strictly beyond a threshold escalate; an invalid date never does.
fn age_level(raw: &str, now: DateTime<Utc>, urgent_after: Duration, warning_after: Duration) -> UrgencyLevel {
    let Some(since) = parse_timestamp(raw) else {
        trace!(value = raw, "Unparseable timestamp, treating as fresh");
        return UrgencyLevel::Normal;
    };

    let age = now - since;
    if age > urgent_after {
        UrgencyLevel::Urgent
    } else if age > warning_after {
        UrgencyLevel::Warning
    } else {
        UrgencyLevel::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-05-20T15:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn at(offset: Duration) -> String {
        (now() + offset).to_rfc3339()
    }

    #[test]
    fn test_due_date_rules() {
        let policy = UrgencyPolicy::default();
        let past = EntityRecord::default().due_date(at(Duration::minutes(-1)));
        let soon = EntityRecord::default().due_date(at(Duration::days(2)));
        let later = EntityRecord::default().due_date(at(Duration::days(5)));

        assert_eq!(policy.classify_at(&past, now()).level, UrgencyLevel::Urgent);
        assert_eq!(policy.classify_at(&soon, now()).level, UrgencyLevel::Warning);
        assert_eq!(
            policy.classify_at(&later, now()),
            UrgencyAssessment::new(UrgencyLevel::Normal, UrgencyRule::DueDate)
        );
    }

    #[test]
    fn test_due_date_exactly_now_is_warning_not_urgent() {
        let policy = UrgencyPolicy::default();
        let entity = EntityRecord::default().due_date(at(Duration::zero()));
        assert_eq!(policy.classify_at(&entity, now()).level, UrgencyLevel::Warning);
    }

    #[test]
    fn test_due_date_exactly_at_window_edge_is_normal() {
        let policy = UrgencyPolicy::default();
        let entity = EntityRecord::default().due_date(at(Duration::days(3)));
        assert_eq!(policy.classify_at(&entity, now()).level, UrgencyLevel::Normal);
    }

    #[test]
    fn test_sla_rules() {
        let policy = UrgencyPolicy::default();
        let breached = EntityRecord::default().sla_24h_deadline(at(Duration::hours(-2)));
        let close = EntityRecord::default().sla_24h_deadline(at(Duration::hours(3)));
        let comfortable = EntityRecord::default().sla_24h_deadline(at(Duration::hours(20)));

        assert_eq!(policy.classify_at(&breached, now()).level, UrgencyLevel::Urgent);
        assert_eq!(
            policy.classify_at(&close, now()),
            UrgencyAssessment::new(UrgencyLevel::Warning, UrgencyRule::SlaDeadline)
        );
        assert_eq!(policy.classify_at(&comfortable, now()).level, UrgencyLevel::Normal);
    }

    #[test]
    fn test_new_entity_age_rules() {
        let policy = UrgencyPolicy::default();
        let lead = |hours: i64| {
            EntityRecord::with_status("new").created_at(at(Duration::hours(-hours)))
        };

        assert_eq!(policy.classify_at(&lead(5), now()).level, UrgencyLevel::Urgent);
        assert_eq!(policy.classify_at(&lead(3), now()).level, UrgencyLevel::Warning);
        assert_eq!(policy.classify_at(&lead(1), now()).level, UrgencyLevel::Normal);
        // exactly at the threshold is not beyond it
        assert_eq!(policy.classify_at(&lead(4), now()).level, UrgencyLevel::Warning);
        assert_eq!(policy.classify_at(&lead(2), now()).level, UrgencyLevel::Normal);
    }

    #[test]
    fn test_created_at_without_new_status_moves_on() {
        let policy = UrgencyPolicy::default();
        let entity = EntityRecord::with_status("contacted")
            .created_at(at(Duration::hours(-10)))
            .last_movement_at(at(Duration::days(-4)));
        assert_eq!(
            policy.classify_at(&entity, now()),
            UrgencyAssessment::new(UrgencyLevel::Warning, UrgencyRule::Staleness)
        );
    }

    #[test]
    fn test_staleness_rules() {
        let policy = UrgencyPolicy::default();
        let idle = |days: i64| EntityRecord::default().last_movement_at(at(Duration::days(-days)));

        assert_eq!(policy.classify_at(&idle(8), now()).level, UrgencyLevel::Urgent);
        assert_eq!(policy.classify_at(&idle(4), now()).level, UrgencyLevel::Warning);
        assert_eq!(policy.classify_at(&idle(1), now()).level, UrgencyLevel::Normal);
    }

    #[test]
    fn test_flagged_statuses() {
        let policy = UrgencyPolicy::default();
        for status in status_groups::FLAGGED_STATUSES {
            assert_eq!(
                policy.classify_at(&EntityRecord::with_status(*status), now()),
                UrgencyAssessment::new(UrgencyLevel::Urgent, UrgencyRule::FlaggedStatus)
            );
        }
        assert_eq!(
            policy.classify_at(&EntityRecord::with_status("paid"), now()),
            UrgencyAssessment::new(UrgencyLevel::Normal, UrgencyRule::Default)
        );
    }

    #[test]
    fn test_present_field_masks_flagged_status() {
        let policy = UrgencyPolicy::default();
        let entity = EntityRecord::with_status("escalated").due_date(at(Duration::days(10)));
        assert_eq!(
            policy.classify_at(&entity, now()),
            UrgencyAssessment::new(UrgencyLevel::Normal, UrgencyRule::DueDate)
        );
    }

    #[test]
    fn test_invalid_dates_compare_false() {
        let policy = UrgencyPolicy::default();
        let bad_due = EntityRecord::with_status("overdue").due_date("no es fecha");
        assert_eq!(
            policy.classify_at(&bad_due, now()),
            UrgencyAssessment::new(UrgencyLevel::Normal, UrgencyRule::DueDate)
        );

        let bad_age = EntityRecord::with_status("new").created_at("ayer");
        assert_eq!(policy.classify_at(&bad_age, now()).level, UrgencyLevel::Normal);
    }

    #[test]
    fn test_empty_strings_are_absent() {
        let policy = UrgencyPolicy::default();
        let entity = EntityRecord::with_status("suspended").due_date("").sla_24h_deadline("");
        assert_eq!(
            policy.classify_at(&entity, now()).rule,
            UrgencyRule::FlaggedStatus
        );
    }

    #[test]
    fn test_custom_thresholds() {
        let config = UrgencyConfig {
            sla_warning_hours: 1,
            ..UrgencyConfig::default()
        };
        let policy = UrgencyPolicy::from_config(&config);
        let entity = EntityRecord::default().sla_24h_deadline(at(Duration::hours(3)));
        assert_eq!(policy.classify_at(&entity, now()).level, UrgencyLevel::Normal);
    }
}
