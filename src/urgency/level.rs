use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-level triage signal, ordered so that sorting puts `Urgent` last
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
    #[default]
    Normal,
    Warning,
    Urgent,
}

impl UrgencyLevel {
    pub fn is_urgent(&self) -> bool {
        matches!(self, Self::Urgent)
    }

    /// Anything that deserves highlighting in a listing
    pub fn needs_attention(&self) -> bool {
        !matches!(self, Self::Normal)
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Warning => write!(f, "warning"),
            Self::Urgent => write!(f, "urgent"),
        }
    }
}

impl std::str::FromStr for UrgencyLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "warning" => Ok(Self::Warning),
            "urgent" => Ok(Self::Urgent),
            _ => Err(format!("Invalid urgency level: {s}")),
        }
    }
}

/// Rule of the classification chain that decided an outcome, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyRule {
    /// `due_date` is present
    DueDate,
    /// `sla_24h_deadline` is present
    SlaDeadline,
    /// `created_at` is present and the status is `new`
    NewEntityAge,
    /// `last_movement_at` is present
    Staleness,
    /// The status is one of the flagged statuses
    FlaggedStatus,
    /// Nothing applied
    Default,
}

impl fmt::Display for UrgencyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DueDate => write!(f, "due_date"),
            Self::SlaDeadline => write!(f, "sla_deadline"),
            Self::NewEntityAge => write!(f, "new_entity_age"),
            Self::Staleness => write!(f, "staleness"),
            Self::FlaggedStatus => write!(f, "flagged_status"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Outcome of classifying one entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrgencyAssessment {
    pub level: UrgencyLevel,
    pub rule: UrgencyRule,
}

impl UrgencyAssessment {
    pub fn new(level: UrgencyLevel, rule: UrgencyRule) -> Self {
        Self { level, rule }
    }
}
