//! Progress calculation over a process graph.
//!
//! Percentages are linear in the step's position within the full step list,
//! start and end bookends included. Graphs of different shapes are therefore
//! not percentage-comparable with each other.

use super::catalog::ProcessCatalog;
use crate::constants::fallback;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Where an entity sits in its process, ready for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessProgress {
    /// 0-based index of the active step in the full step list
    pub current: usize,
    /// Number of steps in the graph, bookends included
    pub total: usize,
    /// 0 to 100
    pub percentage: u8,
    pub step_label: String,
    pub step_description: String,
    pub agent_name: String,
    pub agent_color: String,
    pub process_name: String,
}

impl ProcessProgress {
    /// Progress reported for a process the catalog does not know.
    ///
    /// Echoes the raw status as the label so the UI never renders a blank.
    pub fn degenerate(status: &str) -> Self {
        Self {
            current: 0,
            total: 1,
            percentage: 0,
            step_label: status.to_string(),
            step_description: String::new(),
            agent_name: String::new(),
            agent_color: fallback::AGENT_COLOR.to_string(),
            process_name: String::new(),
        }
    }

    /// 1-based ordinal of the active step
    pub fn position(&self) -> usize {
        self.current + 1
    }

    pub fn is_complete(&self) -> bool {
        self.percentage == 100
    }
}

/// Linear interpolation of a step index across the graph, rounded half away from zero
pub fn percentage_for(index: usize, total: usize) -> u8 {
    if total <= 1 {
        return 0;
    }
    let ratio = index.min(total - 1) as f64 / (total - 1) as f64;
    (ratio * 100.0).round() as u8
}

/// Resolve a status to its step and describe it. Never fails.
pub fn compute_progress(catalog: &ProcessCatalog, process_id: &str, status: &str) -> ProcessProgress {
    let Some(definition) = catalog.get_process(process_id) else {
        debug!(process_id, status, "Progress requested for unknown process");
        return ProcessProgress::degenerate(status);
    };

    let step_id = catalog.resolve_step_id(process_id, status);
    let total = definition.steps.len();
    let current = definition.step_index(&step_id).unwrap_or_else(|| {
        debug!(
            process_id,
            status,
            step_id = %step_id,
            "Resolved step missing from graph, using first step"
        );
        0
    });

    let Some(step) = definition.steps.get(current) else {
        // A graph without steps has nothing to point at.
        return ProcessProgress {
            process_name: definition.name.clone(),
            ..ProcessProgress::degenerate(status)
        };
    };

    let agent = definition.agent(&step.agent_id).or_else(|| {
        trace!(
            process_id,
            step_id = %step.id,
            agent_id = %step.agent_id,
            "Step agent not defined, using first agent"
        );
        definition.agents.first()
    });

    ProcessProgress {
        current,
        total,
        percentage: percentage_for(current, total),
        step_label: step.label.clone(),
        step_description: step.description.clone(),
        agent_name: agent.map(|a| a.name.clone()).unwrap_or_default(),
        agent_color: agent
            .map(|a| a.color.clone())
            .unwrap_or_else(|| fallback::AGENT_COLOR.to_string()),
        process_name: definition.name.clone(),
    }
}
