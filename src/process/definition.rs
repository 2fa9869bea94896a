//! Process graph definitions: steps, agents and transition hints.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Kind of node in a process graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepType {
    /// Structural entry point, exactly one per graph
    Start,
    /// Unit of work performed by an agent
    Task,
    /// Branching point between alternative outcomes
    Decision,
    /// Step that delegates into another process
    Subprocess,
    /// Structural exit point
    End,
}

impl StepType {
    /// Start and end nodes bracket the graph and carry no work
    pub fn is_bookend(&self) -> bool {
        matches!(self, Self::Start | Self::End)
    }

    /// Decisions and subprocesses count as tasks for progress purposes
    pub fn is_task_like(&self) -> bool {
        matches!(self, Self::Task | Self::Decision | Self::Subprocess)
    }
}

impl fmt::Display for StepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Task => write!(f, "task"),
            Self::Decision => write!(f, "decision"),
            Self::Subprocess => write!(f, "subprocess"),
            Self::End => write!(f, "end"),
        }
    }
}

impl std::str::FromStr for StepType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Self::Start),
            "task" => Ok(Self::Task),
            "decision" => Ok(Self::Decision),
            "subprocess" => Ok(Self::Subprocess),
            "end" => Ok(Self::End),
            _ => Err(format!("Invalid step type: {s}")),
        }
    }
}

/// Outgoing transition hint. Descriptive only, never executed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepTransition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub target: String,
}

impl StepTransition {
    pub fn to(target: impl Into<String>) -> Self {
        Self {
            label: None,
            target: target.into(),
        }
    }

    pub fn labeled(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            target: target.into(),
        }
    }
}

/// One node in a process graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub agent_id: String,
    #[serde(rename = "type")]
    pub step_type: StepType,
    #[serde(default)]
    pub next_steps: Vec<StepTransition>,
}

impl ProcessStep {
    pub fn new(
        id: impl Into<String>,
        step_type: StepType,
        agent_id: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: String::new(),
            agent_id: agent_id.into(),
            step_type,
            next_steps: Vec::new(),
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append an unlabeled transition
    pub fn then(mut self, target: impl Into<String>) -> Self {
        self.next_steps.push(StepTransition::to(target));
        self
    }

    /// Append a labeled transition, typically one outcome of a decision
    pub fn branch(mut self, label: impl Into<String>, target: impl Into<String>) -> Self {
        self.next_steps.push(StepTransition::labeled(label, target));
        self
    }
}

/// Named role responsible for one or more steps of a single graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessAgent {
    pub id: String,
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub description: String,
}

impl ProcessAgent {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        color: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            description: description.into(),
        }
    }
}

/// A named, ordered process graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub steps: Vec<ProcessStep>,
    pub agents: Vec<ProcessAgent>,
}

impl ProcessDefinition {
    pub fn step(&self, step_id: &str) -> Option<&ProcessStep> {
        self.steps.iter().find(|step| step.id == step_id)
    }

    /// Position of a step in the full step list, bookends included
    pub fn step_index(&self, step_id: &str) -> Option<usize> {
        self.steps.iter().position(|step| step.id == step_id)
    }

    pub fn agent(&self, agent_id: &str) -> Option<&ProcessAgent> {
        self.agents.iter().find(|agent| agent.id == agent_id)
    }

    pub fn first_step(&self) -> Option<&ProcessStep> {
        self.steps.first()
    }

    /// Steps that carry work, in graph order
    pub fn task_steps(&self) -> impl Iterator<Item = &ProcessStep> {
        self.steps.iter().filter(|step| step.step_type.is_task_like())
    }

    /// Steps owned by the given agent, in graph order
    pub fn steps_for_agent<'a>(&'a self, agent_id: &'a str) -> impl Iterator<Item = &'a ProcessStep> {
        self.steps.iter().filter(move |step| step.agent_id == agent_id)
    }

    /// Check the structural invariants of the graph.
    ///
    /// Exactly one start step which comes first, at least one end step, unique
    /// step and agent ids, and every agent reference and transition target
    /// resolving inside the graph.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let start_count = self
            .steps
            .iter()
            .filter(|step| step.step_type == StepType::Start)
            .count();
        if start_count != 1 {
            return Err(CatalogError::StartStepCount {
                process_id: self.id.clone(),
                count: start_count,
            });
        }

        if let Some(first) = self.first_step() {
            if first.step_type != StepType::Start {
                return Err(CatalogError::StartNotFirst {
                    process_id: self.id.clone(),
                    step_id: first.id.clone(),
                });
            }
        }

        if !self.steps.iter().any(|step| step.step_type == StepType::End) {
            return Err(CatalogError::MissingEndStep {
                process_id: self.id.clone(),
            });
        }

        let mut agent_ids = HashSet::new();
        for agent in &self.agents {
            if !agent_ids.insert(agent.id.as_str()) {
                return Err(CatalogError::DuplicateAgent {
                    process_id: self.id.clone(),
                    agent_id: agent.id.clone(),
                });
            }
        }

        let mut step_ids = HashSet::new();
        for step in &self.steps {
            if !step_ids.insert(step.id.as_str()) {
                return Err(CatalogError::DuplicateStep {
                    process_id: self.id.clone(),
                    step_id: step.id.clone(),
                });
            }
            if !agent_ids.contains(step.agent_id.as_str()) {
                return Err(CatalogError::UnknownAgent {
                    process_id: self.id.clone(),
                    step_id: step.id.clone(),
                    agent_id: step.agent_id.clone(),
                });
            }
        }

        for step in &self.steps {
            if let Some(transition) = step
                .next_steps
                .iter()
                .find(|transition| !step_ids.contains(transition.target.as_str()))
            {
                return Err(CatalogError::UnknownTransitionTarget {
                    process_id: self.id.clone(),
                    step_id: step.id.clone(),
                    target: transition.target.clone(),
                });
            }
        }

        Ok(())
    }
}
