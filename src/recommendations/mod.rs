//! # Recommendations
//!
//! Lookup tables turning a (process, status) pair into what a person should do
//! next: a short action label for buttons and optional suggestion sentences.

pub mod actions;
pub mod suggestions;

pub use actions::{action_entries, next_action_label, ActionTable};
pub use suggestions::{suggestions, suggestions_with_urgency};
