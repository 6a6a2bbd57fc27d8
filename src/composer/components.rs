//! Intermediate and final prompt structures.

use serde::{Deserialize, Serialize};

/// Substituted for the examples section when the user opts out.
pub const EXAMPLES_OMITTED: &str = "Examples omitted per user request";

/// Substituted for the subtask list when the task needs no breakdown.
pub const SIMPLE_TASK_STEP: &str = "Task is simple enough to complete in one step";

/// Output of the five principles, one field per principle.
///
/// Produced by either the generator path or the fallback path and consumed
/// only by the assembler.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromptComponents {
    pub direction: String,
    pub format_specification: String,
    pub examples: Vec<String>,
    pub quality_criteria: String,
    pub subtasks: Vec<String>,
}

/// The assembled prompt handed back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPrompt {
    pub direction: String,
    pub format_specification: String,
    pub examples: Vec<String>,
    pub quality_criteria: String,
    pub subtasks: Vec<String>,
    /// Complete prompt text, ready to paste into any chat interface.
    pub final_prompt: String,
    /// Mean of five completeness checks, in [0, 1]. A proxy for how filled-in
    /// the components are, not a measure of semantic quality.
    pub confidence_score: f64,
}

impl GeneratedPrompt {
    /// Per-principle fill ratios for the breakdown view, each capped at 1.0.
    pub fn completeness_ratios(&self) -> [(&'static str, f64); 5] {
        [
            ("Direction", (self.direction.chars().count() as f64 / 100.0).min(1.0)),
            (
                "Format",
                (self.format_specification.chars().count() as f64 / 50.0).min(1.0),
            ),
            ("Examples", (self.examples.len() as f64 / 2.0).min(1.0)),
            (
                "Quality",
                (self.quality_criteria.chars().count() as f64 / 75.0).min(1.0),
            ),
            ("Labor", (self.subtasks.len() as f64 / 3.0).min(1.0)),
        ]
    }
}
