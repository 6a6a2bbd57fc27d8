//! User request model for prompt composition.
//!
//! A `PromptRequest` captures everything the user told us about their task.
//! It is built once per submission and never mutated afterwards.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::composer::error::ComposeError;

/// How the final output should be structured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
    List,
    Email,
    Code,
    Essay,
    Report,
    Creative,
}

impl OutputFormat {
    /// Human-readable label used inside prompt templates.
    pub fn label(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Plain Text",
            OutputFormat::Json => "JSON",
            OutputFormat::List => "Bulleted List",
            OutputFormat::Email => "Email",
            OutputFormat::Code => "Code",
            OutputFormat::Essay => "Essay",
            OutputFormat::Report => "Report",
            OutputFormat::Creative => "Creative Writing",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How much the task needs to be broken down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TaskComplexity {
    Simple,
    Moderate,
    Complex,
    VeryComplex,
}

impl TaskComplexity {
    pub fn label(&self) -> &'static str {
        match self {
            TaskComplexity::Simple => "Simple",
            TaskComplexity::Moderate => "Moderate",
            TaskComplexity::Complex => "Complex",
            TaskComplexity::VeryComplex => "Very Complex",
        }
    }
}

impl std::fmt::Display for TaskComplexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Everything the user told us about the prompt they want.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptRequest {
    pub task_description: String,
    pub target_audience: String,
    pub desired_tone: String,
    pub output_format: OutputFormat,
    pub complexity: TaskComplexity,
    pub context: String,
    pub constraints: Vec<String>,
    pub examples_needed: bool,
}

impl PromptRequest {
    /// Create a request with the standard defaults for everything but the task.
    pub fn new(task_description: impl Into<String>) -> Self {
        Self {
            task_description: task_description.into(),
            target_audience: "general audience".to_string(),
            desired_tone: "professional and helpful".to_string(),
            output_format: OutputFormat::Text,
            complexity: TaskComplexity::Moderate,
            context: String::new(),
            constraints: Vec::new(),
            examples_needed: true,
        }
    }

    /// The task description is the only field without a usable default.
    pub fn validate(&self) -> Result<(), ComposeError> {
        if self.task_description.trim().is_empty() {
            return Err(ComposeError::EmptyTask);
        }
        Ok(())
    }

    /// Constraints joined for template interpolation, or the literal "None".
    pub fn constraints_label(&self) -> String {
        if self.constraints.is_empty() {
            "None".to_string()
        } else {
            self.constraints.join(", ")
        }
    }
}
