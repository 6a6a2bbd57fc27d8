// Library exports for Promptly CLI components

pub mod api;
pub mod composer;
pub mod config;
pub mod output;

// Re-export commonly used types
pub use api::ApiClient;
pub use composer::{compose, ComposeError, ComposeOutcome, PromptSource};
pub use composer::{GeneratedPrompt, PromptComponents, EXAMPLES_OMITTED, SIMPLE_TASK_STEP};
pub use composer::{GeneratorCapability, PrincipleTemplate};
pub use composer::{OutputFormat, PromptRequest, TaskComplexity};
pub use config::Config;
pub use output::OutputHandler;
