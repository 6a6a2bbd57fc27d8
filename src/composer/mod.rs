//! Prompt composer implementing the Five Principles of Prompting.
//!
//! The composer takes a structured request and returns a composite prompt,
//! either through five templated generator calls or through deterministic
//! offline templates. A generator failure degrades the whole request to the
//! offline path; partial results never blend into the output.

use crate::composer::assembler::assemble;
use crate::composer::fallback::fallback_components;
use crate::composer::principles::apply_principles;
use serde::Serialize;

pub mod assembler;
pub mod components;
pub mod error;
pub mod fallback;
pub mod principles;
pub mod request;

pub use components::{GeneratedPrompt, PromptComponents, EXAMPLES_OMITTED, SIMPLE_TASK_STEP};
pub use error::ComposeError;
pub use principles::{GeneratorCapability, PrincipleTemplate};
pub use request::{OutputFormat, PromptRequest, TaskComplexity};

/// Which path produced the composed prompt.
///
/// "Not configured" and "errored" both route to the offline templates, but
/// callers can still tell them apart for user messaging.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "detail")]
pub enum PromptSource {
    /// All five principle calls completed through the generator.
    Generator,
    /// No generator was configured; offline templates were used directly.
    Fallback,
    /// The generator failed mid-sequence; all five components were rebuilt
    /// offline. The reason is a non-fatal notice, not an error.
    Degraded(String),
}

/// A composed prompt together with the path that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct ComposeOutcome {
    pub prompt: GeneratedPrompt,
    pub source: PromptSource,
}

/// Compose a prompt for the given request.
///
/// Pass `None` to force the offline path. The only error is an empty task
/// description; generator trouble degrades the request instead of failing it,
/// so the caller always gets a fully populated prompt back.
pub async fn compose(
    request: &PromptRequest,
    capability: Option<&dyn GeneratorCapability>,
) -> Result<ComposeOutcome, ComposeError> {
    request.validate()?;

    let (components, source) = match capability {
        None => (fallback_components(request), PromptSource::Fallback),
        Some(capability) => match apply_principles(request, capability).await {
            Ok(components) => (components, PromptSource::Generator),
            Err(error) => (
                fallback_components(request),
                PromptSource::Degraded(error.to_string()),
            ),
        },
    };

    Ok(ComposeOutcome {
        prompt: assemble(components),
        source,
    })
}
