//! The five principle templates and the AI-assisted generation path.
//!
//! Each principle is one templated instruction filled from the request and
//! sent to the generator. The five calls are independent of each other, so
//! they are joined concurrently; the first failure cancels the join and every
//! partial result is discarded.

use anyhow::Result;
use async_trait::async_trait;

use crate::composer::components::{PromptComponents, EXAMPLES_OMITTED};
use crate::composer::request::PromptRequest;

/// Response rules prepended to every generator call.
const RESPONSE_RULES: &str = "\
RULES:
- Respond with plain text only, no markdown formatting
- Never add explanations or commentary outside the requested content
- Follow the specified output format precisely
";

/// Identifies one of the five templated generation steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrincipleTemplate {
    Direction,
    Format,
    Examples,
    Quality,
    Labor,
}

impl PrincipleTemplate {
    pub fn name(&self) -> &'static str {
        match self {
            PrincipleTemplate::Direction => "direction",
            PrincipleTemplate::Format => "format",
            PrincipleTemplate::Examples => "examples",
            PrincipleTemplate::Quality => "quality",
            PrincipleTemplate::Labor => "labor",
        }
    }

    /// Fill the template with the request's fields.
    pub fn instruction(&self, request: &PromptRequest) -> String {
        match self {
            PrincipleTemplate::Direction => format!(
                "{}Analyze this task and create clear, specific direction:\n\n\
                 Task: {}\n\
                 Target Audience: {}\n\
                 Desired Tone: {}\n\
                 Context: {}\n\n\
                 Create a clear direction statement that tells the AI exactly what to do,\n\
                 who the audience is, and what tone to use. Be specific and actionable.\n\n\
                 Direction:",
                RESPONSE_RULES,
                request.task_description,
                request.target_audience,
                request.desired_tone,
                request.context,
            ),
            PrincipleTemplate::Format => format!(
                "{}Create specific format instructions for this output:\n\n\
                 Desired Format: {}\n\
                 Constraints: {}\n\n\
                 Provide detailed formatting requirements including structure,\n\
                 length, style, and any specific elements that must be included.\n\n\
                 Format Specification:",
                RESPONSE_RULES,
                request.output_format.label(),
                request.constraints_label(),
            ),
            PrincipleTemplate::Examples => format!(
                "{}Generate 2-3 relevant examples for this task:\n\n\
                 Task: {}\n\
                 Output Format: {}\n\
                 Tone: {}\n\n\
                 Create examples that demonstrate exactly what good output looks like.\n\
                 Make them diverse but all high-quality. One example per line.\n\n\
                 Examples:",
                RESPONSE_RULES,
                request.task_description,
                request.output_format.label(),
                request.desired_tone,
            ),
            PrincipleTemplate::Quality => format!(
                "{}Define quality criteria for evaluating the output:\n\n\
                 Task: {}\n\
                 Audience: {}\n\
                 Output Format: {}\n\n\
                 Create specific, measurable criteria for what makes a high-quality response.\n\
                 Include both content quality and format adherence.\n\n\
                 Quality Criteria:",
                RESPONSE_RULES,
                request.task_description,
                request.target_audience,
                request.output_format.label(),
            ),
            PrincipleTemplate::Labor => format!(
                "{}Break down this task into manageable subtasks:\n\n\
                 Task: {}\n\
                 Complexity: {}\n\n\
                 If the task is complex, divide it into 3-5 logical subtasks.\n\
                 If it's simple, explain why it doesn't need division.\n\
                 Order the subtasks logically, one per line.\n\n\
                 Subtasks:",
                RESPONSE_RULES,
                request.task_description,
                request.complexity.label(),
            ),
        }
    }
}

/// External text generation the composer may call.
///
/// Implementations are opaque to the composer: instruction in, text out, may
/// fail. Each template is invoked at most once per compose request.
#[async_trait]
pub trait GeneratorCapability: Send + Sync {
    async fn generate(&self, template: PrincipleTemplate, instruction: &str) -> Result<String>;
}

/// Run all five principles through the generator.
///
/// The Examples call is skipped entirely when the user opted out; the
/// omission sentinel is substituted without touching the generator.
pub async fn apply_principles(
    request: &PromptRequest,
    capability: &dyn GeneratorCapability,
) -> Result<PromptComponents> {
    let direction = fill(capability, PrincipleTemplate::Direction, request);
    let format_specification = fill(capability, PrincipleTemplate::Format, request);
    let quality_criteria = fill(capability, PrincipleTemplate::Quality, request);
    let labor = fill(capability, PrincipleTemplate::Labor, request);

    if request.examples_needed {
        let examples = fill(capability, PrincipleTemplate::Examples, request);
        let (direction, format_specification, examples, quality_criteria, labor) =
            tokio::try_join!(direction, format_specification, examples, quality_criteria, labor)?;
        Ok(PromptComponents {
            direction,
            format_specification,
            examples: split_lines(&examples),
            quality_criteria,
            subtasks: split_lines(&labor),
        })
    } else {
        let (direction, format_specification, quality_criteria, labor) =
            tokio::try_join!(direction, format_specification, quality_criteria, labor)?;
        Ok(PromptComponents {
            direction,
            format_specification,
            examples: vec![EXAMPLES_OMITTED.to_string()],
            quality_criteria,
            subtasks: split_lines(&labor),
        })
    }
}

async fn fill(
    capability: &dyn GeneratorCapability,
    template: PrincipleTemplate,
    request: &PromptRequest,
) -> Result<String> {
    let instruction = template.instruction(request);
    let raw = capability.generate(template, &instruction).await?;
    Ok(raw.trim().to_string())
}

/// Split a multi-line response into trimmed, non-empty lines, preserving order.
fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}
