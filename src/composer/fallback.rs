//! Deterministic fallback path.
//!
//! Produces all five components from fixed interpolation rules. Pure and
//! total: no I/O, no external state, never fails for a validated request.

use crate::composer::components::{PromptComponents, EXAMPLES_OMITTED, SIMPLE_TASK_STEP};
use crate::composer::request::{PromptRequest, TaskComplexity};

/// Build every component offline from the request alone.
pub fn fallback_components(request: &PromptRequest) -> PromptComponents {
    let format_label = request.output_format.label();

    let direction = format!(
        "You are an expert assistant helping {}. Your task is to {}. \
         Use a {} tone throughout your response. Context: {}.",
        request.target_audience, request.task_description, request.desired_tone, request.context,
    );

    let format_specification = format!(
        "Format your response as {}. Additional constraints: {}.",
        format_label,
        request.constraints_label(),
    );

    let examples = if request.examples_needed {
        vec![
            format!("Example 1: [Sample output for {}]", request.task_description),
            format!("Example 2: [Another sample showing good {} format]", format_label),
            format!(
                "Example 3: [Third example demonstrating {} tone]",
                request.desired_tone
            ),
        ]
    } else {
        vec![EXAMPLES_OMITTED.to_string()]
    };

    let quality_criteria = format!(
        "Ensure your response: 1) Directly addresses {}, 2) Is appropriate for {}, \
         3) Follows the {} format exactly, 4) Maintains {} tone",
        request.task_description, request.target_audience, format_label, request.desired_tone,
    );

    let subtasks = if request.complexity == TaskComplexity::Simple {
        vec![SIMPLE_TASK_STEP.to_string()]
    } else {
        vec![
            format!("Step 1: Analyze the {} requirements", request.task_description),
            format!(
                "Step 2: Research relevant information for {}",
                request.target_audience
            ),
            format!("Step 3: Structure content in {} format", format_label),
            format!("Step 4: Review and refine for {} tone", request.desired_tone),
        ]
    };

    PromptComponents {
        direction,
        format_specification,
        examples,
        quality_criteria,
        subtasks,
    }
}
