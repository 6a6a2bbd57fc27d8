//! Final prompt assembly and the confidence heuristic.
//!
//! Fixed section order: direction, format, examples, quality criteria,
//! step-by-step plan, closing instruction.

use crate::composer::components::{GeneratedPrompt, PromptComponents};

/// Assemble the five components into the final prompt.
///
/// Pure and total: any well-formed `PromptComponents` produces a prompt, even
/// when the sequences are empty.
pub fn assemble(components: PromptComponents) -> GeneratedPrompt {
    let examples_block = components
        .examples
        .iter()
        .map(|example| format!("- {example}"))
        .collect::<Vec<_>>()
        .join("\n");

    let subtasks_block = components
        .subtasks
        .iter()
        .enumerate()
        .map(|(index, step)| format!("{}. {}", index + 1, step))
        .collect::<Vec<_>>()
        .join("\n");

    let final_prompt = format!(
        "{}\n\n{}\n\nExamples of good output:\n{}\n\nQuality criteria:\n{}\n\n\
         Approach this task step by step:\n{}\n\n\
         Now, please complete the task following all the above guidelines.",
        components.direction,
        components.format_specification,
        examples_block,
        components.quality_criteria,
        subtasks_block,
    )
    .trim()
    .to_string();

    let confidence_score = confidence(&components);

    GeneratedPrompt {
        direction: components.direction,
        format_specification: components.format_specification,
        examples: components.examples,
        quality_criteria: components.quality_criteria,
        subtasks: components.subtasks,
        final_prompt,
        confidence_score,
    }
}

/// Mean of five boolean completeness checks.
///
/// This measures how filled-in the components are, nothing more. It says
/// nothing about whether the prompt is semantically correct.
fn confidence(components: &PromptComponents) -> f64 {
    let checks = [
        components.direction.chars().count() > 50,
        components.format_specification.chars().count() > 20,
        !components.examples.is_empty(),
        components.quality_criteria.chars().count() > 30,
        !components.subtasks.is_empty(),
    ];
    checks.iter().filter(|passed| **passed).count() as f64 / checks.len() as f64
}
