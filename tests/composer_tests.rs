//! Integration tests for the Five Principles prompt composer

use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{anyhow, Result};
use assert_matches::assert_matches;
use async_trait::async_trait;
use pretty_assertions::assert_eq;

use promptly_cli::composer::assembler::assemble;
use promptly_cli::{
    compose, ComposeError, GeneratorCapability, OutputFormat, PrincipleTemplate, PromptComponents,
    PromptRequest, PromptSource, TaskComplexity, EXAMPLES_OMITTED, SIMPLE_TASK_STEP,
};

/// Succeeds for the first `allowed` calls, then fails every call after.
struct FailsAfter {
    allowed: usize,
    calls: AtomicUsize,
}

impl FailsAfter {
    fn new(allowed: usize) -> Self {
        Self {
            allowed,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl GeneratorCapability for FailsAfter {
    async fn generate(&self, template: PrincipleTemplate, _instruction: &str) -> Result<String> {
        if self.calls.fetch_add(1, Ordering::SeqCst) < self.allowed {
            Ok(format!(
                "Generated {} text that is comfortably long enough to pass every check",
                template.name()
            ))
        } else {
            Err(anyhow!("generator offline"))
        }
    }
}

/// Returns canned per-template text and counts the calls it receives.
struct CannedGenerator {
    calls: AtomicUsize,
}

impl CannedGenerator {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl GeneratorCapability for CannedGenerator {
    async fn generate(&self, template: PrincipleTemplate, _instruction: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(match template {
            PrincipleTemplate::Direction => {
                "  You are a meticulous writing assistant for busy engineers.  ".to_string()
            }
            PrincipleTemplate::Format => "Respond with a short bulleted list.".to_string(),
            PrincipleTemplate::Examples => "\nExample A\n\n  Example B  \n".to_string(),
            PrincipleTemplate::Quality => {
                "Accurate, scoped to the audience, and formatted as requested.".to_string()
            }
            PrincipleTemplate::Labor => "Plan the outline\nDraft\n\nPolish\n".to_string(),
        })
    }
}

fn composting_request() -> PromptRequest {
    let mut request = PromptRequest::new("Write a blog post about composting");
    request.target_audience = "beginners".to_string();
    request.desired_tone = "friendly".to_string();
    request.output_format = OutputFormat::List;
    request.complexity = TaskComplexity::Moderate;
    request
}

#[tokio::test]
async fn offline_compose_is_complete_and_bounded() {
    let requests = vec![
        PromptRequest::new("summarize a research paper"),
        composting_request(),
        {
            let mut r = PromptRequest::new("draft a migration plan");
            r.complexity = TaskComplexity::VeryComplex;
            r.constraints = vec!["no downtime".to_string()];
            r.examples_needed = false;
            r
        },
    ];

    for request in requests {
        let outcome = compose(&request, None).await.unwrap();
        let prompt = outcome.prompt;

        assert!(!prompt.direction.is_empty());
        assert!(!prompt.format_specification.is_empty());
        assert!(!prompt.examples.is_empty());
        assert!(!prompt.quality_criteria.is_empty());
        assert!(!prompt.subtasks.is_empty());
        assert!((0.0..=1.0).contains(&prompt.confidence_score));
        assert_eq!(outcome.source, PromptSource::Fallback);
    }
}

#[tokio::test]
async fn offline_compose_is_deterministic() {
    let request = composting_request();
    let first = compose(&request, None).await.unwrap();
    let second = compose(&request, None).await.unwrap();
    assert_eq!(first.prompt, second.prompt);
}

#[tokio::test]
async fn empty_task_is_rejected_before_any_path_runs() {
    let result = compose(&PromptRequest::new("   "), None).await;
    assert_matches!(result, Err(ComposeError::EmptyTask));
}

#[tokio::test]
async fn generator_failure_falls_back_wholesale() {
    let request = composting_request();
    let offline = compose(&request, None).await.unwrap();

    // 5 calls per request here; failing after any prefix must discard the
    // successful calls too, never blending them into the result.
    for allowed in 0..5 {
        let capability = FailsAfter::new(allowed);
        let outcome = compose(&request, Some(&capability)).await.unwrap();

        assert_eq!(outcome.prompt.final_prompt, offline.prompt.final_prompt);
        assert_eq!(outcome.prompt, offline.prompt);
        assert_matches!(outcome.source, PromptSource::Degraded(_));
    }
}

#[tokio::test]
async fn generator_output_is_trimmed_and_split() {
    let request = composting_request();
    let capability = CannedGenerator::new();
    let outcome = compose(&request, Some(&capability)).await.unwrap();

    assert_eq!(outcome.source, PromptSource::Generator);
    assert_eq!(capability.calls.load(Ordering::SeqCst), 5);
    assert_eq!(
        outcome.prompt.direction,
        "You are a meticulous writing assistant for busy engineers."
    );
    assert_eq!(outcome.prompt.examples, vec!["Example A", "Example B"]);
    assert_eq!(outcome.prompt.subtasks, vec!["Plan the outline", "Draft", "Polish"]);
}

#[tokio::test]
async fn examples_opt_out_skips_the_examples_call() {
    let mut request = composting_request();
    request.examples_needed = false;

    let capability = CannedGenerator::new();
    let outcome = compose(&request, Some(&capability)).await.unwrap();

    assert_eq!(capability.calls.load(Ordering::SeqCst), 4);
    assert_eq!(outcome.prompt.examples, vec![EXAMPLES_OMITTED.to_string()]);
}

#[tokio::test]
async fn composting_scenario_matches_expected_shape() {
    let outcome = compose(&composting_request(), None).await.unwrap();
    let prompt = outcome.prompt;

    let task_mentions = prompt
        .final_prompt
        .matches("Write a blog post about composting")
        .count();
    assert!(task_mentions >= 2, "task appears {} times", task_mentions);
    assert_eq!(prompt.subtasks.len(), 4);
    assert_eq!(prompt.confidence_score, 1.0);
}

#[tokio::test]
async fn sentinels_keep_the_score_at_one() {
    let mut request = composting_request();
    request.examples_needed = false;
    request.complexity = TaskComplexity::Simple;

    let outcome = compose(&request, None).await.unwrap();
    let prompt = outcome.prompt;

    assert_eq!(prompt.examples, vec![EXAMPLES_OMITTED.to_string()]);
    assert_eq!(prompt.subtasks, vec![SIMPLE_TASK_STEP.to_string()]);
    // both non-empty-sequence checks still pass
    assert_eq!(prompt.confidence_score, 1.0);
}

#[test]
fn lengthening_direction_raises_the_score_by_one_fifth() {
    let base = PromptComponents {
        direction: "d".repeat(40),
        format_specification: "f".repeat(25),
        examples: vec!["example".to_string()],
        quality_criteria: "q".repeat(35),
        subtasks: vec!["step".to_string()],
    };

    let short = assemble(base.clone());
    assert_eq!(short.confidence_score, 0.8);

    let long = assemble(PromptComponents {
        direction: "d".repeat(60),
        ..base
    });
    assert_eq!(long.confidence_score, 1.0);
    let delta = long.confidence_score - short.confidence_score;
    assert!((delta - 0.2).abs() < 1e-12, "delta was {delta}");
}
