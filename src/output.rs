//! Terminal presentation for composed prompts.
//!
//! Everything here just reads `GeneratedPrompt` fields verbatim; no
//! composition logic lives in this module.

use console::style;
use std::io;

use crate::composer::{ComposeOutcome, GeneratedPrompt, PromptSource};

pub struct OutputHandler {
    verbose: bool,
}

impl OutputHandler {
    pub fn new() -> Self {
        Self { verbose: false }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn print_banner(&mut self) -> io::Result<()> {
        println!("{}", style("╔═══════════════════════════════════════╗").cyan().bold());
        println!("{}", style("║   Promptly - Five Principles Prompts  ║").cyan().bold());
        println!("{}", style("╚═══════════════════════════════════════╝").cyan().bold());
        Ok(())
    }

    pub fn print_outcome(&mut self, outcome: &ComposeOutcome) -> io::Result<()> {
        self.print_source_notice(&outcome.source)?;

        println!();
        println!("{}", style("Your optimized prompt:").green().bold());
        println!("{}", style("─".repeat(40)).dim());
        println!("{}", outcome.prompt.final_prompt);
        println!("{}", style("─".repeat(40)).dim());

        self.print_confidence(&outcome.prompt)
    }

    fn print_source_notice(&mut self, source: &PromptSource) -> io::Result<()> {
        match source {
            PromptSource::Generator => {
                if self.verbose {
                    println!("{}", style("Composed with AI assistance").dim());
                }
            }
            PromptSource::Fallback => {
                println!("{}", style("Composed offline from built-in templates").yellow().dim());
            }
            PromptSource::Degraded(reason) => {
                println!(
                    "{} {}",
                    style("⚠ AI generation failed, composed offline instead:").yellow().bold(),
                    style(reason).dim()
                );
            }
        }
        Ok(())
    }

    fn print_confidence(&mut self, prompt: &GeneratedPrompt) -> io::Result<()> {
        let percentage = prompt.confidence_score * 100.0;

        let verdict = if percentage >= 80.0 {
            style("Excellent prompt completeness").green().bold()
        } else if percentage >= 60.0 {
            style("Good prompt completeness").cyan()
        } else {
            style("Consider refining your inputs").yellow().bold()
        };

        println!();
        println!(
            "{} {:.0}% — {}",
            style("Confidence:").bold(),
            percentage,
            verdict
        );
        Ok(())
    }

    /// Principle-by-principle view with fill bars.
    pub fn print_breakdown(&mut self, prompt: &GeneratedPrompt) -> io::Result<()> {
        println!();
        println!("{}", style("┌─ Principle Breakdown ─────────────────").dim());

        for (name, ratio) in prompt.completeness_ratios() {
            let filled = (ratio * 20.0).round() as usize;
            let bar = "█".repeat(filled) + &"░".repeat(20 - filled);
            println!("│ {:<10} [{}] {:>3.0}%", name, style(bar).cyan(), ratio * 100.0);
        }

        println!("{}", style("├───────────────────────────────────────").dim());
        println!("│ {}", style("Direction").bold());
        println!("│   {}", prompt.direction);
        println!("│ {}", style("Format").bold());
        println!("│   {}", prompt.format_specification);
        println!("│ {}", style("Examples").bold());
        for example in &prompt.examples {
            println!("│   • {}", example);
        }
        println!("│ {}", style("Quality").bold());
        println!("│   {}", prompt.quality_criteria);
        println!("│ {}", style("Labor").bold());
        for (index, step) in prompt.subtasks.iter().enumerate() {
            println!("│   {}. {}", index + 1, step);
        }
        println!("{}", style("└───────────────────────────────────────").dim());
        Ok(())
    }

    pub fn print_system(&mut self, content: &str) -> io::Result<()> {
        println!("{}", style(content).yellow().dim());
        Ok(())
    }

    pub fn print_error(&mut self, content: &str) -> io::Result<()> {
        println!("{} {}", style("Error:").red().bold(), content);
        Ok(())
    }
}

impl Default for OutputHandler {
    fn default() -> Self {
        Self::new()
    }
}
