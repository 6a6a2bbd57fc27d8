use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

use promptly_cli::{
    compose, ApiClient, Config, GeneratorCapability, OutputFormat, OutputHandler, PromptRequest,
    TaskComplexity,
};

#[derive(Parser)]
#[command(name = "promptly")]
#[command(about = "Compose structured AI prompts with the Five Principles", long_about = None)]
struct Cli {
    /// What the AI should do
    task: String,

    /// Who will read or use the output
    #[arg(long)]
    audience: Option<String>,

    /// Tone the AI should use
    #[arg(long)]
    tone: Option<String>,

    /// How the output should be structured
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// How complex the task is
    #[arg(long, value_enum, default_value_t = TaskComplexity::Moderate)]
    complexity: TaskComplexity,

    /// Background information for the prompt
    #[arg(long)]
    context: Option<String>,

    /// Extra requirement for the prompt; repeatable
    #[arg(long = "constraint")]
    constraints: Vec<String>,

    /// Skip the examples section
    #[arg(long)]
    no_examples: bool,

    /// Compose offline without calling any AI provider
    #[arg(long)]
    offline: bool,

    /// Show the principle-by-principle breakdown after the prompt
    #[arg(long)]
    breakdown: bool,

    /// Emit the result as JSON instead of styled text
    #[arg(long)]
    json: bool,

    /// Write the final prompt to a text file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Run in verbose mode
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut handler = OutputHandler::new().with_verbose(cli.verbose);

    if cli.task.trim().is_empty() {
        handler.print_error("Please describe your task to continue.")?;
        std::process::exit(1);
    }

    let mut request = PromptRequest::new(cli.task.trim());
    if let Some(audience) = cli.audience.filter(|a| !a.trim().is_empty()) {
        request.target_audience = audience;
    }
    if let Some(tone) = cli.tone.filter(|t| !t.trim().is_empty()) {
        request.desired_tone = tone;
    }
    request.output_format = cli.format;
    request.complexity = cli.complexity;
    request.context = cli.context.unwrap_or_default();
    request.constraints = cli
        .constraints
        .iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect();
    request.examples_needed = !cli.no_examples;

    let config = Config::load_or_default();
    let client = if cli.offline {
        None
    } else {
        let client = ApiClient::from_config(&config);
        if client.is_none() && cli.verbose {
            handler.print_system("No API key configured; composing offline.")?;
        }
        client
    };
    let capability = client.as_ref().map(|c| c as &dyn GeneratorCapability);

    let spinner = if capability.is_some() && !cli.json {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::default_spinner());
        spinner.set_message("Applying the Five Principles...");
        spinner.enable_steady_tick(Duration::from_millis(100));
        Some(spinner)
    } else {
        None
    };

    let outcome = compose(&request, capability).await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let outcome = match outcome {
        Ok(outcome) => outcome,
        Err(error) => {
            handler.print_error(&error.to_string())?;
            std::process::exit(1);
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        handler.print_banner()?;
        handler.print_outcome(&outcome)?;
        if cli.breakdown {
            handler.print_breakdown(&outcome.prompt)?;
        }
    }

    if let Some(path) = cli.output {
        std::fs::write(&path, &outcome.prompt.final_prompt)?;
        if !cli.json {
            handler.print_system(&format!("Saved prompt to {}", path.display()))?;
        }
    }

    Ok(())
}
