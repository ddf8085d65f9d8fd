//! CLI entrypoint for llm-council
//!
//! This is the main binary that wires together all layers using
//! dependency injection: config file → member/chairman HTTP clients →
//! use cases → console output.

mod cli;
mod output;
mod progress;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, OutputFormat};
use council_application::{
    ChairmanClient, CheckHealthUseCase, MemberClient, RunCouncilUseCase,
};
use council_infrastructure::{ConfigLoader, HttpChairmanClient, HttpMemberClient};
use output::ConsoleFormatter;
use progress::ProgressReporter;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting llm-council");

    // Load and validate configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };
    let registry = config
        .registry()
        .context("invalid [[members]] configuration")?;
    config
        .validate_chairman()
        .context("invalid [chairman] configuration")?;
    let timeouts = config.timeouts.to_timeouts();

    // === Dependency Injection ===
    // One reqwest client shares its connection pool across all backends;
    // every call sets its own timeout, so no global bound here.
    let http = reqwest::Client::new();

    let members: Vec<Arc<dyn MemberClient>> = registry
        .members()
        .iter()
        .map(|member| {
            Arc::new(HttpMemberClient::new(
                member.clone(),
                http.clone(),
                timeouts,
            )) as Arc<dyn MemberClient>
        })
        .collect();

    let chairman: Arc<dyn ChairmanClient> = Arc::new(HttpChairmanClient::new(
        config.chairman.endpoint.clone(),
        config.chairman.model.clone(),
        http,
        timeouts,
    ));

    // Health mode
    if cli.health {
        let report = CheckHealthUseCase::new(members, chairman).execute().await;
        let rendered = match cli.output {
            OutputFormat::Json => ConsoleFormatter::format_health_json(&report),
            _ => ConsoleFormatter::format_health(&report),
        };
        println!("{rendered}");
        return Ok(());
    }

    // Query mode - question is required
    let Some(question) = cli.question else {
        bail!("Question is required. Use --health to probe the council instead.");
    };

    if !cli.quiet {
        println!();
        println!("LLM Council - {} members", registry.len());
        println!("Question: {question}");
        println!();
    }

    let use_case = RunCouncilUseCase::new(members, chairman);

    let result = if cli.quiet {
        use_case.execute(&question).await?
    } else {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(&question, &progress).await?
    };

    let rendered = match cli.output {
        OutputFormat::Full => ConsoleFormatter::format(&result),
        OutputFormat::Synthesis => ConsoleFormatter::format_synthesis_only(&result),
        OutputFormat::Json => ConsoleFormatter::format_json(&result),
    };
    println!("{rendered}");

    Ok(())
}
