//! Verifact CLI - conversational fact-checking against live web evidence.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use verifact_cli::commands::{execute_check, FactChecker};
use verifact_cli::{repl, Cli, Command, Config, Formatter};
use verifact_domain::ThreadId;
use verifact_engine::{Workflow, WorkflowConfig};
use verifact_providers::{GeminiCompletion, TavilySearch};
use verifact_store::MemorySaver;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> verifact_cli::Result<()> {
    let cli = Cli::parse();

    // Credentials are validated here, before any workflow invocation
    let config = Config::load(cli.config.as_deref())?;

    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(color_enabled);

    let thread = ThreadId::new(
        cli.thread
            .unwrap_or_else(|| format!("session-{}", uuid::Uuid::now_v7())),
    );

    let workflow = build_workflow(&config)?;

    match cli.command {
        Some(Command::Check(args)) => {
            execute_check(&workflow, &thread, &args.claim_text(), &formatter).await?;
        }
        None | Some(Command::Repl) => {
            repl::run_repl(&workflow, &thread, &formatter).await?;
        }
    }

    Ok(())
}

fn build_workflow(config: &Config) -> verifact_cli::Result<FactChecker> {
    let search = TavilySearch::new(&config.credentials.tavily_api_key);
    let completion = GeminiCompletion::new(&config.credentials.google_api_key)
        .with_model(&config.settings.model);

    let workflow_config = WorkflowConfig {
        max_results: config.settings.max_results,
        stage_timeout_secs: config.settings.stage_timeout_secs,
    };

    Ok(Workflow::new(
        search,
        completion,
        MemorySaver::new(),
        workflow_config,
    )?)
}
