//! Command execution shared by the REPL and the one-shot `check` command.

use crate::error::Result;
use crate::output::Formatter;
use verifact_domain::ThreadId;
use verifact_engine::Workflow;
use verifact_providers::{GeminiCompletion, TavilySearch};
use verifact_store::MemorySaver;

/// The production engine type: Tavily for search, Gemini for verdicts,
/// in-memory checkpoints.
pub type FactChecker = Workflow<TavilySearch, GeminiCompletion, MemorySaver>;

/// Run one fact-checking turn and print the outcome.
pub async fn execute_check(
    workflow: &FactChecker,
    thread: &ThreadId,
    claim: &str,
    formatter: &Formatter,
) -> Result<()> {
    let outcome = workflow.run(thread, claim).await?;

    if outcome.verdict.is_empty() {
        println!(
            "{}",
            formatter.warning("No verdict was generated for this claim.")
        );
        return Ok(());
    }

    println!();
    println!(
        "{}",
        formatter.format_outcome(&outcome.verdict, &outcome.sources)
    );
    Ok(())
}
