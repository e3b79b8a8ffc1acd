//! Interactive fact-checking loop.

use crate::commands::{execute_check, FactChecker};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use verifact_domain::ThreadId;

/// Run the interactive loop: one claim per line, `quit` to exit.
pub async fn run_repl(
    workflow: &FactChecker,
    thread: &ThreadId,
    formatter: &Formatter,
) -> Result<()> {
    println!(
        "{}",
        formatter.info("Verifact - enter a claim to fact-check, or 'quit' to exit")
    );
    println!();

    let mut editor = DefaultEditor::new()
        .map_err(|e| CliError::Readline(format!("Failed to initialize editor: {}", e)))?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        match editor.readline("verifact> ") {
            Ok(line) => {
                let claim = line.trim();

                if claim.is_empty() {
                    continue;
                }

                if is_quit(claim) {
                    println!("{}", formatter.info("Goodbye!"));
                    break;
                }

                editor.add_history_entry(claim).ok();

                // A failed turn is reported and the loop continues; the
                // conversation state is untouched so the claim can be retried.
                if let Err(e) = execute_check(workflow, thread, claim, formatter).await {
                    eprintln!("{}", formatter.error(&e.to_string()));
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'quit' to exit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

/// Quit keywords end the session and are kept out of the history file.
fn is_quit(line: &str) -> bool {
    matches!(line.to_lowercase().as_str(), "quit" | "exit" | "q")
}

fn get_history_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    let verifact_dir = home.join(".verifact");
    std::fs::create_dir_all(&verifact_dir)?;
    Ok(verifact_dir.join("history.txt"))
}
