//! Interactive loop adapter
//!
//! Reads one query per line from stdin; `exit`/`quit` (case-insensitive) or
//! end of input terminates the loop. Tool and model failures surface as
//! answer text, so the loop itself only fails on terminal I/O errors.

use std::io::Write;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::agent::orchestrator::Orchestrator;
use crate::error::AgentResult;

/// Run the interactive loop until exit or end of input.
pub async fn run(orchestrator: Arc<Orchestrator>) -> AgentResult<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("\nEnter your question (or 'exit' to quit): ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!("\nGoodbye!");
            break;
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if is_exit_command(input) {
            println!("Goodbye!");
            break;
        }

        let result = orchestrator.handle_query(input).await;

        println!("\nAnswer: {}", result.answer);
        if let Some(tool) = result.tool_used {
            println!("Tool used: {tool}");
        }
        println!("{}", "-".repeat(50));
    }

    Ok(())
}

fn is_exit_command(input: &str) -> bool {
    input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit")
}
