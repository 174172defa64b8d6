//! Interactive read-submit loop over stdin.

use aura_ai::Orchestrator;
use aura_common::AuraError;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use crate::console::format_entry;

#[derive(Debug, PartialEq, Eq)]
pub enum ReplCommand {
    Quit,
    History,
    Submit(String),
    /// Blank line.
    Nothing,
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line {
            "" => ReplCommand::Nothing,
            "/quit" | "/exit" => ReplCommand::Quit,
            "/history" => ReplCommand::History,
            _ => ReplCommand::Submit(line.to_string()),
        }
    }
}

pub async fn run(orchestrator: &Orchestrator) -> Result<(), AuraError> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        match ReplCommand::parse(&line) {
            ReplCommand::Nothing => {}
            ReplCommand::Quit => break,
            ReplCommand::History => {
                for entry in orchestrator.transcript().entries() {
                    println!("{}", format_entry(&entry));
                }
            }
            ReplCommand::Submit(text) => match orchestrator.submit(&text).await {
                Ok(report) => {
                    debug!(turn = %report.turn_id, outcome = ?report.outcome, "turn finished");
                    // Let the renderer drain before reading the next line.
                    tokio::task::yield_now().await;
                }
                Err(rejected) => eprintln!("aura: {rejected}"),
            },
        }
    }

    info!("input closed, leaving REPL");
    Ok(())
}
