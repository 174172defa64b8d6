//! Terminal rendering of the transcript.

use aura_ai::{TranscriptEntry, TranscriptRole, TurnPhase};
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tracing::warn;

/// One display line for an entry.
pub fn format_entry(entry: &TranscriptEntry) -> String {
    let ts = entry.timestamp();
    match entry.role() {
        TranscriptRole::User => format!("[{ts}] You: {}", entry.text()),
        TranscriptRole::Model if entry.text().is_empty() => format!("[{ts}] Aura: (no reply)"),
        TranscriptRole::Model => format!("[{ts}] Aura: {}", entry.text()),
        TranscriptRole::System => format!("[{ts}] * {} *", entry.text()),
    }
}

pub fn print_banner(model: &str, greeting: &str) {
    println!("AURA OS v{}  [{model}]", env!("CARGO_PKG_VERSION"));
    println!("Type a message, /history to replay the conversation, /quit to exit.");
    println!();
    if !greeting.trim().is_empty() {
        println!("Aura: {greeting}");
    }
}

/// Print every entry appended to the transcript as it arrives.
pub fn spawn_renderer(rx: broadcast::Receiver<TranscriptEntry>) -> JoinHandle<()> {
    spawn_renderer_to(rx, |line| println!("{line}"))
}

/// Like [`spawn_renderer`], writing each formatted line to `sink`. The task
/// ends once every transcript sender is gone.
pub fn spawn_renderer_to<F>(mut rx: broadcast::Receiver<TranscriptEntry>, mut sink: F) -> JoinHandle<()>
where
    F: FnMut(String) + Send + 'static,
{
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(entry) => sink(format_entry(&entry)),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped, "renderer fell behind, use /history to see everything");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    })
}

/// Print a thinking line each time the orchestrator starts waiting on the
/// model.
pub fn spawn_thinking_indicator(mut rx: watch::Receiver<TurnPhase>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            if *rx.borrow_and_update() == TurnPhase::AwaitingModelResponse {
                println!("  Aura is thinking...");
            }
        }
    })
}
