use std::path::PathBuf;

use clap::Parser;

/// Aura: a conversational assistant that can open websites for you.
#[derive(Parser, Debug)]
#[command(name = "aura", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override, e.g. `aura=debug`.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Model identifier override.
    #[arg(long)]
    pub model: Option<String>,

    /// Send one message and exit instead of starting the REPL.
    #[arg(value_name = "MESSAGE")]
    pub message: Vec<String>,
}

impl Args {
    /// The one-shot message, if any words were given.
    pub fn one_shot(&self) -> Option<String> {
        if self.message.is_empty() {
            None
        } else {
            Some(self.message.join(" "))
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
