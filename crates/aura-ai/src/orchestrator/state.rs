use std::fmt;

use crate::session::SessionState;
use crate::transcript::TranscriptEntry;

/// Observable phase of the turn state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    Idle,
    AwaitingModelResponse,
    ExecutingTools,
    /// A failure was written to the transcript; returns to `Idle` when the
    /// turn unwinds.
    ErrorNotified,
}

impl TurnPhase {
    /// Whether a turn is in flight.
    pub fn is_busy(self) -> bool {
        self != TurnPhase::Idle
    }
}

impl fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TurnPhase::Idle => "idle",
            TurnPhase::AwaitingModelResponse => "awaiting model response",
            TurnPhase::ExecutingTools => "executing tools",
            TurnPhase::ErrorNotified => "error notified",
        };
        f.write_str(s)
    }
}

/// Why `submit` refused to start a turn. A rejected submission leaves the
/// transcript and phase untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TurnRejected {
    #[error("input is empty")]
    EmptyInput,
    #[error("a turn is already in progress")]
    Busy,
    #[error("session is {0}")]
    SessionUnavailable(SessionState),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    Completed,
    /// A fault was recorded in the transcript.
    Failed,
}

/// What one turn appended to the transcript.
#[derive(Debug, Clone)]
pub struct TurnReport {
    /// Correlation id used in the turn's log span.
    pub turn_id: String,
    pub entries: Vec<TranscriptEntry>,
    pub outcome: TurnOutcome,
}

impl TurnReport {
    pub fn is_completed(&self) -> bool {
        self.outcome == TurnOutcome::Completed
    }
}
