//! Turn orchestrator.
//!
//! Drives one user turn at a time through the session: records the input,
//! sends it, runs any requested tools sequentially, and writes every model
//! reply, tool announcement and fault to the transcript. Faults never
//! escape a turn; they become `system` entries.

mod guard;
mod state;
mod turn;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::watch;
use tracing::{error, info};

use crate::session::{ModelSession, SessionState};
use crate::tools::ToolExecutor;
use crate::transcript::{TranscriptRole, TranscriptStore};
use crate::AiError;

pub use state::{TurnOutcome, TurnPhase, TurnRejected, TurnReport};

/// Tool calls accepted from follow-up responses in one turn before further
/// requests are skipped.
pub const DEFAULT_MAX_TOOL_CALLS: usize = 8;

pub struct Orchestrator {
    session: Option<Arc<dyn ModelSession>>,
    state: Mutex<SessionState>,
    executor: ToolExecutor,
    transcript: Arc<TranscriptStore>,
    busy: AtomicBool,
    phase: watch::Sender<TurnPhase>,
    max_tool_calls: usize,
}

impl Orchestrator {
    /// Orchestrator over an already created session.
    pub fn new(
        session: Arc<dyn ModelSession>,
        executor: ToolExecutor,
        transcript: Arc<TranscriptStore>,
    ) -> Self {
        let mut orchestrator = Self::unattached(executor, transcript);
        orchestrator.attach(Ok(session));
        orchestrator
    }

    /// Orchestrator over the result of session creation.
    ///
    /// A creation error is written to the transcript as one `system` entry
    /// and leaves the orchestrator faulted: every later `submit` is
    /// rejected.
    pub fn from_creation<S>(
        created: Result<S, AiError>,
        executor: ToolExecutor,
        transcript: Arc<TranscriptStore>,
    ) -> Self
    where
        S: ModelSession + 'static,
    {
        let mut orchestrator = Self::unattached(executor, transcript);
        orchestrator.attach(created.map(|s| Arc::new(s) as Arc<dyn ModelSession>));
        orchestrator
    }

    fn unattached(executor: ToolExecutor, transcript: Arc<TranscriptStore>) -> Self {
        let (phase, _) = watch::channel(TurnPhase::Idle);
        Self {
            session: None,
            state: Mutex::new(SessionState::Uninitialized),
            executor,
            transcript,
            busy: AtomicBool::new(false),
            phase,
            max_tool_calls: DEFAULT_MAX_TOOL_CALLS,
        }
    }

    fn attach(&mut self, created: Result<Arc<dyn ModelSession>, AiError>) {
        match created {
            Ok(session) => {
                info!(model = session.model(), "session ready");
                self.session = Some(session);
                self.set_session_state(SessionState::Ready);
            }
            Err(e) => {
                error!(error = %e, "session creation failed");
                self.transcript.append(
                    TranscriptRole::System,
                    format!(
                        "Error: Could not connect to the AI core ({e}). Please check your API key and network connection."
                    ),
                );
                self.set_session_state(SessionState::Faulted);
            }
        }
    }

    /// Bound on tool calls accepted from follow-up responses in one turn.
    /// Calls in the first response always run. Values below 1 are raised
    /// to 1.
    pub fn with_max_tool_calls(mut self, max: usize) -> Self {
        self.max_tool_calls = max.max(1);
        self
    }

    pub fn max_tool_calls(&self) -> usize {
        self.max_tool_calls
    }

    pub fn phase(&self) -> TurnPhase {
        *self.phase.borrow()
    }

    /// Receiver that observes every phase change, e.g. to drive a
    /// "thinking" indicator.
    pub fn watch_phase(&self) -> watch::Receiver<TurnPhase> {
        self.phase.subscribe()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn session_state(&self) -> SessionState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn transcript(&self) -> &Arc<TranscriptStore> {
        &self.transcript
    }

    fn set_session_state(&self, state: SessionState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = state;
    }

    fn set_phase(&self, phase: TurnPhase) {
        self.phase.send_replace(phase);
    }
}
