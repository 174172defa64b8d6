//! One turn through the state machine.

use std::any::Any;
use std::collections::VecDeque;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use aura_common::new_correlation_id;
use futures_util::FutureExt;
use tracing::{debug, error, info, info_span, warn, Instrument};

use crate::session::{ModelSession, SessionState, TurnInput};
use crate::tools::ToolInvocationRequest;
use crate::transcript::{TranscriptEntry, TranscriptRole};
use crate::AiError;

use super::guard::TurnGuard;
use super::state::{TurnOutcome, TurnPhase, TurnRejected, TurnReport};
use super::Orchestrator;

impl Orchestrator {
    /// Run one turn for `input`.
    ///
    /// Rejections happen before anything is recorded. Once accepted, the
    /// turn always completes with a report; faults along the way are
    /// recorded as `system` entries and end the turn.
    pub async fn submit(&self, input: &str) -> Result<TurnReport, TurnRejected> {
        let text = input.trim();
        if text.is_empty() {
            return Err(TurnRejected::EmptyInput);
        }

        let state = self.session_state();
        let session = match (&self.session, state) {
            (Some(session), SessionState::Ready) => Arc::clone(session),
            _ => return Err(TurnRejected::SessionUnavailable(state)),
        };

        let _guard = TurnGuard::acquire(&self.busy, &self.phase).ok_or(TurnRejected::Busy)?;

        let turn_id = new_correlation_id();
        let mut entries = Vec::new();

        let span = info_span!("turn", turn = %turn_id);
        let run = self
            .run_turn(session.as_ref(), text, &mut entries)
            .instrument(span);

        let outcome = match AssertUnwindSafe(run).catch_unwind().await {
            Ok(outcome) => outcome,
            Err(panic) => {
                let message = panic_message(panic.as_ref());
                error!(turn = %turn_id, %message, "turn panicked");
                self.record(
                    &mut entries,
                    TranscriptRole::System,
                    format!("Unexpected fault during turn: {message}"),
                );
                self.set_phase(TurnPhase::ErrorNotified);
                TurnOutcome::Failed
            }
        };

        Ok(TurnReport {
            turn_id,
            entries,
            outcome,
        })
    }

    async fn run_turn(
        &self,
        session: &dyn ModelSession,
        text: &str,
        entries: &mut Vec<TranscriptEntry>,
    ) -> TurnOutcome {
        self.record(entries, TranscriptRole::User, text);
        self.set_phase(TurnPhase::AwaitingModelResponse);
        info!(model = session.model(), "turn started");

        let response = match session.send(TurnInput::Message(text.to_string())).await {
            Ok(response) => response,
            Err(e) => return self.fail_turn(entries, e),
        };

        if !response.has_tool_calls() {
            self.record(entries, TranscriptRole::Model, response.text);
            return TurnOutcome::Completed;
        }

        if !response.text.trim().is_empty() {
            debug!(text = %response.text, "discarding text sent alongside tool calls");
        }

        // Every call in the initial response runs; only calls requested by
        // follow-up responses count against `max_tool_calls`.
        let mut queue: VecDeque<ToolInvocationRequest> = response.tool_calls.into();
        let mut executed = 0;
        let mut follow_up_accepted = 0;
        let mut skipped = 0;

        while let Some(request) = queue.pop_front() {
            executed += 1;

            self.set_phase(TurnPhase::ExecutingTools);
            let result = self.executor.execute(&request);
            self.record(entries, TranscriptRole::System, result.announcement());

            self.set_phase(TurnPhase::AwaitingModelResponse);
            let follow_up = match session
                .send(TurnInput::ToolResults(vec![result.to_payload()]))
                .await
            {
                Ok(response) => response,
                Err(e) => return self.fail_turn(entries, e),
            };

            self.record(entries, TranscriptRole::Model, follow_up.text);
            for call in follow_up.tool_calls {
                if follow_up_accepted < self.max_tool_calls {
                    follow_up_accepted += 1;
                    queue.push_back(call);
                } else {
                    skipped += 1;
                }
            }
        }

        if skipped > 0 {
            warn!(skipped, limit = self.max_tool_calls, "follow-up tool-call limit reached");
            self.record(
                entries,
                TranscriptRole::System,
                format!("Tool-call limit reached: skipped {skipped} further request(s)."),
            );
        }

        info!(tool_calls = executed, "turn completed");
        TurnOutcome::Completed
    }

    fn fail_turn(&self, entries: &mut Vec<TranscriptEntry>, err: AiError) -> TurnOutcome {
        if err.is_fatal() {
            error!(error = %err, "session faulted");
            self.set_session_state(SessionState::Faulted);
        } else {
            warn!(error = %err, "model request failed");
        }
        self.record(
            entries,
            TranscriptRole::System,
            format!("An error occurred while communicating with the AI core: {err}"),
        );
        self.set_phase(TurnPhase::ErrorNotified);
        TurnOutcome::Failed
    }

    fn record(&self, entries: &mut Vec<TranscriptEntry>, role: TranscriptRole, text: impl Into<String>) {
        entries.push(self.transcript.append(role, text));
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
