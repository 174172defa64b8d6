//! Runs tool-call requests against the registry.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::session::ToolResultPayload;

use super::launcher::UrlLauncher;
use super::open_website;
use super::registry::{BuiltinTool, ToolRegistry};

/// A tool invocation requested by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolInvocationRequest {
    /// Correlates this request with its result.
    pub call_id: String,
    pub name: String,
    pub arguments: serde_json::Value,
}

/// What running a tool produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutcome {
    Success {
        /// Human-readable action, e.g. `Opening https://example.com`.
        summary: String,
        /// Returned to the model.
        payload: serde_json::Value,
    },
    Failure {
        reason: String,
    },
}

impl ToolOutcome {
    pub fn success(summary: impl Into<String>, payload: serde_json::Value) -> Self {
        ToolOutcome::Success {
            summary: summary.into(),
            payload,
        }
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        ToolOutcome::Failure {
            reason: reason.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ToolOutcome::Success { .. })
    }
}

/// Result of one request, carrying the request's `call_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolInvocationResult {
    pub call_id: String,
    pub name: String,
    pub outcome: ToolOutcome,
}

impl ToolInvocationResult {
    /// Transcript line recording the attempted action.
    pub fn announcement(&self) -> String {
        match &self.outcome {
            ToolOutcome::Success { summary, .. } => format!("Executing: {summary}"),
            ToolOutcome::Failure { reason } => {
                format!("Executing: {} failed: {reason}", self.name)
            }
        }
    }

    /// Payload sent back through the session.
    pub fn to_payload(&self) -> ToolResultPayload {
        let result = match &self.outcome {
            ToolOutcome::Success { payload, .. } => payload.clone(),
            ToolOutcome::Failure { reason } => serde_json::json!({ "error": reason }),
        };
        ToolResultPayload {
            call_id: self.call_id.clone(),
            name: self.name.clone(),
            result,
        }
    }
}

/// Maps tool names to their local handlers.
///
/// `execute` never fails: unknown names and bad arguments come back as
/// [`ToolOutcome::Failure`] so the model can adapt.
pub struct ToolExecutor {
    registry: ToolRegistry,
    launcher: Arc<dyn UrlLauncher>,
    default_scheme: String,
}

impl ToolExecutor {
    pub fn new(registry: ToolRegistry, launcher: Arc<dyn UrlLauncher>) -> Self {
        Self {
            registry,
            launcher,
            default_scheme: "https".to_string(),
        }
    }

    pub fn with_default_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.default_scheme = scheme.into();
        self
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn execute(&self, request: &ToolInvocationRequest) -> ToolInvocationResult {
        debug!(tool = %request.name, call_id = %request.call_id, "executing tool");

        let outcome = match self.registry.resolve(&request.name) {
            Some(BuiltinTool::OpenWebsite) => open_website::run(
                &request.arguments,
                &self.default_scheme,
                self.launcher.as_ref(),
            ),
            None => ToolOutcome::failure(format!("unknown tool '{}'", request.name)),
        };

        if let ToolOutcome::Failure { reason } = &outcome {
            warn!(tool = %request.name, call_id = %request.call_id, %reason, "tool failed");
        }

        ToolInvocationResult {
            call_id: request.call_id.clone(),
            name: request.name.clone(),
            outcome,
        }
    }
}
