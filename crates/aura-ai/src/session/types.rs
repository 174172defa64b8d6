//! Inputs and outputs of a single session round-trip.

use serde::{Deserialize, Serialize};

use crate::tools::ToolInvocationRequest;
use crate::TokenUsage;

/// What the orchestrator sends on one round-trip.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnInput {
    /// Plain user utterance.
    Message(String),
    /// Results of tool calls requested by the previous response.
    ToolResults(Vec<ToolResultPayload>),
}

/// One tool result, correlated to its request by `call_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResultPayload {
    pub call_id: String,
    pub name: String,
    pub result: serde_json::Value,
}

/// The model's reply to one round-trip.
#[derive(Debug, Clone, Default)]
pub struct ModelResponse {
    /// Concatenated text parts; may be empty.
    pub text: String,
    pub tool_calls: Vec<ToolInvocationRequest>,
    pub usage: TokenUsage,
}

impl ModelResponse {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn from_tool_calls(tool_calls: Vec<ToolInvocationRequest>) -> Self {
        Self {
            tool_calls,
            ..Self::default()
        }
    }

    pub fn has_tool_calls(&self) -> bool {
        !self.tool_calls.is_empty()
    }
}
