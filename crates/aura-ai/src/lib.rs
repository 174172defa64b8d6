//! Conversation engine for Aura.
//!
//! Provides:
//! - A stateful session handle to the model provider (Gemini)
//! - A closed registry of locally executed tools
//! - The turn orchestrator that drives the tool-call loop
//! - An append-only transcript for display layers

pub mod gemini;
pub mod orchestrator;
pub mod session;
pub mod tools;
pub mod transcript;

pub use gemini::GeminiSession;
pub use orchestrator::{Orchestrator, TurnOutcome, TurnPhase, TurnRejected, TurnReport};
pub use session::{
    ModelResponse, ModelSession, SessionConfig, SessionState, ToolResultPayload, TurnInput,
};
pub use tools::{
    BuiltinTool, LogOnlyLauncher, SystemBrowser, ToolDeclaration, ToolExecutor,
    ToolInvocationRequest, ToolInvocationResult, ToolOutcome, ToolRegistry, UrlLauncher,
};
pub use transcript::{TranscriptEntry, TranscriptRole, TranscriptStore};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Credential rejected: {0}")]
    Unauthorized(String),
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
}

impl AiError {
    /// Whether the session can no longer serve turns after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AiError::Configuration(_) | AiError::Unauthorized(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_credential_errors_are_fatal() {
        assert!(AiError::Configuration("no key".into()).is_fatal());
        assert!(AiError::Unauthorized("HTTP 403".into()).is_fatal());
        assert!(!AiError::RateLimited.is_fatal());
        assert!(!AiError::NetworkError("reset".into()).is_fatal());
        assert!(!AiError::ApiError("HTTP 500".into()).is_fatal());
        assert!(!AiError::ParseError("bad json".into()).is_fatal());
        assert!(!AiError::Timeout.is_fatal());
    }

    #[test]
    fn error_display() {
        assert_eq!(
            AiError::Configuration("no API credential provided".into()).to_string(),
            "Configuration error: no API credential provided"
        );
        assert_eq!(AiError::RateLimited.to_string(), "Rate limited");
        assert_eq!(
            AiError::NetworkError("connection refused".into()).to_string(),
            "Network error: connection refused"
        );
    }

    #[test]
    fn token_usage_total_saturates() {
        let usage = TokenUsage {
            input_tokens: u64::MAX,
            output_tokens: 5,
        };
        assert_eq!(usage.total_tokens(), u64::MAX);
    }
}
