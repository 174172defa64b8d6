//! Session handle: one stateful conversation with the model provider.
//!
//! A session keeps the provider-side context across calls, so each `send`
//! is interpreted relative to every earlier exchange on the same handle.
//! Callers never resend history.

mod config;
mod state;
mod types;

use async_trait::async_trait;

use crate::AiError;

pub use config::SessionConfig;
pub use state::SessionState;
pub use types::{ModelResponse, ToolResultPayload, TurnInput};

#[async_trait]
pub trait ModelSession: Send + Sync {
    /// Send one input and wait for the model's reply.
    ///
    /// Implementations commit the exchange to their history only when the
    /// round-trip succeeds.
    async fn send(&self, input: TurnInput) -> Result<ModelResponse, AiError>;

    /// Provider model identifier, for logging and display.
    fn model(&self) -> &str;
}
