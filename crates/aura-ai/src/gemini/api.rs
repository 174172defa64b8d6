//! ModelSession implementation for GeminiSession.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::session::{ModelResponse, ModelSession, TurnInput};
use crate::AiError;

use super::client::GeminiSession;
use super::wire;

#[async_trait]
impl ModelSession for GeminiSession {
    async fn send(&self, input: TurnInput) -> Result<ModelResponse, AiError> {
        // Held across the round-trip so sends on one session never interleave.
        let mut history = self.history.lock().await;

        let pending = wire::input_content(&input);
        let mut contents = history.clone();
        contents.push(pending.clone());
        let body = wire::build_request_body(&self.config, contents);

        debug!(
            session = %self.id,
            model = %self.config.model,
            history = history.len(),
            "Gemini API request"
        );

        let response = self
            .http
            .post(self.api_url())
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let err = wire::classify_status(status, &text);
            warn!(session = %self.id, %status, "Gemini API request failed");
            return Err(err);
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        let reply = wire::parse_response(json)?;

        history.push(pending);
        history.push(reply.content);

        debug!(
            session = %self.id,
            tool_calls = reply.response.tool_calls.len(),
            input_tokens = reply.response.usage.input_tokens,
            output_tokens = reply.response.usage.output_tokens,
            "Gemini API response"
        );

        Ok(reply.response)
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

fn map_transport_error(e: reqwest::Error) -> AiError {
    if e.is_timeout() {
        AiError::Timeout
    } else {
        AiError::NetworkError(e.to_string())
    }
}
