//! Gemini session struct and construction.

use std::time::Duration;

use aura_common::SessionId;
use tokio::sync::Mutex;
use tracing::info;

use crate::session::SessionConfig;
use crate::AiError;

pub(crate) const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// One stateful Gemini conversation.
pub struct GeminiSession {
    pub(crate) id: SessionId,
    pub(crate) config: SessionConfig,
    pub(crate) api_key: String,
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    /// Committed `contents` entries, oldest first.
    pub(crate) history: Mutex<Vec<serde_json::Value>>,
}

impl GeminiSession {
    /// Create a session. A missing credential or model is reported here
    /// rather than on the first send.
    pub fn create(config: SessionConfig) -> Result<Self, AiError> {
        let api_key = match config.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => return Err(AiError::Configuration("no API credential provided".into())),
        };
        if config.model.trim().is_empty() {
            return Err(AiError::Configuration("no model configured".into()));
        }

        // Only a connect timeout: a pending generateContent may take as long
        // as the provider needs.
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| AiError::Configuration(format!("failed to build HTTP client: {e}")))?;

        let id = SessionId::new();
        info!(session = %id, model = %config.model, tools = config.tools.len(), "Gemini session created");

        Ok(Self {
            id,
            config,
            api_key,
            http,
            base_url: GEMINI_API_BASE.to_string(),
            history: Mutex::new(Vec::new()),
        })
    }

    /// Point the session at another endpoint (proxies, test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Number of committed `contents` entries.
    pub async fn history_len(&self) -> usize {
        self.history.lock().await.len()
    }

    pub(crate) fn api_url(&self) -> String {
        format!("{}/{}:generateContent", self.base_url, self.config.model)
    }
}
