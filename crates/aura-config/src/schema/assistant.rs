//! Assistant (model provider) configuration.

use serde::{Deserialize, Serialize};

/// Persona prompt sent as the session's system instruction.
pub const DEFAULT_SYSTEM_INSTRUCTION: &str = "You are Aura, a highly advanced, emotionally \
intelligent AI companion integrated into this futuristic desktop environment. You are helpful, \
slightly witty, and empathetic. Respond concisely but with personality. You can open websites \
for the user when asked.";

/// Model provider settings for the conversation session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Provider model identifier.
    pub model: String,
    pub system_instruction: String,
    /// Environment variables searched, in order, for the API credential.
    pub api_key_env: Vec<String>,
    /// Valid range: 64-65536.
    pub max_output_tokens: u32,
    /// Valid range: 0.0-2.0.
    pub temperature: f64,
    /// Banner line printed by the front-end at startup.
    pub greeting: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-pro".into(),
            system_instruction: DEFAULT_SYSTEM_INSTRUCTION.into(),
            api_key_env: vec!["API_KEY".into(), "GEMINI_API_KEY".into()],
            max_output_tokens: 2048,
            temperature: 0.7,
            greeting: "Aura OS is online. All systems nominal. How can I assist you?".into(),
        }
    }
}
