//! API credential lookup from the process environment.

use aura_common::ConfigError;
use tracing::debug;

use crate::schema::AssistantConfig;

/// Resolve the provider credential from the first non-empty variable in
/// `assistant.api_key_env`.
pub fn resolve_api_key(assistant: &AssistantConfig) -> Result<String, ConfigError> {
    resolve_with(assistant, |name| std::env::var(name).ok())
}

fn resolve_with(
    assistant: &AssistantConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String, ConfigError> {
    for name in &assistant.api_key_env {
        if let Some(value) = lookup(name) {
            let value = value.trim();
            if !value.is_empty() {
                debug!(var = %name, "resolved API credential");
                return Ok(value.to_string());
            }
        }
    }
    Err(ConfigError::MissingCredential(
        assistant.api_key_env.join(", "),
    ))
}
