//! Tool execution configuration.

use serde::{Deserialize, Serialize};

/// Settings for the locally executed tools the model may call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Scheme prefixed to URLs that arrive without one (`http` or `https`).
    pub default_scheme: String,
    /// Upper bound on tool executions within a single turn (valid range: 1-32).
    pub max_tool_calls_per_turn: u32,
    /// When false, URLs are logged instead of handed to the system browser.
    pub open_in_browser: bool,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            default_scheme: "https".into(),
            max_tool_calls_per_turn: 8,
            open_in_browser: true,
        }
    }
}
