//! Parameters fixed at session creation.

use std::fmt;

use crate::tools::ToolDeclaration;

/// Everything a provider session needs at creation time.
#[derive(Clone)]
pub struct SessionConfig {
    /// Provider credential. `None` is reported as a configuration fault
    /// when the session is created.
    pub api_key: Option<String>,
    pub model: String,
    pub system_instruction: String,
    /// Tools the model is told it may call.
    pub tools: Vec<ToolDeclaration>,
    pub max_output_tokens: u32,
    pub temperature: f64,
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("system_instruction", &self.system_instruction)
            .field("tools", &self.tools.iter().map(|t| &t.name).collect::<Vec<_>>())
            .field("max_output_tokens", &self.max_output_tokens)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl SessionConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            api_key: None,
            model: model.into(),
            system_instruction: String::new(),
            tools: Vec::new(),
            max_output_tokens: 2048,
            temperature: 0.7,
        }
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = instruction.into();
        self
    }

    pub fn with_tools(mut self, tools: Vec<ToolDeclaration>) -> Self {
        self.tools = tools;
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }
}
