//! Configuration schema types for Aura.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod assistant;
mod system;
mod tools;

pub use assistant::*;
pub use system::*;
pub use tools::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Aura.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct AuraConfig {
    pub assistant: AssistantConfig,
    pub tools: ToolsConfig,
    pub logging: LoggingConfig,
}
