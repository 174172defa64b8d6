//! Tools the model may call.
//!
//! The set is closed: every tool is a [`BuiltinTool`] variant with a typed
//! handler, and the model only learns about the ones registered in the
//! session's [`ToolRegistry`].

mod executor;
mod launcher;
mod open_website;
mod registry;

pub use executor::{ToolExecutor, ToolInvocationRequest, ToolInvocationResult, ToolOutcome};
pub use launcher::{LogOnlyLauncher, SystemBrowser, UrlLauncher};
pub use open_website::canonicalize_url;
pub use registry::{BuiltinTool, ToolDeclaration, ToolRegistry};

/// Convert a tool declaration to the Gemini `functionDeclarations` format.
pub fn to_gemini_tool(tool: &ToolDeclaration) -> serde_json::Value {
    serde_json::json!({
        "name": tool.name,
        "description": tool.description,
        "parameters": tool.parameters,
    })
}
