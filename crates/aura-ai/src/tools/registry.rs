//! Tool declarations and the immutable registry handed to the session.

use serde::{Deserialize, Serialize};

/// What the model is told about a callable tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDeclaration {
    pub name: String,
    pub description: String,
    /// JSON schema of the arguments object.
    pub parameters: serde_json::Value,
}

/// Every tool Aura can execute locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinTool {
    OpenWebsite,
}

impl BuiltinTool {
    pub const ALL: &'static [BuiltinTool] = &[BuiltinTool::OpenWebsite];

    pub fn name(self) -> &'static str {
        match self {
            BuiltinTool::OpenWebsite => "open_website",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|tool| tool.name() == name)
    }

    pub fn declaration(self) -> ToolDeclaration {
        match self {
            BuiltinTool::OpenWebsite => ToolDeclaration {
                name: self.name().to_string(),
                description: "Opens a specified URL in a new browser tab.".to_string(),
                parameters: serde_json::json!({
                    "type": "object",
                    "properties": {
                        "url": {
                            "type": "string",
                            "description": "The full URL to open, e.g., https://www.google.com"
                        }
                    },
                    "required": ["url"]
                }),
            },
        }
    }
}

/// Immutable name → tool mapping, built once at startup.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: Vec<(BuiltinTool, ToolDeclaration)>,
}

impl ToolRegistry {
    /// Registry containing every built-in tool.
    pub fn builtin() -> Self {
        Self::with_tools(BuiltinTool::ALL)
    }

    /// Registry containing only `tools`, in the given order. Duplicates are
    /// ignored.
    pub fn with_tools(tools: &[BuiltinTool]) -> Self {
        let mut entries: Vec<(BuiltinTool, ToolDeclaration)> = Vec::with_capacity(tools.len());
        for &tool in tools {
            if !entries.iter().any(|(t, _)| *t == tool) {
                entries.push((tool, tool.declaration()));
            }
        }
        Self { tools: entries }
    }

    /// Declarations to pass to the session at creation.
    pub fn declarations(&self) -> Vec<ToolDeclaration> {
        self.tools.iter().map(|(_, decl)| decl.clone()).collect()
    }

    /// Look up a registered tool by the name the model used.
    pub fn resolve(&self, name: &str) -> Option<BuiltinTool> {
        self.tools
            .iter()
            .find(|(_, decl)| decl.name == name)
            .map(|(tool, _)| *tool)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_declares_open_website() {
        let registry = ToolRegistry::builtin();
        assert_eq!(registry.len(), 1);
        let decls = registry.declarations();
        assert_eq!(decls[0].name, "open_website");
        assert_eq!(decls[0].parameters["required"][0], "url");
        assert_eq!(decls[0].parameters["properties"]["url"]["type"], "string");
    }

    #[test]
    fn resolve_known_and_unknown_names() {
        let registry = ToolRegistry::builtin();
        assert_eq!(registry.resolve("open_website"), Some(BuiltinTool::OpenWebsite));
        assert_eq!(registry.resolve("format_disk"), None);
        assert!(!registry.contains("Open_Website"));
    }

    #[test]
    fn empty_registry_resolves_nothing() {
        let registry = ToolRegistry::with_tools(&[]);
        assert!(registry.is_empty());
        assert_eq!(registry.resolve("open_website"), None);
    }

    #[test]
    fn duplicates_are_registered_once() {
        let registry = ToolRegistry::with_tools(&[BuiltinTool::OpenWebsite, BuiltinTool::OpenWebsite]);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn from_name_round_trips_every_tool() {
        for &tool in BuiltinTool::ALL {
            assert_eq!(BuiltinTool::from_name(tool.name()), Some(tool));
        }
        assert_eq!(BuiltinTool::from_name(""), None);
    }

    #[test]
    fn gemini_format_uses_parameters_key() {
        let decl = BuiltinTool::OpenWebsite.declaration();
        let json = crate::tools::to_gemini_tool(&decl);
        assert_eq!(json["name"], "open_website");
        assert_eq!(json["parameters"]["type"], "object");
    }
}
