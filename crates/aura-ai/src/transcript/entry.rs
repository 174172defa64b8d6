use std::fmt;

use serde::Serialize;

/// Who produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptRole {
    /// Typed or dictated input.
    User,
    /// Model response text.
    Model,
    /// Orchestrator notices: tool announcements and faults.
    System,
}

impl TranscriptRole {
    pub fn as_str(self) -> &'static str {
        match self {
            TranscriptRole::User => "user",
            TranscriptRole::Model => "model",
            TranscriptRole::System => "system",
        }
    }
}

impl fmt::Display for TranscriptRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One immutable line of the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptEntry {
    id: String,
    role: TranscriptRole,
    text: String,
    timestamp: String,
}

impl TranscriptEntry {
    pub(super) fn new(role: TranscriptRole, text: impl Into<String>) -> Self {
        Self {
            id: format!("{role}-{}", uuid::Uuid::new_v4()),
            role,
            text: text.into(),
            timestamp: chrono::Local::now().format("%-I:%M:%S %p").to_string(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn role(&self) -> TranscriptRole {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Local creation time, e.g. `3:07:42 PM`.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}
