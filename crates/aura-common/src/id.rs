use serde::{Deserialize, Serialize};
use std::fmt;

pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Short hex id used to correlate log lines belonging to one turn.
pub fn new_correlation_id() -> String {
    let uuid = uuid::Uuid::new_v4();
    let bytes = uuid.as_bytes();
    format!(
        "{:02x}{:02x}{:02x}{:02x}",
        bytes[0], bytes[1], bytes[2], bytes[3]
    )
}

/// Identifies one conversation with the model provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new() -> Self {
        Self(new_id())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_id_is_v4_uuid() {
        let id = new_id();
        let parsed = uuid::Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn new_id_is_unique() {
        assert_ne!(new_id(), new_id());
    }

    #[test]
    fn correlation_id_is_eight_hex_chars() {
        let cid = new_correlation_id();
        assert_eq!(cid.len(), 8);
        assert!(cid.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn session_id_display_matches_as_str() {
        let sid = SessionId::new();
        assert_eq!(sid.to_string(), sid.as_str());
        assert!(uuid::Uuid::parse_str(sid.as_str()).is_ok());
    }

    #[test]
    fn session_ids_differ() {
        let sid = SessionId::default();
        assert_eq!(sid, sid.clone());
        assert_ne!(sid, SessionId::new());
    }

    #[test]
    fn session_id_serializes_as_plain_string() {
        let sid = SessionId::new();
        let json = serde_json::to_string(&sid).unwrap();
        assert_eq!(json, format!("\"{}\"", sid.as_str()));
        let back: SessionId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sid);
    }
}
