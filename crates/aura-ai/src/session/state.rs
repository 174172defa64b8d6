use std::fmt;

/// Lifecycle of the session as seen by the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No session has been attached yet.
    Uninitialized,
    Ready,
    /// Creation failed or the provider rejected the credential. Terminal
    /// until a new session is created externally.
    Faulted,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionState::Uninitialized => "uninitialized",
            SessionState::Ready => "ready",
            SessionState::Faulted => "faulted",
        };
        f.write_str(s)
    }
}
