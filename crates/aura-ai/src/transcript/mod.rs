//! Append-only conversation record.
//!
//! Display layers read snapshots via [`TranscriptStore::entries`] or follow
//! new entries live through [`TranscriptStore::subscribe`].

mod entry;

use std::sync::{PoisonError, RwLock};

use tokio::sync::broadcast;

pub use entry::{TranscriptEntry, TranscriptRole};

const BROADCAST_CAPACITY: usize = 256;

pub struct TranscriptStore {
    entries: RwLock<Vec<TranscriptEntry>>,
    sender: broadcast::Sender<TranscriptEntry>,
}

impl TranscriptStore {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(BROADCAST_CAPACITY);
        Self {
            entries: RwLock::new(Vec::new()),
            sender,
        }
    }

    /// Append a new entry and publish it to subscribers.
    pub fn append(&self, role: TranscriptRole, text: impl Into<String>) -> TranscriptEntry {
        let entry = TranscriptEntry::new(role, text);
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry.clone());
        // No subscribers is fine.
        let _ = self.sender.send(entry.clone());
        entry
    }

    /// Snapshot in insertion order.
    pub fn entries(&self) -> Vec<TranscriptEntry> {
        self.read().clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn get(&self, id: &str) -> Option<TranscriptEntry> {
        self.read().iter().find(|e| e.id() == id).cloned()
    }

    pub fn last(&self) -> Option<TranscriptEntry> {
        self.read().last().cloned()
    }

    /// Receive every entry appended after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<TranscriptEntry> {
        self.sender.subscribe()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<TranscriptEntry>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for TranscriptStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
