use std::collections::HashSet;
use std::sync::Arc;

use super::*;

#[test]
fn append_preserves_insertion_order() {
    let store = TranscriptStore::new();
    store.append(TranscriptRole::User, "hello");
    store.append(TranscriptRole::Model, "hi there");
    store.append(TranscriptRole::System, "Executing: Opening https://example.com");

    let entries = store.entries();
    let roles: Vec<_> = entries.iter().map(|e| e.role()).collect();
    assert_eq!(
        roles,
        vec![TranscriptRole::User, TranscriptRole::Model, TranscriptRole::System]
    );
    assert_eq!(entries[1].text(), "hi there");
    assert_eq!(store.len(), 3);
    assert_eq!(store.last().unwrap().role(), TranscriptRole::System);
}

#[test]
fn ids_are_unique_and_role_prefixed() {
    let store = TranscriptStore::new();
    for _ in 0..50 {
        store.append(TranscriptRole::Model, "");
    }
    let ids: HashSet<_> = store.entries().iter().map(|e| e.id().to_string()).collect();
    assert_eq!(ids.len(), 50);
    assert!(ids.iter().all(|id| id.starts_with("model-")));
}

#[test]
fn get_finds_by_id() {
    let store = TranscriptStore::new();
    let entry = store.append(TranscriptRole::User, "find me");
    assert_eq!(store.get(entry.id()), Some(entry));
    assert_eq!(store.get("user-missing"), None);
}

#[test]
fn snapshots_are_unaffected_by_later_appends() {
    let store = TranscriptStore::new();
    let first = store.append(TranscriptRole::User, "one");
    let snapshot = store.entries();
    store.append(TranscriptRole::Model, "two");

    assert_eq!(snapshot.len(), 1);
    assert_eq!(store.entries()[0], first);
}

#[test]
fn timestamp_is_twelve_hour_clock() {
    let entry = TranscriptStore::new().append(TranscriptRole::System, "x");
    let ts = entry.timestamp();
    assert!(ts.ends_with(" AM") || ts.ends_with(" PM"), "{ts}");
    assert_eq!(ts.matches(':').count(), 2, "{ts}");
}

#[test]
fn entry_serializes_with_lowercase_role() {
    let entry = TranscriptStore::new().append(TranscriptRole::Model, "hi");
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["role"], "model");
    assert_eq!(json["text"], "hi");
    assert_eq!(json["id"], entry.id());
}

#[tokio::test]
async fn subscribers_receive_appended_entries() {
    let store = TranscriptStore::new();
    let mut rx = store.subscribe();

    store.append(TranscriptRole::User, "hello");
    store.append(TranscriptRole::Model, "hi there");

    assert_eq!(rx.recv().await.unwrap().text(), "hello");
    assert_eq!(rx.recv().await.unwrap().text(), "hi there");
}

#[test]
fn append_without_subscribers_still_records() {
    let store = TranscriptStore::new();
    store.append(TranscriptRole::System, "nobody listening");
    assert!(!store.is_empty());
}

#[test]
fn poisoned_lock_keeps_entries() {
    let store = Arc::new(TranscriptStore::new());
    store.append(TranscriptRole::User, "before");

    let poisoner = Arc::clone(&store);
    let _ = std::thread::spawn(move || {
        let _guard = poisoner.entries.write().unwrap();
        panic!("poison the lock");
    })
    .join();

    store.append(TranscriptRole::Model, "after");
    let texts: Vec<_> = store.entries().iter().map(|e| e.text().to_string()).collect();
    assert_eq!(texts, vec!["before", "after"]);
}
