//! Unit tests for the TileManager.
//!
//! Tests construct managers over [`MemoryStore`] clones so persisted
//! state can be inspected without a filesystem.

use super::TileManager;
use crate::storage::MemoryStore;
use crate::TILES_KEY;

mod loading;

/// Builds a manager over a fresh in-memory store.
///
/// Returns a clone of the store so the test can inspect what the manager
/// persisted.
fn manager_with_store() -> (TileManager, MemoryStore) {
    let store = MemoryStore::new();
    let manager = TileManager::new(Box::new(store.clone()));
    (manager, store)
}

/// Builds a manager over a store pre-seeded with a persisted collection.
fn manager_from_blob(blob: &str) -> (TileManager, MemoryStore) {
    let store = MemoryStore::with_entry(TILES_KEY, blob);
    let manager = TileManager::new(Box::new(store.clone()));
    (manager, store)
}

/// Parses the blob the manager last persisted.
fn persisted_tiles(store: &MemoryStore) -> Vec<serde_json::Value> {
    let blob = store.snapshot(TILES_KEY).expect("collection should be persisted");
    serde_json::from_str(&blob).expect("persisted blob should be a JSON array")
}
