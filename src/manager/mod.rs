//! Tile registry and layout manager.
//!
//! [`TileManager`] owns the tile collection and is the only writer of the
//! [`TILES_KEY`](crate::TILES_KEY) record in the durable store. Every
//! mutation completes in memory and is followed by a synchronous persist;
//! there is no async work anywhere in this component.
//!
//! Loading tolerates all historic persisted shapes: records described by a
//! discrete `columns` count or a pixel `width` are normalized to the
//! current symbolic size on the fly (see [`migrate`]), and the normalized
//! form is re-persisted immediately so migration runs at most once per
//! legacy record.

use crate::storage::TileStore;
use crate::{Tile, TileSize, TileType, TILES_KEY};

mod migrate;
mod ops;
mod views;

#[cfg(test)]
mod tests;

pub use ops::TileUpdate;

/// Owns the tile collection, its invariants, and its persistence.
///
/// Invariants maintained after construction and after every operation:
/// tile ids are unique; at most one tile is fullscreen; single-instance
/// types have at most one tile; every size is a valid enum member.
///
/// # Example
///
/// ```
/// use homeboard::manager::TileManager;
/// use homeboard::storage::MemoryStore;
/// use homeboard::TileType;
///
/// let mut manager = TileManager::new(Box::new(MemoryStore::new()));
/// // An empty store seeds the five default tiles.
/// assert_eq!(manager.sorted_tiles().len(), 5);
///
/// let tile = manager
///     .add_tile(TileType::Minigames, None, None)
///     .expect("minigames can be added");
/// assert_eq!(tile.order, 6);
/// ```
pub struct TileManager {
    /// The tile collection. Display order is governed by each tile's
    /// `order` field, not by list position.
    tiles: Vec<Tile>,
    /// UI affordance flag; not persisted.
    edit_mode: bool,
    /// Tile currently being dragged, if any; not persisted.
    dragged_tile: Option<String>,
    /// Injected durable store.
    store: Box<dyn TileStore>,
}

impl TileManager {
    /// Creates a manager over the given store, loading the persisted
    /// collection or seeding defaults when none exists.
    ///
    /// An unreadable or unparseable record is treated as absent: the
    /// manager falls back to the default seed set and overwrites the bad
    /// record on its next persist. Load failure is never surfaced.
    pub fn new(store: Box<dyn TileStore>) -> Self {
        let mut manager = Self {
            tiles: Vec::new(),
            edit_mode: false,
            dragged_tile: None,
            store,
        };
        manager.load();
        manager
    }

    /// Loads the collection from the store, migrating legacy shapes and
    /// seeding defaults when nothing usable is stored.
    fn load(&mut self) {
        let blob = match self.store.load(TILES_KEY) {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                tracing::debug!("no persisted tiles, seeding defaults");
                self.tiles = default_tiles();
                self.persist();
                return;
            }
            Err(e) => {
                tracing::warn!("failed to load tile collection, seeding defaults: {e}");
                self.tiles = default_tiles();
                self.persist();
                return;
            }
        };

        match migrate::load_collection(&blob) {
            Ok(outcome) => {
                self.tiles = outcome.tiles;
                if outcome.migrated {
                    tracing::info!("normalized legacy tile records, re-persisting");
                    self.persist();
                }
            }
            Err(e) => {
                tracing::warn!("persisted tiles are malformed, seeding defaults: {e}");
                self.tiles = default_tiles();
                self.persist();
            }
        }
    }

    /// Serializes the collection and writes it to the store.
    ///
    /// Storage anomalies are absorbed here: a failed save is logged at
    /// warn level and the in-memory state stays authoritative.
    fn persist(&self) {
        match serde_json::to_string(&self.tiles) {
            Ok(blob) => {
                if let Err(e) = self.store.save(TILES_KEY, &blob) {
                    tracing::warn!("failed to persist tile collection: {e}");
                }
            }
            Err(e) => tracing::warn!("failed to encode tile collection: {e}"),
        }
    }

    /// Highest order value in the collection, or 0 when empty.
    fn max_order(&self) -> i64 {
        self.tiles.iter().map(|t| t.order).max().unwrap_or(0)
    }

    /// Whether edit mode (drag handles, remove buttons) is active.
    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Turns edit mode on or off. Pure UI affordance, never persisted.
    pub fn set_edit_mode(&mut self, on: bool) {
        self.edit_mode = on;
    }

    /// Id of the tile currently being dragged, if any.
    pub fn dragged_tile(&self) -> Option<&str> {
        self.dragged_tile.as_deref()
    }

    /// Records or clears the in-flight drag source. Ephemeral state.
    pub fn set_dragged_tile(&mut self, tile_id: Option<String>) {
        self.dragged_tile = tile_id;
    }
}

/// The fixed default seed set: one of each starter type, orders 1..=5,
/// normal size, nothing fullscreen.
fn default_tiles() -> Vec<Tile> {
    const SEED: [TileType; 5] = [
        TileType::News,
        TileType::Weather,
        TileType::Todo,
        TileType::Shortcuts,
        TileType::Travel,
    ];
    SEED.iter()
        .enumerate()
        .map(|(i, ty)| {
            Tile::new(
                *ty,
                ty.info().display_name.to_string(),
                TileSize::Normal,
                (i + 1) as i64,
            )
        })
        .collect()
}
