//! Derived-view queries on the tile collection.
//!
//! Read-only; none of these touch the durable store.

use super::TileManager;
use crate::catalog::TileTypeInfo;
use crate::layout;
use crate::{Tile, TileSize, TileType};

impl TileManager {
    /// Returns the tile with the given id, if present.
    pub fn get_tile(&self, tile_id: &str) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.id == tile_id)
    }

    /// Number of tiles in the collection.
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// All tiles sorted ascending by their order field.
    ///
    /// Ties keep collection iteration order (stable sort).
    pub fn sorted_tiles(&self) -> Vec<&Tile> {
        let mut sorted: Vec<&Tile> = self.tiles.iter().collect();
        sorted.sort_by_key(|t| t.order);
        sorted
    }

    /// The tile currently in fullscreen, if any.
    ///
    /// At most one tile carries the flag, so the first match is the only
    /// match.
    pub fn fullscreen_tile(&self) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.is_fullscreen)
    }

    /// Grid class token for the tile with the given id.
    ///
    /// A fullscreen tile gets the full-width token regardless of its
    /// size. An unknown id falls back to the normal-size class; this
    /// query never fails.
    pub fn tile_class(&self, tile_id: &str) -> &'static str {
        match self.get_tile(tile_id) {
            Some(tile) if tile.is_fullscreen => layout::FULLSCREEN_CLASS,
            Some(tile) => layout::size_class(tile.size),
            None => layout::size_class(TileSize::Normal),
        }
    }

    /// Catalog entries for the types a new add would currently accept:
    /// multi-instance types, plus single-instance types with no tile yet.
    pub fn available_tile_types(&self) -> Vec<&'static TileTypeInfo> {
        TileType::ALL
            .iter()
            .filter(|ty| {
                ty.info().allow_multiple || !self.tiles.iter().any(|t| t.tile_type == **ty)
            })
            .map(|ty| ty.info())
            .collect()
    }
}
