//! Mutation operations for the TileManager.
//!
//! Every operation here is all-or-nothing: validation happens before any
//! state change, and a successful change is followed by a synchronous
//! persist. Destructive operations referencing an absent tile are
//! harmless no-ops; operations that must derive a new artifact from an
//! existing tile reject instead.

use serde_json::Value;

use super::{default_tiles, TileManager};
use crate::{Tile, TileError, TileSize, TileType};

/// Partial field update applied by [`TileManager::update_tile`].
///
/// Unset fields are left untouched on the target tile.
#[derive(Debug, Clone, Default)]
pub struct TileUpdate {
    /// New display title.
    pub title: Option<String>,
    /// New symbolic size.
    pub size: Option<TileSize>,
    /// New fullscreen flag. Setting `true` clears the flag on every other
    /// tile so fullscreen stays exclusive.
    pub is_fullscreen: Option<bool>,
    /// Replacement widget config.
    pub config: Option<Value>,
}

impl TileManager {
    /// Adds a new tile of the given type.
    ///
    /// The tile gets a fresh id, the given title or the type's display
    /// name, the type's default size, and an order one past the current
    /// maximum. Fails without mutating when the type is single-instance
    /// and already present.
    ///
    /// # Errors
    ///
    /// Returns [`TileError::SingleInstance`] when the type's catalog entry
    /// has `allow_multiple = false` and a tile of that type exists.
    pub fn add_tile(
        &mut self,
        tile_type: TileType,
        custom_title: Option<String>,
        config: Option<Value>,
    ) -> Result<Tile, TileError> {
        let info = tile_type.info();
        if !info.allow_multiple && self.tiles.iter().any(|t| t.tile_type == tile_type) {
            return Err(TileError::SingleInstance(tile_type));
        }

        let title = custom_title.unwrap_or_else(|| info.display_name.to_string());
        let mut tile = Tile::new(tile_type, title, info.default_size, self.max_order() + 1);
        tile.config = config;

        self.tiles.push(tile.clone());
        self.persist();
        Ok(tile)
    }

    /// Adds a tile given a type name, validating it against the catalog.
    ///
    /// This is the entry point for stringly-typed callers (the CLI, a
    /// picker fed from user input).
    ///
    /// # Errors
    ///
    /// Returns [`TileError::UnknownType`] for a name outside the closed
    /// type set, otherwise whatever [`TileManager::add_tile`] returns.
    pub fn add_tile_named(
        &mut self,
        type_name: &str,
        custom_title: Option<String>,
        config: Option<Value>,
    ) -> Result<Tile, TileError> {
        let tile_type = type_name
            .parse::<TileType>()
            .map_err(|_| TileError::UnknownType(type_name.to_string()))?;
        self.add_tile(tile_type, custom_title, config)
    }

    /// Clones an existing tile.
    ///
    /// The copy keeps the source's type, size, and config but gets a fresh
    /// id, the given title or `"{source title} (Copy)"`, an order one past
    /// the current maximum, and `is_fullscreen` forced off.
    ///
    /// # Errors
    ///
    /// Returns [`TileError::TileNotFound`] when the id does not resolve,
    /// or [`TileError::SingleInstance`] when the source type is
    /// single-instance.
    pub fn duplicate_tile(
        &mut self,
        tile_id: &str,
        custom_title: Option<String>,
    ) -> Result<Tile, TileError> {
        let source = self
            .tiles
            .iter()
            .find(|t| t.id == tile_id)
            .cloned()
            .ok_or_else(|| TileError::TileNotFound(tile_id.to_string()))?;
        if !source.tile_type.info().allow_multiple {
            return Err(TileError::SingleInstance(source.tile_type));
        }

        let mut copy = source.clone();
        copy.id = Tile::generate_id(copy.tile_type);
        copy.title = custom_title.unwrap_or_else(|| format!("{} (Copy)", source.title));
        copy.order = self.max_order() + 1;
        copy.is_fullscreen = false;

        self.tiles.push(copy.clone());
        self.persist();
        Ok(copy)
    }

    /// Removes the tile with the given id.
    ///
    /// Idempotent: removing an absent id is a no-op and returns `None`.
    pub fn remove_tile(&mut self, tile_id: &str) -> Option<Tile> {
        let pos = self.tiles.iter().position(|t| t.id == tile_id)?;
        let removed = self.tiles.remove(pos);
        self.persist();
        Some(removed)
    }

    /// Merges a partial update into the tile with the given id.
    ///
    /// No-op returning `None` when the id is absent. A patch that sets
    /// `is_fullscreen = true` clears the flag on every other tile in the
    /// same update, so fullscreen exclusivity cannot be bypassed through
    /// this path.
    pub fn update_tile(&mut self, tile_id: &str, update: TileUpdate) -> Option<Tile> {
        let pos = self.tiles.iter().position(|t| t.id == tile_id)?;

        if update.is_fullscreen == Some(true) {
            for tile in &mut self.tiles {
                tile.is_fullscreen = false;
            }
        }

        let tile = &mut self.tiles[pos];
        if let Some(title) = update.title {
            tile.title = title;
        }
        if let Some(size) = update.size {
            tile.size = size;
        }
        if let Some(fullscreen) = update.is_fullscreen {
            tile.is_fullscreen = fullscreen;
        }
        if let Some(config) = update.config {
            tile.config = Some(config);
        }

        let updated = tile.clone();
        self.persist();
        Some(updated)
    }

    /// Toggles fullscreen for the tile with the given id.
    ///
    /// Entering fullscreen clears the flag on every other tile in the
    /// same update; leaving simply clears it. No-op when the id is
    /// absent.
    pub fn toggle_fullscreen(&mut self, tile_id: &str) -> Option<Tile> {
        let pos = self.tiles.iter().position(|t| t.id == tile_id)?;
        let entering = !self.tiles[pos].is_fullscreen;

        if entering {
            for tile in &mut self.tiles {
                tile.is_fullscreen = false;
            }
        }
        self.tiles[pos].is_fullscreen = entering;

        let updated = self.tiles[pos].clone();
        self.persist();
        Some(updated)
    }

    /// Cycles the tile's size forward (small → ... → extra-large → small).
    ///
    /// No-op when the id is absent.
    pub fn expand_tile(&mut self, tile_id: &str) -> Option<Tile> {
        let pos = self.tiles.iter().position(|t| t.id == tile_id)?;
        self.tiles[pos].size = self.tiles[pos].size.next();

        let updated = self.tiles[pos].clone();
        self.persist();
        Some(updated)
    }

    /// Forces the tile back to normal size and out of fullscreen.
    ///
    /// No-op when the id is absent.
    pub fn reset_tile(&mut self, tile_id: &str) -> Option<Tile> {
        let pos = self.tiles.iter().position(|t| t.id == tile_id)?;
        self.tiles[pos].size = TileSize::Normal;
        self.tiles[pos].is_fullscreen = false;

        let updated = self.tiles[pos].clone();
        self.persist();
        Some(updated)
    }

    /// Moves the source tile immediately before the target tile, then
    /// renumbers every tile's order to its 1-based display position
    /// (collapsing any gaps).
    ///
    /// Returns `false` (no-op) when either id is absent or both ids name
    /// the same tile.
    pub fn reorder_tiles(&mut self, source_id: &str, target_id: &str) -> bool {
        if source_id == target_id {
            return false;
        }

        // Positions are display positions, so work on the order-sorted list.
        self.tiles.sort_by_key(|t| t.order);

        let Some(src_pos) = self.tiles.iter().position(|t| t.id == source_id) else {
            return false;
        };
        let source = self.tiles.remove(src_pos);
        let Some(tgt_pos) = self.tiles.iter().position(|t| t.id == target_id) else {
            // Unknown target: put the source back where it was.
            self.tiles.insert(src_pos, source);
            return false;
        };
        self.tiles.insert(tgt_pos, source);

        for (i, tile) in self.tiles.iter_mut().enumerate() {
            tile.order = (i + 1) as i64;
        }

        self.persist();
        true
    }

    /// Replaces the whole collection with the default seed set,
    /// discarding all customization.
    pub fn reset_to_defaults(&mut self) {
        self.tiles = default_tiles();
        self.persist();
    }
}
