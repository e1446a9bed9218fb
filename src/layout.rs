//! Grid size-class lookup.
//!
//! Every tile size maps to a fixed grid class token; a fullscreen tile gets
//! the distinguished full-width token regardless of its size. The span
//! numbers line up with the legacy column counts the migration table maps
//! from (columns=2 → small → `span-2`, and so on).

use crate::TileSize;

/// Class token for a fullscreen tile: full board width, one row.
pub const FULLSCREEN_CLASS: &str = "span-full";

/// Returns the grid class token for a (non-fullscreen) tile size.
pub fn size_class(size: TileSize) -> &'static str {
    match size {
        TileSize::Small => "span-2",
        TileSize::Normal => "span-3",
        TileSize::Medium => "span-4",
        TileSize::Large => "span-5",
        TileSize::ExtraLarge => "span-6",
    }
}
