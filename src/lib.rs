//! Homeboard library
//!
//! This crate provides the core of a personal dashboard: a registry of
//! configurable tiles (news, weather, to-do, shortcuts, ...) with sizing,
//! ordering, and fullscreen semantics, persisted as a JSON blob through an
//! injected key-value store.
//!
//! The [`manager::TileManager`] owns the tile collection and enforces its
//! invariants; widget renderers are external to this crate and only receive
//! a tile's id, title, config, and the catalog metadata for its type. They
//! never touch storage directly — every mutation flows back through the
//! manager's operations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Static tile type catalog (display names, icons, defaults, cardinality).
pub mod catalog;

/// Configuration utilities including XDG path resolution.
pub mod config;

/// Grid size-class lookup for tile rendering.
pub mod layout;

/// Tile registry and layout manager.
pub mod manager;

/// Durable key-value store trait and implementations.
pub mod storage;

pub use catalog::TileTypeInfo;

/// Storage key under which the tile collection is persisted.
///
/// All writes to this key go through [`manager::TileManager`]; other
/// components must not write to it.
pub const TILES_KEY: &str = "homeboard.tiles";

/// Tile kind enumeration.
///
/// A closed set: each variant maps to exactly one widget renderer and one
/// [`TileTypeInfo`] catalog entry. The wire form is the kebab-case slug
/// (`"ai-chat"`, `"minigames"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TileType {
    /// Headline feed
    News,
    /// Local weather
    Weather,
    /// To-do list
    Todo,
    /// Link shortcuts
    Shortcuts,
    /// Livestream grid
    Livestreams,
    /// AI chat assistant
    AiChat,
    /// Mini-game collection
    Minigames,
    /// Travel planner
    Travel,
}

impl TileType {
    /// All tile types, in catalog order.
    pub const ALL: [TileType; 8] = [
        TileType::News,
        TileType::Weather,
        TileType::Todo,
        TileType::Shortcuts,
        TileType::Livestreams,
        TileType::AiChat,
        TileType::Minigames,
        TileType::Travel,
    ];

    /// Returns the kebab-case slug used in ids, wire records, and the CLI.
    pub fn slug(self) -> &'static str {
        match self {
            TileType::News => "news",
            TileType::Weather => "weather",
            TileType::Todo => "todo",
            TileType::Shortcuts => "shortcuts",
            TileType::Livestreams => "livestreams",
            TileType::AiChat => "ai-chat",
            TileType::Minigames => "minigames",
            TileType::Travel => "travel",
        }
    }
}

impl fmt::Display for TileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// Error type for parsing a TileType from string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTileTypeError(pub String);

impl fmt::Display for ParseTileTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tile type: {}", self.0)
    }
}

impl std::error::Error for ParseTileTypeError {}

impl FromStr for TileType {
    type Err = ParseTileTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "news" => Ok(TileType::News),
            "weather" => Ok(TileType::Weather),
            "todo" => Ok(TileType::Todo),
            "shortcuts" => Ok(TileType::Shortcuts),
            "livestreams" => Ok(TileType::Livestreams),
            "ai-chat" => Ok(TileType::AiChat),
            "minigames" => Ok(TileType::Minigames),
            "travel" => Ok(TileType::Travel),
            _ => Err(ParseTileTypeError(s.to_string())),
        }
    }
}

/// Tile size enumeration, ordered smallest to largest.
///
/// Maps to a fixed grid class via [`layout::size_class`]. Persisted records
/// carrying an unrecognized size (or one of the legacy `columns`/`width`
/// fields) are normalized on load; see [`manager`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TileSize {
    Small,
    Normal,
    Medium,
    Large,
    ExtraLarge,
}

impl TileSize {
    /// Returns the next size in the fixed cycle, wrapping from
    /// `ExtraLarge` back to `Small`.
    ///
    /// # Example
    ///
    /// ```
    /// use homeboard::TileSize;
    ///
    /// let mut size = TileSize::Small;
    /// for _ in 0..5 {
    ///     size = size.next();
    /// }
    /// assert_eq!(size, TileSize::Small);
    /// ```
    pub fn next(self) -> TileSize {
        match self {
            TileSize::Small => TileSize::Normal,
            TileSize::Normal => TileSize::Medium,
            TileSize::Medium => TileSize::Large,
            TileSize::Large => TileSize::ExtraLarge,
            TileSize::ExtraLarge => TileSize::Small,
        }
    }

    /// Returns the kebab-case slug (`"extra-large"`, ...).
    pub fn slug(self) -> &'static str {
        match self {
            TileSize::Small => "small",
            TileSize::Normal => "normal",
            TileSize::Medium => "medium",
            TileSize::Large => "large",
            TileSize::ExtraLarge => "extra-large",
        }
    }
}

impl fmt::Display for TileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// Error type for parsing a TileSize from string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTileSizeError(pub String);

impl fmt::Display for ParseTileSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tile size: {}", self.0)
    }
}

impl std::error::Error for ParseTileSizeError {}

impl FromStr for TileSize {
    type Err = ParseTileSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "small" => Ok(TileSize::Small),
            "normal" => Ok(TileSize::Normal),
            "medium" => Ok(TileSize::Medium),
            "large" => Ok(TileSize::Large),
            "extra-large" => Ok(TileSize::ExtraLarge),
            _ => Err(ParseTileSizeError(s.to_string())),
        }
    }
}

/// A configured widget instance on the dashboard.
///
/// The wire shape matches the persisted JSON records:
/// `id, type, title, size, order, isFullscreen, config?`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// Opaque unique identifier, stable for the tile's lifetime.
    pub id: String,
    /// Which widget renderer is mounted for this tile.
    #[serde(rename = "type")]
    pub tile_type: TileType,
    /// User-editable display title.
    pub title: String,
    /// Current symbolic size.
    pub size: TileSize,
    /// Relative sort position among tiles; not required to be contiguous.
    pub order: i64,
    /// Whether this tile currently occupies the whole board.
    /// At most one tile in a collection has this set.
    #[serde(rename = "isFullscreen")]
    pub is_fullscreen: bool,
    /// Type-specific settings, owned and interpreted by the widget renderer.
    /// Opaque to the manager.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<serde_json::Value>,
}

impl Tile {
    /// Creates a new non-fullscreen tile with a fresh id and no config.
    pub fn new(tile_type: TileType, title: String, size: TileSize, order: i64) -> Self {
        Self {
            id: Tile::generate_id(tile_type),
            tile_type,
            title,
            size,
            order,
            is_fullscreen: false,
            config: None,
        }
    }

    /// Generates a fresh tile id: `{type}-{uuid}`.
    ///
    /// Ids stay unique even when several tiles of one type are created
    /// within the same clock tick.
    pub fn generate_id(tile_type: TileType) -> String {
        format!("{}-{}", tile_type.slug(), Uuid::new_v4())
    }
}

/// Errors that can occur during tile manager operations.
///
/// All variants are rejected before any mutation: a failed operation leaves
/// the collection exactly as it was.
#[derive(Debug, thiserror::Error)]
pub enum TileError {
    /// The requested type is not in the catalog.
    #[error("unknown tile type: {0}")]
    UnknownType(String),

    /// The type allows a single instance and one already exists.
    #[error("only one {0} tile is allowed")]
    SingleInstance(TileType),

    /// The referenced tile does not exist.
    #[error("tile not found: {0}")]
    TileNotFound(String),
}
