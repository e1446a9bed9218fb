//! Static tile type catalog.
//!
//! Maps each [`TileType`] to its immutable metadata: display name, icon,
//! accent color, description, default size, and cardinality rule. The set
//! of types is closed at build time, so this is a plain `const` lookup
//! table rather than a runtime registry.

use crate::{TileSize, TileType};

/// Immutable metadata for one tile type.
///
/// Widget renderers receive the `icon` and `color` tokens alongside a
/// tile's id, title, and config; the manager itself only consults
/// `default_size` and `allow_multiple`.
#[derive(Debug, Clone, PartialEq)]
pub struct TileTypeInfo {
    /// The type this entry describes.
    pub tile_type: TileType,
    /// Human-readable name, used as the default tile title.
    pub display_name: &'static str,
    /// Icon token handed to the renderer.
    pub icon: &'static str,
    /// Accent color handed to the renderer.
    pub color: &'static str,
    /// Short description shown in the add-tile picker.
    pub description: &'static str,
    /// Size assigned to newly added tiles of this type.
    pub default_size: TileSize,
    /// Whether more than one tile of this type may exist at once.
    pub allow_multiple: bool,
}

/// One entry per [`TileType`], in [`TileType::ALL`] order.
const CATALOG: [TileTypeInfo; 8] = [
    TileTypeInfo {
        tile_type: TileType::News,
        display_name: "News",
        icon: "newspaper",
        color: "#e11d48",
        description: "Headlines from your feeds",
        default_size: TileSize::Normal,
        allow_multiple: true,
    },
    TileTypeInfo {
        tile_type: TileType::Weather,
        display_name: "Weather",
        icon: "cloud-sun",
        color: "#0284c7",
        description: "Current conditions and forecast",
        default_size: TileSize::Normal,
        allow_multiple: false,
    },
    TileTypeInfo {
        tile_type: TileType::Todo,
        display_name: "To-Do List",
        icon: "list-check",
        color: "#16a34a",
        description: "Tasks and reminders",
        default_size: TileSize::Normal,
        allow_multiple: true,
    },
    TileTypeInfo {
        tile_type: TileType::Shortcuts,
        display_name: "Shortcuts",
        icon: "link",
        color: "#9333ea",
        description: "Quick links to your sites",
        default_size: TileSize::Small,
        allow_multiple: true,
    },
    TileTypeInfo {
        tile_type: TileType::Livestreams,
        display_name: "Livestreams",
        icon: "video",
        color: "#dc2626",
        description: "Channels you follow, live now",
        default_size: TileSize::Large,
        allow_multiple: true,
    },
    TileTypeInfo {
        tile_type: TileType::AiChat,
        display_name: "AI Chat",
        icon: "message-circle",
        color: "#0d9488",
        description: "Chat assistant",
        default_size: TileSize::Medium,
        allow_multiple: false,
    },
    TileTypeInfo {
        tile_type: TileType::Minigames,
        display_name: "Mini-Games",
        icon: "gamepad",
        color: "#ca8a04",
        description: "Quick games for a break",
        default_size: TileSize::Medium,
        allow_multiple: true,
    },
    TileTypeInfo {
        tile_type: TileType::Travel,
        display_name: "Travel",
        icon: "plane",
        color: "#2563eb",
        description: "Trip planning at a glance",
        default_size: TileSize::Large,
        allow_multiple: false,
    },
];

impl TileType {
    /// Looks up the catalog entry for this type.
    pub fn info(self) -> &'static TileTypeInfo {
        match self {
            TileType::News => &CATALOG[0],
            TileType::Weather => &CATALOG[1],
            TileType::Todo => &CATALOG[2],
            TileType::Shortcuts => &CATALOG[3],
            TileType::Livestreams => &CATALOG[4],
            TileType::AiChat => &CATALOG[5],
            TileType::Minigames => &CATALOG[6],
            TileType::Travel => &CATALOG[7],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_resolves_its_own_entry() {
        for ty in TileType::ALL {
            assert_eq!(ty.info().tile_type, ty, "catalog entry mismatch for {ty}");
        }
    }

    #[test]
    fn minigames_default_size_is_medium() {
        assert_eq!(TileType::Minigames.info().default_size, TileSize::Medium);
    }

    #[test]
    fn weather_is_single_instance() {
        assert!(!TileType::Weather.info().allow_multiple);
    }

    #[test]
    fn display_names_are_nonempty_and_unique() {
        let names: Vec<&str> = TileType::ALL.iter().map(|t| t.info().display_name).collect();
        for name in &names {
            assert!(!name.is_empty());
        }
        let mut deduped = names.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), names.len());
    }

    #[test]
    fn icons_and_colors_are_set() {
        for ty in TileType::ALL {
            let info = ty.info();
            assert!(!info.icon.is_empty());
            assert!(info.color.starts_with('#'), "color should be a hex token");
        }
    }
}
