//! Legacy-format normalization for persisted tile records.
//!
//! Three persisted shapes have existed: the current symbolic `size`, an
//! older discrete `columns` count, and an oldest pixel `width`. Each raw
//! record is classified into exactly one shape and converted by a pure
//! function, so the mapping rules are testable without a manager or a
//! store.
//!
//! Loading also repairs records the invariants forbid: duplicate ids,
//! more than one fullscreen flag, unrecognized size strings, and types
//! outside the closed enum (those are dropped). Any normalization or
//! repair marks the collection as migrated so the caller re-persists the
//! clean form once.

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;

use crate::{Tile, TileSize, TileType};

/// A persisted record in any historic shape, deserialized loosely.
#[derive(Debug, Clone, Deserialize)]
struct RawRecord {
    id: Option<String>,
    #[serde(rename = "type")]
    tile_type: Option<String>,
    title: Option<String>,
    size: Option<String>,
    columns: Option<i64>,
    width: Option<f64>,
    order: Option<i64>,
    #[serde(rename = "isFullscreen")]
    is_fullscreen: Option<bool>,
    config: Option<Value>,
}

/// Which historic shape a raw record is in.
#[derive(Debug, Clone, Copy, PartialEq)]
enum RecordShape {
    /// Current: a recognized symbolic size, no legacy fields to honor.
    Current(TileSize),
    /// Legacy: discrete column count.
    Columns(i64),
    /// Legacy: pixel width.
    Width(f64),
    /// Nothing usable; defaults apply.
    Unknown,
}

/// Classifies a raw record. First matching case wins:
/// a recognized `size` with no `columns` is current; then `columns`;
/// then `width`; anything else (including an unrecognized size string)
/// is unknown.
fn classify(raw: &RawRecord) -> RecordShape {
    if raw.columns.is_none() {
        if let Some(size) = raw.size.as_deref() {
            if let Ok(parsed) = size.parse::<TileSize>() {
                return RecordShape::Current(parsed);
            }
        }
    }
    if let Some(columns) = raw.columns {
        return RecordShape::Columns(columns);
    }
    if let Some(width) = raw.width {
        return RecordShape::Width(width);
    }
    RecordShape::Unknown
}

/// Resolves a record's size, reporting whether normalization changed
/// anything a re-persist needs to capture.
fn normalize_size(raw: &RawRecord) -> (TileSize, bool) {
    match classify(raw) {
        RecordShape::Current(size) => (size, false),
        RecordShape::Columns(columns) => {
            let size = match columns {
                2 => TileSize::Small,
                3 => TileSize::Normal,
                4 => TileSize::Medium,
                5 => TileSize::Large,
                _ => TileSize::Normal,
            };
            (size, true)
        }
        RecordShape::Width(width) => {
            let size = if width <= 250.0 {
                TileSize::Small
            } else if width <= 350.0 {
                TileSize::Normal
            } else if width <= 500.0 {
                TileSize::Medium
            } else {
                TileSize::Large
            };
            (size, true)
        }
        RecordShape::Unknown => (TileSize::Normal, true),
    }
}

/// Result of loading a persisted collection.
pub(super) struct LoadOutcome {
    /// The normalized tiles.
    pub tiles: Vec<Tile>,
    /// Whether anything was normalized or repaired; when true the caller
    /// must re-persist so migration does not run again.
    pub migrated: bool,
}

/// Parses and normalizes a persisted collection blob.
///
/// Returns `Err` only when the blob is not a JSON array at all; that case
/// is recovered by the caller (seed defaults). Individual bad records are
/// repaired or dropped, never fatal.
pub(super) fn load_collection(blob: &str) -> Result<LoadOutcome, serde_json::Error> {
    let raw_records: Vec<RawRecord> = serde_json::from_str(blob)?;

    let mut tiles = Vec::with_capacity(raw_records.len());
    let mut migrated = false;
    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut seen_fullscreen = false;

    for raw in raw_records {
        let Some(type_name) = raw.tile_type.as_deref() else {
            tracing::warn!("dropping persisted tile record with no type");
            migrated = true;
            continue;
        };
        let Ok(tile_type) = type_name.parse::<TileType>() else {
            tracing::warn!("dropping persisted tile record of unknown type: {type_name}");
            migrated = true;
            continue;
        };

        let (size, size_migrated) = normalize_size(&raw);
        migrated |= size_migrated;

        let id = match raw.id {
            Some(id) => id,
            None => {
                migrated = true;
                Tile::generate_id(tile_type)
            }
        };
        if !seen_ids.insert(id.clone()) {
            tracing::warn!("dropping persisted tile record with duplicate id: {id}");
            migrated = true;
            continue;
        }

        let mut is_fullscreen = raw.is_fullscreen.unwrap_or(false);
        if is_fullscreen && seen_fullscreen {
            // Fullscreen is exclusive; first record wins.
            is_fullscreen = false;
            migrated = true;
        }
        seen_fullscreen |= is_fullscreen;

        let title = match raw.title {
            Some(title) => title,
            None => {
                migrated = true;
                tile_type.info().display_name.to_string()
            }
        };

        tiles.push(Tile {
            id,
            tile_type,
            title,
            size,
            order: raw.order.unwrap_or(0),
            is_fullscreen,
            config: raw.config,
        });
    }

    Ok(LoadOutcome { tiles, migrated })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(json: &str) -> RawRecord {
        serde_json::from_str(json).expect("raw record should deserialize")
    }

    // -----------------------------------------------------------------------
    // classify
    // -----------------------------------------------------------------------

    #[test]
    fn classify_current_shape() {
        let r = raw(r#"{"id":"t1","type":"news","size":"medium"}"#);
        assert_eq!(classify(&r), RecordShape::Current(TileSize::Medium));
    }

    #[test]
    fn classify_columns_wins_over_size() {
        // A record carrying both fields is a legacy record; `columns` is
        // authoritative because `size` did not exist in that schema.
        let r = raw(r#"{"id":"t1","type":"news","size":"medium","columns":2}"#);
        assert_eq!(classify(&r), RecordShape::Columns(2));
    }

    #[test]
    fn classify_unrecognized_size_is_unknown() {
        let r = raw(r#"{"id":"t1","type":"news","size":"gigantic"}"#);
        assert_eq!(classify(&r), RecordShape::Unknown);
    }

    #[test]
    fn classify_width_shape() {
        let r = raw(r#"{"id":"t1","type":"news","width":480}"#);
        assert_eq!(classify(&r), RecordShape::Width(480.0));
    }

    #[test]
    fn classify_bare_record_is_unknown() {
        let r = raw(r#"{"id":"t1","type":"news"}"#);
        assert_eq!(classify(&r), RecordShape::Unknown);
    }

    // -----------------------------------------------------------------------
    // normalize_size
    // -----------------------------------------------------------------------

    #[test]
    fn columns_mapping_table() {
        let cases = [
            (2, TileSize::Small),
            (3, TileSize::Normal),
            (4, TileSize::Medium),
            (5, TileSize::Large),
            (1, TileSize::Normal),
            (9, TileSize::Normal),
        ];
        for (columns, expected) in cases {
            let r = raw(&format!(r#"{{"type":"news","columns":{columns}}}"#));
            let (size, migrated) = normalize_size(&r);
            assert_eq!(size, expected, "columns={columns}");
            assert!(migrated);
        }
    }

    #[test]
    fn width_mapping_thresholds() {
        let cases = [
            (200.0, TileSize::Small),
            (250.0, TileSize::Small),
            (251.0, TileSize::Normal),
            (350.0, TileSize::Normal),
            (500.0, TileSize::Medium),
            (501.0, TileSize::Large),
        ];
        for (width, expected) in cases {
            let r = raw(&format!(r#"{{"type":"news","width":{width}}}"#));
            let (size, migrated) = normalize_size(&r);
            assert_eq!(size, expected, "width={width}");
            assert!(migrated);
        }
    }

    #[test]
    fn current_shape_is_not_migrated() {
        let r = raw(r#"{"type":"news","size":"large"}"#);
        let (size, migrated) = normalize_size(&r);
        assert_eq!(size, TileSize::Large);
        assert!(!migrated);
    }

    // -----------------------------------------------------------------------
    // load_collection
    // -----------------------------------------------------------------------

    #[test]
    fn loads_current_collection_unchanged() {
        let blob = r#"[
            {"id":"t1","type":"news","title":"News","size":"normal","order":1,"isFullscreen":false},
            {"id":"t2","type":"weather","title":"Weather","size":"small","order":2,"isFullscreen":true}
        ]"#;
        let outcome = load_collection(blob).expect("should parse");
        assert!(!outcome.migrated);
        assert_eq!(outcome.tiles.len(), 2);
        assert_eq!(outcome.tiles[0].size, TileSize::Normal);
        assert!(outcome.tiles[1].is_fullscreen);
    }

    #[test]
    fn migrates_columns_record() {
        let blob =
            r#"[{"id":"t1","type":"news","title":"News","columns":3,"order":1,"isFullscreen":false}]"#;
        let outcome = load_collection(blob).expect("should parse");
        assert!(outcome.migrated);
        assert_eq!(outcome.tiles[0].size, TileSize::Normal);
        // The normalized form must not carry the legacy field forward.
        let reserialized = serde_json::to_value(&outcome.tiles).expect("should serialize");
        assert!(reserialized[0].get("columns").is_none());
    }

    #[test]
    fn migration_is_idempotent() {
        let blob = r#"[
            {"id":"t1","type":"news","title":"News","columns":4,"order":1,"isFullscreen":false},
            {"id":"t2","type":"travel","title":"Trips","width":600,"order":2,"isFullscreen":false}
        ]"#;
        let first = load_collection(blob).expect("should parse");
        assert!(first.migrated);

        let normalized = serde_json::to_string(&first.tiles).expect("should serialize");
        let second = load_collection(&normalized).expect("should re-parse");
        assert!(!second.migrated, "normalized form must load clean");
        assert_eq!(second.tiles, first.tiles);
    }

    #[test]
    fn drops_unknown_type_record() {
        let blob = r#"[
            {"id":"t1","type":"news","title":"News","size":"normal","order":1,"isFullscreen":false},
            {"id":"t2","type":"calendar","title":"Calendar","size":"normal","order":2,"isFullscreen":false}
        ]"#;
        let outcome = load_collection(blob).expect("should parse");
        assert!(outcome.migrated);
        assert_eq!(outcome.tiles.len(), 1);
        assert_eq!(outcome.tiles[0].id, "t1");
    }

    #[test]
    fn repairs_duplicate_ids() {
        let blob = r#"[
            {"id":"t1","type":"news","title":"A","size":"normal","order":1,"isFullscreen":false},
            {"id":"t1","type":"todo","title":"B","size":"normal","order":2,"isFullscreen":false}
        ]"#;
        let outcome = load_collection(blob).expect("should parse");
        assert!(outcome.migrated);
        assert_eq!(outcome.tiles.len(), 1);
        assert_eq!(outcome.tiles[0].title, "A");
    }

    #[test]
    fn repairs_double_fullscreen() {
        let blob = r#"[
            {"id":"t1","type":"news","title":"A","size":"normal","order":1,"isFullscreen":true},
            {"id":"t2","type":"todo","title":"B","size":"normal","order":2,"isFullscreen":true}
        ]"#;
        let outcome = load_collection(blob).expect("should parse");
        assert!(outcome.migrated);
        assert!(outcome.tiles[0].is_fullscreen);
        assert!(!outcome.tiles[1].is_fullscreen);
    }

    #[test]
    fn unrecognized_size_normalizes_to_normal() {
        let blob =
            r#"[{"id":"t1","type":"news","title":"News","size":"gigantic","order":1,"isFullscreen":false}]"#;
        let outcome = load_collection(blob).expect("should parse");
        assert!(outcome.migrated);
        assert_eq!(outcome.tiles[0].size, TileSize::Normal);
    }

    #[test]
    fn preserves_opaque_config() {
        let blob = r#"[{"id":"t1","type":"shortcuts","title":"Links","size":"small","order":1,
            "isFullscreen":false,"config":{"links":[{"url":"https://example.com"}]}}]"#;
        let outcome = load_collection(blob).expect("should parse");
        assert!(!outcome.migrated);
        let config = outcome.tiles[0].config.as_ref().expect("config kept");
        assert_eq!(config["links"][0]["url"], "https://example.com");
    }

    #[test]
    fn non_array_blob_is_an_error() {
        assert!(load_collection("{}").is_err());
        assert!(load_collection("not json").is_err());
    }
}
