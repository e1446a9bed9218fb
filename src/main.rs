//! Homeboard - CLI entry point
//!
//! This binary drives the dashboard tile manager against the file-backed
//! store: listing, adding, duplicating, resizing, reordering, and removing
//! tiles, plus configuration management.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use homeboard::config::loader::ConfigLoader;
use homeboard::config::schema::{Config, LogLevel};
use homeboard::manager::{TileManager, TileUpdate};
use homeboard::storage::{FileStore, TileStore};
use homeboard::TILES_KEY;
use tracing_subscriber::{fmt, EnvFilter};

/// Personal dashboard tile manager
#[derive(Parser)]
#[command(name = "hbd")]
#[command(version, about = "Personal dashboard tile manager")]
struct Cli {
    /// Data directory holding the tile store (overrides configuration)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the hbd CLI
#[derive(Subcommand)]
enum Commands {
    /// List tiles in display order
    List,

    /// Show tile types that can currently be added
    Types,

    /// Add a new tile
    Add {
        /// Tile type (news, weather, todo, shortcuts, livestreams,
        /// ai-chat, minigames, travel)
        tile_type: String,
        /// Custom title (defaults to the type's display name)
        #[arg(long)]
        title: Option<String>,
        /// Widget config as a JSON object
        #[arg(long)]
        config: Option<String>,
    },

    /// Duplicate an existing tile
    Duplicate {
        /// Id of the tile to clone
        tile_id: String,
        /// Custom title (defaults to "<original title> (Copy)")
        #[arg(long)]
        title: Option<String>,
    },

    /// Remove a tile (no-op if the id does not exist)
    Remove {
        /// Id of the tile to remove
        tile_id: String,
    },

    /// Rename a tile
    Title {
        /// Id of the tile to rename
        tile_id: String,
        /// New title
        title: String,
    },

    /// Cycle a tile to its next size (wraps after extra-large)
    Expand {
        /// Id of the tile to grow
        tile_id: String,
    },

    /// Reset a tile to normal size and leave fullscreen
    Reset {
        /// Id of the tile to reset
        tile_id: String,
    },

    /// Toggle fullscreen for a tile
    Fullscreen {
        /// Id of the tile to toggle
        tile_id: String,
    },

    /// Move a tile immediately before another tile
    Reorder {
        /// Id of the tile to move
        source_id: String,
        /// Id of the tile to insert before
        target_id: String,
    },

    /// Replace all tiles with the default set
    ResetDefaults {
        /// Confirm discarding all customization
        #[arg(long)]
        yes: bool,
    },

    /// Print the persisted tile collection as JSON
    Dump,

    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Actions for the `config` subcommand.
#[derive(Subcommand)]
enum ConfigAction {
    /// Create default configuration file
    Init {
        /// Overwrite existing configuration (creates backup)
        #[arg(long)]
        force: bool,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration file
    Validate,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = ConfigLoader::load_default().unwrap_or_else(|e| {
        eprintln!("Warning: ignoring invalid configuration: {e}");
        Config::default()
    });
    init_logging(config.log.level);

    let data_dir = cli.data_dir.unwrap_or_else(|| config.data_dir());

    match cli.command {
        Commands::List => run_list_command(&open_manager(data_dir)),
        Commands::Types => run_types_command(&open_manager(data_dir)),
        Commands::Add {
            tile_type,
            title,
            config,
        } => run_add_command(&mut open_manager(data_dir), &tile_type, title, config),
        Commands::Duplicate { tile_id, title } => {
            run_duplicate_command(&mut open_manager(data_dir), &tile_id, title)
        }
        Commands::Remove { tile_id } => run_remove_command(&mut open_manager(data_dir), &tile_id),
        Commands::Title { tile_id, title } => {
            run_title_command(&mut open_manager(data_dir), &tile_id, title)
        }
        Commands::Expand { tile_id } => run_expand_command(&mut open_manager(data_dir), &tile_id),
        Commands::Reset { tile_id } => run_reset_command(&mut open_manager(data_dir), &tile_id),
        Commands::Fullscreen { tile_id } => {
            run_fullscreen_command(&mut open_manager(data_dir), &tile_id)
        }
        Commands::Reorder {
            source_id,
            target_id,
        } => run_reorder_command(&mut open_manager(data_dir), &source_id, &target_id),
        Commands::ResetDefaults { yes } => {
            run_reset_defaults_command(&mut open_manager(data_dir), yes)
        }
        Commands::Dump => run_dump_command(FileStore::new(data_dir)),
        Commands::Config { action } => run_config_command(action),
    }
}

/// Initialize the tracing subscriber.
///
/// The `HOMEBOARD_LOG` environment variable takes precedence; when unset
/// or invalid, the configured level applies. Output goes to stderr so it
/// never mixes with command output.
fn init_logging(level: LogLevel) {
    let filter = EnvFilter::try_from_env("HOMEBOARD_LOG")
        .unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Builds a manager over the file store in the given data directory.
///
/// Loading (including legacy-format migration and seeding) happens here.
fn open_manager(data_dir: PathBuf) -> TileManager {
    TileManager::new(Box::new(FileStore::new(data_dir)))
}

/// Prints the tile collection in display order.
fn run_list_command(manager: &TileManager) -> ExitCode {
    for tile in manager.sorted_tiles() {
        let marker = if tile.is_fullscreen { " [fullscreen]" } else { "" };
        println!(
            "{:>3}  {:<48}  {:<12} {:<12} {}{}",
            tile.order,
            tile.id,
            tile.tile_type.to_string(),
            manager.tile_class(&tile.id),
            tile.title,
            marker
        );
    }
    ExitCode::SUCCESS
}

/// Prints the types a new `add` would currently accept.
fn run_types_command(manager: &TileManager) -> ExitCode {
    for info in manager.available_tile_types() {
        println!(
            "{:<12} {:<12} {}",
            info.tile_type.to_string(),
            info.display_name,
            info.description
        );
    }
    ExitCode::SUCCESS
}

/// Adds a tile, validating the type name and optional JSON config.
fn run_add_command(
    manager: &mut TileManager,
    type_name: &str,
    title: Option<String>,
    config_json: Option<String>,
) -> ExitCode {
    let config = match config_json {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                eprintln!("Error: --config is not valid JSON: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => None,
    };

    match manager.add_tile_named(type_name, title, config) {
        Ok(tile) => {
            println!("Added {} ({})", tile.title, tile.id);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Duplicates a tile.
fn run_duplicate_command(
    manager: &mut TileManager,
    tile_id: &str,
    title: Option<String>,
) -> ExitCode {
    match manager.duplicate_tile(tile_id, title) {
        Ok(tile) => {
            println!("Added {} ({})", tile.title, tile.id);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Removes a tile. Removing an unknown id is a harmless no-op.
fn run_remove_command(manager: &mut TileManager, tile_id: &str) -> ExitCode {
    match manager.remove_tile(tile_id) {
        Some(tile) => println!("Removed {} ({})", tile.title, tile.id),
        None => println!("No tile with id {tile_id}, nothing to do"),
    }
    ExitCode::SUCCESS
}

/// Renames a tile.
fn run_title_command(manager: &mut TileManager, tile_id: &str, title: String) -> ExitCode {
    let update = TileUpdate {
        title: Some(title),
        ..Default::default()
    };
    match manager.update_tile(tile_id, update) {
        Some(tile) => {
            println!("Renamed {} to {}", tile.id, tile.title);
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("Error: tile not found: {tile_id}");
            ExitCode::FAILURE
        }
    }
}

/// Cycles a tile's size forward.
fn run_expand_command(manager: &mut TileManager, tile_id: &str) -> ExitCode {
    match manager.expand_tile(tile_id) {
        Some(tile) => {
            println!("{} is now {}", tile.id, tile.size);
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("Error: tile not found: {tile_id}");
            ExitCode::FAILURE
        }
    }
}

/// Resets a tile to normal size, clearing fullscreen.
fn run_reset_command(manager: &mut TileManager, tile_id: &str) -> ExitCode {
    match manager.reset_tile(tile_id) {
        Some(tile) => {
            println!("{} is now {}", tile.id, tile.size);
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("Error: tile not found: {tile_id}");
            ExitCode::FAILURE
        }
    }
}

/// Toggles fullscreen for a tile.
fn run_fullscreen_command(manager: &mut TileManager, tile_id: &str) -> ExitCode {
    match manager.toggle_fullscreen(tile_id) {
        Some(tile) => {
            if tile.is_fullscreen {
                println!("{} entered fullscreen", tile.id);
            } else {
                println!("{} left fullscreen", tile.id);
            }
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("Error: tile not found: {tile_id}");
            ExitCode::FAILURE
        }
    }
}

/// Moves a tile immediately before another.
fn run_reorder_command(manager: &mut TileManager, source_id: &str, target_id: &str) -> ExitCode {
    if manager.reorder_tiles(source_id, target_id) {
        println!("Moved {source_id} before {target_id}");
        ExitCode::SUCCESS
    } else {
        eprintln!("Error: cannot reorder {source_id} before {target_id}");
        ExitCode::FAILURE
    }
}

/// Replaces the whole collection with the default seed set.
fn run_reset_defaults_command(manager: &mut TileManager, yes: bool) -> ExitCode {
    if !yes {
        eprintln!("Error: this discards all tiles and customization; re-run with --yes");
        return ExitCode::FAILURE;
    }
    manager.reset_to_defaults();
    println!("Restored the default tile set");
    ExitCode::SUCCESS
}

/// Prints the persisted collection blob, migrating legacy records first.
fn run_dump_command(store: FileStore) -> ExitCode {
    // Constructing the manager normalizes any legacy records and seeds an
    // empty store, so the dump always shows the current schema.
    let _manager = TileManager::new(Box::new(store.clone()));

    match store.load(TILES_KEY) {
        Ok(Some(blob)) => {
            println!("{blob}");
            ExitCode::SUCCESS
        }
        Ok(None) => {
            println!("[]");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Handles the `config` subcommand actions.
fn run_config_command(action: ConfigAction) -> ExitCode {
    use homeboard::config::{default, xdg};

    let result = match action {
        ConfigAction::Init { force } => match default::create_default_config(force) {
            Ok(path) => {
                println!("Created configuration at {}", path.display());
                Ok(())
            }
            Err(e) => Err(e),
        },
        ConfigAction::Path => {
            println!("{}", xdg::config_path().display());
            Ok(())
        }
        ConfigAction::Validate => match ConfigLoader::load_default() {
            Ok(config) => {
                println!("Configuration is valid");
                println!("{config:#?}");
                Ok(())
            }
            Err(e) => Err(e),
        },
    };

    if let Err(e) = result {
        eprintln!("Config error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
