//! Default configuration values
//!
//! All constants used throughout the config module are defined here.

/// Auto-dismiss delay applied when a toast request does not specify one
pub const DEFAULT_TOAST_DURATION_MS: i64 = 4000;

/// Number of catalog entries the search overlay shows for an empty query
pub const DEFAULT_SEARCH_STARTER_LIMIT: usize = 6;

/// Whether the search overlay also matches the entry category
pub const DEFAULT_SEARCH_MATCH_CATEGORY: bool = true;

/// Hotkeys that toggle the command overlay (Cmd+K on macOS, Ctrl+K elsewhere)
pub const DEFAULT_PALETTE_HOTKEYS: &[&str] = &["ctrl+k", "cmd+k"];

/// Hotkeys that open the shortcuts help overlay
pub const DEFAULT_HELP_HOTKEYS: &[&str] = &["ctrl+/", "cmd+/"];

/// Whether the key-sequence easter egg is armed
pub const DEFAULT_EASTER_EGG: bool = true;

/// Config file location when `SQUAD_CONFIG` is not set
pub const DEFAULT_CONFIG_PATH: &str = "~/.squad/config.json";

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "SQUAD_CONFIG";
