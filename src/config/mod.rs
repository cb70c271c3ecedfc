//! Configuration module - dashboard settings and user preferences
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - Configuration struct definitions (Config, ToastConfig, etc.)
//! - `loader` - File system loading and parsing

mod defaults;
mod loader;
mod types;

pub use defaults::{
    CONFIG_PATH_ENV, DEFAULT_EASTER_EGG, DEFAULT_HELP_HOTKEYS, DEFAULT_PALETTE_HOTKEYS,
    DEFAULT_SEARCH_MATCH_CATEGORY, DEFAULT_SEARCH_STARTER_LIMIT, DEFAULT_TOAST_DURATION_MS,
};

pub use types::{Config, HotkeyConfig, SearchConfig, ToastConfig};

pub use loader::{config_path, load_config, load_config_from};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
