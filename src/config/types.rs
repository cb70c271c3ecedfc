//! Configuration type definitions

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::defaults::*;
use crate::error::DispatchError;
use crate::shortcuts::Shortcut;

// ============================================
// TOAST CONFIG
// ============================================

/// Configuration for the toast queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToastConfig {
    /// Auto-dismiss delay for toasts that don't set one (default: 4000).
    /// Zero or negative makes such toasts sticky.
    #[serde(default = "default_toast_duration_ms")]
    pub default_duration_ms: i64,
}

fn default_toast_duration_ms() -> i64 {
    DEFAULT_TOAST_DURATION_MS
}

impl Default for ToastConfig {
    fn default() -> Self {
        ToastConfig {
            default_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

// ============================================
// SEARCH CONFIG
// ============================================

/// Configuration for the dashboard search overlay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchConfig {
    /// Entries shown before anything is typed (default: 6)
    #[serde(default = "default_search_starter_limit")]
    pub starter_limit: usize,
    /// Match the query against the entry category too (default: true)
    #[serde(default = "default_search_match_category")]
    pub match_category: bool,
}

fn default_search_starter_limit() -> usize {
    DEFAULT_SEARCH_STARTER_LIMIT
}
fn default_search_match_category() -> bool {
    DEFAULT_SEARCH_MATCH_CATEGORY
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            starter_limit: DEFAULT_SEARCH_STARTER_LIMIT,
            match_category: DEFAULT_SEARCH_MATCH_CATEGORY,
        }
    }
}

// ============================================
// HOTKEY CONFIG
// ============================================

/// Global hotkeys, as shortcut strings like "ctrl+k"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotkeyConfig {
    #[serde(default = "default_palette_hotkeys")]
    pub palette: Vec<String>,
    #[serde(default = "default_help_hotkeys")]
    pub help: Vec<String>,
}

fn default_palette_hotkeys() -> Vec<String> {
    DEFAULT_PALETTE_HOTKEYS.iter().map(|s| s.to_string()).collect()
}
fn default_help_hotkeys() -> Vec<String> {
    DEFAULT_HELP_HOTKEYS.iter().map(|s| s.to_string()).collect()
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        HotkeyConfig {
            palette: default_palette_hotkeys(),
            help: default_help_hotkeys(),
        }
    }
}

// ============================================
// MAIN CONFIG
// ============================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub toast: ToastConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub hotkeys: HotkeyConfig,
    #[serde(default = "default_easter_egg")]
    pub easter_egg: bool,
}

fn default_easter_egg() -> bool {
    DEFAULT_EASTER_EGG
}

impl Default for Config {
    fn default() -> Self {
        Config {
            toast: ToastConfig::default(),
            search: SearchConfig::default(),
            hotkeys: HotkeyConfig::default(),
            easter_egg: DEFAULT_EASTER_EGG,
        }
    }
}

impl Config {
    /// Parsed palette hotkeys. Invalid strings are logged and skipped.
    pub fn palette_shortcuts(&self) -> Vec<Shortcut> {
        parse_hotkeys("palette", &self.hotkeys.palette)
    }

    /// Parsed help hotkeys. Invalid strings are logged and skipped.
    pub fn help_shortcuts(&self) -> Vec<Shortcut> {
        parse_hotkeys("help", &self.hotkeys.help)
    }
}

fn parse_hotkeys(kind: &str, raw: &[String]) -> Vec<Shortcut> {
    raw.iter()
        .filter_map(|s| match Shortcut::parse(s) {
            Ok(shortcut) => Some(shortcut),
            Err(source) => {
                let err = DispatchError::Shortcut {
                    shortcut: s.clone(),
                    source,
                };
                warn!(hotkey_kind = kind, error = %err, "Skipping invalid hotkey");
                None
            }
        })
        .collect()
}
