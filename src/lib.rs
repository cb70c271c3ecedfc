//! Squad Dispatch - toast queue, keyboard shortcut router and command overlay
//! for the squad dashboard.
//!
//! The three UI-state components are headless: hosts feed them key events and
//! pointer actions and render from snapshots.

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod timers;

// Core components
pub mod palette;
pub mod shortcuts;
pub mod toast;

// Dashboard wiring
pub mod dashboard;
pub mod navigation;
pub mod notifications;

// JSONL stdin protocol for the binary
pub mod stdin_commands;
