//! Keyboard shortcut routing.
//!
//! This module provides:
//! - `Shortcut` / `KeyEvent` parsing and exact-modifier matching
//! - Focus-target suppression so typing never triggers commands
//! - Per-view `BindingTable`s installed through one long-lived `ShortcutDispatcher`
//! - A `?` help toggle and the filterable help overlay
//! - Key sequence detection
//!
//! # Example
//!
//! ```ignore
//! use squad_dispatch::shortcuts::{BindingTable, KeyEvent, ShortcutBinding, ShortcutDispatcher};
//!
//! let dispatcher = ShortcutDispatcher::new();
//! let table = BindingTable::new("dashboard")
//!     .with(ShortcutBinding::parse("new", "n", "New Squad", || {})?);
//! let _registration = dispatcher.register(table);
//! dispatcher.dispatch(&KeyEvent::plain("N"));
//! ```

mod dispatcher;
mod focus;
mod help;
mod registry;
mod sequence;
mod types;

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod dispatcher_tests;

pub use dispatcher::{DispatchOutcome, Registration, ShortcutDispatcher, TableId, WeakDispatcher};
pub use focus::{is_editable_text_surface, FocusTarget, InputKind};
pub use help::{HelpEntry, HelpOverlay};
pub use registry::{BindingTable, ShortcutAction, ShortcutBinding, ShortcutCategory, ShortcutConflict};
pub use sequence::SequenceDetector;
pub use types::{
    canonicalize_key, is_known_key, KeyEvent, Modifiers, Platform, Shortcut, ShortcutParseError,
};
