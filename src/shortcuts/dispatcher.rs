//! The single long-lived key listener.
//!
//! Views don't attach their own listeners. They hand a [`BindingTable`] to
//! [`ShortcutDispatcher::register`] and keep the returned [`Registration`] for as long
//! as they are mounted; dropping it removes the table. Because teardown is tied to a
//! value's lifetime, a view cannot leak its bindings into the next view.
//!
//! Per key event:
//! 1. editable focus target -> [`DispatchOutcome::Suppressed`]
//! 2. bare `?` -> toggle help visibility
//! 3. first matching binding across tables (registration order) -> run its action

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tracing::{debug, warn};

use super::focus::is_editable_text_surface;
use super::registry::{BindingTable, ShortcutBinding};
use super::types::KeyEvent;
use crate::logging;

/// Identifies a registered table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TableId(u64);

/// What the dispatcher did with a key event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Focus was in a text field; nothing ran
    Suppressed,
    /// `?` toggled the help overlay
    HelpToggled { visible: bool },
    /// A binding matched and its action ran
    Handled { binding_id: String },
    /// No binding matched; the event passes through untouched
    Unhandled,
}

impl DispatchOutcome {
    /// Whether the runtime's default handling should be suppressed.
    pub fn default_prevented(&self) -> bool {
        matches!(
            self,
            DispatchOutcome::HelpToggled { .. } | DispatchOutcome::Handled { .. }
        )
    }
}

#[derive(Debug, Default)]
struct DispatcherState {
    tables: Vec<(TableId, BindingTable)>,
    next_table_id: u64,
    help_visible: bool,
}

/// Cloneable handle to the shared dispatcher.
#[derive(Clone, Debug, Default)]
pub struct ShortcutDispatcher {
    inner: Arc<Mutex<DispatcherState>>,
}

impl ShortcutDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a view's bindings. They stay active until the returned guard drops.
    #[must_use = "dropping the Registration unregisters the bindings immediately"]
    pub fn register(&self, table: BindingTable) -> Registration {
        for conflict in table.find_conflicts() {
            warn!(
                table = %table.name,
                shortcut = %conflict.shortcut,
                winner = %conflict.winner_id,
                shadowed = %conflict.loser_id,
                "Ambiguous shortcut binding; first registered wins"
            );
        }

        let mut state = self.inner.lock();
        let id = TableId(state.next_table_id);
        state.next_table_id += 1;
        logging::log(
            "SHORTCUTS",
            &format!("Registered table '{}' ({} bindings)", table.name, table.len()),
        );
        state.tables.push((id, table));

        Registration {
            id,
            dispatcher: Arc::downgrade(&self.inner),
        }
    }

    /// Route one key event.
    pub fn dispatch(&self, event: &KeyEvent) -> DispatchOutcome {
        if is_editable_text_surface(&event.target) {
            logging::log_key_event(&event.key, &event.modifiers.to_string(), "suppressed");
            return DispatchOutcome::Suppressed;
        }

        if event.is_help_toggle() {
            let visible = {
                let mut state = self.inner.lock();
                state.help_visible = !state.help_visible;
                state.help_visible
            };
            logging::log_key_event(&event.key, "none", "help_toggle");
            return DispatchOutcome::HelpToggled { visible };
        }

        // Clone the match out so the action runs without the lock held
        let matched = {
            let state = self.inner.lock();
            state
                .tables
                .iter()
                .find_map(|(_, table)| table.find_match(event))
                .map(|b| (b.id.clone(), b.action()))
        };

        match matched {
            Some((binding_id, action)) => {
                debug!(binding_id = %binding_id, key = %event.key, "Shortcut matched");
                logging::log_key_event(&event.key, &event.modifiers.to_string(), "matched");
                action();
                DispatchOutcome::Handled { binding_id }
            }
            None => DispatchOutcome::Unhandled,
        }
    }

    pub fn help_visible(&self) -> bool {
        self.inner.lock().help_visible
    }

    pub fn set_help_visible(&self, visible: bool) {
        self.inner.lock().help_visible = visible;
    }

    pub fn table_count(&self) -> usize {
        self.inner.lock().tables.len()
    }

    /// Every binding currently registered, tables in registration order.
    pub fn active_bindings(&self) -> Vec<ShortcutBinding> {
        self.inner
            .lock()
            .tables
            .iter()
            .flat_map(|(_, table)| table.bindings().iter().cloned())
            .collect()
    }

    /// Handle for binding actions that need to reach the dispatcher without
    /// keeping it alive (an `Arc` captured in a binding would be a cycle).
    pub fn downgrade(&self) -> WeakDispatcher {
        WeakDispatcher {
            inner: Arc::downgrade(&self.inner),
        }
    }

    fn unregister(inner: &Mutex<DispatcherState>, id: TableId) {
        // Table (and its captured closures) drops after the lock is released
        let removed = {
            let mut state = inner.lock();
            state
                .tables
                .iter()
                .position(|(tid, _)| *tid == id)
                .map(|pos| state.tables.remove(pos).1)
        };
        if let Some(table) = removed {
            logging::log("SHORTCUTS", &format!("Unregistered table '{}'", table.name));
        }
    }
}

/// Non-owning dispatcher handle.
#[derive(Clone, Debug)]
pub struct WeakDispatcher {
    inner: Weak<Mutex<DispatcherState>>,
}

impl WeakDispatcher {
    pub fn upgrade(&self) -> Option<ShortcutDispatcher> {
        self.inner.upgrade().map(|inner| ShortcutDispatcher { inner })
    }
}

/// Keeps a view's binding table installed. Drop to unregister.
#[derive(Debug)]
pub struct Registration {
    id: TableId,
    dispatcher: Weak<Mutex<DispatcherState>>,
}

impl Registration {
    pub fn id(&self) -> TableId {
        self.id
    }

    pub fn help_visible(&self) -> bool {
        self.dispatcher
            .upgrade()
            .is_some_and(|inner| inner.lock().help_visible)
    }

    pub fn set_help_visible(&self, visible: bool) {
        if let Some(inner) = self.dispatcher.upgrade() {
            inner.lock().help_visible = visible;
        }
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        if let Some(inner) = self.dispatcher.upgrade() {
            ShortcutDispatcher::unregister(&inner, self.id);
        }
    }
}
