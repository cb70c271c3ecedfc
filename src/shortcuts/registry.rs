//! Shortcut bindings and the per-view binding table.
//!
//! Bindings keep registration order; matching is a linear first-match scan, so when
//! two bindings overlap the earlier one wins. Overlaps are reported by
//! [`BindingTable::find_conflicts`] but never rejected.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::types::{KeyEvent, Shortcut, ShortcutParseError};

/// Zero-argument callback run when a binding matches.
pub type ShortcutAction = Arc<dyn Fn() + Send + Sync>;

/// Category for organizing shortcuts in the help overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShortcutCategory {
    Navigation,
    #[default]
    Actions,
    View,
    System,
}

/// A (key, modifiers) -> action mapping with help metadata.
#[derive(Clone)]
pub struct ShortcutBinding {
    pub id: String,
    pub shortcut: Shortcut,
    /// Label shown in the help overlay
    pub description: String,
    pub category: ShortcutCategory,
    action: ShortcutAction,
}

impl fmt::Debug for ShortcutBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortcutBinding")
            .field("id", &self.id)
            .field("shortcut", &self.shortcut.to_canonical_string())
            .field("description", &self.description)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

impl ShortcutBinding {
    pub fn new(
        id: impl Into<String>,
        shortcut: Shortcut,
        description: impl Into<String>,
        action: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            shortcut,
            description: description.into(),
            category: ShortcutCategory::default(),
            action: Arc::new(action),
        }
    }

    /// Build a binding from a shortcut string such as `"ctrl+s"`.
    pub fn parse(
        id: impl Into<String>,
        shortcut: &str,
        description: impl Into<String>,
        action: impl Fn() + Send + Sync + 'static,
    ) -> Result<Self, ShortcutParseError> {
        Ok(Self::new(id, Shortcut::parse(shortcut)?, description, action))
    }

    pub fn with_category(mut self, category: ShortcutCategory) -> Self {
        self.category = category;
        self
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.shortcut.matches(event)
    }

    pub fn action(&self) -> ShortcutAction {
        Arc::clone(&self.action)
    }

    pub fn invoke(&self) {
        (self.action)()
    }
}

/// The full set of bindings owned by one view.
#[derive(Clone, Debug, Default)]
pub struct BindingTable {
    pub name: String,
    bindings: Vec<ShortcutBinding>,
}

impl BindingTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bindings: Vec::new(),
        }
    }

    pub fn with(mut self, binding: ShortcutBinding) -> Self {
        self.push(binding);
        self
    }

    pub fn push(&mut self, binding: ShortcutBinding) {
        self.bindings.push(binding);
    }

    pub fn bindings(&self) -> &[ShortcutBinding] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// First binding (in registration order) matching the event.
    pub fn find_match(&self, event: &KeyEvent) -> Option<&ShortcutBinding> {
        self.bindings.iter().find(|b| b.matches(event))
    }

    pub fn bindings_by_category(&self, category: ShortcutCategory) -> Vec<&ShortcutBinding> {
        self.bindings
            .iter()
            .filter(|b| b.category == category)
            .collect()
    }

    /// Pairs of bindings that share a shortcut. The earlier binding is the winner.
    pub fn find_conflicts(&self) -> Vec<ShortcutConflict> {
        let mut first_by_shortcut: HashMap<String, &ShortcutBinding> = HashMap::new();
        let mut conflicts = Vec::new();

        for binding in &self.bindings {
            let canonical = binding.shortcut.to_canonical_string();
            match first_by_shortcut.get(&canonical) {
                Some(winner) => conflicts.push(ShortcutConflict {
                    winner_id: winner.id.clone(),
                    loser_id: binding.id.clone(),
                    shortcut: canonical,
                }),
                None => {
                    first_by_shortcut.insert(canonical, binding);
                }
            }
        }

        conflicts
    }
}

/// Two bindings with the same effective shortcut. Only `winner_id` can ever fire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortcutConflict {
    pub winner_id: String,
    pub loser_id: String,
    pub shortcut: String,
}
