//! Shortcuts help overlay model.
//!
//! A flat list of (key label, description) rows built from the active bindings,
//! filterable by a case-insensitive query on either column.

use serde::Serialize;

use super::registry::ShortcutBinding;
use super::types::Platform;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpEntry {
    pub key_label: String,
    pub description: String,
}

impl HelpEntry {
    pub fn new(key_label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key_label: key_label.into(),
            description: description.into(),
        }
    }

    fn matches(&self, query_lower: &str) -> bool {
        self.description.to_lowercase().contains(query_lower)
            || self.key_label.to_lowercase().contains(query_lower)
    }
}

#[derive(Clone, Debug, Default)]
pub struct HelpOverlay {
    entries: Vec<HelpEntry>,
    query: String,
}

impl HelpOverlay {
    /// Build the overlay for the current platform's key labels.
    pub fn from_bindings(bindings: &[ShortcutBinding]) -> Self {
        Self::from_bindings_for_platform(bindings, Platform::current())
    }

    pub fn from_bindings_for_platform(bindings: &[ShortcutBinding], platform: Platform) -> Self {
        let mut entries = vec![HelpEntry::new("?", "Show/hide this help")];
        entries.extend(bindings.iter().map(|b| {
            HelpEntry::new(b.shortcut.display_for_platform(platform), b.description.clone())
        }));
        entries.push(HelpEntry::new("Esc", "Close modal"));
        Self {
            entries,
            query: String::new(),
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn entries(&self) -> &[HelpEntry] {
        &self.entries
    }

    /// Rows matching the current query; all rows when the query is empty.
    pub fn filtered(&self) -> Vec<&HelpEntry> {
        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return self.entries.iter().collect();
        }
        self.entries.iter().filter(|e| e.matches(&query)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortcuts::Shortcut;

    fn bindings() -> Vec<ShortcutBinding> {
        vec![
            ShortcutBinding::new("new-squad", Shortcut::plain("n"), "New Squad", || {}),
            ShortcutBinding::new("export", Shortcut::plain("e"), "Export", || {}),
        ]
    }

    #[test]
    fn test_entries_wrap_bindings_with_help_and_escape() {
        let help = HelpOverlay::from_bindings_for_platform(&bindings(), Platform::Linux);
        let labels: Vec<&str> = help.entries().iter().map(|e| e.key_label.as_str()).collect();
        assert_eq!(labels, vec!["?", "N", "E", "Esc"]);
    }

    #[test]
    fn test_filter_by_description_or_key() {
        let mut help = HelpOverlay::from_bindings_for_platform(&bindings(), Platform::Linux);
        help.set_query("squad");
        let rows = help.filtered();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].description, "New Squad");

        help.set_query("esc");
        assert_eq!(help.filtered()[0].description, "Close modal");

        help.set_query("");
        assert_eq!(help.filtered().len(), 4);
    }
}
