//! Command entry types and the result view model.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

/// Callback run when an entry is activated.
pub type CommandAction = Arc<dyn Fn() + Send + Sync>;

/// One selectable row in the overlay.
#[derive(Clone)]
pub struct CommandEntry {
    pub id: String,
    pub label: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    /// Free-form group name ("page", "action", ...)
    pub category: String,
    action: CommandAction,
}

impl fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandEntry")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("description", &self.description)
            .field("icon", &self.icon)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

impl CommandEntry {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        category: impl Into<String>,
        action: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        CommandEntry {
            id: id.into(),
            label: label.into(),
            description: None,
            icon: None,
            category: category.into(),
            action: Arc::new(action),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn action(&self) -> CommandAction {
        Arc::clone(&self.action)
    }

    pub fn invoke(&self) {
        (self.action)()
    }
}

/// Immutable list of entries, cheap to clone and share.
#[derive(Clone, Debug)]
pub struct CommandCatalog {
    entries: Arc<[CommandEntry]>,
}

impl CommandCatalog {
    pub fn new(entries: Vec<CommandEntry>) -> Self {
        Self {
            entries: entries.into(),
        }
    }

    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&CommandEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Serializable row for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRow {
    /// Position in the filtered list (the index `activate_at` takes)
    pub index: usize,
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub category: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResultGroup {
    pub category: String,
    pub rows: Vec<ResultRow>,
}

/// What the overlay body shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "camelCase")]
pub enum ResultsView {
    /// "No results found for <query>"
    Empty { query: String },
    Flat(Vec<ResultRow>),
    /// Starter list grouped by category, first-seen order
    Grouped(Vec<ResultGroup>),
}

impl ResultsView {
    pub fn row_count(&self) -> usize {
        match self {
            ResultsView::Empty { .. } => 0,
            ResultsView::Flat(rows) => rows.len(),
            ResultsView::Grouped(groups) => groups.iter().map(|g| g.rows.len()).sum(),
        }
    }
}
