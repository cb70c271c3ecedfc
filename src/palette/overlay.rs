//! Command overlay state machine.
//!
//! `Closed <-> Open`. While open it owns the query, the filtered index list and the
//! selection. Closing for any reason (Escape, backdrop, hotkey, activation) clears
//! the query, query edits are ignored while closed, and opening starts from an empty
//! query, so the overlay never reopens showing stale text.
//!
//! Activation closes the overlay and hands back an [`Activation`]; the caller runs
//! it after releasing whatever lock guards the overlay.

use std::fmt;

use serde::Serialize;

use super::filter::{filter_entries, FilterOptions};
use super::types::{
    CommandAction, CommandCatalog, CommandEntry, ResultGroup, ResultRow, ResultsView,
};
use crate::logging;
use crate::shortcuts::KeyEvent;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayState {
    #[default]
    Closed,
    Open,
}

/// A picked entry whose action has not run yet.
#[must_use = "the entry's action only runs on invoke()"]
pub struct Activation {
    id: String,
    action: CommandAction,
}

impl Activation {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Run the action once and return the entry id.
    pub fn invoke(self) -> String {
        (self.action)();
        self.id
    }
}

impl fmt::Debug for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Activation").field("id", &self.id).finish()
    }
}

/// What [`CommandOverlay::handle_key`] did with a key.
#[derive(Debug)]
pub enum OverlayKey {
    /// Closed overlay or a key it has no use for
    Ignored,
    Consumed,
    /// Enter picked an entry; the overlay is already closed
    Activated(Activation),
}

impl OverlayKey {
    pub fn consumed(&self) -> bool {
        !matches!(self, OverlayKey::Ignored)
    }
}

#[derive(Debug)]
pub struct CommandOverlay {
    catalog: CommandCatalog,
    options: FilterOptions,
    state: OverlayState,
    query: String,
    /// Indices into the catalog
    filtered: Vec<usize>,
    selected_index: usize,
}

impl CommandOverlay {
    pub fn new(catalog: CommandCatalog, options: FilterOptions) -> Self {
        let mut overlay = Self {
            catalog,
            options,
            state: OverlayState::Closed,
            query: String::new(),
            filtered: Vec::new(),
            selected_index: 0,
        };
        overlay.refilter();
        overlay
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == OverlayState::Open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn catalog(&self) -> &CommandCatalog {
        &self.catalog
    }

    pub fn open(&mut self) {
        if self.is_open() {
            return;
        }
        self.state = OverlayState::Open;
        self.query.clear();
        self.refilter();
        logging::log_ui_event("overlay", "open", None);
    }

    pub fn close(&mut self) {
        if !self.is_open() {
            return;
        }
        self.state = OverlayState::Closed;
        self.query.clear();
        self.refilter();
        logging::log_ui_event("overlay", "close", None);
    }

    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Click outside the content panel.
    pub fn backdrop_click(&mut self) {
        logging::log("OVERLAY", "Overlay dismissed (click outside)");
        self.close();
    }

    /// Replace the query. Selection goes back to the first row. No-op while closed.
    pub fn set_query(&mut self, query: impl Into<String>) {
        if !self.is_open() {
            return;
        }
        self.query = query.into();
        self.refilter();
    }

    pub fn insert_char(&mut self, c: char) {
        if !self.is_open() {
            return;
        }
        self.query.push(c);
        self.refilter();
    }

    pub fn backspace(&mut self) {
        if self.is_open() && self.query.pop().is_some() {
            self.refilter();
        }
    }

    /// Move selection down; stays on the last row.
    pub fn move_down(&mut self) {
        if self.selected_index < self.filtered.len().saturating_sub(1) {
            self.selected_index += 1;
            logging::log_debug(
                "OVERLAY",
                &format!("Down: selected_index={}", self.selected_index),
            );
        }
    }

    /// Move selection up; stays on the first row.
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            logging::log_debug(
                "OVERLAY",
                &format!("Up: selected_index={}", self.selected_index),
            );
        }
    }

    pub fn selected_entry(&self) -> Option<&CommandEntry> {
        self.filtered
            .get(self.selected_index)
            .and_then(|&idx| self.catalog.entries().get(idx))
    }

    /// Enter: close and clear, handing back the selected entry's action.
    ///
    /// `None` when closed or nothing is selected.
    pub fn activate_selected(&mut self) -> Option<Activation> {
        if !self.is_open() {
            return None;
        }
        let entry = self.selected_entry()?;
        let activation = Activation {
            id: entry.id.clone(),
            action: entry.action(),
        };

        logging::log("OVERLAY", &format!("Command activated: {}", activation.id));
        self.close();
        Some(activation)
    }

    /// Click on the row at `index` in the filtered list.
    pub fn activate_at(&mut self, index: usize) -> Option<Activation> {
        if !self.is_open() || index >= self.filtered.len() {
            return None;
        }
        self.selected_index = index;
        self.activate_selected()
    }

    /// Keyboard handling while open.
    pub fn handle_key(&mut self, event: &KeyEvent) -> OverlayKey {
        if !self.is_open() {
            return OverlayKey::Ignored;
        }
        match event.canonical_key().as_str() {
            "escape" => self.close(),
            "down" => self.move_down(),
            "up" => self.move_up(),
            "enter" => {
                return match self.activate_selected() {
                    Some(activation) => OverlayKey::Activated(activation),
                    None => OverlayKey::Consumed,
                }
            }
            "backspace" => self.backspace(),
            _ => match event.printable_char() {
                Some(c) => self.insert_char(c),
                None => return OverlayKey::Ignored,
            },
        }
        OverlayKey::Consumed
    }

    /// Entries currently visible, in order.
    pub fn results(&self) -> Vec<&CommandEntry> {
        self.filtered
            .iter()
            .filter_map(|&idx| self.catalog.entries().get(idx))
            .collect()
    }

    pub fn view(&self) -> ResultsView {
        if self.filtered.is_empty() {
            return ResultsView::Empty {
                query: self.query.clone(),
            };
        }

        let rows: Vec<ResultRow> = self
            .results()
            .into_iter()
            .enumerate()
            .map(|(index, entry)| ResultRow {
                index,
                id: entry.id.clone(),
                label: entry.label.clone(),
                description: entry.description.clone(),
                icon: entry.icon.clone(),
                category: entry.category.clone(),
                selected: index == self.selected_index,
            })
            .collect();

        if self.query.is_empty() && self.options.group_starter {
            ResultsView::Grouped(group_by_category(rows))
        } else {
            ResultsView::Flat(rows)
        }
    }

    fn refilter(&mut self) {
        self.filtered = filter_entries(self.catalog.entries(), &self.query, &self.options);
        self.selected_index = 0;
        logging::log_debug(
            "OVERLAY",
            &format!(
                "Filter changed: {} results for {:?}",
                self.filtered.len(),
                self.query
            ),
        );
    }
}

/// Groups in first-seen category order; rows keep their filtered-list index.
fn group_by_category(rows: Vec<ResultRow>) -> Vec<ResultGroup> {
    let mut groups: Vec<ResultGroup> = Vec::new();
    for row in rows {
        match groups.iter_mut().find(|g| g.category == row.category) {
            Some(group) => group.rows.push(row),
            None => groups.push(ResultGroup {
                category: row.category.clone(),
                rows: vec![row],
            }),
        }
    }
    groups
}
