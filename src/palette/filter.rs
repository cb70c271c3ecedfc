//! Query filtering for the command overlay.
//!
//! An entry is visible when the lowercased query is a substring of its label or
//! description, and optionally its category. Catalog order is kept; there is no
//! ranking. An empty query shows a starter subset instead of nothing.

use super::types::CommandEntry;

/// What an empty query shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Starter {
    All,
    First(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterOptions {
    pub match_category: bool,
    pub starter: Starter,
    /// Show the starter list grouped by category
    pub group_starter: bool,
}

impl FilterOptions {
    /// Command palette: every entry, grouped, when the query is empty.
    pub fn palette() -> Self {
        Self {
            match_category: true,
            starter: Starter::All,
            group_starter: true,
        }
    }

    /// Dashboard search: the first `limit` entries, flat, when the query is empty.
    pub fn dashboard_search(limit: usize) -> Self {
        Self {
            match_category: true,
            starter: Starter::First(limit),
            group_starter: false,
        }
    }
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self::palette()
    }
}

pub fn entry_matches(entry: &CommandEntry, query_lower: &str, match_category: bool) -> bool {
    entry.label.to_lowercase().contains(query_lower)
        || entry
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(query_lower))
        || (match_category && entry.category.to_lowercase().contains(query_lower))
}

/// Indices into `entries` that are visible for `query`.
pub fn filter_entries(entries: &[CommandEntry], query: &str, options: &FilterOptions) -> Vec<usize> {
    if query.is_empty() {
        let take = match options.starter {
            Starter::All => entries.len(),
            Starter::First(n) => n.min(entries.len()),
        };
        return (0..take).collect();
    }

    let query_lower = query.to_lowercase();
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry_matches(entry, &query_lower, options.match_category))
        .map(|(idx, _)| idx)
        .collect()
}
