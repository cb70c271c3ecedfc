//! Command / search overlay.
//!
//! - `types` - `CommandEntry`, `CommandCatalog`, result view model
//! - `filter` - substring filtering and starter lists
//! - `catalog` - the dashboard's navigation commands
//! - `overlay` - open/closed state, query, selection and activation

mod catalog;
mod filter;
mod overlay;
mod types;


pub use catalog::{dashboard_catalog, CATEGORY_ACTION, CATEGORY_PAGE};
pub use filter::{entry_matches, filter_entries, FilterOptions, Starter};
pub use overlay::{Activation, CommandOverlay, OverlayKey, OverlayState};
pub use types::{
    CommandAction, CommandCatalog, CommandEntry, ResultGroup, ResultRow, ResultsView,
};
