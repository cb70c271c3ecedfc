//! The dashboard's command catalog.

use super::types::{CommandCatalog, CommandEntry};
use crate::navigation::Navigator;

pub const CATEGORY_PAGE: &str = "page";
pub const CATEGORY_ACTION: &str = "action";

/// (id, label, description, icon, category, path)
const DASHBOARD_COMMANDS: &[(&str, &str, &str, &str, &str, &str)] = &[
    ("home", "Home", "Go to landing page", "🏠", CATEGORY_PAGE, "/"),
    ("dashboard", "Dashboard", "Main dashboard view", "📊", CATEGORY_PAGE, "/dashboard"),
    ("squad", "Squad", "Manage your AI agents", "👥", CATEGORY_PAGE, "/dashboard/squad"),
    ("pipeline", "Pipeline", "View deployment pipeline", "🚀", CATEGORY_PAGE, "/dashboard/pipeline"),
    ("archive", "Archive", "Archived projects", "📦", CATEGORY_PAGE, "/dashboard/archive"),
    ("settings", "Settings", "Configure preferences", "⚙️", CATEGORY_PAGE, "/dashboard/settings"),
    ("new-squad", "New Squad", "Create a new AI squad", "✨", CATEGORY_ACTION, "/dashboard/squad?new=true"),
    ("deploy", "Deploy", "Deploy current project", "📤", CATEGORY_ACTION, "/dashboard/pipeline?action=deploy"),
    ("export", "Export Data", "Export analytics data", "📥", CATEGORY_ACTION, "/dashboard/settings?export=true"),
];

/// Navigation commands for the dashboard. Each action pushes its path onto `navigator`.
pub fn dashboard_catalog(navigator: &Navigator) -> CommandCatalog {
    let entries = DASHBOARD_COMMANDS
        .iter()
        .map(|&(id, label, description, icon, category, path)| {
            let nav = navigator.clone();
            CommandEntry::new(id, label, category, move || nav.push(path))
                .with_description(description)
                .with_icon(icon)
        })
        .collect();
    CommandCatalog::new(entries)
}
