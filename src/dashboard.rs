//! Dashboard root provider.
//!
//! Owns one of everything: the toast store, the shortcut dispatcher (plus the
//! dashboard's own registration), the search overlay, the navigator and the
//! notification inbox. Hosts feed it key events and pointer actions; it routes
//! them in a fixed order:
//!
//! 1. overlay open -> the overlay gets the key (a palette hotkey closes it)
//! 2. `Escape` with help showing -> close help
//! 3. the Konami detector sees the key
//! 4. the shortcut dispatcher

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Utc;
use parking_lot::{Mutex, MutexGuard};
use serde::Serialize;
use tracing::{info, instrument};

use crate::clock::Clock;
use crate::config::Config;
use crate::logging;
use crate::navigation::Navigator;
use crate::notifications::{format_relative, Notification, NotificationCenter};
use crate::palette::{
    dashboard_catalog, Activation, CommandOverlay, FilterOptions, OverlayKey, OverlayState,
    ResultsView,
};
use crate::shortcuts::{
    BindingTable, DispatchOutcome, HelpEntry, HelpOverlay, KeyEvent, Registration, SequenceDetector,
    Shortcut, ShortcutBinding, ShortcutCategory, ShortcutDispatcher,
};
use crate::toast::{ToastId, ToastRecord, ToastRequest, ToastStore};

/// (id, label, key)
pub const QUICK_ACTIONS: &[(&str, &str, &str)] = &[
    ("new-squad", "New Squad", "n"),
    ("create-task", "Create Task", "t"),
    ("schedule", "Schedule", "s"),
    ("export", "Export", "e"),
];

pub const ANALYTICS_KEY: &str = "g";

const EASTER_EGG_TITLE: &str = "Fabbrizzio Mode Activated!";
const EASTER_EGG_DURATION_MS: i64 = 3000;

/// What the dashboard did with a key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The open overlay saw the key
    Overlay { consumed: bool },
    HelpClosed,
    Dispatched(DispatchOutcome),
}

pub struct Dashboard {
    config: Config,
    toasts: ToastStore,
    dispatcher: ShortcutDispatcher,
    registration: Option<Registration>,
    overlay: Arc<Mutex<CommandOverlay>>,
    navigator: Navigator,
    inbox: NotificationCenter,
    analytics_enabled: Arc<AtomicBool>,
    konami: SequenceDetector,
    easter_egg_activated: bool,
    palette_shortcuts: Vec<Shortcut>,
    help_query: String,
}

impl Dashboard {
    #[instrument(skip_all)]
    pub fn new(config: Config, clock: Arc<dyn Clock>) -> Self {
        let toasts = ToastStore::from_config(clock, &config.toast);
        let navigator = Navigator::new("/dashboard");
        let options = FilterOptions {
            match_category: config.search.match_category,
            ..FilterOptions::dashboard_search(config.search.starter_limit)
        };
        let overlay = CommandOverlay::new(dashboard_catalog(&navigator), options);

        let mut dashboard = Self {
            palette_shortcuts: config.palette_shortcuts(),
            config,
            toasts,
            dispatcher: ShortcutDispatcher::new(),
            registration: None,
            overlay: Arc::new(Mutex::new(overlay)),
            navigator,
            inbox: NotificationCenter::with_samples(Utc::now()),
            analytics_enabled: Arc::new(AtomicBool::new(false)),
            konami: SequenceDetector::konami(),
            easter_egg_activated: false,
            help_query: String::new(),
        };
        dashboard.mount();
        dashboard
    }

    /// Install the dashboard's bindings. No-op when already mounted.
    pub fn mount(&mut self) {
        if self.registration.is_some() {
            return;
        }
        let table = self.build_bindings();
        info!(bindings = table.len(), "Dashboard mounted");
        self.registration = Some(self.dispatcher.register(table));
    }

    /// Remove the dashboard's bindings.
    pub fn unmount(&mut self) {
        if self.registration.take().is_some() {
            info!("Dashboard unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.registration.is_some()
    }

    fn build_bindings(&self) -> BindingTable {
        let mut table = BindingTable::new("dashboard");

        for &(id, label, key) in QUICK_ACTIONS {
            let toasts = self.toasts.clone();
            table.push(ShortcutBinding::new(id, Shortcut::plain(key), label, move || {
                toasts.enqueue(ToastRequest::info(format!("{} triggered", label)));
            }));
        }

        let toasts = self.toasts.clone();
        let analytics = Arc::clone(&self.analytics_enabled);
        table.push(
            ShortcutBinding::new(
                "toggle-analytics",
                Shortcut::plain(ANALYTICS_KEY),
                "Toggle Analytics",
                move || {
                    let enabled = !analytics.fetch_xor(true, Ordering::SeqCst);
                    let title = if enabled {
                        "Analytics enabled"
                    } else {
                        "Analytics disabled"
                    };
                    toasts.enqueue(ToastRequest::info(title));
                },
            )
            .with_category(ShortcutCategory::View),
        );

        for (i, shortcut) in self.palette_shortcuts.iter().enumerate() {
            let overlay = Arc::clone(&self.overlay);
            table.push(
                ShortcutBinding::new(
                    format!("open-search-{}", i),
                    shortcut.clone(),
                    "Open command palette",
                    move || overlay.lock().toggle(),
                )
                .with_category(ShortcutCategory::Navigation),
            );
        }

        // Weak handle: an Arc captured here would keep the dispatcher alive forever
        for (i, shortcut) in self.config.help_shortcuts().into_iter().enumerate() {
            let dispatcher = self.dispatcher.downgrade();
            table.push(
                ShortcutBinding::new(
                    format!("show-help-{}", i),
                    shortcut,
                    "Show keyboard shortcuts",
                    move || {
                        if let Some(d) = dispatcher.upgrade() {
                            d.set_help_visible(true);
                        }
                    },
                )
                .with_category(ShortcutCategory::System),
            );
        }

        table
    }

    fn is_palette_hotkey(&self, event: &KeyEvent) -> bool {
        self.palette_shortcuts.iter().any(|s| s.matches(event))
    }

    /// `None` when the overlay is closed. Activated entries run after the lock is released.
    fn route_to_overlay(&self, event: &KeyEvent) -> Option<KeyOutcome> {
        let key = {
            let mut overlay = self.overlay.lock();
            if !overlay.is_open() {
                return None;
            }
            if self.is_palette_hotkey(event) {
                overlay.close();
                return Some(KeyOutcome::Overlay { consumed: true });
            }
            overlay.handle_key(event)
        };

        let consumed = key.consumed();
        if let OverlayKey::Activated(activation) = key {
            activation.invoke();
        }
        Some(KeyOutcome::Overlay { consumed })
    }

    pub fn handle_key(&mut self, event: &KeyEvent) -> KeyOutcome {
        if let Some(outcome) = self.route_to_overlay(event) {
            return outcome;
        }

        if event.canonical_key() == "escape" && self.dispatcher.help_visible() {
            self.dispatcher.set_help_visible(false);
            self.help_query.clear();
            logging::log_ui_event("help", "close", None);
            return KeyOutcome::HelpClosed;
        }

        if self.config.easter_egg && self.konami.push(event) && !self.easter_egg_activated {
            self.easter_egg_activated = true;
            self.toasts.enqueue(
                ToastRequest::success(EASTER_EGG_TITLE)
                    .description("You found the easter egg")
                    .duration_ms(EASTER_EGG_DURATION_MS),
            );
        }

        let outcome = self.dispatcher.dispatch(event);
        if !self.dispatcher.help_visible() {
            self.help_query.clear();
        }
        KeyOutcome::Dispatched(outcome)
    }

    /// Feed each character of `text` as a plain key press.
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.handle_key(&KeyEvent::plain(c.to_string()));
        }
    }

    /// Click on a result row. Returns the activated entry id.
    pub fn click_result(&mut self, index: usize) -> Option<String> {
        let activation = self.overlay.lock().activate_at(index);
        activation.map(Activation::invoke)
    }

    pub fn backdrop_click(&mut self) {
        self.overlay.lock().backdrop_click();
    }

    pub fn open_search(&mut self) {
        self.overlay.lock().open();
    }

    /// Run a quick action by id as if its button was pressed.
    pub fn quick_action(&mut self, id: &str) -> bool {
        match QUICK_ACTIONS.iter().find(|(qid, _, _)| *qid == id) {
            Some((_, label, _)) => {
                self.toasts
                    .enqueue(ToastRequest::info(format!("{} triggered", label)));
                true
            }
            None => false,
        }
    }

    pub fn mark_read(&mut self, id: &str) -> bool {
        self.inbox.mark_as_read(id)
    }

    pub fn mark_all_read(&mut self) {
        self.inbox.mark_all_read();
    }

    pub fn toggle_notification(&mut self, id: &str) {
        self.inbox.toggle_expand(id);
    }

    /// Fire due toast timers.
    pub fn tick(&self) -> usize {
        self.toasts.tick()
    }

    pub fn toasts(&self) -> &ToastStore {
        &self.toasts
    }

    pub fn dismiss_toast(&self, id: &ToastId) -> bool {
        self.toasts.dismiss(id)
    }

    pub fn dispatcher(&self) -> &ShortcutDispatcher {
        &self.dispatcher
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn inbox(&self) -> &NotificationCenter {
        &self.inbox
    }

    pub fn overlay(&self) -> MutexGuard<'_, CommandOverlay> {
        self.overlay.lock()
    }

    pub fn analytics_enabled(&self) -> bool {
        self.analytics_enabled.load(Ordering::SeqCst)
    }

    pub fn easter_egg_activated(&self) -> bool {
        self.easter_egg_activated
    }

    pub fn help_visible(&self) -> bool {
        self.dispatcher.help_visible()
    }

    /// Filter the help rows. Ignored while help is hidden; hiding help clears it.
    pub fn set_help_query(&mut self, query: impl Into<String>) {
        if self.dispatcher.help_visible() {
            self.help_query = query.into();
        }
    }

    pub fn help_query(&self) -> &str {
        &self.help_query
    }

    /// Help rows for the currently registered bindings, filtered by the help query.
    pub fn help_overlay(&self) -> HelpOverlay {
        let mut help = HelpOverlay::from_bindings(&self.dispatcher.active_bindings());
        help.set_query(self.help_query.as_str());
        help
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        let now = Utc::now();
        let overlay = self.overlay.lock();
        let help_visible = self.help_visible();

        DashboardSnapshot {
            path: self.navigator.current(),
            overlay: OverlaySnapshot {
                state: overlay.state(),
                query: overlay.query().to_string(),
                selected_index: overlay.selected_index(),
                results: overlay.view(),
            },
            help_visible,
            help_query: self.help_query.clone(),
            help: if help_visible {
                self.help_overlay().filtered().into_iter().cloned().collect()
            } else {
                Vec::new()
            },
            toasts: self.toasts.toasts(),
            notifications: InboxSnapshot {
                unread_count: self.inbox.unread_count(),
                expanded: self.inbox.expanded().map(str::to_string),
                items: self
                    .inbox
                    .notifications()
                    .iter()
                    .map(|n| NotificationRow {
                        relative_time: format_relative(n.timestamp, now),
                        notification: n.clone(),
                    })
                    .collect(),
            },
            analytics_enabled: self.analytics_enabled(),
            easter_egg_activated: self.easter_egg_activated,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub path: String,
    pub overlay: OverlaySnapshot,
    pub help_visible: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub help_query: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub help: Vec<HelpEntry>,
    pub toasts: Vec<ToastRecord>,
    pub notifications: InboxSnapshot,
    pub analytics_enabled: bool,
    pub easter_egg_activated: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlaySnapshot {
    pub state: OverlayState,
    pub query: String,
    pub selected_index: usize,
    pub results: ResultsView,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InboxSnapshot {
    pub unread_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expanded: Option<String>,
    pub items: Vec<NotificationRow>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRow {
    #[serde(flatten)]
    pub notification: Notification,
    pub relative_time: String,
}

#[cfg(test)]
#[path = "dashboard_tests.rs"]
mod tests;
