//! End-to-end tests for the dashboard root provider.

use super::*;
use crate::clock::ManualClock;
use crate::shortcuts::{FocusTarget, InputKind, Modifiers};

fn dashboard() -> (Dashboard, ManualClock) {
    dashboard_with(Config::default())
}

fn dashboard_with(config: Config) -> (Dashboard, ManualClock) {
    let clock = ManualClock::new();
    (Dashboard::new(config, Arc::new(clock.clone())), clock)
}

fn ctrl(key: &str) -> KeyEvent {
    KeyEvent::new(key, Modifiers::ctrl())
}

fn toast_titles(d: &Dashboard) -> Vec<String> {
    d.toasts().toasts().into_iter().map(|t| t.title).collect()
}

fn result_ids(d: &Dashboard) -> Vec<String> {
    d.overlay().results().iter().map(|e| e.id.clone()).collect()
}

#[test]
fn test_search_scenario_end_to_end() {
    let (mut d, _clock) = dashboard();

    let outcome = d.handle_key(&ctrl("k"));
    assert_eq!(
        outcome,
        KeyOutcome::Dispatched(DispatchOutcome::Handled {
            binding_id: "open-search-0".to_string()
        })
    );
    assert!(d.overlay().is_open());

    d.type_text("set");
    assert_eq!(d.overlay().query(), "set");
    let ids = result_ids(&d);
    assert!(ids.contains(&"settings".to_string()));
    for excluded in ["dashboard", "squad", "pipeline"] {
        assert!(!ids.contains(&excluded.to_string()));
    }

    assert_eq!(
        d.handle_key(&KeyEvent::plain("Enter")),
        KeyOutcome::Overlay { consumed: true }
    );
    let settings_visits = d
        .navigator()
        .history()
        .iter()
        .filter(|p| p.as_str() == "/dashboard/settings")
        .count();
    assert_eq!(settings_visits, 1);
    assert_eq!(d.navigator().current(), "/dashboard/settings");
    assert!(!d.overlay().is_open());
    assert_eq!(d.overlay().query(), "");

    d.handle_key(&KeyEvent::new("k", Modifiers::meta()));
    assert!(d.overlay().is_open());
    assert_eq!(d.overlay().query(), "");
    assert_eq!(
        result_ids(&d),
        vec!["home", "dashboard", "squad", "pipeline", "archive", "settings"]
    );
}

#[test]
fn test_typing_while_open_does_not_fire_shortcuts() {
    let (mut d, _clock) = dashboard();
    d.open_search();
    d.type_text("new");
    assert_eq!(d.overlay().query(), "new");
    assert!(d.toasts().is_empty());
}

#[test]
fn test_palette_hotkey_closes_open_overlay() {
    let (mut d, _clock) = dashboard();
    d.handle_key(&ctrl("k"));
    d.type_text("pi");
    assert_eq!(
        d.handle_key(&ctrl("k")),
        KeyOutcome::Overlay { consumed: true }
    );
    assert!(!d.overlay().is_open());
    assert_eq!(d.overlay().query(), "");
}

#[test]
fn test_backdrop_and_click() {
    let (mut d, _clock) = dashboard();
    d.open_search();
    d.type_text("arch");
    d.backdrop_click();
    assert!(!d.overlay().is_open());
    assert_eq!(d.navigator().current(), "/dashboard");

    d.open_search();
    assert_eq!(d.click_result(1), Some("dashboard".to_string()));
    assert_eq!(d.navigator().history(), vec!["/dashboard", "/dashboard"]);
    assert!(!d.overlay().is_open());
}

#[test]
fn test_quick_action_key_enqueues_toast_that_expires() {
    let (mut d, clock) = dashboard();
    d.handle_key(&KeyEvent::plain("n"));
    d.handle_key(&KeyEvent::plain("E"));
    assert_eq!(toast_titles(&d), vec!["New Squad triggered", "Export triggered"]);

    clock.advance_ms(3999);
    d.tick();
    assert_eq!(d.toasts().len(), 2);
    clock.advance_ms(1);
    assert_eq!(d.tick(), 2);
    assert!(d.toasts().is_empty());
}

#[test]
fn test_quick_action_by_id() {
    let (mut d, _clock) = dashboard();
    assert!(d.quick_action("schedule"));
    assert!(!d.quick_action("unknown"));
    assert_eq!(toast_titles(&d), vec!["Schedule triggered"]);
}

#[test]
fn test_shortcuts_suppressed_in_text_input() {
    let (mut d, _clock) = dashboard();
    let outcome = d.handle_key(&KeyEvent::plain("n").with_target(FocusTarget::Input(InputKind::Text)));
    assert_eq!(outcome, KeyOutcome::Dispatched(DispatchOutcome::Suppressed));
    assert!(d.toasts().is_empty());
}

#[test]
fn test_modified_quick_action_key_does_not_fire() {
    let (mut d, _clock) = dashboard();
    assert_eq!(
        d.handle_key(&ctrl("s")),
        KeyOutcome::Dispatched(DispatchOutcome::Unhandled)
    );
    assert!(d.toasts().is_empty());
}

#[test]
fn test_help_toggle_and_escape() {
    let (mut d, _clock) = dashboard();
    d.handle_key(&KeyEvent::plain("?"));
    assert!(d.help_visible());
    let snapshot = d.snapshot();
    assert!(snapshot
        .help
        .iter()
        .any(|e| e.description == "Toggle Analytics"));

    assert_eq!(d.handle_key(&KeyEvent::plain("Escape")), KeyOutcome::HelpClosed);
    assert!(!d.help_visible());
    assert!(d.snapshot().help.is_empty());

    d.handle_key(&ctrl("/"));
    assert!(d.help_visible());
}

#[test]
fn test_help_query_filters_snapshot_and_clears_on_close() {
    let (mut d, _clock) = dashboard();
    d.set_help_query("squad");
    assert_eq!(d.help_query(), "");

    d.handle_key(&KeyEvent::plain("?"));
    d.set_help_query("SQUAD");
    let snapshot = d.snapshot();
    assert_eq!(snapshot.help_query, "SQUAD");
    let descriptions: Vec<&str> = snapshot.help.iter().map(|e| e.description.as_str()).collect();
    assert_eq!(descriptions, vec!["New Squad"]);

    d.handle_key(&KeyEvent::plain("Escape"));
    assert_eq!(d.help_query(), "");
    d.handle_key(&KeyEvent::plain("?"));
    assert_eq!(d.snapshot().help.len(), d.help_overlay().entries().len());

    d.set_help_query("export");
    d.handle_key(&KeyEvent::plain("?"));
    assert!(!d.help_visible());
    assert_eq!(d.help_query(), "");
}

#[test]
fn test_analytics_toggle() {
    let (mut d, _clock) = dashboard();
    d.handle_key(&KeyEvent::plain("g"));
    assert!(d.analytics_enabled());
    d.handle_key(&KeyEvent::plain("g"));
    assert!(!d.analytics_enabled());
    assert_eq!(toast_titles(&d), vec!["Analytics enabled", "Analytics disabled"]);
}

const KONAMI: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

#[test]
fn test_konami_fires_once_per_session() {
    let (mut d, clock) = dashboard();
    for key in KONAMI {
        d.handle_key(&KeyEvent::plain(key));
    }
    assert!(d.easter_egg_activated());
    assert_eq!(toast_titles(&d), vec!["Fabbrizzio Mode Activated!"]);

    for key in KONAMI {
        d.handle_key(&KeyEvent::plain(key));
    }
    assert_eq!(d.toasts().len(), 1);

    clock.advance_ms(3000);
    d.tick();
    assert!(d.toasts().is_empty());
}

#[test]
fn test_konami_disabled_by_config() {
    let config = Config {
        easter_egg: false,
        ..Config::default()
    };
    let (mut d, _clock) = dashboard_with(config);
    for key in KONAMI {
        d.handle_key(&KeyEvent::plain(key));
    }
    assert!(!d.easter_egg_activated());
    assert!(d.toasts().is_empty());
}

#[test]
fn test_unmount_and_remount() {
    let (mut d, _clock) = dashboard();
    d.unmount();
    assert!(!d.is_mounted());
    assert_eq!(
        d.handle_key(&KeyEvent::plain("n")),
        KeyOutcome::Dispatched(DispatchOutcome::Unhandled)
    );

    d.mount();
    d.mount();
    assert_eq!(d.dispatcher().table_count(), 1);
    d.handle_key(&KeyEvent::plain("n"));
    assert_eq!(d.toasts().len(), 1);
}

#[test]
fn test_custom_hotkeys_from_config() {
    let mut config = Config::default();
    config.hotkeys.palette = vec!["alt+p".to_string(), "not a hotkey".to_string()];
    let (mut d, _clock) = dashboard_with(config);

    assert_eq!(
        d.handle_key(&ctrl("k")),
        KeyOutcome::Dispatched(DispatchOutcome::Unhandled)
    );
    let alt = Modifiers {
        alt: true,
        ..Default::default()
    };
    d.handle_key(&KeyEvent::new("p", alt));
    assert!(d.overlay().is_open());
}

#[test]
fn test_notifications() {
    let (mut d, _clock) = dashboard();
    assert_eq!(d.inbox().unread_count(), 2);
    assert!(d.mark_read("1"));
    assert_eq!(d.inbox().unread_count(), 1);
    d.toggle_notification("2");
    assert_eq!(d.inbox().expanded(), Some("2"));
    assert_eq!(d.inbox().unread_count(), 0);
}

#[test]
fn test_snapshot_serializes() {
    let (mut d, _clock) = dashboard();
    d.quick_action("export");
    d.mark_all_read();

    let json = serde_json::to_value(d.snapshot()).unwrap();
    assert_eq!(json["path"], "/dashboard");
    assert_eq!(json["overlay"]["state"], "closed");
    assert_eq!(json["overlay"]["results"]["kind"], "flat");
    assert_eq!(json["helpVisible"], false);
    assert!(json.get("help").is_none());
    assert_eq!(json["toasts"][0]["title"], "Export triggered");
    assert_eq!(json["notifications"]["unreadCount"], 0);
    assert_eq!(json["notifications"]["items"][0]["relativeTime"], "5m ago");
    assert_eq!(json["notifications"]["items"][0]["title"], "Agent Deployed");
}
