//! Tests for the shortcut dispatcher: suppression, exact matching, help toggle and teardown.

use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn counter() -> Arc<AtomicUsize> {
    Arc::new(AtomicUsize::new(0))
}

fn counting_binding(id: &str, shortcut: &str, hits: &Arc<AtomicUsize>) -> ShortcutBinding {
    let hits = Arc::clone(hits);
    ShortcutBinding::parse(id, shortcut, id, move || {
        hits.fetch_add(1, Ordering::SeqCst);
    })
    .unwrap()
}

#[test]
fn test_bound_key_fires_once() {
    let dispatcher = ShortcutDispatcher::new();
    let hits = counter();
    let _reg = dispatcher.register(BindingTable::new("view").with(counting_binding("new", "n", &hits)));

    let outcome = dispatcher.dispatch(&KeyEvent::plain("n"));
    assert_eq!(
        outcome,
        DispatchOutcome::Handled {
            binding_id: "new".to_string()
        }
    );
    assert!(outcome.default_prevented());
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn test_text_input_focus_suppresses_bindings() {
    let dispatcher = ShortcutDispatcher::new();
    let hits = counter();
    let _reg = dispatcher.register(BindingTable::new("view").with(counting_binding("new", "n", &hits)));

    for target in [
        FocusTarget::Input(InputKind::Text),
        FocusTarget::Input(InputKind::Search),
        FocusTarget::TextArea,
        FocusTarget::ContentEditable,
    ] {
        let outcome = dispatcher.dispatch(&KeyEvent::plain("n").with_target(target));
        assert_eq!(outcome, DispatchOutcome::Suppressed);
        assert!(!outcome.default_prevented());
    }
    assert_eq!(hits.load(Ordering::SeqCst), 0);

    // A checkbox doesn't take text, so bindings still fire there
    dispatcher.dispatch(&KeyEvent::plain("n").with_target(FocusTarget::Input(InputKind::Checkbox)));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn test_text_input_focus_suppresses_help_toggle() {
    let dispatcher = ShortcutDispatcher::new();
    let outcome = dispatcher.dispatch(&KeyEvent::plain("?").with_target(FocusTarget::TextArea));
    assert_eq!(outcome, DispatchOutcome::Suppressed);
    assert!(!dispatcher.help_visible());
}

#[test]
fn test_modifier_exactness() {
    let dispatcher = ShortcutDispatcher::new();
    let save = counter();
    let plain = counter();
    let _reg = dispatcher.register(
        BindingTable::new("editor")
            .with(counting_binding("save", "ctrl+s", &save))
            .with(counting_binding("search", "s", &plain)),
    );

    dispatcher.dispatch(&KeyEvent::plain("s"));
    assert_eq!(save.load(Ordering::SeqCst), 0);
    assert_eq!(plain.load(Ordering::SeqCst), 1);

    dispatcher.dispatch(&KeyEvent::new("s", Modifiers::ctrl()));
    assert_eq!(save.load(Ordering::SeqCst), 1);
    assert_eq!(plain.load(Ordering::SeqCst), 1);

    let outcome = dispatcher.dispatch(&KeyEvent::new("s", Modifiers::meta()));
    assert_eq!(outcome, DispatchOutcome::Unhandled);
    assert!(!outcome.default_prevented());
}

#[test]
fn test_unbound_key_passes_through() {
    let dispatcher = ShortcutDispatcher::new();
    assert_eq!(dispatcher.dispatch(&KeyEvent::plain("z")), DispatchOutcome::Unhandled);
}

#[test]
fn test_question_mark_toggles_help() {
    let dispatcher = ShortcutDispatcher::new();
    let hits = counter();
    // A binding on '?' never fires; the toggle takes precedence
    let reg = dispatcher.register(BindingTable::new("view").with(counting_binding("q", "?", &hits)));

    assert_eq!(
        dispatcher.dispatch(&KeyEvent::plain("?")),
        DispatchOutcome::HelpToggled { visible: true }
    );
    assert!(reg.help_visible());
    assert_eq!(
        dispatcher.dispatch(&KeyEvent::plain("?")),
        DispatchOutcome::HelpToggled { visible: false }
    );
    assert!(!dispatcher.help_visible());
    assert_eq!(hits.load(Ordering::SeqCst), 0);

    reg.set_help_visible(true);
    assert!(dispatcher.help_visible());
}

#[test]
fn test_first_registered_wins_on_overlap() {
    let dispatcher = ShortcutDispatcher::new();
    let first = counter();
    let second = counter();
    let table = BindingTable::new("view")
        .with(counting_binding("first", "g", &first))
        .with(counting_binding("second", "g", &second));
    assert_eq!(table.find_conflicts().len(), 1);
    let _reg = dispatcher.register(table);

    dispatcher.dispatch(&KeyEvent::plain("g"));
    assert_eq!(first.load(Ordering::SeqCst), 1);
    assert_eq!(second.load(Ordering::SeqCst), 0);
}

#[test]
fn test_bindings_by_category() {
    let hits = counter();
    let table = BindingTable::new("view")
        .with(counting_binding("new", "n", &hits))
        .with(counting_binding("analytics", "g", &hits).with_category(ShortcutCategory::View))
        .with(counting_binding("export", "e", &hits));

    let ids: Vec<&str> = table
        .bindings_by_category(ShortcutCategory::Actions)
        .iter()
        .map(|b| b.id.as_str())
        .collect();
    assert_eq!(ids, vec!["new", "export"]);
    assert_eq!(table.bindings_by_category(ShortcutCategory::View).len(), 1);
    assert!(table.bindings_by_category(ShortcutCategory::System).is_empty());
}

#[test]
fn test_first_table_wins_across_views() {
    let dispatcher = ShortcutDispatcher::new();
    let outer = counter();
    let inner = counter();
    let _a = dispatcher.register(BindingTable::new("outer").with(counting_binding("outer", "e", &outer)));
    let _b = dispatcher.register(BindingTable::new("inner").with(counting_binding("inner", "e", &inner)));

    dispatcher.dispatch(&KeyEvent::plain("e"));
    assert_eq!(outer.load(Ordering::SeqCst), 1);
    assert_eq!(inner.load(Ordering::SeqCst), 0);
}

#[test]
fn test_dropping_registration_removes_bindings() {
    let dispatcher = ShortcutDispatcher::new();
    let hits = counter();
    let reg = dispatcher.register(BindingTable::new("view").with(counting_binding("new", "n", &hits)));
    assert_eq!(dispatcher.table_count(), 1);

    drop(reg);
    assert_eq!(dispatcher.table_count(), 0);
    assert_eq!(dispatcher.dispatch(&KeyEvent::plain("n")), DispatchOutcome::Unhandled);
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[test]
fn test_remount_does_not_duplicate_firings() {
    let dispatcher = ShortcutDispatcher::new();
    let hits = counter();

    for _ in 0..3 {
        let reg =
            dispatcher.register(BindingTable::new("view").with(counting_binding("new", "n", &hits)));
        drop(reg);
    }
    let _mounted = dispatcher.register(BindingTable::new("view").with(counting_binding("new", "n", &hits)));

    dispatcher.dispatch(&KeyEvent::plain("n"));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn test_action_may_reenter_dispatcher() {
    let dispatcher = ShortcutDispatcher::new();
    let weak = dispatcher.downgrade();
    let _reg = dispatcher.register(BindingTable::new("view").with(ShortcutBinding::new(
        "help",
        Shortcut::parse("ctrl+slash").unwrap(),
        "Show help",
        move || {
            if let Some(d) = weak.upgrade() {
                d.set_help_visible(true);
            }
        },
    )));

    dispatcher.dispatch(&KeyEvent::new("/", Modifiers::ctrl()));
    assert!(dispatcher.help_visible());
}

#[test]
fn test_active_bindings_in_registration_order() {
    let dispatcher = ShortcutDispatcher::new();
    let hits = counter();
    let _a = dispatcher.register(BindingTable::new("a").with(counting_binding("one", "1", &hits)));
    let _b = dispatcher.register(
        BindingTable::new("b")
            .with(counting_binding("two", "2", &hits))
            .with(counting_binding("three", "3", &hits)),
    );
    let ids: Vec<String> = dispatcher.active_bindings().into_iter().map(|b| b.id).collect();
    assert_eq!(ids, vec!["one", "two", "three"]);
}

#[test]
fn test_registration_outliving_dispatcher_is_harmless() {
    let dispatcher = ShortcutDispatcher::new();
    let reg = dispatcher.register(BindingTable::new("view"));
    drop(dispatcher);
    assert!(!reg.help_visible());
    reg.set_help_visible(true);
    drop(reg);
}
