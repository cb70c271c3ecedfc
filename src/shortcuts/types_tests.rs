//! Tests for shortcut parsing, canonicalization and matching.

use super::*;

#[test]
fn test_parse_simple_and_modified() {
    let s = Shortcut::parse("n").unwrap();
    assert_eq!(s.key, "n");
    assert!(s.modifiers.none());

    let s = Shortcut::parse("ctrl+s").unwrap();
    assert_eq!(s.key, "s");
    assert_eq!(s.modifiers, Modifiers::ctrl());

    let s = Shortcut::parse("Cmd+Shift+K").unwrap();
    assert_eq!(s.key, "k");
    assert!(s.modifiers.meta && s.modifiers.shift);
    assert!(!s.modifiers.ctrl && !s.modifiers.alt);
}

#[test]
fn test_parse_space_separated_and_symbols() {
    let s = Shortcut::parse("ctrl /").unwrap();
    assert_eq!(s.key, "slash");
    assert_eq!(s.modifiers, Modifiers::ctrl());

    let err = Shortcut::parse("⌘k").unwrap_err();
    assert_eq!(err, ShortcutParseError::UnknownKey("⌘k".to_string()));

    let s = Shortcut::parse("ctrl++").unwrap();
    assert_eq!(s.key, "plus");
}

#[test]
fn test_parse_errors() {
    assert_eq!(Shortcut::parse(""), Err(ShortcutParseError::Empty));
    assert_eq!(Shortcut::parse("   "), Err(ShortcutParseError::Empty));
    assert_eq!(Shortcut::parse("ctrl+shift"), Err(ShortcutParseError::MissingKey));
    assert_eq!(
        Shortcut::parse("ctrl+a+b"),
        Err(ShortcutParseError::UnknownToken("b".to_string()))
    );
    assert_eq!(
        Shortcut::parse("ctrl+nope"),
        Err(ShortcutParseError::UnknownKey("nope".to_string()))
    );
}

#[test]
fn test_modifiers_from_names() {
    let m = Modifiers::from_names(&["cmd", "Shift"]).unwrap();
    assert!(m.meta && m.shift);
    assert_eq!(
        Modifiers::from_names(&["hyper"]),
        Err(ShortcutParseError::UnknownModifier("hyper".to_string()))
    );
    assert_eq!(Modifiers::from_names::<&str>(&[]).unwrap(), Modifiers::default());
}

#[test]
fn test_canonicalize_key() {
    assert_eq!(canonicalize_key("ArrowDown"), "down");
    assert_eq!(canonicalize_key("Esc"), "escape");
    assert_eq!(canonicalize_key("?"), "question");
    assert_eq!(canonicalize_key(" "), "space");
    assert_eq!(canonicalize_key("N"), "n");
    assert_eq!(canonicalize_key("Enter"), "enter");
}

#[test]
fn test_is_known_key() {
    assert!(is_known_key("a"));
    assert!(is_known_key("7"));
    assert!(is_known_key("f12"));
    assert!(!is_known_key("f25"));
    assert!(is_known_key("pagedown"));
    assert!(!is_known_key("A"));
    assert!(!is_known_key("hyper"));
}

#[test]
fn test_key_match_is_case_insensitive() {
    let s = Shortcut::plain("n");
    assert!(s.matches(&KeyEvent::plain("n")));
    assert!(s.matches(&KeyEvent::plain("N")));
}

#[test]
fn test_plain_binding_ignores_modified_event() {
    let plain_s = Shortcut::plain("s");
    assert!(!plain_s.matches(&KeyEvent::new("s", Modifiers::ctrl())));
    assert!(!plain_s.matches(&KeyEvent::new("s", Modifiers::meta())));
}

#[test]
fn test_modified_binding_ignores_plain_event() {
    let ctrl_s = Shortcut::parse("ctrl+s").unwrap();
    assert!(!ctrl_s.matches(&KeyEvent::plain("s")));
    assert!(ctrl_s.matches(&KeyEvent::new("s", Modifiers::ctrl())));
    // Extra modifiers are a mismatch too
    let ctrl_shift = Modifiers {
        ctrl: true,
        shift: true,
        ..Default::default()
    };
    assert!(!ctrl_s.matches(&KeyEvent::new("s", ctrl_shift)));
}

#[test]
fn test_help_toggle_detection() {
    assert!(KeyEvent::plain("?").is_help_toggle());
    assert!(!KeyEvent::new("?", Modifiers::ctrl()).is_help_toggle());
    assert!(!KeyEvent::plain("/").is_help_toggle());
}

#[test]
fn test_printable_char() {
    assert_eq!(KeyEvent::plain("a").printable_char(), Some('a'));
    assert_eq!(KeyEvent::new("A", Modifiers::shift()).printable_char(), Some('A'));
    assert_eq!(KeyEvent::plain(" ").printable_char(), Some(' '));
    assert_eq!(KeyEvent::plain("Enter").printable_char(), None);
    assert_eq!(KeyEvent::new("k", Modifiers::ctrl()).printable_char(), None);
}

#[test]
fn test_display_for_platform() {
    let s = Shortcut::parse("cmd+shift+k").unwrap();
    assert_eq!(s.display_for_platform(Platform::MacOS), "⇧⌘K");
    assert_eq!(s.display_for_platform(Platform::Linux), "Shift+Super+K");

    let esc = Shortcut::plain("Escape");
    assert_eq!(esc.display_for_platform(Platform::Windows), "Esc");
    assert_eq!(esc.display_for_platform(Platform::MacOS), "⎋");
}

#[test]
fn test_canonical_string_orders_modifiers() {
    let a = Shortcut::parse("shift+ctrl+k").unwrap();
    let b = Shortcut::parse("ctrl+shift+k").unwrap();
    assert_eq!(a.to_canonical_string(), "ctrl+shift+k");
    assert_eq!(a.to_canonical_string(), b.to_canonical_string());
}
