//! Focus targets and the editable-surface check.
//!
//! Shortcuts must never fire while the user is typing, so every router asks
//! [`is_editable_text_surface`] about the event target before matching anything.

use serde::{Deserialize, Serialize};

/// The `type` of an `<input>`-like element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputKind {
    Text,
    Search,
    Email,
    Password,
    Url,
    Tel,
    Number,
    Checkbox,
    Radio,
    Range,
    Color,
    Button,
    Submit,
}

impl InputKind {
    /// Whether typing into this input produces text.
    pub fn accepts_text(&self) -> bool {
        matches!(
            self,
            InputKind::Text
                | InputKind::Search
                | InputKind::Email
                | InputKind::Password
                | InputKind::Url
                | InputKind::Tel
                | InputKind::Number
        )
    }
}

/// Element that owned focus when a key event fired.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "inputType", rename_all = "camelCase")]
pub enum FocusTarget {
    /// Nothing in particular (page body)
    #[default]
    Document,
    Input(InputKind),
    TextArea,
    ContentEditable,
    Button,
    Other,
}

impl FocusTarget {
    /// Parse a loose target name as used by the stdin harness (`"input"`, `"textarea"`, ...).
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "input" | "text" => FocusTarget::Input(InputKind::Text),
            "search" => FocusTarget::Input(InputKind::Search),
            "checkbox" => FocusTarget::Input(InputKind::Checkbox),
            "textarea" => FocusTarget::TextArea,
            "contenteditable" => FocusTarget::ContentEditable,
            "button" => FocusTarget::Button,
            "document" | "body" | "" => FocusTarget::Document,
            _ => FocusTarget::Other,
        }
    }
}

/// True when key presses on `target` are text entry rather than commands.
pub fn is_editable_text_surface(target: &FocusTarget) -> bool {
    match target {
        FocusTarget::Input(kind) => kind.accepts_text(),
        FocusTarget::TextArea | FocusTarget::ContentEditable => true,
        FocusTarget::Document | FocusTarget::Button | FocusTarget::Other => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_surfaces_are_editable() {
        assert!(is_editable_text_surface(&FocusTarget::Input(InputKind::Text)));
        assert!(is_editable_text_surface(&FocusTarget::Input(InputKind::Search)));
        assert!(is_editable_text_surface(&FocusTarget::TextArea));
        assert!(is_editable_text_surface(&FocusTarget::ContentEditable));
    }

    #[test]
    fn test_non_text_targets_are_not_editable() {
        assert!(!is_editable_text_surface(&FocusTarget::Document));
        assert!(!is_editable_text_surface(&FocusTarget::Button));
        assert!(!is_editable_text_surface(&FocusTarget::Input(InputKind::Checkbox)));
        assert!(!is_editable_text_surface(&FocusTarget::Input(InputKind::Range)));
    }

    #[test]
    fn test_from_name() {
        assert_eq!(FocusTarget::from_name("textarea"), FocusTarget::TextArea);
        assert_eq!(
            FocusTarget::from_name("INPUT"),
            FocusTarget::Input(InputKind::Text)
        );
        assert_eq!(FocusTarget::from_name("body"), FocusTarget::Document);
        assert_eq!(FocusTarget::from_name("canvas"), FocusTarget::Other);
    }
}
