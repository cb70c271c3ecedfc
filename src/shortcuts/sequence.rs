//! Key sequence detection (the Konami easter egg).
//!
//! Keeps a sliding window of the last N canonical keys and reports a match when the
//! window equals the target sequence. Modified keys break the sequence.

use std::collections::VecDeque;

use super::types::{canonicalize_key, KeyEvent};

#[derive(Clone, Debug)]
pub struct SequenceDetector {
    target: Vec<String>,
    window: VecDeque<String>,
}

impl SequenceDetector {
    pub fn new<S: AsRef<str>>(sequence: &[S]) -> Self {
        let target: Vec<String> = sequence.iter().map(|k| canonicalize_key(k.as_ref())).collect();
        Self {
            window: VecDeque::with_capacity(target.len()),
            target,
        }
    }

    /// up up down down left right left right b a
    pub fn konami() -> Self {
        Self::new(&[
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
        ])
    }

    /// Feed one key event. Returns true when it completes the sequence.
    pub fn push(&mut self, event: &KeyEvent) -> bool {
        if self.target.is_empty() {
            return false;
        }
        if event.modifiers.ctrl || event.modifiers.meta || event.modifiers.alt {
            self.window.clear();
            return false;
        }

        if self.window.len() == self.target.len() {
            self.window.pop_front();
        }
        self.window.push_back(event.canonical_key());

        if self.window.iter().eq(self.target.iter()) {
            self.window.clear();
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.window.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortcuts::Modifiers;

    fn feed(detector: &mut SequenceDetector, keys: &[&str]) -> Vec<bool> {
        keys.iter()
            .map(|k| detector.push(&KeyEvent::plain(*k)))
            .collect()
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
    fn test_konami_fires_on_last_key_only() {
        let mut detector = SequenceDetector::konami();
        let results = feed(&mut detector, &KONAMI);
        assert_eq!(results.iter().filter(|r| **r).count(), 1);
        assert!(results[9]);
    }

    #[test]
    fn test_konami_tolerates_leading_noise() {
        let mut detector = SequenceDetector::konami();
        feed(&mut detector, &["x", "ArrowUp", "q"]);
        assert!(*feed(&mut detector, &KONAMI).last().unwrap());
    }

    #[test]
    fn test_interrupted_sequence_does_not_fire() {
        let mut detector = SequenceDetector::konami();
        let mut keys = KONAMI.to_vec();
        keys.insert(5, "z");
        assert!(!feed(&mut detector, &keys).iter().any(|r| *r));
    }

    #[test]
    fn test_modifier_breaks_sequence() {
        let mut detector = SequenceDetector::konami();
        feed(&mut detector, &KONAMI[..9]);
        assert!(!detector.push(&KeyEvent::new("a", Modifiers::ctrl())));
        assert!(!detector.push(&KeyEvent::plain("a")));
    }

    #[test]
    fn test_fires_again_after_completion() {
        let mut detector = SequenceDetector::konami();
        assert!(*feed(&mut detector, &KONAMI).last().unwrap());
        assert!(*feed(&mut detector, &KONAMI).last().unwrap());
    }
}
