//! Client-side route history.
//!
//! Command actions don't render anything; they push a path here and the host
//! decides what to show.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::info;

pub const HOME_PATH: &str = "/";

#[derive(Debug)]
struct NavState {
    history: Vec<String>,
}

/// Cloneable handle to the shared route history.
#[derive(Clone, Debug)]
pub struct Navigator {
    inner: Arc<Mutex<NavState>>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(HOME_PATH)
    }
}

impl Navigator {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(NavState {
                history: vec![initial.into()],
            })),
        }
    }

    pub fn push(&self, path: impl Into<String>) {
        let path = path.into();
        info!(event_type = "navigation", path = %path, "Navigate");
        self.inner.lock().history.push(path);
    }

    /// Pop the current path. The first entry is never popped.
    pub fn back(&self) -> Option<String> {
        let mut state = self.inner.lock();
        if state.history.len() > 1 {
            state.history.pop();
            state.history.last().cloned()
        } else {
            None
        }
    }

    pub fn current(&self) -> String {
        self.inner
            .lock()
            .history
            .last()
            .cloned()
            .unwrap_or_else(|| HOME_PATH.to_string())
    }

    pub fn history(&self) -> Vec<String> {
        self.inner.lock().history.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_back() {
        let nav = Navigator::new("/dashboard");
        nav.push("/dashboard/settings");
        assert_eq!(nav.current(), "/dashboard/settings");
        assert_eq!(nav.back(), Some("/dashboard".to_string()));
        assert_eq!(nav.back(), None);
        assert_eq!(nav.current(), "/dashboard");
    }

    #[test]
    fn test_clones_share_history() {
        let nav = Navigator::default();
        let other = nav.clone();
        other.push("/dashboard/squad");
        assert_eq!(nav.history(), vec!["/", "/dashboard/squad"]);
    }
}
