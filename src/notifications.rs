//! Notification inbox.
//!
//! A read/unread list shown behind the dashboard bell. Unlike toasts these don't
//! expire; they only change read state.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tracing::debug;

use crate::toast::ToastVariant;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub kind: ToastVariant,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

impl Notification {
    pub fn new(
        id: impl Into<String>,
        kind: ToastVariant,
        title: impl Into<String>,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            message: message.into(),
            timestamp,
            read: false,
        }
    }

    pub fn read(mut self) -> Self {
        self.read = true;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    notifications: Vec<Notification>,
    expanded: Option<String>,
}

impl NotificationCenter {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self {
            notifications,
            expanded: None,
        }
    }

    /// The dashboard's sample inbox, timestamped relative to `now`.
    pub fn with_samples(now: DateTime<Utc>) -> Self {
        Self::new(vec![
            Notification::new(
                "1",
                ToastVariant::Success,
                "Agent Deployed",
                "Athena squad is now active with 3 agents.",
                now - Duration::minutes(5),
            ),
            Notification::new(
                "2",
                ToastVariant::Warning,
                "Credits Low",
                "You have used 85% of your monthly credits.",
                now - Duration::minutes(30),
            ),
            Notification::new(
                "3",
                ToastVariant::Info,
                "Pipeline Updated",
                "New tasks added to the marketing pipeline.",
                now - Duration::hours(2),
            )
            .read(),
            Notification::new(
                "4",
                ToastVariant::Success,
                "Export Complete",
                "Your analytics report is ready for download.",
                now - Duration::hours(5),
            )
            .read(),
            Notification::new(
                "5",
                ToastVariant::Error,
                "Connection Lost",
                "Temporary disconnect from agent network.",
                now - Duration::hours(24),
            )
            .read(),
        ])
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Unknown ids are ignored. Returns whether anything changed.
    pub fn mark_as_read(&mut self, id: &str) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(n) if !n.read => {
                n.read = true;
                debug!(notification_id = id, "Notification marked read");
                true
            }
            _ => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        for n in &mut self.notifications {
            n.read = true;
        }
    }

    /// Expand (or collapse) a notification's detail. Expanding marks it read.
    pub fn toggle_expand(&mut self, id: &str) {
        if self.expanded.as_deref() == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_string());
        }
        self.mark_as_read(id);
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }
}

/// "5m ago", "2h ago", "1d ago".
pub fn format_relative(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(timestamp);
    let minutes = diff.num_minutes().max(0);
    let hours = diff.num_hours().max(0);
    if minutes < 60 {
        format!("{}m ago", minutes)
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else {
        format!("{}d ago", hours / 24)
    }
}
