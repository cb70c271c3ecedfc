//! Toast record types.

use std::fmt;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::ErrorSeverity;

/// Toast variant determines the icon and styling hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastVariant {
    /// Get the icon character for this variant
    pub fn icon(&self) -> &'static str {
        match self {
            ToastVariant::Success => "✓",
            ToastVariant::Error => "✕",
            ToastVariant::Warning => "⚠",
            ToastVariant::Info => "ℹ",
        }
    }

    /// Convert from ErrorSeverity to ToastVariant
    pub fn from_severity(severity: ErrorSeverity) -> Self {
        match severity {
            ErrorSeverity::Info => ToastVariant::Info,
            ErrorSeverity::Warning => ToastVariant::Warning,
            ErrorSeverity::Error | ErrorSeverity::Critical => ToastVariant::Error,
        }
    }
}

/// Opaque, unique toast identifier (`toast_<seq>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToastId(String);

impl ToastId {
    pub(crate) fn from_seq(seq: u64) -> Self {
        ToastId(format!("toast_{seq}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ToastId {
    fn from(s: &str) -> Self {
        ToastId(s.to_string())
    }
}

impl From<String> for ToastId {
    fn from(s: String) -> Self {
        ToastId(s)
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Arguments to [`ToastStore::enqueue`](super::ToastStore::enqueue).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastRequest {
    pub variant: ToastVariant,
    pub title: String,
    pub description: Option<String>,
    /// `None` uses the store default; zero or negative never auto-dismisses
    pub duration_ms: Option<i64>,
}

impl ToastRequest {
    pub fn new(variant: ToastVariant, title: impl Into<String>) -> Self {
        Self {
            variant,
            title: title.into(),
            description: None,
            duration_ms: None,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(ToastVariant::Success, title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(ToastVariant::Error, title)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(ToastVariant::Warning, title)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(ToastVariant::Info, title)
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn duration_ms(mut self, ms: i64) -> Self {
        self.duration_ms = Some(ms);
        self
    }

    /// Stays until dismissed.
    pub fn persistent(self) -> Self {
        self.duration_ms(0)
    }
}

/// One visible toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToastRecord {
    pub id: ToastId,
    pub variant: ToastVariant,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Effective auto-dismiss delay; `<= 0` means sticky
    pub duration_ms: i64,
    #[serde(skip)]
    pub created_at: Instant,
}

impl ToastRecord {
    pub fn is_persistent(&self) -> bool {
        self.duration_ms <= 0
    }
}
