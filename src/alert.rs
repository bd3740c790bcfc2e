//! Transient user notifications
//!
//! Alerts never block anything; they expire on their own after `ALERT_TTL`.

use std::time::{Duration, Instant};

use serde::Serialize;

pub(crate) const ALERT_TTL: Duration = Duration::from_secs(5);

pub(crate) const LOGIN_FAILED: &str = "Invalid email or password. Please try again.";
pub(crate) const PROJECTS_LOAD_FAILED: &str = "Failed to load projects. Please try again.";
pub(crate) const STATS_LOAD_FAILED: &str = "Failed to load statistics. Please try again.";
pub(crate) const PROJECT_CREATE_FAILED: &str = "Failed to create project. Please try again.";
pub(crate) const PROJECT_CREATED: &str = "Project created successfully!";
pub(crate) const API_KEY_COPIED: &str = "API key copied to clipboard!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum AlertKind {
    Success,
    Danger,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Alert {
    pub(crate) kind: AlertKind,
    pub(crate) message: String,
    #[serde(skip)]
    raised_at: Instant,
}

impl Alert {
    pub(crate) fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.raised_at) >= ALERT_TTL
    }
}

/// Alert container; shown alerts are dropped once expired
#[derive(Debug, Default)]
pub(crate) struct Alerts {
    items: Vec<Alert>,
}

impl Alerts {
    pub(crate) fn push(&mut self, kind: AlertKind, message: impl Into<String>) {
        self.push_at(kind, message, Instant::now());
    }

    fn push_at(&mut self, kind: AlertKind, message: impl Into<String>, now: Instant) {
        self.items.push(Alert {
            kind,
            message: message.into(),
            raised_at: now,
        });
    }

    /// Alerts still on screen at `now`; expired ones are dismissed
    pub(crate) fn visible(&mut self, now: Instant) -> &[Alert] {
        self.items.retain(|a| !a.is_expired(now));
        &self.items
    }

    pub(crate) fn has_danger(&self) -> bool {
        self.items.iter().any(|a| a.kind == AlertKind::Danger)
    }
}
