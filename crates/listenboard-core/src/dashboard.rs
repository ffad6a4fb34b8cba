//! Dashboard state machine
//!
//! Owns the identity and the authoritative snapshot. States:
//! `NoIdentity` (terminal) -> `Loading` -> `Ready`; `Error` is reachable from
//! `Loading`. A failed resync from `Ready` keeps the prior snapshot and only
//! records a non-fatal error message; Ready never regresses to Loading.
//!
//! All mutation funnels through `commit` and `record_failure`, which only the
//! sync orchestrator calls.

use crate::models::DashboardSnapshot;

/// Lifecycle state of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardState {
    /// No user identity resolvable from the invocation context. Terminal.
    NoIdentity,
    /// Identity known, snapshot not yet loaded.
    Loading,
    /// Snapshot present in full.
    Ready,
    /// Initial load failed; no snapshot to show.
    Error,
}

/// Dashboard state: identity, lifecycle, snapshot, last failure
#[derive(Debug)]
pub struct Dashboard {
    user_id: Option<String>,
    state: DashboardState,
    snapshot: Option<DashboardSnapshot>,
    last_error: Option<String>,
}

impl Dashboard {
    /// Resolve identity once at startup; absence is permanent for the session
    pub fn new(user_id: Option<String>) -> Self {
        let state = match user_id {
            Some(_) => DashboardState::Loading,
            None => DashboardState::NoIdentity,
        };

        Self {
            user_id,
            state,
            snapshot: None,
            last_error: None,
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn state(&self) -> DashboardState {
        self.state
    }

    pub fn snapshot(&self) -> Option<&DashboardSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Replace the snapshot wholesale. The only path to `Ready`.
    pub(crate) fn commit(&mut self, snapshot: DashboardSnapshot) {
        if self.state == DashboardState::NoIdentity {
            return;
        }

        self.snapshot = Some(snapshot);
        self.state = DashboardState::Ready;
        self.last_error = None;
    }

    /// Record a failed load or resync
    ///
    /// From `Ready` the snapshot stays in place and only the message is
    /// recorded; otherwise the dashboard enters the `Error` state.
    pub(crate) fn record_failure(&mut self, message: String) {
        match self.state {
            DashboardState::NoIdentity => {}
            DashboardState::Ready => {
                self.last_error = Some(message);
            }
            DashboardState::Loading | DashboardState::Error => {
                self.state = DashboardState::Error;
                self.last_error = Some(message);
            }
        }
    }

    /// Cloneable read-only view for the display layer
    pub fn view(&self) -> DashboardView {
        DashboardView {
            user_id: self.user_id.clone(),
            state: self.state,
            snapshot: self.snapshot.clone(),
            last_error: self.last_error.clone(),
        }
    }
}

/// Owned, read-only view of the dashboard handed to the display layer
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub user_id: Option<String>,
    pub state: DashboardState,
    pub snapshot: Option<DashboardSnapshot>,
    pub last_error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnalyticsBundle, SummaryBundle};
    use chrono::Utc;

    fn empty_snapshot() -> DashboardSnapshot {
        DashboardSnapshot::from_bundle(
            AnalyticsBundle {
                summary: SummaryBundle {
                    total_tracks: 0,
                    total_plays: 0,
                    top_artists: Vec::new(),
                    top_genres: Vec::new(),
                },
                trend: Vec::new(),
                time_distribution: Vec::new(),
                sessions: Vec::new(),
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_missing_identity_is_terminal() {
        let mut dashboard = Dashboard::new(None);
        assert_eq!(dashboard.state(), DashboardState::NoIdentity);

        dashboard.commit(empty_snapshot());
        dashboard.record_failure("boom".to_string());

        assert_eq!(dashboard.state(), DashboardState::NoIdentity);
        assert!(dashboard.snapshot().is_none());
        assert!(dashboard.last_error().is_none());
    }

    #[test]
    fn test_loading_to_ready_on_commit() {
        let mut dashboard = Dashboard::new(Some("42".to_string()));
        assert_eq!(dashboard.state(), DashboardState::Loading);
        assert!(dashboard.snapshot().is_none());

        dashboard.commit(empty_snapshot());
        assert_eq!(dashboard.state(), DashboardState::Ready);
        assert!(dashboard.snapshot().is_some());
    }

    #[test]
    fn test_loading_failure_enters_error_state() {
        let mut dashboard = Dashboard::new(Some("42".to_string()));
        dashboard.record_failure("fetch failed".to_string());

        assert_eq!(dashboard.state(), DashboardState::Error);
        assert_eq!(dashboard.last_error(), Some("fetch failed"));
        assert!(dashboard.snapshot().is_none());
    }

    #[test]
    fn test_ready_survives_resync_failure() {
        let mut dashboard = Dashboard::new(Some("42".to_string()));
        dashboard.commit(empty_snapshot());
        let synced_at = dashboard.snapshot().unwrap().last_synced_at;

        dashboard.record_failure("resync failed".to_string());

        // State and snapshot untouched, error surfaced as a notification
        assert_eq!(dashboard.state(), DashboardState::Ready);
        assert_eq!(dashboard.snapshot().unwrap().last_synced_at, synced_at);
        assert_eq!(dashboard.last_error(), Some("resync failed"));
    }

    #[test]
    fn test_successful_resync_clears_previous_error() {
        let mut dashboard = Dashboard::new(Some("42".to_string()));
        dashboard.commit(empty_snapshot());
        dashboard.record_failure("transient".to_string());

        dashboard.commit(empty_snapshot());
        assert!(dashboard.last_error().is_none());
        assert_eq!(dashboard.state(), DashboardState::Ready);
    }

    #[test]
    fn test_error_state_recoverable_by_commit() {
        let mut dashboard = Dashboard::new(Some("42".to_string()));
        dashboard.record_failure("first load failed".to_string());
        assert_eq!(dashboard.state(), DashboardState::Error);

        dashboard.commit(empty_snapshot());
        assert_eq!(dashboard.state(), DashboardState::Ready);
    }
}
