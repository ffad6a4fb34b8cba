//! Sync orchestration
//!
//! Drives the two-phase load/resync cycle against the analytics backend and
//! is the sole writer of the dashboard snapshot. Shared `Arc`-style: the TUI
//! and CLI hold one orchestrator and read views from it, while load/resync
//! run on background tasks.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;
use parking_lot::RwLock;

use crate::client::AnalyticsClient;
use crate::dashboard::{Dashboard, DashboardView};
use crate::error::SyncError;
use crate::models::DashboardSnapshot;

/// Orchestrates load and resync, guarding against overlapping runs
pub struct SyncOrchestrator {
    client: AnalyticsClient,
    dashboard: RwLock<Dashboard>,
    busy: AtomicBool,
}

/// Clears the busy flag on every exit path
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl SyncOrchestrator {
    pub fn new(client: AnalyticsClient, user_id: Option<String>) -> Self {
        Self {
            client,
            dashboard: RwLock::new(Dashboard::new(user_id)),
            busy: AtomicBool::new(false),
        }
    }

    /// True while a load or resync is in flight
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    pub fn user_id(&self) -> Option<String> {
        self.dashboard.read().user_id().map(str::to_string)
    }

    /// Read-only view of the current dashboard state
    pub fn view(&self) -> DashboardView {
        self.dashboard.read().view()
    }

    /// Initial load: fetch the bundle without refreshing the backend first
    pub async fn initial_load(&self) -> Result<(), SyncError> {
        self.run(false).await
    }

    /// User-triggered resync: backend refresh, then a full refetch
    pub async fn resync(&self) -> Result<(), SyncError> {
        self.run(true).await
    }

    async fn run(&self, refresh_backend: bool) -> Result<(), SyncError> {
        let Some(user_id) = self.user_id() else {
            return Err(SyncError::MissingIdentity);
        };

        // Overlap is prevented, not resolved: a second request while one is
        // in flight is rejected before any I/O happens.
        if self
            .busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::debug!(user_id, "sync already in flight, rejecting");
            return Err(SyncError::AlreadySyncing);
        }
        let _busy = BusyGuard(&self.busy);

        match self.run_phases(&user_id, refresh_backend).await {
            Ok(snapshot) => {
                tracing::info!(user_id, "sync complete, committing snapshot");
                self.dashboard.write().commit(snapshot);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(user_id, error = %err.display_chain(), "sync failed");
                self.dashboard.write().record_failure(err.display_chain());
                Err(err)
            }
        }
    }

    async fn run_phases(
        &self,
        user_id: &str,
        refresh_backend: bool,
    ) -> Result<DashboardSnapshot, SyncError> {
        // Phase 1: ask the backend to refresh its stored data. A failure here
        // aborts the cycle; analytics are not re-derived from stale state.
        if refresh_backend {
            self.client
                .trigger_sync(user_id)
                .await
                .map_err(SyncError::TriggerFailed)?;
        }

        // Phase 2: all-or-nothing bundle fetch.
        let bundle = self
            .client
            .fetch_bundle(user_id)
            .await
            .map_err(SyncError::FetchFailed)?;

        Ok(DashboardSnapshot::from_bundle(bundle, Utc::now()))
    }
}
