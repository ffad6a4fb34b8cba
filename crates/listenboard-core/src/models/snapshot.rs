//! Fetch bundle and dashboard snapshot

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::activity::{SessionRecord, TimeDistributionPoint, TrendPoint};
use super::summary::SummaryBundle;

/// The four raw payloads returned by one successful fetch cycle
///
/// Produced only as a whole: if any of the four reads fails, no bundle
/// exists. Partial bundles are unrepresentable.
#[derive(Debug, Clone)]
pub struct AnalyticsBundle {
    pub summary: SummaryBundle,
    pub trend: Vec<TrendPoint>,
    pub time_distribution: Vec<TimeDistributionPoint>,
    pub sessions: Vec<SessionRecord>,
}

/// The complete, currently-displayed set of analytics data for one user
///
/// All four data fields are present together; the dashboard holds
/// `Option<DashboardSnapshot>` so "loading" and "ready" are the only
/// observable shapes.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub summary: SummaryBundle,
    pub trend: Vec<TrendPoint>,
    pub time_distribution: Vec<TimeDistributionPoint>,
    pub sessions: Vec<SessionRecord>,
    pub last_synced_at: DateTime<Utc>,
}

impl DashboardSnapshot {
    /// Seal a fetch bundle into a snapshot, stamped with its completion time
    pub fn from_bundle(bundle: AnalyticsBundle, synced_at: DateTime<Utc>) -> Self {
        Self {
            summary: bundle.summary,
            trend: bundle.trend,
            time_distribution: bundle.time_distribution,
            sessions: bundle.sessions,
            last_synced_at: synced_at,
        }
    }
}
