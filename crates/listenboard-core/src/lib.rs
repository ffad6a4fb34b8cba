//! listenboard-core - Core library for listenboard
//!
//! Provides the analytics backend client, derived view-model computations,
//! and the sync orchestration that keeps the dashboard snapshot fresh.

pub mod analytics;
pub mod client;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod sync;

pub use analytics::{HeatmapGrid, Insights, Intensity};
pub use client::{AnalyticsClient, ClientConfig};
pub use dashboard::{Dashboard, DashboardState, DashboardView};
pub use error::{ClientError, SyncError};
pub use models::{AnalyticsBundle, DashboardSnapshot};
pub use sync::SyncOrchestrator;
