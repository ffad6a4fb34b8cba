//! Data models for analytics backend payloads and the dashboard snapshot

pub mod activity;
pub mod snapshot;
pub mod summary;

pub use activity::{
    SessionRecord, SessionsResponse, TimeDistributionPoint, TimeDistributionResponse, TrendPoint,
    TrendResponse,
};
pub use snapshot::{AnalyticsBundle, DashboardSnapshot};
pub use summary::{ArtistPlays, GenreCount, SummaryBundle};
