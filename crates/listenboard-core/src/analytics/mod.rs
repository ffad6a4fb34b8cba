//! Derived analytics for the dashboard
//!
//! Pure, synchronous reductions over an already-fetched snapshot: a dense
//! weekday/hour heatmap and the headline insight values. Nothing here touches
//! the network or the shared dashboard state.

pub mod heatmap;
pub mod insights;

pub use heatmap::{HeatmapGrid, Intensity};
pub use insights::{
    most_active_weekday, rounded_longest_session_minutes, top_genre, Insights, WEEKDAY_NAMES,
};
