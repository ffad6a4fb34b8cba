//! Weekday × hour listening heatmap
//!
//! Converts the sparse time-distribution points into a dense 7×24 matrix and
//! classifies cell values into discrete intensity buckets relative to the
//! matrix-wide maximum.

use crate::models::TimeDistributionPoint;

/// Rows in the heatmap (Monday-first weekdays)
pub const WEEKDAYS: usize = 7;

/// Columns in the heatmap (hours of day)
pub const HOURS: usize = 24;

/// Intensity bucket for one heatmap cell
///
/// Ordered from coldest to hottest so classification is comparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Intensity {
    Empty,
    Low,
    Medium,
    High,
    Peak,
}

impl Intensity {
    /// Classify a cell value against the matrix-wide maximum
    ///
    /// Buckets: Empty (value or max is 0), then Low (<0.25), Medium (<0.5),
    /// High (<0.75) and Peak (>=0.75) by value/max ratio.
    pub fn classify(value: u64, max: u64) -> Self {
        if value == 0 || max == 0 {
            return Intensity::Empty;
        }

        let ratio = value as f64 / max as f64;
        if ratio < 0.25 {
            Intensity::Low
        } else if ratio < 0.5 {
            Intensity::Medium
        } else if ratio < 0.75 {
            Intensity::High
        } else {
            Intensity::Peak
        }
    }
}

/// Dense 7×24 play-count matrix with its observed maximum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatmapGrid {
    cells: [[u64; HOURS]; WEEKDAYS],
    max: u64,
}

impl HeatmapGrid {
    /// Build from sparse points
    ///
    /// Points with an out-of-range weekday or hour are silently discarded;
    /// they affect neither the matrix nor the maximum. Empty input yields an
    /// all-zero grid with max 0.
    pub fn build(points: &[TimeDistributionPoint]) -> Self {
        let mut cells = [[0u64; HOURS]; WEEKDAYS];
        let mut max = 0u64;

        for point in points {
            let weekday = point.weekday as usize;
            let hour = point.hour as usize;
            if weekday >= WEEKDAYS || hour >= HOURS {
                continue;
            }

            cells[weekday][hour] = point.count;
            max = max.max(point.count);
        }

        Self { cells, max }
    }

    /// Cell value at (weekday, hour)
    ///
    /// # Panics
    ///
    /// Panics if `weekday >= 7` or `hour >= 24`.
    pub fn cell(&self, weekday: usize, hour: usize) -> u64 {
        debug_assert!(weekday < WEEKDAYS && hour < HOURS);
        self.cells[weekday][hour]
    }

    pub fn rows(&self) -> &[[u64; HOURS]; WEEKDAYS] {
        &self.cells
    }

    pub fn max(&self) -> u64 {
        self.max
    }

    /// Intensity of a cell value relative to this grid's maximum
    pub fn intensity(&self, value: u64) -> Intensity {
        Intensity::classify(value, self.max)
    }
}
