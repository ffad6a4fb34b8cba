//! Headline insight values
//!
//! Single-value derivations shown as stat cards: most active weekday, longest
//! session duration, top genre. Each tolerates empty input by returning
//! `None`; the display layer renders that as "N/A".

use serde::Serialize;

use crate::models::{DashboardSnapshot, SessionRecord, SummaryBundle, TimeDistributionPoint};

/// Weekday display names, Monday-first to match the backend's weekday index
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Weekday with the highest summed play count
///
/// Pure sum-then-argmax, so the result is invariant to the ordering of the
/// input points. Ties resolve to the earliest weekday.
pub fn most_active_weekday(points: &[TimeDistributionPoint]) -> Option<&'static str> {
    if points.is_empty() {
        return None;
    }

    let mut totals = [0u64; 7];
    for point in points {
        let weekday = point.weekday as usize;
        if weekday < totals.len() {
            totals[weekday] += point.count;
        }
    }

    // First occurrence wins on ties
    let mut best = 0;
    for (idx, &total) in totals.iter().enumerate() {
        if total > totals[best] {
            best = idx;
        }
    }

    Some(WEEKDAY_NAMES[best])
}

/// Duration of the longest session, rounded to whole minutes
///
/// The sessions sequence is pre-sorted descending by duration upstream, so
/// this reads the first record rather than scanning for a maximum.
pub fn rounded_longest_session_minutes(sessions: &[SessionRecord]) -> Option<u64> {
    sessions
        .first()
        .map(|session| session.duration_minutes.round() as u64)
}

/// Most frequent genre
///
/// `top_genres` is pre-sorted descending by count upstream; the first entry
/// is the answer.
pub fn top_genre(summary: &SummaryBundle) -> Option<&str> {
    summary.top_genres.first().map(|g| g.genre.as_str())
}

/// All three headline insights derived from one snapshot
#[derive(Debug, Clone, Default, Serialize)]
pub struct Insights {
    pub most_active_weekday: Option<&'static str>,
    pub longest_session_minutes: Option<u64>,
    pub top_genre: Option<String>,
}

impl Insights {
    pub fn derive(snapshot: &DashboardSnapshot) -> Self {
        Self {
            most_active_weekday: most_active_weekday(&snapshot.time_distribution),
            longest_session_minutes: rounded_longest_session_minutes(&snapshot.sessions),
            top_genre: top_genre(&snapshot.summary).map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GenreCount;
    use chrono::NaiveDate;

    fn point(weekday: u8, hour: u8, count: u64) -> TimeDistributionPoint {
        TimeDistributionPoint {
            weekday,
            hour,
            count,
        }
    }

    fn session(duration_minutes: f64) -> SessionRecord {
        let start = NaiveDate::from_ymd_opt(2025, 8, 20)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap();
        SessionRecord {
            start,
            end: start + chrono::Duration::minutes(duration_minutes as i64),
            duration_minutes,
            plays: 10,
        }
    }

    #[test]
    fn test_most_active_weekday_sums_across_hours() {
        // Friday: 4+4=8, Monday: 7
        let weekday = most_active_weekday(&[point(0, 9, 7), point(4, 10, 4), point(4, 23, 4)]);
        assert_eq!(weekday, Some("Friday"));
    }

    #[test]
    fn test_most_active_weekday_order_invariant() {
        let mut points = vec![point(2, 1, 3), point(5, 14, 9), point(2, 20, 5), point(1, 7, 8)];
        let forward = most_active_weekday(&points);
        points.reverse();
        let reversed = most_active_weekday(&points);

        assert_eq!(forward, Some("Saturday"));
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_most_active_weekday_tie_takes_earliest() {
        let weekday = most_active_weekday(&[point(6, 1, 5), point(1, 1, 5)]);
        assert_eq!(weekday, Some("Tuesday"));
    }

    #[test]
    fn test_most_active_weekday_empty_input() {
        assert_eq!(most_active_weekday(&[]), None);
    }

    #[test]
    fn test_most_active_weekday_ignores_out_of_range() {
        let weekday = most_active_weekday(&[point(9, 1, 100), point(3, 1, 1)]);
        assert_eq!(weekday, Some("Thursday"));
    }

    #[test]
    fn test_longest_session_rounds_first_element() {
        // First element is the contract, even if a later one were larger
        let minutes = rounded_longest_session_minutes(&[session(42.7), session(10.0)]);
        assert_eq!(minutes, Some(43));
    }

    #[test]
    fn test_longest_session_empty() {
        assert_eq!(rounded_longest_session_minutes(&[]), None);
    }

    #[test]
    fn test_top_genre_takes_first() {
        let summary = SummaryBundle {
            total_tracks: 10,
            total_plays: 50,
            top_artists: Vec::new(),
            top_genres: vec![
                GenreCount {
                    genre: "pop".to_string(),
                    count: 5,
                },
                GenreCount {
                    genre: "rock".to_string(),
                    count: 2,
                },
            ],
        };

        assert_eq!(top_genre(&summary), Some("pop"));
    }

    #[test]
    fn test_top_genre_empty() {
        let summary = SummaryBundle {
            total_tracks: 0,
            total_plays: 0,
            top_artists: Vec::new(),
            top_genres: Vec::new(),
        };

        assert_eq!(top_genre(&summary), None);
    }
}
