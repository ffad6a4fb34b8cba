//! Summary payload: aggregate counts and top-N rankings
//!
//! Returned by `GET /analytics/summary`. The `top_artists` and `top_genres`
//! sequences arrive sorted descending by count; the first element is the top
//! entry. That ordering is an upstream contract and is not re-validated here.

use serde::{Deserialize, Serialize};

/// One artist with its play count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistPlays {
    pub artist_name: String,
    pub play_count: u64,
}

/// One genre with its occurrence count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreCount {
    pub genre: String,
    pub count: u64,
}

/// Aggregate listening summary for one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryBundle {
    pub total_tracks: u64,
    pub total_plays: u64,
    #[serde(default)]
    pub top_artists: Vec<ArtistPlays>,
    #[serde(default)]
    pub top_genres: Vec<GenreCount>,
}

impl SummaryBundle {
    /// Display name of the most played artist, if any
    pub fn top_artist(&self) -> Option<&str> {
        self.top_artists.first().map(|a| a.artist_name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_deserializes_backend_payload() {
        let json = r#"{
            "total_tracks": 120,
            "total_plays": 987,
            "top_artists": [
                {"artist_name": "Radiohead", "play_count": 40},
                {"artist_name": "Portishead", "play_count": 22}
            ],
            "top_genres": [
                {"genre": "art rock", "count": 55},
                {"genre": "trip hop", "count": 30}
            ]
        }"#;

        let summary: SummaryBundle = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_tracks, 120);
        assert_eq!(summary.total_plays, 987);
        assert_eq!(summary.top_artists.len(), 2);
        assert_eq!(summary.top_artist(), Some("Radiohead"));
        assert_eq!(summary.top_genres[0].genre, "art rock");
    }

    #[test]
    fn test_summary_tolerates_missing_rankings() {
        // Backend omits rankings for users with no history rows
        let json = r#"{"total_tracks": 0, "total_plays": 0}"#;
        let summary: SummaryBundle = serde_json::from_str(json).unwrap();
        assert!(summary.top_artists.is_empty());
        assert!(summary.top_artist().is_none());
    }
}
