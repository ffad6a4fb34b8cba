//! Terminal output formatting for the non-interactive commands
//!
//! Renders the dashboard snapshot as comfy-table tables (human) or JSON
//! (machine). Colors can be disabled for log-friendly output.

use comfy_table::{Cell, Color, ContentArrangement, Table};
use listenboard_core::{DashboardSnapshot, Insights};
use serde_json::json;

/// Format the stats summary: totals, insights, rankings
pub fn format_stats(snapshot: &DashboardSnapshot, json_output: bool, no_color: bool) -> String {
    let insights = Insights::derive(snapshot);

    if json_output {
        let value = json!({
            "summary": snapshot.summary,
            "insights": insights,
            "last_synced_at": snapshot.last_synced_at,
        });
        return serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string());
    }

    let mut out = String::new();

    out.push_str(&format_totals_table(snapshot, &insights, no_color));
    out.push('\n');

    if !snapshot.summary.top_artists.is_empty() {
        out.push('\n');
        out.push_str(&format_ranking_table(
            "Artist",
            snapshot
                .summary
                .top_artists
                .iter()
                .map(|a| (a.artist_name.as_str(), a.play_count)),
            no_color,
        ));
        out.push('\n');
    }

    if !snapshot.summary.top_genres.is_empty() {
        out.push('\n');
        out.push_str(&format_ranking_table(
            "Genre",
            snapshot
                .summary
                .top_genres
                .iter()
                .map(|g| (g.genre.as_str(), g.count)),
            no_color,
        ));
        out.push('\n');
    }

    out
}

fn format_totals_table(
    snapshot: &DashboardSnapshot,
    insights: &Insights,
    no_color: bool,
) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let rows: Vec<(&str, String)> = vec![
        ("Total tracks", snapshot.summary.total_tracks.to_string()),
        ("Total plays", snapshot.summary.total_plays.to_string()),
        (
            "Most listened day",
            insights
                .most_active_weekday
                .map(str::to_string)
                .unwrap_or_else(|| "N/A".to_string()),
        ),
        (
            "Longest session",
            insights
                .longest_session_minutes
                .map(|m| format!("{} min", m))
                .unwrap_or_else(|| "N/A".to_string()),
        ),
        (
            "Top genre",
            insights
                .top_genre
                .clone()
                .unwrap_or_else(|| "N/A".to_string()),
        ),
        (
            "Last synced",
            snapshot
                .last_synced_at
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
        ),
    ];

    for (label, value) in rows {
        if no_color {
            table.add_row(vec![label.to_string(), value]);
        } else {
            table.add_row(vec![Cell::new(label).fg(Color::Cyan), Cell::new(value)]);
        }
    }

    table.to_string()
}

fn format_ranking_table<'a>(
    label: &str,
    entries: impl Iterator<Item = (&'a str, u64)>,
    no_color: bool,
) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if no_color {
        table.set_header(vec!["#", label, "Plays"]);
    } else {
        table.set_header(vec![
            Cell::new("#").fg(Color::Cyan),
            Cell::new(label).fg(Color::Cyan),
            Cell::new("Plays").fg(Color::Cyan),
        ]);
    }

    for (i, (name, count)) in entries.enumerate() {
        table.add_row(vec![(i + 1).to_string(), name.to_string(), count.to_string()]);
    }

    table.to_string()
}

/// Format the sessions list as a table (human) or JSON
pub fn format_sessions(snapshot: &DashboardSnapshot, json_output: bool, no_color: bool) -> String {
    if json_output {
        return serde_json::to_string_pretty(&snapshot.sessions)
            .unwrap_or_else(|_| "[]".to_string());
    }

    if snapshot.sessions.is_empty() {
        return "No listening sessions recorded.".to_string();
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if no_color {
        table.set_header(vec!["#", "Start", "End", "Duration", "Plays"]);
    } else {
        table.set_header(vec![
            Cell::new("#").fg(Color::Cyan),
            Cell::new("Start").fg(Color::Cyan),
            Cell::new("End").fg(Color::Cyan),
            Cell::new("Duration").fg(Color::Cyan),
            Cell::new("Plays").fg(Color::Cyan),
        ]);
    }

    for (i, session) in snapshot.sessions.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            session.start.format("%Y-%m-%d %H:%M").to_string(),
            session.end.format("%Y-%m-%d %H:%M").to_string(),
            format!("{:.1} min", session.duration_minutes),
            session.plays.to_string(),
        ]);
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use listenboard_core::models::{
        ArtistPlays, GenreCount, SessionRecord, SummaryBundle, TimeDistributionPoint, TrendPoint,
    };

    fn snapshot() -> DashboardSnapshot {
        let start = NaiveDate::from_ymd_opt(2025, 8, 20)
            .unwrap()
            .and_hms_opt(21, 0, 0)
            .unwrap();

        DashboardSnapshot {
            summary: SummaryBundle {
                total_tracks: 42,
                total_plays: 310,
                top_artists: vec![ArtistPlays {
                    artist_name: "Radiohead".to_string(),
                    play_count: 40,
                }],
                top_genres: vec![GenreCount {
                    genre: "art rock".to_string(),
                    count: 55,
                }],
            },
            trend: vec![TrendPoint {
                date: NaiveDate::from_ymd_opt(2025, 8, 20).unwrap(),
                plays: 12,
            }],
            time_distribution: vec![TimeDistributionPoint {
                weekday: 4,
                hour: 21,
                count: 9,
            }],
            sessions: vec![SessionRecord {
                start,
                end: start + chrono::Duration::minutes(98),
                duration_minutes: 97.85,
                plays: 31,
            }],
            last_synced_at: Utc.with_ymd_and_hms(2025, 8, 21, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_format_stats_table_contains_insights() {
        let out = format_stats(&snapshot(), false, true);
        assert!(out.contains("Friday"));
        assert!(out.contains("98 min"));
        assert!(out.contains("art rock"));
        assert!(out.contains("Radiohead"));
    }

    #[test]
    fn test_format_stats_json_is_valid() {
        let out = format_stats(&snapshot(), true, false);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["summary"]["total_plays"], 310);
        assert_eq!(value["insights"]["most_active_weekday"], "Friday");
        assert_eq!(value["insights"]["longest_session_minutes"], 98);
    }

    #[test]
    fn test_format_sessions_table() {
        let out = format_sessions(&snapshot(), false, true);
        assert!(out.contains("2025-08-20 21:00"));
        assert!(out.contains("97.9 min"));
        assert!(out.contains("31"));
    }

    #[test]
    fn test_format_sessions_empty() {
        let mut snap = snapshot();
        snap.sessions.clear();
        let out = format_sessions(&snap, false, true);
        assert_eq!(out, "No listening sessions recorded.");
    }

    #[test]
    fn test_format_sessions_json_roundtrips() {
        let out = format_sessions(&snapshot(), true, false);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 1);
        assert_eq!(value[0]["plays"], 31);
    }
}
