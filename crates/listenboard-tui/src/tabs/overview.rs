//! Overview tab - insight cards, library totals, top artists and genres

use listenboard_core::{DashboardSnapshot, Insights};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, snapshot: &DashboardSnapshot) {
    let insights = Insights::derive(snapshot);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(5), // insight cards
            Constraint::Length(5), // library totals
            Constraint::Min(8),    // top artists / genres
        ])
        .split(area);

    render_insight_row(frame, chunks[0], &insights);
    render_totals_row(frame, chunks[1], snapshot);
    render_rankings(frame, chunks[2], snapshot);
}

fn render_insight_row(frame: &mut Frame, area: Rect, insights: &Insights) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let weekday = insights
        .most_active_weekday
        .map(str::to_string)
        .unwrap_or_else(|| "N/A".to_string());
    let session = insights
        .longest_session_minutes
        .map(|m| format!("{} min", m))
        .unwrap_or_else(|| "N/A".to_string());
    let genre = insights
        .top_genre
        .clone()
        .unwrap_or_else(|| "N/A".to_string());

    render_stat_card(
        frame,
        chunks[0],
        "◆ Most listened day",
        &weekday,
        Color::Cyan,
        "by total plays",
    );
    render_stat_card(
        frame,
        chunks[1],
        "● Longest session",
        &session,
        Color::Green,
        "single sitting",
    );
    render_stat_card(
        frame,
        chunks[2],
        "♪ Top genre",
        &genre,
        Color::Magenta,
        "by play count",
    );
}

fn render_totals_row(frame: &mut Frame, area: Rect, snapshot: &DashboardSnapshot) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let summary = &snapshot.summary;
    let top_artist = summary
        .top_artist()
        .map(str::to_string)
        .unwrap_or_else(|| "N/A".to_string());

    render_stat_card(
        frame,
        chunks[0],
        "▶ Tracks",
        &summary.total_tracks.to_string(),
        Color::Yellow,
        "in library",
    );
    render_stat_card(
        frame,
        chunks[1],
        "≡ Plays",
        &summary.total_plays.to_string(),
        Color::Blue,
        "all time",
    );
    render_stat_card(
        frame,
        chunks[2],
        "★ Top artist",
        &top_artist,
        Color::Green,
        "most played",
    );
}

fn render_stat_card(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    color: Color,
    subtitle: &str,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(color).bold(),
        ));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let inner_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // value
            Constraint::Length(1), // subtitle
            Constraint::Min(0),
        ])
        .split(inner);

    let value_widget = Paragraph::new(Line::from(Span::styled(
        value.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(value_widget, inner_chunks[0]);

    let subtitle_widget = Paragraph::new(Line::from(Span::styled(
        subtitle.to_string(),
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(subtitle_widget, inner_chunks[1]);
}

fn render_rankings(frame: &mut Frame, area: Rect, snapshot: &DashboardSnapshot) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let artists: Vec<(String, u64)> = snapshot
        .summary
        .top_artists
        .iter()
        .map(|a| (a.artist_name.clone(), a.play_count))
        .collect();
    let genres: Vec<(String, u64)> = snapshot
        .summary
        .top_genres
        .iter()
        .map(|g| (g.genre.clone(), g.count))
        .collect();

    render_gauge_list(frame, chunks[0], " ★ Top Artists ", &artists, "plays");
    render_gauge_list(frame, chunks[1], " ♪ Top Genres ", &genres, "plays");
}

fn render_gauge_list(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    entries: &[(String, u64)],
    unit: &str,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(title, Style::default().fg(Color::White).bold()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if entries.is_empty() {
        let no_data = Paragraph::new("No data available")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(no_data, inner);
        return;
    }

    let max_visible = (inner.height.saturating_sub(2) / 2).max(1) as usize;
    let visible: Vec<_> = entries.iter().take(max_visible).collect();

    // Entries arrive pre-ranked, so the first one carries the max
    let max_count = visible.first().map(|(_, n)| *n).unwrap_or(1).max(1);

    let constraints: Vec<Constraint> = visible.iter().map(|_| Constraint::Length(2)).collect();
    let gauge_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(constraints)
        .split(inner);

    let colors = [
        Color::Green,
        Color::Cyan,
        Color::Magenta,
        Color::Yellow,
        Color::Blue,
    ];

    for (i, ((name, count), chunk)) in visible.iter().zip(gauge_chunks.iter()).enumerate() {
        let pct = (*count as f64 / max_count as f64 * 100.0) as u16;
        let color = colors[i % colors.len()];

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(color).bg(Color::DarkGray))
            .percent(pct.min(100))
            .label(Span::styled(
                format!("{:<24} {:>6} {}", truncate(name, 24), count, unit),
                Style::default().fg(Color::White).bold(),
            ));

        frame.render_widget(gauge, *chunk);
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_keeps_short_names() {
        assert_eq!(truncate("Radiohead", 24), "Radiohead");
    }

    #[test]
    fn test_truncate_long_names() {
        let long = "A Band With An Extremely Long Name Indeed";
        let out = truncate(long, 10);
        assert_eq!(out.chars().count(), 10);
        assert!(out.ends_with('…'));
    }
}
