//! Daily trend tab - plays per day as a sparkline with date labels

use listenboard_core::DashboardSnapshot;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Sparkline},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, snapshot: &DashboardSnapshot) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            " ≡ Daily Plays ",
            Style::default().fg(Color::White).bold(),
        ));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let trend = &snapshot.trend;
    if trend.is_empty() {
        let empty = Paragraph::new("No listening activity recorded yet")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    let inner_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(3),    // sparkline
            Constraint::Length(1), // date labels
            Constraint::Length(1), // summary line
        ])
        .split(inner);

    let data: Vec<u64> = trend.iter().map(|p| p.plays).collect();
    let max_val = data.iter().max().copied().unwrap_or(1).max(1);

    let width = inner_chunks[0].width as usize;
    let expanded = expand_sparkline_data(&data, width);
    let sparkline = Sparkline::default()
        .data(&expanded)
        .max(max_val)
        .style(Style::default().fg(Color::Green))
        .bar_set(symbols::bar::NINE_LEVELS);
    frame.render_widget(sparkline, inner_chunks[0]);

    render_date_labels(frame, inner_chunks[1], snapshot);

    let total: u64 = data.iter().sum();
    let summary = Line::from(Span::styled(
        format!(
            "{} days · {} plays · peak {} plays/day",
            trend.len(),
            total,
            max_val
        ),
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(
        Paragraph::new(summary).alignment(Alignment::Center),
        inner_chunks[2],
    );
}

fn render_date_labels(frame: &mut Frame, area: Rect, snapshot: &DashboardSnapshot) {
    let trend = &snapshot.trend;
    let first = trend.first().map(|p| p.date.format("%Y-%m-%d").to_string());
    let last = trend.last().map(|p| p.date.format("%Y-%m-%d").to_string());

    let (Some(first), Some(last)) = (first, last) else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(first, Style::default().fg(Color::DarkGray))),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(last, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Right),
        chunks[1],
    );
}

/// Stretch sparkline samples so the chart fills the available width
fn expand_sparkline_data(data: &[u64], width: usize) -> Vec<u64> {
    if data.is_empty() || width == 0 {
        return Vec::new();
    }
    if data.len() >= width {
        return data.to_vec();
    }

    let mut expanded = Vec::with_capacity(width);
    for i in 0..width {
        let idx = i * data.len() / width;
        expanded.push(data[idx]);
    }
    expanded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_fills_width() {
        let data = [1, 2, 3];
        let out = expand_sparkline_data(&data, 9);
        assert_eq!(out.len(), 9);
        assert_eq!(out[0], 1);
        assert_eq!(out[8], 3);
    }

    #[test]
    fn test_expand_leaves_wide_data_alone() {
        let data = [5, 6, 7, 8];
        assert_eq!(expand_sparkline_data(&data, 2), vec![5, 6, 7, 8]);
    }

    #[test]
    fn test_expand_empty() {
        assert!(expand_sparkline_data(&[], 10).is_empty());
    }
}
