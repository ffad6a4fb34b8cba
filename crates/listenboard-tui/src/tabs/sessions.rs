//! Sessions tab - longest listening sessions as a table

use listenboard_core::DashboardSnapshot;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, snapshot: &DashboardSnapshot) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            " ● Longest Sessions ",
            Style::default().fg(Color::White).bold(),
        ));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let sessions = &snapshot.sessions;
    if sessions.is_empty() {
        let empty = Paragraph::new("No listening sessions recorded yet")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    let rows: Vec<Row> = sessions
        .iter()
        .enumerate()
        .map(|(i, session)| {
            Row::new(vec![
                format!("{}", i + 1),
                session.start.format("%Y-%m-%d %H:%M").to_string(),
                session.end.format("%Y-%m-%d %H:%M").to_string(),
                format!("{:.1} min", session.duration_minutes),
                session.plays.to_string(),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Length(18),
            Constraint::Length(18),
            Constraint::Length(12),
            Constraint::Length(8),
        ],
    )
    .header(
        Row::new(vec!["#", "Start", "End", "Duration", "Plays"]).style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    )
    .column_spacing(2);

    frame.render_widget(table, inner);
}
