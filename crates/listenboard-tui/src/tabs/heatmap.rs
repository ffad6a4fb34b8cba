//! Heatmap tab - weekday by hour listening activity grid

use listenboard_core::{DashboardSnapshot, HeatmapGrid, Intensity};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Cell width in characters; two columns make the grid read roughly square
const CELL_WIDTH: usize = 2;

pub fn render(frame: &mut Frame, area: Rect, snapshot: &DashboardSnapshot) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            " ◈ Listening Heatmap ",
            Style::default().fg(Color::White).bold(),
        ));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let grid = HeatmapGrid::build(&snapshot.time_distribution);

    if grid.max() == 0 {
        let empty = Paragraph::new("No listening activity recorded yet")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // hour axis
            Constraint::Length(7), // 7 weekday rows
            Constraint::Length(1), // spacer
            Constraint::Length(1), // legend
            Constraint::Min(0),
        ])
        .split(inner);

    render_hour_axis(frame, chunks[0]);
    render_grid(frame, chunks[1], &grid);
    render_legend(frame, chunks[3]);
}

fn render_hour_axis(frame: &mut Frame, area: Rect) {
    // Hour markers every three hours, aligned over the grid cells
    let mut axis = String::from("    ");
    for hour in 0..24 {
        if hour % 3 == 0 {
            axis.push_str(&format!("{:<width$}", hour, width = CELL_WIDTH * 3));
        }
    }
    axis.truncate(4 + 24 * CELL_WIDTH);

    frame.render_widget(
        Paragraph::new(Span::styled(axis, Style::default().fg(Color::DarkGray))),
        area,
    );
}

fn render_grid(frame: &mut Frame, area: Rect, grid: &HeatmapGrid) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); 7])
        .split(area);

    for (weekday, row_area) in rows.iter().enumerate() {
        let mut spans = vec![Span::styled(
            format!("{:<4}", DAY_LABELS[weekday]),
            Style::default().fg(Color::DarkGray),
        )];

        for hour in 0..24 {
            let intensity = grid.intensity(grid.cell(weekday, hour));
            spans.push(Span::styled(
                " ".repeat(CELL_WIDTH),
                Style::default().bg(intensity_color(intensity)),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), *row_area);
    }
}

fn render_legend(frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::styled("    Less ", Style::default().fg(Color::DarkGray))];
    for intensity in [
        Intensity::Empty,
        Intensity::Low,
        Intensity::Medium,
        Intensity::High,
        Intensity::Peak,
    ] {
        spans.push(Span::styled(
            "  ",
            Style::default().bg(intensity_color(intensity)),
        ));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("More", Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn intensity_color(intensity: Intensity) -> Color {
    match intensity {
        Intensity::Empty => Color::Rgb(17, 24, 39),
        Intensity::Low => Color::Rgb(6, 78, 59),
        Intensity::Medium => Color::Rgb(4, 120, 87),
        Intensity::High => Color::Rgb(16, 185, 129),
        Intensity::Peak => Color::Rgb(52, 211, 153),
    }
}
