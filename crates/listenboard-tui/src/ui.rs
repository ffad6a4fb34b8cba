//! Top-level render dispatch
//!
//! Header with identity and sync status, tab bar, body chosen by the
//! dashboard state, footer key hints, toasts on top.

use listenboard_core::DashboardState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, Tab};
use crate::empty_state;

pub fn render(frame: &mut Frame, app: &mut App) {
    app.spinner.tick();

    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(1), // tab bar
            Constraint::Min(10),   // body
            Constraint::Length(1), // footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_tab_bar(frame, chunks[1], app.active_tab);
    render_body(frame, chunks[2], app);
    render_footer(frame, chunks[3]);

    app.toasts.render(frame, area);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(inner);

    let title = Line::from(vec![
        Span::styled(
            " ♪ listenboard ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Spotify listening analytics",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), columns[0]);

    let mut status = Vec::new();
    if let Some(user_id) = &app.view.user_id {
        status.push(Span::styled(
            format!("User #{}  ", user_id),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if app.orchestrator.is_busy() {
        status.push(app.spinner.render());
        status.push(Span::styled(" Syncing… ", Style::default().fg(Color::Green)));
    } else {
        let last_synced = app
            .view
            .snapshot
            .as_ref()
            .map(|s| s.last_synced_at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| "never".to_string());
        status.push(Span::styled(
            format!("Last synced: {} ", last_synced),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(status)).alignment(Alignment::Right),
        columns[1],
    );
}

fn render_tab_bar(frame: &mut Frame, area: Rect, active: Tab) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!(" {} {} ", i + 1, tab.name())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(active.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

fn render_body(frame: &mut Frame, area: Rect, app: &mut App) {
    match app.view.state {
        DashboardState::NoIdentity => {
            frame.render_widget(empty_state::no_identity(), area);
        }
        DashboardState::Loading => {
            render_loading(frame, area, app);
        }
        DashboardState::Error => {
            frame.render_widget(
                empty_state::load_error(app.view.last_error.as_deref()),
                area,
            );
        }
        DashboardState::Ready => {
            // Ready implies a full snapshot; all four fields are present.
            let Some(snapshot) = app.view.snapshot.as_ref() else {
                return;
            };
            match app.active_tab {
                Tab::Overview => crate::tabs::overview::render(frame, area, snapshot),
                Tab::Trend => crate::tabs::trend::render(frame, area, snapshot),
                Tab::Heatmap => crate::tabs::heatmap::render(frame, area, snapshot),
                Tab::Sessions => crate::tabs::sessions::render(frame, area, snapshot),
            }
        }
    }
}

fn render_loading(frame: &mut Frame, area: Rect, app: &App) {
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            app.spinner.render(),
            Span::styled(" Loading dashboard…", Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Fetching analytics from the backend",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let hints = Line::from(Span::styled(
        " 1-4 tabs · Tab/Shift-Tab cycle · r resync · q quit",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(hints), area);
}
