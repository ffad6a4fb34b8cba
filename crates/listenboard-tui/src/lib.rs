//! listenboard-tui - TUI frontend for listenboard using Ratatui

pub mod app;
pub mod components;
pub mod empty_state;
pub mod tabs;
pub mod ui;

pub use app::App;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use listenboard_core::SyncOrchestrator;
use ratatui::prelude::*;
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// Run the TUI application
pub async fn run(orchestrator: Arc<SyncOrchestrator>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(orchestrator);

    // Kick off the initial load in the background; the loading screen shows
    // until the snapshot commits.
    app.start_initial_load();

    let result = run_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        // Drain completed sync outcomes and refresh the dashboard view
        app.poll_sync();

        terminal.draw(|f| ui::render(f, app))?;

        // Handle input with timeout for event polling
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
