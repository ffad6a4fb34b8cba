//! TUI application state and sync task plumbing

use listenboard_core::{DashboardState, DashboardView, SyncOrchestrator};
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::components::spinner::Spinner;
use crate::components::toast::{Toast, ToastManager};

/// Active tab in the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Trend,
    Heatmap,
    Sessions,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Overview, Tab::Trend, Tab::Heatmap, Tab::Sessions]
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Overview => 0,
            Tab::Trend => 1,
            Tab::Heatmap => 2,
            Tab::Sessions => 3,
        }
    }

    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Tab::Overview,
            1 => Tab::Trend,
            2 => Tab::Heatmap,
            3 => Tab::Sessions,
            _ => Tab::Overview,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Trend => "Daily Trend",
            Tab::Heatmap => "Heatmap",
            Tab::Sessions => "Sessions",
        }
    }
}

/// Which orchestration a completed background task ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncKind {
    Initial,
    Resync,
}

/// Completion notice from a background sync task
#[derive(Debug)]
pub struct SyncOutcome {
    pub kind: SyncKind,
    pub error: Option<String>,
}

/// TUI application state
pub struct App {
    /// Shared sync orchestrator (sole snapshot writer)
    pub orchestrator: Arc<SyncOrchestrator>,

    /// Dashboard view refreshed every frame
    pub view: DashboardView,

    /// Currently active tab
    pub active_tab: Tab,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Toast notifications
    pub toasts: ToastManager,

    /// Spinner shown while loading or syncing
    pub spinner: Spinner,

    outcome_tx: mpsc::UnboundedSender<SyncOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<SyncOutcome>,
}

impl App {
    pub fn new(orchestrator: Arc<SyncOrchestrator>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let view = orchestrator.view();

        Self {
            orchestrator,
            view,
            active_tab: Tab::Overview,
            should_quit: false,
            toasts: ToastManager::new(),
            spinner: Spinner::new(),
            outcome_tx,
            outcome_rx,
        }
    }

    /// Spawn the initial load task, unless there is no identity to load for
    pub fn start_initial_load(&self) {
        if self.view.state == DashboardState::NoIdentity {
            return;
        }
        self.spawn_sync(SyncKind::Initial);
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: crossterm::event::KeyCode) {
        use crossterm::event::KeyCode;

        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('r') => {
                self.trigger_resync();
            }
            KeyCode::Tab => {
                self.next_tab();
            }
            KeyCode::BackTab => {
                self.prev_tab();
            }
            KeyCode::Char(c) if ('1'..='4').contains(&c) => {
                let idx = (c as usize) - ('1' as usize);
                self.active_tab = Tab::from_index(idx);
            }
            _ => {}
        }
    }

    /// Request a resync; no effect while busy or without an identity
    pub fn trigger_resync(&mut self) {
        if self.view.state == DashboardState::NoIdentity {
            return;
        }
        if self.orchestrator.is_busy() {
            self.toasts.push(Toast::info("Sync already in progress"));
            return;
        }
        self.spawn_sync(SyncKind::Resync);
    }

    fn spawn_sync(&self, kind: SyncKind) {
        let orchestrator = Arc::clone(&self.orchestrator);
        let tx = self.outcome_tx.clone();

        tokio::spawn(async move {
            let result = match kind {
                SyncKind::Initial => orchestrator.initial_load().await,
                SyncKind::Resync => orchestrator.resync().await,
            };
            if let Err(err) = &result {
                tracing::warn!(?kind, error = %err.display_chain(), "sync task failed");
            }
            let error = result.err().map(|e| e.display_chain());
            let _ = tx.send(SyncOutcome { kind, error });
        });
    }

    /// Drain completed sync outcomes (non-blocking) and refresh the view
    pub fn poll_sync(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            match (outcome.kind, outcome.error) {
                (SyncKind::Resync, None) => {
                    self.toasts.push(Toast::success("Resynced from Spotify"));
                }
                (SyncKind::Resync, Some(message)) => {
                    // Prior Ready snapshot is untouched; only notify
                    self.toasts.push(Toast::error(message));
                }
                // Initial-load outcomes drive the screen via the state
                // machine, no toast needed.
                (SyncKind::Initial, _) => {}
            }
        }

        self.view = self.orchestrator.view();
    }

    fn next_tab(&mut self) {
        let idx = self.active_tab.index();
        self.active_tab = Tab::from_index((idx + 1) % Tab::all().len());
    }

    fn prev_tab(&mut self) {
        let idx = self.active_tab.index();
        self.active_tab = Tab::from_index((idx + Tab::all().len() - 1) % Tab::all().len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use listenboard_core::{AnalyticsClient, ClientConfig};

    fn test_app(user_id: Option<&str>) -> App {
        let client = AnalyticsClient::new(ClientConfig::default()).unwrap();
        let orchestrator = Arc::new(SyncOrchestrator::new(
            client,
            user_id.map(str::to_string),
        ));
        App::new(orchestrator)
    }

    #[tokio::test]
    async fn test_tab_cycling_wraps() {
        let mut app = test_app(Some("42"));
        assert_eq!(app.active_tab, Tab::Overview);

        for _ in 0..Tab::all().len() {
            app.handle_key(KeyCode::Tab);
        }
        assert_eq!(app.active_tab, Tab::Overview);

        app.handle_key(KeyCode::BackTab);
        assert_eq!(app.active_tab, Tab::Sessions);
    }

    #[tokio::test]
    async fn test_numeric_shortcuts() {
        let mut app = test_app(Some("42"));
        app.handle_key(KeyCode::Char('3'));
        assert_eq!(app.active_tab, Tab::Heatmap);
        app.handle_key(KeyCode::Char('1'));
        assert_eq!(app.active_tab, Tab::Overview);
    }

    #[tokio::test]
    async fn test_quit_keys() {
        let mut app = test_app(Some("42"));
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_resync_is_noop_without_identity() {
        let mut app = test_app(None);
        app.trigger_resync();
        app.start_initial_load();

        // No task was spawned, so no outcome ever arrives
        assert!(app.outcome_rx.try_recv().is_err());
        assert_eq!(app.view.state, DashboardState::NoIdentity);
    }
}
