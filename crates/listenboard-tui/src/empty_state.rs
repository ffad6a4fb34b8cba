//! Full-screen states for the dashboard lifecycle
//!
//! No-identity, loading and load-error screens shown instead of tab content.

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Builder for centered full-screen messages
pub struct EmptyState {
    title: String,
    message: Vec<String>,
    actions: Vec<(String, String)>, // (key, description)
}

impl EmptyState {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn message(mut self, msg: impl Into<String>) -> Self {
        self.message.push(msg.into());
        self
    }

    pub fn action(mut self, key: impl Into<String>, description: impl Into<String>) -> Self {
        self.actions.push((key.into(), description.into()));
        self
    }

    pub fn build(self) -> Paragraph<'static> {
        let mut lines = Vec::new();

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            self.title,
            Style::default().fg(Color::Yellow),
        )));
        lines.push(Line::from(""));

        for msg in self.message {
            lines.push(Line::from(Span::styled(
                msg,
                Style::default().fg(Color::DarkGray),
            )));
        }

        if !self.actions.is_empty() {
            lines.push(Line::from(""));
            for (key, desc) in self.actions {
                lines.push(Line::from(vec![
                    Span::styled("  [", Style::default().fg(Color::DarkGray)),
                    Span::styled(key, Style::default().fg(Color::Green)),
                    Span::styled("] ", Style::default().fg(Color::DarkGray)),
                    Span::styled(desc, Style::default().fg(Color::White)),
                ]));
            }
        }

        Paragraph::new(lines).alignment(Alignment::Center)
    }
}

/// No user id resolvable from the invocation context. Terminal for the session.
pub fn no_identity() -> Paragraph<'static> {
    EmptyState::new("No user id found")
        .message("Start listenboard with a Spotify user id:")
        .message("  listenboard --user-id <id>")
        .message("")
        .message("Or set LISTENBOARD_USER_ID in the environment.")
        .action("q", "Quit")
        .build()
}

/// Initial load failed; nothing to show yet
pub fn load_error(detail: Option<&str>) -> Paragraph<'static> {
    let mut state = EmptyState::new("Error loading data");

    if let Some(detail) = detail {
        state = state.message(detail.to_string());
    } else {
        state = state.message("Failed to load analytics");
    }

    state
        .message("")
        .message("The analytics backend may be down or unreachable.")
        .action("r", "Retry (resync)")
        .action("q", "Quit")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screens_build() {
        let _ = no_identity();
        let _ = load_error(None);
        let _ = load_error(Some("Analytics fetch failed: sessions returned HTTP 500"));
    }
}
