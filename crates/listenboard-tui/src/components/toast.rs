//! Toast notification component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

/// Toast notification type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    Success,
    Error,
    Info,
}

impl ToastType {
    pub fn color(&self) -> Color {
        match self {
            Self::Success => Color::Green,
            Self::Error => Color::Red,
            Self::Info => Color::Cyan,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✗",
            Self::Info => "ℹ",
        }
    }
}

/// Single toast message
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub toast_type: ToastType,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, toast_type: ToastType) -> Self {
        Self {
            message: message.into(),
            toast_type,
            created_at: Instant::now(),
            duration: Duration::from_secs(4),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.duration
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Info)
    }
}

/// Toast manager - handles multiple toasts
#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self { toasts: Vec::new() }
    }

    pub fn push(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    pub fn clear_expired(&mut self) {
        self.toasts.retain(|t| !t.is_expired());
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.clear_expired();

        if self.toasts.is_empty() {
            return;
        }

        // Stack toasts from bottom up (max 3 visible)
        let max_visible = 3;
        let visible: Vec<_> = self.toasts.iter().rev().take(max_visible).rev().collect();

        let toast_height: u16 = 3;
        let mut y_offset = area
            .height
            .saturating_sub((visible.len() as u16 * toast_height) + 2);

        for toast in visible {
            let toast_width = (toast.message.len() + 6).min(area.width as usize) as u16;
            let x_offset = area.width.saturating_sub(toast_width) / 2;

            let toast_area = Rect {
                x: area.x + x_offset,
                y: area.y + y_offset,
                width: toast_width,
                height: toast_height,
            };

            render_single_toast(frame, toast_area, toast);
            y_offset += toast_height;
        }
    }
}

fn render_single_toast(frame: &mut Frame, area: Rect, toast: &Toast) {
    let color = toast.toast_type.color();
    let icon = toast.toast_type.icon();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let content = Line::from(vec![
        Span::styled(
            format!("{} ", icon),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(&toast.message, Style::default().fg(Color::White)),
    ]);

    frame.render_widget(Paragraph::new(content), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expiry() {
        let mut toast = Toast::success("done");
        assert!(!toast.is_expired());

        toast.duration = Duration::from_millis(0);
        std::thread::sleep(Duration::from_millis(5));
        assert!(toast.is_expired());
    }

    #[test]
    fn test_manager_clears_expired() {
        let mut manager = ToastManager::new();
        let mut expired = Toast::info("old");
        expired.duration = Duration::from_millis(0);
        manager.push(expired);
        manager.push(Toast::error("fresh"));

        std::thread::sleep(Duration::from_millis(5));
        manager.clear_expired();

        assert_eq!(manager.toasts.len(), 1);
        assert_eq!(manager.toasts[0].toast_type, ToastType::Error);
    }
}
