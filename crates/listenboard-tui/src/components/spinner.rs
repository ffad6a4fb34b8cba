//! Animated spinner component for loading and syncing states

use ratatui::{
    style::{Color, Style},
    text::Span,
};
use std::time::{Duration, Instant};

/// Animated Braille spinner
#[derive(Debug)]
pub struct Spinner {
    frames: &'static [&'static str],
    current_frame: usize,
    last_update: Instant,
    frame_duration: Duration,
    color: Color,
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl Spinner {
    pub fn new() -> Self {
        Self {
            frames: &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
            current_frame: 0,
            last_update: Instant::now(),
            frame_duration: Duration::from_millis(80),
            color: Color::Green,
        }
    }

    /// Advance the animation (call on each render)
    pub fn tick(&mut self) {
        let now = Instant::now();
        if now.duration_since(self.last_update) >= self.frame_duration {
            self.current_frame = (self.current_frame + 1) % self.frames.len();
            self.last_update = now;
        }
    }

    /// Current frame as a styled span
    pub fn render(&self) -> Span<'static> {
        Span::styled(
            self.frames[self.current_frame],
            Style::default().fg(self.color),
        )
    }

    pub fn current_frame(&self) -> &'static str {
        self.frames[self.current_frame]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_stays_in_range() {
        let mut spinner = Spinner::new();
        for _ in 0..25 {
            spinner.tick();
            assert!(spinner.current_frame < spinner.frames.len());
        }
    }
}
