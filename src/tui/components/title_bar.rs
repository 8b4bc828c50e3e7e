//! # TitleBar Component
//!
//! Top status bar showing the active screen and the latest status message.
//!
//! TitleBar is purely presentational: it receives all data as props and has
//! no internal state.
//!
//! ```text
//! Holidaze | Messages | Loading messages...
//! Holidaze | Hotels
//! ```

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Label of the active screen (e.g. "Hotels")
    pub screen: String,
    /// Transient status (e.g. "Booking...", "3 messages")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(screen: impl Into<String>, status_message: impl Into<String>) -> Self {
        Self {
            screen: screen.into(),
            status_message: status_message.into(),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled("Holidaze", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" | "),
            Span::styled(self.screen.as_str(), Style::default().fg(Color::Cyan)),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::raw(self.status_message.as_str()));
        }
        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new("Messages", "Loading messages...");
        let text = render_text(&mut title_bar);
        assert!(text.contains("Holidaze | Messages | Loading messages..."));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new("Hotels", "");
        let text = render_text(&mut title_bar);
        assert!(text.contains("Holidaze | Hotels"));
        assert_eq!(text.matches('|').count(), 1);
    }
}
