//! Outcome banner shown after an enquiry settles: green for success, red for
//! failure. Only the user-facing message is ever rendered.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::component::Component;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Failure,
}

pub struct ConfirmationBox<'a> {
    pub message: &'a str,
    pub tone: Tone,
}

impl<'a> ConfirmationBox<'a> {
    pub fn new(message: &'a str, tone: Tone) -> Self {
        Self { message, tone }
    }
}

impl Component for ConfirmationBox<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let color = match self.tone {
            Tone::Success => Color::Green,
            Tone::Failure => Color::Red,
        };
        let paragraph = Paragraph::new(self.message)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );
        frame.render_widget(paragraph, area);
    }
}
