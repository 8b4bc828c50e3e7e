//! Loading placeholder: a spinner frame plus a label.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct Loading<'a> {
    pub label: &'a str,
    pub frame_index: usize,
}

impl<'a> Loading<'a> {
    pub fn new(label: &'a str, frame_index: usize) -> Self {
        Self { label, frame_index }
    }

    pub fn text(&self) -> String {
        format!("{} {}", SPINNER[self.frame_index % SPINNER.len()], self.label)
    }
}

impl Component for Loading<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.text())
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}
