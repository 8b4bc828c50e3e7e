//! The `[x]` control drawn on a modal's top border.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::tui::component::Component;

pub const LABEL: &str = "[x]";

pub struct CloseButton;

impl CloseButton {
    /// Where the button sits on `modal`'s top border, one cell in from the corner.
    pub fn area(modal: Rect) -> Rect {
        let width = LABEL.len() as u16;
        Rect {
            x: (modal.x + modal.width).saturating_sub(width + 2).max(modal.x),
            y: modal.y,
            width: width.min(modal.width),
            height: 1.min(modal.height),
        }
    }
}

impl Component for CloseButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);
        frame.render_widget(Span::styled(LABEL, style), area);
    }
}
