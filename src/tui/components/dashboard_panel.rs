//! Dashboard screen: one static panel picked by tag.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::dashboard::DashboardView;
use crate::tui::component::Component;

pub struct DashboardPanel {
    pub view: DashboardView,
}

impl Component for DashboardPanel {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = match self.view {
            DashboardView::Unknown => Style::default().fg(Color::Red),
            _ => Style::default().add_modifier(Modifier::BOLD),
        };
        let panel = Paragraph::new(self.view.title())
            .style(style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" Dashboard "),
            );
        frame.render_widget(panel, area);
    }
}
