//! # Messages Table Component
//!
//! Renders the mounted `MessagesView`: a header row, then exactly one of
//!
//! - a loading placeholder while the fetch is Idle or Pending,
//! - an error row with the user-facing message when it failed,
//! - a "No messages" row for an empty inbox,
//! - one row per message, in server order.
//!
//! `MessagesTableState` keeps the row selection across frames so long
//! inboxes can be scrolled with Up/Down.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, TableState};

use crate::core::messages::MessagesView;
use crate::tui::component::Component;
use crate::tui::components::loading::Loading;
use crate::tui::event::TuiEvent;

const HEADER: [&str; 4] = ["ID", "From", "Email", "Message"];

#[derive(Default)]
pub struct MessagesTableState {
    pub table_state: TableState,
}

impl MessagesTableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_event(&mut self, event: &TuiEvent, row_count: usize) {
        if row_count == 0 {
            self.table_state.select(None);
            return;
        }
        let current = self.table_state.selected();
        let next = match event {
            TuiEvent::CursorUp => current.map_or(0, |i| i.saturating_sub(1)),
            TuiEvent::CursorDown => current.map_or(0, |i| (i + 1).min(row_count - 1)),
            _ => return,
        };
        self.table_state.select(Some(next));
    }
}

pub struct MessagesTable<'a> {
    state: &'a mut MessagesTableState,
    view: &'a MessagesView,
    frame_index: usize,
}

impl<'a> MessagesTable<'a> {
    pub fn new(state: &'a mut MessagesTableState, view: &'a MessagesView, frame_index: usize) -> Self {
        Self {
            state,
            view,
            frame_index,
        }
    }
}

impl Component for MessagesTable<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Messages ")
            .title_bottom(Line::from(" ↑↓ Scroll  r Refresh ").centered());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let widths = [
            Constraint::Length(6),
            Constraint::Percentage(20),
            Constraint::Percentage(30),
            Constraint::Fill(1),
        ];
        let header = Row::new(HEADER)
            .style(Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan));

        let messages = self.view.messages();
        let loading = self.view.is_loading();
        let notice = if loading {
            None
        } else if let Some(error) = self.view.error() {
            Some(Paragraph::new(error.user_message()).style(Style::default().fg(Color::Red)))
        } else if messages.is_empty() {
            Some(Paragraph::new("No messages").style(Style::default().fg(Color::DarkGray)))
        } else {
            None
        };

        if loading || notice.is_some() {
            let [header_area, body_area] =
                Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
            frame.render_widget(Table::new(Vec::<Row>::new(), widths).header(header), header_area);
            match notice {
                Some(notice) => frame.render_widget(notice, body_area),
                None => Loading::new("Loading messages...", self.frame_index).render(frame, body_area),
            }
            return;
        }

        let rows = messages.iter().map(|m| {
            Row::new([
                m.id.as_str(),
                m.sender_name.as_str(),
                m.sender_email.as_str(),
                m.body.as_str(),
            ])
        });
        let table = Table::new(rows, widths)
            .header(header)
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        frame.render_stateful_widget(table, inner, &mut self.state.table_state);
    }
}
