//! # Hotel Picker Component
//!
//! The hotels screen: a selectable list of configured hotels. Enter opens the
//! enquiry modal for the highlighted one.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `HotelPickerState` lives in `TuiState`
//! - `HotelPicker` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::enquiry::Subject;
use crate::tui::event::TuiEvent;

/// Persistent state for the hotel list.
#[derive(Default)]
pub struct HotelPickerState {
    pub selected: usize,
    pub list_state: ListState,
}

impl HotelPickerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key event against `hotels`, returning the subject to enquire about.
    pub fn handle_event(&mut self, event: &TuiEvent, hotels: &[Subject]) -> Option<Subject> {
        if hotels.is_empty() {
            return None;
        }
        // The hotel list can't shrink at runtime, but clamp anyway
        self.selected = self.selected.min(hotels.len() - 1);
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(hotels.len() - 1);
                None
            }
            TuiEvent::Submit => hotels.get(self.selected).cloned(),
            _ => None,
        }
    }
}

/// Transient render wrapper for the hotel list.
pub struct HotelPicker<'a> {
    state: &'a mut HotelPickerState,
    hotels: &'a [Subject],
}

impl<'a> HotelPicker<'a> {
    pub fn new(state: &'a mut HotelPickerState, hotels: &'a [Subject]) -> Self {
        Self { state, hotels }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let help_text = " ↑↓ Select  Enter Enquire ";

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Hotels ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(help_text).centered())
            .padding(Padding::horizontal(1));

        if self.hotels.is_empty() {
            let empty = Paragraph::new(
                "No hotels configured.\nAdd [[hotels]] entries to ~/.holidaze/config.toml",
            )
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let inner_width = area.width.saturating_sub(4) as usize; // borders + padding
        let items: Vec<ListItem> = self
            .hotels
            .iter()
            .enumerate()
            .map(|(i, hotel)| {
                let location = format!("  {}", hotel.location);
                let name_width = inner_width.saturating_sub(location.width());
                let name = truncate_str(&hotel.name, name_width);
                let padded_name = format!(
                    "{}{}",
                    name,
                    " ".repeat(name_width.saturating_sub(name.width()))
                );

                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let location_style = if i == self.state.selected {
                    style
                } else {
                    Style::default().fg(Color::DarkGray)
                };

                ListItem::new(Line::from(vec![
                    Span::styled(padded_name, style),
                    Span::styled(location, location_style),
                ]))
            })
            .collect();

        self.state.selected = self.state.selected.min(self.hotels.len() - 1);
        self.state.list_state.select(Some(self.state.selected));
        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Truncate a string to fit within `max_width` columns, adding "..." if needed.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}
