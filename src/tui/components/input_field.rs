//! # InputField Component
//!
//! A bordered single-line text field with its label in the border and an
//! optional validation message on the line below.
//!
//! ```text
//! ┌Name──────────────────┐
//! │Ann                   │
//! └──────────────────────┘
//! Name must be at least 3 characters
//! ```
//!
//! Long values scroll horizontally so the tail (and the cursor) stay visible.
//! Widths are measured in terminal columns, not bytes.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::Component;

/// Box rows plus one error row.
pub const FIELD_HEIGHT: u16 = 4;

pub struct InputField<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub error: Option<&'a str>,
    pub focused: bool,
    /// Greyed out and not focusable (e.g. while a submit is pending).
    pub disabled: bool,
}

impl<'a> InputField<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            error: None,
            focused: false,
            disabled: false,
        }
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// The visible tail of `value` that fits in `width` columns, leaving one
/// column for the cursor.
pub fn visible_tail(value: &str, width: usize) -> &str {
    let budget = width.saturating_sub(1);
    if value.width() <= budget {
        return value;
    }
    let mut used = 0;
    let mut start = value.len();
    for (idx, c) in value.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        start = idx;
    }
    &value[start..]
}

impl Component for InputField<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [box_area, error_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(area);

        let border_color = if self.disabled {
            Color::DarkGray
        } else if self.error.is_some() {
            Color::Red
        } else if self.focused {
            Color::Cyan
        } else {
            Color::Gray
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(self.label);
        let inner = block.inner(box_area);
        let shown = visible_tail(self.value, inner.width as usize);

        let text_style = if self.disabled {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        frame.render_widget(Paragraph::new(shown).style(text_style).block(block), box_area);

        if let Some(error) = self.error {
            frame.render_widget(
                Span::styled(error, Style::default().fg(Color::Red)),
                error_area,
            );
        }

        if self.focused && !self.disabled && inner.width > 0 && inner.height > 0 {
            let cursor_x = inner.x + (shown.width() as u16).min(inner.width - 1);
            frame.set_cursor_position((cursor_x, inner.y));
        }
    }
}
