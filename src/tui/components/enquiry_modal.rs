//! # Enquiry Modal Component
//!
//! Overlay form for sending a booking enquiry about one hotel. Renders the
//! read-only subject fields, the two contact fields, the submit control and
//! the outcome banner.
//!
//! ```text
//! ┌ Enquire: Hotel X ──────────────────────[x]─┐
//! │ Hotel ID: 12                               │
//! │ Hotel: Hotel X                             │
//! │ Location: Oslo                             │
//! │ Image: /x.png                              │
//! │ ┌Name──────────────────────────────────┐   │
//! │ └──────────────────────────────────────┘   │
//! │ ┌Email─────────────────────────────────┐   │
//! │ └──────────────────────────────────────┘   │
//! │              [ Send Booking ]              │
//! │ ┌────────────────────────────────────────┐ │
//! │ │    Thank you for your submission!      │ │
//! │ └────────────────────────────────────────┘ │
//! └─────── Tab Next  Enter Send  Esc Close ────┘
//! ```
//!
//! Layout is computed once by `ModalLayout::compute` and shared by rendering
//! and mouse hit-testing, so clicks always land on what was drawn.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::core::action::Action;
use crate::core::enquiry::{ContactField, EnquiryForm, Field, FieldEdit};
use crate::core::lifecycle::RequestLifecycle;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::close_button::CloseButton;
use crate::tui::components::confirmation_box::{ConfirmationBox, Tone};
use crate::tui::components::input_field::{FIELD_HEIGHT, InputField};
use crate::tui::event::TuiEvent;

const MODAL_WIDTH: u16 = 64;
const MODAL_HEIGHT: u16 = 18;

pub const SUBMIT_LABEL: &str = "[ Send Booking ]";
pub const PENDING_LABEL: &str = "[ Booking... ]";

/// Screen regions of the modal for a given frame size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalLayout {
    pub modal: Rect,
    pub close: Rect,
    pub subject: Rect,
    pub name: Rect,
    pub email: Rect,
    pub submit: Rect,
    pub banner: Rect,
}

/// What a mouse click at some position landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalHit {
    Outside,
    Close,
    Field(ContactField),
    Submit,
    Body,
}

impl ModalLayout {
    pub fn compute(frame_area: Rect) -> Self {
        let width = MODAL_WIDTH.min(frame_area.width);
        let height = MODAL_HEIGHT.min(frame_area.height);
        let modal = Rect {
            x: frame_area.x + (frame_area.width - width) / 2,
            y: frame_area.y + (frame_area.height - height) / 2,
            width,
            height,
        };
        let inner = modal_block("").inner(modal);
        let [subject, name, email, submit, banner] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .areas(inner);
        Self {
            modal,
            close: CloseButton::area(modal),
            subject,
            name,
            email,
            submit,
            banner,
        }
    }

    pub fn hit_test(&self, column: u16, row: u16) -> ModalHit {
        let pos = Position::new(column, row);
        if self.close.contains(pos) {
            ModalHit::Close
        } else if !self.modal.contains(pos) {
            ModalHit::Outside
        } else if self.name.contains(pos) {
            ModalHit::Field(ContactField::Name)
        } else if self.email.contains(pos) {
            ModalHit::Field(ContactField::Email)
        } else if self.submit.contains(pos) {
            ModalHit::Submit
        } else {
            ModalHit::Body
        }
    }
}

impl ModalHit {
    /// The action a click translates to. Clicks on the body do nothing.
    pub fn action(self) -> Option<Action> {
        match self {
            ModalHit::Outside | ModalHit::Close => Some(Action::CloseEnquiry),
            ModalHit::Field(field) => Some(Action::FocusContact(field)),
            ModalHit::Submit => Some(Action::SubmitEnquiry),
            ModalHit::Body => None,
        }
    }
}

fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title)
        .title_bottom(Line::from(" Tab Next  Enter Send  Esc Close ").centered())
        .padding(Padding::horizontal(1))
}

pub struct EnquiryModal<'a> {
    form: &'a EnquiryForm,
}

impl<'a> EnquiryModal<'a> {
    pub fn new(form: &'a EnquiryForm) -> Self {
        Self { form }
    }

    fn subject_line(&self, field: Field) -> Line<'a> {
        let mut spans = vec![
            Span::styled(
                format!("{}: ", field.label()),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(self.form.value(field)),
        ];
        if let Some(error) = self.form.visible_error(field) {
            spans.push(Span::styled(
                format!("  {error}"),
                Style::default().fg(Color::Red),
            ));
        }
        Line::from(spans)
    }
}

impl Component for EnquiryModal<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let layout = ModalLayout::compute(area);
        let form = self.form;
        let pending = form.lifecycle.is_pending();

        frame.render_widget(Clear, layout.modal);
        let title = format!(" Enquire: {} ", form.subject.name);
        frame.render_widget(modal_block(&title), layout.modal);
        CloseButton.render(frame, layout.close);

        let mut subject_lines = vec![
            self.subject_line(Field::SubjectId),
            self.subject_line(Field::SubjectName),
            self.subject_line(Field::SubjectLocation),
        ];
        if let Some(image) = form.subject.image.as_deref() {
            subject_lines.push(Line::from(vec![
                Span::styled("Image: ", Style::default().fg(Color::DarkGray)),
                Span::raw(image),
            ]));
        }
        frame.render_widget(Paragraph::new(subject_lines), layout.subject);

        for (contact, area) in [
            (ContactField::Name, layout.name),
            (ContactField::Email, layout.email),
        ] {
            let field = contact.field();
            InputField::new(field.label(), form.value(field))
                .error(form.visible_error(field))
                .focused(form.focused == contact)
                .disabled(pending)
                .render(frame, area);
        }

        let (label, style) = if pending {
            (PENDING_LABEL, Style::default().fg(Color::DarkGray))
        } else {
            (
                SUBMIT_LABEL,
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )
        };
        frame.render_widget(
            Paragraph::new(label).style(style).alignment(Alignment::Center),
            layout.submit,
        );

        match &form.lifecycle {
            RequestLifecycle::Succeeded(message) => {
                ConfirmationBox::new(message, Tone::Success).render(frame, layout.banner);
            }
            RequestLifecycle::Failed(error) => {
                ConfirmationBox::new(error.user_message(), Tone::Failure)
                    .render(frame, layout.banner);
            }
            RequestLifecycle::Idle | RequestLifecycle::Pending => {}
        }
    }
}

impl EventHandler for EnquiryModal<'_> {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        if matches!(event, TuiEvent::Escape) {
            return Some(Action::CloseEnquiry);
        }
        // Fields and the submit control are disabled while a request is in flight
        if self.form.lifecycle.is_pending() {
            return None;
        }
        match event {
            TuiEvent::Submit => Some(Action::SubmitEnquiry),
            TuiEvent::Tab | TuiEvent::BackTab => Some(Action::FocusNextContact),
            TuiEvent::CursorUp => Some(Action::FocusContact(ContactField::Name)),
            TuiEvent::CursorDown => Some(Action::FocusContact(ContactField::Email)),
            TuiEvent::InputChar(c) => Some(Action::EditContact(FieldEdit::Insert(*c))),
            TuiEvent::Paste(text) => Some(Action::EditContact(FieldEdit::Paste(text.clone()))),
            TuiEvent::Backspace => Some(Action::EditContact(FieldEdit::Backspace)),
            _ => None,
        }
    }
}
