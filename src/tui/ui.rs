use crate::Screen;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    DashboardPanel, EnquiryModal, HotelPicker, MessagesTable, ModalHit, ModalLayout, TitleBar,
};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

const HELP_TEXT: &str = " 1 Hotels  2 Messages  3 Dashboard  Tab Next  q Quit ";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    TitleBar::new(app.screen.label(), app.status_message.as_str()).render(frame, title_area);

    match app.screen {
        Screen::Hotels => {
            HotelPicker::new(&mut tui.hotel_picker, &app.hotels).render(frame, main_area);
        }
        Screen::Messages => match app.messages.as_ref() {
            Some(view) => {
                MessagesTable::new(&mut tui.messages_table, view, spinner_frame)
                    .render(frame, main_area);
            }
            None => draw_placeholder(frame, main_area, "Messages not loaded"),
        },
        Screen::Dashboard => {
            DashboardPanel {
                view: app.dashboard,
            }
            .render(frame, main_area);
        }
    }

    frame.render_widget(
        Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::DarkGray)),
        help_area,
    );

    // Modal draws last, over everything
    if let Some(form) = app.enquiry.as_ref() {
        EnquiryModal::new(form).render(frame, frame.area());
    }
}

fn draw_placeholder(frame: &mut Frame, area: Rect, text: &str) {
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

/// Hit test a click against the open modal, laid out for `frame_area`.
pub fn hit_test_modal(column: u16, row: u16, frame_area: Rect) -> ModalHit {
    ModalLayout::compute(frame_area).hit_test(column, row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RequestError;
    use crate::core::action::{Action, Effect, update};
    use crate::core::messages::Message;
    use crate::test_support::{hotel_x, test_app, test_app_with_token};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut tui = TuiState::new();
        terminal
            .draw(|f| {
                draw_ui(f, app, &mut tui, 0);
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
    fn test_draw_hotels_screen() {
        let app = test_app();
        let text = render(&app);
        assert!(text.contains("Holidaze | Hotels"));
        assert!(text.contains("Hotel X"));
    }

    #[test]
    fn test_draw_modal_over_screen() {
        let mut app = test_app();
        update(&mut app, Action::OpenEnquiry(hotel_x()));
        let text = render(&app);
        assert!(text.contains("Enquire: Hotel X"));
    }

    #[test]
    fn test_draw_messages_screen_after_fetch() {
        let mut app = test_app_with_token("jwt");
        let Effect::FetchMessages { instance, .. } =
            update(&mut app, Action::ShowScreen(Screen::Messages))
        else {
            panic!("Expected FetchMessages");
        };
        assert!(render(&app).contains("Loading messages..."));

        update(
            &mut app,
            Action::MessagesLoaded {
                instance,
                result: Ok(vec![Message {
                    id: "1".to_string(),
                    sender_name: "Bo".to_string(),
                    sender_email: "bo@x.com".to_string(),
                    body: "Hi".to_string(),
                }]),
            },
        );
        let text = render(&app);
        assert!(text.contains("Bo"));
        assert!(text.contains("Hi"));
        assert!(text.contains("1 messages"));
    }

    #[test]
    fn test_draw_signed_out_messages() {
        let mut app = test_app();
        update(&mut app, Action::ShowScreen(Screen::Messages));
        assert!(render(&app).contains(RequestError::Unauthenticated.user_message()));
    }

    #[test]
    fn test_draw_dashboard() {
        let mut app = test_app();
        update(&mut app, Action::ShowScreen(Screen::Dashboard));
        assert!(render(&app).contains("Dashboard Admin"));
    }

    #[test]
    fn test_click_outside_modal_closes_it() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(
            hit_test_modal(0, 0, area).action(),
            Some(Action::CloseEnquiry)
        );

        // Clicks inside the body don't propagate to the outside handler
        let layout = ModalLayout::compute(area);
        let inside = hit_test_modal(layout.subject.x, layout.subject.y, area);
        assert_eq!(inside, ModalHit::Body);
        assert_eq!(inside.action(), None);
    }
}
