//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! translates keyboard and mouse events into core::Action values, and
//! performs the `Effect`s that `update()` returns.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Background work
//!
//! Network calls and the banner timer run as tokio tasks and report back by
//! sending an `Action` over a `std::sync::mpsc` channel, drained once per
//! loop iteration. Results carry the tag of the view that asked for them;
//! `update()` drops those whose view is gone.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (a request in flight or a banner on screen): draws every
//!   ~80ms so the spinner moves and timer results show promptly.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.

mod component;
mod components;
mod event;
mod scheduler;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::Screen;
use crate::api::{AuthToken, BookingApi, EnquiryPayload, HttpBookingApi, HttpClient};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::enquiry::Ticket;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{EnquiryModal, HotelPickerState, MessagesTableState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::scheduler::{BANNER_DISMISS_DELAY, ScheduledAction};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub hotel_picker: HotelPickerState,
    pub messages_table: MessagesTableState,
    /// Pending auto-dismiss for the open enquiry's banner.
    pub banner_timer: Option<(Ticket, ScheduledAction)>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            hotel_picker: HotelPickerState::new(),
            messages_table: MessagesTableState::new(),
            banner_timer: None,
        }
    }

    /// Drop the banner timer once it has fired, or once its form is closed
    /// or has moved on to a newer attempt.
    fn reap_timers(&mut self, app: &App) {
        if let Some((ticket, timer)) = &self.banner_timer
            && (timer.is_finished() || !app.is_live_enquiry(*ticket))
        {
            debug!("Dropping banner timer for {:?}", ticket);
            self.banner_timer = None;
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for field editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

/// Build the HTTP-backed API from a resolved config.
pub fn build_api(config: &ResolvedConfig) -> std::io::Result<Arc<dyn BookingApi>> {
    let http = HttpClient::new(config.request_timeout).map_err(std::io::Error::other)?;
    Ok(Arc::new(HttpBookingApi::new(http, config.endpoints.clone())))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let api = build_api(&config)?;
    info!("Using {} API at {}", api.name(), config.endpoints.base_url);
    let mut app = App::from_config(api, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Mount the start screen (the messages screen fetches on mount)
    dispatch(&mut app, &mut tui, Action::ShowScreen(config.start_screen), &tx);

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    let result = loop {
        let animating = is_animating(&app, &tui);
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            let frame_area = terminal.get_frame().area();
            if let Some(action) = route_event(&app, &mut tui, &event, frame_area)
                && dispatch(&mut app, &mut tui, action, &tx)
            {
                should_quit = true;
            }
        }

        if should_quit {
            break Ok(());
        }

        // Handle background task actions (API results, timers)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if dispatch(&mut app, &mut tui, action, &tx) {
                should_quit = true;
            }
        }
        if should_quit {
            break Ok(());
        }
    };

    // Cancel any pending timer before the runtime winds down
    tui.banner_timer = None;
    ratatui::restore();
    result
}

fn is_animating(app: &App, tui: &TuiState) -> bool {
    let enquiry_pending = app
        .enquiry
        .as_ref()
        .is_some_and(|form| form.lifecycle.is_pending());
    let messages_loading = app.screen == Screen::Messages
        && app
            .messages
            .as_ref()
            .is_some_and(|view| view.lifecycle.is_pending());
    enquiry_pending || messages_loading || tui.banner_timer.is_some()
}

/// Translate a terminal event into an action, given what's on screen.
fn route_event(
    app: &App,
    tui: &mut TuiState,
    event: &TuiEvent,
    frame_area: ratatui::layout::Rect,
) -> Option<Action> {
    // Ctrl+C always quits regardless of mode
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }

    // When the modal is open, route all events to it
    if let Some(form) = app.enquiry.as_ref() {
        if let TuiEvent::MouseClick(column, row) = *event {
            return ui::hit_test_modal(column, row, frame_area).action();
        }
        return EnquiryModal::new(form).handle_event(event);
    }

    match event {
        TuiEvent::InputChar('q') => return Some(Action::Quit),
        TuiEvent::InputChar('1') => return Some(Action::ShowScreen(Screen::Hotels)),
        TuiEvent::InputChar('2') => return Some(Action::ShowScreen(Screen::Messages)),
        TuiEvent::InputChar('3') => return Some(Action::ShowScreen(Screen::Dashboard)),
        TuiEvent::Tab => return Some(Action::ShowScreen(app.screen.next())),
        _ => {}
    }

    match app.screen {
        Screen::Hotels => tui
            .hotel_picker
            .handle_event(event, &app.hotels)
            .map(Action::OpenEnquiry),
        Screen::Messages => {
            if matches!(event, TuiEvent::InputChar('r')) {
                return Some(Action::RefreshMessages);
            }
            let rows = app.messages.as_ref().map_or(0, |view| view.messages().len());
            tui.messages_table.handle_event(event, rows);
            None
        }
        Screen::Dashboard => None,
    }
}

/// Run one action through `update()` and perform its effect.
/// Returns `true` when the app should quit.
fn dispatch(app: &mut App, tui: &mut TuiState, action: Action, tx: &mpsc::Sender<Action>) -> bool {
    let effect = update(app, action);
    let quit = match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::SubmitEnquiry { ticket, payload } => {
            spawn_submit(app.api.clone(), ticket, payload, tx.clone());
            false
        }
        Effect::FetchMessages { instance, token } => {
            tui.messages_table = MessagesTableState::new();
            spawn_fetch(app.api.clone(), instance, token, tx.clone());
            false
        }
        Effect::ScheduleBannerDismiss(ticket) => {
            // Replacing the guard cancels any earlier timer
            tui.banner_timer = Some((
                ticket,
                scheduler::schedule(Action::DismissBanner(ticket), BANNER_DISMISS_DELAY, tx.clone()),
            ));
            false
        }
    };
    tui.reap_timers(app);
    quit
}

fn spawn_submit(
    api: Arc<dyn BookingApi>,
    ticket: Ticket,
    payload: EnquiryPayload,
    tx: mpsc::Sender<Action>,
) {
    info!(
        "Spawning enquiry submission #{} (attempt {})",
        ticket.instance, ticket.attempt
    );
    tokio::spawn(async move {
        let result = api.submit_enquiry(payload).await;
        if let Err(e) = &result {
            // Raw error goes to the log only; the banner shows the user message
            warn!("Enquiry #{} failed: {}", ticket.instance, e);
        }
        if tx.send(Action::EnquirySettled { ticket, result }).is_err() {
            warn!("Failed to send enquiry result: receiver dropped");
        }
    });
}

fn spawn_fetch(api: Arc<dyn BookingApi>, instance: u64, token: AuthToken, tx: mpsc::Sender<Action>) {
    info!("Spawning messages fetch for view #{}", instance);
    tokio::spawn(async move {
        let result = api.fetch_messages(&token).await;
        match &result {
            Ok(messages) => debug!("View #{} fetched {} messages", instance, messages.len()),
            Err(e) => warn!("Messages fetch for view #{} failed: {}", instance, e),
        }
        if tx.send(Action::MessagesLoaded { instance, result }).is_err() {
            warn!("Failed to send messages result: receiver dropped");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::enquiry::FieldEdit;
    use crate::test_support::{FakeApi, hotel_x, test_app};
    use ratatui::layout::Rect;
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    fn fill_contact(app: &mut App, tui: &mut TuiState, tx: &mpsc::Sender<Action>) {
        dispatch(app, tui, Action::EditContact(FieldEdit::Paste("Ann".to_string())), tx);
        dispatch(app, tui, Action::FocusNextContact, tx);
        dispatch(app, tui, Action::EditContact(FieldEdit::Paste("a@b.com".to_string())), tx);
    }

    #[test]
    fn test_number_keys_switch_screens() {
        let app = test_app();
        let mut tui = TuiState::new();
        assert_eq!(
            route_event(&app, &mut tui, &TuiEvent::InputChar('3'), AREA),
            Some(Action::ShowScreen(Screen::Dashboard))
        );
        assert_eq!(
            route_event(&app, &mut tui, &TuiEvent::Tab, AREA),
            Some(Action::ShowScreen(Screen::Messages))
        );
    }

    #[test]
    fn test_enter_on_hotel_opens_enquiry() {
        let app = test_app();
        let mut tui = TuiState::new();
        assert_eq!(
            route_event(&app, &mut tui, &TuiEvent::Submit, AREA),
            Some(Action::OpenEnquiry(hotel_x()))
        );
    }

    #[test]
    fn test_open_modal_captures_keys() {
        let mut app = test_app();
        update(&mut app, Action::OpenEnquiry(hotel_x()));
        let mut tui = TuiState::new();
        // 'q' types into the field instead of quitting
        assert_eq!(
            route_event(&app, &mut tui, &TuiEvent::InputChar('q'), AREA),
            Some(Action::EditContact(FieldEdit::Insert('q')))
        );
        assert_eq!(
            route_event(&app, &mut tui, &TuiEvent::MouseClick(0, 0), AREA),
            Some(Action::CloseEnquiry)
        );
        assert_eq!(
            route_event(&app, &mut tui, &TuiEvent::ForceQuit, AREA),
            Some(Action::Quit)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_round_trip_and_banner_dismiss() {
        let api = Arc::new(FakeApi::default());
        let mut app = App::new(api.clone(), None, vec![hotel_x()], "admin");
        let mut tui = TuiState::new();
        let (tx, rx) = mpsc::channel();

        dispatch(&mut app, &mut tui, Action::OpenEnquiry(hotel_x()), &tx);
        fill_contact(&mut app, &mut tui, &tx);
        dispatch(&mut app, &mut tui, Action::SubmitEnquiry, &tx);

        // Let the spawned submission run
        tokio::time::sleep(Duration::from_millis(1)).await;
        let settled = rx.try_recv().unwrap();
        assert!(matches!(settled, Action::EnquirySettled { result: Ok(()), .. }));
        dispatch(&mut app, &mut tui, settled, &tx);

        assert_eq!(api.submit_calls.load(Ordering::SeqCst), 1);
        assert!(app.enquiry.as_ref().unwrap().lifecycle.is_settled());
        assert!(tui.banner_timer.is_some());

        tokio::time::sleep(BANNER_DISMISS_DELAY + Duration::from_millis(10)).await;
        let dismiss = rx.try_recv().unwrap();
        dispatch(&mut app, &mut tui, dismiss, &tx);
        assert!(!app.enquiry.as_ref().unwrap().lifecycle.is_settled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_closing_modal_cancels_banner_timer() {
        let api = Arc::new(FakeApi::default());
        let mut app = App::new(api, None, vec![hotel_x()], "admin");
        let mut tui = TuiState::new();
        let (tx, rx) = mpsc::channel();

        dispatch(&mut app, &mut tui, Action::OpenEnquiry(hotel_x()), &tx);
        fill_contact(&mut app, &mut tui, &tx);
        dispatch(&mut app, &mut tui, Action::SubmitEnquiry, &tx);
        tokio::time::sleep(Duration::from_millis(1)).await;
        let settled = rx.try_recv().unwrap();
        dispatch(&mut app, &mut tui, settled, &tx);
        assert!(tui.banner_timer.is_some());

        dispatch(&mut app, &mut tui, Action::CloseEnquiry, &tx);
        assert!(tui.banner_timer.is_none());

        tokio::time::sleep(BANNER_DISMISS_DELAY * 2).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_invalid_submit_spawns_nothing() {
        let api = Arc::new(FakeApi::default());
        let mut app = App::new(api.clone(), None, vec![hotel_x()], "admin");
        let mut tui = TuiState::new();
        let (tx, rx) = mpsc::channel();

        dispatch(&mut app, &mut tui, Action::OpenEnquiry(hotel_x()), &tx);
        dispatch(&mut app, &mut tui, Action::SubmitEnquiry, &tx);
        tokio::task::yield_now().await;

        assert!(rx.try_recv().is_err());
        assert_eq!(api.submit_calls.load(Ordering::SeqCst), 0);
    }
}
