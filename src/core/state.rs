//! # Application State
//!
//! Core business state for Holidaze. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── api: Arc<dyn BookingApi>       // network seam
//! ├── token: Option<AuthToken>       // injected credential
//! ├── screen: Screen                 // which view is mounted
//! ├── dashboard: DashboardView       // panel picked by tag
//! ├── hotels: Vec<Subject>           // enquiry subjects
//! ├── enquiry: Option<EnquiryForm>   // open modal (None = closed)
//! ├── messages: Option<MessagesView> // mounted table (None = unmounted)
//! └── status_message: String         // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::Screen;
use crate::api::{AuthToken, BookingApi};
use crate::core::config::ResolvedConfig;
use crate::core::dashboard::DashboardView;
use crate::core::enquiry::{EnquiryForm, Subject, Ticket};
use crate::core::messages::MessagesView;

pub struct App {
    pub api: Arc<dyn BookingApi>,
    pub token: Option<AuthToken>,
    pub screen: Screen,
    pub dashboard: DashboardView,
    pub hotels: Vec<Subject>,
    pub enquiry: Option<EnquiryForm>,
    pub messages: Option<MessagesView>,
    pub status_message: String,
    /// Source of view instance ids. Never reused within a run.
    next_instance: u64,
}

impl App {
    pub fn new(
        api: Arc<dyn BookingApi>,
        token: Option<AuthToken>,
        hotels: Vec<Subject>,
        dashboard_tag: &str,
    ) -> Self {
        Self {
            api,
            token,
            screen: Screen::Hotels,
            dashboard: DashboardView::from_tag(dashboard_tag),
            hotels,
            enquiry: None,
            messages: None,
            status_message: String::from("Welcome to Holidaze!"),
            next_instance: 0,
        }
    }

    pub fn from_config(api: Arc<dyn BookingApi>, config: &ResolvedConfig) -> Self {
        Self::new(
            api,
            config.token.clone(),
            config.hotels.clone(),
            &config.dashboard,
        )
    }

    pub fn allocate_instance(&mut self) -> u64 {
        self.next_instance += 1;
        self.next_instance
    }

    /// Whether a ticket still refers to the open enquiry form.
    pub fn is_live_enquiry(&self, ticket: Ticket) -> bool {
        self.enquiry
            .as_ref()
            .is_some_and(|form| form.ticket() == ticket)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to Holidaze!");
        assert!(app.enquiry.is_none());
        assert!(app.messages.is_none());
    }

    #[test]
    fn test_instances_are_unique() {
        let mut app = test_app();
        let a = app.allocate_instance();
        let b = app.allocate_instance();
        assert_ne!(a, b);
    }
}
