//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::api::{AuthToken, BookingApi, EnquiryPayload, RequestError};
use crate::core::enquiry::Subject;
use crate::core::messages::Message;
use crate::core::state::App;

/// A scripted API for tests that don't need real HTTP.
#[derive(Default)]
pub struct FakeApi {
    pub submit_result: Option<Result<(), RequestError>>,
    pub messages_result: Option<Result<Vec<Message>, RequestError>>,
    pub submit_calls: AtomicUsize,
    pub fetch_calls: AtomicUsize,
    pub last_payload: Mutex<Option<EnquiryPayload>>,
}

#[async_trait]
impl BookingApi for FakeApi {
    fn name(&self) -> &str {
        "fake"
    }

    async fn submit_enquiry(&self, payload: EnquiryPayload) -> Result<(), RequestError> {
        self.submit_calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_payload.lock() {
            *last = Some(payload);
        }
        self.submit_result.clone().unwrap_or(Ok(()))
    }

    async fn fetch_messages(&self, _token: &AuthToken) -> Result<Vec<Message>, RequestError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.messages_result.clone().unwrap_or(Ok(Vec::new()))
    }
}

pub fn hotel_x() -> Subject {
    Subject {
        id: "12".to_string(),
        name: "Hotel X".to_string(),
        location: "Oslo".to_string(),
        image: Some("/x.png".to_string()),
    }
}

/// Creates a signed-out test App with a FakeApi.
pub fn test_app() -> App {
    App::new(Arc::new(FakeApi::default()), None, vec![hotel_x()], "admin")
}

/// Creates a signed-in test App with a FakeApi.
pub fn test_app_with_token(token: &str) -> App {
    App::new(
        Arc::new(FakeApi::default()),
        AuthToken::new(token),
        vec![hotel_x()],
        "admin",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, Effect, update};
    use crate::core::enquiry::FieldEdit;

    #[test]
    fn test_fake_api_records_payload_from_reducer() {
        let api = Arc::new(FakeApi::default());
        let mut app = App::new(api.clone(), None, vec![hotel_x()], "admin");
        update(&mut app, Action::OpenEnquiry(hotel_x()));
        update(&mut app, Action::EditContact(FieldEdit::Paste("Ann".to_string())));
        update(&mut app, Action::FocusNextContact);
        update(&mut app, Action::EditContact(FieldEdit::Paste("a@b.com".to_string())));

        let Effect::SubmitEnquiry { payload, .. } = update(&mut app, Action::SubmitEnquiry) else {
            panic!("Expected SubmitEnquiry effect");
        };
        assert_eq!(tokio_test::block_on(app.api.submit_enquiry(payload.clone())), Ok(()));

        assert_eq!(api.submit_calls.load(Ordering::SeqCst), 1);
        assert_eq!(*api.last_payload.lock().unwrap(), Some(payload));
    }

    #[test]
    fn test_fake_api_scripted_failure() {
        let api = FakeApi {
            messages_result: Some(Err(RequestError::Unauthenticated)),
            ..Default::default()
        };
        let token = AuthToken::new("jwt").unwrap();
        let result = tokio_test::block_on(api.fetch_messages(&token));
        assert_eq!(result, Err(RequestError::Unauthenticated));
        assert_eq!(api.fetch_calls.load(Ordering::SeqCst), 1);
    }
}
