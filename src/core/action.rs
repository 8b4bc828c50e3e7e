//! # Actions
//!
//! Everything that can happen in Holidaze becomes an `Action`.
//! User presses Enter in the modal? That's `Action::SubmitEnquiry`.
//! The API responds? That's `Action::EnquirySettled { .. }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing any I/O the caller must
//! perform. No side effects here. I/O happens in the TUI adapter.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Background results carry the instance tag of the view that asked for
//! them. If that view has been closed or replaced, the result is dropped.

use log::{debug, info};

use crate::Screen;
use crate::api::{AuthToken, EnquiryPayload, RequestError};
use crate::core::enquiry::{ContactField, EnquiryForm, FieldEdit, SUCCESS_MESSAGE, Subject, Ticket};
use crate::core::messages::{Message, MessagesView};
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    ShowScreen(Screen),
    /// Remount the messages table, which refetches.
    RefreshMessages,
    OpenEnquiry(Subject),
    CloseEnquiry,
    EditContact(FieldEdit),
    FocusContact(ContactField),
    FocusNextContact,
    SubmitEnquiry,
    EnquirySettled {
        ticket: Ticket,
        result: Result<(), RequestError>,
    },
    DismissBanner(Ticket),
    MessagesLoaded {
        instance: u64,
        result: Result<Vec<Message>, RequestError>,
    },
}

/// I/O requested by `update()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    SubmitEnquiry {
        ticket: Ticket,
        payload: EnquiryPayload,
    },
    FetchMessages {
        instance: u64,
        token: AuthToken,
    },
    ScheduleBannerDismiss(Ticket),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Quit => Effect::Quit,
        Action::ShowScreen(screen) => show_screen(app, screen),
        Action::RefreshMessages => {
            if app.screen == Screen::Messages {
                mount_messages(app)
            } else {
                Effect::None
            }
        }
        Action::OpenEnquiry(subject) => {
            let instance = app.allocate_instance();
            info!("Opening enquiry #{} for {}", instance, subject.name);
            app.status_message = format!("Enquiry: {}", subject.name);
            app.enquiry = Some(EnquiryForm::new(instance, subject));
            Effect::None
        }
        Action::CloseEnquiry => {
            if let Some(form) = app.enquiry.take() {
                debug!("Closing enquiry #{}", form.instance);
                app.status_message = String::new();
            }
            Effect::None
        }
        Action::EditContact(edit) => {
            if let Some(form) = app.enquiry.as_mut() {
                form.edit(edit);
            }
            Effect::None
        }
        Action::FocusContact(field) => {
            if let Some(form) = app.enquiry.as_mut() {
                form.focus(field);
            }
            Effect::None
        }
        Action::FocusNextContact => {
            if let Some(form) = app.enquiry.as_mut() {
                form.focus_next();
            }
            Effect::None
        }
        Action::SubmitEnquiry => submit_enquiry(app),
        Action::EnquirySettled { ticket, result } => {
            let Some(form) = app.enquiry.as_mut() else {
                debug!("Dropping enquiry result for closed form #{}", ticket.instance);
                return Effect::None;
            };
            if form.ticket() != ticket || !form.lifecycle.is_pending() {
                debug!("Dropping stale enquiry result {:?}", ticket);
                return Effect::None;
            }

            app.status_message = match &result {
                Ok(()) => "Enquiry sent".to_string(),
                Err(e) => format!("Enquiry failed: {}", e.user_message()),
            };
            form.lifecycle
                .settle(result.map(|()| SUCCESS_MESSAGE.to_string()));
            form.reset_contact();
            Effect::ScheduleBannerDismiss(ticket)
        }
        Action::DismissBanner(ticket) => {
            if let Some(form) = app.enquiry.as_mut()
                && form.ticket() == ticket
                && form.lifecycle.is_settled()
            {
                form.lifecycle.reset();
            }
            Effect::None
        }
        Action::MessagesLoaded { instance, result } => {
            match app.messages.as_mut() {
                Some(view) if view.instance == instance && view.lifecycle.is_pending() => {
                    app.status_message = match &result {
                        Ok(messages) => format!("{} messages", messages.len()),
                        Err(e) => e.user_message().to_string(),
                    };
                    view.lifecycle.settle(result);
                }
                _ => debug!("Dropping messages result for unmounted view #{}", instance),
            }
            Effect::None
        }
    }
}

fn show_screen(app: &mut App, screen: Screen) -> Effect {
    // Any screen change closes the modal
    app.enquiry = None;
    app.screen = screen;
    app.status_message = String::new();

    if screen != Screen::Messages {
        app.messages = None;
        return Effect::None;
    }
    if app.messages.is_some() {
        return Effect::None;
    }
    mount_messages(app)
}

fn mount_messages(app: &mut App) -> Effect {
    let instance = app.allocate_instance();
    let mut view = MessagesView::new(instance);

    let effect = match app.token.clone() {
        Some(token) => {
            view.lifecycle.begin();
            app.status_message = "Loading messages...".to_string();
            Effect::FetchMessages { instance, token }
        }
        None => {
            info!("No credential; skipping messages fetch");
            view.lifecycle.settle(Err(RequestError::Unauthenticated));
            app.status_message = RequestError::Unauthenticated.user_message().to_string();
            Effect::None
        }
    };

    app.messages = Some(view);
    effect
}

fn submit_enquiry(app: &mut App) -> Effect {
    let Some(form) = app.enquiry.as_mut() else {
        return Effect::None;
    };
    // Submit control is disabled while a request is in flight
    if form.lifecycle.is_pending() {
        return Effect::None;
    }

    match form.validate() {
        Err(errors) => {
            debug!("Enquiry #{} invalid: {:?}", form.instance, errors.keys());
            form.reject(errors);
            app.status_message = "Please fix the highlighted fields".to_string();
            Effect::None
        }
        Ok(payload) => {
            form.attempt += 1;
            form.lifecycle.begin();
            app.status_message = "Booking...".to_string();
            Effect::SubmitEnquiry {
                ticket: form.ticket(),
                payload,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::enquiry::Field;
    use crate::core::lifecycle::RequestLifecycle;
    use crate::test_support::{hotel_x, test_app, test_app_with_token};

    fn open_filled(app: &mut App) {
        update(app, Action::OpenEnquiry(hotel_x()));
        update(app, Action::EditContact(FieldEdit::Paste("Ann".to_string())));
        update(app, Action::FocusNextContact);
        update(app, Action::EditContact(FieldEdit::Paste("a@b.com".to_string())));
    }

    fn submit(app: &mut App) -> (Ticket, EnquiryPayload) {
        match update(app, Action::SubmitEnquiry) {
            Effect::SubmitEnquiry { ticket, payload } => (ticket, payload),
            other => panic!("Expected SubmitEnquiry effect, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_submit_issues_no_request() {
        let mut app = test_app();
        update(&mut app, Action::OpenEnquiry(hotel_x()));
        update(&mut app, Action::EditContact(FieldEdit::Paste("An".to_string())));

        assert_eq!(update(&mut app, Action::SubmitEnquiry), Effect::None);

        let form = app.enquiry.as_ref().unwrap();
        assert_eq!(form.lifecycle, RequestLifecycle::Idle);
        assert_eq!(
            form.visible_error(Field::ContactName),
            Some("Name must be at least 3 characters")
        );
        assert_eq!(form.visible_error(Field::ContactEmail), Some("Email is required"));
    }

    #[test]
    fn test_valid_submit_builds_payload_and_goes_pending() {
        let mut app = test_app();
        open_filled(&mut app);
        let (ticket, payload) = submit(&mut app);

        assert_eq!(payload.hotel, 12);
        assert_eq!(payload.enquiry_name, "Ann");
        assert_eq!(ticket.attempt, 1);
        assert!(app.enquiry.as_ref().unwrap().lifecycle.is_pending());
    }

    #[test]
    fn test_submit_while_pending_is_ignored() {
        let mut app = test_app();
        open_filled(&mut app);
        submit(&mut app);
        assert_eq!(update(&mut app, Action::SubmitEnquiry), Effect::None);
        assert_eq!(app.enquiry.as_ref().unwrap().attempt, 1);
    }

    #[test]
    fn test_success_settles_and_resets_contact_fields() {
        let mut app = test_app();
        open_filled(&mut app);
        let (ticket, _) = submit(&mut app);

        let effect = update(
            &mut app,
            Action::EnquirySettled {
                ticket,
                result: Ok(()),
            },
        );
        assert_eq!(effect, Effect::ScheduleBannerDismiss(ticket));

        let form = app.enquiry.as_ref().unwrap();
        assert_eq!(
            form.lifecycle,
            RequestLifecycle::Succeeded(SUCCESS_MESSAGE.to_string())
        );
        assert!(form.contact_name.is_empty());
        assert!(form.contact_email.is_empty());
        assert_eq!(form.subject, hotel_x());
    }

    #[test]
    fn test_status_failure_keeps_status_text_and_resets() {
        let mut app = test_app();
        open_filled(&mut app);
        let (ticket, _) = submit(&mut app);

        let err = RequestError::Status {
            code: 500,
            status_text: "Internal Server Error".to_string(),
        };
        update(
            &mut app,
            Action::EnquirySettled {
                ticket,
                result: Err(err.clone()),
            },
        );

        let form = app.enquiry.as_ref().unwrap();
        assert_eq!(form.lifecycle, RequestLifecycle::Failed(err));
        assert_eq!(
            form.lifecycle.error().unwrap().user_message(),
            "Internal Server Error"
        );
        assert!(form.contact_name.is_empty());
        assert_eq!(form.subject.name, "Hotel X");
    }

    #[test]
    fn test_transport_failure_shows_generic_message() {
        let mut app = test_app();
        open_filled(&mut app);
        let (ticket, _) = submit(&mut app);
        update(
            &mut app,
            Action::EnquirySettled {
                ticket,
                result: Err(RequestError::Transport("tcp connect error".to_string())),
            },
        );
        let form = app.enquiry.as_ref().unwrap();
        assert_eq!(
            form.lifecycle.error().unwrap().user_message(),
            "An error occurred"
        );
        assert!(!app.status_message.contains("tcp"));
        assert!(form.contact_name.is_empty());
        assert!(form.contact_email.is_empty());
        assert_eq!(form.subject.name, "Hotel X");
    }

    #[test]
    fn test_result_for_closed_form_is_dropped() {
        let mut app = test_app();
        open_filled(&mut app);
        let (ticket, _) = submit(&mut app);
        update(&mut app, Action::CloseEnquiry);
        update(&mut app, Action::OpenEnquiry(hotel_x()));

        let effect = update(
            &mut app,
            Action::EnquirySettled {
                ticket,
                result: Ok(()),
            },
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(app.enquiry.as_ref().unwrap().lifecycle, RequestLifecycle::Idle);
    }

    #[test]
    fn test_dismiss_banner_returns_to_idle() {
        let mut app = test_app();
        open_filled(&mut app);
        let (ticket, _) = submit(&mut app);
        update(
            &mut app,
            Action::EnquirySettled {
                ticket,
                result: Ok(()),
            },
        );
        update(&mut app, Action::DismissBanner(ticket));
        assert_eq!(app.enquiry.as_ref().unwrap().lifecycle, RequestLifecycle::Idle);
    }

    #[test]
    fn test_stale_dismiss_does_not_clear_newer_banner() {
        let mut app = test_app();
        open_filled(&mut app);
        let (first, _) = submit(&mut app);
        update(
            &mut app,
            Action::EnquirySettled {
                ticket: first,
                result: Ok(()),
            },
        );

        // Resubmit before the first banner times out
        update(&mut app, Action::EditContact(FieldEdit::Paste("Bob".to_string())));
        update(&mut app, Action::FocusNextContact);
        update(&mut app, Action::EditContact(FieldEdit::Paste("b@c.no".to_string())));
        let (second, _) = submit(&mut app);
        update(
            &mut app,
            Action::EnquirySettled {
                ticket: second,
                result: Ok(()),
            },
        );

        update(&mut app, Action::DismissBanner(first));
        assert!(app.enquiry.as_ref().unwrap().lifecycle.is_settled());
        update(&mut app, Action::DismissBanner(second));
        assert_eq!(app.enquiry.as_ref().unwrap().lifecycle, RequestLifecycle::Idle);
    }

    #[test]
    fn test_messages_without_token_skips_fetch() {
        let mut app = test_app();
        let effect = update(&mut app, Action::ShowScreen(Screen::Messages));
        assert_eq!(effect, Effect::None);
        let view = app.messages.as_ref().unwrap();
        assert_eq!(view.error(), Some(&RequestError::Unauthenticated));
    }

    #[test]
    fn test_messages_with_token_fetches_once() {
        let mut app = test_app_with_token("jwt");
        let effect = update(&mut app, Action::ShowScreen(Screen::Messages));
        let instance = match effect {
            Effect::FetchMessages { instance, token } => {
                assert_eq!(token.bearer(), "Bearer jwt");
                instance
            }
            other => panic!("Expected FetchMessages, got {other:?}"),
        };
        // Already mounted: no second fetch
        assert_eq!(
            update(&mut app, Action::ShowScreen(Screen::Messages)),
            Effect::None
        );

        let message = Message {
            id: "1".to_string(),
            sender_name: "Bo".to_string(),
            sender_email: "bo@x.com".to_string(),
            body: "Hi".to_string(),
        };
        update(
            &mut app,
            Action::MessagesLoaded {
                instance,
                result: Ok(vec![message.clone()]),
            },
        );
        assert_eq!(app.messages.as_ref().unwrap().messages(), &[message]);
    }

    #[test]
    fn test_messages_result_after_unmount_is_noop() {
        let mut app = test_app_with_token("jwt");
        let Effect::FetchMessages { instance, .. } =
            update(&mut app, Action::ShowScreen(Screen::Messages))
        else {
            panic!("Expected FetchMessages");
        };
        update(&mut app, Action::ShowScreen(Screen::Hotels));
        update(
            &mut app,
            Action::MessagesLoaded {
                instance,
                result: Ok(Vec::new()),
            },
        );
        assert!(app.messages.is_none());
    }

    #[test]
    fn test_remount_ignores_result_for_old_instance() {
        let mut app = test_app_with_token("jwt");
        let Effect::FetchMessages { instance: old, .. } =
            update(&mut app, Action::ShowScreen(Screen::Messages))
        else {
            panic!("Expected FetchMessages");
        };
        let Effect::FetchMessages { instance: new, .. } =
            update(&mut app, Action::RefreshMessages)
        else {
            panic!("Expected FetchMessages");
        };
        assert_ne!(old, new);

        update(
            &mut app,
            Action::MessagesLoaded {
                instance: old,
                result: Err(RequestError::Decode("bad".to_string())),
            },
        );
        assert!(app.messages.as_ref().unwrap().is_loading());
    }

    #[test]
    fn test_fetch_failure_is_explicit_state() {
        let mut app = test_app_with_token("jwt");
        let Effect::FetchMessages { instance, .. } =
            update(&mut app, Action::ShowScreen(Screen::Messages))
        else {
            panic!("Expected FetchMessages");
        };
        update(
            &mut app,
            Action::MessagesLoaded {
                instance,
                result: Err(RequestError::Transport("reset".to_string())),
            },
        );
        let view = app.messages.as_ref().unwrap();
        assert!(!view.is_loading());
        assert_eq!(view.error().unwrap().user_message(), "An error occurred");
    }

    #[test]
    fn test_screen_change_closes_modal() {
        let mut app = test_app();
        update(&mut app, Action::OpenEnquiry(hotel_x()));
        update(&mut app, Action::ShowScreen(Screen::Dashboard));
        assert!(app.enquiry.is_none());
        assert_eq!(app.screen, Screen::Dashboard);
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
