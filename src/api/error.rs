use std::fmt;

/// User-facing text for any failure the user cannot act on beyond retrying.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Shown when the messages view is mounted without a credential.
pub const UNAUTHENTICATED_MESSAGE: &str = "Sign in to view messages";

/// Errors that can occur while talking to the booking API.
///
/// Every variant is terminal for the attempt that produced it. The user
/// resubmits manually; nothing here is retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The server answered with something other than 200.
    Status { code: u16, status_text: String },
    /// Connection refused, DNS failure, timeout, broken body stream.
    Transport(String),
    /// The body arrived but was not the JSON we expected.
    Decode(String),
    /// No bearer token was available, so no request was made.
    Unauthenticated,
}

impl RequestError {
    /// The message rendered in the UI. Raw transport and decode details are
    /// never part of it; those only go to the log.
    pub fn user_message(&self) -> &str {
        match self {
            RequestError::Status { status_text, .. } => status_text,
            RequestError::Transport(_) | RequestError::Decode(_) => GENERIC_ERROR_MESSAGE,
            RequestError::Unauthenticated => UNAUTHENTICATED_MESSAGE,
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::Status { code, status_text } => {
                write!(f, "HTTP {code}: {status_text}")
            }
            RequestError::Transport(msg) => write!(f, "transport error: {msg}"),
            RequestError::Decode(msg) => write!(f, "decode error: {msg}"),
            RequestError::Unauthenticated => write!(f, "no credential available"),
        }
    }
}

impl std::error::Error for RequestError {}
