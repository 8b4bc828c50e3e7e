//! Messages view state: the server-owned inbox, fetched once per mount.

use crate::api::RequestError;
use crate::core::lifecycle::RequestLifecycle;

/// A contact message as shown in the table. Read-only, server order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub sender_name: String,
    pub sender_email: String,
    pub body: String,
}

/// One mounted messages table.
#[derive(Debug, Clone, PartialEq)]
pub struct MessagesView {
    pub instance: u64,
    pub lifecycle: RequestLifecycle<Vec<Message>>,
}

impl MessagesView {
    pub fn new(instance: u64) -> Self {
        Self {
            instance,
            lifecycle: RequestLifecycle::Idle,
        }
    }

    /// True while the table should show the loading placeholder.
    pub fn is_loading(&self) -> bool {
        matches!(
            self.lifecycle,
            RequestLifecycle::Idle | RequestLifecycle::Pending
        )
    }

    pub fn messages(&self) -> &[Message] {
        self.lifecycle.value().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn error(&self) -> Option<&RequestError> {
        self.lifecycle.error()
    }
}
