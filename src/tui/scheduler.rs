//! Cancellable delayed actions.
//!
//! `schedule` spawns a tokio task that sleeps, then sends one `Action` into
//! the event loop's channel. The returned `ScheduledAction` owns the task:
//! dropping it aborts the callback if it hasn't fired yet.

use log::{debug, warn};
use std::sync::mpsc;
use std::time::Duration;

use tokio::task::AbortHandle;

use crate::core::action::Action;

/// How long a settled enquiry banner stays visible.
pub const BANNER_DISMISS_DELAY: Duration = Duration::from_millis(2500);

#[must_use = "dropping a ScheduledAction cancels it"]
pub struct ScheduledAction {
    handle: AbortHandle,
}

impl ScheduledAction {
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ScheduledAction {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            debug!("Cancelling scheduled action");
        }
        self.handle.abort();
    }
}

/// Send `action` into `tx` after `delay`, unless the guard is dropped first.
pub fn schedule(action: Action, delay: Duration, tx: mpsc::Sender<Action>) -> ScheduledAction {
    let task = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if tx.send(action).is_err() {
            warn!("Failed to send scheduled action: receiver dropped");
        }
    });
    ScheduledAction {
        handle: task.abort_handle(),
    }
}
