//! # Request Lifecycle
//!
//! The status of one asynchronous operation, owned by the view that issued it.
//!
//! ```text
//!          begin()            settle(Ok)
//!   Idle ──────────▶ Pending ────────────▶ Succeeded(T)
//!    ▲                  │
//!    │                  │ settle(Err)
//!    │                  ▼
//!    └──── reset() ── Failed(RequestError)
//! ```

use crate::api::RequestError;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestLifecycle<T> {
    #[default]
    Idle,
    Pending,
    Succeeded(T),
    Failed(RequestError),
}

impl<T> RequestLifecycle<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestLifecycle::Pending)
    }

    /// Succeeded or Failed.
    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            RequestLifecycle::Succeeded(_) | RequestLifecycle::Failed(_)
        )
    }

    /// Enter Pending. Returns `false` (and changes nothing) if a request is
    /// already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = RequestLifecycle::Pending;
        true
    }

    /// Leave Pending with the request's outcome.
    pub fn settle(&mut self, result: Result<T, RequestError>) {
        *self = match result {
            Ok(value) => RequestLifecycle::Succeeded(value),
            Err(err) => RequestLifecycle::Failed(err),
        };
    }

    pub fn reset(&mut self) {
        *self = RequestLifecycle::Idle;
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            RequestLifecycle::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&RequestError> {
        match self {
            RequestLifecycle::Failed(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_refuses_second_request() {
        let mut lc: RequestLifecycle<()> = RequestLifecycle::Idle;
        assert!(lc.begin());
        assert!(lc.is_pending());
        assert!(!lc.begin());
        assert!(lc.is_pending());
    }

    #[test]
    fn test_settle_ok_and_err() {
        let mut lc = RequestLifecycle::Pending;
        lc.settle(Ok(3));
        assert_eq!(lc.value(), Some(&3));
        assert!(lc.is_settled());

        let mut lc: RequestLifecycle<i32> = RequestLifecycle::Pending;
        lc.settle(Err(RequestError::Unauthenticated));
        assert_eq!(lc.error(), Some(&RequestError::Unauthenticated));
        assert!(lc.value().is_none());
    }

    #[test]
    fn test_begin_after_settle_is_allowed() {
        let mut lc: RequestLifecycle<()> = RequestLifecycle::Failed(RequestError::Unauthenticated);
        assert!(lc.begin());
        lc.settle(Ok(()));
        lc.reset();
        assert_eq!(lc, RequestLifecycle::Idle);
    }
}
