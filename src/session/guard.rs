//! Route-guard verdicts, kept pure so the redirect discipline is testable
//! without a router.

use crate::session::store::{Session, SessionStatus};

/// What a protected route should do with the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    /// Session not yet trustworthy; hold a neutral placeholder. Protected
    /// content must not flash while this holds.
    Resolving,
    /// Definitely unauthenticated; send the viewer to the sign-in route.
    Redirecting,
    /// Render the protected content.
    Authorized,
}

impl GuardState {
    pub fn for_session(session: &Session) -> Self {
        if session.resolving || session.status == SessionStatus::Authenticating {
            GuardState::Resolving
        } else if session.is_authenticated() {
            GuardState::Authorized
        } else {
            GuardState::Redirecting
        }
    }
}

/// One navigation per stay in `Redirecting`.
///
/// The guard re-evaluates on every session change; without the latch a
/// second evaluation in the same unauthenticated stretch would queue a
/// second navigation. Leaving `Redirecting` re-arms it, so a later
/// logout redirects again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RedirectLatch {
    fired: bool,
}

impl RedirectLatch {
    /// Feed the latest verdict; returns true when a redirect should be
    /// issued right now.
    pub fn observe(&mut self, state: GuardState) -> bool {
        match state {
            GuardState::Redirecting => {
                if self.fired {
                    false
                } else {
                    self.fired = true;
                    true
                }
            }
            GuardState::Resolving | GuardState::Authorized => {
                self.fired = false;
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;
