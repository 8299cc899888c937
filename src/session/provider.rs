//! Identity-provider seam for federated sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! A real deployment would back this with a hosted auth SDK (GitHub OAuth
//! behind a popup, typically). The dashboard only ever sees the trait:
//! start an interactive sign-in, watch a state-change channel, ask for
//! sign-out. `MockIdentity` is the scripted stand-in the tests drive, and
//! what a federated composition plugs in until a real SDK lands; it
//! completes synchronously on native builds so test flows settle without
//! a scheduler.

use std::cell::RefCell;
use std::rc::Rc;

use crate::session::error::AuthFailure;

/// What a successful interactive sign-in hands back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentityGrant {
    /// Verified user handle, e.g. a GitHub login.
    pub handle: String,
    /// Short-lived API token, when the provider offers one.
    pub token: Option<String>,
}

/// Push notification on the provider's state-change channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IdentityEvent {
    /// The provider now considers this viewer signed in.
    SignedIn {
        handle: String,
        token: Option<String>,
    },
    /// The provider session ended (here or in another tab).
    SignedOut,
    /// The channel itself died and no further events will arrive.
    ChannelClosed,
}

pub type AuthenticateCallback = Box<dyn FnOnce(Result<IdentityGrant, AuthFailure>)>;
pub type StateChangeHandler = Box<dyn FnMut(IdentityEvent)>;

/// Handle for a registered state-change listener. Dropping it releases the
/// listener; `release()` just makes that explicit at call sites.
pub struct ProviderSubscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl ProviderSubscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn release(mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for ProviderSubscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// External identity provider, as seen from the session store.
pub trait IdentityProvider {
    /// Run the interactive sign-in flow and report how it ended. A
    /// successful flow also emits `SignedIn` on the state-change channel.
    fn authenticate(&self, done: AuthenticateCallback);

    /// Register for push notifications. The channel replays the current
    /// state to the new handler on attach, then keeps delivering events
    /// until the returned subscription is released.
    fn on_state_change(&self, handler: StateChangeHandler) -> ProviderSubscription;

    /// End the provider session. Acknowledged with a `SignedOut` event.
    fn sign_out(&self);
}

/// How a [`MockIdentity`] answers `authenticate()`.
#[derive(Clone, Debug)]
pub enum MockOutcome {
    Grant { handle: String, token: Option<String> },
    Deny(AuthFailure),
}

struct MockIdentityState {
    outcome: MockOutcome,
    /// Who the provider currently considers signed in.
    current: Option<IdentityGrant>,
    handlers: Vec<(u64, Rc<RefCell<StateChangeHandler>>)>,
    next_handler_id: u64,
}

/// Scripted provider, driven by the tests.
///
/// Clones share one underlying channel, so a test can keep a handle for
/// `emit()` while the strategy under test owns another.
#[derive(Clone)]
pub struct MockIdentity {
    state: Rc<RefCell<MockIdentityState>>,
}

impl MockIdentity {
    pub fn new(outcome: MockOutcome) -> Self {
        Self {
            state: Rc::new(RefCell::new(MockIdentityState {
                outcome,
                current: None,
                handlers: Vec::new(),
                next_handler_id: 0,
            })),
        }
    }

    /// Provider that grants every sign-in as `handle`, with `token`.
    pub fn granting(handle: &str, token: Option<&str>) -> Self {
        Self::new(MockOutcome::Grant {
            handle: handle.to_owned(),
            token: token.map(str::to_owned),
        })
    }

    /// Provider that denies every sign-in with `failure`.
    pub fn denying(failure: AuthFailure) -> Self {
        Self::new(MockOutcome::Deny(failure))
    }

    /// Push a scripted event to every registered handler, in registration
    /// order. This is how tests model "signed out in another tab" and
    /// channel loss.
    pub fn emit(&self, event: IdentityEvent) {
        {
            let mut state = self.state.borrow_mut();
            state.current = match &event {
                IdentityEvent::SignedIn { handle, token } => Some(IdentityGrant {
                    handle: handle.clone(),
                    token: token.clone(),
                }),
                IdentityEvent::SignedOut | IdentityEvent::ChannelClosed => None,
            };
        }
        // Snapshot the handler list so a handler may register or release
        // subscriptions while we iterate.
        let handlers: Vec<_> = self
            .state
            .borrow()
            .handlers
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();
        for handler in handlers {
            (handler.borrow_mut())(event.clone());
        }
    }

    fn complete(&self, done: AuthenticateCallback) {
        let outcome = self.state.borrow().outcome.clone();
        match outcome {
            MockOutcome::Grant { handle, token } => {
                self.emit(IdentityEvent::SignedIn {
                    handle: handle.clone(),
                    token: token.clone(),
                });
                done(Ok(IdentityGrant { handle, token }));
            }
            MockOutcome::Deny(failure) => done(Err(failure)),
        }
    }
}

impl IdentityProvider for MockIdentity {
    #[cfg(feature = "hydrate")]
    fn authenticate(&self, done: AuthenticateCallback) {
        // Scripted consent-screen latency, so the Authenticating state is
        // actually visible in the browser.
        let provider = self.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(1_500).await;
            provider.complete(done);
        });
    }

    #[cfg(not(feature = "hydrate"))]
    fn authenticate(&self, done: AuthenticateCallback) {
        self.complete(done);
    }

    fn on_state_change(&self, handler: StateChangeHandler) -> ProviderSubscription {
        let handler = Rc::new(RefCell::new(handler));
        let (id, replay) = {
            let mut state = self.state.borrow_mut();
            let id = state.next_handler_id;
            state.next_handler_id += 1;
            state.handlers.push((id, handler.clone()));
            let replay = match &state.current {
                Some(grant) => IdentityEvent::SignedIn {
                    handle: grant.handle.clone(),
                    token: grant.token.clone(),
                },
                None => IdentityEvent::SignedOut,
            };
            (id, replay)
        };
        // Attach replay, the way hosted auth SDKs greet a new observer.
        (handler.borrow_mut())(replay);

        let state = Rc::downgrade(&self.state);
        ProviderSubscription::new(move || {
            if let Some(state) = state.upgrade() {
                state.borrow_mut().handlers.retain(|(handler_id, _)| *handler_id != id);
            }
        })
    }

    fn sign_out(&self) {
        self.emit(IdentityEvent::SignedOut);
    }
}

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;
