//! Session store: status, token, and ordered change notification.
//!
//! DESIGN
//! ======
//! The store is a plain single-threaded state machine with no framework
//! types in its signature, so the whole sign-in lifecycle is testable on
//! native builds. One `SessionStrategy` drives it through a `StrategySink`;
//! the sink is the only writer. Listener notification is queue-based:
//! a transition is committed to state first, then enqueued, and the queue
//! is drained by whichever call started it. A transition committed from
//! inside a listener therefore lands *after* the one being delivered,
//! never interleaved with it, and every listener sees the same global
//! order. Committing a session identical to the current one is dropped
//! before it reaches the queue, which is what makes repeated `logout()`
//! calls silent after the first.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use crate::session::error::AuthFailure;

/// Where the viewer stands with the platform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// No session. The only status from which `login()` makes progress.
    #[default]
    Unauthenticated,
    /// An interactive sign-in is in flight.
    Authenticating,
    /// Signed in until an explicit `logout()` or a provider revocation.
    Authenticated,
}

/// Which strategy produced this session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionSource {
    /// Local persisted marker; no identity behind it.
    LocalFlag,
    /// External identity provider with a state-change channel.
    FederatedProvider,
}

/// Snapshot of the viewer's session, as handed to subscribers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub status: SessionStatus,
    /// Provider API token. Only ever present on an `Authenticated` session
    /// from a `FederatedProvider`; the sink enforces that.
    pub token: Option<String>,
    pub source: SessionSource,
    /// True until the strategy has delivered its first verdict. Route
    /// guards hold their placeholder while this is set.
    pub resolving: bool,
}

impl Session {
    /// The pre-restore session: unauthenticated, but not yet trustworthy.
    pub fn resolving(source: SessionSource) -> Self {
        Self {
            status: SessionStatus::Unauthenticated,
            token: None,
            source,
            resolving: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }
}

pub type LoginCallback = Box<dyn FnOnce(Result<(), AuthFailure>)>;

/// One way of establishing and tearing down sessions.
///
/// Exactly one strategy is wired to a store, at construction. Strategies
/// report outcomes through the [`StrategySink`] they are handed; they
/// never hold store state of their own beyond provider handles.
pub trait SessionStrategy {
    fn source(&self) -> SessionSource;

    /// Restore whatever session survived the last visit. Must eventually
    /// deliver a verdict through the sink so `resolving` clears.
    fn initialize(&mut self, sink: StrategySink);

    /// Run an interactive sign-in. `on_done` fires exactly once, after the
    /// store has settled on the outcome.
    fn login(&mut self, sink: StrategySink, on_done: LoginCallback);

    /// Discard the session and any persisted trace of it.
    fn logout(&mut self, sink: StrategySink);

    /// Release provider channels. The default is fine for strategies that
    /// hold none.
    fn teardown(&mut self) {}
}

struct Listener {
    id: u64,
    callback: Rc<RefCell<dyn FnMut(&Session)>>,
}

struct StoreState {
    session: Session,
    listeners: Vec<Listener>,
    next_listener_id: u64,
    /// Transitions committed but not yet delivered.
    pending: VecDeque<Session>,
    /// True while some call frame is draining `pending`.
    delivering: bool,
}

/// Commit `next` and deliver it (and anything committed during delivery)
/// to all listeners, unless it is identical to the current session.
fn commit(state: &Rc<RefCell<StoreState>>, next: Session) {
    {
        let mut inner = state.borrow_mut();
        if inner.session == next {
            return;
        }
        // State moves before anyone is told, so a listener that reads the
        // store synchronously sees at least the session it was handed.
        inner.session = next.clone();
        inner.pending.push_back(next);
        if inner.delivering {
            // The frame that set `delivering` owns the queue.
            return;
        }
        inner.delivering = true;
    }

    loop {
        let Some(snapshot) = state.borrow_mut().pending.pop_front() else {
            break;
        };
        // Clone the callback handles out so listeners may subscribe or
        // unsubscribe while we iterate.
        let callbacks: Vec<_> = state
            .borrow()
            .listeners
            .iter()
            .map(|listener| listener.callback.clone())
            .collect();
        for callback in callbacks {
            (&mut *callback.borrow_mut())(&snapshot);
        }
    }
    state.borrow_mut().delivering = false;
}

/// Write half handed to the active strategy.
///
/// Holds only a weak reference: a sink captured by a timer or provider
/// callback that outlives the store becomes a no-op instead of keeping
/// dead state alive.
#[derive(Clone)]
pub struct StrategySink {
    state: Weak<RefCell<StoreState>>,
}

impl StrategySink {
    fn commit_session(&self, build: impl FnOnce(&Session) -> Session) {
        let Some(state) = self.state.upgrade() else {
            return;
        };
        let next = build(&state.borrow().session);
        commit(&state, next);
    }

    /// Deliver the restore verdict. Clears `resolving` either way.
    pub fn restored(&self, authenticated: bool, token: Option<String>) {
        self.commit_session(|current| Session {
            status: if authenticated {
                SessionStatus::Authenticated
            } else {
                SessionStatus::Unauthenticated
            },
            token: Self::admissible_token(current.source, authenticated, token),
            source: current.source,
            resolving: false,
        });
    }

    /// An interactive sign-in has started.
    pub fn pending(&self) {
        self.commit_session(|current| Session {
            status: SessionStatus::Authenticating,
            token: None,
            source: current.source,
            resolving: false,
        });
    }

    /// Sign-in (interactive or pushed by the provider) succeeded.
    pub fn signed_in(&self, token: Option<String>) {
        self.commit_session(|current| Session {
            status: SessionStatus::Authenticated,
            token: Self::admissible_token(current.source, true, token),
            source: current.source,
            resolving: false,
        });
    }

    /// The session ended: explicit logout, failed sign-in, or revocation.
    pub fn signed_out(&self) {
        self.commit_session(|current| Session {
            status: SessionStatus::Unauthenticated,
            token: None,
            source: current.source,
            resolving: false,
        });
    }

    /// The provider channel died underneath us. Treated as signed out;
    /// without events we cannot claim anything stronger.
    pub fn subscription_lost(&self) {
        log::warn!("identity provider channel closed; treating session as signed out");
        self.signed_out();
    }

    fn admissible_token(source: SessionSource, authenticated: bool, token: Option<String>) -> Option<String> {
        match source {
            SessionSource::FederatedProvider if authenticated => token,
            _ => None,
        }
    }
}

/// Handle returned by [`SessionStore::subscribe`].
///
/// Deliberately inert on drop: an app-lifetime listener can discard the
/// handle and stay registered. Call `unsubscribe()` to actually detach.
pub struct SessionSubscription {
    id: u64,
    state: Weak<RefCell<StoreState>>,
}

impl SessionSubscription {
    pub fn unsubscribe(self) {
        if let Some(state) = self.state.upgrade() {
            state.borrow_mut().listeners.retain(|listener| listener.id != self.id);
        }
    }
}

/// The session authority. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct SessionStore {
    state: Rc<RefCell<StoreState>>,
    strategy: Rc<RefCell<Box<dyn SessionStrategy>>>,
}

impl SessionStore {
    pub fn new(strategy: impl SessionStrategy + 'static) -> Self {
        let session = Session::resolving(strategy.source());
        Self {
            state: Rc::new(RefCell::new(StoreState {
                session,
                listeners: Vec::new(),
                next_listener_id: 0,
                pending: VecDeque::new(),
                delivering: false,
            })),
            strategy: Rc::new(RefCell::new(Box::new(strategy))),
        }
    }

    fn sink(&self) -> StrategySink {
        StrategySink {
            state: Rc::downgrade(&self.state),
        }
    }

    /// Current session snapshot.
    pub fn session(&self) -> Session {
        self.state.borrow().session.clone()
    }

    /// Current status, without the rest of the snapshot.
    pub fn status(&self) -> SessionStatus {
        self.state.borrow().session.status
    }

    /// Kick off session restore. Call once, after the initial subscribers
    /// are in place, so they observe the restore transition itself.
    pub fn initialize(&self) {
        let sink = self.sink();
        self.strategy.borrow_mut().initialize(sink);
    }

    /// Start an interactive sign-in. `on_done` fires exactly once; by the
    /// time it does, subscribers have already seen the settled session.
    pub fn login(&self, on_done: impl FnOnce(Result<(), AuthFailure>) + 'static) {
        let sink = self.sink();
        self.strategy.borrow_mut().login(sink, Box::new(on_done));
    }

    /// End the session. Safe to call in any state; calling it again once
    /// signed out changes nothing and notifies nobody.
    pub fn logout(&self) {
        let sink = self.sink();
        self.strategy.borrow_mut().logout(sink);
    }

    /// Register for session transitions. Listeners run in subscription
    /// order and observe every transition in the same global order.
    pub fn subscribe(&self, listener: impl FnMut(&Session) + 'static) -> SessionSubscription {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_listener_id;
            state.next_listener_id += 1;
            state.listeners.push(Listener {
                id,
                callback: Rc::new(RefCell::new(listener)),
            });
            id
        };
        SessionSubscription {
            id,
            state: Rc::downgrade(&self.state),
        }
    }

    /// Release provider channels. The store stays readable afterwards but
    /// no further transitions will arrive.
    pub fn teardown(&self) {
        self.strategy.borrow_mut().teardown();
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;
