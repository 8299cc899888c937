//! Wiring between the framework-free session store and the Leptos app.
//!
//! The store is not `Send`, so it cannot live in a signal or in context.
//! It sits in a thread-local slot instead (one browser tab, one store)
//! and mirrors every transition into the `RwSignal<Session>` the app
//! provides. Components read the signal; they call back in here only for
//! the imperative verbs.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::session::error::AuthFailure;
use crate::session::local::{LocalFlagConfig, LocalFlagStrategy};
use crate::session::persist::BrowserMarkers;
use crate::session::store::{Session, SessionStore};

thread_local! {
    static ACTIVE: RefCell<Option<SessionStore>> = const { RefCell::new(None) };
}

/// The shipped composition: local-flag sessions in durable browser
/// storage. Swapping in `FederatedStrategy` here is the whole migration.
fn compose_store() -> SessionStore {
    SessionStore::new(LocalFlagStrategy::new(
        Rc::new(BrowserMarkers::durable()),
        LocalFlagConfig::default(),
    ))
}

fn active() -> Option<SessionStore> {
    ACTIVE.with(|slot| slot.borrow().clone())
}

/// Build the store, mirror it into `session`, and kick off restore.
/// Idempotent: hydration may evaluate the calling effect more than once.
pub fn bootstrap(session: RwSignal<Session>) {
    if active().is_some() {
        return;
    }
    let store = compose_store();
    // Mirror first, then restore, so the signal observes the restore
    // transition instead of racing it. The subscription handle is
    // deliberately dropped: this listener lives as long as the tab.
    let _ = store.subscribe(move |current: &Session| session.set(current.clone()));
    session.set(store.session());
    store.initialize();
    ACTIVE.with(|slot| *slot.borrow_mut() = Some(store));
}

/// Start an interactive sign-in. `on_done` fires once, after the session
/// signal already reflects the outcome.
pub fn login(on_done: impl FnOnce(Result<(), AuthFailure>) + 'static) {
    match active() {
        Some(store) => store.login(on_done),
        None => log::warn!("login requested before session bootstrap"),
    }
}

/// End the session. A no-op when already signed out, or before bootstrap.
pub fn logout() {
    if let Some(store) = active() {
        store.logout();
    }
}

/// Drop the active store and release its provider channels. Mostly for
/// tests; the browser app keeps its store for the life of the tab.
pub fn teardown() {
    if let Some(store) = ACTIVE.with(|slot| slot.borrow_mut().take()) {
        store.teardown();
    }
}
