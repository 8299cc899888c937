use std::cell::RefCell;
use std::rc::Rc;

use super::*;

/// Subscribe and record events, discarding the attach replay so tests
/// only assert on what happens after registration.
fn recorded_events(provider: &MockIdentity) -> (ProviderSubscription, Rc<RefCell<Vec<IdentityEvent>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let subscription = provider.on_state_change(Box::new(move |event| {
        sink.borrow_mut().push(event);
    }));
    seen.borrow_mut().clear();
    (subscription, seen)
}

// ============================================================================
// Attach replay
// ============================================================================

#[test]
fn fresh_provider_replays_signed_out_on_attach() {
    let provider = MockIdentity::granting("octocat", None);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let _sub = provider.on_state_change(Box::new(move |event| {
        sink.borrow_mut().push(event);
    }));

    assert_eq!(*seen.borrow(), vec![IdentityEvent::SignedOut]);
}

#[test]
fn late_subscriber_replays_the_established_session() {
    let provider = MockIdentity::granting("octocat", Some("abc123"));
    provider.authenticate(Box::new(|_| {}));

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let _sub = provider.on_state_change(Box::new(move |event| {
        sink.borrow_mut().push(event);
    }));

    assert_eq!(
        *seen.borrow(),
        vec![IdentityEvent::SignedIn {
            handle: "octocat".to_owned(),
            token: Some("abc123".to_owned()),
        }]
    );
}

// ============================================================================
// authenticate
// ============================================================================

#[test]
fn granting_provider_reports_grant_and_echoes_signed_in() {
    let provider = MockIdentity::granting("octocat", Some("abc123"));
    let (subscription, seen) = recorded_events(&provider);

    let result = Rc::new(RefCell::new(None));
    let slot = result.clone();
    provider.authenticate(Box::new(move |outcome| {
        *slot.borrow_mut() = Some(outcome);
    }));

    assert_eq!(
        *result.borrow(),
        Some(Ok(IdentityGrant {
            handle: "octocat".to_owned(),
            token: Some("abc123".to_owned()),
        }))
    );
    assert_eq!(
        *seen.borrow(),
        vec![IdentityEvent::SignedIn {
            handle: "octocat".to_owned(),
            token: Some("abc123".to_owned()),
        }]
    );
    subscription.release();
}

#[test]
fn denying_provider_reports_failure_without_events() {
    let provider = MockIdentity::denying(AuthFailure::Cancelled);
    let (subscription, seen) = recorded_events(&provider);

    let result = Rc::new(RefCell::new(None));
    let slot = result.clone();
    provider.authenticate(Box::new(move |outcome| {
        *slot.borrow_mut() = Some(outcome);
    }));

    assert_eq!(*result.borrow(), Some(Err(AuthFailure::Cancelled)));
    assert!(seen.borrow().is_empty());
    subscription.release();
}

// ============================================================================
// state-change channel
// ============================================================================

#[test]
fn sign_out_notifies_every_handler_in_order() {
    let provider = MockIdentity::granting("octocat", None);
    let order = Rc::new(RefCell::new(Vec::new()));

    let first = order.clone();
    let _first_sub = provider.on_state_change(Box::new(move |event| {
        if event == IdentityEvent::SignedOut {
            first.borrow_mut().push("first");
        }
    }));
    let second = order.clone();
    let _second_sub = provider.on_state_change(Box::new(move |event| {
        if event == IdentityEvent::SignedOut {
            second.borrow_mut().push("second");
        }
    }));

    // Each subscription saw its own attach replay before this point.
    order.borrow_mut().clear();
    provider.sign_out();
    assert_eq!(*order.borrow(), vec!["first", "second"]);
}

#[test]
fn released_subscription_stops_receiving_events() {
    let provider = MockIdentity::granting("octocat", None);
    let (subscription, seen) = recorded_events(&provider);

    provider.emit(IdentityEvent::SignedOut);
    assert_eq!(seen.borrow().len(), 1);

    subscription.release();
    provider.emit(IdentityEvent::ChannelClosed);
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn dropping_subscription_releases_it() {
    let provider = MockIdentity::granting("octocat", None);
    let (subscription, seen) = recorded_events(&provider);
    drop(subscription);

    provider.emit(IdentityEvent::SignedOut);
    assert!(seen.borrow().is_empty());
}

#[test]
fn clones_share_the_channel() {
    let provider = MockIdentity::granting("octocat", None);
    let (subscription, seen) = recorded_events(&provider);

    provider.clone().emit(IdentityEvent::ChannelClosed);
    assert_eq!(*seen.borrow(), vec![IdentityEvent::ChannelClosed]);
    subscription.release();
}
