use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::session::persist::MemoryMarkers;
use crate::session::store::{Session, SessionStatus, SessionStore};

const NOW: f64 = 1_000_000.0;
const DAY_MS: f64 = 86_400_000.0;

fn store_with(markers: Rc<MemoryMarkers>, config: LocalFlagConfig) -> SessionStore {
    SessionStore::new(LocalFlagStrategy::new(markers, config).with_clock(|| NOW))
}

// ============================================================================
// Marker grammar
// ============================================================================

#[test]
fn bare_sentinel_is_authenticated() {
    assert!(marker_authenticated("authenticated", "authenticated", None, NOW));
}

#[test]
fn bare_sentinel_never_expires_even_with_a_ttl() {
    assert!(marker_authenticated("authenticated", "authenticated", Some(DAY_MS), NOW));
}

#[test]
fn corrupt_markers_are_treated_as_absent() {
    for raw in ["", "auth", "Authenticated", "authenticated-extra", "authenticated@", "authenticated@soon"] {
        assert!(
            !marker_authenticated(raw, "authenticated", None, NOW),
            "{raw:?} should not restore"
        );
    }
}

#[test]
fn timestamped_marker_respects_the_ttl() {
    let fresh = format!("authenticated@{}", NOW - DAY_MS / 2.0);
    assert!(marker_authenticated(&fresh, "authenticated", Some(DAY_MS), NOW));

    let stale = format!("authenticated@{}", NOW - DAY_MS * 2.0);
    assert!(!marker_authenticated(&stale, "authenticated", Some(DAY_MS), NOW));
}

#[test]
fn timestamped_marker_without_a_configured_ttl_still_restores() {
    let stamped = format!("authenticated@{}", NOW - DAY_MS * 400.0);
    assert!(marker_authenticated(&stamped, "authenticated", None, NOW));
}

#[test]
fn marker_value_is_bare_without_a_ttl_and_stamped_with_one() {
    assert_eq!(marker_value("authenticated", None, NOW), "authenticated");
    assert_eq!(marker_value("authenticated", Some(DAY_MS), NOW), "authenticated@1000000");
}

// ============================================================================
// Restore
// ============================================================================

#[test]
fn initialize_without_a_marker_settles_unauthenticated() {
    let store = store_with(Rc::new(MemoryMarkers::new()), LocalFlagConfig::default());
    store.initialize();

    let session = store.session();
    assert_eq!(session.status, SessionStatus::Unauthenticated);
    assert!(!session.resolving);
}

#[test]
fn initialize_with_the_shipped_marker_settles_authenticated() {
    let markers = Rc::new(MemoryMarkers::seeded("nimbus-auth", "authenticated"));
    let store = store_with(markers, LocalFlagConfig::default());
    store.initialize();

    let session = store.session();
    assert_eq!(session.status, SessionStatus::Authenticated);
    assert_eq!(session.token, None);
    assert!(!session.resolving);
}

#[test]
fn initialize_leaves_an_expired_marker_on_disk() {
    let markers = Rc::new(MemoryMarkers::seeded(
        "nimbus-auth",
        &format!("authenticated@{}", NOW - DAY_MS * 3.0),
    ));
    let config = LocalFlagConfig {
        session_ttl_ms: Some(DAY_MS),
        ..LocalFlagConfig::default()
    };
    let store = store_with(markers.clone(), config);
    store.initialize();

    assert_eq!(store.status(), SessionStatus::Unauthenticated);
    // Read-only restore: the stale marker is still there.
    assert!(markers.get("nimbus-auth").is_some());
}

// ============================================================================
// Login / logout (native builds run the staged flow synchronously)
// ============================================================================

#[cfg(not(feature = "hydrate"))]
mod synchronous {
    use super::*;

    #[test]
    fn login_writes_the_marker_and_settles_authenticated() {
        let markers = Rc::new(MemoryMarkers::new());
        let store = store_with(markers.clone(), LocalFlagConfig::default());
        store.initialize();

        let seen: Rc<RefCell<Vec<SessionStatus>>> = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        let _sub = store.subscribe(move |session: &Session| log.borrow_mut().push(session.status));

        let done = Rc::new(RefCell::new(None));
        let slot = done.clone();
        store.login(move |result| *slot.borrow_mut() = Some(result));

        assert_eq!(*done.borrow(), Some(Ok(())));
        assert_eq!(
            *seen.borrow(),
            vec![SessionStatus::Authenticating, SessionStatus::Authenticated]
        );
        assert_eq!(markers.get("nimbus-auth"), Some("authenticated".to_owned()));
        // Local sessions carry no token.
        assert_eq!(store.session().token, None);
    }

    #[test]
    fn login_with_a_ttl_writes_a_stamped_marker() {
        let markers = Rc::new(MemoryMarkers::new());
        let config = LocalFlagConfig {
            session_ttl_ms: Some(DAY_MS),
            ..LocalFlagConfig::default()
        };
        let store = store_with(markers.clone(), config);
        store.initialize();
        store.login(|_| {});

        assert_eq!(markers.get("nimbus-auth"), Some("authenticated@1000000".to_owned()));
    }

    #[test]
    fn logout_removes_the_marker() {
        let markers = Rc::new(MemoryMarkers::seeded("nimbus-auth", "authenticated"));
        let store = store_with(markers.clone(), LocalFlagConfig::default());
        store.initialize();
        assert_eq!(store.status(), SessionStatus::Authenticated);

        store.logout();
        assert_eq!(store.status(), SessionStatus::Unauthenticated);
        assert_eq!(markers.get("nimbus-auth"), None);
    }

    #[test]
    fn full_cycle_restores_what_login_persisted() {
        let markers = Rc::new(MemoryMarkers::new());
        {
            let store = store_with(markers.clone(), LocalFlagConfig::default());
            store.initialize();
            store.login(|_| {});
            assert_eq!(store.status(), SessionStatus::Authenticated);
        }

        // A later visit sees the persisted marker.
        let revisit = store_with(markers, LocalFlagConfig::default());
        revisit.initialize();
        assert_eq!(revisit.status(), SessionStatus::Authenticated);
    }
}
