use super::*;

// ============================================================================
// MemoryMarkers
// ============================================================================

#[test]
fn memory_markers_round_trip() {
    let markers = MemoryMarkers::new();
    assert_eq!(markers.get("nimbus-auth"), None);

    markers.set("nimbus-auth", "authenticated");
    assert_eq!(markers.get("nimbus-auth"), Some("authenticated".to_owned()));

    markers.set("nimbus-auth", "authenticated@123");
    assert_eq!(markers.get("nimbus-auth"), Some("authenticated@123".to_owned()));
}

#[test]
fn memory_markers_remove_is_idempotent() {
    let markers = MemoryMarkers::seeded("github-token", "gho_abc");
    markers.remove("github-token");
    assert_eq!(markers.get("github-token"), None);

    // A second remove of an absent key is fine.
    markers.remove("github-token");
    assert_eq!(markers.get("github-token"), None);
}

#[test]
fn memory_markers_keys_are_independent() {
    let markers = MemoryMarkers::new();
    markers.set("nimbus-auth", "authenticated");
    markers.set("nimbus-theme", "dark");

    markers.remove("nimbus-auth");
    assert_eq!(markers.get("nimbus-auth"), None);
    assert_eq!(markers.get("nimbus-theme"), Some("dark".to_owned()));
}

// ============================================================================
// BrowserMarkers (non-hydrate stub)
// ============================================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_markers_are_inert_without_a_browser() {
    let durable = BrowserMarkers::durable();
    durable.set("nimbus-auth", "authenticated");
    assert_eq!(durable.get("nimbus-auth"), None);

    let scoped = BrowserMarkers::session_scoped();
    scoped.set("github-token", "gho_abc");
    assert_eq!(scoped.get("github-token"), None);
    scoped.remove("github-token");
}
