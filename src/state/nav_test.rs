use super::*;

fn active_entries(pathname: &str) -> Vec<&'static str> {
    SIDEBAR_ENTRIES
        .iter()
        .filter(|entry| is_active(entry.path, pathname))
        .map(|entry| entry.label)
        .collect()
}

// ============================================================================
// Active matching
// ============================================================================

#[test]
fn each_listed_route_activates_exactly_its_own_entry() {
    assert_eq!(active_entries("/"), vec!["Dashboard"]);
    assert_eq!(active_entries("/projects"), vec!["Projects"]);
    assert_eq!(active_entries("/analytics"), vec!["Analytics"]);
    assert_eq!(active_entries("/settings"), vec!["Settings"]);
}

#[test]
fn child_paths_do_not_activate_their_parent() {
    assert!(active_entries("/projects/42").is_empty());
    assert!(active_entries("/settings/profile").is_empty());
}

#[test]
fn unlisted_routes_activate_nothing() {
    assert!(active_entries("/deployments").is_empty());
    assert!(active_entries("/login").is_empty());
    assert!(active_entries("/nowhere").is_empty());
}

#[test]
fn root_path_does_not_bleed_into_other_routes() {
    // "/" is an entry path; exact matching keeps it off every other page.
    assert_eq!(active_entries("/"), vec!["Dashboard"]);
    assert!(!is_active(paths::OVERVIEW, "/projects"));
}

#[test]
fn entry_paths_are_unique() {
    // Exact matching plus unique paths is what bounds "active" to at most
    // one entry.
    for (i, a) in SIDEBAR_ENTRIES.iter().enumerate() {
        for b in &SIDEBAR_ENTRIES[i + 1..] {
            assert_ne!(a.path, b.path, "{} and {} share a path", a.label, b.label);
        }
    }
}

// ============================================================================
// Collapse geometry
// ============================================================================

#[test]
fn toggle_flips_and_double_toggle_restores() {
    let mut nav = NavState::default();
    assert!(!nav.collapsed);

    nav.toggle_collapse();
    assert!(nav.collapsed);

    nav.toggle_collapse();
    assert_eq!(nav, NavState::default());
}

#[test]
fn sidebar_width_and_content_offset_agree_in_both_states() {
    for collapsed in [false, true] {
        assert_eq!(sidebar_width(collapsed), content_offset(collapsed));
    }
    assert_eq!(sidebar_width(false), SIDEBAR_WIDTH_EXPANDED);
    assert_eq!(sidebar_width(true), SIDEBAR_WIDTH_COLLAPSED);
}

#[test]
fn double_toggle_restores_the_layout_numbers() {
    let mut nav = NavState::default();
    let before = (sidebar_width(nav.collapsed), content_offset(nav.collapsed));

    nav.toggle_collapse();
    nav.toggle_collapse();
    let after = (sidebar_width(nav.collapsed), content_offset(nav.collapsed));

    assert_eq!(before, after);
}
