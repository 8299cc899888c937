use super::*;

// ============================================================================
// Mock data sanity
// ============================================================================

#[test]
fn recent_projects_cover_every_interesting_status() {
    let projects = recent_projects();
    assert!(projects.iter().any(|p| p.status == ProjectStatus::Online));
    assert!(projects.iter().any(|p| p.status == ProjectStatus::Building));
    assert!(projects.iter().any(|p| p.status == ProjectStatus::Failed));
}

#[test]
fn recent_project_names_are_unique() {
    let projects = recent_projects();
    for (i, a) in projects.iter().enumerate() {
        for b in &projects[i + 1..] {
            assert_ne!(a.name, b.name);
        }
    }
}

#[test]
fn activity_rows_name_projects_from_the_same_page() {
    // Feed rows refer to cards above them by repo slug.
    let slugs: Vec<String> = recent_projects()
        .iter()
        .map(|p| p.name.to_lowercase().replace(' ', "-"))
        .collect();
    for entry in recent_activity() {
        assert!(
            slugs.iter().any(|slug| slug == entry.project),
            "no card for {}",
            entry.project
        );
    }
}

#[test]
fn activity_commits_abbreviate_cleanly() {
    // The feed shows the first seven characters of each commit id.
    for entry in recent_activity() {
        assert!(entry.commit.len() >= 7);
        assert!(entry.commit.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
