use super::*;

const NOW: f64 = 1_700_000_000_000.0;

// ==========================================================================
// Quick stats
// ==========================================================================

#[test]
fn tally_counts_every_status_bucket() {
    let counts = tally(&sample_deployments(NOW));
    assert_eq!(counts.total, 5);
    assert_eq!(counts.successful, 2);
    assert_eq!(counts.in_progress, 2);
    assert_eq!(counts.failed, 1);
}

#[test]
fn running_and_queued_both_count_as_in_progress() {
    let mut rows = sample_deployments(NOW);
    rows.retain(|row| matches!(row.status, DeployStatus::Running | DeployStatus::Queued));
    let counts = tally(&rows);
    assert_eq!(counts.total, 2);
    assert_eq!(counts.in_progress, 2);
    assert_eq!(counts.successful, 0);
    assert_eq!(counts.failed, 0);
}

#[test]
fn tally_of_nothing_is_all_zero() {
    assert_eq!(tally(&[]), DeployCounts::default());
}

// ==========================================================================
// Repository filter
// ==========================================================================

#[test]
fn filter_partitions_repos_by_visibility() {
    let repos = selectable_repos();
    assert_eq!(filter_repos(RepoFilter::All, &repos).len(), 5);
    assert_eq!(filter_repos(RepoFilter::Public, &repos).len(), 2);
    assert_eq!(filter_repos(RepoFilter::Private, &repos).len(), 3);
}

#[test]
fn public_filter_keeps_only_public_repos() {
    let repos = selectable_repos();
    assert!(filter_repos(RepoFilter::Public, &repos).iter().all(|repo| !repo.private));
    assert!(filter_repos(RepoFilter::Private, &repos).iter().all(|repo| repo.private));
}

// ==========================================================================
// Queueing
// ==========================================================================

#[test]
fn confirmed_deployment_starts_queued_in_production() {
    let repo = selectable_repos()[0];
    let deployment = queue_deployment(repo, NOW);
    assert_eq!(deployment.repo_name, repo.name);
    assert_eq!(deployment.branch, repo.default_branch);
    assert_eq!(deployment.status, DeployStatus::Queued);
    assert_eq!(deployment.environment, Environment::Production);
    assert_eq!(deployment.url, None);
    assert!((deployment.deployed_at_ms - NOW).abs() < f64::EPSILON);
    assert!(deployment.id.starts_with("deploy-"));
}

#[test]
fn queued_deployments_get_distinct_ids() {
    let repo = selectable_repos()[0];
    let first = queue_deployment(repo, NOW);
    let second = queue_deployment(repo, NOW);
    assert_ne!(first.id, second.id);
}

#[test]
fn enqueue_puts_the_newest_deployment_first() {
    let mut rows = sample_deployments(NOW);
    let before = rows.clone();
    let repo = selectable_repos()[1];

    enqueue(&mut rows, repo, NOW);

    assert_eq!(rows.len(), before.len() + 1);
    assert_eq!(rows[0].repo_name, repo.name);
    assert_eq!(rows[0].status, DeployStatus::Queued);
    assert_eq!(&rows[1..], &before[..]);
}

// ==========================================================================
// Labels
// ==========================================================================

#[test]
fn status_labels_match_the_table_copy() {
    assert_eq!(status_label(DeployStatus::Running), "In Progress");
    assert_eq!(status_label(DeployStatus::Success), "Successful");
    assert_eq!(status_label(DeployStatus::Failed), "Failed");
    assert_eq!(status_label(DeployStatus::Queued), "Queued");
}

#[test]
fn status_badges_are_visually_distinct() {
    let classes = [
        status_class(DeployStatus::Running),
        status_class(DeployStatus::Success),
        status_class(DeployStatus::Failed),
        status_class(DeployStatus::Queued),
    ];
    for (i, a) in classes.iter().enumerate() {
        for b in &classes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn environment_badges_cover_every_tier() {
    assert_eq!(environment_label(Environment::Production), "Production");
    assert_eq!(environment_label(Environment::Staging), "Staging");
    assert_eq!(environment_label(Environment::Development), "Development");
    assert_ne!(
        environment_class(Environment::Production),
        environment_class(Environment::Staging)
    );
    assert_ne!(
        environment_class(Environment::Staging),
        environment_class(Environment::Development)
    );
}

// ==========================================================================
// Sample data
// ==========================================================================

#[test]
fn sample_rows_predate_now_and_have_unique_ids() {
    let rows = sample_deployments(NOW);
    assert_eq!(rows.len(), 5);
    for row in &rows {
        assert!(row.deployed_at_ms < NOW);
    }
    for (i, a) in rows.iter().enumerate() {
        for b in &rows[i + 1..] {
            assert_ne!(a.id, b.id);
        }
    }
}

#[test]
fn only_successful_samples_expose_a_live_url() {
    for row in sample_deployments(NOW) {
        if row.url.is_some() {
            assert_eq!(row.status, DeployStatus::Success);
        }
    }
}
