//! Deployments page: history table, quick stats, and the two-step
//! "new deployment" dialog (pick a repository, confirm, queue it).
//!
//! Queueing is mocked end to end: a confirmed deployment lands at the
//! head of the table as `Queued` and nothing ever builds it. The
//! repository selector fakes a short fetch so the loading state renders.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use uuid::Uuid;

use crate::util::time::{self, HOUR_MS, MINUTE_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DeployStatus {
    Running,
    Success,
    Failed,
    Queued,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Environment {
    Production,
    Staging,
    Development,
}

pub(crate) fn status_label(status: DeployStatus) -> &'static str {
    match status {
        DeployStatus::Running => "In Progress",
        DeployStatus::Success => "Successful",
        DeployStatus::Failed => "Failed",
        DeployStatus::Queued => "Queued",
    }
}

pub(crate) fn status_class(status: DeployStatus) -> &'static str {
    match status {
        DeployStatus::Running => "deploy-status deploy-status--running",
        DeployStatus::Success => "deploy-status deploy-status--success",
        DeployStatus::Failed => "deploy-status deploy-status--failed",
        DeployStatus::Queued => "deploy-status deploy-status--queued",
    }
}

pub(crate) fn environment_label(environment: Environment) -> &'static str {
    match environment {
        Environment::Production => "Production",
        Environment::Staging => "Staging",
        Environment::Development => "Development",
    }
}

pub(crate) fn environment_class(environment: Environment) -> &'static str {
    match environment {
        Environment::Production => "deploy-env deploy-env--production",
        Environment::Staging => "deploy-env deploy-env--staging",
        Environment::Development => "deploy-env deploy-env--development",
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Deployment {
    pub id: String,
    pub repo_name: &'static str,
    pub branch: &'static str,
    pub status: DeployStatus,
    pub url: Option<&'static str>,
    pub deployed_at_ms: f64,
    pub environment: Environment,
}

fn sample_deployments(now_ms: f64) -> Vec<Deployment> {
    vec![
        Deployment {
            id: "deploy-1".to_owned(),
            repo_name: "my-next-app",
            branch: "main",
            status: DeployStatus::Success,
            url: Some("https://my-next-app.vercel.app"),
            deployed_at_ms: now_ms - 2.0 * HOUR_MS,
            environment: Environment::Production,
        },
        Deployment {
            id: "deploy-2".to_owned(),
            repo_name: "portfolio-website",
            branch: "main",
            status: DeployStatus::Running,
            url: None,
            deployed_at_ms: now_ms - 30.0 * MINUTE_MS,
            environment: Environment::Production,
        },
        Deployment {
            id: "deploy-3".to_owned(),
            repo_name: "api-service",
            branch: "develop",
            status: DeployStatus::Failed,
            url: None,
            deployed_at_ms: now_ms - 12.0 * HOUR_MS,
            environment: Environment::Staging,
        },
        Deployment {
            id: "deploy-4".to_owned(),
            repo_name: "dashboard-ui",
            branch: "feature/auth",
            status: DeployStatus::Queued,
            url: None,
            deployed_at_ms: now_ms - 10.0 * MINUTE_MS,
            environment: Environment::Development,
        },
        Deployment {
            id: "deploy-5".to_owned(),
            repo_name: "mobile-app-backend",
            branch: "main",
            status: DeployStatus::Success,
            url: Some("https://api.myapp.com"),
            deployed_at_ms: now_ms - 24.0 * HOUR_MS,
            environment: Environment::Production,
        },
    ]
}

/// Quick-stat counts over the table. Running and queued both count as in
/// progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct DeployCounts {
    pub total: usize,
    pub successful: usize,
    pub in_progress: usize,
    pub failed: usize,
}

pub(crate) fn tally(deployments: &[Deployment]) -> DeployCounts {
    let mut counts = DeployCounts {
        total: deployments.len(),
        ..DeployCounts::default()
    };
    for deployment in deployments {
        match deployment.status {
            DeployStatus::Success => counts.successful += 1,
            DeployStatus::Running | DeployStatus::Queued => counts.in_progress += 1,
            DeployStatus::Failed => counts.failed += 1,
        }
    }
    counts
}

/// A repository offered by the deploy dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RepoChoice {
    pub name: &'static str,
    pub language: &'static str,
    pub default_branch: &'static str,
    pub private: bool,
}

fn selectable_repos() -> Vec<RepoChoice> {
    vec![
        RepoChoice { name: "my-next-app", language: "TypeScript", default_branch: "main", private: false },
        RepoChoice { name: "portfolio-website", language: "JavaScript", default_branch: "main", private: false },
        RepoChoice { name: "api-service", language: "TypeScript", default_branch: "main", private: true },
        RepoChoice { name: "dashboard-ui", language: "TypeScript", default_branch: "main", private: true },
        RepoChoice { name: "mobile-app-backend", language: "JavaScript", default_branch: "main", private: true },
    ]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RepoFilter {
    All,
    Public,
    Private,
}

pub(crate) fn filter_repos(filter: RepoFilter, repos: &[RepoChoice]) -> Vec<RepoChoice> {
    repos
        .iter()
        .copied()
        .filter(|repo| match filter {
            RepoFilter::All => true,
            RepoFilter::Public => !repo.private,
            RepoFilter::Private => repo.private,
        })
        .collect()
}

/// Build the queued deployment a confirmation produces.
pub(crate) fn queue_deployment(repo: RepoChoice, now_ms: f64) -> Deployment {
    Deployment {
        id: format!("deploy-{}", Uuid::new_v4()),
        repo_name: repo.name,
        branch: repo.default_branch,
        status: DeployStatus::Queued,
        url: None,
        deployed_at_ms: now_ms,
        environment: Environment::Production,
    }
}

/// Newest first: the fresh deployment goes to the head of the table.
pub(crate) fn enqueue(deployments: &mut Vec<Deployment>, repo: RepoChoice, now_ms: f64) {
    deployments.insert(0, queue_deployment(repo, now_ms));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DeployStep {
    Select,
    Confirm,
}

#[component]
pub fn DeploymentsPage() -> impl IntoView {
    let now = time::now_ms();
    let deployments = RwSignal::new(sample_deployments(now));
    let dialog_open = RwSignal::new(false);
    let step = RwSignal::new(DeployStep::Select);
    let selected = RwSignal::new(None::<RepoChoice>);

    let close_dialog = move || {
        dialog_open.set(false);
        step.set(DeployStep::Select);
        selected.set(None);
    };

    let deploy_now = move |_| {
        if let Some(repo) = selected.get_untracked() {
            deployments.update(|all| enqueue(all, repo, time::now_ms()));
            close_dialog();
        }
    };

    view! {
        <div class="dashboard-page">
            <div class="dashboard-page__header">
                <h1 class="dashboard-page__title">"Deployments"</h1>
                <button class="btn btn--primary" on:click=move |_| dialog_open.set(true)>
                    "New Deployment"
                </button>
            </div>

            <div class="deploy-stats">
                <div class="deploy-stats__card">
                    <span class="deploy-stats__label">"Total Deployments"</span>
                    <span class="deploy-stats__value">{move || deployments.with(|all| tally(all).total)}</span>
                </div>
                <div class="deploy-stats__card">
                    <span class="deploy-stats__label">"Successful"</span>
                    <span class="deploy-stats__value">{move || deployments.with(|all| tally(all).successful)}</span>
                </div>
                <div class="deploy-stats__card">
                    <span class="deploy-stats__label">"In Progress"</span>
                    <span class="deploy-stats__value">{move || deployments.with(|all| tally(all).in_progress)}</span>
                </div>
                <div class="deploy-stats__card">
                    <span class="deploy-stats__label">"Failed"</span>
                    <span class="deploy-stats__value">{move || deployments.with(|all| tally(all).failed)}</span>
                </div>
            </div>

            <section class="deploy-table">
                <h2 class="deploy-table__heading">"Recent Deployments"</h2>
                <p class="deploy-table__hint">"View and manage all your deployed applications"</p>
                <table class="deploy-table__grid">
                    <thead>
                        <tr>
                            <th>"Repository"</th>
                            <th>"Branch"</th>
                            <th>"Status"</th>
                            <th>"Environment"</th>
                            <th>"Deployed At"</th>
                            <th>"Live URL"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            deployments
                                .get()
                                .into_iter()
                                .map(|deployment| view! { <DeploymentRow deployment=deployment /> })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </section>

            <Show when=move || dialog_open.get()>
                <div class="dialog-backdrop" on:click=move |_| close_dialog()>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <div class="dialog__header">
                            <h2 class="dialog__title">
                                {move || match step.get() {
                                    DeployStep::Select => "Select Repository",
                                    DeployStep::Confirm => "Deploy Repository",
                                }}
                            </h2>
                            <button class="dialog__close" on:click=move |_| close_dialog()>
                                "✕"
                            </button>
                        </div>

                        {move || match step.get() {
                            DeployStep::Select => {
                                view! { <RepoSelector step=step selected=selected /> }.into_any()
                            }
                            DeployStep::Confirm => view! { <DeployConfirmation selected=selected /> }.into_any(),
                        }}

                        <div class="dialog__footer">
                            {move || match step.get() {
                                DeployStep::Select => view! {
                                    <button class="btn btn--quiet" on:click=move |_| close_dialog()>
                                        "Cancel"
                                    </button>
                                }
                                .into_any(),
                                DeployStep::Confirm => view! {
                                    <button class="btn btn--quiet" on:click=move |_| step.set(DeployStep::Select)>
                                        "Back"
                                    </button>
                                    <button class="btn btn--deploy" on:click=deploy_now>
                                        "Deploy Now"
                                    </button>
                                }
                                .into_any(),
                            }}
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn DeploymentRow(deployment: Deployment) -> impl IntoView {
    view! {
        <tr class="deploy-table__row" attr:data-deploy-id=deployment.id.clone()>
            <td>{deployment.repo_name}</td>
            <td>{deployment.branch}</td>
            <td>
                <span class=status_class(deployment.status)>{status_label(deployment.status)}</span>
            </td>
            <td>
                <span class=environment_class(deployment.environment)>
                    {environment_label(deployment.environment)}
                </span>
            </td>
            <td>{time::format_timestamp(deployment.deployed_at_ms)}</td>
            <td>
                {match deployment.url {
                    Some(url) => view! {
                        <a class="deploy-table__visit" href=url target="_blank" rel="noopener noreferrer">
                            "Visit"
                        </a>
                    }
                    .into_any(),
                    None => view! { <span class="deploy-table__no-url">"Not available"</span> }.into_any(),
                }}
            </td>
            <td>
                <button class="btn btn--quiet btn--small">"Details"</button>
            </td>
        </tr>
    }
}

#[component]
fn RepoSelector(step: RwSignal<DeployStep>, selected: RwSignal<Option<RepoChoice>>) -> impl IntoView {
    // Fake the repository fetch so the spinner is visible in the browser;
    // native renders skip straight to the list.
    let loading = RwSignal::new(cfg!(feature = "hydrate"));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(1_000).await;
        loading.set(false);
    });

    let filter = RwSignal::new(RepoFilter::All);
    let tab = move |label: &'static str, value: RepoFilter| {
        view! {
            <button
                class="repo-filter__tab"
                class:repo-filter__tab--active=move || filter.get() == value
                on:click=move |_| filter.set(value)
            >
                {label}
            </button>
        }
    };

    let pick = move |repo: RepoChoice| {
        selected.set(Some(repo));
        step.set(DeployStep::Confirm);
    };

    view! {
        <div class="repo-selector">
            <div class="repo-filter">
                {tab("All Repos", RepoFilter::All)}
                {tab("Public", RepoFilter::Public)}
                {tab("Private", RepoFilter::Private)}
            </div>

            {move || {
                if loading.get() {
                    return view! {
                        <p class="repo-selector__loading">"Loading repositories..."</p>
                    }
                    .into_any();
                }
                let repos = filter_repos(filter.get(), &selectable_repos());
                if repos.is_empty() {
                    return view! { <p class="repo-selector__empty">"No repositories found"</p> }
                        .into_any();
                }
                repos
                    .into_iter()
                    .map(|repo| {
                        view! {
                            <button class="repo-selector__entry" on:click=move |_| pick(repo)>
                                <span class="repo-selector__name">{repo.name}</span>
                                <span class="repo-selector__detail">
                                    {repo.default_branch} " • " {repo.language}
                                </span>
                                <span
                                    class="repo-visibility"
                                    class:repo-visibility--private=repo.private
                                >
                                    {if repo.private { "Private" } else { "Public" }}
                                </span>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </div>
    }
}

#[component]
fn DeployConfirmation(selected: RwSignal<Option<RepoChoice>>) -> impl IntoView {
    view! {
        {move || {
            selected
                .get()
                .map(|repo| {
                    view! {
                        <div class="deploy-confirm">
                            <div class="deploy-confirm__banner">
                                <strong>"Ready to deploy"</strong>
                                <p>
                                    "You're about to deploy " <strong>{repo.name}</strong>
                                    " from the " <strong>{repo.default_branch}</strong> " branch."
                                </p>
                            </div>
                            <h3 class="deploy-confirm__heading">"Deployment Settings"</h3>
                            <dl class="deploy-confirm__settings">
                                <dt>"Repository"</dt>
                                <dd>{repo.name}</dd>
                                <dt>"Branch"</dt>
                                <dd>{repo.default_branch}</dd>
                                <dt>"Environment"</dt>
                                <dd>"Production"</dd>
                                <dt>"Build Command"</dt>
                                <dd><code>"npm run build"</code></dd>
                            </dl>
                        </div>
                    }
                })
        }}
    }
}

#[cfg(test)]
#[path = "deployments_test.rs"]
mod deployments_test;
