//! Projects page: the viewer's repositories, with a detail dialog per row.
//!
//! The repository list is platform mock data shaped like the GitHub API
//! responses a connected account would return. Push recency is computed
//! against the real clock so the age badges exercise the same buckets
//! live data would.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::activity_feed::short_sha;
use crate::util::time::{self, AgeTone};

/// Head commit of a repository's default branch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct CommitSummary {
    pub sha: &'static str,
    pub author: &'static str,
    pub message: &'static str,
    pub authored_offset_ms: f64,
}

/// One repository row. Offsets are "how long before now", so the mock
/// ages stay stable relative to whenever the page renders.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct RepoSummary {
    pub name: &'static str,
    pub description: &'static str,
    pub language: Option<&'static str>,
    pub default_branch: &'static str,
    pub stars: u32,
    pub html_url: &'static str,
    pub created_offset_ms: f64,
    pub pushed_offset_ms: f64,
    pub latest_commit: Option<CommitSummary>,
}

/// Only web artifacts deploy on this platform.
pub(crate) fn deployable(language: Option<&str>) -> bool {
    matches!(language, Some("JavaScript" | "TypeScript" | "CSS"))
}

/// CSS modifier for the language dot. Unknown and missing languages share
/// the generic dot.
pub(crate) fn language_slug(language: Option<&str>) -> &'static str {
    match language {
        Some("JavaScript") => "javascript",
        Some("TypeScript") => "typescript",
        Some("Python") => "python",
        Some("Java") => "java",
        Some("C#") => "csharp",
        Some("PHP") => "php",
        Some("Ruby") => "ruby",
        Some("Go") => "go",
        Some("Swift") => "swift",
        Some("Kotlin") => "kotlin",
        Some("Rust") => "rust",
        Some("HTML") => "html",
        Some("CSS") => "css",
        _ => "other",
    }
}

pub(crate) fn description_or_placeholder(description: &str) -> &str {
    if description.is_empty() {
        "No description provided"
    } else {
        description
    }
}

pub(crate) fn age_class(tone: AgeTone) -> &'static str {
    match tone {
        AgeTone::Fresh => "repo-age repo-age--fresh",
        AgeTone::Aging => "repo-age repo-age--aging",
        AgeTone::Stale => "repo-age repo-age--stale",
    }
}

fn sample_repos() -> Vec<RepoSummary> {
    vec![
        RepoSummary {
            name: "nimbus-web",
            description: "Customer-facing dashboard for the Nimbus platform",
            language: Some("TypeScript"),
            default_branch: "main",
            stars: 128,
            html_url: "https://github.com/organization/nimbus-web",
            created_offset_ms: time::DAY_MS * 540.0,
            pushed_offset_ms: time::DAY_MS * 0.2,
            latest_commit: Some(CommitSummary {
                sha: "f8d3c24a7b5e09c1",
                author: "Maya Lindqvist",
                message: "Tighten session restore on cold loads",
                authored_offset_ms: time::DAY_MS * 0.2,
            }),
        },
        RepoSummary {
            name: "edge-router",
            description: "Request routing and TLS termination at the edge",
            language: Some("Go"),
            default_branch: "main",
            stars: 86,
            html_url: "https://github.com/organization/edge-router",
            created_offset_ms: time::DAY_MS * 900.0,
            pushed_offset_ms: time::DAY_MS * 3.0,
            latest_commit: Some(CommitSummary {
                sha: "3e7a12d9c0b2f844",
                author: "Priya Raman",
                message: "Retry upstream health checks with jitter",
                authored_offset_ms: time::DAY_MS * 3.0,
            }),
        },
        RepoSummary {
            name: "marketing-site",
            description: "Landing pages and docs",
            language: Some("JavaScript"),
            default_branch: "master",
            stars: 12,
            html_url: "https://github.com/organization/marketing-site",
            created_offset_ms: time::DAY_MS * 700.0,
            pushed_offset_ms: time::DAY_MS * 16.0,
            latest_commit: Some(CommitSummary {
                sha: "a1b2c3d4e5f60718",
                author: "Jonas Weber",
                message: "Refresh pricing page copy",
                authored_offset_ms: time::DAY_MS * 16.0,
            }),
        },
        RepoSummary {
            name: "billing-engine",
            description: "Usage metering and invoice generation",
            language: Some("Python"),
            default_branch: "main",
            stars: 34,
            html_url: "https://github.com/organization/billing-engine",
            created_offset_ms: time::DAY_MS * 1_100.0,
            pushed_offset_ms: time::DAY_MS * 150.0,
            latest_commit: None,
        },
        RepoSummary {
            name: "design-tokens",
            description: "",
            language: Some("CSS"),
            default_branch: "main",
            stars: 7,
            html_url: "https://github.com/organization/design-tokens",
            created_offset_ms: time::DAY_MS * 400.0,
            pushed_offset_ms: time::DAY_MS * 90.0,
            latest_commit: Some(CommitSummary {
                sha: "7a8b9c0d1e2f3456",
                author: "Maya Lindqvist",
                message: "Add high-contrast palette",
                authored_offset_ms: time::DAY_MS * 90.0,
            }),
        },
        RepoSummary {
            name: "ops-notes",
            description: "Runbooks and incident write-ups",
            language: None,
            default_branch: "main",
            stars: 3,
            html_url: "https://github.com/organization/ops-notes",
            created_offset_ms: time::DAY_MS * 800.0,
            pushed_offset_ms: time::DAY_MS * 500.0,
            latest_commit: None,
        },
    ]
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let now = time::now_ms();
    let repos = sample_repos();
    let selected = RwSignal::new(None::<RepoSummary>);

    let table = view! {
        <div class="repo-table">
            <table class="repo-table__grid">
                <thead>
                    <tr>
                        <th>"Project"</th>
                        <th>"Branch"</th>
                        <th>"Commit"</th>
                        <th>"Status"</th>
                        <th>"Author"</th>
                        <th class="repo-table__right">"Pushed At"</th>
                    </tr>
                </thead>
                <tbody>
                    {repos
                        .iter()
                        .map(|repo| view! { <RepoRow repo=*repo now=now selected=selected /> })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    };

    view! {
        <div class="dashboard-page">
            <h1 class="dashboard-page__title dashboard-page__title--centered">
                "Your GitHub Repositories"
            </h1>
            {if repos.is_empty() {
                view! { <p class="dashboard-page__empty">"No repositories found."</p> }.into_any()
            } else {
                table.into_any()
            }}
            {move || {
                selected
                    .get()
                    .map(|repo| view! { <RepoDialog repo=repo now=now selected=selected /> })
            }}
        </div>
    }
}

#[component]
fn RepoRow(repo: RepoSummary, now: f64, selected: RwSignal<Option<RepoSummary>>) -> impl IntoView {
    let (age_label, tone) = time::push_age(now, now - repo.pushed_offset_ms);

    view! {
        <tr class="repo-table__row">
            <td>
                <button class="repo-table__name" on:click=move |_| selected.set(Some(repo))>
                    {repo.name}
                </button>
            </td>
            <td>{repo.default_branch}</td>
            <td>
                {match repo.latest_commit {
                    Some(commit) => view! { <code class="repo-table__sha">{short_sha(commit.sha)}</code> }.into_any(),
                    None => "N/A".into_any(),
                }}
            </td>
            <td>
                <span class="repo-status repo-status--active">"Active"</span>
            </td>
            <td>{repo.latest_commit.map_or("N/A", |commit| commit.author)}</td>
            <td class="repo-table__right">
                <span class=age_class(tone) title=time::format_timestamp(now - repo.pushed_offset_ms)>
                    {age_label}
                </span>
            </td>
        </tr>
    }
}

#[component]
fn RepoDialog(repo: RepoSummary, now: f64, selected: RwSignal<Option<RepoSummary>>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| selected.set(None)>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog__header">
                    <h2 class="dialog__title">{repo.name}</h2>
                    <button class="dialog__close" on:click=move |_| selected.set(None)>
                        "✕"
                    </button>
                </div>

                <p class="dialog__description">{description_or_placeholder(repo.description)}</p>

                <div class="dialog__language">
                    <span class="dialog__label">"Language:"</span>
                    <span
                        class=format!("repo-language repo-language--{}", language_slug(repo.language))
                        aria-hidden="true"
                    ></span>
                    <span>{repo.language.unwrap_or("Not specified")}</span>
                </div>

                <div class="dialog__facts">
                    <span>"Branch: " {repo.default_branch}</span>
                    <span>"Last Update: " {time::format_day(now - repo.pushed_offset_ms)}</span>
                    <span>"Created: " {time::format_day(now - repo.created_offset_ms)}</span>
                    <span>"Stars: " {repo.stars}</span>
                </div>

                {repo.latest_commit.map(|commit| {
                    view! {
                        <div class="dialog__commit">
                            <h3 class="dialog__commit-heading">"Latest Commit"</h3>
                            <p>"SHA: " <code>{short_sha(commit.sha)}</code></p>
                            <p>"Author: " {commit.author}</p>
                            <p>"Date: " {time::format_day(now - commit.authored_offset_ms)}</p>
                            <p>"Message: " {commit.message}</p>
                        </div>
                    }
                })}

                <a class="dialog__external" href=repo.html_url target="_blank" rel="noopener noreferrer">
                    "View on GitHub"
                </a>

                <div class="dialog__footer">
                    {if deployable(repo.language) {
                        view! { <button class="btn btn--deploy">"Deploy"</button> }.into_any()
                    } else {
                        view! { <span class="repo-status repo-status--inert">"Not Deployable"</span> }
                            .into_any()
                    }}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;
