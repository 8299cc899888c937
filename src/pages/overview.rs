//! Dashboard landing page: account stats, recent projects, recent
//! deployment activity. All figures are platform mock data.

use leptos::prelude::*;

use crate::components::activity_feed::{ActivityEntry, ActivityFeed, ActivityStatus};
use crate::components::project_card::{ProjectCard, ProjectInfo, ProjectStatus};
use crate::components::stat_card::{StatCard, Trend};
use crate::state::nav::paths;

fn recent_projects() -> Vec<ProjectInfo> {
    vec![
        ProjectInfo {
            name: "API Service",
            description: "Core backend API service with Node.js and Express",
            status: ProjectStatus::Online,
            deployments: 42,
            last_deployed: "10 minutes ago",
            repo: Some("organization/api-service"),
            url: "api.example.com",
        },
        ProjectInfo {
            name: "Web Client",
            description: "React-based web client for the main application",
            status: ProjectStatus::Building,
            deployments: 38,
            last_deployed: "15 minutes ago",
            repo: Some("organization/web-client"),
            url: "app.example.com",
        },
        ProjectInfo {
            name: "Analytics Dashboard",
            description: "Data visualization platform for metrics and KPIs",
            status: ProjectStatus::Failed,
            deployments: 23,
            last_deployed: "25 minutes ago",
            repo: Some("organization/analytics-dashboard"),
            url: "analytics.example.com",
        },
        ProjectInfo {
            name: "Marketing Site",
            description: "Company's main marketing website and landing pages",
            status: ProjectStatus::Online,
            deployments: 19,
            last_deployed: "1 hour ago",
            repo: Some("organization/marketing-site"),
            url: "example.com",
        },
    ]
}

fn recent_activity() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry {
            project: "api-service",
            status: ActivityStatus::Success,
            commit: "f8d3c24a7b5e",
            branch: "main",
            time: "10 minutes ago",
        },
        ActivityEntry {
            project: "web-client",
            status: ActivityStatus::Building,
            commit: "3e7a12d9c0b2",
            branch: "feature/auth-revamp",
            time: "15 minutes ago",
        },
        ActivityEntry {
            project: "analytics-dashboard",
            status: ActivityStatus::Failed,
            commit: "a1b2c3d4e5f6",
            branch: "develop",
            time: "25 minutes ago",
        },
        ActivityEntry {
            project: "marketing-site",
            status: ActivityStatus::Success,
            commit: "7a8b9c0d1e2f",
            branch: "main",
            time: "1 hour ago",
        },
    ]
}

#[component]
pub fn OverviewPage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <div class="dashboard-page__header">
                <div>
                    <h1 class="dashboard-page__title">"Dashboard"</h1>
                    <p class="dashboard-page__subtitle">"Monitor your projects and deployments."</p>
                </div>
                <a class="btn btn--primary" href=paths::DEPLOYMENTS>
                    "New Deployment"
                </a>
            </div>

            <div class="dashboard-page__stats">
                <StatCard
                    title="Total Projects"
                    value="12".to_owned()
                    icon="projects"
                    trend=Trend::up(8.2)
                    description="Active projects in your account"
                />
                <StatCard
                    title="Total Deployments"
                    value="286".to_owned()
                    icon="deployments"
                    trend=Trend::up(12.5)
                    description="Across all projects"
                />
                <StatCard
                    title="Databases"
                    value="5".to_owned()
                    icon="databases"
                    description="Connected database instances"
                />
                <StatCard
                    title="Usage"
                    value="68%".to_owned()
                    icon="usage"
                    trend=Trend::down(3.7)
                    description="Of your current plan"
                />
            </div>

            <div class="dashboard-page__columns">
                <section class="dashboard-page__projects">
                    <h2 class="dashboard-page__section-title">"Recent Projects"</h2>
                    <div class="dashboard-page__project-grid">
                        {recent_projects()
                            .into_iter()
                            .map(|project| view! { <ProjectCard project=project /> })
                            .collect::<Vec<_>>()}
                    </div>
                </section>
                <section class="dashboard-page__activity">
                    <ActivityFeed entries=recent_activity() />
                </section>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;
