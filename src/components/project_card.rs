//! Project summary card for the overview grid.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectStatus {
    Online,
    Building,
    Failed,
    Stopped,
}

pub(crate) fn status_label(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Online => "Online",
        ProjectStatus::Building => "Building",
        ProjectStatus::Failed => "Failed",
        ProjectStatus::Stopped => "Stopped",
    }
}

pub(crate) fn status_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Online => "project-card__status project-card__status--online",
        ProjectStatus::Building => "project-card__status project-card__status--building",
        ProjectStatus::Failed => "project-card__status project-card__status--failed",
        ProjectStatus::Stopped => "project-card__status project-card__status--stopped",
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub status: ProjectStatus,
    pub deployments: u32,
    pub last_deployed: &'static str,
    pub repo: Option<&'static str>,
    pub url: &'static str,
}

#[component]
pub fn ProjectCard(project: ProjectInfo) -> impl IntoView {
    view! {
        <div class="project-card">
            <div class="project-card__top">
                <span class="project-card__name">{project.name}</span>
                <span class=status_class(project.status)>{status_label(project.status)}</span>
            </div>
            <p class="project-card__description">{project.description}</p>
            <ul class="project-card__facts">
                <li class="project-card__fact">"Last deployed " {project.last_deployed}</li>
                {project.repo.map(|repo| view! { <li class="project-card__fact">{repo}</li> })}
                <li class="project-card__fact">{project.url}</li>
            </ul>
            <div class="project-card__bottom">
                <span class="project-card__deployments">{project.deployments} " deployments"</span>
                <a class="project-card__visit" href=format!("https://{}", project.url)>
                    "Visit"
                </a>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "project_card_test.rs"]
mod project_card_test;
