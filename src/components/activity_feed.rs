//! Recent deployment activity list on the overview page.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityStatus {
    Success,
    Failed,
    Building,
}

pub(crate) fn status_class(status: ActivityStatus) -> &'static str {
    match status {
        ActivityStatus::Success => "activity__dot activity__dot--success",
        ActivityStatus::Failed => "activity__dot activity__dot--failed",
        ActivityStatus::Building => "activity__dot activity__dot--building",
    }
}

/// Display form of a commit id: the first seven characters, or the whole
/// id when it is already shorter.
pub(crate) fn short_sha(sha: &str) -> &str {
    match sha.char_indices().nth(7) {
        Some((index, _)) => &sha[..index],
        None => sha,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActivityEntry {
    pub project: &'static str,
    pub status: ActivityStatus,
    pub commit: &'static str,
    pub branch: &'static str,
    pub time: &'static str,
}

#[component]
pub fn ActivityFeed(entries: Vec<ActivityEntry>) -> impl IntoView {
    view! {
        <div class="activity">
            <h2 class="activity__heading">"Recent Activity"</h2>
            <ul class="activity__list">
                {entries
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <li class="activity__row">
                                <span class=status_class(entry.status) aria-hidden="true"></span>
                                <div class="activity__body">
                                    <span class="activity__project">{entry.project}</span>
                                    <span class="activity__detail">
                                        {short_sha(entry.commit)} " on " {entry.branch}
                                    </span>
                                </div>
                                <span class="activity__time">{entry.time}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

#[cfg(test)]
#[path = "activity_feed_test.rs"]
mod activity_feed_test;
