//! Fixed header bar over the content column.
//!
//! Offset from the left edge by the same number the content column uses,
//! so it never overlaps the sidebar in either collapse state.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::session::context;
use crate::session::store::{Session, SessionSource, SessionStatus};
use crate::state::nav::{self, NavState};

/// Short badge naming what kind of session the viewer is on.
pub(crate) fn session_badge(session: &Session) -> &'static str {
    match (session.status, session.source) {
        (SessionStatus::Authenticated, SessionSource::LocalFlag) => "local session",
        (SessionStatus::Authenticated, SessionSource::FederatedProvider) => "github",
        (SessionStatus::Authenticating, _) => "connecting",
        (SessionStatus::Unauthenticated, _) => "signed out",
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let nav_state = expect_context::<RwSignal<NavState>>();
    let session = expect_context::<RwSignal<Session>>();
    let offset = move || format!("left:{}px", nav::content_offset(nav_state.get().collapsed));

    view! {
        <header class="header" style=offset>
            <span class="header__title">"Cloud Deployment Platform"</span>
            <div class="header__spacer"></div>
            <ThemeToggle />
            <span class="header__badge">{move || session_badge(&session.get())}</span>
            <button class="header__signout" on:click=move |_| context::logout()>
                "Sign out"
            </button>
        </header>
    }
}

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;
