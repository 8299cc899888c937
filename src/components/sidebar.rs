//! Fixed sidebar: brand, navigation entries, collapse control.
//!
//! Geometry and active matching come from `state::nav`; this file is just
//! the markup. Labels unmount while collapsed rather than being hidden
//! with CSS, so the collapsed rail tabs through icons only.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::nav::{self, NavEntry, NavState, SIDEBAR_ENTRIES, paths};

#[component]
pub fn Sidebar() -> impl IntoView {
    let nav_state = expect_context::<RwSignal<NavState>>();
    let collapsed = move || nav_state.get().collapsed;

    view! {
        <aside
            class="sidebar"
            class:sidebar--collapsed=collapsed
            style=move || format!("width:{}px", nav::sidebar_width(collapsed()))
        >
            <div class="sidebar__brand">
                <a href=paths::OVERVIEW class="sidebar__brand-link">
                    <span class="sidebar__brand-mark" aria-hidden="true">"N"</span>
                    <Show when=move || !collapsed()>
                        <span class="sidebar__brand-name">"Nimbus"</span>
                    </Show>
                </a>
            </div>

            <nav class="sidebar__entries">
                {SIDEBAR_ENTRIES
                    .iter()
                    .map(|entry| view! { <SidebarLink entry=*entry /> })
                    .collect::<Vec<_>>()}
            </nav>

            <div class="sidebar__footer">
                <button
                    class="sidebar__collapse"
                    on:click=move |_| nav_state.update(NavState::toggle_collapse)
                    title="Toggle sidebar"
                >
                    <svg
                        class="sidebar__chevron"
                        class:sidebar__chevron--flipped=collapsed
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        aria-hidden="true"
                    >
                        <path d="m15 18-6-6 6-6" />
                    </svg>
                </button>
            </div>
        </aside>
    }
}

#[component]
fn SidebarLink(entry: NavEntry) -> impl IntoView {
    let nav_state = expect_context::<RwSignal<NavState>>();
    let location = use_location();
    let active = move || nav::is_active(entry.path, &location.pathname.get());

    view! {
        <a
            href=entry.path
            class="sidebar__entry"
            class:sidebar__entry--active=active
            title=entry.label
        >
            <span class=format!("sidebar__icon sidebar__icon--{}", entry.icon) aria-hidden="true"></span>
            <Show when=move || !nav_state.get().collapsed>
                <span class="sidebar__entry-label">{entry.label}</span>
            </Show>
        </a>
    }
}
