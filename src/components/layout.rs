//! Dashboard shell: sidebar, header, and the offset content column.
//!
//! The content margin is read from `state::nav::content_offset`, the same
//! function the sidebar derives its width from, so collapsing animates
//! both in lockstep.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::sidebar::Sidebar;
use crate::state::nav::{self, NavState};

#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    let nav_state = expect_context::<RwSignal<NavState>>();
    let margin = move || format!("margin-left:{}px", nav::content_offset(nav_state.get().collapsed));

    view! {
        <div class="layout">
            <Sidebar />
            <Header />
            <main class="layout__main" style=margin>
                {children()}
            </main>
        </div>
    }
}
