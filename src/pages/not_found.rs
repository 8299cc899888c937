//! Catch-all route. Renders bare, outside the guarded dashboard shell,
//! so a bad link never bounces through the login redirect.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::nav::paths;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();
    Effect::new(move || {
        leptos::logging::warn!("viewer hit an unrouted path: {}", location.pathname.get());
    });

    view! {
        <div class="not-found">
            <h1 class="not-found__code">"404"</h1>
            <p class="not-found__message">"This page does not exist."</p>
            <a class="not-found__home" href=paths::OVERVIEW>"Back to the dashboard"</a>
        </div>
    }
}
