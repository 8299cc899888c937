//! Session gate wrapped around every protected route.
//!
//! DESIGN
//! ======
//! The verdict logic and the redirect discipline live in
//! `session::guard`; this component only binds them to the session
//! signal and the router. While the session is resolving it renders a
//! neutral pending card, never the children, so protected content cannot
//! flash before a redirect. The latch guarantees one navigation per
//! unauthenticated stretch even though the effect re-runs on every
//! session change.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::guard::{GuardState, RedirectLatch};
use crate::session::store::Session;
use crate::state::nav::paths;

#[component]
pub fn RequireSession(
    /// Where unauthenticated viewers are sent.
    #[prop(default = paths::LOGIN)]
    redirect_to: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();
    let latch = RwSignal::new(RedirectLatch::default());

    Effect::new(move || {
        let verdict = GuardState::for_session(&session.get());
        let fire = latch
            .try_update(|latch| latch.observe(verdict))
            .unwrap_or(false);
        if fire {
            leptos::logging::log!("session gate redirecting to {redirect_to}");
            navigate(redirect_to, NavigateOptions::default());
        }
    });

    view! {
        {move || match GuardState::for_session(&session.get()) {
            GuardState::Resolving => view! {
                <div class="guard-pending">
                    <div class="guard-pending__spinner" aria-hidden="true"></div>
                    <p class="guard-pending__hint">"Checking your session..."</p>
                </div>
            }
            .into_any(),
            GuardState::Redirecting => ().into_any(),
            GuardState::Authorized => children().into_any(),
        }}
    }
}
