//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Outlet, ParentRoute, Route, Router, Routes},
};

use crate::components::guard::RequireSession;
use crate::components::layout::DashboardLayout;
use crate::pages::{
    analytics::AnalyticsPage, deployments::DeploymentsPage, login::LoginPage,
    not_found::NotFoundPage, overview::OverviewPage, projects::ProjectsPage,
    settings::SettingsPage,
};
use crate::session;
use crate::session::store::{Session, SessionSource};
use crate::state::nav::NavState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and navigation contexts, boots the session store
/// on the client, and sets up routing. Every dashboard route nests under
/// [`ProtectedShell`]; `login` and the catch-all render bare.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Until the store's first verdict lands the session reads as resolving,
    // which keeps the guard on its pending card during SSR and early hydration.
    let session_signal = RwSignal::new(Session::resolving(SessionSource::LocalFlag));
    let nav = RwSignal::new(NavState::default());

    provide_context(session_signal);
    provide_context(nav);

    // Client-only: compose the store, mirror it into the signal, restore
    // any persisted session.
    Effect::new(move || {
        session::context::bootstrap(session_signal);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/nimbus.css"/>
        <Title text="Nimbus"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("") view=ProtectedShell>
                    <Route path=StaticSegment("") view=OverviewPage/>
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                    <Route path=StaticSegment("deployments") view=DeploymentsPage/>
                    <Route path=StaticSegment("analytics") view=AnalyticsPage/>
                    <Route path=StaticSegment("settings") view=SettingsPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Guard + chrome wrapper shared by every dashboard route.
#[component]
fn ProtectedShell() -> impl IntoView {
    view! {
        <RequireSession>
            <DashboardLayout>
                <Outlet/>
            </DashboardLayout>
        </RequireSession>
    }
}
