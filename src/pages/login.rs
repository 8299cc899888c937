//! Sign-in page, the only public route besides not-found.
//!
//! Drives `session::context::login` and navigates home when it reports
//! success; by then the session signal is already authenticated, so the
//! route guard lets the navigation through. The button disarms while a
//! sign-in is in flight.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::theme_toggle::ThemeToggle;
use crate::session::context;
use crate::session::error::AuthFailure;
use crate::state::nav::paths;
use crate::util::time;

pub(crate) fn button_label(busy: bool) -> &'static str {
    if busy { "Connecting..." } else { "Continue with GitHub" }
}

/// Footer line, year-stamped once a live clock is available.
pub(crate) fn copyright_line(now_ms: f64) -> String {
    match time::year_of(now_ms) {
        Some(year) => format!("© {year} Nimbus. All rights reserved."),
        None => "© Nimbus. All rights reserved.".to_owned(),
    }
}

pub(crate) fn failure_message(failure: &AuthFailure) -> String {
    match failure {
        AuthFailure::Cancelled => "Sign-in was cancelled. Try again when you're ready.".to_owned(),
        AuthFailure::Rejected(reason) => format!("Sign-in was rejected: {reason}"),
        AuthFailure::ProviderUnavailable => {
            "The sign-in service is unreachable right now. Try again in a moment.".to_owned()
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let navigate = use_navigate();

    // The server clock is a placeholder, so the stamped year lands in a
    // post-hydration effect instead of the server-rendered HTML.
    let footer = RwSignal::new(copyright_line(0.0));
    Effect::new(move || footer.set(copyright_line(time::now_ms())));

    let start = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);
        let navigate = navigate.clone();
        context::login(move |result| match result {
            Ok(()) => navigate(paths::OVERVIEW, NavigateOptions::default()),
            Err(failure) => {
                error.set(Some(failure_message(&failure)));
                busy.set(false);
            }
        });
    };

    view! {
        <div class="login">
            <div class="login__theme">
                <ThemeToggle />
            </div>
            <div class="login__card">
                <div class="login__brand">
                    <span class="login__brand-mark" aria-hidden="true">"N"</span>
                    <h1 class="login__brand-name">"Nimbus"</h1>
                </div>
                <p class="login__tagline">"Deploy faster. Scale smarter."</p>

                <button class="login__github" on:click=start disabled=move || busy.get()>
                    <span class="login__github-glyph" aria-hidden="true"></span>
                    {move || button_label(busy.get())}
                </button>

                <Show when=move || error.get().is_some()>
                    <p class="login__error" role="alert">
                        {move || error.get().unwrap_or_default()}
                    </p>
                </Show>

                <p class="login__terms">
                    "By continuing you agree to the Nimbus terms of service."
                </p>
            </div>
            <p class="login__footer">{move || footer.get()}</p>
        </div>
    }
}

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;
