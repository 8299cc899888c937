//! Light/dark toggle button, shared by the header and the login page.

use leptos::prelude::*;

use crate::util::dark_mode;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let dark = RwSignal::new(false);

    // Runs once on the client; tracks nothing. Server markup always shows
    // the light glyph and hydration corrects it if needed.
    Effect::new(move || {
        let initial = dark_mode::read_preference();
        dark_mode::apply(initial);
        dark.set(initial);
    });

    let flip = move |_| {
        let next = dark_mode::toggle(dark.get_untracked());
        dark.set(next);
    };

    view! {
        <button class="theme-toggle" on:click=flip title="Toggle theme">
            {move || if dark.get() { "☀" } else { "☾" }}
        </button>
    }
}
