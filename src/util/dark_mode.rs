//! Dark-mode preference: stored choice first, OS preference as fallback,
//! applied as a `dark` class on the document root.

use crate::session::persist::{BrowserMarkers, MarkerStore};

const STORAGE_KEY: &str = "nimbus-theme";

/// Resolve a stored value against the system preference. Unknown values
/// fall back to the system, same as no value at all.
fn preference_from(stored: Option<&str>, system_dark: bool) -> bool {
    match stored {
        Some("dark") => true,
        Some("light") => false,
        _ => system_dark,
    }
}

/// The viewer's effective preference at page load.
pub fn read_preference() -> bool {
    let stored = BrowserMarkers::durable().get(STORAGE_KEY);
    preference_from(stored.as_deref(), prefers_dark())
}

#[cfg(feature = "hydrate")]
fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|query| query.matches())
}

#[cfg(not(feature = "hydrate"))]
fn prefers_dark() -> bool {
    false
}

/// Set or clear the `dark` class on `<html>`.
#[cfg(feature = "hydrate")]
pub fn apply(dark: bool) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let result = if dark {
        classes.add_1("dark")
    } else {
        classes.remove_1("dark")
    };
    if result.is_err() {
        log::warn!("could not update theme class on document root");
    }
}

#[cfg(not(feature = "hydrate"))]
pub fn apply(_dark: bool) {}

/// Flip the theme, apply it, and persist the choice.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    BrowserMarkers::durable().set(STORAGE_KEY, if next { "dark" } else { "light" });
    next
}

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;
