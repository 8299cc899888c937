//! Settings page: profile fields and notification toggles.
//!
//! The form round-trips through durable browser storage as a JSON draft,
//! so edits survive a reload. Saving validates first; resetting discards
//! the stored draft and returns to defaults.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::util::drafts;

pub(crate) const DRAFT_KEY: &str = "nimbus-settings-draft";

const DISPLAY_NAME_MAX: usize = 50;

/// Everything the form edits, persisted as one JSON document. Missing
/// fields in an older draft fall back to their defaults.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default)]
pub(crate) struct SettingsDraft {
    pub display_name: String,
    pub email: String,
    pub deploy_alerts: bool,
    pub weekly_digest: bool,
    pub incident_pages: bool,
}

impl Default for SettingsDraft {
    fn default() -> Self {
        Self {
            display_name: "Nimbus User".to_owned(),
            email: "user@example.com".to_owned(),
            deploy_alerts: true,
            weekly_digest: false,
            incident_pages: true,
        }
    }
}

/// Trim the display name and reject empty or oversized values.
pub(crate) fn normalize_display_name(raw: &str) -> Result<String, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Display name cannot be empty.");
    }
    if trimmed.chars().count() > DISPLAY_NAME_MAX {
        return Err("Display name is limited to 50 characters.");
    }
    Ok(trimmed.to_owned())
}

/// Loose shape check, not RFC validation: one `@` with text on both sides.
pub(crate) fn looks_like_email(raw: &str) -> bool {
    let trimmed = raw.trim();
    match trimmed.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        }
        None => false,
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let draft = RwSignal::new(SettingsDraft::default());
    let notice = RwSignal::new(String::new());

    // Pick up a previously saved draft once browser storage is reachable.
    Effect::new(move || {
        if let Some(saved) = drafts::load::<SettingsDraft>(DRAFT_KEY) {
            draft.set(saved);
        }
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut current = draft.get_untracked();
        match normalize_display_name(&current.display_name) {
            Ok(name) => current.display_name = name,
            Err(message) => {
                notice.set(message.to_owned());
                return;
            }
        }
        if !looks_like_email(&current.email) {
            notice.set("Enter a valid email address.".to_owned());
            return;
        }
        current.email = current.email.trim().to_owned();
        drafts::save(DRAFT_KEY, &current);
        draft.set(current);
        notice.set("Settings saved.".to_owned());
    };

    let on_reset = move |_| {
        drafts::discard(DRAFT_KEY);
        draft.set(SettingsDraft::default());
        notice.set("Settings restored to defaults.".to_owned());
    };

    view! {
        <div class="dashboard-page">
            <div class="dashboard-page__header">
                <h1 class="dashboard-page__title">"Settings"</h1>
            </div>

            <form class="settings-form" on:submit=on_save>
                <section class="settings-card">
                    <h2 class="settings-card__title">"Profile"</h2>
                    <label class="settings-field">
                        <span class="settings-field__label">"Display name"</span>
                        <input
                            class="settings-field__input"
                            type="text"
                            prop:value=move || draft.get().display_name
                            on:input=move |ev| {
                                draft.update(|d| d.display_name = event_target_value(&ev));
                            }
                        />
                    </label>
                    <label class="settings-field">
                        <span class="settings-field__label">"Email"</span>
                        <input
                            class="settings-field__input"
                            type="email"
                            prop:value=move || draft.get().email
                            on:input=move |ev| {
                                draft.update(|d| d.email = event_target_value(&ev));
                            }
                        />
                    </label>
                </section>

                <section class="settings-card">
                    <h2 class="settings-card__title">"Notifications"</h2>
                    <label class="settings-toggle">
                        <input
                            type="checkbox"
                            prop:checked=move || draft.get().deploy_alerts
                            on:change=move |ev| {
                                draft.update(|d| d.deploy_alerts = event_target_checked(&ev));
                            }
                        />
                        <span class="settings-toggle__text">
                            <span class="settings-toggle__label">"Deploy alerts"</span>
                            <span class="settings-toggle__hint">
                                "Email when a deployment finishes or fails"
                            </span>
                        </span>
                    </label>
                    <label class="settings-toggle">
                        <input
                            type="checkbox"
                            prop:checked=move || draft.get().weekly_digest
                            on:change=move |ev| {
                                draft.update(|d| d.weekly_digest = event_target_checked(&ev));
                            }
                        />
                        <span class="settings-toggle__text">
                            <span class="settings-toggle__label">"Weekly digest"</span>
                            <span class="settings-toggle__hint">
                                "Summary of project activity every Monday"
                            </span>
                        </span>
                    </label>
                    <label class="settings-toggle">
                        <input
                            type="checkbox"
                            prop:checked=move || draft.get().incident_pages
                            on:change=move |ev| {
                                draft.update(|d| d.incident_pages = event_target_checked(&ev));
                            }
                        />
                        <span class="settings-toggle__text">
                            <span class="settings-toggle__label">"Incident pages"</span>
                            <span class="settings-toggle__hint">
                                "Page immediately when an incident opens"
                            </span>
                        </span>
                    </label>
                </section>

                <div class="settings-actions">
                    <button class="btn btn--primary" type="submit">"Save Changes"</button>
                    <button class="btn btn--quiet" type="button" on:click=on_reset>
                        "Reset to Defaults"
                    </button>
                </div>

                <Show when=move || !notice.get().is_empty()>
                    <p class="settings-notice" role="status">{move || notice.get()}</p>
                </Show>
            </form>
        </div>
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;
