//! Typed JSON drafts in durable browser storage. Used for form state that
//! should survive a reload, like the settings page.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::session::persist::{BrowserMarkers, MarkerStore};

/// Load a draft, treating unreadable JSON the same as no draft.
pub fn load<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = BrowserMarkers::durable().get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("discarding unreadable draft under {key}: {err}");
            None
        }
    }
}

pub fn save<T: Serialize>(key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => BrowserMarkers::durable().set(key, &raw),
        Err(err) => log::warn!("could not serialize draft under {key}: {err}"),
    }
}

pub fn discard(key: &str) {
    BrowserMarkers::durable().remove(key);
}
