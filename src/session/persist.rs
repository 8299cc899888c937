//! Marker persistence behind the session strategies.
//!
//! DESIGN
//! ======
//! Strategies never touch `web_sys` directly; they hold a `Rc<dyn
//! MarkerStore>` so tests can swap in `MemoryMarkers` and server-side
//! rendering gets a harmless no-op. `BrowserMarkers` picks the durable
//! (`localStorage`) or tab-scoped (`sessionStorage`) slot at construction,
//! which is the only place that distinction exists.

use std::cell::RefCell;
use std::collections::HashMap;

/// A string key/value slot for small session markers and tokens.
///
/// Every operation is best-effort: storage may be unavailable (private
/// browsing, server render) and callers are expected to treat a missing
/// value and an unreadable value the same way.
pub trait MarkerStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Which browser storage area a [`BrowserMarkers`] handle points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Area {
    /// `localStorage`: survives tab and browser restarts.
    Durable,
    /// `sessionStorage`: cleared when the tab goes away.
    SessionScoped,
}

/// Marker slot backed by browser Web Storage.
///
/// Outside the `hydrate` build (server render, native tests) every read
/// returns `None` and writes vanish, so callers behave as if the viewer
/// had a fresh browser profile.
#[derive(Clone, Copy, Debug)]
pub struct BrowserMarkers {
    area: Area,
}

impl BrowserMarkers {
    /// Slot that persists across visits (`localStorage`).
    pub fn durable() -> Self {
        Self { area: Area::Durable }
    }

    /// Slot scoped to the current tab (`sessionStorage`).
    pub fn session_scoped() -> Self {
        Self { area: Area::SessionScoped }
    }

    #[cfg(feature = "hydrate")]
    fn storage(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match self.area {
            Area::Durable => window.local_storage().ok()?,
            Area::SessionScoped => window.session_storage().ok()?,
        }
    }
}

#[cfg(feature = "hydrate")]
impl MarkerStore for BrowserMarkers {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("browser storage rejected write for {key}");
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(not(feature = "hydrate"))]
impl MarkerStore for BrowserMarkers {
    fn get(&self, _key: &str) -> Option<String> {
        let _ = self.area;
        None
    }

    fn set(&self, _key: &str, _value: &str) {}

    fn remove(&self, _key: &str) {}
}

/// In-memory marker slot for tests and headless composition.
#[derive(Default)]
pub struct MemoryMarkers {
    slots: RefCell<HashMap<String, String>>,
}

impl MemoryMarkers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded slot, for "marker already on disk" scenarios.
    pub fn seeded(key: &str, value: &str) -> Self {
        let markers = Self::default();
        markers.set(key, value);
        markers
    }
}

impl MarkerStore for MemoryMarkers {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.slots.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.slots.borrow_mut().remove(key);
    }
}

#[cfg(test)]
#[path = "persist_test.rs"]
mod persist_test;
