//! Local-flag session strategy.
//!
//! The shipping composition: a persisted marker in durable browser storage
//! stands in for a real credential check. Login is a staged delay so the
//! `Authenticating` state is observable, then the marker is written and
//! the session settles. Restore just reads the marker back.
//!
//! Marker grammar: the bare sentinel (`authenticated`) is the legacy form
//! and never expires. With a TTL configured, new markers are written as
//! `<sentinel>@<epoch-ms>` and restore compares the stamp against the
//! clock. Legacy bare markers keep restoring even under a TTL; only newly
//! written sessions age out.

use std::rc::Rc;

use crate::session::persist::MarkerStore;
use crate::session::store::{LoginCallback, SessionSource, SessionStrategy, StrategySink};
use crate::util::time;

/// Knobs for [`LocalFlagStrategy`]. `Default` matches the shipped app.
#[derive(Clone, Debug)]
pub struct LocalFlagConfig {
    pub storage_key: String,
    /// Marker value (or value prefix, in the timestamped form) that counts
    /// as authenticated. Anything else is treated as absent.
    pub sentinel: String,
    /// Staged sign-in delay, so the pending state is visible.
    pub login_delay_ms: u32,
    /// Maximum marker age before restore stops honoring it. `None` means
    /// markers never expire, which is the shipped behavior.
    pub session_ttl_ms: Option<f64>,
}

impl Default for LocalFlagConfig {
    fn default() -> Self {
        Self {
            storage_key: "nimbus-auth".to_owned(),
            sentinel: "authenticated".to_owned(),
            login_delay_ms: 1_500,
            session_ttl_ms: None,
        }
    }
}

/// Does a stored marker still vouch for an authenticated session?
pub(crate) fn marker_authenticated(
    raw: &str,
    sentinel: &str,
    session_ttl_ms: Option<f64>,
    now_ms: f64,
) -> bool {
    if raw == sentinel {
        return true;
    }
    let Some(rest) = raw.strip_prefix(sentinel) else {
        return false;
    };
    let Some(stamp) = rest.strip_prefix('@') else {
        return false;
    };
    let Ok(issued_ms) = stamp.parse::<f64>() else {
        return false;
    };
    match session_ttl_ms {
        Some(ttl_ms) => now_ms - issued_ms <= ttl_ms,
        None => true,
    }
}

/// The marker value a fresh login writes.
pub(crate) fn marker_value(sentinel: &str, session_ttl_ms: Option<f64>, now_ms: f64) -> String {
    match session_ttl_ms {
        Some(_) => format!("{sentinel}@{now_ms:.0}"),
        None => sentinel.to_owned(),
    }
}

pub struct LocalFlagStrategy {
    markers: Rc<dyn MarkerStore>,
    config: LocalFlagConfig,
    clock: Rc<dyn Fn() -> f64>,
}

impl LocalFlagStrategy {
    pub fn new(markers: Rc<dyn MarkerStore>, config: LocalFlagConfig) -> Self {
        Self {
            markers,
            config,
            clock: Rc::new(time::now_ms),
        }
    }

    /// Swap the wall clock out, for deterministic TTL tests.
    pub fn with_clock(mut self, clock: impl Fn() -> f64 + 'static) -> Self {
        self.clock = Rc::new(clock);
        self
    }

    fn restored_marker(&self) -> bool {
        self.markers.get(&self.config.storage_key).is_some_and(|raw| {
            marker_authenticated(&raw, &self.config.sentinel, self.config.session_ttl_ms, (self.clock)())
        })
    }
}

impl SessionStrategy for LocalFlagStrategy {
    fn source(&self) -> SessionSource {
        SessionSource::LocalFlag
    }

    fn initialize(&mut self, sink: StrategySink) {
        // Restore is read-only. An expired or corrupt marker stays put
        // until the next login or logout overwrites it.
        sink.restored(self.restored_marker(), None);
    }

    #[cfg(feature = "hydrate")]
    fn login(&mut self, sink: StrategySink, on_done: LoginCallback) {
        sink.pending();
        let markers = self.markers.clone();
        let clock = self.clock.clone();
        let config = self.config.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(config.login_delay_ms).await;
            let value = marker_value(&config.sentinel, config.session_ttl_ms, clock());
            markers.set(&config.storage_key, &value);
            sink.signed_in(None);
            on_done(Ok(()));
        });
    }

    #[cfg(not(feature = "hydrate"))]
    fn login(&mut self, sink: StrategySink, on_done: LoginCallback) {
        sink.pending();
        let value = marker_value(&self.config.sentinel, self.config.session_ttl_ms, (self.clock)());
        self.markers.set(&self.config.storage_key, &value);
        sink.signed_in(None);
        on_done(Ok(()));
    }

    fn logout(&mut self, sink: StrategySink) {
        self.markers.remove(&self.config.storage_key);
        sink.signed_out();
    }
}

#[cfg(test)]
#[path = "local_test.rs"]
mod local_test;
