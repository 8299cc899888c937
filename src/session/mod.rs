//! Session core: the single authority on "is this viewer signed in".
//!
//! ARCHITECTURE
//! ============
//! `store` owns the session state and its subscriber list. Exactly one
//! `SessionStrategy` (`local` or `federated`) is plugged in at composition
//! time and talks back through a `StrategySink`; nothing outside this module
//! touches the persisted marker/token slot directly. `guard` is the pure
//! route-guard state machine consumed by `components::guard`, and `context`
//! bridges the framework-free store into Leptos signals.

pub mod context;
pub mod error;
pub mod federated;
pub mod guard;
pub mod local;
pub mod persist;
pub mod provider;
pub mod store;

pub use error::AuthFailure;
pub use federated::{FederatedConfig, FederatedStrategy};
pub use guard::{GuardState, RedirectLatch};
pub use local::{LocalFlagConfig, LocalFlagStrategy};
pub use persist::{BrowserMarkers, MarkerStore, MemoryMarkers};
pub use provider::{IdentityEvent, IdentityGrant, IdentityProvider, MockIdentity, ProviderSubscription};
pub use store::{Session, SessionSource, SessionStatus, SessionStore, SessionStrategy, SessionSubscription, StrategySink};
