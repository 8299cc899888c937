//! Failure surface for interactive sign-in.

use thiserror::Error;

/// Why a `login()` attempt did not end in an authenticated session.
///
/// These are terminal for the attempt: the store has already settled back
/// to `Unauthenticated` by the time a caller sees one.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AuthFailure {
    /// The viewer backed out of the provider's consent flow.
    #[error("sign-in was cancelled")]
    Cancelled,

    /// The provider refused the attempt and said why.
    #[error("sign-in was rejected: {0}")]
    Rejected(String),

    /// The provider could not be reached at all.
    #[error("identity provider is unavailable")]
    ProviderUnavailable,
}
