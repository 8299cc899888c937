//! Federated session strategy.
//!
//! Wraps an [`IdentityProvider`] and mirrors its state-change channel into
//! the session store. The provider is the authority: interactive login
//! defers to `authenticate()`, and pushed events (another tab signing out,
//! token refresh, channel loss) land in the store without any local
//! bookkeeping. The provider token, when offered, is mirrored into a
//! tab-scoped slot so API callers can pick it up, and scrubbed on every
//! path that ends the session.

use std::rc::Rc;

use crate::session::persist::MarkerStore;
use crate::session::provider::{IdentityEvent, IdentityProvider, ProviderSubscription};
use crate::session::store::{LoginCallback, SessionSource, SessionStrategy, StrategySink};

/// Knobs for [`FederatedStrategy`]. `Default` matches the shipped app.
#[derive(Clone, Debug)]
pub struct FederatedConfig {
    /// Tab-scoped slot the provider token is mirrored into.
    pub token_key: String,
}

impl Default for FederatedConfig {
    fn default() -> Self {
        Self {
            token_key: "github-token".to_owned(),
        }
    }
}

pub struct FederatedStrategy {
    provider: Rc<dyn IdentityProvider>,
    tokens: Rc<dyn MarkerStore>,
    config: FederatedConfig,
    /// Held for the lifetime of the store; released on teardown.
    subscription: Option<ProviderSubscription>,
}

impl FederatedStrategy {
    pub fn new(
        provider: Rc<dyn IdentityProvider>,
        tokens: Rc<dyn MarkerStore>,
        config: FederatedConfig,
    ) -> Self {
        Self {
            provider,
            tokens,
            config,
            subscription: None,
        }
    }

    fn stash_token(tokens: &Rc<dyn MarkerStore>, key: &str, token: Option<&str>) {
        match token {
            Some(token) => tokens.set(key, token),
            None => tokens.remove(key),
        }
    }
}

impl SessionStrategy for FederatedStrategy {
    fn source(&self) -> SessionSource {
        SessionSource::FederatedProvider
    }

    fn initialize(&mut self, sink: StrategySink) {
        let tokens = self.tokens.clone();
        let key = self.config.token_key.clone();
        self.subscription = Some(self.provider.on_state_change(Box::new(move |event| {
            match event {
                IdentityEvent::SignedIn { handle, token } => {
                    log::debug!("identity provider signed in {handle}");
                    Self::stash_token(&tokens, &key, token.as_deref());
                    sink.signed_in(token);
                }
                IdentityEvent::SignedOut => {
                    tokens.remove(&key);
                    sink.signed_out();
                }
                IdentityEvent::ChannelClosed => {
                    tokens.remove(&key);
                    sink.subscription_lost();
                }
            }
        })));
        // The attach replay is the restore verdict: whatever the provider
        // currently believes lands in the store and clears `resolving`.
    }

    fn login(&mut self, sink: StrategySink, on_done: LoginCallback) {
        sink.pending();
        let tokens = self.tokens.clone();
        let key = self.config.token_key.clone();
        self.provider.authenticate(Box::new(move |outcome| match outcome {
            Ok(grant) => {
                Self::stash_token(&tokens, &key, grant.token.as_deref());
                sink.signed_in(grant.token);
                on_done(Ok(()));
            }
            Err(failure) => {
                tokens.remove(&key);
                sink.signed_out();
                on_done(Err(failure));
            }
        }));
    }

    fn logout(&mut self, sink: StrategySink) {
        self.provider.sign_out();
        self.tokens.remove(&self.config.token_key);
        // The provider echoes SignedOut; committing here as well keeps
        // logout honest if the channel is already gone. The store drops
        // the duplicate.
        sink.signed_out();
    }

    fn teardown(&mut self) {
        self.subscription = None;
    }
}

#[cfg(test)]
#[path = "federated_test.rs"]
mod federated_test;
