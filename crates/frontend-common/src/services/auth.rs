//! Session lifecycle service
//!
//! Mediates between the caller, the DataNova auth API, and the injected
//! session store: login persists the token and the serialized user profile,
//! logout clears them, and the read operations answer authenticated-state
//! queries without touching the network.

use datanova_http::client::{DataNovaClient, error::ClientError};
use datanova_http::types::{Credentials, RegistrationRequest, User};
use thiserror::Error;
use tracing::debug;

use crate::config::AuthConfig;
use crate::storage::SessionStore;

/// Session service error types
#[derive(Debug, Error)]
pub enum SessionError {
    /// Error from the underlying API client
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The stored user record is not valid JSON
    #[error("Corrupt session record: {0}")]
    CorruptSession(#[from] serde_json::Error),
}

/// Session client over an injected API client and store
pub struct SessionClient<S> {
    client: DataNovaClient,
    store: S,
}

impl<S: SessionStore> SessionClient<S> {
    /// Create a new session client
    pub fn new(client: DataNovaClient, store: S) -> Self {
        Self { client, store }
    }

    /// Authenticate and persist the session.
    ///
    /// The token and the serialized user profile are written as two
    /// independent writes, token first; a crash between them can leave a
    /// token behind without a profile.
    pub async fn login(&self, credentials: &Credentials) -> Result<User, SessionError> {
        let response = self.client.login(credentials).await?;

        let serialized = serde_json::to_string(&response.user)?;
        self.store.set(AuthConfig::TOKEN_KEY, &response.token);
        self.store.set(AuthConfig::USER_KEY, &serialized);
        debug!(user = %response.user.email, "session established");

        Ok(response.user)
    }

    /// Create a new account. Does not establish a session; the caller
    /// follows up with [`login`](Self::login)
    pub async fn register(&self, data: &RegistrationRequest) -> Result<User, SessionError> {
        Ok(self.client.register(data).await?)
    }

    /// Clear the persisted session. A no-op when no session exists
    pub fn logout(&self) {
        self.store.remove(AuthConfig::TOKEN_KEY);
        self.store.remove(AuthConfig::USER_KEY);
        debug!("session cleared");
    }

    /// The persisted session token, if any
    pub fn token(&self) -> Option<String> {
        self.store.get(AuthConfig::TOKEN_KEY)
    }

    /// The persisted user profile, if any.
    ///
    /// A stored record that does not parse fails with
    /// [`SessionError::CorruptSession`]; a tampered record is surfaced,
    /// not healed.
    pub fn user(&self) -> Result<Option<User>, SessionError> {
        match self.store.get(AuthConfig::USER_KEY) {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Whether a session token is present
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some_and(|token| !token.is_empty())
    }

    /// Derive an API client that sends the persisted session token, or
    /// `None` when logged out
    pub fn authenticated_client(&self) -> Option<DataNovaClient> {
        self.token().map(|token| self.client.with_token(token))
    }
}
