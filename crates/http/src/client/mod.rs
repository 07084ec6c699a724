//! DataNova HTTP client

pub mod auth;
pub mod error;

use error::ClientError;
use reqwest::{Client, ClientBuilder, header};
use std::time::Duration;

/// DataNova API client
#[derive(Clone)]
pub struct DataNovaClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl DataNovaClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> DataNovaClientBuilder {
        DataNovaClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Derive a client that sends the given session token, sharing the
    /// underlying connection pool
    pub fn with_token(&self, token: impl Into<String>) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            token: Some(token.into()),
        }
    }

    /// Create a request builder, attaching the session token when one is held
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, url);

        if let Some(token) = &self.token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        request
    }
}

/// Builder for DataNovaClient
#[derive(Default)]
pub struct DataNovaClientBuilder {
    base_url: Option<String>,
    token: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl DataNovaClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the session token for authentication
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<DataNovaClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        #[cfg(target_arch = "wasm32")]
        let _ = self.timeout; // Timeouts not supported on WASM

        if let Some(user_agent) = self.user_agent {
            client_builder = client_builder.user_agent(user_agent);
        } else {
            client_builder = client_builder.user_agent("datanova-client/0.1.0");
        }

        let client = client_builder.build()?;

        Ok(DataNovaClient {
            client,
            base_url,
            token: self.token,
        })
    }
}
