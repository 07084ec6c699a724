//! Wire types and HTTP client for the DataNova API
//!
//! The `client` feature (enabled by default) provides [`client::DataNovaClient`],
//! the reqwest-backed client the front-end uses to reach the auth endpoints.

pub mod types;

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "client")]
pub use client::{DataNovaClient, error::ClientError};
