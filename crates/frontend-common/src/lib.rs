//! Shared front-end services for DataNova
//!
//! Owns the session lifecycle of the browser client: issuing auth calls
//! through [`datanova_http`], and persisting the session token and user
//! profile in an injected [`storage::SessionStore`].

pub mod config;
pub mod services;
pub mod storage;

pub use config::AuthConfig;
pub use services::auth::{SessionClient, SessionError};
pub use storage::{MemoryStore, SessionStore};

#[cfg(target_arch = "wasm32")]
pub use storage::BrowserStore;
