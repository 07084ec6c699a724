pub mod auth;

pub use auth::{SessionClient, SessionError};
