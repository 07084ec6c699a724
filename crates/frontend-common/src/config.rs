//! Frontend configuration

/// Default API origin for local development
const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// Storage key for the session token
    pub const TOKEN_KEY: &'static str = "auth_token";

    /// Storage key for the serialized user profile
    pub const USER_KEY: &'static str = "user";
}

/// Resolve the API base URL for this deployment.
///
/// Native builds read `DATANOVA_API_URL`; browser builds use the window
/// origin. Falls back to the local development API.
pub fn api_url() -> String {
    let url = resolve_api_url();
    tracing::debug!(%url, "resolved API base URL");
    url
}

#[cfg(not(target_arch = "wasm32"))]
fn resolve_api_url() -> String {
    std::env::var("DATANOVA_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

#[cfg(target_arch = "wasm32")]
fn resolve_api_url() -> String {
    if let Some(window) = web_sys::window() {
        if let Ok(origin) = window.location().origin() {
            return origin;
        }
    }
    DEFAULT_API_URL.to_string()
}
