//! Authentication API client methods

use super::{ClientError, DataNovaClient};
use crate::types::{Credentials, ErrorBody, LoginResponse, RegistrationRequest, User};
use reqwest::Method;
use tracing::debug;

/// Fallback message when a login error carries no usable detail
const LOGIN_FALLBACK: &str = "Identifiants invalides";

/// Fallback message when a registration error carries no usable detail
const REGISTER_FALLBACK: &str = "Erreur lors de l'inscription";

impl DataNovaClient {
    /// Authenticate with email and password
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ClientError> {
        let response = self
            .request(Method::POST, "/api/auth/login")
            .json(credentials)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = error_message(response, LOGIN_FALLBACK).await;
            debug!(status = status.as_u16(), "login rejected");
            Err(ClientError::AuthenticationFailed(message))
        }
    }

    /// Create a new account. Establishing a session is a separate
    /// [`login`](Self::login) call
    pub async fn register(&self, data: &RegistrationRequest) -> Result<User, ClientError> {
        let response = self
            .request(Method::POST, "/api/auth/register")
            .json(data)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = error_message(response, REGISTER_FALLBACK).await;
            debug!(status = status.as_u16(), "registration rejected");
            Err(ClientError::Validation(message))
        }
    }
}

/// Flatten an error response body into a single message, falling back when
/// the body is not a recognizable error envelope
async fn error_message(response: reqwest::Response, fallback: &str) -> String {
    let Ok(body) = response.text().await else {
        return fallback.to_string();
    };

    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(ErrorBody {
            detail: Some(detail),
        }) => detail.into_message(),
        _ => fallback.to_string(),
    }
}
