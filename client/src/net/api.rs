//! REST calls to the account API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, bounded by
//! [`REQUEST_TIMEOUT`]. Server-side (SSR): stubs returning
//! [`SubmitError::Generic`] since these endpoints are only called from
//! browser event handlers.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses into [`SubmitError`]: a server-supplied `message`
//! is shown verbatim, anything else gets the fixed generic text. Nothing here
//! panics or retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::{Deserialize, Serialize};

/// Text shown for failures without a server message.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// Upper bound on a single account request.
pub const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(15);

/// User-facing submission failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// Rejection explained by the server (`{"message": ...}` body).
    #[error("{0}")]
    Validation(String),
    /// Network failure, timeout, or an unexplained response.
    #[error("An error occurred. Please try again.")]
    Generic,
}

/// JSON body posted to `/api/signup` and `/api/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LoginBody {
    access_token: String,
}

fn error_from_body(body: &str) -> SubmitError {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .map_or(SubmitError::Generic, SubmitError::Validation)
}

/// Interpret a signup response. Only `201 Created` counts as success.
///
/// # Errors
///
/// Any other status becomes `Validation` when the body carries a message,
/// `Generic` otherwise.
pub fn classify_signup_response(status: u16, body: &str) -> Result<(), SubmitError> {
    match status {
        201 => Ok(()),
        200..=299 => Err(SubmitError::Generic),
        _ => Err(error_from_body(body)),
    }
}

/// Interpret a login response, extracting the access token.
///
/// # Errors
///
/// Non-2xx statuses map like signup; a 2xx without a token is `Generic`.
pub fn classify_login_response(status: u16, body: &str) -> Result<String, SubmitError> {
    if !(200..=299).contains(&status) {
        return Err(error_from_body(body));
    }
    serde_json::from_str::<LoginBody>(body)
        .ok()
        .map(|b| b.access_token)
        .filter(|t| !t.is_empty())
        .ok_or(SubmitError::Generic)
}

/// Create an account via `POST {endpoint}`.
///
/// # Errors
///
/// See [`classify_signup_response`]; transport failures are `Generic`.
pub async fn signup(endpoint: &str, credentials: &Credentials) -> Result<(), SubmitError> {
    let (status, body) = post_json(endpoint, credentials).await?;
    classify_signup_response(status, &body)
}

/// Exchange credentials for an access token via `POST {endpoint}`.
///
/// # Errors
///
/// See [`classify_login_response`]; transport failures are `Generic`.
pub async fn login(endpoint: &str, credentials: &Credentials) -> Result<String, SubmitError> {
    let (status, body) = post_json(endpoint, credentials).await?;
    classify_login_response(status, &body)
}

/// Post `credentials` as JSON and return status plus raw body.
async fn post_json(endpoint: &str, credentials: &Credentials) -> Result<(u16, String), SubmitError> {
    #[cfg(feature = "hydrate")]
    {
        use futures::future::{Either, select};

        let request = async {
            let resp = gloo_net::http::Request::post(endpoint)
                .json(credentials)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?;
            let status = resp.status();
            // Error bodies are optional; an unreadable one is treated as empty.
            let body = resp.text().await.unwrap_or_default();
            Ok::<_, String>((status, body))
        };
        let timeout = gloo_timers::future::sleep(REQUEST_TIMEOUT);

        match select(Box::pin(request), Box::pin(timeout)).await {
            Either::Left((Ok(reply), _)) => Ok(reply),
            Either::Left((Err(e), _)) => {
                leptos::logging::warn!("POST {endpoint} failed: {e}");
                Err(SubmitError::Generic)
            }
            Either::Right(((), _)) => {
                leptos::logging::warn!("POST {endpoint} timed out after {}s", REQUEST_TIMEOUT.as_secs());
                Err(SubmitError::Generic)
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, credentials);
        Err(SubmitError::Generic)
    }
}
