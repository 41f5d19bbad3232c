//! Account routes: signup and credential exchange.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use serde_json::json;

use crate::services::accounts::AccountError;
use crate::state::AppState;

/// `{email, password}` body. Fields are optional so a missing one is reported
/// as a 400 with a message rather than an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct CredentialsBody {
    email: Option<String>,
    password: Option<String>,
}

impl CredentialsBody {
    fn parts(&self) -> (&str, &str) {
        (self.email.as_deref().unwrap_or_default(), self.password.as_deref().unwrap_or_default())
    }
}

pub(crate) fn account_error_to_status(err: &AccountError) -> StatusCode {
    match err {
        AccountError::MissingCredentials | AccountError::AlreadyExists => StatusCode::BAD_REQUEST,
        AccountError::InvalidCredentials => StatusCode::UNAUTHORIZED,
    }
}

fn message_response(status: StatusCode, message: impl std::fmt::Display) -> Response {
    (status, Json(json!({ "message": message.to_string() }))).into_response()
}

fn error_response(err: &AccountError) -> Response {
    message_response(account_error_to_status(err), err)
}

/// `POST /api/signup`: register a new account.
pub async fn signup(State(state): State<AppState>, body: Result<Json<CredentialsBody>, JsonRejection>) -> Response {
    let Ok(Json(body)) = body else {
        return error_response(&AccountError::MissingCredentials);
    };
    let (email, password) = body.parts();

    match state.accounts.signup(email, password).await {
        Ok(id) => {
            let total = state.accounts.account_count().await;
            tracing::info!(account_id = %id, total, "account created");
            message_response(StatusCode::CREATED, "User created successfully")
        }
        Err(e) => {
            tracing::info!(error = %e, "signup rejected");
            error_response(&e)
        }
    }
}

/// `POST /api/login`: exchange credentials for an access token.
pub async fn login(State(state): State<AppState>, body: Result<Json<CredentialsBody>, JsonRejection>) -> Response {
    let Ok(Json(body)) = body else {
        return error_response(&AccountError::MissingCredentials);
    };
    let (email, password) = body.parts();

    match state.accounts.login(email, password).await {
        Ok(access_token) => Json(json!({ "access_token": access_token })).into_response(),
        Err(e) => {
            tracing::info!(error = %e, "login rejected");
            error_response(&e)
        }
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
