use std::string::FromUtf8Error;

use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::response::Redirect;
use axum::response::Response;
use base64::engine::general_purpose::STANDARD;
use base64::DecodeError;
use base64::Engine;
use thiserror::Error;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::inbound::http::session;

const DOCS_PATH: &str = "/docs";

#[derive(Debug, Error)]
enum BasicCredentialsError {
    #[error("Invalid base64: {0}")]
    Base64(#[from] DecodeError),
    #[error("Credentials are not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// Log in with HTTP Basic credentials and continue to the docs with a session cookie.
#[utoipa::path(
    get,
    path = "/login",
    tag = "authentication",
    security(("basic" = [])),
    responses(
        (status = 307, description = "Redirect to /docs", headers(
            ("set-cookie" = String, description = "Session cookie carrying the access token")
        )),
        (status = 401, description = "Missing or invalid Basic credentials"),
    )
)]
pub async fn login_basic(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let encoded = basic_credentials(&headers).ok_or_else(|| {
        tracing::debug!("No Basic credentials in request");
        ApiError::basic_challenge()
    })?;

    let (username, password) = decode_basic_credentials(encoded).map_err(|e| {
        tracing::debug!(error = %e, "Malformed Basic credentials");
        ApiError::basic_challenge()
    })?;

    let user = state
        .auth_service
        .authenticate(&username, &password)
        .await?
        .ok_or_else(|| {
            tracing::warn!(grant = "basic", "Login rejected");
            ApiError::basic_challenge()
        })?;

    let token = state.auth_service.issue_token(&user.username, state.token_ttl)?;
    let cookie = session::session_cookie(token.as_str())
        .map_err(|e| ApiError::InternalServerError(format!("Invalid session cookie: {}", e)))?;

    tracing::info!(username = %user.username, "Session started");

    Ok(([(header::SET_COOKIE, cookie)], Redirect::temporary(DOCS_PATH)).into_response())
}

fn basic_credentials(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, credentials) = value.trim().split_once(' ')?;

    scheme
        .eq_ignore_ascii_case("basic")
        .then_some(credentials.trim())
}

/// Split a base64 `username:password` payload at its first colon.
///
/// A payload without a colon is a username with an empty password.
fn decode_basic_credentials(encoded: &str) -> Result<(String, String), BasicCredentialsError> {
    let decoded = String::from_utf8(STANDARD.decode(encoded)?)?;

    Ok(match decoded.split_once(':') {
        Some((username, password)) => (username.to_string(), password.to_string()),
        None => (decoded, String::new()),
    })
}
