use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::CookieJar;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;

use crate::domain::user::models::User;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::inbound::http::session;

/// Extension type holding the user resolved from the request token
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Middleware that resolves the request token to an active user.
///
/// The token comes from an `Authorization: Bearer` header, or from the
/// session cookie when no Bearer header is sent.
pub async fn authenticate(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer
        .map(|TypedHeader(authorization)| authorization.token().to_string())
        .or_else(|| session::token_from_cookie(&jar))
        .ok_or_else(|| {
            tracing::debug!("No access token in request");
            ApiError::bearer_challenge(ApiError::INVALID_CREDENTIALS)
        })?;

    let user = state
        .auth_service
        .resolve_current_user(&token)
        .await
        .map_err(|e| {
            if e.is_authentication_failure() {
                tracing::warn!(reason = %e, "Access token rejected");
            }
            ApiError::from(e)
        })?;

    tracing::debug!(username = %user.username, "Request authenticated");
    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}
