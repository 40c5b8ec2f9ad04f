use axum::extract::State;
use axum::http::StatusCode;
use axum::Form;
use serde::Deserialize;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::user::models::AccessToken;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// OAuth2 password-grant form body.
///
/// `grant_type`, `scope`, `client_id` and `client_secret` may be sent and are ignored.
#[derive(Deserialize, ToSchema)]
pub struct LoginForm {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl From<AccessToken> for TokenResponse {
    fn from(token: AccessToken) -> Self {
        Self {
            access_token: token.into_string(),
            token_type: "bearer".to_string(),
        }
    }
}

/// Exchange a username and password for a bearer token.
#[utoipa::path(
    post,
    path = "/token",
    tag = "authentication",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Access token issued", body = TokenResponse),
        (status = 401, description = "Incorrect username or password"),
    )
)]
pub async fn login_for_access_token(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<ApiSuccess<TokenResponse>, ApiError> {
    let user = state
        .auth_service
        .authenticate(&form.username, &form.password)
        .await?
        .ok_or_else(|| {
            tracing::warn!(grant = "password", "Login rejected");
            ApiError::bearer_challenge(ApiError::INCORRECT_CREDENTIALS)
        })?;

    let token = state.auth_service.issue_token(&user.username, state.token_ttl)?;
    tracing::info!(
        username = %user.username,
        expires_at = %token.expires_at(),
        "Access token issued"
    );

    Ok(ApiSuccess::new(StatusCode::OK, token.into()))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;

    use super::*;

    #[test]
    fn test_token_response_uses_bearer_type() {
        let expires_at = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let response = TokenResponse::from(AccessToken::new("abc.def.ghi".to_string(), expires_at));

        assert_eq!(
            serde_json::to_value(response).unwrap(),
            serde_json::json!({"access_token": "abc.def.ghi", "token_type": "bearer"})
        );
    }
}
