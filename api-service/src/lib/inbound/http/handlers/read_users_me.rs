use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::user::models::User;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;

/// Public view of a user. The password digest never leaves the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UserResponse {
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub disabled: bool,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.to_string(),
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            disabled: user.disabled,
        }
    }
}

#[utoipa::path(
    get,
    path = "/users/me",
    tag = "users",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The user the token was issued to", body = UserResponse),
        (status = 401, description = "Missing, invalid or expired token"),
    )
)]
pub async fn read_users_me(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiSuccess<UserResponse> {
    ApiSuccess::new(StatusCode::OK, (&user).into())
}
