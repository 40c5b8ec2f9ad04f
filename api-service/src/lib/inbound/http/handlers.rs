use axum::http::header;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::user::errors::AuthError;

pub mod documentation;
pub mod login_basic;
pub mod login_for_access_token;
pub mod logout;
pub mod read_users_me;
pub mod root;

/// Successful response: the payload is the whole JSON body.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Authentication scheme named in a 401 challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Challenge {
    Bearer,
    Basic,
}

impl Challenge {
    pub fn as_str(&self) -> &'static str {
        match self {
            Challenge::Bearer => "Bearer",
            Challenge::Basic => "Basic",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    /// 401 with a challenge header; Basic challenges carry no body.
    Unauthorized {
        challenge: Challenge,
        message: &'static str,
    },
}

impl ApiError {
    pub const INCORRECT_CREDENTIALS: &'static str = "Incorrect username or password";
    pub const INVALID_CREDENTIALS: &'static str = "Could not validate credentials";

    pub fn bearer_challenge(message: &'static str) -> Self {
        ApiError::Unauthorized {
            challenge: Challenge::Bearer,
            message,
        }
    }

    pub fn basic_challenge() -> Self {
        ApiError::Unauthorized {
            challenge: Challenge::Basic,
            message: "",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                (
                    status,
                    Json(ApiResponseBody::new_error(
                        status,
                        "Internal server error".to_string(),
                    )),
                )
                    .into_response()
            }
            ApiError::Unauthorized {
                challenge: Challenge::Basic,
                ..
            } => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, Challenge::Basic.as_str())],
            )
                .into_response(),
            ApiError::Unauthorized { challenge, message } => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, challenge.as_str())],
                Json(ApiResponseBody::new_error(
                    StatusCode::UNAUTHORIZED,
                    message.to_string(),
                )),
            )
                .into_response(),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        if err.is_authentication_failure() {
            ApiError::bearer_challenge(ApiError::INVALID_CREDENTIALS)
        } else {
            ApiError::InternalServerError(err.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}
