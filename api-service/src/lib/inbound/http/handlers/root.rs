use axum::http::StatusCode;
use serde::Serialize;
use utoipa::ToSchema;

use crate::inbound::http::handlers::ApiSuccess;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ServiceStatus {
    pub service: String,
    pub version: String,
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "service",
    responses((status = 200, description = "Service banner", body = ServiceStatus))
)]
pub async fn root() -> ApiSuccess<ServiceStatus> {
    ApiSuccess::new(
        StatusCode::OK,
        ServiceStatus {
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            status: "ok".to_string(),
        },
    )
}
