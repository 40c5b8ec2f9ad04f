use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::documentation::get_documentation;
use super::handlers::documentation::get_openapi;
use super::handlers::documentation::OPENAPI_URL;
use super::handlers::login_basic::login_basic;
use super::handlers::login_for_access_token::login_for_access_token;
use super::handlers::logout::logout;
use super::handlers::read_users_me::read_users_me;
use super::handlers::root::root;
use super::middleware::authenticate as auth_middleware;
use crate::domain::user::ports::AuthServicePort;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub token_ttl: chrono::Duration,
}

pub fn create_router(auth_service: Arc<dyn AuthServicePort>, token_ttl: chrono::Duration) -> Router {
    let state = AppState {
        auth_service,
        token_ttl,
    };

    let public_routes = Router::new()
        .route("/", get(root))
        .route("/token", post(login_for_access_token))
        .route("/login", get(login_basic))
        .route("/logout", get(logout));

    let protected_routes = Router::new()
        .route("/users/me", get(read_users_me))
        .route("/docs", get(get_documentation))
        .route(OPENAPI_URL, get(get_openapi))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Headers stay out of the span: they carry credentials.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri().path(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri().path(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
