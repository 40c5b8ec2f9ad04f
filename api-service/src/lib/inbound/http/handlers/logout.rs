use axum::http::header;
use axum::response::IntoResponse;
use axum::response::Redirect;

use crate::inbound::http::session;

/// Clear the session cookie and go back to the root page.
///
/// Tokens already issued stay valid until they expire.
#[utoipa::path(
    get,
    path = "/logout",
    tag = "authentication",
    responses(
        (status = 307, description = "Redirect to / with the session cookie cleared"),
    )
)]
pub async fn logout() -> impl IntoResponse {
    tracing::debug!("Session cookie cleared");

    (
        [(header::SET_COOKIE, session::clear_session_cookie())],
        Redirect::temporary("/"),
    )
}
