use axum::http::header::InvalidHeaderValue;
use axum::http::HeaderValue;
use axum_extra::extract::cookie::CookieJar;

/// Cookie carrying `Bearer <token>` after a Basic login.
pub const SESSION_COOKIE_NAME: &str = "Authorization";

/// Lifetime of the session cookie, independent of the token ttl.
pub const SESSION_COOKIE_MAX_AGE_SECS: u32 = 1800;

/// Build the `Set-Cookie` value that hands a token to a browser.
pub fn session_cookie(token: &str) -> Result<HeaderValue, InvalidHeaderValue> {
    HeaderValue::from_str(&format!(
        "{SESSION_COOKIE_NAME}=Bearer {token}; HttpOnly; Max-Age={SESSION_COOKIE_MAX_AGE_SECS}; Path=/; SameSite=Lax"
    ))
}

/// Build the `Set-Cookie` value that tells a browser to drop the session.
pub fn clear_session_cookie() -> HeaderValue {
    HeaderValue::from_static("Authorization=; HttpOnly; Max-Age=0; Path=/; SameSite=Lax")
}

/// Token from the session cookie, if present and carrying the Bearer scheme.
pub fn token_from_cookie(jar: &CookieJar) -> Option<String> {
    let cookie = jar.get(SESSION_COOKIE_NAME)?;
    let value = cookie.value().trim().trim_matches('"');

    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token.to_string())
}
