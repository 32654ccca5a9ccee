// src/presentation/http/session.rs
use crate::application::dto::AuthTokenDto;
use axum::http::{HeaderMap, HeaderName, header};
use cookie::{Cookie, SameSite, time::Duration};

pub const SESSION_COOKIE: &str = "jwt";

/// The session cookie carrying `token`. It lives exactly as long as the token.
pub fn session_cookie(token: &AuthTokenDto, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token.token.clone()))
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(secure)
        .path("/")
        .max_age(Duration::seconds(token.expires_in))
        .into()
}

/// An expired, empty session cookie that makes the browser drop the old one.
pub fn clear_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(secure)
        .path("/")
        .max_age(Duration::ZERO)
        .into()
}

pub fn set_cookie_header(cookie: &Cookie<'_>) -> [(HeaderName, String); 1] {
    [(header::SET_COOKIE, cookie.to_string())]
}

/// Returns the session token from the `Cookie` headers, if any.
pub fn token_from_cookies(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .into_iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == SESSION_COOKIE && !cookie.value().is_empty())
        .map(|cookie| cookie.value().to_string())
}
