//! Auth routes — password login, logout, current user.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use records::auth::{LoginRequest, UserInfo};
use records::{Envelope, error_code};
use time::Duration;
use tracing::{info, warn};

use crate::routes::failure::ApiFailure;
use crate::services::session;
use crate::state::AppState;

const COOKIE_NAME: &str = "session_token";

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    env_bool("COOKIE_SECURE").unwrap_or(false)
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: UserInfo,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiFailure;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(ApiFailure::unauthenticated());
        }

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|err| ApiFailure::storage(&err))?
            .ok_or_else(ApiFailure::unauthenticated)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

fn invalid_credentials() -> ApiFailure {
    ApiFailure::new(StatusCode::UNAUTHORIZED, error_code::UNAUTHENTICATED, "invalid username or password")
}

/// `POST /api/auth/login` — verify credentials, create session, set cookie.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiFailure> {
    let username = body.username.trim();
    if username.is_empty() || body.password.is_empty() {
        return Err(ApiFailure::new(
            StatusCode::BAD_REQUEST,
            error_code::VALIDATION_FAILED,
            "username and password are required",
        ));
    }

    let Some((user, password_hash)) = session::find_login(&state.pool, username)
        .await
        .map_err(|err| ApiFailure::storage(&err))?
    else {
        warn!(%username, "login rejected: unknown user");
        return Err(invalid_credentials());
    };

    if !session::verify_password(&body.password, &password_hash) {
        warn!(%username, "login rejected: bad password");
        return Err(invalid_credentials());
    }

    let token = session::create_session(&state.pool, user.id)
        .await
        .map_err(|err| ApiFailure::storage(&err))?;

    let cookie = Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(axum_extra::extract::cookie::SameSite::Lax)
        .secure(cookie_secure())
        .max_age(Duration::hours(session::session_ttl_hours()));

    info!(user_id = %user.id, %username, "login");
    let jar = CookieJar::new().add(cookie);
    Ok((jar, Json(Envelope::ok(user))))
}

/// `GET /api/auth/me` — return current user.
pub async fn me(auth: AuthUser) -> Json<Envelope<UserInfo>> {
    Json(Envelope::ok(auth.user))
}

/// `POST /api/auth/logout` — delete session, clear cookie.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    let _ = session::delete_session(&state.pool, &auth.token).await;

    let cookie = Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(axum_extra::extract::cookie::SameSite::Lax)
        .secure(cookie_secure())
        .max_age(Duration::ZERO);

    let jar = CookieJar::new().add(cookie);
    (jar, StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
