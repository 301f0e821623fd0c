//! Session API endpoints
//!
//! `POST /jwt` signs a token for the identity the client authenticated with and
//! stores it in an http-only cookie; `POST /logout` clears that cookie.

use axum::{extract::State, routing::post, Json, Router};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::info;

use crate::{
    config::AppConfig,
    middleware::create_session_token,
    models::{SessionRequest, SessionResponse},
    utils::{validate_body, AppError, AppResult},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/jwt", post(issue_token))
        .route("/logout", post(logout))
}

/// Cookie carrying `value` with the attributes for the configured environment
fn session_cookie(config: &AppConfig, value: String) -> Cookie<'static> {
    let production = config.server.environment.is_production();

    Cookie::build((config.auth.cookie_name.clone(), value))
        .http_only(true)
        .path("/")
        .secure(production)
        .same_site(if production {
            SameSite::None
        } else {
            SameSite::Strict
        })
        .build()
}

/// POST /jwt
async fn issue_token(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<SessionRequest>,
) -> AppResult<(CookieJar, Json<SessionResponse>)> {
    validate_body(&payload)?;

    let token = create_session_token(
        &payload.email,
        payload.name.as_deref(),
        &state.config.auth.jwt_secret,
        state.config.auth.token_expiry_hours,
    )
    .map_err(|e| {
        tracing::error!("Failed to sign session token: {}", e);
        AppError::internal("Failed to create session token")
    })?;

    info!(email = %payload.email, "Session issued");

    let jar = jar.add(session_cookie(&state.config, token));
    Ok((jar, Json(SessionResponse::ok())))
}

/// POST /logout
///
/// Always emits a removal cookie, whether or not the request carried one.
async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<SessionResponse>) {
    let mut cookie = session_cookie(&state.config, String::new());
    cookie.make_removal();

    (jar.add(cookie), Json(SessionResponse::ok()))
}
