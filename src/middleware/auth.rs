//! Cookie-borne JWT authentication
//!
//! The session token is issued by `POST /jwt` and carried back by the browser in
//! an http-only cookie. The middleware verifies it and injects [`AuthUser`] into
//! the request extensions.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::CookieJar;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, TokenData, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::{
    utils::{error::ErrorResponse, AppError},
    AppState,
};

const UNAUTHORIZED_MESSAGE: &str = "unauthorized access";
const FORBIDDEN_MESSAGE: &str = "forbidden access";

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Identity the session was issued for
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
    /// JWT ID (unique identifier for this token)
    pub jti: String,
}

/// Authenticated identity extracted from the session cookie
#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser {
    pub email: String,
    pub name: Option<String>,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            email: claims.email,
            name: claims.name,
        }
    }
}

impl AuthUser {
    /// Whether the caller is the identity named by `email`
    pub fn owns(&self, email: &str) -> bool {
        self.email == email
    }

    /// Reject with 403 unless the caller is `email`
    pub fn require_owner(&self, email: &str) -> Result<(), AppError> {
        if self.owns(email) {
            Ok(())
        } else {
            debug!(caller = %self.email, owner = %email, "Ownership check failed");
            Err(AppError::forbidden(FORBIDDEN_MESSAGE))
        }
    }

    /// Like [`AuthUser::require_owner`], a missing email counts as a mismatch
    pub fn require_owner_of(&self, email: Option<&str>) -> Result<(), AppError> {
        match email {
            Some(email) => self.require_owner(email),
            None => Err(AppError::forbidden(FORBIDDEN_MESSAGE)),
        }
    }
}

/// Extractor for AuthUser from request extensions
///
/// Only usable on routes behind [`auth_middleware`].
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or(AuthError::MissingToken)
    }
}

/// Sign a session token for `email`
pub fn create_session_token(
    email: &str,
    name: Option<&str>,
    secret: &str,
    expiry_hours: u64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let exp = now + Duration::hours(expiry_hours as i64);

    let claims = Claims {
        email: email.to_string(),
        name: name.map(str::to_string),
        iat: now.timestamp(),
        exp: exp.timestamp(),
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Validate and decode a session token
pub fn validate_token(token: &str, secret: &str) -> Result<TokenData<Claims>, AuthError> {
    let mut validation = Validation::default();
    validation.validate_exp = true;
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => AuthError::InvalidToken,
    })
}

/// Authentication error types
#[derive(Debug, PartialEq)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
    TokenExpired,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        debug!(reason = ?self, "Rejected unauthenticated request");

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new("unauthorized", UNAUTHORIZED_MESSAGE)),
        )
            .into_response()
    }
}

/// Authentication middleware
///
/// Reads the session cookie, verifies it and inserts the [`AuthUser`] into
/// request extensions. An empty cookie value is treated as absent.
pub async fn auth_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = jar
        .get(&state.config.auth.cookie_name)
        .map(|cookie| cookie.value())
        .filter(|value| !value.is_empty())
        .ok_or(AuthError::MissingToken)?;

    let token_data = validate_token(token, &state.config.auth.jwt_secret)?;
    let auth_user = AuthUser::from(token_data.claims);

    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}
