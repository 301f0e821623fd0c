//! API routes and handlers
//!
//! Public and protected routers register some of the same paths (for example
//! `GET /volunteers/{id}` is open while `PUT`/`DELETE` need a session); axum
//! merges them per method, so the auth layer only wraps protected methods.
//! The layer is a route layer: unmatched paths still fall through to 404.

use axum::{routing::get, Router};

use crate::{middleware, AppState};

mod confirmations;
mod health;
mod requests;
mod session;
mod volunteers;

pub use health::*;

/// Public API routes (no authentication required)
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // Liveness text and probes
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness))
        // Session endpoints
        .merge(session::routes())
        // Read-only listings
        .merge(volunteers::public_routes())
        .merge(requests::public_routes())
}

/// Protected API routes (session cookie required)
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .merge(volunteers::routes())
        .merge(requests::routes())
        .merge(confirmations::routes())
}

/// Build the complete router with the auth layer applied to protected routes
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(public_routes())
        .merge(
            protected_routes().route_layer(axum::middleware::from_fn_with_state(
                state.clone(),
                middleware::auth_middleware,
            )),
        )
        .with_state(state)
}
