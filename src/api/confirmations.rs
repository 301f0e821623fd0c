//! Request confirmation API endpoints

use axum::{extract::State, routing::post, Json, Router};
use tracing::info;

use crate::{
    db::ConfirmationRepository,
    middleware::AuthUser,
    models::{InsertResult, NewRequestConfirmation},
    utils::{validate_body, AppResult},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/volunteerReqConfirmations", post(create_confirmation))
}

/// POST /volunteerReqConfirmations
async fn create_confirmation(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(payload): Json<NewRequestConfirmation>,
) -> AppResult<Json<InsertResult>> {
    validate_body(&payload)?;

    let repo = ConfirmationRepository::new(&state.db);
    let confirmation = repo.create(&payload).await?;

    info!(
        confirmation_id = %confirmation.id,
        post_id = %confirmation.post_id,
        by = %auth_user.email,
        "Volunteer request confirmed"
    );

    Ok(Json(InsertResult::new(confirmation.id)))
}
