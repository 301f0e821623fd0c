//! Volunteer request API endpoints
//!
//! `/volunteerRequests/{key}` is keyed by the applicant's email for `GET` and by
//! an identifier for `PATCH` (the post) and `DELETE` (the request).

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::info;

use crate::{
    db::{VolunteerRepository, VolunteerRequestRepository},
    middleware::AuthUser,
    models::{DeleteResult, InsertResult, NewVolunteerRequest, UpdateResult, VolunteerRequest},
    utils::{parse_object_id, validate_body, AppError, AppResult},
    AppState,
};

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/allVolunteerRequests", get(list_all_requests))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/volunteerRequests", post(create_request))
        .route(
            "/volunteerRequests/{key}",
            get(list_requests_by_email)
                .patch(decrement_needed)
                .delete(delete_request),
        )
}

/// GET /allVolunteerRequests
async fn list_all_requests(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<VolunteerRequest>>> {
    let repo = VolunteerRequestRepository::new(&state.db);
    let requests = repo.list_all().await?;

    Ok(Json(requests))
}

/// POST /volunteerRequests
async fn create_request(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(payload): Json<NewVolunteerRequest>,
) -> AppResult<Json<InsertResult>> {
    validate_body(&payload)?;
    auth_user.require_owner(&payload.volunteer.email)?;

    let repo = VolunteerRequestRepository::new(&state.db);
    let request = repo.create(&payload).await?;

    info!(request_id = %request.id, post_id = %request.post_id, "Volunteer request created");

    Ok(Json(InsertResult::new(request.id)))
}

/// GET /volunteerRequests/{email}
async fn list_requests_by_email(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(email): Path<String>,
) -> AppResult<Json<Vec<VolunteerRequest>>> {
    auth_user.require_owner(&email)?;

    let repo = VolunteerRequestRepository::new(&state.db);
    let requests = repo.list_by_volunteer_email(&email).await?;

    Ok(Json(requests))
}

/// PATCH /volunteerRequests/{id}
///
/// Takes one from the needed-volunteers counter of post `{id}`. No floor.
async fn decrement_needed(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<String>,
) -> AppResult<Json<UpdateResult>> {
    let id = parse_object_id(&id, "post")?;

    let repo = VolunteerRepository::new(&state.db);
    let matched = repo.decrement_needed(id).await?;

    Ok(Json(UpdateResult::matched(matched)))
}

/// DELETE /volunteerRequests/{id}
///
/// Allowed for the applicant and for the organizer named on the request.
async fn delete_request(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResult>> {
    let id = parse_object_id(&id, "request")?;

    let repo = VolunteerRequestRepository::new(&state.db);
    let existing = repo.get_by_id(id).await?;

    let Some(request) = existing else {
        return Ok(Json(DeleteResult::new(0)));
    };
    if !request.is_party(&auth_user.email) {
        return Err(AppError::forbidden("forbidden access"));
    }

    let deleted = repo.delete(id).await?;

    info!(request_id = %id, by = %auth_user.email, "Volunteer request deleted");

    Ok(Json(DeleteResult::new(deleted)))
}
