//! Volunteer post API endpoints

use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Json, Router,
};
use tracing::info;

use crate::{
    db::VolunteerRepository,
    middleware::AuthUser,
    models::{
        CountResponse, DeleteResult, InsertResult, OrganizerQuery, PageQuery, UpdateResult,
        VolunteerPost, VolunteerPostInput,
    },
    utils::{parse_object_id, validate_body, validate_query, AppError, AppResult},
    AppState,
};

/// Listings and lookups open to anonymous clients
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/volunteers", get(list_volunteers))
        .route("/volunteers/{id}", get(get_volunteer))
        .route("/totalVolunteers", get(page_volunteers))
        .route("/countVolunteers", get(count_volunteers))
}

/// Routes behind the session cookie
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/volunteers", post(create_volunteer))
        .route("/volunteers-email", get(list_by_organizer))
        .route(
            "/volunteers/{id}",
            put(upsert_volunteer).delete(delete_volunteer),
        )
}

/// GET /volunteers
async fn list_volunteers(State(state): State<AppState>) -> AppResult<Json<Vec<VolunteerPost>>> {
    let repo = VolunteerRepository::new(&state.db);
    let posts = repo.list_by_deadline().await?;

    Ok(Json(posts))
}

/// GET /volunteers/{id}
async fn get_volunteer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<VolunteerPost>> {
    let id = parse_object_id(&id, "post")?;

    let repo = VolunteerRepository::new(&state.db);
    let post = repo
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Volunteer post not found"))?;

    Ok(Json(post))
}

/// GET /volunteers-email?email=
///
/// Posts published by `email`, which must be the caller.
async fn list_by_organizer(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(query): Query<OrganizerQuery>,
) -> AppResult<Json<Vec<VolunteerPost>>> {
    auth_user.require_owner_of(query.email.as_deref())?;

    let repo = VolunteerRepository::new(&state.db);
    let posts = repo.list_by_organizer(&auth_user.email).await?;

    Ok(Json(posts))
}

/// POST /volunteers
async fn create_volunteer(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(payload): Json<VolunteerPostInput>,
) -> AppResult<Json<InsertResult>> {
    validate_body(&payload)?;
    auth_user.require_owner(&payload.organizer_email)?;

    let repo = VolunteerRepository::new(&state.db);
    let post = repo.create(&payload).await?;

    info!(post_id = %post.id, organizer = %post.organizer_email, "Volunteer post created");

    Ok(Json(InsertResult::new(post.id)))
}

/// PUT /volunteers/{id}
///
/// Replaces the post, inserting it under `id` if it does not exist yet. The
/// body must name the caller as organizer, and an existing post may only be
/// replaced by its owner.
async fn upsert_volunteer(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<VolunteerPostInput>,
) -> AppResult<Json<UpdateResult>> {
    let id = parse_object_id(&id, "post")?;
    validate_body(&payload)?;

    auth_user.require_owner(&payload.organizer_email)?;

    let repo = VolunteerRepository::new(&state.db);
    if let Some(post) = repo.get_by_id(id).await? {
        auth_user.require_owner(&post.organizer_email)?;
    }

    let result = repo.upsert(id, &payload).await?;

    info!(post_id = %id, upserted = result.upserted_id.is_some(), "Volunteer post saved");

    Ok(Json(result))
}

/// DELETE /volunteers/{id}
async fn delete_volunteer(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResult>> {
    let id = parse_object_id(&id, "post")?;

    let repo = VolunteerRepository::new(&state.db);
    let existing = repo.get_by_id(id).await?;

    let Some(post) = existing else {
        return Ok(Json(DeleteResult::new(0)));
    };
    auth_user.require_owner(&post.organizer_email)?;

    let deleted = repo.delete(id).await?;

    info!(post_id = %id, "Volunteer post deleted");

    Ok(Json(DeleteResult::new(deleted)))
}

/// GET /totalVolunteers?page=&size=&filter=&search=
async fn page_volunteers(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<Vec<VolunteerPost>>> {
    validate_query(&query)?;

    let repo = VolunteerRepository::new(&state.db);
    let posts = repo.page(&query).await?;

    Ok(Json(posts))
}

/// GET /countVolunteers
async fn count_volunteers(State(state): State<AppState>) -> AppResult<Json<CountResponse>> {
    let repo = VolunteerRepository::new(&state.db);
    let count = repo.count().await?;

    Ok(Json(CountResponse { count }))
}
