//! Volunteer request and confirmation endpoint tests

use serde_json::Value;

use crate::common::{
    confirmation_body, post_body, request_body, TestApp, ORGANIZER, OTHER_ORGANIZER, VOLUNTEER,
};

/// Post created by ORGANIZER; the app is left signed in as VOLUNTEER
async fn app_with_post() -> (TestApp, String) {
    let mut app = TestApp::new().await;
    app.login(ORGANIZER).await;
    let post_id = app
        .create_post(post_body(ORGANIZER, "Beach cleanup", "environment", 3))
        .await;
    app.login(VOLUNTEER).await;
    (app, post_id)
}

async fn create_request(app: &TestApp, post_id: &str) -> String {
    let response = app
        .post_json("/volunteerRequests", request_body(post_id, VOLUNTEER, ORGANIZER))
        .await;
    response.assert_ok();
    let result: Value = response.json();
    result["insertedId"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_create_and_list_own_requests() {
    let (app, post_id) = app_with_post().await;
    let request_id = create_request(&app, &post_id).await;

    let requests: Vec<Value> = app
        .get(&format!("/volunteerRequests/{}", VOLUNTEER))
        .await
        .json();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["_id"], request_id.as_str());
    assert_eq!(requests[0]["post_id"], post_id.as_str());
    assert_eq!(requests[0]["status"], "requested");
    assert_eq!(requests[0]["volunteer"]["email"], VOLUNTEER);
}

#[tokio::test]
async fn test_create_request_for_someone_else_is_forbidden() {
    let (app, post_id) = app_with_post().await;

    app.post_json(
        "/volunteerRequests",
        request_body(&post_id, "someone.else@example.com", ORGANIZER),
    )
    .await
    .assert_forbidden();
}

#[tokio::test]
async fn test_create_request_requires_session() {
    let (mut app, post_id) = app_with_post().await;
    app.session_cookie = None;

    app.post_json("/volunteerRequests", request_body(&post_id, VOLUNTEER, ORGANIZER))
        .await
        .assert_unauthorized();
}

#[tokio::test]
async fn test_list_requests_of_other_email_is_forbidden() {
    let (app, post_id) = app_with_post().await;
    create_request(&app, &post_id).await;

    app.get(&format!("/volunteerRequests/{}", ORGANIZER))
        .await
        .assert_forbidden();
}

#[tokio::test]
async fn test_all_requests_is_public() {
    let (mut app, post_id) = app_with_post().await;
    create_request(&app, &post_id).await;
    create_request(&app, &post_id).await;

    app.session_cookie = None;
    let requests: Vec<Value> = app.get("/allVolunteerRequests").await.json();
    assert_eq!(requests.len(), 2);
}

#[tokio::test]
async fn test_decrement_reduces_count_by_one_and_has_no_floor() {
    let (app, post_id) = app_with_post().await;

    let response = app.patch(&format!("/volunteerRequests/{}", post_id)).await;
    response.assert_ok();
    let result: Value = response.json();
    assert_eq!(result["matchedCount"], 1);
    assert_eq!(result["modifiedCount"], 1);

    let post: Value = app.get(&format!("/volunteers/{}", post_id)).await.json();
    assert_eq!(post["no_of_volunteers_needed"], 4);

    for _ in 0..6 {
        app.patch(&format!("/volunteerRequests/{}", post_id))
            .await
            .assert_ok();
    }

    let post: Value = app.get(&format!("/volunteers/{}", post_id)).await.json();
    assert_eq!(post["no_of_volunteers_needed"], -2);
}

#[tokio::test]
async fn test_decrement_unknown_post_matches_nothing() {
    let (app, _) = app_with_post().await;

    let result: Value = app
        .patch(&format!("/volunteerRequests/{}", uuid::Uuid::new_v4()))
        .await
        .json();
    assert_eq!(result["matchedCount"], 0);

    app.patch("/volunteerRequests/not-an-id")
        .await
        .assert_bad_request();
}

#[tokio::test]
async fn test_decrement_requires_session() {
    let (mut app, post_id) = app_with_post().await;
    app.session_cookie = None;

    app.patch(&format!("/volunteerRequests/{}", post_id))
        .await
        .assert_unauthorized();
}

#[tokio::test]
async fn test_volunteer_can_withdraw_request() {
    let (app, post_id) = app_with_post().await;
    let request_id = create_request(&app, &post_id).await;

    let result: Value = app
        .delete(&format!("/volunteerRequests/{}", request_id))
        .await
        .json();
    assert_eq!(result["deletedCount"], 1);

    let requests: Vec<Value> = app
        .get(&format!("/volunteerRequests/{}", VOLUNTEER))
        .await
        .json();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_organizer_can_dismiss_request() {
    let (mut app, post_id) = app_with_post().await;
    let request_id = create_request(&app, &post_id).await;

    app.login(ORGANIZER).await;
    let result: Value = app
        .delete(&format!("/volunteerRequests/{}", request_id))
        .await
        .json();
    assert_eq!(result["deletedCount"], 1);
}

#[tokio::test]
async fn test_unrelated_user_cannot_delete_request() {
    let (mut app, post_id) = app_with_post().await;
    let request_id = create_request(&app, &post_id).await;

    app.login(OTHER_ORGANIZER).await;
    app.delete(&format!("/volunteerRequests/{}", request_id))
        .await
        .assert_forbidden();
}

#[tokio::test]
async fn test_confirmation_is_recorded() {
    let (mut app, post_id) = app_with_post().await;
    let request_id = create_request(&app, &post_id).await;

    app.login(ORGANIZER).await;
    let response = app
        .post_json(
            "/volunteerReqConfirmations",
            confirmation_body(&post_id, &request_id, VOLUNTEER),
        )
        .await;
    response.assert_ok();

    let result: Value = response.json();
    assert_eq!(result["acknowledged"], true);
    assert!(result["insertedId"].as_str().is_some());
}

#[tokio::test]
async fn test_confirmation_requires_session() {
    let (mut app, post_id) = app_with_post().await;
    app.session_cookie = None;

    app.post_json(
        "/volunteerReqConfirmations",
        confirmation_body(&post_id, &uuid::Uuid::new_v4().to_string(), VOLUNTEER),
    )
    .await
    .assert_unauthorized();
}
