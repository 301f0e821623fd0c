//! Common step definitions used across features

use cucumber::{given, then, when};

use crate::features::support::TestWorld;

#[given("the server is running")]
async fn server_running(world: &mut TestWorld) {
    world.app().await;
}

#[given(expr = "I am signed in as {string}")]
async fn signed_in_as(world: &mut TestWorld, email: String) {
    let response = world.app().await.login(&email).await;
    assert!(response.status.is_success(), "login failed: {}", response.text());
}

#[given("I am not signed in")]
async fn not_signed_in(world: &mut TestWorld) {
    world.app().await.session_cookie = None;
}

#[when("I sign out")]
async fn sign_out(world: &mut TestWorld) {
    let response = world.app().await.logout().await;
    world.record(response);
}

#[then(expr = "the response status should be {int}")]
async fn response_status(world: &mut TestWorld, status: u16) {
    assert_eq!(world.response().status, status, "body: {}", world.response().body);
}

#[then("the response should contain an error")]
async fn response_contains_error(world: &mut TestWorld) {
    assert!(world.response().body.get("error").is_some());
}
