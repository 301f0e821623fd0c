//! Pagination and search step definitions

use std::collections::HashSet;

use cucumber::{then, when};

use crate::features::support::TestWorld;

#[when(expr = "I browse page {int} with size {int}")]
async fn browse_page(world: &mut TestWorld, page: u64, size: u64) {
    let response = world
        .app()
        .await
        .get(&format!("/totalVolunteers?page={}&size={}", page, size))
        .await;
    world.record(response);
}

#[when(expr = "I search for {string} in category {string}")]
async fn search_in_category(world: &mut TestWorld, term: String, category: String) {
    let response = world
        .app()
        .await
        .get(&format!(
            "/totalVolunteers?search={}&filter={}",
            term, category
        ))
        .await;
    world.record(response);
}

#[when(expr = "I search for {string}")]
async fn search_titles(world: &mut TestWorld, term: String) {
    let response = world
        .app()
        .await
        .get(&format!("/totalVolunteers?search={}", term))
        .await;
    world.record(response);
}

#[then(expr = "I should see {int} post(s)")]
async fn post_count(world: &mut TestWorld, count: usize) {
    let posts = world.response().body.as_array().expect("expected a JSON array");
    assert_eq!(posts.len(), count);
}

#[then("pages 1 and 2 of size 2 should not overlap")]
async fn pages_disjoint(world: &mut TestWorld) {
    let app = world.app().await;
    let mut seen = HashSet::new();

    for page in 1..=2 {
        let posts: Vec<serde_json::Value> = app
            .get(&format!("/totalVolunteers?page={}&size=2", page))
            .await
            .json();
        assert_eq!(posts.len(), 2);
        for post in posts {
            let id = post["_id"].as_str().unwrap_or_default().to_string();
            assert!(seen.insert(id), "post returned on two pages");
        }
    }
}
