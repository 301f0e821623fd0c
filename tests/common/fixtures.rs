//! Test fixtures for common test data
//!
//! JSON bodies in the shape the web client sends.

use chrono::{Duration, SecondsFormat, Utc};
use serde_json::{json, Value};

pub const ORGANIZER: &str = "organizer@example.com";
pub const OTHER_ORGANIZER: &str = "other.organizer@example.com";
pub const VOLUNTEER: &str = "volunteer@example.com";

/// Deadline `days` from now, in RFC 3339
pub fn deadline_in(days: i64) -> String {
    (Utc::now() + Duration::days(days)).to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Body for `POST /volunteers`
pub fn post_body(organizer: &str, title: &str, category: &str, deadline_days: i64) -> Value {
    json!({
        "organizer_email": organizer,
        "organizer_name": "Test Organizer",
        "post_title": title,
        "category": category,
        "deadline": deadline_in(deadline_days),
        "no_of_volunteers_needed": 5,
        "location": "Dhaka",
        "description": "Help wanted",
        "thumbnail": "https://img.example.com/thumb.png"
    })
}

/// Body for `POST /volunteerRequests`
pub fn request_body(post_id: &str, volunteer: &str, organizer: &str) -> Value {
    json!({
        "post_id": post_id,
        "post_title": "Beach cleanup",
        "organizer_email": organizer,
        "volunteer": { "name": "Test Volunteer", "email": volunteer },
        "suggestion": "Available on weekends"
    })
}

/// Body for `POST /volunteerReqConfirmations`
pub fn confirmation_body(post_id: &str, request_id: &str, volunteer: &str) -> Value {
    json!({
        "post_id": post_id,
        "request_id": request_id,
        "post_title": "Beach cleanup",
        "volunteer": { "email": volunteer },
        "organizer_email": ORGANIZER
    })
}
