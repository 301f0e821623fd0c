//! Request confirmation repository (append-only)

use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use super::{format_timestamp, parse_db_timestamp, parse_db_uuid};
use crate::models::{NewRequestConfirmation, RequestConfirmation, Volunteer};

#[derive(Debug, sqlx::FromRow)]
struct ConfirmationRow {
    id: String,
    post_id: String,
    request_id: Option<String>,
    post_title: Option<String>,
    volunteer_name: Option<String>,
    volunteer_email: String,
    organizer_email: Option<String>,
    created_at: String,
}

pub struct ConfirmationRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ConfirmationRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<RequestConfirmation>> {
        let row = sqlx::query_as::<_, ConfirmationRow>(
            r#"
            SELECT id, post_id, request_id, post_title, volunteer_name, volunteer_email,
                   organizer_email, created_at
            FROM volunteer_req_confirmations
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(self.pool)
        .await
        .context("Failed to get request confirmation")?;

        Ok(row.map(row_to_confirmation))
    }

    pub async fn create(&self, req: &NewRequestConfirmation) -> Result<RequestConfirmation> {
        let id = Uuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO volunteer_req_confirmations (
                id, post_id, request_id, post_title, volunteer_name, volunteer_email,
                organizer_email, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id.to_string())
        .bind(req.post_id.to_string())
        .bind(req.request_id.map(|r| r.to_string()))
        .bind(&req.post_title)
        .bind(&req.volunteer.name)
        .bind(&req.volunteer.email)
        .bind(&req.organizer_email)
        .bind(format_timestamp(Utc::now()))
        .execute(self.pool)
        .await
        .context("Failed to create request confirmation")?;

        self.get_by_id(id)
            .await?
            .context("Failed to retrieve created request confirmation")
    }
}

fn row_to_confirmation(row: ConfirmationRow) -> RequestConfirmation {
    RequestConfirmation {
        id: parse_db_uuid(&row.id),
        post_id: parse_db_uuid(&row.post_id),
        request_id: row.request_id.as_deref().map(parse_db_uuid),
        post_title: row.post_title,
        volunteer: Volunteer {
            name: row.volunteer_name,
            email: row.volunteer_email,
        },
        organizer_email: row.organizer_email,
        created_at: parse_db_timestamp(&row.created_at),
    }
}
