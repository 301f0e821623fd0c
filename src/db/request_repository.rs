//! Volunteer request repository

use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use super::{format_timestamp, parse_db_timestamp, parse_db_uuid};
use crate::models::{NewVolunteerRequest, Volunteer, VolunteerRequest, DEFAULT_REQUEST_STATUS};

#[derive(Debug, sqlx::FromRow)]
struct VolunteerRequestRow {
    id: String,
    post_id: String,
    post_title: Option<String>,
    organizer_email: Option<String>,
    volunteer_name: Option<String>,
    volunteer_email: String,
    suggestion: Option<String>,
    status: String,
    created_at: String,
}

pub struct VolunteerRequestRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> VolunteerRequestRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<VolunteerRequest>> {
        let rows = sqlx::query_as::<_, VolunteerRequestRow>(
            r#"
            SELECT id, post_id, post_title, organizer_email, volunteer_name, volunteer_email,
                   suggestion, status, created_at
            FROM volunteer_requests
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(self.pool)
        .await
        .context("Failed to list volunteer requests")?;

        Ok(rows.into_iter().map(row_to_request).collect())
    }

    pub async fn list_by_volunteer_email(&self, email: &str) -> Result<Vec<VolunteerRequest>> {
        let rows = sqlx::query_as::<_, VolunteerRequestRow>(
            r#"
            SELECT id, post_id, post_title, organizer_email, volunteer_name, volunteer_email,
                   suggestion, status, created_at
            FROM volunteer_requests
            WHERE volunteer_email = ?
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(email)
        .fetch_all(self.pool)
        .await
        .context("Failed to list volunteer requests by email")?;

        Ok(rows.into_iter().map(row_to_request).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<VolunteerRequest>> {
        let row = sqlx::query_as::<_, VolunteerRequestRow>(
            r#"
            SELECT id, post_id, post_title, organizer_email, volunteer_name, volunteer_email,
                   suggestion, status, created_at
            FROM volunteer_requests
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(self.pool)
        .await
        .context("Failed to get volunteer request")?;

        Ok(row.map(row_to_request))
    }

    pub async fn create(&self, req: &NewVolunteerRequest) -> Result<VolunteerRequest> {
        let id = Uuid::new_v4();
        let status = req.status.as_deref().unwrap_or(DEFAULT_REQUEST_STATUS);

        sqlx::query(
            r#"
            INSERT INTO volunteer_requests (
                id, post_id, post_title, organizer_email, volunteer_name, volunteer_email,
                suggestion, status, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id.to_string())
        .bind(req.post_id.to_string())
        .bind(&req.post_title)
        .bind(&req.organizer_email)
        .bind(&req.volunteer.name)
        .bind(&req.volunteer.email)
        .bind(&req.suggestion)
        .bind(status)
        .bind(format_timestamp(Utc::now()))
        .execute(self.pool)
        .await
        .context("Failed to create volunteer request")?;

        self.get_by_id(id)
            .await?
            .context("Failed to retrieve created volunteer request")
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM volunteer_requests WHERE id = ?")
            .bind(id.to_string())
            .execute(self.pool)
            .await
            .context("Failed to delete volunteer request")?;

        Ok(result.rows_affected())
    }
}

fn row_to_request(row: VolunteerRequestRow) -> VolunteerRequest {
    VolunteerRequest {
        id: parse_db_uuid(&row.id),
        post_id: parse_db_uuid(&row.post_id),
        post_title: row.post_title,
        organizer_email: row.organizer_email,
        volunteer: Volunteer {
            name: row.volunteer_name,
            email: row.volunteer_email,
        },
        suggestion: row.suggestion,
        status: row.status,
        created_at: parse_db_timestamp(&row.created_at),
    }
}
