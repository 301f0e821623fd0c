//! Volunteer post repository

use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use super::{format_timestamp, parse_db_timestamp, parse_db_uuid};
use crate::models::{PageQuery, UpdateResult, VolunteerPost, VolunteerPostInput};

#[derive(Debug, sqlx::FromRow)]
struct VolunteerPostRow {
    id: String,
    organizer_email: String,
    organizer_name: Option<String>,
    post_title: String,
    category: String,
    deadline: String,
    no_of_volunteers_needed: i64,
    location: Option<String>,
    description: Option<String>,
    thumbnail: Option<String>,
    created_at: String,
    updated_at: String,
}

pub struct VolunteerRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> VolunteerRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// All posts, soonest deadline first
    pub async fn list_by_deadline(&self) -> Result<Vec<VolunteerPost>> {
        let rows = sqlx::query_as::<_, VolunteerPostRow>(
            r#"
            SELECT id, organizer_email, organizer_name, post_title, category, deadline,
                   no_of_volunteers_needed, location, description, thumbnail,
                   created_at, updated_at
            FROM volunteers
            ORDER BY deadline ASC, created_at ASC, id ASC
            "#,
        )
        .fetch_all(self.pool)
        .await
        .context("Failed to list volunteer posts")?;

        Ok(rows.into_iter().map(row_to_post).collect())
    }

    pub async fn list_by_organizer(&self, organizer_email: &str) -> Result<Vec<VolunteerPost>> {
        let rows = sqlx::query_as::<_, VolunteerPostRow>(
            r#"
            SELECT id, organizer_email, organizer_name, post_title, category, deadline,
                   no_of_volunteers_needed, location, description, thumbnail,
                   created_at, updated_at
            FROM volunteers
            WHERE organizer_email = ?
            ORDER BY deadline ASC, created_at ASC, id ASC
            "#,
        )
        .bind(organizer_email)
        .fetch_all(self.pool)
        .await
        .context("Failed to list volunteer posts by organizer")?;

        Ok(rows.into_iter().map(row_to_post).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<VolunteerPost>> {
        let row = sqlx::query_as::<_, VolunteerPostRow>(
            r#"
            SELECT id, organizer_email, organizer_name, post_title, category, deadline,
                   no_of_volunteers_needed, location, description, thumbnail,
                   created_at, updated_at
            FROM volunteers
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(self.pool)
        .await
        .context("Failed to get volunteer post")?;

        Ok(row.map(row_to_post))
    }

    pub async fn create(&self, input: &VolunteerPostInput) -> Result<VolunteerPost> {
        let id = Uuid::new_v4();
        self.insert(id, input).await?;

        self.get_by_id(id)
            .await?
            .context("Failed to retrieve created volunteer post")
    }

    /// Replace the post's fields, inserting it under `id` when it does not exist
    ///
    /// A single `INSERT .. ON CONFLICT` statement, so concurrent writers on a
    /// new id end with one insert and one replace.
    pub async fn upsert(&self, id: Uuid, input: &VolunteerPostInput) -> Result<UpdateResult> {
        let now = format_timestamp(Utc::now());

        let revision: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO volunteers (
                id, organizer_email, organizer_name, post_title, post_title_search, category,
                deadline, no_of_volunteers_needed, location, description, thumbnail,
                created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                organizer_email = excluded.organizer_email,
                organizer_name = excluded.organizer_name,
                post_title = excluded.post_title,
                post_title_search = excluded.post_title_search,
                category = excluded.category,
                deadline = excluded.deadline,
                no_of_volunteers_needed = excluded.no_of_volunteers_needed,
                location = excluded.location,
                description = excluded.description,
                thumbnail = excluded.thumbnail,
                updated_at = excluded.updated_at,
                revision = volunteers.revision + 1
            RETURNING revision
            "#,
        )
        .bind(id.to_string())
        .bind(&input.organizer_email)
        .bind(&input.organizer_name)
        .bind(&input.post_title)
        .bind(fold_title(&input.post_title))
        .bind(&input.category)
        .bind(format_timestamp(input.deadline))
        .bind(input.no_of_volunteers_needed)
        .bind(&input.location)
        .bind(&input.description)
        .bind(&input.thumbnail)
        .bind(&now)
        .bind(&now)
        .fetch_one(self.pool)
        .await
        .context("Failed to update volunteer post")?;

        if revision == 0 {
            Ok(UpdateResult::upserted(id))
        } else {
            Ok(UpdateResult::matched(1))
        }
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM volunteers WHERE id = ?")
            .bind(id.to_string())
            .execute(self.pool)
            .await
            .context("Failed to delete volunteer post")?;

        Ok(result.rows_affected())
    }

    /// Atomically lower the needed-volunteers counter by one. No floor is enforced.
    pub async fn decrement_needed(&self, id: Uuid) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE volunteers
            SET no_of_volunteers_needed = no_of_volunteers_needed - 1, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(format_timestamp(Utc::now()))
        .bind(id.to_string())
        .execute(self.pool)
        .await
        .context("Failed to decrement volunteers needed")?;

        Ok(result.rows_affected())
    }

    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM volunteers")
            .fetch_one(self.pool)
            .await
            .context("Failed to count volunteer posts")?;

        Ok(count)
    }

    /// One window of posts ordered by deadline, optionally narrowed by a
    /// case-insensitive title substring and an exact category
    pub async fn page(&self, query: &PageQuery) -> Result<Vec<VolunteerPost>> {
        let search = query.title_search().map(fold_title);
        let category = query.category();

        let rows = sqlx::query_as::<_, VolunteerPostRow>(
            r#"
            SELECT id, organizer_email, organizer_name, post_title, category, deadline,
                   no_of_volunteers_needed, location, description, thumbnail,
                   created_at, updated_at
            FROM volunteers
            WHERE (? IS NULL OR instr(post_title_search, ?) > 0)
              AND (? IS NULL OR category = ?)
            ORDER BY deadline ASC, created_at ASC, id ASC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(search.as_deref())
        .bind(search.as_deref())
        .bind(category)
        .bind(category)
        .bind(query.limit())
        .bind(query.offset())
        .fetch_all(self.pool)
        .await
        .context("Failed to page volunteer posts")?;

        Ok(rows.into_iter().map(row_to_post).collect())
    }

    async fn insert(&self, id: Uuid, input: &VolunteerPostInput) -> Result<()> {
        let now = format_timestamp(Utc::now());

        sqlx::query(
            r#"
            INSERT INTO volunteers (
                id, organizer_email, organizer_name, post_title, post_title_search, category,
                deadline, no_of_volunteers_needed, location, description, thumbnail,
                created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id.to_string())
        .bind(&input.organizer_email)
        .bind(&input.organizer_name)
        .bind(&input.post_title)
        .bind(fold_title(&input.post_title))
        .bind(&input.category)
        .bind(format_timestamp(input.deadline))
        .bind(input.no_of_volunteers_needed)
        .bind(&input.location)
        .bind(&input.description)
        .bind(&input.thumbnail)
        .bind(&now)
        .bind(&now)
        .execute(self.pool)
        .await
        .context("Failed to insert volunteer post")?;

        Ok(())
    }
}

/// Unicode case folding shared by stored titles and search terms
fn fold_title(title: &str) -> String {
    title.to_lowercase()
}

fn row_to_post(row: VolunteerPostRow) -> VolunteerPost {
    VolunteerPost {
        id: parse_db_uuid(&row.id),
        organizer_email: row.organizer_email,
        organizer_name: row.organizer_name,
        post_title: row.post_title,
        category: row.category,
        deadline: parse_db_timestamp(&row.deadline),
        no_of_volunteers_needed: row.no_of_volunteers_needed,
        location: row.location,
        description: row.description,
        thumbnail: row.thumbnail,
        created_at: parse_db_timestamp(&row.created_at),
        updated_at: parse_db_timestamp(&row.updated_at),
    }
}
