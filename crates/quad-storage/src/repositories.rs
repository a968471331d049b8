// Database handle and the event repository methods

use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::*;

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to Postgres and wrap the pool
    pub async fn from_url(database_url: &str) -> Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Apply pending schema migrations
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!().run(&self.pool).await?;
        tracing::info!("Database migrations applied");
        Ok(())
    }

    // ============================================
    // Events
    // ============================================

    pub async fn create_event(&self, input: CreateEvent) -> Result<EventRow> {
        // UUIDv7 keys order by creation time
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            INSERT INTO events (id, title, club, location, starts_at, ends_at, tags, current_attendees, creator_id, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, 'scheduled')
            RETURNING id, title, club, location, starts_at, ends_at, tags, current_attendees, status, creator_id, created_at, updated_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&input.title)
        .bind(&input.club)
        .bind(&input.location)
        .bind(input.starts_at)
        .bind(input.ends_at)
        .bind(&input.tags)
        .bind(input.current_attendees)
        .bind(&input.creator_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_event(&self, id: Uuid) -> Result<Option<EventRow>> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, title, club, location, starts_at, ends_at, tags, current_attendees, status, creator_id, created_at, updated_at
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn list_events(&self, status: Option<&str>) -> Result<Vec<EventRow>> {
        let rows = if let Some(status) = status {
            sqlx::query_as::<_, EventRow>(
                r#"
                SELECT id, title, club, location, starts_at, ends_at, tags, current_attendees, status, creator_id, created_at, updated_at
                FROM events
                WHERE status = $1
                ORDER BY starts_at ASC
                "#,
            )
            .bind(status)
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as::<_, EventRow>(
                r#"
                SELECT id, title, club, location, starts_at, ends_at, tags, current_attendees, status, creator_id, created_at, updated_at
                FROM events
                ORDER BY starts_at ASC
                "#,
            )
            .fetch_all(&self.pool)
            .await?
        };

        Ok(rows)
    }

    pub async fn update_event(&self, id: Uuid, input: UpdateEvent) -> Result<Option<EventRow>> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            UPDATE events
            SET
                title = COALESCE($2, title),
                club = COALESCE($3, club),
                location = COALESCE($4, location),
                starts_at = COALESCE($5, starts_at),
                ends_at = COALESCE($6, ends_at),
                tags = COALESCE($7, tags),
                current_attendees = COALESCE($8, current_attendees),
                status = COALESCE($9, status),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, club, location, starts_at, ends_at, tags, current_attendees, status, creator_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.club)
        .bind(&input.location)
        .bind(input.starts_at)
        .bind(input.ends_at)
        .bind(&input.tags)
        .bind(input.current_attendees)
        .bind(&input.status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn delete_event(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
