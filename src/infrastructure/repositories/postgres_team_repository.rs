use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::repositories::TeamRepository;
use crate::domain::team::Team;

/// PostgreSQL implementation of TeamRepository
///
/// Provides persistence for Team aggregates using SQLx against PostgreSQL.
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Creates a new PostgresTeamRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Maps a `teams` row onto a [`Team`]
pub(crate) fn team_from_row(row: &PgRow, prefix: &str) -> Result<Team, String> {
    let column = |name: &str| format!("{}{}", prefix, name);
    let decode = |e: sqlx::Error| format!("Failed to decode team row: {}", e);

    Ok(Team::from_persistence(
        row.try_get(column("id").as_str()).map_err(decode)?,
        row.try_get(column("name").as_str()).map_err(decode)?,
        row.try_get(column("owner_id").as_str()).map_err(decode)?,
        row.try_get(column("created_at").as_str()).map_err(decode)?,
    ))
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn save(&self, team: &Team) -> Result<(), String> {
        sqlx::query(
            r#"
            INSERT INTO teams (id, name, owner_id, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name
            "#,
        )
        .bind(team.id())
        .bind(team.name())
        .bind(team.owner_id())
        .bind(team.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to save team: {}", e))?;

        tracing::debug!(team_id = %team.id(), "team saved");
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, String> {
        let row = sqlx::query(
            r#"
            SELECT id, name, owner_id, created_at
            FROM teams
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find team by id: {}", e))?;

        row.map(|r| team_from_row(&r, "")).transpose()
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Team>, String> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, owner_id, created_at
            FROM teams
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to find teams by owner: {}", e))?;

        rows.iter().map(|r| team_from_row(r, "")).collect()
    }
}
