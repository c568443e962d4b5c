use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::repositories::UserRepository;
use crate::domain::user::{Email, User};

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new PostgresUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Maps a `users` row onto a [`User`]
pub(crate) fn user_from_row(row: &PgRow, prefix: &str) -> Result<User, String> {
    let column = |name: &str| format!("{}{}", prefix, name);
    let decode = |e: sqlx::Error| format!("Failed to decode user row: {}", e);

    let email: Option<String> = row.try_get(column("email").as_str()).map_err(decode)?;
    let email = email
        .map(Email::new)
        .transpose()
        .map_err(|e| format!("Invalid email from database: {}", e))?;

    Ok(User::from_persistence(
        row.try_get(column("id").as_str()).map_err(decode)?,
        email,
        row.try_get(column("team_id").as_str()).map_err(decode)?,
        row.try_get(column("invited").as_str()).map_err(decode)?,
        row.try_get(column("created_at").as_str()).map_err(decode)?,
    ))
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn save(&self, user: &User) -> Result<(), String> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, team_id, invited, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE SET
                email = EXCLUDED.email,
                team_id = EXCLUDED.team_id,
                invited = EXCLUDED.invited
            "#,
        )
        .bind(user.id())
        .bind(user.email().map(Email::as_str))
        .bind(user.team_id())
        .bind(user.is_invited())
        .bind(user.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to save user: {}", e))?;

        tracing::debug!(user_id = %user.id(), invited = user.is_invited(), "user saved");
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, String> {
        let row = sqlx::query(
            r#"
            SELECT id, email, team_id, invited, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find user by id: {}", e))?;

        row.map(|r| user_from_row(&r, "")).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, String> {
        let row = sqlx::query(
            r#"
            SELECT id, email, team_id, invited, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find user by email: {}", e))?;

        row.map(|r| user_from_row(&r, "")).transpose()
    }
}
