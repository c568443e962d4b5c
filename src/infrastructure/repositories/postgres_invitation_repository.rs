use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::postgres_team_repository::team_from_row;
use super::postgres_user_repository::user_from_row;
use crate::domain::invitation::Invitation;
use crate::domain::repositories::InvitationRepository;

/// Invitation columns joined with the team and invitee they reference
const SELECT_INVITATIONS: &str = r#"
    SELECT
        i.id, i.created_at,
        t.id AS team_id, t.name AS team_name,
        t.owner_id AS team_owner_id, t.created_at AS team_created_at,
        u.id AS user_id, u.email AS user_email, u.team_id AS user_team_id,
        u.invited AS user_invited, u.created_at AS user_created_at
    FROM invitations i
    JOIN teams t ON t.id = i.team_id
    JOIN users u ON u.id = i.user_id
"#;

/// PostgreSQL implementation of InvitationRepository
pub struct PostgresInvitationRepository {
    pool: PgPool,
}

impl PostgresInvitationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn invitation_from_row(row: &PgRow) -> Result<Invitation, String> {
    let decode = |e: sqlx::Error| format!("Failed to decode invitation row: {}", e);

    Ok(Invitation::from_persistence(
        row.try_get("id").map_err(decode)?,
        team_from_row(row, "team_")?,
        user_from_row(row, "user_")?,
        row.try_get("created_at").map_err(decode)?,
    ))
}

#[async_trait]
impl InvitationRepository for PostgresInvitationRepository {
    async fn save(&self, invitation: &Invitation) -> Result<(), String> {
        let (team, user) = match (invitation.team(), invitation.user()) {
            (Some(team), Some(user)) => (team, user),
            _ => return Err(format!("Invitation {} is invalid", invitation.id())),
        };

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| format!("Failed to start transaction: {}", e))?;

        sqlx::query(
            r#"
            INSERT INTO invitations (id, team_id, user_id, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET
                team_id = EXCLUDED.team_id,
                user_id = EXCLUDED.user_id
            "#,
        )
        .bind(invitation.id())
        .bind(team.id())
        .bind(user.id())
        .bind(invitation.created_at())
        .execute(&mut *tx)
        .await
        .map_err(|e| format!("Failed to save invitation: {}", e))?;

        let result = sqlx::query("UPDATE users SET invited = TRUE WHERE id = $1")
            .bind(user.id())
            .execute(&mut *tx)
            .await
            .map_err(|e| format!("Failed to mark user as invited: {}", e))?;

        if result.rows_affected() == 0 {
            return Err(format!("User not found: {}", user.id()));
        }

        tx.commit()
            .await
            .map_err(|e| format!("Failed to commit invitation: {}", e))?;

        tracing::debug!(invitation_id = %invitation.id(), "invitation saved");
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Invitation>, String> {
        let query = format!("{} WHERE i.id = $1", SELECT_INVITATIONS);
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| format!("Failed to find invitation by id: {}", e))?;

        row.map(|r| invitation_from_row(&r)).transpose()
    }

    async fn find_by_team(&self, team_id: Uuid) -> Result<Vec<Invitation>, String> {
        let query = format!(
            "{} WHERE i.team_id = $1 ORDER BY i.created_at ASC",
            SELECT_INVITATIONS
        );
        let rows = sqlx::query(&query)
            .bind(team_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| format!("Failed to find invitations by team: {}", e))?;

        rows.iter().map(invitation_from_row).collect()
    }
}
