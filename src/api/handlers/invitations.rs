use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::application::InvitationService;
use crate::domain::invitation::{Invitation, InvitationStatus};

/// Request body for inviting a user to a team
#[derive(Debug, Deserialize)]
pub struct CreateInvitationRequest {
    pub team_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct InvitationResponse {
    pub id: Uuid,
    pub team_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub status: InvitationStatus,
    pub event_log_statement: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Invitation> for InvitationResponse {
    fn from(invitation: &Invitation) -> Self {
        Self {
            id: invitation.id(),
            team_id: invitation.team().map(|team| team.id()),
            user_id: invitation.user().map(|user| user.id()),
            status: invitation.status(),
            event_log_statement: invitation.event_log_statement(),
            created_at: invitation.created_at(),
        }
    }
}

/// Invite a user to a team
///
/// POST /api/invitations
pub async fn create_invitation(
    State(service): State<InvitationService>,
    Json(req): Json<CreateInvitationRequest>,
) -> Result<(StatusCode, Json<InvitationResponse>), ApiError> {
    let invitation = service.invite(req.team_id, req.user_id).await?;

    Ok((StatusCode::CREATED, Json(InvitationResponse::from(&invitation))))
}

/// Get an invitation by ID
///
/// GET /api/invitations/:id
pub async fn get_invitation(
    State(service): State<InvitationService>,
    Path(id): Path<Uuid>,
) -> Result<Json<InvitationResponse>, ApiError> {
    let invitation = service
        .find_invitation(id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::not_found(format!("Invitation not found: {}", id)))?;

    Ok(Json(InvitationResponse::from(&invitation)))
}

/// List the invitations issued by a team
///
/// GET /api/teams/:id/invitations
pub async fn get_invitations_by_team(
    State(service): State<InvitationService>,
    Path(team_id): Path<Uuid>,
) -> Result<Json<Vec<InvitationResponse>>, ApiError> {
    let invitations = service
        .invitations_for_team(team_id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    Ok(Json(invitations.iter().map(InvitationResponse::from).collect()))
}
