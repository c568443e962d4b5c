use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::application::InvitationService;
use crate::domain::team::Team;

/// Request body for creating a team
#[derive(Debug, Deserialize)]
pub struct CreateTeamRequest {
    pub name: String,
    pub owner_id: Uuid,
}

/// Response from team creation
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: Uuid,
    pub name: String,
    pub owner_id: Uuid,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id(),
            name: team.name().to_string(),
            owner_id: team.owner_id(),
        }
    }
}

/// Create a new team owned by an existing user
///
/// POST /api/teams
pub async fn create_team(
    State(service): State<InvitationService>,
    Json(req): Json<CreateTeamRequest>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    if req.name.trim().is_empty() {
        return Err(ApiError::bad_request("Team name cannot be empty"));
    }

    let (team, _events) = service
        .create_team(req.name, req.owner_id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to save team: {}", e)))?
        .ok_or_else(|| ApiError::not_found(format!("User not found: {}", req.owner_id)))?;

    Ok((StatusCode::CREATED, Json(TeamResponse::from(&team))))
}

/// Get a team by ID
///
/// GET /api/teams/:id
pub async fn get_team(
    State(service): State<InvitationService>,
    Path(id): Path<Uuid>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = service
        .find_team(id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::not_found(format!("Team not found: {}", id)))?;

    Ok(Json(TeamResponse::from(&team)))
}
