use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::application::InvitationService;
use crate::domain::user::{Email, User};

/// Request body for creating a user
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: Option<String>,
    pub team_id: Option<Uuid>,
    pub invited: bool,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            email: user.email().map(|email| email.to_string()),
            team_id: user.team_id(),
            invited: user.is_invited(),
        }
    }
}

/// Create a new user
///
/// POST /api/users
pub async fn create_user(
    State(service): State<InvitationService>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let email = req
        .email
        .map(Email::new)
        .transpose()
        .map_err(ApiError::bad_request)?;

    let user = service
        .register_user(email)
        .await
        .map_err(ApiError::unprocessable_entity)?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// Get a user by ID
///
/// GET /api/users/:id
pub async fn get_user(
    State(service): State<InvitationService>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = service
        .find_user(id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::not_found(format!("User not found: {}", id)))?;

    Ok(Json(UserResponse::from(&user)))
}
