// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};

use crate::application::InvitationService;
use handlers::{health, invitations, teams, users};

/// Builds the application router without transport middleware
pub fn router(service: InvitationService) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/users", post(users::create_user))
        .route("/api/users/:id", get(users::get_user))
        .route("/api/teams", post(teams::create_team))
        .route("/api/teams/:id", get(teams::get_team))
        .route(
            "/api/teams/:id/invitations",
            get(invitations::get_invitations_by_team),
        )
        .route("/api/invitations", post(invitations::create_invitation))
        .route("/api/invitations/:id", get(invitations::get_invitation))
        .with_state(service)
}
