use crate::domain::team::Team;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository trait for Team aggregate
///
/// Defines the contract for persisting and retrieving teams.
/// Implementations should handle database-specific details.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Save a team (insert or update)
    async fn save(&self, team: &Team) -> Result<(), String>;

    /// Find a team by its ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, String>;

    /// Find all teams owned by a user
    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Team>, String>;
}
